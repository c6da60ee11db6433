// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Declares a message catalog: a [`Layout`](crate::Layout) impl plus a set
//! of event id constants. In a generated catalog these would come out of a
//! build script; here, a small `macro_rules!` stands in for the generator,
//! the same way `ringbuf!` stands in for hand-writing a `static` by hand.

/// Declares a timestamp [`Layout`](crate::Layout) and a set of event id
/// constants.
///
/// ```
/// tracelog::catalog! {
///     layout ExampleLayout { ts_shift: 8, ts_max: 0xFF, ts64_mask: 0x80 }
///     ITER_START = 0x01,
///     ITER_STOP = 0x02,
///     SOME_EVENT = 0x03,
/// }
/// ```
#[macro_export]
macro_rules! catalog {
    (
        layout $layout:ident { ts_shift: $shift:expr, ts_max: $max:expr, ts64_mask: $mask:expr }
        $( $id_name:ident = $id_val:expr ),* $(,)?
    ) => {
        #[derive(Clone, Copy)]
        pub struct $layout;

        impl $crate::Layout for $layout {
            const TS_SHIFT: u32 = $shift;
            const TS_MAX: u32 = $max;
            const TS64_MASK: u32 = $mask;
        }

        $(
            pub const $id_name: u32 = $id_val;
        )*
    };
}
