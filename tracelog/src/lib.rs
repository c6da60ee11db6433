// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

#![no_std]

//! The instance layer: a process-wide wrapper around
//! [`tracelog_core::TraceLog`] that hooks a [`TickSource`], brackets
//! `add` with a critical section so the timestamp read and the buffer
//! write are indivisible with respect to preemption, and formats a dump
//! through a [`CharSink`].
//!
//! A single log is usually declared once, as a `static`, with the
//! [`instance!`] macro:
//!
//! ```
//! tracelog::catalog! {
//!     layout ExampleLayout { ts_shift: 8, ts_max: 0xFF, ts64_mask: 0x80 }
//!     SOME_EVENT = 0x01,
//! }
//!
//! #[derive(Default)]
//! struct NullTick;
//! impl tracelog::TickSource for NullTick {
//!     fn now(&mut self) -> u64 { 0 }
//! }
//!
//! tracelog::instance!(MY_LOG, ExampleLayout, NullTick, 256, NullTick);
//!
//! MY_LOG.borrow_mut().add(&[SOME_EVENT]);
//! ```

mod catalog;
mod sink;
mod static_cell;
mod tick;

pub use sink::CharSink;
pub use static_cell::{StaticCell, StaticRef};
pub use tick::TickSource;
pub use tracelog_core::{Layout, TraceLog};

/// Owns one log instance, its clock, and bridges `add` to the active
/// critical section.
pub struct Instance<L: Layout, T: TickSource, const N: usize> {
    log: TraceLog<L, N>,
    tick: T,
}

impl<L: Layout, T: TickSource, const N: usize> Instance<L, T, N> {
    /// Builds an instance wrapping `tick`, enabled and ready to capture.
    pub const fn new(tick: T) -> Self {
        Self {
            log: TraceLog::new(),
            tick,
        }
    }

    /// Sets the capture gate directly.
    pub fn set_enable(&mut self, on: bool) {
        self.log.set_enable(on);
    }

    /// See [`TraceLog::start_after_cnt_msgs`].
    pub fn start_after_cnt_msgs(&mut self, n: i32) {
        self.log.start_after_cnt_msgs(n);
    }

    /// See [`TraceLog::stop_after_cnt_capt_msgs`].
    pub fn stop_after_cnt_capt_msgs(&mut self, n: i32) {
        self.log.stop_after_cnt_capt_msgs(n);
    }

    /// See [`TraceLog::set_one_shot`].
    pub fn set_one_shot(&mut self, v: bool) {
        self.log.set_one_shot(v);
    }

    /// Records one event. Reads the clock and calls
    /// [`TraceLog::add`] inside a single critical section, so a
    /// preempting context can never observe a timestamp without the
    /// buffer write that goes with it (or vice versa).
    pub fn add(&mut self, msg: &[u32]) {
        critical_section::with(|_cs| {
            let ts = self.tick.now();
            self.log.add(ts, msg);
        });
    }

    /// Writes a human-readable dump of the log through `sink`.
    ///
    /// `format == 0` prints a header (`cursor=`, `wrapped=`, `enabled=`,
    /// `evnt_cnt=`, `max_entries=`, one per line) followed by the buffer,
    /// newest word first, 8 hex digits per word, 8 words per line. Any
    /// other `format` prints an "unimplemented" marker and the format code
    /// in hex, since this is the only dump layout this crate defines.
    pub fn dump(&self, sink: &mut impl CharSink, format: u32) {
        if format == 0 {
            sink.print("\ncursor=");
            sink.print_dec(self.log.cur() as u32);
            sink.print("\nwrapped=");
            sink.print_dec(self.log.wrapped() as u32);
            sink.print("\nenabled=");
            sink.print_dec(self.log.enabled() as u32);
            sink.print("\nevnt_cnt=");
            sink.print_dec(self.log.cnt());
            sink.print("\nmax_entries=");
            sink.print_dec(self.log.max_entries() as u32);
            sink.print("\n=== Start buffer dump. Most recent first ===");

            self.log.dump_raw(|i, word, _offset| {
                if i % 8 == 0 {
                    sink.put_char(b'\n');
                } else {
                    sink.put_char(b' ');
                }
                sink.print_hex(word);
            });

            sink.println("\n=== End buffer dump ===");
        } else {
            sink.println("\ntracelog: dump format not implemented: ");
            sink.print_hex(format);
            sink.println("");
        }
    }
}

/// Declares a process-wide [`Instance`] as a `static`, behind a
/// [`StaticCell`].
///
/// `instance!(NAME, Layout, TickSource, N, tick_init)` makes a log named
/// `NAME`, with catalog `Layout`, capacity `N` words, whose clock is
/// `tick_init` (a `const`-evaluable expression of type `TickSource`).
#[macro_export]
macro_rules! instance {
    ($name:ident, $layout:ty, $tick:ty, $n:expr, $tick_init:expr) => {
        static $name: $crate::StaticCell<$crate::Instance<$layout, $tick, $n>> =
            $crate::StaticCell::new($crate::Instance::new($tick_init));
    };
}
