//! A hosted driver that wires a host clock and stdout sink into a
//! [`tracelog::Instance`] and drives an iteration/event pattern end to end.

use tracelog::{CharSink, TickSource};

tracelog::catalog! {
    layout DemoLayout { ts_shift: 8, ts_max: 0xFF, ts64_mask: 0x80 }
    ITER_START = 0x01,
    ITER_STOP = 0x02,
    SOME_EVENT = 0x03,
    LONG_COMP_BODY = 0x04,
    MSG1 = 0x05,
    MSG2 = 0x06,
    MSG3 = 0x07,
}

/// A monotonic clock backed by `std::time::Instant`, in microseconds since
/// the first read.
struct StdClock {
    origin: std::sync::OnceLock<std::time::Instant>,
}

impl StdClock {
    const fn new() -> Self {
        Self {
            origin: std::sync::OnceLock::new(),
        }
    }
}

impl TickSource for StdClock {
    fn now(&mut self) -> u64 {
        let origin = *self.origin.get_or_init(std::time::Instant::now);
        std::time::Instant::now().duration_since(origin).as_micros() as u64
    }
}

/// Writes straight to stdout, one byte at a time.
struct StdoutSink;

impl CharSink for StdoutSink {
    fn put_char(&mut self, byte: u8) {
        use std::io::Write;
        let _ = std::io::stdout().write_all(&[byte]);
    }
}

tracelog::instance!(LOG, DemoLayout, StdClock, 256, StdClock::new());

fn some_event() {
    LOG.borrow_mut().add(&[SOME_EVENT]);
}

fn long_comp() {
    LOG.borrow_mut().add(&[1, LONG_COMP_BODY]);

    // Busy work standing in for the original's `for (i=0; i<1000000ULL; i++);`.
    let mut acc = 0u64;
    for i in 0..1_000_000u64 {
        acc = acc.wrapping_add(i);
    }
    std::hint::black_box(acc);

    LOG.borrow_mut().add(&[0, LONG_COMP_BODY]);
}

fn misc() {
    LOG.borrow_mut().add(&[1, 111, MSG1]);
    LOG.borrow_mut().add(&[1, 221, MSG2]);
    LOG.borrow_mut().add(&[1, 331, MSG3]);
    // ...
    LOG.borrow_mut().add(&[0, 330, MSG3]);
    LOG.borrow_mut().add(&[0, 220, MSG2]);
    LOG.borrow_mut().add(&[0, 110, MSG1]);
}

fn main() {
    LOG.borrow_mut().set_enable(true);

    for _ in (1..=100).rev() {
        LOG.borrow_mut().add(&[ITER_START]); // marks the start of an iteration
        some_event();
        long_comp();
        misc();
        LOG.borrow_mut().add(&[ITER_STOP]); // marks the end of an iteration
    }

    let mut sink = StdoutSink;
    LOG.borrow_mut().dump(&mut sink, 0);
}
