use tracelog::{CharSink, TickSource};

tracelog::catalog! {
    layout TestLayout { ts_shift: 8, ts_max: 0xFF, ts64_mask: 0x80 }
    EVENT_A = 0x01,
    EVENT_B = 0x02,
}

struct StepTick(u64);
impl TickSource for StepTick {
    fn now(&mut self) -> u64 {
        let v = self.0;
        self.0 += 1;
        v
    }
}

#[derive(Default)]
struct VecSink(std::vec::Vec<u8>);
impl CharSink for VecSink {
    fn put_char(&mut self, byte: u8) {
        self.0.push(byte);
    }
}
impl VecSink {
    fn as_str(&self) -> std::string::String {
        std::string::String::from_utf8_lossy(&self.0).into_owned()
    }
}

type TestInstance = tracelog::Instance<TestLayout, StepTick, 8>;

#[test]
fn add_records_events_under_a_critical_section() {
    let mut inst = TestInstance::new(StepTick(0));
    inst.add(&[EVENT_A]);
    inst.add(&[EVENT_B]);

    let mut sink = VecSink::default();
    inst.dump(&mut sink, 0);
    let out = sink.as_str();

    assert!(out.contains("cursor="));
    assert!(out.contains("wrapped="));
    assert!(out.contains("enabled="));
    assert!(out.contains("evnt_cnt="));
    assert!(out.contains("max_entries="));
    assert!(out.contains("=== Start buffer dump. Most recent first ==="));
    assert!(out.contains("=== End buffer dump ==="));
    // second event's identifier word: EVENT_B with rel_ts=1 in bits [8, ...)
    assert!(out.contains("00000102"));
}

#[test]
fn unimplemented_dump_format_reports_the_code() {
    let mut inst = TestInstance::new(StepTick(0));
    inst.add(&[EVENT_A]);

    let mut sink = VecSink::default();
    inst.dump(&mut sink, 7);
    let out = sink.as_str();

    assert!(out.contains("not implemented"));
    assert!(out.contains("00000007"));
}

#[test]
fn gating_controls_mirror_the_core() {
    let mut inst = TestInstance::new(StepTick(0));
    inst.start_after_cnt_msgs(2);
    inst.add(&[EVENT_A]);
    inst.add(&[EVENT_A]);
    inst.add(&[EVENT_A]);

    let mut sink = VecSink::default();
    inst.dump(&mut sink, 0);
    let out = sink.as_str();
    assert!(out.contains("cursor=1"));
}

#[test]
fn one_shot_freezes_after_first_wrap() {
    let mut inst = TestInstance::new(StepTick(0));
    inst.set_one_shot(true);
    for _ in 0..9 {
        inst.add(&[EVENT_A]);
    }

    let mut before = VecSink::default();
    inst.dump(&mut before, 0);

    inst.add(&[EVENT_B]);

    let mut after = VecSink::default();
    inst.dump(&mut after, 0);

    assert_eq!(before.as_str(), after.as_str());
}
