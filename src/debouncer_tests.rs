//! Tests for Debouncer

use super::*;
use proptest::prelude::*;

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

#[test]
fn test_new_debouncer_is_idle() {
    let mut debouncer = Debouncer::from_millis(500);
    assert!(!debouncer.is_pending());
    assert!(!debouncer.fire(Instant::now()));
}

#[test]
fn test_fires_after_interval() {
    let start = Instant::now();
    let mut debouncer = Debouncer::from_millis(500);
    debouncer.schedule(start);

    assert!(!debouncer.fire(start + ms(499)));
    assert!(debouncer.fire(start + ms(500)));
}

#[test]
fn test_fires_only_once() {
    let start = Instant::now();
    let mut debouncer = Debouncer::from_millis(100);
    debouncer.schedule(start);

    assert!(debouncer.fire(start + ms(150)));
    assert!(!debouncer.fire(start + ms(300)));
    assert!(!debouncer.is_pending());
}

#[test]
fn test_reschedule_pushes_deadline_back() {
    let start = Instant::now();
    let mut debouncer = Debouncer::from_millis(500);
    debouncer.schedule(start);
    debouncer.schedule(start + ms(400));

    assert!(!debouncer.fire(start + ms(600)));
    assert!(debouncer.fire(start + ms(900)));
}

#[test]
fn test_cancel_prevents_firing() {
    let start = Instant::now();
    let mut debouncer = Debouncer::from_millis(100);
    debouncer.schedule(start);
    debouncer.cancel();

    assert!(!debouncer.fire(start + ms(1000)));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // However the edits are spaced, the timer fires once, one interval after the last edit
    #[test]
    fn prop_burst_collapses_to_single_firing(gaps in prop::collection::vec(0u64..499, 1..20)) {
        let start = Instant::now();
        let mut debouncer = Debouncer::from_millis(500);
        let mut now = start;
        let mut fired = 0;

        debouncer.schedule(now);
        for gap in &gaps {
            now += ms(*gap);
            if debouncer.fire(now) {
                fired += 1;
            }
            debouncer.schedule(now);
        }

        prop_assert_eq!(fired, 0);
        prop_assert!(!debouncer.fire(now + ms(499)));
        prop_assert!(debouncer.fire(now + ms(500)));
    }
}
