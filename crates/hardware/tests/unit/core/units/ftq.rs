//! Fetch Target Queue Tests.

use rvfetch_core::core::pipeline::latches::{FetchTarget, Generation};
use rvfetch_core::core::units::FetchTargetQueue;

fn target(addr: u64) -> FetchTarget {
    FetchTarget {
        addr,
        generation: Generation::default(),
    }
}

#[test]
fn empty_queue_has_no_front() {
    let mut ftq = FetchTargetQueue::new(2);
    assert_eq!(ftq.depth(), 2);
    assert!(ftq.is_empty());
    assert!(ftq.front().is_none());
    assert!(ftq.pop().is_none());
}

#[test]
fn keeps_issue_order_across_many_wraps() {
    let mut ftq = FetchTargetQueue::new(2);
    let mut next_pop = 0u64;
    for addr in (0..40).map(|i| i * 4) {
        if ftq.is_full() {
            assert_eq!(ftq.pop().map(|t| t.addr), Some(next_pop));
            next_pop += 4;
        }
        assert!(ftq.push(target(addr)));
        assert!(ftq.len() <= ftq.depth());
    }
    while let Some(t) = ftq.pop() {
        assert_eq!(t.addr, next_pop);
        next_pop += 4;
    }
    assert_eq!(next_pop, 160);
}

#[test]
fn generation_wraps_after_256_stalls() {
    let start = Generation::default();
    let mut generation = start;
    for _ in 0..255 {
        generation = generation.next();
        assert_ne!(generation, start);
    }
    assert_eq!(generation.value(), 255);
    assert_eq!(generation.next(), start);
}
