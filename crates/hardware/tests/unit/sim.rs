//! Simulator Driver Tests.

use rvfetch_core::Simulator;
use rvfetch_core::common::SimError;
use rvfetch_core::config::FetchVariant;
use rvfetch_core::core::pipeline::frontend::FetchFrontend;
use rvfetch_core::core::pipeline::latches::FetchedInstruction;

use crate::common::harness::{START_PC, config};
use crate::common::mocks::icache::MockICache;

fn simulator(variant: FetchVariant) -> Simulator<MockICache, Vec<FetchedInstruction>> {
    Simulator::from_config(&config(variant, START_PC), MockICache::new(1), Vec::new()).unwrap()
}

#[test]
fn step_advances_fetch_and_cache_together() {
    let mut sim = simulator(FetchVariant::Basic);
    sim.step();
    assert_eq!(sim.cycle(), 1);
    assert_eq!(sim.icache().now(), 1);
    assert_eq!(sim.stats().cycles, 1);
    assert_eq!(sim.icache().requests(), &[START_PC]);
}

#[test]
fn run_executes_exact_cycle_count() {
    let mut sim = simulator(FetchVariant::Unaligned);
    sim.run(10);
    assert_eq!(sim.cycle(), 10);
    assert_eq!(sim.fetch().stats().cycles, 10);
    assert!(!sim.sink().is_empty());
}

#[test]
fn run_until_checks_before_stepping() {
    let mut sim = simulator(FetchVariant::Basic);
    assert_eq!(sim.run_until(|_| true, 5), Ok(0));
    assert_eq!(sim.cycle(), 0);

    let executed = sim.run_until(|s| s.sink().len() >= 2, 100).unwrap();
    assert_eq!(executed, sim.cycle());
    assert_eq!(sim.sink().len(), 2);
}

#[test]
fn run_until_reports_cycle_limit() {
    let mut sim = simulator(FetchVariant::Basic);
    sim.icache_mut().set_blocked(true);
    assert_eq!(
        sim.run_until(|s| !s.sink().is_empty(), 25),
        Err(SimError::CycleLimit { cycles: 25 })
    );
    assert_eq!(sim.cycle(), 25);
}

#[test]
fn control_calls_go_through_fetch_mut() {
    let mut sim = simulator(FetchVariant::Unaligned);
    sim.fetch_mut().stall_exception();
    sim.step();
    assert!(sim.fetch().is_stalled());
}

#[test]
fn into_parts_returns_collaborators() {
    let mut sim = simulator(FetchVariant::Unaligned);
    sim.run(3);
    sim.sink_mut().clear();
    let (fetch, icache, sink) = sim.into_parts();
    assert_eq!(fetch.stats().cycles, 3);
    assert_eq!(icache.now(), 3);
    assert!(sink.is_empty());
}
