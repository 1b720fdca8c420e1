//! # Fetch Controller Tests
//!
//! Scenario tests for both controllers, driven through the simulator with a
//! scripted cache, plus property tests over random programs and latencies.



/// Run-time variant selection.
pub mod fetch_unit;
