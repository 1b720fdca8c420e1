//! Simulation driver.
//!
//! Wires a fetch controller to an instruction cache and a downstream
//! consumer and advances all of them in lockstep.

/// Cycle-driven simulator.
pub mod simulator;

pub use simulator::Simulator;
