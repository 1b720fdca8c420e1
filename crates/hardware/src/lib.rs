//! RISC-V instruction-fetch front end.
//!
//! This crate implements a cycle-level model of the fetch stage of a pipelined
//! RISC-V core with the following:
//! 1. **Fetch:** A basic fixed-width controller and an unaligned controller with
//!    compressed-instruction reassembly, sharing one stall/resume contract.
//! 2. **ISA:** Opcode classification and the RV32C/RV64C expander.
//! 3. **Units:** The request limiter and the fetch target queue.
//! 4. **Simulation:** Configuration, a cycle driver, and statistics collection.
//!
//! The instruction cache and the downstream consumer are supplied by the
//! caller through [`InstructionCache`](core::pipeline::traits::InstructionCache)
//! and [`InstructionSink`](core::pipeline::traits::InstructionSink).

/// Common types and constants (address width, errors, fetch geometry).
pub mod common;
/// Front-end configuration (variant, start PC, queue capacities).
pub mod config;
/// Fetch controllers, latches, and the units they are built from.
pub mod core;
/// Instruction set helpers (opcodes, classification, RVC expansion).
pub mod isa;
/// Cycle-driven simulation harness.
pub mod sim;
/// Fetch statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// Controller interface shared by both fetch variants.
pub use crate::core::pipeline::frontend::FetchFrontend;
/// Fetch controller selected by configuration.
pub use crate::core::FetchUnit;
/// Simulator owning a fetch unit, a cache, and a sink.
pub use crate::sim::Simulator;
