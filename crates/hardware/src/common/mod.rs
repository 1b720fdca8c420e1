//! Common utilities and types used throughout the fetch core.
//!
//! This module provides the building blocks shared across the controllers:
//! 1. **Constants:** Instruction sizes, encoding masks, and queue capacities.
//! 2. **Error Handling:** Configuration, control-call, and simulation errors.
//! 3. **Address Width:** The `Xlen` type that bounds every program counter.

/// Fetch front-end constants.
pub mod constants;

/// Error types for configuration, control calls, and simulation.
pub mod error;

/// Address-width definitions.
pub mod xlen;

pub use error::{ConfigError, FetchError, SimError};
pub use xlen::Xlen;
