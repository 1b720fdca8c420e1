//! Instruction fetch pipeline.
//!
//! This module contains the front end of the pipeline. It includes the following components:
//! 1. **Frontend:** The basic and unaligned/RVC fetch controllers.
//! 2. **Latches:** Records carried between the controller, its queues, and the consumer.
//! 3. **Traits:** Interfaces to the instruction cache and the downstream consumer.

/// Fetch controllers.
pub mod frontend;

/// Fetch records and queue entries.
pub mod latches;

/// Instruction cache and consumer interfaces.
pub mod traits;
