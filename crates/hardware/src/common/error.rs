//! Error definitions.
//!
//! The fetch core has a single architectural fault, the instruction access
//! fault, and it travels in-band on [`FetchedInstruction`](crate::core::pipeline::latches::FetchedInstruction)
//! records. The types here cover the host-side failures instead:
//! 1. **Configuration:** Malformed JSON or parameter combinations the controllers cannot honor.
//! 2. **Control Calls:** Resume requests issued while the controller cannot accept them.
//! 3. **Simulation:** Bounded runs that never reach their stop condition.

use thiserror::Error;

/// Errors raised while loading or validating a [`Config`](crate::config::Config).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The JSON document could not be deserialized.
    #[error("failed to parse fetch configuration: {0}")]
    Parse(#[from] serde_json::Error),

    /// The start PC has bits set above the configured address width.
    #[error("start pc {pc:#x} does not fit in {bits} address bits")]
    StartPcOutOfRange {
        /// Offending start address.
        pc: u64,
        /// Configured address width.
        bits: u32,
    },

    /// The start PC is not aligned for the selected fetch variant.
    #[error("start pc {pc:#x} is not {alignment}-byte aligned")]
    MisalignedStartPc {
        /// Offending start address.
        pc: u64,
        /// Required alignment in bytes.
        alignment: u64,
    },

    /// The fetch target queue was configured with no slots.
    #[error("fetch target queue depth must be non-zero")]
    ZeroQueueDepth,

    /// The request limiter was configured with no slots.
    #[error("in-flight request capacity must be non-zero")]
    ZeroInflight,

    /// The basic fetcher cannot track more requests than its queue holds.
    #[error("in-flight capacity {inflight} exceeds fetch target queue depth {depth}")]
    InflightExceedsQueue {
        /// Requested in-flight capacity.
        inflight: usize,
        /// Configured queue depth.
        depth: usize,
    },
}

/// Errors returned by the external control calls of a fetch controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FetchError {
    /// `resume` was called while its readiness guard was false.
    #[error("resume not ready (stalled: {stalled}, flushing: {flushing})")]
    ResumeNotReady {
        /// Whether the controller was stalled at the time of the call.
        stalled: bool,
        /// Whether pre-stall requests were still draining.
        flushing: bool,
    },

    /// The resume target cannot start an instruction for this variant.
    #[error("resume target {target:#x} is not {alignment}-byte aligned")]
    MisalignedResumeTarget {
        /// Requested target PC.
        target: u64,
        /// Required alignment in bytes.
        alignment: u64,
    },
}

/// Errors raised by the simulation driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SimError {
    /// A bounded run exhausted its cycle budget.
    #[error("stop condition not reached within {cycles} cycles")]
    CycleLimit {
        /// Cycles executed before giving up.
        cycles: u64,
    },
}
