//! Fetch Front-End Interfaces.
//!
//! This module defines the two collaborators a fetch controller talks to. It provides:
//! 1. **Instruction Cache Interface:** Request issue and in-order response consumption.
//! 2. **Instruction Sink Interface:** The downstream consumer of fetched instructions.

use super::latches::{CacheResponse, FetchedInstruction};

/// Instruction cache as seen from the fetch controller.
///
/// Responses must come back in the order the requests were admitted. The
/// controller never cancels a request; it discards stale responses itself.
pub trait InstructionCache {
    /// Returns `true` if a request would be admitted this cycle.
    fn can_issue(&self) -> bool;

    /// Submits a request for the fetch block at `addr`.
    ///
    /// # Returns
    ///
    /// `true` if the cache admitted the request.
    fn issue_request(&mut self, addr: u64) -> bool;

    /// Consumes the oldest pending response, if one is available.
    fn accept_response(&mut self) -> Option<CacheResponse>;

    /// Advances the cache by one cycle.
    fn tick(&mut self) {}
}

/// Downstream consumer of fetched instructions (the "continuation").
pub trait InstructionSink {
    /// Accepts one fetched instruction. Called at most once per cycle.
    fn deliver(&mut self, inst: FetchedInstruction);
}

impl InstructionSink for Vec<FetchedInstruction> {
    fn deliver(&mut self, inst: FetchedInstruction) {
        self.push(inst);
    }
}

impl<S: InstructionSink + ?Sized> InstructionSink for &mut S {
    fn deliver(&mut self, inst: FetchedInstruction) {
        (**self).deliver(inst);
    }
}
