//! Fetch statistics collection and reporting.
//!
//! This module tracks performance metrics for a fetch controller. It provides:
//! 1. **Throughput:** Cycles, issued requests, consumed responses, and delivered instructions.
//! 2. **Encoding mix:** How many delivered instructions were compressed.
//! 3. **Redirection:** Stale and flushed responses, stalls, and resumes.
//! 4. **Faults:** Instruction access faults reported by the cache.

use std::fmt;

/// Fetch statistics structure tracking all front-end metrics.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FetchStats {
    /// Total cycles the controller was ticked.
    pub cycles: u64,
    /// Cache requests admitted.
    pub requests_issued: u64,
    /// Cache responses popped (live, stale, or flushed).
    pub responses_consumed: u64,
    /// Responses dropped because their generation tag was out of date.
    pub stale_responses_discarded: u64,
    /// Responses dropped while draining requests issued before a stall.
    pub flushed_responses: u64,
    /// Records handed to the consumer, faults included.
    pub instructions_delivered: u64,
    /// Delivered records that were compressed instructions.
    pub compressed_delivered: u64,
    /// Delivered records carrying an access fault.
    pub access_faults: u64,
    /// Stalls raised by an unsafe instruction or a fault.
    pub unsafe_stalls: u64,
    /// Stalls raised by an external exception report.
    pub exception_stalls: u64,
    /// Resume calls that took effect.
    pub resumes: u64,
    /// Cycles spent with request issue suspended.
    pub stall_cycles: u64,
}

impl FetchStats {
    /// Fraction of delivered instructions that were compressed.
    pub fn compressed_ratio(&self) -> f64 {
        if self.instructions_delivered == 0 {
            0.0
        } else {
            self.compressed_delivered as f64 / self.instructions_delivered as f64
        }
    }

    /// Delivered instructions per cycle.
    pub fn delivery_rate(&self) -> f64 {
        if self.cycles == 0 {
            0.0
        } else {
            self.instructions_delivered as f64 / self.cycles as f64
        }
    }
}

impl fmt::Display for FetchStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "==========================================================")?;
        writeln!(f, "INSTRUCTION FETCH STATISTICS")?;
        writeln!(f, "==========================================================")?;
        writeln!(f, "fetch_cycles             {}", self.cycles)?;
        writeln!(f, "fetch_delivered          {}", self.instructions_delivered)?;
        writeln!(f, "fetch_rate               {:.4}", self.delivery_rate())?;
        writeln!(f, "fetch_compressed         {}", self.compressed_delivered)?;
        writeln!(f, "fetch_compressed_ratio   {:.4}", self.compressed_ratio())?;
        writeln!(f, "----------------------------------------------------------")?;
        writeln!(f, "icache_requests          {}", self.requests_issued)?;
        writeln!(f, "icache_responses         {}", self.responses_consumed)?;
        writeln!(f, "icache_stale_discarded   {}", self.stale_responses_discarded)?;
        writeln!(f, "icache_flushed           {}", self.flushed_responses)?;
        writeln!(f, "icache_access_faults     {}", self.access_faults)?;
        writeln!(f, "----------------------------------------------------------")?;
        writeln!(f, "stalls_unsafe            {}", self.unsafe_stalls)?;
        writeln!(f, "stalls_exception         {}", self.exception_stalls)?;
        writeln!(f, "stall_cycles             {}", self.stall_cycles)?;
        write!(f, "resumes                  {}", self.resumes)
    }
}
