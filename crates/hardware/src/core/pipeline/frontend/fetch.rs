//! Basic Fetch Controller.
//!
//! Fetches fixed-width (32-bit) instructions from an aligned, sequentially
//! advancing PC. Every request is recorded in the fetch target queue together
//! with the controller's current generation; a stall starts a new one, so
//! responses to requests issued before the stall are recognised as stale and
//! dropped when they arrive.

use tracing::{debug, trace, warn};

use super::{ControlRequests, FetchFrontend, ResumeRequest, StallCause};
use crate::common::Xlen;
use crate::common::constants::INSTRUCTION_SIZE_32;
use crate::common::error::FetchError;
use crate::config::Config;
use crate::core::pipeline::latches::{CacheResponse, FetchTarget, FetchedInstruction, Generation};
use crate::core::pipeline::traits::{InstructionCache, InstructionSink};
use crate::core::units::{FetchTargetQueue, RequestLimiter};
use crate::isa;
use crate::stats::FetchStats;

/// Clocked state of the basic fetcher.
#[derive(Debug, Clone, Copy)]
struct FetchRegs {
    /// Address of the next request.
    speculative_pc: u64,
    /// PC of the last delivered (non-faulting) instruction.
    last_pc: u64,
    stalled_unsafe: bool,
    stalled_exception: bool,
    /// Current generation tag.
    generation: Generation,
}

impl FetchRegs {
    const fn stalled(&self) -> bool {
        self.stalled_unsafe || self.stalled_exception
    }
}

/// Simple fetch unit with one fixed instruction size.
#[derive(Debug, Clone)]
pub struct Fetch {
    regs: FetchRegs,
    xlen: Xlen,
    ftq: FetchTargetQueue,
    limiter: RequestLimiter,
    requests: ControlRequests,
    stats: FetchStats,
}

impl Fetch {
    /// Creates a basic fetcher from an already validated configuration.
    pub fn new(config: &Config) -> Self {
        let start_pc = config.general.start_pc;
        Self {
            regs: FetchRegs {
                speculative_pc: start_pc,
                last_pc: 0,
                stalled_unsafe: false,
                stalled_exception: false,
                generation: Generation::default(),
            },
            xlen: config.general.xlen,
            ftq: FetchTargetQueue::new(config.fetch.fetch_target_queue_depth),
            limiter: RequestLimiter::new(config.fetch.inflight()),
            requests: ControlRequests::default(),
            stats: FetchStats::default(),
        }
    }

    /// Address the next request will be issued for.
    pub const fn speculative_pc(&self) -> u64 {
        self.regs.speculative_pc
    }

    /// Current generation tag.
    pub const fn generation(&self) -> Generation {
        self.regs.generation
    }

    /// Requests tracked by the fetch target queue.
    pub const fn queue_len(&self) -> usize {
        self.ftq.len()
    }

    /// Returns `true` while an exception stall is in effect.
    pub const fn is_stalled_exception(&self) -> bool {
        self.regs.stalled_exception
    }

    /// Returns `true` while an unsafe-instruction stall is in effect.
    pub const fn is_stalled_unsafe(&self) -> bool {
        self.regs.stalled_unsafe
    }

    /// Raises a stall; the first stall cause also starts a new generation.
    fn raise_stall(&mut self, prev: &FetchRegs, next: &mut FetchRegs, cause: StallCause) {
        match cause {
            StallCause::Unsafe => {
                next.stalled_unsafe = true;
                self.stats.unsafe_stalls += 1;
            }
            StallCause::Exception => {
                next.stalled_exception = true;
                self.stats.exception_stalls += 1;
            }
        }
        if !prev.stalled() {
            next.generation = prev.generation.next();
            debug!(?cause, generation = next.generation.value(), "fetch stalled, new generation");
        }
    }

    /// Handles one response matched with its queue entry.
    fn consume<S>(
        &mut self,
        target: FetchTarget,
        resp: CacheResponse,
        prev: &FetchRegs,
        next: &mut FetchRegs,
        sink: &mut S,
    ) where
        S: InstructionSink + ?Sized,
    {
        self.stats.responses_consumed += 1;

        if target.generation != prev.generation {
            self.stats.stale_responses_discarded += 1;
            debug!("F   pc={:#x} # stale response discarded", target.addr);
            return;
        }

        let record = if resp.fault {
            self.raise_stall(prev, next, StallCause::Unsafe);
            self.stats.access_faults += 1;
            warn!("F   pc={:#x} # instruction access fault", target.addr);
            FetchedInstruction {
                inst: 0,
                pc: target.addr,
                access_fault: true,
                compressed: false,
            }
        } else {
            if isa::is_unsafe(resp.data) {
                self.raise_stall(prev, next, StallCause::Unsafe);
            }
            next.last_pc = target.addr;
            trace!("F   pc={:#x} inst={:#010x}", target.addr, resp.data);
            FetchedInstruction {
                inst: resp.data,
                pc: target.addr,
                access_fault: false,
                compressed: false,
            }
        };

        self.stats.instructions_delivered += 1;
        sink.deliver(record);
    }
}

impl FetchFrontend for Fetch {
    fn tick<C, S>(&mut self, icache: &mut C, sink: &mut S)
    where
        C: InstructionCache + ?Sized,
        S: InstructionSink + ?Sized,
    {
        let prev = self.regs;
        let mut next = prev;

        // Guards see the committed state only.
        let can_issue = !prev.stalled() && !self.ftq.is_full() && self.limiter.is_available();
        let (resume, stall_exception) = self.requests.arbitrate();

        self.stats.cycles += 1;
        if prev.stalled() {
            self.stats.stall_cycles += 1;
        }

        if let Some(&target) = self.ftq.front()
            && let Some(resp) = icache.accept_response()
        {
            let _ = self.ftq.pop();
            self.limiter.release();
            self.consume(target, resp, &prev, &mut next, sink);
        }

        if can_issue && icache.can_issue() && icache.issue_request(prev.speculative_pc) {
            let pushed = self.ftq.push(FetchTarget {
                addr: prev.speculative_pc,
                generation: prev.generation,
            });
            debug_assert!(pushed, "fetch target queue overrun");
            self.limiter.acquire();
            self.stats.requests_issued += 1;
            trace!("F   req={:#x}", prev.speculative_pc);
            next.speculative_pc = self.xlen.advance(prev.speculative_pc, INSTRUCTION_SIZE_32);
        }

        if stall_exception {
            self.raise_stall(&prev, &mut next, StallCause::Exception);
        }

        if let Some(ResumeRequest { pc, from_exception }) = resume {
            next.speculative_pc = pc;
            next.stalled_unsafe = false;
            if from_exception {
                next.stalled_exception = false;
            }
            self.stats.resumes += 1;
            debug!(from_exception, "fetch resumed at {:#x}", pc);
        }

        self.regs = next;
    }

    fn resume(&mut self, pc: u64, from_exception: bool) -> Result<(), FetchError> {
        if !self.can_resume() {
            return Err(FetchError::ResumeNotReady {
                stalled: self.is_stalled(),
                flushing: false,
            });
        }
        if pc % INSTRUCTION_SIZE_32 != 0 {
            return Err(FetchError::MisalignedResumeTarget {
                target: pc,
                alignment: INSTRUCTION_SIZE_32,
            });
        }
        self.requests.request_resume(ResumeRequest {
            pc: pc & self.xlen.mask(),
            from_exception,
        });
        Ok(())
    }

    fn stall_exception(&mut self) {
        self.requests.request_stall_exception();
    }

    fn can_resume(&self) -> bool {
        self.regs.stalled()
    }

    fn is_stalled(&self) -> bool {
        self.regs.stalled()
    }

    fn last_pc(&self) -> u64 {
        self.regs.last_pc
    }

    fn outstanding(&self) -> usize {
        self.limiter.count()
    }

    fn stats(&self) -> &FetchStats {
        &self.stats
    }
}
