//! Unaligned Fetch Controller.
//!
//! Fetches a mixed stream of 16-bit (RVC) and 32-bit instructions. The cache
//! is always asked for aligned 32-bit blocks while the delivered PC advances
//! by 2 or 4 bytes, so an instruction can start in the upper half of a block
//! or straddle two blocks. It provides:
//! 1. **Two PCs:** `cache_req_pc` walks the block stream, `current_pc` walks the instructions.
//! 2. **Reassembly:** A one-slot half-instruction buffer carries the upper half of a
//!    block into the next cycle.
//! 3. **Draining:** After a stall, `flushing` holds off `resume` until every request
//!    issued before the stall has come back and been dropped.

use tracing::{debug, trace, warn};

use super::{ControlRequests, FetchFrontend, ResumeRequest, StallCause};
use crate::common::Xlen;
use crate::common::constants::{
    FETCH_BLOCK_ALIGN_MASK, FETCH_BLOCK_BYTES, INSTRUCTION_SIZE_16, INSTRUCTION_SIZE_32,
};
use crate::common::error::FetchError;
use crate::config::Config;
use crate::core::pipeline::latches::{CacheResponse, FetchedInstruction};
use crate::core::pipeline::traits::{InstructionCache, InstructionSink};
use crate::core::units::RequestLimiter;
use crate::isa::{self, rvc};
use crate::stats::FetchStats;

/// Half-instruction buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HalfInstruction {
    /// Nothing carried over.
    #[default]
    Empty,
    /// Upper half of the previous block; it starts the next instruction.
    Pending(u16),
}

impl HalfInstruction {
    /// Returns `true` if a half-word is carried over.
    pub const fn is_pending(self) -> bool {
        matches!(self, Self::Pending(_))
    }

    /// Returns `true` if the carried half-word is a complete compressed
    /// instruction, so no cache response is needed to deliver it.
    pub const fn holds_compressed(self) -> bool {
        match self {
            Self::Pending(half) => isa::is_compressed(half),
            Self::Empty => false,
        }
    }
}

/// Clocked state of the unaligned fetcher.
#[derive(Debug, Clone, Copy)]
struct UnalignedRegs {
    /// Address of the next cache request (before block alignment).
    cache_req_pc: u64,
    /// Address of the next instruction to deliver.
    current_pc: u64,
    /// PC of the last delivered instruction.
    last_pc: u64,
    stalled_unsafe: bool,
    stalled_exception: bool,
    /// Pre-stall requests are still in flight.
    flushing: bool,
    half: HalfInstruction,
}

impl UnalignedRegs {
    const fn stalled(&self) -> bool {
        self.stalled_unsafe || self.stalled_exception
    }
}

/// Fetch unit for unaligned and compressed instructions.
#[derive(Debug, Clone)]
pub struct UnalignedFetch {
    regs: UnalignedRegs,
    xlen: Xlen,
    limiter: RequestLimiter,
    requests: ControlRequests,
    stats: FetchStats,
}

impl UnalignedFetch {
    /// Creates an unaligned fetcher from an already validated configuration.
    pub fn new(config: &Config) -> Self {
        let start_pc = config.general.start_pc;
        Self {
            regs: UnalignedRegs {
                cache_req_pc: start_pc,
                current_pc: start_pc,
                last_pc: 0,
                stalled_unsafe: false,
                stalled_exception: false,
                flushing: false,
                half: HalfInstruction::Empty,
            },
            xlen: config.general.xlen,
            limiter: RequestLimiter::new(config.fetch.inflight()),
            requests: ControlRequests::default(),
            stats: FetchStats::default(),
        }
    }

    /// Address of the next instruction to deliver.
    pub const fn current_pc(&self) -> u64 {
        self.regs.current_pc
    }

    /// Address the next cache request is derived from.
    pub const fn cache_req_pc(&self) -> u64 {
        self.regs.cache_req_pc
    }

    /// Returns `true` while requests issued before a stall are draining.
    pub const fn is_flushing(&self) -> bool {
        self.regs.flushing
    }

    /// Returns `true` while an exception stall is in effect.
    pub const fn is_stalled_exception(&self) -> bool {
        self.regs.stalled_exception
    }

    /// Returns `true` while an unsafe-instruction stall is in effect.
    pub const fn is_stalled_unsafe(&self) -> bool {
        self.regs.stalled_unsafe
    }

    /// Contents of the half-instruction buffer.
    pub const fn half_instruction(&self) -> HalfInstruction {
        self.regs.half
    }

    /// Raises a stall and starts draining in-flight requests.
    fn raise_stall(&mut self, next: &mut UnalignedRegs, cause: StallCause) {
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
        next.flushing = true;
        debug!(?cause, inflight = self.limiter.count(), "fetch stalled, flushing");
    }

    /// Consumes at most one response and delivers at most one instruction.
    fn consume<C, S>(
        &mut self,
        prev: &UnalignedRegs,
        next: &mut UnalignedRegs,
        icache: &mut C,
        sink: &mut S,
    ) where
        C: InstructionCache + ?Sized,
        S: InstructionSink + ?Sized,
    {
        let buffered = prev.half;

        // A buffered compressed instruction is delivered without a response.
        let fetching_now = !buffered.holds_compressed();
        let resp = if fetching_now {
            let Some(resp) = icache.accept_response() else {
                return;
            };
            self.limiter.release();
            self.stats.responses_consumed += 1;
            if prev.flushing {
                self.stats.flushed_responses += 1;
            }
            resp
        } else {
            CacheResponse::default()
        };

        let is_unaligned = prev.current_pc & INSTRUCTION_SIZE_16 != 0;
        let upper = resp.upper_half();
        let lower = resp.lower_half();
        let resp_valid = !prev.flushing && !resp.fault;
        let upper_compressed = isa::is_compressed(upper);

        let (first_half, full_inst) = match buffered {
            HalfInstruction::Pending(half) => (half, (u32::from(lower) << 16) | u32::from(half)),
            HalfInstruction::Empty if is_unaligned => (upper, resp.data),
            HalfInstruction::Empty => (lower, resp.data),
        };
        let compressed = isa::is_compressed(first_half);
        let inst = if compressed {
            rvc::expand(first_half, self.xlen)
        } else {
            full_inst
        };

        // An instruction is complete if its first half was buffered, if the
        // block is aligned, or if the upper half alone is a compressed one.
        let ready_to_dispatch = buffered.is_pending() || !is_unaligned || upper_compressed;

        // The upper half starts the next instruction unless this cycle used it.
        let keep_upper = fetching_now
            && resp_valid
            && ((is_unaligned && !upper_compressed)
                || (!is_unaligned && isa::is_compressed(lower))
                || buffered.is_pending());
        next.half = if keep_upper {
            HalfInstruction::Pending(upper)
        } else {
            HalfInstruction::Empty
        };

        let fault = resp.fault;
        if !((resp_valid && ready_to_dispatch) || (fault && !prev.stalled())) {
            return;
        }

        if fault || isa::is_unsafe(inst) {
            self.raise_stall(next, StallCause::Unsafe);
        }

        let pc = prev.current_pc;
        next.last_pc = pc;
        let record = if fault {
            self.stats.access_faults += 1;
            warn!("F   pc={pc:#x} # instruction access fault");
            FetchedInstruction {
                inst: 0,
                pc,
                access_fault: true,
                compressed: false,
            }
        } else {
            let step = if compressed {
                INSTRUCTION_SIZE_16
            } else {
                INSTRUCTION_SIZE_32
            };
            next.current_pc = self.xlen.advance(pc, step);
            if compressed {
                self.stats.compressed_delivered += 1;
            }
            trace!("F   pc={pc:#x} inst={inst:#010x} (sz={step})");
            FetchedInstruction {
                inst,
                pc,
                access_fault: false,
                compressed,
            }
        };

        self.stats.instructions_delivered += 1;
        sink.deliver(record);
    }
}

impl FetchFrontend for UnalignedFetch {
    fn tick<C, S>(&mut self, icache: &mut C, sink: &mut S)
    where
        C: InstructionCache + ?Sized,
        S: InstructionSink + ?Sized,
    {
        let prev = self.regs;
        let mut next = prev;

        // Guards see the committed state only.
        let can_issue = !prev.stalled() && self.limiter.is_available();
        let drained = self.limiter.is_idle();
        let (resume, stall_exception) = self.requests.arbitrate();

        self.stats.cycles += 1;
        if prev.stalled() {
            self.stats.stall_cycles += 1;
        }

        if drained && prev.flushing {
            next.flushing = false;
            debug!("fetch drained");
        }

        self.consume(&prev, &mut next, icache, sink);

        if can_issue && icache.can_issue() {
            let addr = prev.cache_req_pc & FETCH_BLOCK_ALIGN_MASK;
            if icache.issue_request(addr) {
                self.limiter.acquire();
                self.stats.requests_issued += 1;
                trace!("F   req={addr:#x}");
                next.cache_req_pc = self.xlen.advance(prev.cache_req_pc, FETCH_BLOCK_BYTES);
            }
        }

        if stall_exception {
            self.raise_stall(&mut next, StallCause::Exception);
        }

        if let Some(ResumeRequest { pc, from_exception }) = resume {
            next.cache_req_pc = pc;
            next.current_pc = pc;
            next.stalled_unsafe = false;
            if from_exception {
                next.stalled_exception = false;
            }
            next.half = HalfInstruction::Empty;
            self.stats.resumes += 1;
            debug!(from_exception, "fetch resumed at {:#x}", pc);
        }

        self.regs = next;
    }

    fn resume(&mut self, pc: u64, from_exception: bool) -> Result<(), FetchError> {
        if !self.can_resume() {
            return Err(FetchError::ResumeNotReady {
                stalled: self.is_stalled(),
                flushing: self.regs.flushing,
            });
        }
        if pc % INSTRUCTION_SIZE_16 != 0 {
            return Err(FetchError::MisalignedResumeTarget {
                target: pc,
                alignment: INSTRUCTION_SIZE_16,
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
        self.regs.stalled() && !self.regs.flushing
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
