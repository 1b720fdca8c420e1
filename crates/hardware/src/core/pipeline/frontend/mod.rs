//! Fetch controllers.
//!
//! Two controllers share one external contract:
//! - [`Fetch`]: fixed-width instructions, aligned PC, generation-tagged requests.
//! - [`UnalignedFetch`]: mixed 16/32-bit instructions, unaligned PC, half-instruction reassembly.
//!
//! Both are ticked once per cycle. Every guard evaluated in a tick reads the
//! state committed at the end of the previous tick, and all writes of a tick
//! commit together. External control calls (`resume`, `stall_exception`) are
//! latched between ticks and arbitrated inside the next one.

/// Basic fixed-width fetcher.
pub mod fetch;
/// Unaligned fetcher with compressed-instruction support.
pub mod unaligned;

pub use fetch::Fetch;
pub use unaligned::UnalignedFetch;

use crate::common::error::{ConfigError, FetchError};
use crate::config::{Config, FetchVariant};
use crate::core::pipeline::traits::{InstructionCache, InstructionSink};
use crate::stats::FetchStats;

/// Interface shared by the fetch controllers.
pub trait FetchFrontend {
    /// Executes one cycle: consume a response, issue a request, apply control calls.
    fn tick<C, S>(&mut self, icache: &mut C, sink: &mut S)
    where
        C: InstructionCache + ?Sized,
        S: InstructionSink + ?Sized;

    /// Requests a redirection of fetch to `pc`, applied at the next tick.
    ///
    /// Clears the unsafe stall; clears the exception stall too if
    /// `from_exception` is set. A resume latched in the same cycle as an
    /// exception stall wins; the stall is applied one tick later.
    ///
    /// # Errors
    ///
    /// [`FetchError::ResumeNotReady`] if the controller is not stalled (or is
    /// still draining pre-stall requests), [`FetchError::MisalignedResumeTarget`]
    /// if `pc` cannot start an instruction.
    fn resume(&mut self, pc: u64, from_exception: bool) -> Result<(), FetchError>;

    /// Requests an exception stall, applied at the next tick. Always accepted.
    fn stall_exception(&mut self);

    /// Returns `true` if a `resume` call would be accepted this cycle.
    fn can_resume(&self) -> bool;

    /// Returns `true` while request issue is suspended.
    fn is_stalled(&self) -> bool;

    /// PC of the last instruction handed to the consumer.
    fn last_pc(&self) -> u64;

    /// Number of cache requests currently in flight.
    fn outstanding(&self) -> usize;

    /// Accumulated statistics.
    fn stats(&self) -> &FetchStats;
}

/// Redirection requested through `resume`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResumeRequest {
    /// New fetch address.
    pub pc: u64,
    /// Whether the exception stall is cleared as well.
    pub from_exception: bool,
}

/// Why fetch stopped issuing requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StallCause {
    /// An unsafe instruction or an access fault was delivered.
    Unsafe,
    /// An external exception report arrived.
    Exception,
}

/// Control calls latched between two ticks.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct ControlRequests {
    resume: Option<ResumeRequest>,
    stall_exception: bool,
}

impl ControlRequests {
    pub(crate) fn request_resume(&mut self, req: ResumeRequest) {
        self.resume = Some(req);
    }

    pub(crate) fn request_stall_exception(&mut self) {
        self.stall_exception = true;
    }

    /// Picks the calls that fire this cycle.
    ///
    /// Resume and exception stall conflict; resume has priority and a losing
    /// stall request stays latched for the next cycle.
    pub(crate) fn arbitrate(&mut self) -> (Option<ResumeRequest>, bool) {
        match self.resume.take() {
            Some(req) => (Some(req), false),
            None => (None, std::mem::take(&mut self.stall_exception)),
        }
    }
}

/// Fetch controller selected at run time.
#[derive(Debug, Clone)]
pub enum FetchUnit {
    /// Fixed-width fetcher.
    Basic(Fetch),
    /// Unaligned/RVC fetcher.
    Unaligned(UnalignedFetch),
}

impl FetchUnit {
    /// Validates `config` and builds the controller it selects.
    ///
    /// # Errors
    ///
    /// Any [`ConfigError`] reported by [`Config::validate`].
    pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(match config.fetch.variant {
            FetchVariant::Basic => Self::Basic(Fetch::new(config)),
            FetchVariant::Unaligned => Self::Unaligned(UnalignedFetch::new(config)),
        })
    }

    /// Variant of the wrapped controller.
    pub const fn variant(&self) -> FetchVariant {
        match self {
            Self::Basic(_) => FetchVariant::Basic,
            Self::Unaligned(_) => FetchVariant::Unaligned,
        }
    }
}

impl FetchFrontend for FetchUnit {
    fn tick<C, S>(&mut self, icache: &mut C, sink: &mut S)
    where
        C: InstructionCache + ?Sized,
        S: InstructionSink + ?Sized,
    {
        match self {
            Self::Basic(f) => f.tick(icache, sink),
            Self::Unaligned(f) => f.tick(icache, sink),
        }
    }

    fn resume(&mut self, pc: u64, from_exception: bool) -> Result<(), FetchError> {
        match self {
            Self::Basic(f) => f.resume(pc, from_exception),
            Self::Unaligned(f) => f.resume(pc, from_exception),
        }
    }

    fn stall_exception(&mut self) {
        match self {
            Self::Basic(f) => f.stall_exception(),
            Self::Unaligned(f) => f.stall_exception(),
        }
    }

    fn can_resume(&self) -> bool {
        match self {
            Self::Basic(f) => f.can_resume(),
            Self::Unaligned(f) => f.can_resume(),
        }
    }

    fn is_stalled(&self) -> bool {
        match self {
            Self::Basic(f) => f.is_stalled(),
            Self::Unaligned(f) => f.is_stalled(),
        }
    }

    fn last_pc(&self) -> u64 {
        match self {
            Self::Basic(f) => f.last_pc(),
            Self::Unaligned(f) => f.last_pc(),
        }
    }

    fn outstanding(&self) -> usize {
        match self {
            Self::Basic(f) => f.outstanding(),
            Self::Unaligned(f) => f.outstanding(),
        }
    }

    fn stats(&self) -> &FetchStats {
        match self {
            Self::Basic(f) => f.stats(),
            Self::Unaligned(f) => f.stats(),
        }
    }
}
