//! Simulator: owns the fetch unit, the instruction cache, and the consumer.
//!
//! Keeping the three side by side lets each tick hand the controller mutable
//! borrows of its collaborators without any of them owning another.

use tracing::debug;

use crate::common::error::{ConfigError, SimError};
use crate::config::Config;
use crate::core::pipeline::frontend::{FetchFrontend, FetchUnit};
use crate::core::pipeline::traits::{InstructionCache, InstructionSink};
use crate::stats::FetchStats;

/// Top-level simulator: fetch controller plus its two collaborators.
#[derive(Debug)]
pub struct Simulator<C, S> {
    fetch: FetchUnit,
    icache: C,
    sink: S,
    cycle: u64,
}

impl<C, S> Simulator<C, S>
where
    C: InstructionCache,
    S: InstructionSink,
{
    /// Creates a simulator around an existing fetch unit.
    pub const fn new(fetch: FetchUnit, icache: C, sink: S) -> Self {
        Self {
            fetch,
            icache,
            sink,
            cycle: 0,
        }
    }

    /// Validates `config` and builds the fetch unit it selects.
    ///
    /// # Errors
    ///
    /// Any [`ConfigError`] reported by [`Config::validate`].
    pub fn from_config(config: &Config, icache: C, sink: S) -> Result<Self, ConfigError> {
        Ok(Self::new(FetchUnit::from_config(config)?, icache, sink))
    }

    /// Advances the simulator by one clock cycle.
    ///
    /// The fetch unit sees the cache as it was at the end of the previous
    /// cycle; the cache advances afterwards.
    pub fn step(&mut self) {
        self.fetch.tick(&mut self.icache, &mut self.sink);
        self.icache.tick();
        self.cycle += 1;
    }

    /// Runs for exactly `cycles` cycles.
    pub fn run(&mut self, cycles: u64) {
        for _ in 0..cycles {
            self.step();
        }
    }

    /// Steps until `pred` holds, checking it before every cycle.
    ///
    /// # Returns
    ///
    /// The number of cycles executed by this call.
    ///
    /// # Errors
    ///
    /// [`SimError::CycleLimit`] if `pred` is still false after `max_cycles`.
    pub fn run_until<F>(&mut self, mut pred: F, max_cycles: u64) -> Result<u64, SimError>
    where
        F: FnMut(&Self) -> bool,
    {
        let mut executed = 0;
        while !pred(self) {
            if executed == max_cycles {
                debug!(cycles = executed, "run_until gave up");
                return Err(SimError::CycleLimit { cycles: executed });
            }
            self.step();
            executed += 1;
        }
        Ok(executed)
    }

    /// Cycles executed since construction.
    pub const fn cycle(&self) -> u64 {
        self.cycle
    }

    /// The fetch controller.
    pub const fn fetch(&self) -> &FetchUnit {
        &self.fetch
    }

    /// Mutable access to the fetch controller, for `resume` and `stall_exception`.
    pub const fn fetch_mut(&mut self) -> &mut FetchUnit {
        &mut self.fetch
    }

    /// The instruction cache.
    pub const fn icache(&self) -> &C {
        &self.icache
    }

    /// Mutable access to the instruction cache.
    pub const fn icache_mut(&mut self) -> &mut C {
        &mut self.icache
    }

    /// The downstream consumer.
    pub const fn sink(&self) -> &S {
        &self.sink
    }

    /// Mutable access to the downstream consumer.
    pub const fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Statistics of the fetch controller.
    pub fn stats(&self) -> &FetchStats {
        self.fetch.stats()
    }

    /// Consumes the simulator and returns its collaborators.
    pub fn into_parts(self) -> (FetchUnit, C, S) {
        (self.fetch, self.icache, self.sink)
    }
}
