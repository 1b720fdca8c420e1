//! Configuration system for the fetch core.
//!
//! This module defines the configuration structures used to parameterize the
//! front end. It provides:
//! 1. **Defaults:** Baseline start PC, address width, and queue capacities.
//! 2. **Structures:** General settings and fetch-controller settings.
//! 3. **Enums:** The fetch controller variant.
//! 4. **Validation:** Rejection of parameter combinations the controllers cannot honor.
//!
//! Configuration is supplied as JSON or built with `Config::default()`.

use serde::Deserialize;

use crate::common::Xlen;
use crate::common::constants::{
    BASIC_MAX_INFLIGHT, FETCH_TARGET_QUEUE_DEPTH, INSTRUCTION_SIZE_16, INSTRUCTION_SIZE_32,
    UNALIGNED_MAX_INFLIGHT,
};
use crate::common::error::ConfigError;

/// Default configuration constants for the fetch core.
mod defaults {
    /// Reset value of the program counter (base of RAM on the reference platform).
    pub const START_PC: u64 = 0x8000_0000;
}

/// Fetch controller implementation types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum FetchVariant {
    /// Fixed-width instructions, aligned PC, generation-tagged fetch target queue.
    Basic,
    /// Mixed 16/32-bit instructions, unaligned PC, half-instruction reassembly.
    #[default]
    Unaligned,
}

impl FetchVariant {
    /// Alignment every instruction address must satisfy under this variant.
    pub const fn pc_alignment(self) -> u64 {
        match self {
            Self::Basic => INSTRUCTION_SIZE_32,
            Self::Unaligned => INSTRUCTION_SIZE_16,
        }
    }

    /// Default number of outstanding cache requests.
    pub const fn default_inflight(self) -> usize {
        match self {
            Self::Basic => BASIC_MAX_INFLIGHT,
            Self::Unaligned => UNALIGNED_MAX_INFLIGHT,
        }
    }
}

/// Root configuration structure.
///
/// # Example
///
/// ```
/// use rvfetch_core::config::{Config, FetchVariant};
/// use rvfetch_core::common::Xlen;
///
/// let json = r#"{
///     "general": { "start_pc": 4096, "xlen": "Rv32" },
///     "fetch": { "variant": "Basic" }
/// }"#;
///
/// let config = Config::from_json(json).unwrap();
/// assert_eq!(config.general.start_pc, 0x1000);
/// assert_eq!(config.general.xlen, Xlen::Rv32);
/// assert_eq!(config.fetch.variant, FetchVariant::Basic);
/// assert_eq!(config.fetch.inflight(), 1);
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Start PC and address width.
    #[serde(default)]
    pub general: GeneralConfig,
    /// Controller variant and queue capacities.
    #[serde(default)]
    pub fetch: FetchConfig,
}

impl Config {
    /// Parses and validates a JSON configuration document.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Parse`] for malformed JSON, or any error from [`Config::validate`].
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that the controllers can be built from this configuration.
    ///
    /// # Errors
    ///
    /// Returns the first violated constraint: start PC outside the address
    /// width or misaligned for the variant, zero queue depth, zero in-flight
    /// capacity, or a basic in-flight capacity the queue cannot track.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let pc = self.general.start_pc;
        let xlen = self.general.xlen;
        if !xlen.contains(pc) {
            return Err(ConfigError::StartPcOutOfRange {
                pc,
                bits: xlen.bits(),
            });
        }

        let alignment = self.fetch.variant.pc_alignment();
        if pc % alignment != 0 {
            return Err(ConfigError::MisalignedStartPc { pc, alignment });
        }

        let depth = self.fetch.fetch_target_queue_depth;
        if depth == 0 {
            return Err(ConfigError::ZeroQueueDepth);
        }

        let inflight = self.fetch.inflight();
        if inflight == 0 {
            return Err(ConfigError::ZeroInflight);
        }
        if self.fetch.variant == FetchVariant::Basic && inflight > depth {
            return Err(ConfigError::InflightExceedsQueue { inflight, depth });
        }
        Ok(())
    }
}

/// General settings shared by every variant.
#[derive(Debug, Clone, Deserialize)]
pub struct GeneralConfig {
    /// Reset value of the program counter.
    #[serde(default = "GeneralConfig::default_start_pc")]
    pub start_pc: u64,

    /// Address width; PC arithmetic wraps at this many bits.
    #[serde(default)]
    pub xlen: Xlen,
}

impl GeneralConfig {
    /// Returns the default starting program counter.
    fn default_start_pc() -> u64 {
        defaults::START_PC
    }
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            start_pc: defaults::START_PC,
            xlen: Xlen::default(),
        }
    }
}

/// Fetch controller settings.
#[derive(Debug, Clone, Deserialize)]
pub struct FetchConfig {
    /// Which controller to build.
    #[serde(default)]
    pub variant: FetchVariant,

    /// Slots in the basic fetcher's fetch target queue.
    #[serde(default = "FetchConfig::default_queue_depth")]
    pub fetch_target_queue_depth: usize,

    /// Outstanding cache requests; defaults per variant when unset.
    #[serde(default)]
    pub max_inflight: Option<usize>,
}

impl FetchConfig {
    /// Returns the default fetch target queue depth.
    fn default_queue_depth() -> usize {
        FETCH_TARGET_QUEUE_DEPTH
    }

    /// Effective in-flight capacity for the selected variant.
    pub fn inflight(&self) -> usize {
        self.max_inflight
            .unwrap_or_else(|| self.variant.default_inflight())
    }
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            variant: FetchVariant::default(),
            fetch_target_queue_depth: FETCH_TARGET_QUEUE_DEPTH,
            max_inflight: None,
        }
    }
}
