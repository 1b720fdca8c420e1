//! Address width of the target ISA.

use serde::Deserialize;

/// Register and address width (`xlen`) of the fetched program.
///
/// Program counters are kept in a `u64` and wrapped to this width on every
/// update, so an RV32 fetcher rolls over at 4 GiB exactly like the hardware.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub enum Xlen {
    /// 32-bit addresses (RV32).
    #[serde(alias = "rv32", alias = "RV32", alias = "32")]
    Rv32,
    /// 64-bit addresses (RV64).
    #[default]
    #[serde(alias = "rv64", alias = "RV64", alias = "64")]
    Rv64,
}

impl Xlen {
    /// Number of address bits.
    pub const fn bits(self) -> u32 {
        match self {
            Self::Rv32 => 32,
            Self::Rv64 => 64,
        }
    }

    /// Mask covering every representable address bit.
    pub const fn mask(self) -> u64 {
        match self {
            Self::Rv32 => 0xFFFF_FFFF,
            Self::Rv64 => u64::MAX,
        }
    }

    /// Adds `step` to `pc`, wrapping at the address width.
    #[inline]
    pub const fn advance(self, pc: u64, step: u64) -> u64 {
        pc.wrapping_add(step) & self.mask()
    }

    /// Returns `true` if `pc` fits in this address width.
    #[inline]
    pub const fn contains(self, pc: u64) -> bool {
        pc & !self.mask() == 0
    }
}
