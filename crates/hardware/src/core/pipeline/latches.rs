//! Latch structures for the fetch path.
//!
//! This module defines the records that move through the front end:
//! 1. **Cache Traffic:** The response word returned by the instruction cache.
//! 2. **Request Tracking:** Fetch target queue entries and their generation tag.
//! 3. **Delivery:** The instruction record handed to the downstream consumer.

use std::fmt;

/// Generation tag attached to every issued request.
///
/// The controller moves to the next generation whenever a stall begins.
/// Responses whose request carried another generation were issued before
/// the redirection and are discarded instead of delivered. The counter
/// wraps; it only has to outrun the redirections that can happen while a
/// single request is in flight.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Hash)]
pub struct Generation(u8);

impl Generation {
    /// Returns the following generation, wrapping at 256.
    #[inline]
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }

    /// Raw counter value.
    #[inline]
    pub const fn value(self) -> u8 {
        self.0
    }
}

/// Entry of the fetch target queue.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct FetchTarget {
    /// Address the request was issued for.
    pub addr: u64,
    /// Generation the controller was in when the request was issued.
    pub generation: Generation,
}

/// One response from the instruction cache.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct CacheResponse {
    /// Raw 32-bit fetch block, little-endian half-words.
    pub data: u32,
    /// The cache could not supply the block (access or page fault).
    pub fault: bool,
}

impl CacheResponse {
    /// A successful response carrying `data`.
    pub const fn ok(data: u32) -> Self {
        Self { data, fault: false }
    }

    /// A faulting response.
    pub const fn fault() -> Self {
        Self {
            data: 0,
            fault: true,
        }
    }

    /// Lower half-word (the lower address).
    #[inline]
    pub const fn lower_half(self) -> u16 {
        self.data as u16
    }

    /// Upper half-word (the higher address).
    #[inline]
    pub const fn upper_half(self) -> u16 {
        (self.data >> 16) as u16
    }
}

/// Instruction record delivered to the downstream consumer.
///
/// At most one record is produced per cycle. A record with `access_fault`
/// set carries no instruction: `inst` is zero and must not be executed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct FetchedInstruction {
    /// Canonical 32-bit instruction (expanded if it was compressed).
    pub inst: u32,
    /// Address the instruction was fetched from.
    pub pc: u64,
    /// The fetch for this address faulted.
    pub access_fault: bool,
    /// The instruction was encoded in 16 bits.
    pub compressed: bool,
}

impl FetchedInstruction {
    /// Size of the fetched encoding in bytes.
    pub const fn size(&self) -> u64 {
        if self.compressed { 2 } else { 4 }
    }
}

impl fmt::Display for FetchedInstruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.access_fault {
            write!(f, "{:#x}: <access fault>", self.pc)
        } else if self.compressed {
            write!(f, "{:#x}: {:#010x} (c)", self.pc, self.inst)
        } else {
            write!(f, "{:#x}: {:#010x}", self.pc, self.inst)
        }
    }
}
