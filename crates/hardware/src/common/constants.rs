//! Fetch Front-End Constants.
//!
//! This module defines the constants shared by the fetch controllers and the
//! ISA helpers. It includes:
//! 1. **Instruction Sizes:** Byte lengths of compressed and full-width encodings.
//! 2. **Encoding Masks:** The half-word pattern that separates RVC from 32-bit encodings.
//! 3. **Fetch Geometry:** Cache-request granularity and default queue capacities.

/// Size of a compressed (16-bit) RISC-V instruction in bytes.
pub const INSTRUCTION_SIZE_16: u64 = 2;

/// Size of a standard (32-bit) RISC-V instruction in bytes.
pub const INSTRUCTION_SIZE_32: u64 = 4;

/// Bit mask selecting the length-encoding bits of a half-word.
pub const COMPRESSED_INSTRUCTION_MASK: u16 = 0x3;

/// Masked value reserved for full-width (non-compressed) encodings.
pub const FULL_WIDTH_ENCODING: u16 = 0x3;

/// Bytes returned by a single instruction-cache response.
pub const FETCH_BLOCK_BYTES: u64 = 4;

/// Mask that clears the in-block offset of a cache request address.
pub const FETCH_BLOCK_ALIGN_MASK: u64 = !(FETCH_BLOCK_BYTES - 1);

/// Depth of the fetch target queue used by the basic fetcher.
pub const FETCH_TARGET_QUEUE_DEPTH: usize = 2;

/// Outstanding cache requests allowed by the basic fetcher.
pub const BASIC_MAX_INFLIGHT: usize = 1;

/// Outstanding cache requests allowed by the unaligned fetcher.
pub const UNALIGNED_MAX_INFLIGHT: usize = 2;

/// Canonical illegal instruction produced for reserved RVC encodings.
pub const ILLEGAL_INSTRUCTION: u32 = 0x0000_0000;
