//! Instruction Set Architecture helpers for the fetch path.
//!
//! The fetch core never decodes instructions fully. It needs three things:
//! 1. **Length classification:** whether a half-word starts a compressed instruction.
//! 2. **Expansion:** the 32-bit canonical form of a compressed instruction.
//! 3. **Serialization check:** whether an instruction must stall fetch until retirement.

/// Major opcodes and function codes.
pub mod opcodes;

/// Compressed instruction extension (16-bit instruction encoding).
pub mod rvc;

use crate::common::constants::{COMPRESSED_INSTRUCTION_MASK, FULL_WIDTH_ENCODING};

/// Bit offset of the 5-bit major opcode field (`inst[6:2]`).
const MAJOR_OPCODE_SHIFT: u32 = 2;

/// Mask of the 5-bit major opcode field after shifting.
const MAJOR_OPCODE_MASK: u32 = 0x1F;

/// Returns `true` if `half` is the first (or only) half-word of a compressed instruction.
///
/// Any pattern whose low two bits are not `11` is compressed; the classifier
/// can be applied to every 16-bit aligned half-word of a fetch block.
#[inline]
pub const fn is_compressed(half: u16) -> bool {
    half & COMPRESSED_INSTRUCTION_MASK != FULL_WIDTH_ENCODING
}

/// Returns `true` if `inst` must not be speculated past.
///
/// System-class instructions (CSR access, ECALL, EBREAK, xRET, WFI) change
/// state that later fetches depend on, so fetch stalls after delivering one
/// and waits for the retirement logic to resume it. Only the 5-bit major
/// opcode is compared.
#[inline]
pub const fn is_unsafe(inst: u32) -> bool {
    (inst >> MAJOR_OPCODE_SHIFT) & MAJOR_OPCODE_MASK == opcodes::OP_SYSTEM >> MAJOR_OPCODE_SHIFT
}
