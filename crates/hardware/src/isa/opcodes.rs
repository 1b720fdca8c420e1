//! Major opcodes and function codes referenced by the fetch core.
//!
//! Only the encodings the RVC expander emits and the unsafe-instruction
//! classifier inspects are listed here.

/// Integer loads (LW, LD).
pub const OP_LOAD: u32 = 0b000_0011;
/// Floating-point loads (FLW, FLD).
pub const OP_LOAD_FP: u32 = 0b000_0111;
/// Register-immediate arithmetic (ADDI, SLLI, ANDI).
pub const OP_IMM: u32 = 0b001_0011;
/// 32-bit register-immediate arithmetic, RV64 only (ADDIW).
pub const OP_IMM_32: u32 = 0b001_1011;
/// Integer stores (SW, SD).
pub const OP_STORE: u32 = 0b010_0011;
/// Floating-point stores (FSW, FSD).
pub const OP_STORE_FP: u32 = 0b010_0111;
/// Register-register arithmetic (ADD, SUB, XOR).
pub const OP_REG: u32 = 0b011_0011;
/// Load upper immediate.
pub const OP_LUI: u32 = 0b011_0111;
/// 32-bit register-register arithmetic, RV64 only (ADDW, SUBW).
pub const OP_REG_32: u32 = 0b011_1011;
/// Conditional branches.
pub const OP_BRANCH: u32 = 0b110_0011;
/// Jump and link register.
pub const OP_JALR: u32 = 0b110_0111;
/// Jump and link.
pub const OP_JAL: u32 = 0b110_1111;
/// System instructions (CSR access, ECALL, EBREAK, xRET, WFI).
pub const OP_SYSTEM: u32 = 0b111_0011;

/// Environment break, the expansion of C.EBREAK.
pub const EBREAK: u32 = 0x0010_0073;

/// `funct3` values used by the expanded encodings.
pub mod funct3 {
    /// ADD/SUB/ADDI/JALR.
    pub const ADD_SUB: u32 = 0b000;
    /// SLL/SLLI.
    pub const SLL: u32 = 0b001;
    /// XOR.
    pub const XOR: u32 = 0b100;
    /// SRL/SRA and their immediate forms.
    pub const SRL_SRA: u32 = 0b101;
    /// OR.
    pub const OR: u32 = 0b110;
    /// AND/ANDI.
    pub const AND: u32 = 0b111;
    /// Word-sized memory access (LW, SW, FLW, FSW).
    pub const WORD: u32 = 0b010;
    /// Doubleword-sized memory access (LD, SD, FLD, FSD).
    pub const DOUBLE: u32 = 0b011;
    /// BEQ.
    pub const BEQ: u32 = 0b000;
    /// BNE.
    pub const BNE: u32 = 0b001;
}

/// `funct7` values used by the expanded encodings.
pub mod funct7 {
    /// SUB, SUBW and SRA/SRAI select the alternate operation.
    pub const ALT: u32 = 0b010_0000;
}
