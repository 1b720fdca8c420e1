//! RISC-V Compressed (C) Extension Constants.
//!
//! Compressed instructions are divided into three quadrants (0, 1, 2) based
//! on the lowest 2 bits of the instruction; `funct3` (bits 15:13) selects the
//! operation within a quadrant. Slots whose meaning depends on XLEN carry
//! both names.

/// Quadrant 0 (bits 1:0 = 00).
pub const QUADRANT_0: u16 = 0b00;
/// Quadrant 1 (bits 1:0 = 01).
pub const QUADRANT_1: u16 = 0b01;
/// Quadrant 2 (bits 1:0 = 10).
pub const QUADRANT_2: u16 = 0b10;

/// First register of the 3-bit `rd'`/`rs1'`/`rs2'` window (x8..x15).
pub const CREG_BASE: u32 = 8;

/// Stack pointer (x2), the implicit base of the SP-relative forms.
pub const REG_SP: u32 = 2;

/// Return address (x1), the implicit link register of C.JAL and C.JALR.
pub const REG_RA: u32 = 1;

/// Instructions in Quadrant 0.
pub mod q0 {
    /// C.ADDI4SPN.
    pub const C_ADDI4SPN: u16 = 0b000;
    /// C.FLD.
    pub const C_FLD: u16 = 0b001;
    /// C.LW.
    pub const C_LW: u16 = 0b010;
    /// C.LD (RV64) / C.FLW (RV32).
    pub const C_LD_FLW: u16 = 0b011;
    /// C.FSD.
    pub const C_FSD: u16 = 0b101;
    /// C.SW.
    pub const C_SW: u16 = 0b110;
    /// C.SD (RV64) / C.FSW (RV32).
    pub const C_SD_FSW: u16 = 0b111;
}

/// Instructions in Quadrant 1.
pub mod q1 {
    /// C.ADDI / C.NOP.
    pub const C_ADDI: u16 = 0b000;
    /// C.ADDIW (RV64) / C.JAL (RV32).
    pub const C_ADDIW_JAL: u16 = 0b001;
    /// C.LI.
    pub const C_LI: u16 = 0b010;
    /// C.LUI / C.ADDI16SP.
    pub const C_LUI_ADDI16SP: u16 = 0b011;
    /// C.SRLI, C.SRAI, C.ANDI, C.SUB, C.XOR, C.OR, C.AND, C.SUBW, C.ADDW.
    pub const C_MISC_ALU: u16 = 0b100;
    /// C.J.
    pub const C_J: u16 = 0b101;
    /// C.BEQZ.
    pub const C_BEQZ: u16 = 0b110;
    /// C.BNEZ.
    pub const C_BNEZ: u16 = 0b111;
}

/// Instructions in Quadrant 2.
pub mod q2 {
    /// C.SLLI.
    pub const C_SLLI: u16 = 0b000;
    /// C.FLDSP.
    pub const C_FLDSP: u16 = 0b001;
    /// C.LWSP.
    pub const C_LWSP: u16 = 0b010;
    /// C.LDSP (RV64) / C.FLWSP (RV32).
    pub const C_LDSP_FLWSP: u16 = 0b011;
    /// C.JR, C.MV, C.EBREAK, C.JALR, C.ADD.
    pub const C_JR_MV_ADD: u16 = 0b100;
    /// C.FSDSP.
    pub const C_FSDSP: u16 = 0b101;
    /// C.SWSP.
    pub const C_SWSP: u16 = 0b110;
    /// C.SDSP (RV64) / C.FSWSP (RV32).
    pub const C_SDSP_FSWSP: u16 = 0b111;
}
