//! Compressed Instruction Expansion.
//!
//! Provides the `expand` function which converts a 16-bit compressed instruction
//! into its 32-bit uncompressed equivalent. The mapping is purely combinational:
//! every half-word has a defined result, and reserved encodings come out as the
//! canonical illegal instruction so the decoder downstream can trap on them.

use super::constants::{CREG_BASE, QUADRANT_0, QUADRANT_1, QUADRANT_2, REG_RA, REG_SP, q0, q1, q2};
use crate::common::Xlen;
use crate::common::constants::ILLEGAL_INSTRUCTION;
use crate::isa::opcodes::{self, funct3, funct7};

/// Expands a 16-bit RVC instruction into its 32-bit equivalent.
///
/// # Arguments
///
/// * `inst` - The compressed half-word.
/// * `xlen` - Address width; selects between the RV32C and RV64C meanings of
///   the shared encoding slots.
///
/// # Returns
///
/// The canonical 32-bit instruction, or [`ILLEGAL_INSTRUCTION`] for reserved
/// encodings and for half-words that are not compressed at all.
pub fn expand(inst: u16, xlen: Xlen) -> u32 {
    let rv64 = xlen == Xlen::Rv64;
    let op = inst & 0x3;
    let funct3 = (inst >> 13) & 0x7;

    match op {
        QUADRANT_0 => {
            let rd_p = creg(inst, 2);
            let rs1_p = creg(inst, 7);
            match funct3 {
                q0::C_ADDI4SPN => {
                    let imm = bits(inst, 12, 11) << 4
                        | bits(inst, 10, 7) << 6
                        | bit(inst, 6) << 2
                        | bit(inst, 5) << 3;
                    if imm == 0 {
                        return ILLEGAL_INSTRUCTION;
                    }
                    i_type(imm, REG_SP, funct3::ADD_SUB, rd_p, opcodes::OP_IMM)
                }
                q0::C_FLD => i_type(
                    uimm_double(inst),
                    rs1_p,
                    funct3::DOUBLE,
                    rd_p,
                    opcodes::OP_LOAD_FP,
                ),
                q0::C_LW => i_type(uimm_word(inst), rs1_p, funct3::WORD, rd_p, opcodes::OP_LOAD),
                q0::C_LD_FLW if rv64 => {
                    i_type(uimm_double(inst), rs1_p, funct3::DOUBLE, rd_p, opcodes::OP_LOAD)
                }
                q0::C_LD_FLW => {
                    i_type(uimm_word(inst), rs1_p, funct3::WORD, rd_p, opcodes::OP_LOAD_FP)
                }
                q0::C_FSD => s_type(
                    uimm_double(inst),
                    rd_p,
                    rs1_p,
                    funct3::DOUBLE,
                    opcodes::OP_STORE_FP,
                ),
                q0::C_SW => s_type(uimm_word(inst), rd_p, rs1_p, funct3::WORD, opcodes::OP_STORE),
                q0::C_SD_FSW if rv64 => {
                    s_type(uimm_double(inst), rd_p, rs1_p, funct3::DOUBLE, opcodes::OP_STORE)
                }
                q0::C_SD_FSW => {
                    s_type(uimm_word(inst), rd_p, rs1_p, funct3::WORD, opcodes::OP_STORE_FP)
                }
                _ => ILLEGAL_INSTRUCTION,
            }
        }

        QUADRANT_1 => {
            let rd = bits(inst, 11, 7);
            let imm6 = sign_extend(bit(inst, 12) << 5 | bits(inst, 6, 2), 6);
            match funct3 {
                q1::C_ADDI => i_type(imm6, rd, funct3::ADD_SUB, rd, opcodes::OP_IMM),
                q1::C_ADDIW_JAL if rv64 => {
                    if rd == 0 {
                        return ILLEGAL_INSTRUCTION;
                    }
                    i_type(imm6, rd, funct3::ADD_SUB, rd, opcodes::OP_IMM_32)
                }
                q1::C_ADDIW_JAL => j_type(jump_offset(inst), REG_RA),
                q1::C_LI => i_type(imm6, 0, funct3::ADD_SUB, rd, opcodes::OP_IMM),
                q1::C_LUI_ADDI16SP if rd == REG_SP => {
                    let imm = sign_extend(
                        bit(inst, 12) << 9
                            | bit(inst, 6) << 4
                            | bit(inst, 5) << 6
                            | bits(inst, 4, 3) << 7
                            | bit(inst, 2) << 5,
                        10,
                    );
                    if imm == 0 {
                        return ILLEGAL_INSTRUCTION;
                    }
                    i_type(imm, REG_SP, funct3::ADD_SUB, REG_SP, opcodes::OP_IMM)
                }
                q1::C_LUI_ADDI16SP => {
                    let imm = sign_extend(bit(inst, 12) << 17 | bits(inst, 6, 2) << 12, 18);
                    if imm == 0 {
                        return ILLEGAL_INSTRUCTION;
                    }
                    (imm & 0xFFFF_F000) | (rd << 7) | opcodes::OP_LUI
                }
                q1::C_MISC_ALU => expand_misc_alu(inst, rv64),
                q1::C_J => j_type(jump_offset(inst), 0),
                q1::C_BEQZ => b_type(branch_offset(inst), creg(inst, 7), funct3::BEQ),
                q1::C_BNEZ => b_type(branch_offset(inst), creg(inst, 7), funct3::BNE),
                _ => ILLEGAL_INSTRUCTION,
            }
        }

        QUADRANT_2 => {
            let rd = bits(inst, 11, 7);
            let rs2 = bits(inst, 6, 2);
            match funct3 {
                q2::C_SLLI => {
                    if !rv64 && bit(inst, 12) != 0 {
                        return ILLEGAL_INSTRUCTION;
                    }
                    let shamt = bit(inst, 12) << 5 | bits(inst, 6, 2);
                    i_type(shamt, rd, funct3::SLL, rd, opcodes::OP_IMM)
                }
                q2::C_FLDSP => i_type(
                    uimm_double_sp(inst),
                    REG_SP,
                    funct3::DOUBLE,
                    rd,
                    opcodes::OP_LOAD_FP,
                ),
                q2::C_LWSP => {
                    if rd == 0 {
                        return ILLEGAL_INSTRUCTION;
                    }
                    i_type(uimm_word_sp(inst), REG_SP, funct3::WORD, rd, opcodes::OP_LOAD)
                }
                q2::C_LDSP_FLWSP if rv64 => {
                    if rd == 0 {
                        return ILLEGAL_INSTRUCTION;
                    }
                    i_type(uimm_double_sp(inst), REG_SP, funct3::DOUBLE, rd, opcodes::OP_LOAD)
                }
                q2::C_LDSP_FLWSP => i_type(
                    uimm_word_sp(inst),
                    REG_SP,
                    funct3::WORD,
                    rd,
                    opcodes::OP_LOAD_FP,
                ),
                q2::C_JR_MV_ADD => match (bit(inst, 12), rd, rs2) {
                    (0, 0, 0) => ILLEGAL_INSTRUCTION,
                    (0, rs1, 0) => i_type(0, rs1, funct3::ADD_SUB, 0, opcodes::OP_JALR),
                    (0, rd, rs2) => r_type(0, rs2, 0, funct3::ADD_SUB, rd, opcodes::OP_REG),
                    (_, 0, 0) => opcodes::EBREAK,
                    (_, rs1, 0) => i_type(0, rs1, funct3::ADD_SUB, REG_RA, opcodes::OP_JALR),
                    (_, rd, rs2) => r_type(0, rs2, rd, funct3::ADD_SUB, rd, opcodes::OP_REG),
                },
                q2::C_FSDSP => s_type(
                    store_double_sp(inst),
                    rs2,
                    REG_SP,
                    funct3::DOUBLE,
                    opcodes::OP_STORE_FP,
                ),
                q2::C_SWSP => s_type(
                    store_word_sp(inst),
                    rs2,
                    REG_SP,
                    funct3::WORD,
                    opcodes::OP_STORE,
                ),
                q2::C_SDSP_FSWSP if rv64 => s_type(
                    store_double_sp(inst),
                    rs2,
                    REG_SP,
                    funct3::DOUBLE,
                    opcodes::OP_STORE,
                ),
                q2::C_SDSP_FSWSP => s_type(
                    store_word_sp(inst),
                    rs2,
                    REG_SP,
                    funct3::WORD,
                    opcodes::OP_STORE_FP,
                ),
                _ => ILLEGAL_INSTRUCTION,
            }
        }

        _ => ILLEGAL_INSTRUCTION,
    }
}

/// Quadrant 1, `funct3 = 100`: shifts, ANDI and the register-register ALU group.
fn expand_misc_alu(inst: u16, rv64: bool) -> u32 {
    let rd = creg(inst, 7);
    let rs2 = creg(inst, 2);
    let bit12 = bit(inst, 12);
    let shamt = bit12 << 5 | bits(inst, 6, 2);

    match bits(inst, 11, 10) {
        0b00 | 0b01 if !rv64 && bit12 != 0 => ILLEGAL_INSTRUCTION,
        0b00 => i_type(shamt, rd, funct3::SRL_SRA, rd, opcodes::OP_IMM),
        0b01 => i_type(
            funct7::ALT << 5 | shamt,
            rd,
            funct3::SRL_SRA,
            rd,
            opcodes::OP_IMM,
        ),
        0b10 => {
            let imm = sign_extend(shamt, 6);
            i_type(imm, rd, funct3::AND, rd, opcodes::OP_IMM)
        }
        _ => match (bit12, bits(inst, 6, 5)) {
            (0, 0b00) => r_type(funct7::ALT, rs2, rd, funct3::ADD_SUB, rd, opcodes::OP_REG),
            (0, 0b01) => r_type(0, rs2, rd, funct3::XOR, rd, opcodes::OP_REG),
            (0, 0b10) => r_type(0, rs2, rd, funct3::OR, rd, opcodes::OP_REG),
            (0, _) => r_type(0, rs2, rd, funct3::AND, rd, opcodes::OP_REG),
            (_, 0b00) if rv64 => {
                r_type(funct7::ALT, rs2, rd, funct3::ADD_SUB, rd, opcodes::OP_REG_32)
            }
            (_, 0b01) if rv64 => r_type(0, rs2, rd, funct3::ADD_SUB, rd, opcodes::OP_REG_32),
            _ => ILLEGAL_INSTRUCTION,
        },
    }
}

// Field extraction.

#[inline]
fn bit(inst: u16, pos: u32) -> u32 {
    u32::from(inst >> pos) & 1
}

#[inline]
fn bits(inst: u16, hi: u32, lo: u32) -> u32 {
    (u32::from(inst) >> lo) & ((1 << (hi - lo + 1)) - 1)
}

/// Maps a 3-bit compressed register field at `lo` onto x8..x15.
#[inline]
fn creg(inst: u16, lo: u32) -> u32 {
    CREG_BASE + bits(inst, lo + 2, lo)
}

/// `uimm[5:3|7:6]` of C.LD/C.SD/C.FLD/C.FSD.
fn uimm_double(inst: u16) -> u32 {
    bits(inst, 12, 10) << 3 | bits(inst, 6, 5) << 6
}

/// `uimm[5:3|2|6]` of C.LW/C.SW/C.FLW/C.FSW.
fn uimm_word(inst: u16) -> u32 {
    bits(inst, 12, 10) << 3 | bit(inst, 6) << 2 | bit(inst, 5) << 6
}

/// `uimm[5|4:3|8:6]` of C.LDSP/C.FLDSP.
fn uimm_double_sp(inst: u16) -> u32 {
    bit(inst, 12) << 5 | bits(inst, 6, 5) << 3 | bits(inst, 4, 2) << 6
}

/// `uimm[5|4:2|7:6]` of C.LWSP/C.FLWSP.
fn uimm_word_sp(inst: u16) -> u32 {
    bit(inst, 12) << 5 | bits(inst, 6, 4) << 2 | bits(inst, 3, 2) << 6
}

/// `uimm[5:3|8:6]` of C.SDSP/C.FSDSP.
fn store_double_sp(inst: u16) -> u32 {
    bits(inst, 12, 10) << 3 | bits(inst, 9, 7) << 6
}

/// `uimm[5:2|7:6]` of C.SWSP/C.FSWSP.
fn store_word_sp(inst: u16) -> u32 {
    bits(inst, 12, 9) << 2 | bits(inst, 8, 7) << 6
}

/// Sign-extended `offset[11|4|9:8|10|6|7|3:1|5]` of C.J/C.JAL.
fn jump_offset(inst: u16) -> u32 {
    sign_extend(
        bit(inst, 12) << 11
            | bit(inst, 11) << 4
            | bits(inst, 10, 9) << 8
            | bit(inst, 8) << 10
            | bit(inst, 7) << 6
            | bit(inst, 6) << 7
            | bits(inst, 5, 3) << 1
            | bit(inst, 2) << 5,
        12,
    )
}

/// Sign-extended `offset[8|4:3|7:6|2:1|5]` of C.BEQZ/C.BNEZ.
fn branch_offset(inst: u16) -> u32 {
    sign_extend(
        bit(inst, 12) << 8
            | bits(inst, 11, 10) << 3
            | bits(inst, 6, 5) << 6
            | bits(inst, 4, 3) << 1
            | bit(inst, 2) << 5,
        9,
    )
}

// Canonical 32-bit encoders.

fn i_type(imm: u32, rs1: u32, funct3: u32, rd: u32, opcode: u32) -> u32 {
    (imm & 0xFFF) << 20 | rs1 << 15 | funct3 << 12 | rd << 7 | opcode
}

fn s_type(imm: u32, rs2: u32, rs1: u32, funct3: u32, opcode: u32) -> u32 {
    ((imm >> 5) & 0x7F) << 25 | rs2 << 20 | rs1 << 15 | funct3 << 12 | (imm & 0x1F) << 7 | opcode
}

fn r_type(funct7: u32, rs2: u32, rs1: u32, funct3: u32, rd: u32, opcode: u32) -> u32 {
    funct7 << 25 | rs2 << 20 | rs1 << 15 | funct3 << 12 | rd << 7 | opcode
}

/// Branch against x0 (`rs2` is always zero for C.BEQZ/C.BNEZ).
fn b_type(offset: u32, rs1: u32, funct3: u32) -> u32 {
    ((offset >> 12) & 1) << 31
        | ((offset >> 5) & 0x3F) << 25
        | rs1 << 15
        | funct3 << 12
        | ((offset >> 1) & 0xF) << 8
        | ((offset >> 11) & 1) << 7
        | opcodes::OP_BRANCH
}

fn j_type(offset: u32, rd: u32) -> u32 {
    ((offset >> 20) & 1) << 31
        | ((offset >> 1) & 0x3FF) << 21
        | ((offset >> 11) & 1) << 20
        | ((offset >> 12) & 0xFF) << 12
        | rd << 7
        | opcodes::OP_JAL
}

/// Sign-extends the low `bits` of `val` to 32 bits.
fn sign_extend(val: u32, bits: u32) -> u32 {
    let shift = 32 - bits;
    (((val << shift) as i32) >> shift) as u32
}
