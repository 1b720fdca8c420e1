//! Compressed (RVC) encoders.
//!
//! Each helper scatters an immediate into the bit positions the C extension
//! assigns it, so tests can state offsets in bytes instead of raw encodings.
//! Register arguments of the `'` forms are 3-bit indices (x8 + index).

/// Places bit `from` of `value` at bit `to` of a half-word, for each pair.
fn scatter(value: i32, layout: &[(u32, u32)]) -> u16 {
    layout
        .iter()
        .fold(0, |acc, &(to, from)| acc | ((((value >> from) & 1) as u16) << to))
}

const fn creg(reg: u32) -> u16 {
    (reg & 0x7) as u16
}

pub fn nop() -> u16 {
    0x0001
}

pub fn ebreak() -> u16 {
    0x9002
}

/// C.ADDI rd, imm (imm in -32..=31).
pub fn addi(rd: u32, imm: i32) -> u16 {
    scatter(imm, &[(12, 5), (6, 4), (5, 3), (4, 2), (3, 1), (2, 0)]) | ((rd as u16) << 7) | 0b01
}

/// C.LI rd, imm.
pub fn li(rd: u32, imm: i32) -> u16 {
    addi(rd, imm) | (0b010 << 13)
}

/// C.MV rd, rs2.
pub fn mv(rd: u32, rs2: u32) -> u16 {
    (0b100 << 13) | ((rd as u16) << 7) | ((rs2 as u16) << 2) | 0b10
}

/// C.ADD rd, rs2.
pub fn add(rd: u32, rs2: u32) -> u16 {
    mv(rd, rs2) | (1 << 12)
}

/// C.J offset.
pub fn j(offset: i32) -> u16 {
    (0b101 << 13)
        | scatter(
            offset,
            &[
                (12, 11),
                (11, 4),
                (10, 9),
                (9, 8),
                (8, 10),
                (7, 6),
                (6, 7),
                (5, 3),
                (4, 2),
                (3, 1),
                (2, 5),
            ],
        )
        | 0b01
}

/// C.BEQZ rs1', offset.
pub fn beqz(rs1: u32, offset: i32) -> u16 {
    (0b110 << 13)
        | scatter(
            offset,
            &[(12, 8), (11, 4), (10, 3), (6, 7), (5, 6), (4, 2), (3, 1), (2, 5)],
        )
        | (creg(rs1) << 7)
        | 0b01
}

/// C.LW rd', offset(rs1').
pub fn lw(rd: u32, rs1: u32, offset: i32) -> u16 {
    (0b010 << 13)
        | scatter(offset, &[(12, 5), (11, 4), (10, 3), (6, 2), (5, 6)])
        | (creg(rs1) << 7)
        | (creg(rd) << 2)
}

/// C.SDSP rs2, offset(sp).
pub fn sdsp(rs2: u32, offset: i32) -> u16 {
    (0b111 << 13)
        | scatter(offset, &[(12, 5), (11, 4), (10, 3), (9, 8), (8, 7), (7, 6)])
        | ((rs2 as u16) << 2)
        | 0b10
}

/// C.LWSP rd, offset(sp).
pub fn lwsp(rd: u32, offset: i32) -> u16 {
    (0b010 << 13)
        | scatter(offset, &[(12, 5), (6, 4), (5, 3), (4, 2), (3, 7), (2, 6)])
        | ((rd as u16) << 7)
        | 0b10
}
