//! Instruction Classification Tests.
//!
//! Verifies the length classifier on every low-bit pattern and the unsafe
//! check on the system-class opcodes that must serialize fetch.

use proptest::prelude::*;
use rstest::rstest;
use rvfetch_core::isa::{is_compressed, is_unsafe};

use crate::common::builder::instruction::InstructionBuilder;

#[rstest]
#[case::quadrant_0(0x0000, true)]
#[case::quadrant_1(0x0001, true)]
#[case::quadrant_2(0x0002, true)]
#[case::full_width(0x0003, false)]
#[case::addi_low_half(0x0513, false)]
#[case::c_ebreak(0x9002, true)]
#[case::all_ones(0xFFFF, false)]
fn length_classification(#[case] half: u16, #[case] compressed: bool) {
    assert_eq!(is_compressed(half), compressed, "half {half:#06x}");
}

#[rstest]
#[case::ecall(0x0000_0073)]
#[case::ebreak(0x0010_0073)]
#[case::mret(0x3020_0073)]
#[case::wfi(0x1050_0073)]
#[case::csrrw_mscratch(0x3401_1073)]
#[case::csrrs_cycle(0xC000_2573)]
fn system_opcodes_are_unsafe(#[case] inst: u32) {
    assert!(is_unsafe(inst), "{inst:#010x} must stall fetch");
}

#[test]
fn ordinary_instructions_are_safe() {
    let safe = [
        InstructionBuilder::new().nop().build(),
        InstructionBuilder::new().add(1, 2, 3).build(),
        InstructionBuilder::new().ld(5, 2, 16).build(),
        InstructionBuilder::new().sd(2, 5, -8).build(),
        InstructionBuilder::new().jal(1, 2048).build(),
        InstructionBuilder::new().jalr(0, 1, 0).build(),
        InstructionBuilder::new().beq(1, 2, -4).build(),
        InstructionBuilder::new().lui(3, 0x12345).build(),
    ];
    for inst in safe {
        assert!(!is_unsafe(inst), "{inst:#010x} must not stall fetch");
    }
}

#[test]
fn unsafe_check_ignores_length_bits() {
    // bits [6:2] = 0b11100 with the low bits clear
    assert!(is_unsafe(0b111_0000));
    assert!(is_unsafe(0b111_0001));
}

#[test]
fn csrrw_builder_is_unsafe() {
    let inst = InstructionBuilder::new().csrrw(0, 0x340, 1).build();
    assert_eq!(inst, 0x3400_9073);
    assert!(is_unsafe(inst));
    assert!(is_unsafe(InstructionBuilder::new().ecall().build()));
}

proptest! {
    #[test]
    fn compressed_iff_low_bits_not_11(half in any::<u16>()) {
        prop_assert_eq!(is_compressed(half), half & 0b11 != 0b11);
    }

    #[test]
    fn unsafe_depends_only_on_major_opcode(inst in any::<u32>()) {
        prop_assert_eq!(is_unsafe(inst), (inst >> 2) & 0x1F == 0b11100);
    }
}
