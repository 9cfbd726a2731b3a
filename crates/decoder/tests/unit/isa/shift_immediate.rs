//! Shift-Immediate Decode Tests.
//!
//! Shift immediates carry a zero-extended shift amount instead of an I-type
//! immediate. RV32 encodings (5-bit `shamt`, `funct7`) and RV64 encodings
//! (6-bit `shamt`, `funct6`) of the same operation decode to the same subcode.

use pretty_assertions::assert_eq;
use rstest::rstest;
use rvdecode_core::isa::rvi::opcodes::{OP_IMM, OP_IMM_32};
use rvdecode_core::isa::subcode::AluOp;
use rvdecode_core::{IllegalReason, Xlen, decode};

use crate::common::builder::instruction::{InstructionBuilder, shift_imm};

const LOGICAL: u32 = 0b00_0000;
const ARITH: u32 = 0b01_0000;

#[rstest]
#[case::slli_rv32(shift_imm(OP_IMM, 10, 0b001, 10, LOGICAL, 31), Xlen::Rv32, AluOp::Slli, 31)]
#[case::slli_rv64(shift_imm(OP_IMM, 10, 0b001, 10, LOGICAL, 63), Xlen::Rv64, AluOp::Slli, 63)]
#[case::srli_rv32(shift_imm(OP_IMM, 10, 0b101, 10, LOGICAL, 1), Xlen::Rv32, AluOp::Srli, 1)]
#[case::srai_rv32(shift_imm(OP_IMM, 10, 0b101, 10, ARITH, 4), Xlen::Rv32, AluOp::Srai, 4)]
#[case::srai_rv32_max(shift_imm(OP_IMM, 10, 0b101, 10, ARITH, 31), Xlen::Rv32, AluOp::Srai, 31)]
#[case::srai_rv64(shift_imm(OP_IMM, 10, 0b101, 10, ARITH, 40), Xlen::Rv64, AluOp::Srai, 40)]
#[case::slliw(shift_imm(OP_IMM_32, 10, 0b001, 10, LOGICAL, 5), Xlen::Rv64, AluOp::Slliw, 5)]
#[case::srliw(shift_imm(OP_IMM_32, 10, 0b101, 10, LOGICAL, 31), Xlen::Rv64, AluOp::Srliw, 31)]
#[case::sraiw(shift_imm(OP_IMM_32, 10, 0b101, 10, ARITH, 3), Xlen::Rv64, AluOp::Sraiw, 3)]
fn shift_amount_is_zero_extended(
    #[case] inst: u32,
    #[case] xlen: Xlen,
    #[case] op: AluOp,
    #[case] shamt: u64,
) {
    let d = decode(inst, xlen).unwrap();
    assert_eq!(d.alu_op(), Some(op));
    assert_eq!(d.imm, shamt);
    assert_eq!(d.rd, 10);
    assert_eq!(d.rs1, 10);
    assert_eq!(d.rs2, 0);
}

#[rstest]
#[case::logical(0b101, 0b000_0000, LOGICAL, AluOp::Srli)]
#[case::arithmetic(0b101, 0b010_0000, ARITH, AluOp::Srai)]
#[case::left(0b001, 0b000_0000, LOGICAL, AluOp::Slli)]
fn rv32_and_rv64_encodings_decode_to_the_same_subcode(
    #[case] f3: u32,
    #[case] funct7: u32,
    #[case] funct6: u32,
    #[case] op: AluOp,
) {
    let rv32_style = InstructionBuilder::new()
        .opcode(OP_IMM)
        .rd(5)
        .rs1(6)
        .funct3(f3)
        .funct7(funct7)
        .imm(7)
        .build();
    let rv64_style = shift_imm(OP_IMM, 5, f3, 6, funct6, 39);

    let narrow = decode(rv32_style, Xlen::Rv32).unwrap();
    let wide = decode(rv64_style, Xlen::Rv64).unwrap();
    assert_eq!(narrow.alu_op(), Some(op));
    assert_eq!(wide.alu_op(), Some(op));
    assert_eq!(narrow.imm, 7);
    assert_eq!(wide.imm, 39);
}

#[test]
fn rv32_ignores_bit_25() {
    // shamt[5] set: a 6-bit shift amount seen by a 5-bit decoder.
    let inst = shift_imm(OP_IMM, 1, 0b001, 2, LOGICAL, 33);
    let d = decode(inst, Xlen::Rv32).unwrap();
    assert_eq!(d.alu_op(), Some(AluOp::Slli));
    assert_eq!(d.imm, 1);

    let d = decode(inst, Xlen::Rv64).unwrap();
    assert_eq!(d.imm, 33);
}

#[test]
fn srai_immediate_excludes_the_funct6_bits() {
    let inst = shift_imm(OP_IMM, 1, 0b101, 2, ARITH, 4);
    let d = decode(inst, Xlen::Rv32).unwrap();
    assert_eq!(d.imm, 4);
    assert_eq!(d.imm_signed(), 4);
}

#[rstest]
#[case::slli_arith(shift_imm(OP_IMM, 1, 0b001, 2, ARITH, 1), Xlen::Rv64)]
#[case::srli_bad_funct6(shift_imm(OP_IMM, 1, 0b101, 2, 0b00_1000, 1), Xlen::Rv64)]
#[case::slliw_shamt5(shift_imm(OP_IMM_32, 1, 0b001, 2, LOGICAL, 37), Xlen::Rv64)]
#[case::sraiw_shamt5(shift_imm(OP_IMM_32, 1, 0b101, 2, ARITH, 32), Xlen::Rv64)]
fn malformed_shifts_do_not_match(#[case] inst: u32, #[case] xlen: Xlen) {
    assert_eq!(decode(inst, xlen).unwrap_err().reason, IllegalReason::NoMatch);
}

#[test]
fn word_shifts_are_rv64_only() {
    let inst = shift_imm(OP_IMM_32, 1, 0b001, 2, LOGICAL, 5);
    assert_eq!(
        decode(inst, Xlen::Rv32).unwrap_err().reason,
        IllegalReason::Rv64Only
    );
}
