//! Operand Select Tests.
//!
//! An ID/EX entry drives only the register-file read ports its instruction
//! actually uses; immediates and selector fields never select a register.

use pretty_assertions::assert_eq;
use rstest::rstest;
use rvdecode_core::common::reg::RegisterFile;
use rvdecode_core::core::pipeline::latches::{IdExEntry, Operands, Port, Selects};
use rvdecode_core::isa::rva::funct5::{AMOSWAP, LR};
use rvdecode_core::isa::rvf::funct5::{FADD, FCVT_FROM_INT, FSQRT};
use rvdecode_core::isa::rvf::{FMT_D, FMT_S};
use rvdecode_core::isa::rvi::opcodes::*;
use rvdecode_core::{Xlen, decode};

use crate::common::builder::instruction::*;

fn entry(inst: u32) -> IdExEntry {
    IdExEntry {
        pc: 0,
        inst,
        outcome: decode(inst, Xlen::Rv32),
    }
}

const fn int(r: u8) -> Option<Port> {
    Some(Port::Int(r))
}

const fn float(r: u8) -> Option<Port> {
    Some(Port::Float(r))
}

fn sel(rs1: Option<Port>, rs2: Option<Port>, rs3: Option<Port>) -> Selects {
    Selects { rs1, rs2, rs3 }
}

#[rstest]
#[case::addi(i_type(OP_IMM, 10, 0, 11, 5), sel(int(11), None, None))]
#[case::add(r_type(OP_REG, 10, 0, 11, 12, 0), sel(int(11), int(12), None))]
#[case::lw(i_type(OP_LOAD, 10, 0b010, 2, 8), sel(int(2), None, None))]
#[case::flw(i_type(OP_LOAD_FP, 10, 0b010, 2, 8), sel(int(2), None, None))]
#[case::sw(s_type(OP_STORE, 0b010, 2, 10, 8), sel(int(2), int(10), None))]
#[case::fsd(s_type(OP_STORE_FP, 0b011, 2, 10, 8), sel(int(2), float(10), None))]
#[case::lr(amo(10, 0b010, 11, 0, LR, false, false), sel(int(11), None, None))]
#[case::amoswap(amo(10, 0b010, 11, 12, AMOSWAP, false, false), sel(int(11), int(12), None))]
#[case::fadd(op_fp(1, 0, 2, 3, FADD, FMT_S), sel(float(2), float(3), None))]
#[case::fsqrt(op_fp(1, 0, 2, 0, FSQRT, FMT_D), sel(float(2), None, None))]
#[case::fcvt_d_wu(op_fp(1, 0, 2, 1, FCVT_FROM_INT, FMT_D), sel(int(2), None, None))]
#[case::fmadd(r4_type(OP_FMADD, 1, 0, 2, 3, 4, FMT_S), sel(float(2), float(3), float(4)))]
#[case::beq(b_type(OP_BRANCH, 0, 5, 6, 8), sel(int(5), int(6), None))]
#[case::jalr(i_type(OP_JALR, 1, 0, 7, 0), sel(int(7), None, None))]
#[case::jal(j_type(OP_JAL, 1, 8), sel(None, None, None))]
#[case::lui(u_type(OP_LUI, 1, 0x12345), sel(None, None, None))]
#[case::csrrs(csr(0b010, 1, 9, 0x300), sel(int(9), None, None))]
#[case::csrrsi(csr(0b110, 1, 9, 0x300), sel(None, None, None))]
#[case::sfence_vma(r_type(OP_SYSTEM, 0, 0, 3, 4, 0b000_1001), sel(int(3), int(4), None))]
#[case::fence(fence(0, 0b1111, 0b1111, 0, 0), sel(None, None, None))]
#[case::illegal(0x0000_0000, sel(None, None, None))]
fn drives_only_used_ports(#[case] inst: u32, #[case] expected: Selects) {
    assert_eq!(entry(inst).selects(), expected);
}

#[test]
fn reads_operands_through_the_ports() {
    let mut regs = RegisterFile::new();
    regs.write(Some(11), 0x1234);
    regs.write_f(Some(3), 0x4000_0000);
    regs.write_f(Some(4), 0x3F80_0000);

    let ops = entry(r_type(OP_REG, 10, 0, 11, 0, 0)).read_operands(&regs);
    assert_eq!(
        ops,
        Operands {
            rv1: Some(0x1234),
            rv2: Some(0),
            rv3: None
        }
    );

    let ops = entry(r4_type(OP_FMADD, 1, 0, 2, 3, 4, FMT_S)).read_operands(&regs);
    assert_eq!(
        ops,
        Operands {
            rv1: Some(0),
            rv2: Some(0x4000_0000),
            rv3: Some(0x3F80_0000)
        }
    );

    let ops = entry(0x0000_0000).read_operands(&regs);
    assert_eq!(ops, Operands::default());
}
