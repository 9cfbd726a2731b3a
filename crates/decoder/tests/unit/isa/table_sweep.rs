//! Exhaustive Table Sweeps.
//!
//! Every selector combination of the ALU, memory, and FPU opcodes is run
//! through `decode` at both widths and compared with a reference written
//! from the assembly names of the base, M, A, F, and D instructions.
//! Combinations missing from the reference must be rejected with
//! `NoMatch`, and RV64-only forms with `Rv64Only` under RV32.

use pretty_assertions::assert_eq;
use rvdecode_core::isa::disasm::disassemble;
use rvdecode_core::isa::rvi::opcodes::*;
use rvdecode_core::isa::subcode::{AluOp, MemOp};
use rvdecode_core::{DecodeResult, IllegalReason, Xlen, decode};

use crate::common::builder::instruction::*;

const XLENS: [Xlen; 2] = [Xlen::Rv32, Xlen::Rv64];

/// Reference outcome for a legal encoding.
struct Expected {
    name: String,
    rv64_only: bool,
}

fn legal(name: impl Into<String>, rv64_only: bool) -> Option<Expected> {
    Some(Expected {
        name: name.into(),
        rv64_only,
    })
}

/// Decodes `inst` and describes any disagreement with `expected`.
fn compare(
    inst: u32,
    xlen: Xlen,
    expected: Option<&Expected>,
    name_of: fn(&DecodeResult) -> String,
) -> Option<String> {
    let want = match expected {
        None => Err(IllegalReason::NoMatch),
        Some(e) if e.rv64_only && xlen == Xlen::Rv32 => Err(IllegalReason::Rv64Only),
        Some(e) => Ok(e.name.clone()),
    };
    let got = decode(inst, xlen).as_ref().map(name_of).map_err(|e| e.reason);
    (got != want).then(|| format!("{inst:#010x} {xlen:?}: expected {want:?}, got {got:?}"))
}

/// Runs every `(word, reference)` pair at both widths and collects mismatches.
fn sweep(
    cases: impl IntoIterator<Item = (u32, Option<Expected>)>,
    name_of: fn(&DecodeResult) -> String,
) -> (Vec<String>, usize) {
    let mut mismatches = Vec::new();
    let mut legal_count = 0;
    for (inst, expected) in cases {
        legal_count += usize::from(expected.is_some());
        for xlen in XLENS {
            mismatches.extend(compare(inst, xlen, expected.as_ref(), name_of));
        }
    }
    (mismatches, legal_count)
}

// ──────────────────────────────────────────────────────────
// ALU: OP, OP-IMM, OP-32, OP-IMM-32 x funct3 x funct7
// ──────────────────────────────────────────────────────────

const BASE: [&str; 8] = ["add", "sll", "slt", "sltu", "xor", "srl", "or", "and"];
const MULDIV: [&str; 8] = ["mul", "mulh", "mulhsu", "mulhu", "div", "divu", "rem", "remu"];
const IMMEDIATE: [&str; 8] = ["addi", "slli", "slti", "sltiu", "xori", "srli", "ori", "andi"];

fn alu_reference(opcode: u32, f3: u32, f7: u32) -> Option<Expected> {
    let f3i = f3 as usize;
    match opcode {
        OP_REG => match (f7, f3) {
            (0b000_0000, _) => legal(BASE[f3i], false),
            (0b010_0000, 0b000) => legal("sub", false),
            (0b010_0000, 0b101) => legal("sra", false),
            (0b000_0001, _) => legal(MULDIV[f3i], false),
            _ => None,
        },
        // Shifts take a 6-bit shamt, so only bits 31-26 select the operation.
        OP_IMM => match (f3, f7 >> 1) {
            (0b001 | 0b101, 0b00_0000) => legal(IMMEDIATE[f3i], false),
            (0b101, 0b01_0000) => legal("srai", false),
            (0b001 | 0b101, _) => None,
            _ => legal(IMMEDIATE[f3i], false),
        },
        OP_REG_32 => match (f7, f3) {
            (0b000_0000, 0b000) => legal("addw", true),
            (0b000_0000, 0b001) => legal("sllw", true),
            (0b000_0000, 0b101) => legal("srlw", true),
            (0b010_0000, 0b000) => legal("subw", true),
            (0b010_0000, 0b101) => legal("sraw", true),
            (0b000_0001, 0b000) => legal("mulw", true),
            (0b000_0001, 0b100) => legal("divw", true),
            (0b000_0001, 0b101) => legal("divuw", true),
            (0b000_0001, 0b110) => legal("remw", true),
            (0b000_0001, 0b111) => legal("remuw", true),
            _ => None,
        },
        OP_IMM_32 => match (f3, f7) {
            (0b000, _) => legal("addiw", true),
            (0b001, 0b000_0000) => legal("slliw", true),
            (0b101, 0b000_0000) => legal("srliw", true),
            (0b101, 0b010_0000) => legal("sraiw", true),
            _ => None,
        },
        _ => None,
    }
}

fn alu_name(d: &DecodeResult) -> String {
    d.alu_op()
        .filter(|op| AluOp::from_code(op.code()) == Some(*op))
        .map_or_else(|| "<no ALU subcode>".to_string(), |op| op.mnemonic().to_string())
}

#[test]
fn every_alu_selector_combination() {
    let cases = [OP_REG, OP_IMM, OP_REG_32, OP_IMM_32].into_iter().flat_map(|opcode| {
        (0..8u32).flat_map(move |f3| {
            (0..128u32).map(move |f7| {
                (r_type(opcode, 1, f3, 2, 3, f7), alu_reference(opcode, f3, f7))
            })
        })
    });
    let (mismatches, legal_count) = sweep(cases, alu_name);
    assert_eq!(mismatches, Vec::<String>::new());
    // OP 18, OP-IMM 6 x 128 + 6 shift forms, OP-32 10, OP-IMM-32 128 + 3.
    assert_eq!(legal_count, 18 + 774 + 10 + 131);
}

// ──────────────────────────────────────────────────────────
// Memory: loads and stores x funct3, AMO x funct3 x funct5
// ──────────────────────────────────────────────────────────

fn load_store_reference(opcode: u32, f3: u32) -> Option<Expected> {
    match (opcode, f3) {
        (OP_LOAD, 0b000) => legal("lb", false),
        (OP_LOAD, 0b001) => legal("lh", false),
        (OP_LOAD, 0b010) => legal("lw", false),
        (OP_LOAD, 0b011) => legal("ld", true),
        (OP_LOAD, 0b100) => legal("lbu", false),
        (OP_LOAD, 0b101) => legal("lhu", false),
        (OP_LOAD, 0b110) => legal("lwu", true),
        (OP_STORE, 0b000) => legal("sb", false),
        (OP_STORE, 0b001) => legal("sh", false),
        (OP_STORE, 0b010) => legal("sw", false),
        (OP_STORE, 0b011) => legal("sd", true),
        (OP_LOAD_FP, 0b010) => legal("flw", false),
        (OP_LOAD_FP, 0b011) => legal("fld", false),
        (OP_STORE_FP, 0b010) => legal("fsw", false),
        (OP_STORE_FP, 0b011) => legal("fsd", false),
        _ => None,
    }
}

fn mem_name(d: &DecodeResult) -> String {
    d.mem_op()
        .filter(|op| MemOp::from_code(op.code()) == Some(*op))
        .map_or_else(|| "<no memory subcode>".to_string(), |op| op.mnemonic().to_string())
}

#[test]
fn every_load_and_store_width() {
    let cases = [OP_LOAD, OP_LOAD_FP, OP_STORE, OP_STORE_FP].into_iter().flat_map(|opcode| {
        (0..8u32).map(move |f3| {
            let inst = if opcode == OP_LOAD || opcode == OP_LOAD_FP {
                i_type(opcode, 1, f3, 2, -16)
            } else {
                s_type(opcode, f3, 2, 3, -16)
            };
            (inst, load_store_reference(opcode, f3))
        })
    });
    let (mismatches, legal_count) = sweep(cases, mem_name);
    assert_eq!(mismatches, Vec::<String>::new());
    assert_eq!(legal_count, 7 + 4 + 2 + 2);
}

const AMO_OPS: [(u32, &str); 11] = [
    (0b00000, "amoadd"),
    (0b00001, "amoswap"),
    (0b00010, "lr"),
    (0b00011, "sc"),
    (0b00100, "amoxor"),
    (0b01000, "amoor"),
    (0b01100, "amoand"),
    (0b10000, "amomin"),
    (0b10100, "amomax"),
    (0b11000, "amominu"),
    (0b11100, "amomaxu"),
];

/// Names an AMO as `<op>.<w|d>/<memory subcode>`.
fn amo_reference(f3: u32, f5: u32, rs2: u32) -> Option<Expected> {
    let (suffix, load, store, rv64_only) = match f3 {
        0b010 => ("w", "lw", "sw", false),
        0b011 => ("d", "ld", "sd", true),
        _ => return None,
    };
    let (_, name) = AMO_OPS.iter().find(|(code, _)| *code == f5)?;
    if *name == "lr" && rs2 != 0 {
        return None;
    }
    let access = if *name == "sc" { store } else { load };
    legal(format!("{name}.{suffix}/{access}"), rv64_only)
}

fn amo_name(d: &DecodeResult) -> String {
    match (d.atomic, d.mem_op()) {
        (Some(atomic), Some(op)) => {
            let suffix = if op.size_bytes() == 8 { "d" } else { "w" };
            format!("{}.{suffix}/{}", atomic.mnemonic(), op.mnemonic())
        }
        _ => "<not an AMO>".to_string(),
    }
}

#[test]
fn every_amo_width_and_operation() {
    let cases = (0..8u32).flat_map(|f3| {
        (0..32u32).flat_map(move |f5| {
            [0u32, 3].into_iter().map(move |rs2| {
                (amo(1, f3, 2, rs2, f5, true, false), amo_reference(f3, f5, rs2))
            })
        })
    });
    let (mismatches, legal_count) = sweep(cases, amo_name);
    assert_eq!(mismatches, Vec::<String>::new());
    // Two widths x (11 operations with rs2 = 0, 10 with rs2 = 3).
    assert_eq!(legal_count, 2 * (11 + 10));
}

// ──────────────────────────────────────────────────────────
// FPU: OP-FP funct5 x fmt x funct3 x rs2, fused classes x fmt x rm
// ──────────────────────────────────────────────────────────

const INT_FORMS: [&str; 4] = ["w", "wu", "l", "lu"];

fn fp_reference(f5: u32, fmt: u32, rm: u32, rs2: u32) -> Option<Expected> {
    let p = match fmt {
        0b00 => "s",
        0b01 => "d",
        _ => return None,
    };
    let double = fmt == 0b01;
    // (name, rm is a rounding mode, RV64 only)
    let (name, rounds, rv64_only) = match (f5, rs2, rm) {
        (0b00000, _, _) => (format!("fadd.{p}"), true, false),
        (0b00001, _, _) => (format!("fsub.{p}"), true, false),
        (0b00010, _, _) => (format!("fmul.{p}"), true, false),
        (0b00011, _, _) => (format!("fdiv.{p}"), true, false),
        (0b01011, 0, _) => (format!("fsqrt.{p}"), true, false),
        (0b00100, _, 0b000) => (format!("fsgnj.{p}"), false, false),
        (0b00100, _, 0b001) => (format!("fsgnjn.{p}"), false, false),
        (0b00100, _, 0b010) => (format!("fsgnjx.{p}"), false, false),
        (0b00101, _, 0b000) => (format!("fmin.{p}"), false, false),
        (0b00101, _, 0b001) => (format!("fmax.{p}"), false, false),
        (0b01000, 0b01, _) if !double => ("fcvt.s.d".to_string(), true, false),
        (0b01000, 0b00, _) if double => ("fcvt.d.s".to_string(), true, false),
        (0b10100, _, 0b010) => (format!("feq.{p}"), false, false),
        (0b10100, _, 0b001) => (format!("flt.{p}"), false, false),
        (0b10100, _, 0b000) => (format!("fle.{p}"), false, false),
        (0b11000, 0..=3, _) => {
            let int = INT_FORMS[rs2 as usize];
            (format!("fcvt.{int}.{p}"), true, rs2 >= 2)
        }
        (0b11010, 0..=3, _) => {
            let int = INT_FORMS[rs2 as usize];
            (format!("fcvt.{p}.{int}"), true, rs2 >= 2)
        }
        (0b11100, 0, 0b000) if double => ("fmv.x.d".to_string(), false, true),
        (0b11100, 0, 0b000) => ("fmv.x.w".to_string(), false, false),
        (0b11100, 0, 0b001) => (format!("fclass.{p}"), false, false),
        (0b11110, 0, 0b000) if double => ("fmv.d.x".to_string(), false, true),
        (0b11110, 0, 0b000) => ("fmv.w.x".to_string(), false, false),
        _ => return None,
    };
    if rounds && matches!(rm, 0b101 | 0b110) {
        return None;
    }
    legal(name, rv64_only)
}

/// The assembly name as the disassembler prints it.
fn fp_name(d: &DecodeResult) -> String {
    if d.fpu_op().is_none() {
        return "<no FPU subcode>".to_string();
    }
    disassemble(d)
        .split_whitespace()
        .next()
        .unwrap_or_default()
        .to_string()
}

#[test]
fn every_op_fp_selector_combination() {
    let cases = (0..32u32).flat_map(|f5| {
        (0..4u32).flat_map(move |fmt| {
            (0..8u32).flat_map(move |rm| {
                (0..32u32).map(move |rs2| {
                    (op_fp(1, rm, 2, rs2, f5, fmt), fp_reference(f5, fmt, rm, rs2))
                })
            })
        })
    });
    let (mismatches, _) = sweep(cases, fp_name);
    assert_eq!(mismatches, Vec::<String>::new());
}

#[test]
fn every_fused_class_precision_and_rounding_mode() {
    let classes = [
        (OP_FMADD, "fmadd"),
        (OP_FMSUB, "fmsub"),
        (OP_FNMSUB, "fnmsub"),
        (OP_FNMADD, "fnmadd"),
    ];
    let cases = classes.into_iter().flat_map(|(opcode, name)| {
        (0..4u32).flat_map(move |fmt| {
            (0..8u32).map(move |rm| {
                let expected = match fmt {
                    0b00 | 0b01 if !matches!(rm, 0b101 | 0b110) => {
                        let p = if fmt == 0b01 { "d" } else { "s" };
                        legal(format!("{name}.{p}"), false)
                    }
                    _ => None,
                };
                (r4_type(opcode, 1, rm, 2, 3, 4, fmt), expected)
            })
        })
    });
    let (mismatches, legal_count) = sweep(cases, fp_name);
    assert_eq!(mismatches, Vec::<String>::new());
    assert_eq!(legal_count, 4 * 2 * 6);
}
