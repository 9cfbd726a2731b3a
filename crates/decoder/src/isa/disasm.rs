//! Instruction Disassembler.
//!
//! Renders a [`DecodeResult`] as assembly text for debug tracing, CLI output,
//! and test diagnostics. Because it works from the decoded result rather than
//! the raw word, the text always agrees with what the decoder accepted.
//!
//! # Usage
//!
//! ```
//! use rvdecode_core::Xlen;
//! use rvdecode_core::isa::disasm::disassemble_word;
//!
//! assert_eq!(disassemble_word(0x00A0_0513, Xlen::Rv32), "addi a0, zero, 10");
//! assert_eq!(disassemble_word(0x0000_0000, Xlen::Rv32), "unknown");
//! ```

use crate::config::Xlen;
use crate::isa::decode::{DecodeResult, OpCategory, decode};
use crate::isa::opcode::OpcodeClass;
use crate::isa::rvi::funct3;
use crate::isa::subcode::{AtomicOp, FpuOp, OperationSubcode};

/// ABI register names for x0-x31.
const REG_NAMES: [&str; 32] = [
    "zero", "ra", "sp", "gp", "tp", "t0", "t1", "t2", "s0", "s1", "a0", "a1", "a2", "a3", "a4",
    "a5", "a6", "a7", "s2", "s3", "s4", "s5", "s6", "s7", "s8", "s9", "s10", "s11", "t3", "t4",
    "t5", "t6",
];

/// ABI register names for f0-f31.
const FREG_NAMES: [&str; 32] = [
    "ft0", "ft1", "ft2", "ft3", "ft4", "ft5", "ft6", "ft7", "fs0", "fs1", "fa0", "fa1", "fa2",
    "fa3", "fa4", "fa5", "fa6", "fa7", "fs2", "fs3", "fs4", "fs5", "fs6", "fs7", "fs8", "fs9",
    "fs10", "fs11", "ft8", "ft9", "ft10", "ft11",
];

/// Fence set letters, MSB first.
const FENCE_SET: [(u8, char); 4] = [(0b1000, 'i'), (0b0100, 'o'), (0b0010, 'r'), (0b0001, 'w')];

/// AMO acquire bit (bit 26).
const AQ_BIT: u32 = 1 << 26;

/// AMO release bit (bit 25).
const RL_BIT: u32 = 1 << 25;

/// Returns the ABI name for an integer register index.
#[inline]
fn xreg(idx: u8) -> &'static str {
    REG_NAMES.get(usize::from(idx)).copied().unwrap_or("x??")
}

/// Returns the ABI name for a floating-point register index.
#[inline]
fn freg(idx: u8) -> &'static str {
    FREG_NAMES.get(usize::from(idx)).copied().unwrap_or("f??")
}

/// Decodes and disassembles a raw word, returning `"unknown"` if it is illegal.
pub fn disassemble_word(inst: u32, xlen: Xlen) -> String {
    decode(inst, xlen).map_or_else(|_| "unknown".to_string(), |d| disassemble(&d))
}

/// Disassembles a decoded instruction.
///
/// Returns a string like `"add a0, a1, a2"`. Immediates print in decimal
/// except upper immediates and CSR addresses, which print in hex.
pub fn disassemble(d: &DecodeResult) -> String {
    match d.subcode {
        Some(OperationSubcode::Alu(op)) => {
            if op.is_immediate() {
                format!("{op} {}, {}, {}", xreg(d.rd), xreg(d.rs1), d.imm_signed())
            } else {
                format!("{op} {}, {}, {}", xreg(d.rd), xreg(d.rs1), xreg(d.rs2))
            }
        }
        Some(OperationSubcode::Mem(op)) => match d.atomic {
            Some(atomic) => amo(d, atomic),
            None if op.is_load() => {
                let rd = if op.is_float() { freg(d.rd) } else { xreg(d.rd) };
                format!("{op} {rd}, {}({})", d.imm_signed(), xreg(d.rs1))
            }
            None => {
                let rs2 = if op.is_float() { freg(d.rs2) } else { xreg(d.rs2) };
                format!("{op} {rs2}, {}({})", d.imm_signed(), xreg(d.rs1))
            }
        },
        Some(OperationSubcode::Fpu(op)) => fpu(d, op),
        None => fixed(d),
    }
}

/// Atomic memory operations: `amoadd.w.aqrl a0, a2, (a1)`.
fn amo(d: &DecodeResult, atomic: AtomicOp) -> String {
    let size = if d.funct3() == 0b011 { "d" } else { "w" };
    let order = match (d.raw & AQ_BIT != 0, d.raw & RL_BIT != 0) {
        (true, true) => ".aqrl",
        (true, false) => ".aq",
        (false, true) => ".rl",
        (false, false) => "",
    };
    let name = atomic.mnemonic();
    if atomic == AtomicOp::Lr {
        format!("{name}.{size}{order} {}, ({})", xreg(d.rd), xreg(d.rs1))
    } else {
        format!(
            "{name}.{size}{order} {}, {}, ({})",
            xreg(d.rd),
            xreg(d.rs2),
            xreg(d.rs1)
        )
    }
}

/// Floating-point operations, suffixed with the precision.
fn fpu(d: &DecodeResult, op: FpuOp) -> String {
    let p = if d.category == OpCategory::FpuDouble { "d" } else { "s" };
    match op {
        FpuOp::FmvXW | FpuOp::FmvXD => format!("{op} {}, {}", xreg(d.rd), freg(d.rs1)),
        FpuOp::FmvWX | FpuOp::FmvDX => format!("{op} {}, {}", freg(d.rd), xreg(d.rs1)),
        FpuOp::FcvtW | FpuOp::FcvtWu | FpuOp::FcvtL | FpuOp::FcvtLu => {
            format!("{op}.{p} {}, {}", xreg(d.rd), freg(d.rs1))
        }
        FpuOp::FcvtFW | FpuOp::FcvtFWu | FpuOp::FcvtFL | FpuOp::FcvtFLu => {
            let int = op.mnemonic().trim_start_matches("fcvt.f.");
            format!("fcvt.{p}.{int} {}, {}", freg(d.rd), xreg(d.rs1))
        }
        FpuOp::FcvtFmt => {
            let from = if p == "d" { "s" } else { "d" };
            format!("fcvt.{p}.{from} {}, {}", freg(d.rd), freg(d.rs1))
        }
        FpuOp::Feq | FpuOp::Flt | FpuOp::Fle => {
            format!("{op}.{p} {}, {}, {}", xreg(d.rd), freg(d.rs1), freg(d.rs2))
        }
        FpuOp::Fclass => format!("{op}.{p} {}, {}", xreg(d.rd), freg(d.rs1)),
        FpuOp::Fsqrt => format!("{op}.{p} {}, {}", freg(d.rd), freg(d.rs1)),
        FpuOp::Fmadd | FpuOp::Fmsub | FpuOp::Fnmsub | FpuOp::Fnmadd => format!(
            "{op}.{p} {}, {}, {}, {}",
            freg(d.rd),
            freg(d.rs1),
            freg(d.rs2),
            freg(d.rs3)
        ),
        _ => format!("{op}.{p} {}, {}, {}", freg(d.rd), freg(d.rs1), freg(d.rs2)),
    }
}

/// Classes decoded by fixed rules rather than a subcode table.
fn fixed(d: &DecodeResult) -> String {
    if let Some(cond) = d.branch {
        return format!(
            "{} {}, {}, {}",
            cond.mnemonic(),
            xreg(d.rs1),
            xreg(d.rs2),
            d.imm_signed()
        );
    }
    if let Some(op) = d.system {
        return if op.is_csr() {
            let src = if op.has_uimm() {
                d.rs1.to_string()
            } else {
                xreg(d.rs1).to_string()
            };
            format!("{} {}, {:#x}, {src}", op.mnemonic(), xreg(d.rd), d.imm)
        } else if d.rs1 != 0 || d.rs2 != 0 {
            format!("{} {}, {}", op.mnemonic(), xreg(d.rs1), xreg(d.rs2))
        } else {
            op.mnemonic().to_string()
        };
    }
    match d.class {
        OpcodeClass::Jal => format!("jal {}, {}", xreg(d.rd), d.imm_signed()),
        OpcodeClass::Jalr => format!("jalr {}, {}({})", xreg(d.rd), d.imm_signed(), xreg(d.rs1)),
        OpcodeClass::Lui => format!("lui {}, {:#x}", xreg(d.rd), (d.imm >> 12) & 0xF_FFFF),
        OpcodeClass::Auipc => format!("auipc {}, {:#x}", xreg(d.rd), (d.imm >> 12) & 0xF_FFFF),
        OpcodeClass::MiscMem if d.funct3() == funct3::FENCE_I => "fence.i".to_string(),
        OpcodeClass::MiscMem => format!(
            "fence {}, {}",
            fence_set(d.fence.pred),
            fence_set(d.fence.succ)
        ),
        _ => "unknown".to_string(),
    }
}

/// Renders a fence ordering set (`iorw`, `rw`, ...).
fn fence_set(mask: u8) -> String {
    FENCE_SET
        .iter()
        .filter(|(bit, _)| mask & bit != 0)
        .map(|&(_, c)| c)
        .collect()
}
