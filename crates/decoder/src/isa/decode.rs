//! RISC-V Instruction Decoder.
//!
//! This module turns a raw 32-bit instruction word into a validated
//! [`DecodeResult`]. It performs:
//! 1. **Extraction:** Slices every raw field once via [`RawFields::extract`].
//! 2. **Classification:** Maps the primary opcode to an [`OpcodeClass`].
//! 3. **Dispatch:** Runs the ALU, FPU, or memory subcode generator (or a fixed
//!    class rule for branches, jumps, SYSTEM and fences) and builds the
//!    immediate for the class's format.
//! 4. **Legality:** Rejects unmatched encodings, nonzero reserved fields, and
//!    RV64-only subcodes on an RV32 decoder.
//!
//! Decoding is a pure, single pass. The same word and width always produce the
//! same result or the same [`IllegalInstruction`].

use serde::Serialize;

use crate::common::error::{IllegalInstruction, IllegalReason};
use crate::config::Xlen;
use crate::isa::immediate::{self, ImmFormat};
use crate::isa::instruction::{InstructionBits, RawFields};
use crate::isa::opcode::{OpcodeClass, classify};
use crate::isa::privileged::opcodes as sys;
use crate::isa::rvf;
use crate::isa::rvi::funct3;
use crate::isa::subcode::{AtomicOp, OperationSubcode, alu, fpu, mem};

/// Width of the CSR address field.
const CSR_ADDR_BITS: u32 = 12;

/// Operation category tag (4 bits) routing the result to a functional unit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum OpCategory {
    /// Integer ALU.
    Alu = 0x1,
    /// Single-precision FPU.
    FpuSingle = 0x2,
    /// Double-precision FPU.
    FpuDouble = 0x3,
    /// Load/store unit (including AMOs).
    Memory = 0x4,
    /// Fence unit.
    Fence = 0x5,
    /// Conditional branch.
    Branch = 0x6,
    /// Unconditional jump (JAL / JALR).
    Jump = 0x7,
    /// LUI / AUIPC.
    UpperImm = 0x8,
    /// Environment calls, trap returns, and CSR access.
    System = 0x9,
}

impl OpCategory {
    /// The 4-bit tag value.
    pub const fn bits(self) -> u8 {
        self as u8
    }
}

/// Fence ordering sets, four bits each (`I`, `O`, `R`, `W` from MSB to LSB).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub struct FenceMasks {
    /// Predecessor set (bits 27-24).
    pub pred: u8,
    /// Successor set (bits 23-20).
    pub succ: u8,
}

/// Conditional branch comparison.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BranchCond {
    /// Branch if equal.
    Eq,
    /// Branch if not equal.
    Ne,
    /// Branch if less than (signed).
    Lt,
    /// Branch if greater or equal (signed).
    Ge,
    /// Branch if less than (unsigned).
    Ltu,
    /// Branch if greater or equal (unsigned).
    Geu,
}

impl BranchCond {
    /// Decodes a BRANCH `funct3`. `010` and `011` are unassigned.
    pub const fn from_funct3(f3: u32) -> Option<Self> {
        Some(match f3 {
            funct3::BEQ => Self::Eq,
            funct3::BNE => Self::Ne,
            funct3::BLT => Self::Lt,
            funct3::BGE => Self::Ge,
            funct3::BLTU => Self::Ltu,
            funct3::BGEU => Self::Geu,
            _ => return None,
        })
    }

    /// Assembly mnemonic.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Eq => "beq",
            Self::Ne => "bne",
            Self::Lt => "blt",
            Self::Ge => "bge",
            Self::Ltu => "bltu",
            Self::Geu => "bgeu",
        }
    }
}

/// SYSTEM-opcode operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SystemOp {
    /// Environment call.
    Ecall,
    /// Breakpoint.
    Ebreak,
    /// Return from machine-mode trap.
    Mret,
    /// Return from supervisor-mode trap.
    Sret,
    /// Wait for interrupt.
    Wfi,
    /// Address-translation fence.
    SfenceVma,
    /// Atomic CSR read/write.
    Csrrw,
    /// Atomic CSR read and set bits.
    Csrrs,
    /// Atomic CSR read and clear bits.
    Csrrc,
    /// Atomic CSR read/write with a 5-bit immediate in `rs1`.
    Csrrwi,
    /// Atomic CSR read and set bits with a 5-bit immediate in `rs1`.
    Csrrsi,
    /// Atomic CSR read and clear bits with a 5-bit immediate in `rs1`.
    Csrrci,
}

impl SystemOp {
    /// True for the six CSR access operations.
    pub const fn is_csr(self) -> bool {
        matches!(
            self,
            Self::Csrrw | Self::Csrrs | Self::Csrrc | Self::Csrrwi | Self::Csrrsi | Self::Csrrci
        )
    }

    /// True for CSR operations whose `rs1` field is an immediate.
    pub const fn has_uimm(self) -> bool {
        matches!(self, Self::Csrrwi | Self::Csrrsi | Self::Csrrci)
    }

    /// Assembly mnemonic.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Ecall => "ecall",
            Self::Ebreak => "ebreak",
            Self::Mret => "mret",
            Self::Sret => "sret",
            Self::Wfi => "wfi",
            Self::SfenceVma => "sfence.vma",
            Self::Csrrw => "csrrw",
            Self::Csrrs => "csrrs",
            Self::Csrrc => "csrrc",
            Self::Csrrwi => "csrrwi",
            Self::Csrrsi => "csrrsi",
            Self::Csrrci => "csrrci",
        }
    }
}

/// Validated description of one instruction.
///
/// Register fields that an instruction does not use read as zero. `imm` is an
/// XLEN-wide value: on RV32 its upper 32 bits are always clear.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct DecodeResult {
    /// Raw 32-bit instruction word.
    pub raw: u32,
    /// Width the word was decoded for.
    pub xlen: Xlen,
    /// Opcode class.
    pub class: OpcodeClass,
    /// ALU, FPU, or memory subcode (absent for classes without a generator).
    pub subcode: Option<OperationSubcode>,
    /// Destination register.
    pub rd: u8,
    /// First source register (the CSR immediate for `CSRR*I`).
    pub rs1: u8,
    /// Second source register.
    pub rs2: u8,
    /// Third source register (fused multiply-add only).
    pub rs3: u8,
    /// Extended immediate.
    pub imm: u64,
    /// Functional-unit category.
    pub category: OpCategory,
    /// Fence ordering sets (zero unless the word is a FENCE).
    pub fence: FenceMasks,
    /// Validity flag. Always true for a returned result.
    pub valid: bool,
    /// Branch comparison.
    pub branch: Option<BranchCond>,
    /// SYSTEM operation.
    pub system: Option<SystemOp>,
    /// Atomic operation for AMO words.
    pub atomic: Option<AtomicOp>,
    /// Rounding mode for floating-point operations that take one.
    pub rounding_mode: Option<u8>,
}

impl DecodeResult {
    /// Creates an empty result for `fields`; the per-class rules fill it in.
    const fn new(fields: &RawFields, class: OpcodeClass, xlen: Xlen, category: OpCategory) -> Self {
        Self {
            raw: fields.raw,
            xlen,
            class,
            subcode: None,
            rd: 0,
            rs1: 0,
            rs2: 0,
            rs3: 0,
            imm: 0,
            category,
            fence: FenceMasks { pred: 0, succ: 0 },
            valid: true,
            branch: None,
            system: None,
            atomic: None,
            rounding_mode: None,
        }
    }

    /// Immediate reinterpreted as a signed value at the decoded width.
    pub const fn imm_signed(&self) -> i64 {
        match self.xlen {
            Xlen::Rv32 => self.imm as u32 as i32 as i64,
            Xlen::Rv64 => self.imm as i64,
        }
    }

    /// `funct3` of the raw word.
    pub const fn funct3(&self) -> u32 {
        (self.raw >> 12) & 0x7
    }

    /// The ALU subcode, if this is an integer arithmetic word.
    pub const fn alu_op(&self) -> Option<alu::AluOp> {
        match self.subcode {
            Some(OperationSubcode::Alu(op)) => Some(op),
            _ => None,
        }
    }

    /// The FPU subcode, if this is a floating-point arithmetic word.
    pub const fn fpu_op(&self) -> Option<fpu::FpuOp> {
        match self.subcode {
            Some(OperationSubcode::Fpu(op)) => Some(op),
            _ => None,
        }
    }

    /// The memory subcode, if this is a load, store, or AMO.
    pub const fn mem_op(&self) -> Option<mem::MemOp> {
        match self.subcode {
            Some(OperationSubcode::Mem(op)) => Some(op),
            _ => None,
        }
    }
}

/// Decodes a RISC-V instruction word.
///
/// # Arguments
///
/// * `inst` - The 32-bit instruction encoding to decode.
/// * `xlen` - Register width the decoder is configured for.
///
/// # Errors
///
/// Returns [`IllegalInstruction`] when the word is not a 32-bit encoding,
/// belongs to an unsupported opcode class, matches no operation, sets a
/// reserved field, or names an RV64-only operation while `xlen` is RV32.
///
/// # Examples
///
/// ```
/// use rvdecode_core::{OpCategory, Xlen, decode};
/// use rvdecode_core::isa::opcode::OpcodeClass;
///
/// let result = decode(0xFFF0_0013, Xlen::Rv32).unwrap(); // addi x0, x0, -1
/// assert_eq!(result.class, OpcodeClass::OpImm);
/// assert_eq!(result.category, OpCategory::Alu);
/// assert_eq!(result.imm, 0xFFFF_FFFF);
/// assert_eq!(result.imm_signed(), -1);
///
/// assert!(decode(0x0000_0000, Xlen::Rv32).is_err());
/// ```
pub fn decode(inst: u32, xlen: Xlen) -> Result<DecodeResult, IllegalInstruction> {
    let fields = RawFields::extract(inst);
    let class = classify(fields.opcode7);

    match decode_class(&fields, class, xlen) {
        Ok(result) => {
            tracing::trace!(
                raw = format_args!("{inst:#010x}"),
                %class,
                category = ?result.category,
                subcode = ?result.subcode,
                "decoded"
            );
            Ok(result)
        }
        Err(reason) => {
            let err = IllegalInstruction::new(inst, class, reason);
            tracing::debug!(%err, "illegal instruction");
            Err(err)
        }
    }
}

/// Applies the per-class rules and width gating.
fn decode_class(
    f: &RawFields,
    class: OpcodeClass,
    xlen: Xlen,
) -> Result<DecodeResult, IllegalReason> {
    let result = match class {
        OpcodeClass::Op | OpcodeClass::Op32 => {
            let op = alu::generate(class, f.funct3, f.funct7).ok_or(IllegalReason::NoMatch)?;
            let mut r = DecodeResult::new(f, class, xlen, OpCategory::Alu);
            r.subcode = Some(OperationSubcode::Alu(op));
            set_regs(&mut r, Some(f.rd), Some(f.rs1), Some(f.rs2));
            r
        }
        OpcodeClass::OpImm | OpcodeClass::OpImm32 => {
            let op = alu::generate(class, f.funct3, f.funct7).ok_or(IllegalReason::NoMatch)?;
            let mut r = DecodeResult::new(f, class, xlen, OpCategory::Alu);
            r.subcode = Some(OperationSubcode::Alu(op));
            r.imm = if op.is_shift_immediate() {
                immediate::zero_extend(f.raw.shamt(xlen), xlen.shamt_bits(), xlen)
            } else {
                immediate::from_fields(f, ImmFormat::I, xlen)
            };
            set_regs(&mut r, Some(f.rd), Some(f.rs1), None);
            r
        }
        OpcodeClass::Load | OpcodeClass::LoadFp => {
            let op = mem::generate(class, f.funct3).ok_or(IllegalReason::NoMatch)?;
            let mut r = DecodeResult::new(f, class, xlen, OpCategory::Memory);
            r.subcode = Some(OperationSubcode::Mem(op));
            r.imm = immediate::from_fields(f, ImmFormat::I, xlen);
            set_regs(&mut r, Some(f.rd), Some(f.rs1), None);
            r
        }
        OpcodeClass::Store | OpcodeClass::StoreFp => {
            let op = mem::generate(class, f.funct3).ok_or(IllegalReason::NoMatch)?;
            let mut r = DecodeResult::new(f, class, xlen, OpCategory::Memory);
            r.subcode = Some(OperationSubcode::Mem(op));
            r.imm = immediate::from_fields(f, ImmFormat::S, xlen);
            set_regs(&mut r, None, Some(f.rs1), Some(f.rs2));
            r
        }
        OpcodeClass::Amo => {
            let (op, atomic) = mem::generate_amo(f.funct3, f.raw.funct5(), f.rs2)
                .ok_or(IllegalReason::NoMatch)?;
            let mut r = DecodeResult::new(f, class, xlen, OpCategory::Memory);
            r.subcode = Some(OperationSubcode::Mem(op));
            r.atomic = Some(atomic);
            let rs2 = if atomic == AtomicOp::Lr { None } else { Some(f.rs2) };
            set_regs(&mut r, Some(f.rd), Some(f.rs1), rs2);
            r
        }
        OpcodeClass::OpFp
        | OpcodeClass::Madd
        | OpcodeClass::Msub
        | OpcodeClass::Nmsub
        | OpcodeClass::Nmadd => decode_fp(f, class, xlen)?,
        OpcodeClass::Branch => {
            let cond = BranchCond::from_funct3(f.funct3).ok_or(IllegalReason::NoMatch)?;
            let mut r = DecodeResult::new(f, class, xlen, OpCategory::Branch);
            r.branch = Some(cond);
            r.imm = immediate::from_fields(f, ImmFormat::B, xlen);
            set_regs(&mut r, None, Some(f.rs1), Some(f.rs2));
            r
        }
        OpcodeClass::Jal => {
            let mut r = DecodeResult::new(f, class, xlen, OpCategory::Jump);
            r.imm = immediate::from_fields(f, ImmFormat::J, xlen);
            set_regs(&mut r, Some(f.rd), None, None);
            r
        }
        OpcodeClass::Jalr => {
            if f.funct3 != funct3::JALR {
                return Err(IllegalReason::NoMatch);
            }
            let mut r = DecodeResult::new(f, class, xlen, OpCategory::Jump);
            r.imm = immediate::from_fields(f, ImmFormat::I, xlen);
            set_regs(&mut r, Some(f.rd), Some(f.rs1), None);
            r
        }
        OpcodeClass::Lui | OpcodeClass::Auipc => {
            let mut r = DecodeResult::new(f, class, xlen, OpCategory::UpperImm);
            r.imm = immediate::from_fields(f, ImmFormat::U, xlen);
            set_regs(&mut r, Some(f.rd), None, None);
            r
        }
        OpcodeClass::System => decode_system(f, xlen)?,
        OpcodeClass::MiscMem => decode_fence(f, xlen)?,
        OpcodeClass::Custom0
        | OpcodeClass::Custom1
        | OpcodeClass::Custom2
        | OpcodeClass::Custom3
        | OpcodeClass::Reserved0
        | OpcodeClass::Reserved1
        | OpcodeClass::Reserved2
        | OpcodeClass::Inst48b0
        | OpcodeClass::Inst48b1
        | OpcodeClass::Inst64b
        | OpcodeClass::InstVliw => return Err(IllegalReason::UnsupportedClass),
        OpcodeClass::Unknown => return Err(IllegalReason::NotThirtyTwoBit),
    };

    if xlen == Xlen::Rv32 && result.subcode.is_some_and(OperationSubcode::width_bit) {
        return Err(IllegalReason::Rv64Only);
    }
    Ok(result)
}

/// Copies the register fields an instruction actually uses.
fn set_regs(r: &mut DecodeResult, rd: Option<u8>, rs1: Option<u8>, rs2: Option<u8>) {
    r.rd = rd.unwrap_or(0);
    r.rs1 = rs1.unwrap_or(0);
    r.rs2 = rs2.unwrap_or(0);
}

/// `OP_FP` and the fused multiply-add classes.
fn decode_fp(f: &RawFields, class: OpcodeClass, xlen: Xlen) -> Result<DecodeResult, IllegalReason> {
    let fmt = f.raw.fmt();
    let op = fpu::generate(class, f.raw.funct5(), fmt, f.funct3, f.rs2)
        .ok_or(IllegalReason::NoMatch)?;
    let category = if fmt == rvf::FMT_D {
        OpCategory::FpuDouble
    } else {
        OpCategory::FpuSingle
    };

    let mut r = DecodeResult::new(f, class, xlen, category);
    r.subcode = Some(OperationSubcode::Fpu(op));
    if op.uses_rounding_mode() {
        r.rounding_mode = Some(f.funct3 as u8);
    }
    let rs2 = if op.reads_rs2() { Some(f.rs2) } else { None };
    set_regs(&mut r, Some(f.rd), Some(f.rs1), rs2);
    if op.is_fused() {
        r.rs3 = f.rs3;
    }
    Ok(r)
}

/// SYSTEM: privileged instructions by exact encoding, CSR access by `funct3`.
fn decode_system(f: &RawFields, xlen: Xlen) -> Result<DecodeResult, IllegalReason> {
    let mut r = DecodeResult::new(f, OpcodeClass::System, xlen, OpCategory::System);

    let op = match f.funct3 {
        sys::PRIV => match f.raw {
            sys::ECALL => SystemOp::Ecall,
            sys::EBREAK => SystemOp::Ebreak,
            sys::MRET => SystemOp::Mret,
            sys::SRET => SystemOp::Sret,
            sys::WFI => SystemOp::Wfi,
            _ if f.funct7 == sys::SFENCE_VMA_FUNCT7 && f.rd == 0 => {
                set_regs(&mut r, None, Some(f.rs1), Some(f.rs2));
                SystemOp::SfenceVma
            }
            _ => return Err(IllegalReason::NoMatch),
        },
        sys::CSRRW => SystemOp::Csrrw,
        sys::CSRRS => SystemOp::Csrrs,
        sys::CSRRC => SystemOp::Csrrc,
        sys::CSRRWI => SystemOp::Csrrwi,
        sys::CSRRSI => SystemOp::Csrrsi,
        sys::CSRRCI => SystemOp::Csrrci,
        _ => return Err(IllegalReason::NoMatch),
    };

    if op.is_csr() {
        r.imm = immediate::zero_extend(f.raw.csr(), CSR_ADDR_BITS, xlen);
        set_regs(&mut r, Some(f.rd), Some(f.rs1), None);
    }
    r.system = Some(op);
    Ok(r)
}

/// MISC_MEM: FENCE and FENCE.I with their reserved-field checks.
fn decode_fence(f: &RawFields, xlen: Xlen) -> Result<DecodeResult, IllegalReason> {
    let mut r = DecodeResult::new(f, OpcodeClass::MiscMem, xlen, OpCategory::Fence);

    match f.funct3 {
        funct3::FENCE => {
            if f.rd != 0 || f.rs1 != 0 || f.raw.fm() != 0 {
                return Err(IllegalReason::ReservedBits);
            }
            r.fence = FenceMasks {
                pred: f.raw.pred() as u8,
                succ: f.raw.succ() as u8,
            };
            r.imm = immediate::from_fields(f, ImmFormat::I, xlen);
        }
        funct3::FENCE_I => {
            if f.rd != 0 || f.rs1 != 0 || f.imm_i != 0 {
                return Err(IllegalReason::ReservedBits);
            }
        }
        _ => return Err(IllegalReason::NoMatch),
    }
    Ok(r)
}
