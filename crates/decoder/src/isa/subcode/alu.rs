//! ALU subcode table and generator.
//!
//! Every integer operation has a fixed 7-bit code laid out as
//! `[width:1][immed:1][function:5]`, with the function field itself packed as
//! `[m:1][alt:1][funct3:3]`:
//!
//! * `funct3` is copied straight from the instruction.
//! * `alt` is `funct7[5]` (SUB, SRA and their immediate / word forms).
//! * `m` selects the multiply/divide extension.
//! * `immed` marks register-immediate forms.
//! * `width` marks the RV64-only word (`*W`) forms.
//!
//! Register and immediate siblings therefore differ only in bit `0x20`.
//! The generator builds a candidate code from the fields and accepts it only if
//! it names a real operation.

use std::fmt;

use serde::Serialize;

use crate::isa::opcode::OpcodeClass;
use crate::isa::rvi::{funct3, funct7};
use crate::isa::rvm;

/// Bit marking RV64-only word operations.
pub const WIDTH_BIT: u8 = 0x40;

/// Bit marking register-immediate operations.
pub const IMMEDIATE_BIT: u8 = 0x20;

/// Bit of the function field selecting the M extension.
const M_BIT: u8 = 0x10;

/// Bit of the function field selecting the alternate operation.
const ALT_BIT: u8 = 0x08;

/// Integer ALU operation with its literal subcode as discriminant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[repr(u8)]
pub enum AluOp {
    /// Integer addition.
    Add = 0x00,

    /// Shift left logical.
    Sll = 0x01,

    /// Set less than (signed).
    Slt = 0x02,

    /// Set less than unsigned.
    Sltu = 0x03,

    /// Bitwise XOR.
    Xor = 0x04,

    /// Shift right logical.
    Srl = 0x05,

    /// Bitwise OR.
    Or = 0x06,

    /// Bitwise AND.
    And = 0x07,

    /// Integer subtraction.
    Sub = 0x08,

    /// Shift right arithmetic.
    Sra = 0x0D,

    /// Integer multiply (low bits).
    Mul = 0x10,

    /// Integer multiply (high bits, signed x signed).
    Mulh = 0x11,

    /// Integer multiply (high bits, signed x unsigned).
    Mulhsu = 0x12,

    /// Integer multiply (high bits, unsigned x unsigned).
    Mulhu = 0x13,

    /// Integer divide (signed).
    Div = 0x14,

    /// Integer divide (unsigned).
    Divu = 0x15,

    /// Integer remainder (signed).
    Rem = 0x16,

    /// Integer remainder (unsigned).
    Remu = 0x17,

    /// Add immediate.
    Addi = 0x20,

    /// Shift left logical immediate.
    Slli = 0x21,

    /// Set less than immediate.
    Slti = 0x22,

    /// Set less than immediate unsigned.
    Sltiu = 0x23,

    /// XOR immediate.
    Xori = 0x24,

    /// Shift right logical immediate.
    Srli = 0x25,

    /// OR immediate.
    Ori = 0x26,

    /// AND immediate.
    Andi = 0x27,

    /// Shift right arithmetic immediate.
    Srai = 0x2D,

    /// Add word (RV64).
    Addw = 0x40,

    /// Shift left logical word (RV64).
    Sllw = 0x41,

    /// Shift right logical word (RV64).
    Srlw = 0x45,

    /// Subtract word (RV64).
    Subw = 0x48,

    /// Shift right arithmetic word (RV64).
    Sraw = 0x4D,

    /// Multiply word (RV64).
    Mulw = 0x50,

    /// Divide word (RV64).
    Divw = 0x54,

    /// Divide word unsigned (RV64).
    Divuw = 0x55,

    /// Remainder word (RV64).
    Remw = 0x56,

    /// Remainder word unsigned (RV64).
    Remuw = 0x57,

    /// Add immediate word (RV64).
    Addiw = 0x60,

    /// Shift left logical immediate word (RV64).
    Slliw = 0x61,

    /// Shift right logical immediate word (RV64).
    Srliw = 0x65,

    /// Shift right arithmetic immediate word (RV64).
    Sraiw = 0x6D,
}

impl AluOp {
    /// Every ALU operation in code order.
    pub const ALL: [Self; 41] = [
        Self::Add,
        Self::Sll,
        Self::Slt,
        Self::Sltu,
        Self::Xor,
        Self::Srl,
        Self::Or,
        Self::And,
        Self::Sub,
        Self::Sra,
        Self::Mul,
        Self::Mulh,
        Self::Mulhsu,
        Self::Mulhu,
        Self::Div,
        Self::Divu,
        Self::Rem,
        Self::Remu,
        Self::Addi,
        Self::Slli,
        Self::Slti,
        Self::Sltiu,
        Self::Xori,
        Self::Srli,
        Self::Ori,
        Self::Andi,
        Self::Srai,
        Self::Addw,
        Self::Sllw,
        Self::Srlw,
        Self::Subw,
        Self::Sraw,
        Self::Mulw,
        Self::Divw,
        Self::Divuw,
        Self::Remw,
        Self::Remuw,
        Self::Addiw,
        Self::Slliw,
        Self::Srliw,
        Self::Sraiw,
    ];

    /// Literal 7-bit subcode.
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Looks up the operation with the given subcode.
    pub const fn from_code(code: u8) -> Option<Self> {
        Some(match code {
            0x00 => Self::Add,
            0x01 => Self::Sll,
            0x02 => Self::Slt,
            0x03 => Self::Sltu,
            0x04 => Self::Xor,
            0x05 => Self::Srl,
            0x06 => Self::Or,
            0x07 => Self::And,
            0x08 => Self::Sub,
            0x0D => Self::Sra,
            0x10 => Self::Mul,
            0x11 => Self::Mulh,
            0x12 => Self::Mulhsu,
            0x13 => Self::Mulhu,
            0x14 => Self::Div,
            0x15 => Self::Divu,
            0x16 => Self::Rem,
            0x17 => Self::Remu,
            0x20 => Self::Addi,
            0x21 => Self::Slli,
            0x22 => Self::Slti,
            0x23 => Self::Sltiu,
            0x24 => Self::Xori,
            0x25 => Self::Srli,
            0x26 => Self::Ori,
            0x27 => Self::Andi,
            0x2D => Self::Srai,
            0x40 => Self::Addw,
            0x41 => Self::Sllw,
            0x45 => Self::Srlw,
            0x48 => Self::Subw,
            0x4D => Self::Sraw,
            0x50 => Self::Mulw,
            0x54 => Self::Divw,
            0x55 => Self::Divuw,
            0x56 => Self::Remw,
            0x57 => Self::Remuw,
            0x60 => Self::Addiw,
            0x61 => Self::Slliw,
            0x65 => Self::Srliw,
            0x6D => Self::Sraiw,
            _ => return None,
        })
    }

    /// True for register-immediate forms.
    pub const fn is_immediate(self) -> bool {
        self.code() & IMMEDIATE_BIT != 0
    }

    /// True for RV64-only word forms.
    pub const fn width_bit(self) -> bool {
        self.code() & WIDTH_BIT != 0
    }

    /// True for the immediate shifts, whose immediate is a shift amount.
    pub const fn is_shift_immediate(self) -> bool {
        matches!(
            self,
            Self::Slli | Self::Srli | Self::Srai | Self::Slliw | Self::Srliw | Self::Sraiw
        )
    }

    /// Assembly mnemonic.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Sll => "sll",
            Self::Slt => "slt",
            Self::Sltu => "sltu",
            Self::Xor => "xor",
            Self::Srl => "srl",
            Self::Or => "or",
            Self::And => "and",
            Self::Sub => "sub",
            Self::Sra => "sra",
            Self::Mul => "mul",
            Self::Mulh => "mulh",
            Self::Mulhsu => "mulhsu",
            Self::Mulhu => "mulhu",
            Self::Div => "div",
            Self::Divu => "divu",
            Self::Rem => "rem",
            Self::Remu => "remu",
            Self::Addi => "addi",
            Self::Slli => "slli",
            Self::Slti => "slti",
            Self::Sltiu => "sltiu",
            Self::Xori => "xori",
            Self::Srli => "srli",
            Self::Ori => "ori",
            Self::Andi => "andi",
            Self::Srai => "srai",
            Self::Addw => "addw",
            Self::Sllw => "sllw",
            Self::Srlw => "srlw",
            Self::Subw => "subw",
            Self::Sraw => "sraw",
            Self::Mulw => "mulw",
            Self::Divw => "divw",
            Self::Divuw => "divuw",
            Self::Remw => "remw",
            Self::Remuw => "remuw",
            Self::Addiw => "addiw",
            Self::Slliw => "slliw",
            Self::Srliw => "srliw",
            Self::Sraiw => "sraiw",
        }
    }
}

impl fmt::Display for AluOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}

/// Generates the ALU subcode for an integer arithmetic word.
///
/// Only `Op`, `OpImm`, `Op32` and `OpImm32` produce a subcode; every other
/// class yields `None`. Width gating is left to the caller.
///
/// # Arguments
///
/// * `class` - Opcode class of the word.
/// * `f3` - `funct3` field.
/// * `f7` - `funct7` field. Its top six bits are the shift-immediate `funct6`.
///
/// # Examples
///
/// ```
/// use rvdecode_core::isa::opcode::OpcodeClass;
/// use rvdecode_core::isa::subcode::alu::{AluOp, generate};
///
/// assert_eq!(generate(OpcodeClass::Op, 0b000, 0b0100000), Some(AluOp::Sub));
/// // SRAI with an RV64 shift amount of 32 sets funct7 bit 0.
/// assert_eq!(generate(OpcodeClass::OpImm, 0b101, 0b0100001), Some(AluOp::Srai));
/// assert_eq!(generate(OpcodeClass::Op, 0b001, 0b0100000), None);
/// ```
pub const fn generate(class: OpcodeClass, f3: u32, f7: u32) -> Option<AluOp> {
    let function = f3 as u8;
    let code = match class {
        OpcodeClass::Op => match f7 {
            funct7::DEFAULT => function,
            funct7::SUB => ALT_BIT | function,
            rvm::M_EXTENSION => M_BIT | function,
            _ => return None,
        },
        OpcodeClass::OpImm => match f3 {
            funct3::SLL | funct3::SRL_SRA => match f7 >> 1 {
                funct7::SHIFT_LOGICAL_F6 => IMMEDIATE_BIT | function,
                funct7::SHIFT_ARITH_F6 if f3 == funct3::SRL_SRA => {
                    IMMEDIATE_BIT | ALT_BIT | function
                }
                _ => return None,
            },
            // Remaining funct3 values carry a plain 12-bit immediate.
            _ => IMMEDIATE_BIT | function,
        },
        OpcodeClass::Op32 => match f7 {
            funct7::DEFAULT => WIDTH_BIT | function,
            funct7::SUB => WIDTH_BIT | ALT_BIT | function,
            rvm::M_EXTENSION => WIDTH_BIT | M_BIT | function,
            _ => return None,
        },
        OpcodeClass::OpImm32 => match f3 {
            funct3::ADD_SUB => WIDTH_BIT | IMMEDIATE_BIT,
            funct3::SLL | funct3::SRL_SRA => match f7 {
                funct7::DEFAULT => WIDTH_BIT | IMMEDIATE_BIT | function,
                funct7::SRA if f3 == funct3::SRL_SRA => {
                    WIDTH_BIT | IMMEDIATE_BIT | ALT_BIT | function
                }
                _ => return None,
            },
            _ => return None,
        },
        _ => return None,
    };
    AluOp::from_code(code)
}
