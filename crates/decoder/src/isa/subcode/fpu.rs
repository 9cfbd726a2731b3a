//! FPU subcode table and generator.
//!
//! Floating-point operations use a 6-bit code `[width:1][function:5]`. The
//! precision is not part of the code; it travels separately as the decode
//! category (`FpuSingle` / `FpuDouble`), taken from the instruction's `fmt`
//! field. The four register moves get distinct codes of their own because the
//! X-to-F and F-to-X directions and the 32/64-bit payloads are not
//! interchangeable.

use std::fmt;

use serde::Serialize;

use crate::isa::opcode::OpcodeClass;
use crate::isa::rvf::{self, funct3, funct5};

/// Bit marking RV64-only floating-point operations.
pub const WIDTH_BIT: u8 = 0x20;

/// Floating-point operation with its literal subcode as discriminant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[repr(u8)]
pub enum FpuOp {
    /// Addition.
    Fadd = 0x00,
    /// Subtraction.
    Fsub = 0x01,
    /// Multiplication.
    Fmul = 0x02,
    /// Division.
    Fdiv = 0x03,
    /// Square root.
    Fsqrt = 0x04,
    /// Sign injection (copy).
    Fsgnj = 0x05,
    /// Sign injection (negate).
    Fsgnjn = 0x06,
    /// Sign injection (xor).
    Fsgnjx = 0x07,
    /// Minimum.
    Fmin = 0x08,
    /// Maximum.
    Fmax = 0x09,
    /// Convert to signed word.
    FcvtW = 0x0A,
    /// Convert to unsigned word.
    FcvtWu = 0x0B,
    /// Move single-precision bits to an integer register.
    FmvXW = 0x0C,
    /// Equal.
    Feq = 0x0D,
    /// Less than.
    Flt = 0x0E,
    /// Less than or equal.
    Fle = 0x0F,
    /// Classify.
    Fclass = 0x10,
    /// Convert from signed word.
    FcvtFW = 0x11,
    /// Convert from unsigned word.
    FcvtFWu = 0x12,
    /// Move integer bits to a single-precision register.
    FmvWX = 0x13,
    /// Convert between single and double precision.
    FcvtFmt = 0x14,
    /// Fused multiply-add.
    Fmadd = 0x15,
    /// Fused multiply-subtract.
    Fmsub = 0x16,
    /// Fused negated multiply-subtract.
    Fnmsub = 0x17,
    /// Fused negated multiply-add.
    Fnmadd = 0x18,
    /// Convert to signed long (RV64).
    FcvtL = 0x2A,
    /// Convert to unsigned long (RV64).
    FcvtLu = 0x2B,
    /// Move double-precision bits to an integer register (RV64).
    FmvXD = 0x2C,
    /// Convert from signed long (RV64).
    FcvtFL = 0x31,
    /// Convert from unsigned long (RV64).
    FcvtFLu = 0x32,
    /// Move integer bits to a double-precision register (RV64).
    FmvDX = 0x33,
}

impl FpuOp {
    /// Every FPU operation in code order.
    pub const ALL: [Self; 31] = [
        Self::Fadd,
        Self::Fsub,
        Self::Fmul,
        Self::Fdiv,
        Self::Fsqrt,
        Self::Fsgnj,
        Self::Fsgnjn,
        Self::Fsgnjx,
        Self::Fmin,
        Self::Fmax,
        Self::FcvtW,
        Self::FcvtWu,
        Self::FmvXW,
        Self::Feq,
        Self::Flt,
        Self::Fle,
        Self::Fclass,
        Self::FcvtFW,
        Self::FcvtFWu,
        Self::FmvWX,
        Self::FcvtFmt,
        Self::Fmadd,
        Self::Fmsub,
        Self::Fnmsub,
        Self::Fnmadd,
        Self::FcvtL,
        Self::FcvtLu,
        Self::FmvXD,
        Self::FcvtFL,
        Self::FcvtFLu,
        Self::FmvDX,
    ];

    /// Literal 6-bit subcode.
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Looks up the operation with the given subcode.
    pub const fn from_code(code: u8) -> Option<Self> {
        Some(match code {
            0x00 => Self::Fadd,
            0x01 => Self::Fsub,
            0x02 => Self::Fmul,
            0x03 => Self::Fdiv,
            0x04 => Self::Fsqrt,
            0x05 => Self::Fsgnj,
            0x06 => Self::Fsgnjn,
            0x07 => Self::Fsgnjx,
            0x08 => Self::Fmin,
            0x09 => Self::Fmax,
            0x0A => Self::FcvtW,
            0x0B => Self::FcvtWu,
            0x0C => Self::FmvXW,
            0x0D => Self::Feq,
            0x0E => Self::Flt,
            0x0F => Self::Fle,
            0x10 => Self::Fclass,
            0x11 => Self::FcvtFW,
            0x12 => Self::FcvtFWu,
            0x13 => Self::FmvWX,
            0x14 => Self::FcvtFmt,
            0x15 => Self::Fmadd,
            0x16 => Self::Fmsub,
            0x17 => Self::Fnmsub,
            0x18 => Self::Fnmadd,
            0x2A => Self::FcvtL,
            0x2B => Self::FcvtLu,
            0x2C => Self::FmvXD,
            0x31 => Self::FcvtFL,
            0x32 => Self::FcvtFLu,
            0x33 => Self::FmvDX,
            _ => return None,
        })
    }

    /// True for RV64-only operations.
    pub const fn width_bit(self) -> bool {
        self.code() & WIDTH_BIT != 0
    }

    /// True if `funct3` holds a rounding mode for this operation.
    pub const fn uses_rounding_mode(self) -> bool {
        matches!(
            self,
            Self::Fadd
                | Self::Fsub
                | Self::Fmul
                | Self::Fdiv
                | Self::Fsqrt
                | Self::FcvtW
                | Self::FcvtWu
                | Self::FcvtFW
                | Self::FcvtFWu
                | Self::FcvtFmt
                | Self::Fmadd
                | Self::Fmsub
                | Self::Fnmsub
                | Self::Fnmadd
                | Self::FcvtL
                | Self::FcvtLu
                | Self::FcvtFL
                | Self::FcvtFLu
        )
    }

    /// True for the fused multiply-add family (three source registers).
    pub const fn is_fused(self) -> bool {
        matches!(self, Self::Fmadd | Self::Fmsub | Self::Fnmsub | Self::Fnmadd)
    }

    /// True if `rs2` names a source register rather than a selector.
    pub const fn reads_rs2(self) -> bool {
        matches!(
            self,
            Self::Fadd
                | Self::Fsub
                | Self::Fmul
                | Self::Fdiv
                | Self::Fsgnj
                | Self::Fsgnjn
                | Self::Fsgnjx
                | Self::Fmin
                | Self::Fmax
                | Self::Feq
                | Self::Flt
                | Self::Fle
                | Self::Fmadd
                | Self::Fmsub
                | Self::Fnmsub
                | Self::Fnmadd
        )
    }

    /// True if the destination is an integer register.
    pub const fn writes_int(self) -> bool {
        matches!(
            self,
            Self::FcvtW
                | Self::FcvtWu
                | Self::FcvtL
                | Self::FcvtLu
                | Self::FmvXW
                | Self::FmvXD
                | Self::Feq
                | Self::Flt
                | Self::Fle
                | Self::Fclass
        )
    }

    /// True if the first source is an integer register.
    pub const fn reads_int(self) -> bool {
        matches!(
            self,
            Self::FcvtFW | Self::FcvtFWu | Self::FcvtFL | Self::FcvtFLu | Self::FmvWX | Self::FmvDX
        )
    }

    /// Mnemonic stem without the precision suffix.
    ///
    /// Integer-to-float conversions use an `f` placeholder for the
    /// destination precision (`fcvt.f.w`), so every subcode has its own stem.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Fadd => "fadd",
            Self::Fsub => "fsub",
            Self::Fmul => "fmul",
            Self::Fdiv => "fdiv",
            Self::Fsqrt => "fsqrt",
            Self::Fsgnj => "fsgnj",
            Self::Fsgnjn => "fsgnjn",
            Self::Fsgnjx => "fsgnjx",
            Self::Fmin => "fmin",
            Self::Fmax => "fmax",
            Self::FcvtW => "fcvt.w",
            Self::FcvtWu => "fcvt.wu",
            Self::FmvXW => "fmv.x.w",
            Self::Feq => "feq",
            Self::Flt => "flt",
            Self::Fle => "fle",
            Self::Fclass => "fclass",
            Self::FcvtFW => "fcvt.f.w",
            Self::FcvtFWu => "fcvt.f.wu",
            Self::FmvWX => "fmv.w.x",
            Self::FcvtFmt => "fcvt",
            Self::Fmadd => "fmadd",
            Self::Fmsub => "fmsub",
            Self::Fnmsub => "fnmsub",
            Self::Fnmadd => "fnmadd",
            Self::FcvtL => "fcvt.l",
            Self::FcvtLu => "fcvt.lu",
            Self::FmvXD => "fmv.x.d",
            Self::FcvtFL => "fcvt.f.l",
            Self::FcvtFLu => "fcvt.f.lu",
            Self::FmvDX => "fmv.d.x",
        }
    }
}

impl fmt::Display for FpuOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}

/// Returns true if `rm` is a rounding mode the core accepts.
///
/// `101` and `110` are reserved encodings.
pub const fn is_valid_rounding_mode(rm: u32) -> bool {
    matches!(
        rm,
        funct3::RM_RNE
            | funct3::RM_RTZ
            | funct3::RM_RDN
            | funct3::RM_RUP
            | funct3::RM_RMM
            | funct3::RM_DYN
    )
}

/// Generates the FPU subcode for a floating-point word.
///
/// Handles `OpFp` and the four fused multiply-add classes. Returns `None` for
/// other classes, for `fmt` values other than single or double, for operand
/// fields that must hold a fixed value but do not, and for reserved rounding
/// modes. Width gating is left to the caller.
///
/// # Arguments
///
/// * `class` - Opcode class of the word.
/// * `f5` - Operation selector (bits 31-27). Ignored by the fused classes.
/// * `fmt` - Precision field (bits 26-25).
/// * `f3` - `funct3`: a sub-operation or the rounding mode.
/// * `rs2` - Second source field, which some operations reuse as a selector.
pub const fn generate(class: OpcodeClass, f5: u32, fmt: u32, f3: u32, rs2: u8) -> Option<FpuOp> {
    if fmt != rvf::FMT_S && fmt != rvf::FMT_D {
        return None;
    }
    let double = fmt == rvf::FMT_D;

    let op = match class {
        OpcodeClass::Madd => FpuOp::Fmadd,
        OpcodeClass::Msub => FpuOp::Fmsub,
        OpcodeClass::Nmsub => FpuOp::Fnmsub,
        OpcodeClass::Nmadd => FpuOp::Fnmadd,
        OpcodeClass::OpFp => match op_fp(f5, double, f3, rs2) {
            Some(op) => op,
            None => return None,
        },
        _ => return None,
    };

    if op.uses_rounding_mode() && !is_valid_rounding_mode(f3) {
        return None;
    }
    Some(op)
}

/// Resolves an `OP_FP` word from its selector fields.
const fn op_fp(f5: u32, double: bool, f3: u32, rs2: u8) -> Option<FpuOp> {
    let op = match f5 {
        funct5::FADD => FpuOp::Fadd,
        funct5::FSUB => FpuOp::Fsub,
        funct5::FMUL => FpuOp::Fmul,
        funct5::FDIV => FpuOp::Fdiv,
        funct5::FSQRT if rs2 == 0 => FpuOp::Fsqrt,
        funct5::FSGNJ => match f3 {
            funct3::FSGNJ => FpuOp::Fsgnj,
            funct3::FSGNJN => FpuOp::Fsgnjn,
            funct3::FSGNJX => FpuOp::Fsgnjx,
            _ => return None,
        },
        funct5::FMIN_MAX => match f3 {
            funct3::FMIN => FpuOp::Fmin,
            funct3::FMAX => FpuOp::Fmax,
            _ => return None,
        },
        // FCVT.S.D is encoded with fmt=S, rs2=D; FCVT.D.S with fmt=D, rs2=S.
        funct5::FCVT_FMT => match (double, rs2 as u32) {
            (false, rvf::FMT_D) | (true, rvf::FMT_S) => FpuOp::FcvtFmt,
            _ => return None,
        },
        funct5::FCMP => match f3 {
            funct3::FEQ => FpuOp::Feq,
            funct3::FLT => FpuOp::Flt,
            funct3::FLE => FpuOp::Fle,
            _ => return None,
        },
        funct5::FCVT_TO_INT => match rs2 {
            0 => FpuOp::FcvtW,
            1 => FpuOp::FcvtWu,
            2 => FpuOp::FcvtL,
            3 => FpuOp::FcvtLu,
            _ => return None,
        },
        funct5::FCVT_FROM_INT => match rs2 {
            0 => FpuOp::FcvtFW,
            1 => FpuOp::FcvtFWu,
            2 => FpuOp::FcvtFL,
            3 => FpuOp::FcvtFLu,
            _ => return None,
        },
        funct5::FMV_X_FCLASS if rs2 == 0 => match f3 {
            funct3::FMV_X if double => FpuOp::FmvXD,
            funct3::FMV_X => FpuOp::FmvXW,
            funct3::FCLASS => FpuOp::Fclass,
            _ => return None,
        },
        funct5::FMV_TO_F if rs2 == 0 && f3 == funct3::FMV_F => {
            if double {
                FpuOp::FmvDX
            } else {
                FpuOp::FmvWX
            }
        }
        _ => return None,
    };
    Some(op)
}
