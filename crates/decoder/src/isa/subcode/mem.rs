//! Memory subcode table and generator.
//!
//! Loads and stores use a 6-bit code
//! `[width:1][float:1][direction:1][upper:1][size:2]`. `direction` is set for
//! loads, `upper` for zero-extending loads, and `size` is the log2 byte count
//! (B=00, H=01, W=10, D=11). Doubleword integer accesses and LWU carry the
//! RV64-only width bit.
//!
//! Atomic memory operations reuse the load and store codes of their access
//! size. The atomic operation itself is reported separately as an
//! [`AtomicOp`].

use std::fmt;

use serde::Serialize;

use crate::isa::opcode::OpcodeClass;
use crate::isa::rva;
use crate::isa::rvf;
use crate::isa::rvi::funct3;

/// Bit marking RV64-only memory operations.
pub const WIDTH_BIT: u8 = 0x20;

/// Bit marking floating-point register transfers.
pub const FLOAT_BIT: u8 = 0x10;

/// Bit marking loads (clear for stores).
pub const LOAD_BIT: u8 = 0x08;

/// Bit marking zero-extending loads.
pub const UNSIGNED_BIT: u8 = 0x04;

/// Mask of the access-size field.
pub const SIZE_MASK: u8 = 0x03;

/// Load or store operation with its literal subcode as discriminant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[repr(u8)]
pub enum MemOp {
    /// Store byte.
    Sb = 0x00,

    /// Store halfword.
    Sh = 0x01,

    /// Store word.
    Sw = 0x02,

    /// Load byte (sign-extended).
    Lb = 0x08,

    /// Load halfword (sign-extended).
    Lh = 0x09,

    /// Load word (sign-extended).
    Lw = 0x0A,

    /// Load byte (zero-extended).
    Lbu = 0x0C,

    /// Load halfword (zero-extended).
    Lhu = 0x0D,

    /// Store single-precision float.
    Fsw = 0x12,

    /// Store double-precision float.
    Fsd = 0x13,

    /// Load single-precision float.
    Flw = 0x1A,

    /// Load double-precision float.
    Fld = 0x1B,

    /// Store doubleword (RV64).
    Sd = 0x23,

    /// Load doubleword (RV64).
    Ld = 0x2B,

    /// Load word (zero-extended, RV64).
    Lwu = 0x2E,
}

impl MemOp {
    /// Every memory operation in code order.
    pub const ALL: [Self; 15] = [
        Self::Sb,
        Self::Sh,
        Self::Sw,
        Self::Lb,
        Self::Lh,
        Self::Lw,
        Self::Lbu,
        Self::Lhu,
        Self::Fsw,
        Self::Fsd,
        Self::Flw,
        Self::Fld,
        Self::Sd,
        Self::Ld,
        Self::Lwu,
    ];

    /// Literal 6-bit subcode.
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Looks up the operation with the given subcode.
    pub const fn from_code(code: u8) -> Option<Self> {
        Some(match code {
            0x00 => Self::Sb,
            0x01 => Self::Sh,
            0x02 => Self::Sw,
            0x08 => Self::Lb,
            0x09 => Self::Lh,
            0x0A => Self::Lw,
            0x0C => Self::Lbu,
            0x0D => Self::Lhu,
            0x12 => Self::Fsw,
            0x13 => Self::Fsd,
            0x1A => Self::Flw,
            0x1B => Self::Fld,
            0x23 => Self::Sd,
            0x2B => Self::Ld,
            0x2E => Self::Lwu,
            _ => return None,
        })
    }

    /// True for RV64-only operations.
    pub const fn width_bit(self) -> bool {
        self.code() & WIDTH_BIT != 0
    }

    /// True for loads.
    pub const fn is_load(self) -> bool {
        self.code() & LOAD_BIT != 0
    }

    /// True for floating-point register transfers.
    pub const fn is_float(self) -> bool {
        self.code() & FLOAT_BIT != 0
    }

    /// True for zero-extending loads.
    pub const fn is_unsigned(self) -> bool {
        self.code() & UNSIGNED_BIT != 0
    }

    /// Access size in bytes.
    pub const fn size_bytes(self) -> u32 {
        1 << (self.code() & SIZE_MASK)
    }

    /// Assembly mnemonic.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Sb => "sb",
            Self::Sh => "sh",
            Self::Sw => "sw",
            Self::Lb => "lb",
            Self::Lh => "lh",
            Self::Lw => "lw",
            Self::Lbu => "lbu",
            Self::Lhu => "lhu",
            Self::Fsw => "fsw",
            Self::Fsd => "fsd",
            Self::Flw => "flw",
            Self::Fld => "fld",
            Self::Sd => "sd",
            Self::Ld => "ld",
            Self::Lwu => "lwu",
        }
    }
}

impl fmt::Display for MemOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}

/// Atomic memory operation types (RISC-V A extension).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AtomicOp {
    /// Load-reserved (atomic load with reservation).
    Lr,

    /// Store-conditional (atomic store if reservation valid).
    Sc,

    /// Atomic swap.
    Swap,

    /// Atomic add.
    Add,

    /// Atomic XOR.
    Xor,

    /// Atomic AND.
    And,

    /// Atomic OR.
    Or,

    /// Atomic minimum (signed).
    Min,

    /// Atomic maximum (signed).
    Max,

    /// Atomic minimum (unsigned).
    Minu,

    /// Atomic maximum (unsigned).
    Maxu,
}

impl AtomicOp {
    /// Decodes the `funct5` operation selector of an AMO word.
    pub const fn from_funct5(f5: u32) -> Option<Self> {
        Some(match f5 {
            rva::funct5::LR => Self::Lr,
            rva::funct5::SC => Self::Sc,
            rva::funct5::AMOSWAP => Self::Swap,
            rva::funct5::AMOADD => Self::Add,
            rva::funct5::AMOXOR => Self::Xor,
            rva::funct5::AMOAND => Self::And,
            rva::funct5::AMOOR => Self::Or,
            rva::funct5::AMOMIN => Self::Min,
            rva::funct5::AMOMAX => Self::Max,
            rva::funct5::AMOMINU => Self::Minu,
            rva::funct5::AMOMAXU => Self::Maxu,
            _ => return None,
        })
    }

    /// Mnemonic stem without the width suffix (`lr`, `amoadd`, ...).
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Lr => "lr",
            Self::Sc => "sc",
            Self::Swap => "amoswap",
            Self::Add => "amoadd",
            Self::Xor => "amoxor",
            Self::And => "amoand",
            Self::Or => "amoor",
            Self::Min => "amomin",
            Self::Max => "amomax",
            Self::Minu => "amominu",
            Self::Maxu => "amomaxu",
        }
    }
}

/// Generates the memory subcode for a load or store word.
///
/// Handles `Load`, `LoadFp`, `Store` and `StoreFp`. Atomic words go through
/// [`generate_amo`]. Width gating is left to the caller.
///
/// # Examples
///
/// ```
/// use rvdecode_core::isa::opcode::OpcodeClass;
/// use rvdecode_core::isa::subcode::mem::{MemOp, generate};
///
/// assert_eq!(generate(OpcodeClass::Load, 0b100), Some(MemOp::Lbu));
/// assert_eq!(generate(OpcodeClass::Load, 0b111), None);
/// ```
pub const fn generate(class: OpcodeClass, f3: u32) -> Option<MemOp> {
    let op = match class {
        OpcodeClass::Load => match f3 {
            funct3::LB => MemOp::Lb,
            funct3::LH => MemOp::Lh,
            funct3::LW => MemOp::Lw,
            funct3::LD => MemOp::Ld,
            funct3::LBU => MemOp::Lbu,
            funct3::LHU => MemOp::Lhu,
            funct3::LWU => MemOp::Lwu,
            _ => return None,
        },
        OpcodeClass::Store => match f3 {
            funct3::SB => MemOp::Sb,
            funct3::SH => MemOp::Sh,
            funct3::SW => MemOp::Sw,
            funct3::SD => MemOp::Sd,
            _ => return None,
        },
        OpcodeClass::LoadFp => match f3 {
            rvf::WIDTH_WORD => MemOp::Flw,
            rvf::WIDTH_DOUBLE => MemOp::Fld,
            _ => return None,
        },
        OpcodeClass::StoreFp => match f3 {
            rvf::WIDTH_WORD => MemOp::Fsw,
            rvf::WIDTH_DOUBLE => MemOp::Fsd,
            _ => return None,
        },
        _ => return None,
    };
    Some(op)
}

/// Generates the memory subcode and atomic operation for an AMO word.
///
/// LR maps to the load of the access size, SC to the store, and every
/// read-modify-write AMO to the load. LR must have `rs2 == 0`.
///
/// # Arguments
///
/// * `f3` - Access width (`010` word, `011` doubleword).
/// * `f5` - Operation selector (bits 31-27).
/// * `rs2` - Second source field.
pub const fn generate_amo(f3: u32, f5: u32, rs2: u8) -> Option<(MemOp, AtomicOp)> {
    let (load, store) = match f3 {
        rva::funct3::WIDTH_32 => (MemOp::Lw, MemOp::Sw),
        rva::funct3::WIDTH_64 => (MemOp::Ld, MemOp::Sd),
        _ => return None,
    };
    let atomic = match AtomicOp::from_funct5(f5) {
        Some(atomic) => atomic,
        None => return None,
    };
    let op = match atomic {
        AtomicOp::Lr if rs2 != 0 => return None,
        AtomicOp::Sc => store,
        _ => load,
    };
    Some((op, atomic))
}
