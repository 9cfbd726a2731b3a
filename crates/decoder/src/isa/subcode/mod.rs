//! Operation subcodes.
//!
//! A subcode tells a functional unit which operation to perform. There are
//! three tables, one per unit family, each with fixed literal codes:
//!
//! * `alu`: 7-bit integer codes (`[width][immed][m][alt][funct3]`).
//! * `fpu`: 6-bit floating-point codes (`[width][function]`).
//! * `mem`: 6-bit load/store codes (`[width][float][dir][upper][size]`).
//!
//! Every table reserves one bit for RV64-only operations; the decoder rejects
//! any subcode with that bit set when configured for RV32.

/// Integer ALU subcodes.
pub mod alu;

/// Floating-point subcodes.
pub mod fpu;

/// Load/store subcodes and atomic operations.
pub mod mem;

use serde::Serialize;

pub use self::alu::AluOp;
pub use self::fpu::FpuOp;
pub use self::mem::{AtomicOp, MemOp};

/// Subcode produced for one instruction, tagged with its table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "unit", content = "op", rename_all = "snake_case")]
pub enum OperationSubcode {
    /// Integer ALU operation.
    Alu(AluOp),
    /// Floating-point operation.
    Fpu(FpuOp),
    /// Load or store.
    Mem(MemOp),
}

impl OperationSubcode {
    /// Literal code within the subcode's table.
    pub const fn code(self) -> u8 {
        match self {
            Self::Alu(op) => op.code(),
            Self::Fpu(op) => op.code(),
            Self::Mem(op) => op.code(),
        }
    }

    /// True if the subcode names an RV64-only operation.
    pub const fn width_bit(self) -> bool {
        match self {
            Self::Alu(op) => op.width_bit(),
            Self::Fpu(op) => op.width_bit(),
            Self::Mem(op) => op.width_bit(),
        }
    }
}
