//! Multiply/divide (M).
//!
//! Shares `OP` and `OP_32` with the base integer ALU; `funct7 == 0000001`
//! selects this extension.

/// Multiply/divide `funct3` values.
pub mod funct3;

/// `funct7` marking an M instruction.
pub const M_EXTENSION: u32 = 0b0000001;
