//! Base integer ISA (I).
//!
//! Encoding constants only. Decoding logic lives in [`crate::isa::decode`]
//! and the subcode generators.

/// Minor opcodes, grouped by major opcode.
pub mod funct3;

/// `funct7` / shift-immediate `funct6` selectors.
pub mod funct7;

/// Major opcodes.
pub mod opcodes;
