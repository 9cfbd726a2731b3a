//! RISC-V Base Integer (I) Function Codes (funct7).
//!
//! The `funct7` field (bits 31-25) distinguishes operations that share the
//! same `funct3` (e.g., ADD vs SUB). Shift-immediates reuse it as a `funct6`
//! in bits 31-26, with bit 25 borrowed by the RV64 6-bit shift amount.

/// Default operation (ADD, SRL, etc.).
pub const DEFAULT: u32 = 0b0000000;

/// Alternate operation (SUB, SRA).
pub const SUB: u32 = 0b0100000;
/// Alias for SUB (used for Shift Right Arithmetic).
pub const SRA: u32 = 0b0100000;

/// Bit of `funct7` selecting the alternate operation.
pub const ALT_BIT: u32 = 0b0100000;

/// Shift-immediate `funct6` (bits 31-26) for SLLI / SRLI.
pub const SHIFT_LOGICAL_F6: u32 = 0b000000;
/// Shift-immediate `funct6` (bits 31-26) for SRAI.
pub const SHIFT_ARITH_F6: u32 = 0b010000;
