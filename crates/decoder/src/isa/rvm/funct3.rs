//! `funct3` values for multiply and divide.
//!
//! Under `OP_32` only `MUL` and the four divide/remainder forms exist.

/// `mul`, low XLEN bits of the product.
pub const MUL: u32 = 0b000;
/// `mulh`, signed by signed.
pub const MULH: u32 = 0b001;
/// `mulhsu`, signed by unsigned.
pub const MULHSU: u32 = 0b010;
/// `mulhu`, unsigned by unsigned.
pub const MULHU: u32 = 0b011;
/// `div`
pub const DIV: u32 = 0b100;
/// `divu`
pub const DIVU: u32 = 0b101;
/// `rem`
pub const REM: u32 = 0b110;
/// `remu`
pub const REMU: u32 = 0b111;
