//! RISC-V Floating-Point Extensions (F and D).
//!
//! Single and double precision share every major opcode. In `OP_FP` words the
//! operation lives in bits 31-27 (`funct5`) and the precision in bits 26-25
//! (`fmt`); the fused multiply-add opcodes carry `fmt` in the same position
//! with the third source register above it.
//!
//! # Structure
//!
//! - `funct3`: Sign-injection, min/max, compare, and rounding-mode values.
//! - `funct5`: Operation selectors within `OP_FP`.

/// Function code 3 definitions (sub-operations and rounding modes).
pub mod funct3;

/// Function code 5 definitions (operation selectors).
pub mod funct5;

/// Format field: single precision.
pub const FMT_S: u32 = 0b00;
/// Format field: double precision.
pub const FMT_D: u32 = 0b01;
/// Format field: half precision (not supported by this core).
pub const FMT_H: u32 = 0b10;
/// Format field: quad precision (not supported by this core).
pub const FMT_Q: u32 = 0b11;

/// Load/store width `funct3` for 32-bit floating-point accesses (FLW/FSW).
pub const WIDTH_WORD: u32 = 0b010;
/// Load/store width `funct3` for 64-bit floating-point accesses (FLD/FSD).
pub const WIDTH_DOUBLE: u32 = 0b011;
