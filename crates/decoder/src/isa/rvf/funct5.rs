//! RISC-V Floating-Point (F/D) Operation Selectors (funct5, bits 31-27).

/// Floating-point Add.
pub const FADD: u32 = 0b00000;
/// Floating-point Subtract.
pub const FSUB: u32 = 0b00001;
/// Floating-point Multiply.
pub const FMUL: u32 = 0b00010;
/// Floating-point Divide.
pub const FDIV: u32 = 0b00011;
/// Floating-point Sign Injection (FSGNJ / FSGNJN / FSGNJX by funct3).
pub const FSGNJ: u32 = 0b00100;
/// Floating-point Min/Max (by funct3).
pub const FMIN_MAX: u32 = 0b00101;
/// Convert between precisions (FCVT.S.D / FCVT.D.S).
pub const FCVT_FMT: u32 = 0b01000;
/// Floating-point Square Root.
pub const FSQRT: u32 = 0b01011;
/// Floating-point Compare (FEQ / FLT / FLE by funct3).
pub const FCMP: u32 = 0b10100;
/// Convert Float to Integer (FCVT.W/WU/L/LU by rs2).
pub const FCVT_TO_INT: u32 = 0b11000;
/// Convert Integer to Float (FCVT.S/D.W/WU/L/LU by rs2).
pub const FCVT_FROM_INT: u32 = 0b11010;
/// Move Float to Integer / Classify (by funct3).
pub const FMV_X_FCLASS: u32 = 0b11100;
/// Move Integer to Float.
pub const FMV_TO_F: u32 = 0b11110;
