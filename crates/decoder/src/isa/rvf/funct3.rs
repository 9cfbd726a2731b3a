//! `funct3` of the F and D extensions.
//!
//! For arithmetic this field is the rounding mode. For sign injection,
//! min/max, compare, and the move/classify group it is a minor opcode.

/// `fsgnj`
pub const FSGNJ: u32 = 0b000;
/// `fsgnjn`
pub const FSGNJN: u32 = 0b001;
/// `fsgnjx`
pub const FSGNJX: u32 = 0b010;

/// `fmin`
pub const FMIN: u32 = 0b000;
/// `fmax`
pub const FMAX: u32 = 0b001;

/// `feq`
pub const FEQ: u32 = 0b010;
/// `flt`
pub const FLT: u32 = 0b001;
/// `fle`
pub const FLE: u32 = 0b000;

/// `fmv.x.w` / `fmv.x.d`
pub const FMV_X: u32 = 0b000;
/// `fclass`
pub const FCLASS: u32 = 0b001;
/// `fmv.w.x` / `fmv.d.x`
pub const FMV_F: u32 = 0b000;

// Rounding modes. 101 and 110 are reserved.

/// RNE, nearest with ties to even.
pub const RM_RNE: u32 = 0b000;
/// RTZ, toward zero.
pub const RM_RTZ: u32 = 0b001;
/// RDN, toward negative infinity.
pub const RM_RDN: u32 = 0b010;
/// RUP, toward positive infinity.
pub const RM_RUP: u32 = 0b011;
/// RMM, nearest with ties away from zero.
pub const RM_RMM: u32 = 0b100;
/// DYN, use the mode in `frm`.
pub const RM_DYN: u32 = 0b111;
