//! Access widths of the `AMO` opcode.

/// `.w` forms.
pub const WIDTH_32: u32 = 0b010;

/// `.d` forms, RV64 only.
pub const WIDTH_64: u32 = 0b011;
