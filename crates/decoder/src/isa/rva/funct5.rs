//! Atomic operation selectors, bits 31-27 of an `AMO` word.
//!
//! Values are listed in encoding order. Unlisted values are reserved.

/// `amoadd`
pub const AMOADD: u32 = 0b00000;
/// `amoswap`
pub const AMOSWAP: u32 = 0b00001;
/// `lr`, load-reserved. `rs2` must be zero.
pub const LR: u32 = 0b00010;
/// `sc`, store-conditional.
pub const SC: u32 = 0b00011;
/// `amoxor`
pub const AMOXOR: u32 = 0b00100;
/// `amoor`
pub const AMOOR: u32 = 0b01000;
/// `amoand`
pub const AMOAND: u32 = 0b01100;
/// `amomin`, signed.
pub const AMOMIN: u32 = 0b10000;
/// `amomax`, signed.
pub const AMOMAX: u32 = 0b10100;
/// `amominu`
pub const AMOMINU: u32 = 0b11000;
/// `amomaxu`
pub const AMOMAXU: u32 = 0b11100;
