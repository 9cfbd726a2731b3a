//! Immediate generation.
//!
//! Builds the extended immediate for each instruction format from the raw
//! packings produced by the field extractor. The result is an XLEN-wide value
//! held in a `u64`: on RV32 the upper 32 bits are always zero, on RV64 the
//! value is sign-extended through bit 63.
//!
//! The generator never rejects input. Whether a format makes sense for an
//! opcode class is decided by the decode orchestrator.

use serde::Serialize;

use crate::config::Xlen;
use crate::isa::instruction::RawFields;

/// Width of the I-type and S-type immediate fields.
const IMM12_BITS: u32 = 12;

/// Width of the B-type immediate (including the implicit zero LSB).
const IMM_B_BITS: u32 = 13;

/// Width of the J-type immediate (including the implicit zero LSB).
const IMM_J_BITS: u32 = 21;

/// Shift placing the U-type field at bits 31-12.
const U_IMM_SHIFT: u32 = 12;

/// Immediate packing layouts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum ImmFormat {
    /// `imm[11:0] | rs1 | funct3 | rd | opcode` (loads, JALR, OP-IMM).
    I,
    /// `imm[11:5] | rs2 | rs1 | funct3 | imm[4:0] | opcode` (stores).
    S,
    /// `imm[12|10:5] | rs2 | rs1 | funct3 | imm[4:1|11] | opcode` (branches).
    B,
    /// `imm[31:12] | rd | opcode` (LUI, AUIPC).
    U,
    /// `imm[20|10:1|11|19:12] | rd | opcode` (JAL).
    J,
}

/// Generates the extended immediate of `inst` for `format`.
///
/// B and J results are byte offsets: the encoded LSB of zero is implicit.
///
/// # Examples
///
/// ```
/// use rvdecode_core::config::Xlen;
/// use rvdecode_core::isa::immediate::{ImmFormat, generate};
///
/// // ADDI x0, x0, -1
/// assert_eq!(generate(0xFFF0_0013, ImmFormat::I, Xlen::Rv32), 0xFFFF_FFFF);
/// assert_eq!(generate(0xFFF0_0013, ImmFormat::I, Xlen::Rv64), u64::MAX);
/// ```
pub const fn generate(inst: u32, format: ImmFormat, xlen: Xlen) -> u64 {
    let fields = RawFields::extract(inst);
    from_fields(&fields, format, xlen)
}

/// Generates the immediate from already-extracted fields.
pub const fn from_fields(fields: &RawFields, format: ImmFormat, xlen: Xlen) -> u64 {
    let value = match format {
        ImmFormat::I => sign_extend(fields.imm_i, IMM12_BITS),
        ImmFormat::S => sign_extend(fields.imm_s, IMM12_BITS),
        ImmFormat::B => sign_extend(fields.imm_b, IMM_B_BITS),
        ImmFormat::U => (fields.imm_u << U_IMM_SHIFT) as i32 as i64,
        ImmFormat::J => sign_extend(fields.imm_j, IMM_J_BITS),
    };
    (value as u64) & xlen.mask()
}

/// Zero-extends the low `bits` of `value` to an XLEN-wide immediate.
///
/// Used for shift amounts, CSR addresses, and CSR immediates, none of which
/// carry a sign.
pub const fn zero_extend(value: u32, bits: u32, xlen: Xlen) -> u64 {
    let mask = if bits >= 32 { u32::MAX } else { (1 << bits) - 1 };
    ((value & mask) as u64) & xlen.mask()
}

/// Sign-extends the low `bits` of `val` to 64 bits by replicating bit `bits - 1`.
const fn sign_extend(val: u32, bits: u32) -> i64 {
    let shift = 32 - bits;
    ((val << shift) as i32 >> shift) as i64
}
