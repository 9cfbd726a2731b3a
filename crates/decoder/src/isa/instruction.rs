//! Instruction field extraction.
//!
//! Provides the `InstructionBits` trait for slicing named fields out of a
//! 32-bit instruction word, and `RawFields`, a one-shot snapshot of every
//! field and raw immediate packing the decoder needs. Extraction is pure and
//! total: any `u32` yields a `RawFields`.

use crate::config::Xlen;

/// Bit mask for extracting the opcode field (bits 0-6).
pub const OPCODE_MASK: u32 = 0x7F;
/// Bit mask for 5-bit register index fields.
pub const REG_MASK: u32 = 0x1F;
/// Bit mask for extracting the funct3 field (bits 12-14).
pub const FUNCT3_MASK: u32 = 0x7;
/// Bit mask for extracting the funct7 field (bits 25-31).
pub const FUNCT7_MASK: u32 = 0x7F;
/// Bit mask for the 12-bit CSR / I-type immediate field (bits 20-31).
pub const CSR_MASK: u32 = 0xFFF;
/// Bit mask for 4-bit fence fields (fm, pred, succ).
pub const FENCE_FIELD_MASK: u32 = 0xF;

/// Trait for extracting instruction fields from encoded instructions.
pub trait InstructionBits {
    /// Opcode field (bits 0-6).
    fn opcode(&self) -> u32;

    /// Destination register field (bits 7-11).
    fn rd(&self) -> u8;

    /// First source register field (bits 15-19).
    fn rs1(&self) -> u8;

    /// Second source register field (bits 20-24).
    fn rs2(&self) -> u8;

    /// Third source register field (bits 27-31, fused multiply-add only).
    fn rs3(&self) -> u8;

    /// funct3 field (bits 12-14).
    fn funct3(&self) -> u32;

    /// funct7 field (bits 25-31).
    fn funct7(&self) -> u32;

    /// funct5 field (bits 27-31): AMO and `OP_FP` operation selector.
    fn funct5(&self) -> u32;

    /// Floating-point format field (bits 25-26).
    fn fmt(&self) -> u32;

    /// Shift-immediate `funct6` (bits 26-31).
    fn funct6(&self) -> u32;

    /// CSR address field (bits 20-31).
    fn csr(&self) -> u32;

    /// Fence mode field (bits 28-31).
    fn fm(&self) -> u32;

    /// Fence predecessor set (bits 24-27).
    fn pred(&self) -> u32;

    /// Fence successor set (bits 20-23).
    fn succ(&self) -> u32;

    /// Shift amount for the configured width: bits 20-24 on RV32, 20-25 on RV64.
    fn shamt(&self, xlen: Xlen) -> u32;
}

impl InstructionBits for u32 {
    #[inline(always)]
    fn opcode(&self) -> u32 {
        self & OPCODE_MASK
    }

    #[inline(always)]
    fn rd(&self) -> u8 {
        ((self >> 7) & REG_MASK) as u8
    }

    #[inline(always)]
    fn rs1(&self) -> u8 {
        ((self >> 15) & REG_MASK) as u8
    }

    #[inline(always)]
    fn rs2(&self) -> u8 {
        ((self >> 20) & REG_MASK) as u8
    }

    #[inline(always)]
    fn rs3(&self) -> u8 {
        ((self >> 27) & REG_MASK) as u8
    }

    #[inline(always)]
    fn funct3(&self) -> u32 {
        (self >> 12) & FUNCT3_MASK
    }

    #[inline(always)]
    fn funct7(&self) -> u32 {
        (self >> 25) & FUNCT7_MASK
    }

    #[inline(always)]
    fn funct5(&self) -> u32 {
        (self >> 27) & REG_MASK
    }

    #[inline(always)]
    fn fmt(&self) -> u32 {
        (self >> 25) & 0x3
    }

    #[inline(always)]
    fn funct6(&self) -> u32 {
        (self >> 26) & 0x3F
    }

    #[inline(always)]
    fn csr(&self) -> u32 {
        (self >> 20) & CSR_MASK
    }

    #[inline(always)]
    fn fm(&self) -> u32 {
        (self >> 28) & FENCE_FIELD_MASK
    }

    #[inline(always)]
    fn pred(&self) -> u32 {
        (self >> 24) & FENCE_FIELD_MASK
    }

    #[inline(always)]
    fn succ(&self) -> u32 {
        (self >> 20) & FENCE_FIELD_MASK
    }

    #[inline(always)]
    fn shamt(&self, xlen: Xlen) -> u32 {
        (self >> 20) & ((1 << xlen.shamt_bits()) - 1)
    }
}

/// Every raw field of one instruction word, extracted once per decode.
///
/// Immediate packings are unextended: `imm_b` and `imm_j` already carry their
/// implicit zero LSB, so they are byte offsets before sign extension.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RawFields {
    /// Raw 32-bit instruction encoding.
    pub raw: u32,
    /// Bits 6-0.
    pub opcode7: u32,
    /// Bits 11-7.
    pub rd: u8,
    /// Bits 14-12.
    pub funct3: u32,
    /// Bits 19-15.
    pub rs1: u8,
    /// Bits 24-20.
    pub rs2: u8,
    /// Bits 31-27.
    pub rs3: u8,
    /// Bits 31-25.
    pub funct7: u32,
    /// I-type packing: bits 31-20 (12 bits).
    pub imm_i: u32,
    /// S-type packing: bits 31-25 ‖ 11-7 (12 bits).
    pub imm_s: u32,
    /// B-type packing: bit 31 ‖ 7 ‖ 30-25 ‖ 11-8 ‖ 0 (13 bits).
    pub imm_b: u32,
    /// U-type packing: bits 31-12 (20 bits, not shifted).
    pub imm_u: u32,
    /// J-type packing: bit 31 ‖ 19-12 ‖ 20 ‖ 30-21 ‖ 0 (21 bits).
    pub imm_j: u32,
}

impl RawFields {
    /// Slices `inst` into its raw fields.
    pub const fn extract(inst: u32) -> Self {
        let imm_s = ((inst >> 25) & 0x7F) << 5 | ((inst >> 7) & 0x1F);
        let imm_b = ((inst >> 31) & 0x1) << 12
            | ((inst >> 7) & 0x1) << 11
            | ((inst >> 25) & 0x3F) << 5
            | ((inst >> 8) & 0xF) << 1;
        let imm_j = ((inst >> 31) & 0x1) << 20
            | ((inst >> 12) & 0xFF) << 12
            | ((inst >> 20) & 0x1) << 11
            | ((inst >> 21) & 0x3FF) << 1;

        Self {
            raw: inst,
            opcode7: inst & OPCODE_MASK,
            rd: ((inst >> 7) & REG_MASK) as u8,
            funct3: (inst >> 12) & FUNCT3_MASK,
            rs1: ((inst >> 15) & REG_MASK) as u8,
            rs2: ((inst >> 20) & REG_MASK) as u8,
            rs3: ((inst >> 27) & REG_MASK) as u8,
            funct7: (inst >> 25) & FUNCT7_MASK,
            imm_i: (inst >> 20) & CSR_MASK,
            imm_s,
            imm_b,
            imm_u: inst >> 12,
            imm_j,
        }
    }
}
