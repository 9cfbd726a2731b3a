//! `funct3` values (bits 14-12) for the base integer opcodes.
//!
//! The same three bits mean different things under each major opcode, so the
//! constants are grouped by the opcode they belong to.

// Loads. Bit 2 selects zero extension; bits 1-0 the access size.

/// `lb`
pub const LB: u32 = 0b000;
/// `lh`
pub const LH: u32 = 0b001;
/// `lw`
pub const LW: u32 = 0b010;
/// `ld`, RV64 only.
pub const LD: u32 = 0b011;
/// `lbu`
pub const LBU: u32 = 0b100;
/// `lhu`
pub const LHU: u32 = 0b101;
/// `lwu`, RV64 only.
pub const LWU: u32 = 0b110;

// Stores.

/// `sb`
pub const SB: u32 = 0b000;
/// `sh`
pub const SH: u32 = 0b001;
/// `sw`
pub const SW: u32 = 0b010;
/// `sd`, RV64 only.
pub const SD: u32 = 0b011;

// Branches. 010 and 011 are unassigned.

/// `beq`
pub const BEQ: u32 = 0b000;
/// `bne`
pub const BNE: u32 = 0b001;
/// `blt`, signed.
pub const BLT: u32 = 0b100;
/// `bge`, signed.
pub const BGE: u32 = 0b101;
/// `bltu`
pub const BLTU: u32 = 0b110;
/// `bgeu`
pub const BGEU: u32 = 0b111;

// Integer ALU, shared by OP, OP-IMM, and their 32-bit forms.

/// `add` / `sub` (`addi` has no subtract form).
pub const ADD_SUB: u32 = 0b000;
/// `sll`
pub const SLL: u32 = 0b001;
/// `slt`
pub const SLT: u32 = 0b010;
/// `sltu`
pub const SLTU: u32 = 0b011;
/// `xor`
pub const XOR: u32 = 0b100;
/// `srl` / `sra`, split by `funct7`.
pub const SRL_SRA: u32 = 0b101;
/// `or`
pub const OR: u32 = 0b110;
/// `and`
pub const AND: u32 = 0b111;

/// `jalr` accepts no other `funct3`.
pub const JALR: u32 = 0b000;

/// `fence`
pub const FENCE: u32 = 0b000;
/// `fence.i` (Zifencei).
pub const FENCE_I: u32 = 0b001;
