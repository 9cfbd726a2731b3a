//! Major opcodes as full 7-bit values.
//!
//! The classifier indexes on bits 6-2 only. These constants include the `11`
//! low bits and are what an encoder writes into a word. Listed in class-index
//! order.

/// `LOAD`: integer loads.
pub const OP_LOAD: u32 = 0b0000011;
/// `LOAD-FP`: `flw`, `fld`.
pub const OP_LOAD_FP: u32 = 0b0000111;
/// `MISC-MEM`: `fence`, `fence.i`.
pub const OP_MISC_MEM: u32 = 0b0001111;
/// `OP-IMM`: register-immediate ALU, including shifts.
pub const OP_IMM: u32 = 0b0010011;
/// `AUIPC`
pub const OP_AUIPC: u32 = 0b0010111;
/// `OP-IMM-32`: `addiw` and the W shifts, RV64 only.
pub const OP_IMM_32: u32 = 0b0011011;
/// `STORE`: integer stores.
pub const OP_STORE: u32 = 0b0100011;
/// `STORE-FP`: `fsw`, `fsd`.
pub const OP_STORE_FP: u32 = 0b0100111;
/// `AMO`: `lr`, `sc`, and the read-modify-write atomics.
pub const OP_AMO: u32 = 0b0101111;
/// `OP`: register-register ALU and M.
pub const OP_REG: u32 = 0b0110011;
/// `LUI`
pub const OP_LUI: u32 = 0b0110111;
/// `OP-32`: W forms of `OP`, RV64 only.
pub const OP_REG_32: u32 = 0b0111011;
/// `MADD`
pub const OP_FMADD: u32 = 0b1000011;
/// `MSUB`
pub const OP_FMSUB: u32 = 0b1000111;
/// `NMSUB`
pub const OP_FNMSUB: u32 = 0b1001011;
/// `NMADD`
pub const OP_FNMADD: u32 = 0b1001111;
/// `OP-FP`: everything floating point except loads, stores, and fused ops.
pub const OP_FP: u32 = 0b1010011;
/// `BRANCH`
pub const OP_BRANCH: u32 = 0b1100011;
/// `JALR`
pub const OP_JALR: u32 = 0b1100111;
/// `JAL`
pub const OP_JAL: u32 = 0b1101111;
/// `SYSTEM`: calls, trap returns, `wfi`, `sfence.vma`, CSR access.
pub const OP_SYSTEM: u32 = 0b1110011;
