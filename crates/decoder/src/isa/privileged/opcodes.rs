//! SYSTEM-opcode encodings.
//!
//! Environment calls and trap returns are matched against the whole word. CSR
//! access is selected by `funct3` alone.

/// The SYSTEM major opcode.
pub const OP_SYSTEM: u32 = 0b1110011;

// Exact words with `funct3 == PRIV`.

/// `ecall`
pub const ECALL: u32 = 0x0000_0073;
/// `ebreak`
pub const EBREAK: u32 = 0x0010_0073;
/// `sret`
pub const SRET: u32 = 0x1020_0073;
/// `mret`
pub const MRET: u32 = 0x3020_0073;
/// `wfi`
pub const WFI: u32 = 0x1050_0073;

/// `funct7` of `sfence.vma`. `rs1` and `rs2` are operands, `rd` must be zero.
pub const SFENCE_VMA_FUNCT7: u32 = 0b0001001;

// `funct3` values.

/// Non-CSR system instructions.
pub const PRIV: u32 = 0b000;
/// `csrrw`
pub const CSRRW: u32 = 0b001;
/// `csrrs`
pub const CSRRS: u32 = 0b010;
/// `csrrc`
pub const CSRRC: u32 = 0b011;
/// `csrrwi`, `rs1` is a 5-bit immediate.
pub const CSRRWI: u32 = 0b101;
/// `csrrsi`
pub const CSRRSI: u32 = 0b110;
/// `csrrci`
pub const CSRRCI: u32 = 0b111;
