//! Primary opcode classification.
//!
//! Maps the 7-bit opcode field to one of 32 opcode classes using bits 6-2 as
//! an index into a fixed table. Words whose low two bits are not `11` are
//! compressed (or otherwise not 32-bit) encodings; an upstream expander is
//! expected to have rewritten compressed words, so they classify as `Unknown`.

use std::fmt;

use serde::{Serialize, Serializer};

/// Low two opcode bits that mark a 32-bit (or longer) encoding.
const LENGTH_BITS_32: u32 = 0b11;

/// Coarse instruction category selected by the primary opcode.
///
/// Discriminants equal the 5-bit table index (opcode bits 6-2); `Unknown`
/// sits outside the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum OpcodeClass {
    /// Integer loads.
    Load = 0b00000,
    /// Floating-point loads.
    LoadFp = 0b00001,
    /// Custom-0 space.
    Custom0 = 0b00010,
    /// Fences.
    MiscMem = 0b00011,
    /// Integer register-immediate arithmetic.
    OpImm = 0b00100,
    /// Add upper immediate to PC.
    Auipc = 0b00101,
    /// RV64 word register-immediate arithmetic.
    OpImm32 = 0b00110,
    /// 48-bit encoding space (first half).
    Inst48b0 = 0b00111,
    /// Integer stores.
    Store = 0b01000,
    /// Floating-point stores.
    StoreFp = 0b01001,
    /// Custom-1 space.
    Custom1 = 0b01010,
    /// Atomic memory operations.
    Amo = 0b01011,
    /// Integer register-register arithmetic.
    Op = 0b01100,
    /// Load upper immediate.
    Lui = 0b01101,
    /// RV64 word register-register arithmetic.
    Op32 = 0b01110,
    /// 64-bit encoding space.
    Inst64b = 0b01111,
    /// Fused multiply-add.
    Madd = 0b10000,
    /// Fused multiply-subtract.
    Msub = 0b10001,
    /// Fused negated multiply-subtract.
    Nmsub = 0b10010,
    /// Fused negated multiply-add.
    Nmadd = 0b10011,
    /// Floating-point arithmetic, compare, convert, and move.
    OpFp = 0b10100,
    /// Reserved.
    Reserved0 = 0b10101,
    /// Custom-2 space.
    Custom2 = 0b10110,
    /// 48-bit encoding space (second half).
    Inst48b1 = 0b10111,
    /// Conditional branches.
    Branch = 0b11000,
    /// Jump and link register.
    Jalr = 0b11001,
    /// Reserved.
    Reserved1 = 0b11010,
    /// Jump and link.
    Jal = 0b11011,
    /// System instructions.
    System = 0b11100,
    /// Reserved.
    Reserved2 = 0b11101,
    /// Custom-3 space.
    Custom3 = 0b11110,
    /// 80-bit and longer encoding space.
    InstVliw = 0b11111,
    /// Not a 32-bit encoding (opcode bits 1-0 are not `11`).
    Unknown = 0xFF,
}

/// Bit-exact classifier table, indexed by opcode bits 6-2.
const CLASS_TABLE: [OpcodeClass; 32] = [
    OpcodeClass::Load,
    OpcodeClass::LoadFp,
    OpcodeClass::Custom0,
    OpcodeClass::MiscMem,
    OpcodeClass::OpImm,
    OpcodeClass::Auipc,
    OpcodeClass::OpImm32,
    OpcodeClass::Inst48b0,
    OpcodeClass::Store,
    OpcodeClass::StoreFp,
    OpcodeClass::Custom1,
    OpcodeClass::Amo,
    OpcodeClass::Op,
    OpcodeClass::Lui,
    OpcodeClass::Op32,
    OpcodeClass::Inst64b,
    OpcodeClass::Madd,
    OpcodeClass::Msub,
    OpcodeClass::Nmsub,
    OpcodeClass::Nmadd,
    OpcodeClass::OpFp,
    OpcodeClass::Reserved0,
    OpcodeClass::Custom2,
    OpcodeClass::Inst48b1,
    OpcodeClass::Branch,
    OpcodeClass::Jalr,
    OpcodeClass::Reserved1,
    OpcodeClass::Jal,
    OpcodeClass::System,
    OpcodeClass::Reserved2,
    OpcodeClass::Custom3,
    OpcodeClass::InstVliw,
];

/// Classifies a primary opcode.
///
/// Only bits 6-0 of `opcode7` are examined, so a whole instruction word may
/// be passed directly.
///
/// # Examples
///
/// ```
/// use rvdecode_core::isa::opcode::{OpcodeClass, classify};
///
/// assert_eq!(classify(0b0010011), OpcodeClass::OpImm);
/// assert_eq!(classify(0b0010000), OpcodeClass::Unknown);
/// ```
#[inline]
pub const fn classify(opcode7: u32) -> OpcodeClass {
    if opcode7 & 0b11 != LENGTH_BITS_32 {
        return OpcodeClass::Unknown;
    }
    CLASS_TABLE[((opcode7 >> 2) & 0x1F) as usize]
}

impl OpcodeClass {
    /// Every classifiable variant in table order (excludes `Unknown`).
    pub const ALL: [Self; 32] = CLASS_TABLE;

    /// Returns the 5-bit table index, or `None` for `Unknown`.
    pub const fn index(self) -> Option<u8> {
        match self {
            Self::Unknown => None,
            other => Some(other as u8),
        }
    }

    /// Returns the class stored at a 5-bit table index.
    pub const fn from_index(index: u8) -> Option<Self> {
        if index < 32 {
            Some(CLASS_TABLE[index as usize])
        } else {
            None
        }
    }

    /// Full 7-bit opcode for this class (low bits `11`), or `None` for `Unknown`.
    pub const fn opcode7(self) -> Option<u32> {
        match self.index() {
            Some(idx) => Some(((idx as u32) << 2) | LENGTH_BITS_32),
            None => None,
        }
    }

    /// True for classes no functional unit in this core handles.
    ///
    /// These classify successfully but always decode as illegal.
    pub const fn is_always_illegal(self) -> bool {
        matches!(
            self,
            Self::Reserved0
                | Self::Reserved1
                | Self::Reserved2
                | Self::Custom0
                | Self::Custom1
                | Self::Custom2
                | Self::Custom3
                | Self::Inst48b0
                | Self::Inst48b1
                | Self::Inst64b
                | Self::InstVliw
        )
    }

    /// Canonical upper-case name (`OP_IMM`, `INST_48B_0`, ...).
    pub const fn name(self) -> &'static str {
        match self {
            Self::Load => "LOAD",
            Self::LoadFp => "LOAD_FP",
            Self::Custom0 => "CUSTOM_0",
            Self::MiscMem => "MISC_MEM",
            Self::OpImm => "OP_IMM",
            Self::Auipc => "AUIPC",
            Self::OpImm32 => "OP_IMM_32",
            Self::Inst48b0 => "INST_48B_0",
            Self::Store => "STORE",
            Self::StoreFp => "STORE_FP",
            Self::Custom1 => "CUSTOM_1",
            Self::Amo => "AMO",
            Self::Op => "OP",
            Self::Lui => "LUI",
            Self::Op32 => "OP_32",
            Self::Inst64b => "INST_64B",
            Self::Madd => "MADD",
            Self::Msub => "MSUB",
            Self::Nmsub => "NMSUB",
            Self::Nmadd => "NMADD",
            Self::OpFp => "OP_FP",
            Self::Reserved0 => "RESERVED_0",
            Self::Custom2 => "CUSTOM_2",
            Self::Inst48b1 => "INST_48B_1",
            Self::Branch => "BRANCH",
            Self::Jalr => "JALR",
            Self::Reserved1 => "RESERVED_1",
            Self::Jal => "JAL",
            Self::System => "SYSTEM",
            Self::Reserved2 => "RESERVED_2",
            Self::Custom3 => "CUSTOM_3",
            Self::InstVliw => "INST_VLIW",
            Self::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for OpcodeClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for OpcodeClass {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}
