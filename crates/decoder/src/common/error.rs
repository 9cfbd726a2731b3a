//! Illegal instruction reporting.
//!
//! Decoding has exactly one failure outcome, [`IllegalInstruction`]. It is an
//! ordinary, expected result for malformed input and is always returned to the
//! caller, never raised as a fatal fault. The trap handler that consumes it lives
//! outside this crate.

use serde::Serialize;
use thiserror::Error;

use crate::isa::opcode::OpcodeClass;

/// Why a word was rejected by the decoder.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IllegalReason {
    /// Opcode bits [1:0] are not `11` (compressed or garbage encoding).
    NotThirtyTwoBit,
    /// Opcode class has no functional unit in this core (reserved, custom, or
    /// a longer-than-32-bit encoding).
    UnsupportedClass,
    /// The `funct3` / `funct7` (or equivalent) combination is absent from the
    /// relevant subcode table.
    NoMatch,
    /// The matched operation is RV64-only and the decoder is configured for RV32.
    Rv64Only,
    /// A field that must be zero for this encoding was nonzero.
    ReservedBits,
}

impl IllegalReason {
    /// Short human-readable description used in error messages.
    pub const fn describe(self) -> &'static str {
        match self {
            Self::NotThirtyTwoBit => "not a 32-bit encoding",
            Self::UnsupportedClass => "unsupported opcode class",
            Self::NoMatch => "no matching operation",
            Self::Rv64Only => "RV64-only operation on an RV32 core",
            Self::ReservedBits => "reserved bits set",
        }
    }
}

/// Illegal instruction raised by the decoder.
///
/// Carries the raw word together with the opcode class, `funct3`, and `funct7`
/// so the trap handler (or a log line) can explain what was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error, Serialize)]
#[error(
    "illegal instruction {raw:#010x} ({}): class={class}, funct3={funct3:#05b}, funct7={funct7:#09b}",
    reason.describe()
)]
pub struct IllegalInstruction {
    /// Raw 32-bit instruction word.
    pub raw: u32,
    /// Opcode class the word classified to (`Unknown` for non-32-bit words).
    pub class: OpcodeClass,
    /// Extracted `funct3` field.
    pub funct3: u8,
    /// Extracted `funct7` field.
    pub funct7: u8,
    /// Cause of the rejection.
    pub reason: IllegalReason,
}

impl IllegalInstruction {
    /// Builds an illegal-instruction outcome from a raw word.
    ///
    /// `funct3` and `funct7` are re-extracted from `raw` so every error carries
    /// the same diagnostic fields regardless of where decoding stopped.
    pub const fn new(raw: u32, class: OpcodeClass, reason: IllegalReason) -> Self {
        Self {
            raw,
            class,
            funct3: ((raw >> 12) & 0x7) as u8,
            funct7: ((raw >> 25) & 0x7F) as u8,
            reason,
        }
    }
}
