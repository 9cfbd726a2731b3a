//! Configuration for the decoder.
//!
//! This module defines the configuration structures used to parameterize decoding.
//! It provides:
//! 1. **Defaults:** Baseline constants (register width, tracing).
//! 2. **Structures:** `Config` with `general` and `decoder` sections.
//! 3. **Enums:** `Xlen`, the decoder-wide register width.
//!
//! Configuration is supplied as JSON (the CLI's `--config` flag) or built with
//! `Config::default()`. Every field is optional in JSON and falls back to the
//! value in `defaults`.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Default configuration constants for the decoder.
mod defaults {
    use super::Xlen;

    /// Default register width: the core is an RV32G core.
    pub const XLEN: Xlen = Xlen::Rv32;

    /// Per-instruction decode tracing is off by default.
    pub const TRACE_DECODE: bool = false;
}

/// Register width the decoder is configured for.
///
/// Chosen once per decoder instance, never per instruction. It selects the
/// shift-amount width, the immediate width, and whether RV64-only operations
/// (subcodes with the width bit set) are legal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
pub enum Xlen {
    /// 32-bit core. RV64-only encodings are illegal.
    #[default]
    #[serde(rename = "rv32", alias = "RV32", alias = "32")]
    Rv32,
    /// 64-bit core. RV64-only encodings are accepted.
    #[serde(rename = "rv64", alias = "RV64", alias = "64")]
    Rv64,
}

impl Xlen {
    /// Register width in bits.
    pub const fn bits(self) -> u32 {
        match self {
            Self::Rv32 => 32,
            Self::Rv64 => 64,
        }
    }

    /// Mask selecting the valid bits of an XLEN-wide value held in a `u64`.
    pub const fn mask(self) -> u64 {
        match self {
            Self::Rv32 => 0xFFFF_FFFF,
            Self::Rv64 => u64::MAX,
        }
    }

    /// Number of shift-amount bits encoded in shift-immediate instructions.
    pub const fn shamt_bits(self) -> u32 {
        match self {
            Self::Rv32 => 5,
            Self::Rv64 => 6,
        }
    }

    /// Parses a width given as `32` or `64`.
    pub const fn from_bits(bits: u32) -> Option<Self> {
        match bits {
            32 => Some(Self::Rv32),
            64 => Some(Self::Rv64),
            _ => None,
        }
    }
}

impl fmt::Display for Xlen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RV{}", self.bits())
    }
}

/// General decoder behaviour.
#[derive(Debug, Clone, Deserialize)]
pub struct GeneralConfig {
    /// Emit a trace event for every decoded instruction.
    #[serde(default = "GeneralConfig::default_trace_decode")]
    pub trace_decode: bool,
}

impl GeneralConfig {
    /// Returns the default decode tracing flag.
    const fn default_trace_decode() -> bool {
        defaults::TRACE_DECODE
    }
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            trace_decode: defaults::TRACE_DECODE,
        }
    }
}

/// Decoder width configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DecoderConfig {
    /// Register width (`"rv32"` or `"rv64"`).
    #[serde(default = "DecoderConfig::default_xlen")]
    pub xlen: Xlen,
}

impl DecoderConfig {
    /// Returns the default register width.
    const fn default_xlen() -> Xlen {
        defaults::XLEN
    }
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            xlen: defaults::XLEN,
        }
    }
}

/// Root configuration structure.
///
/// # Examples
///
/// ```
/// use rvdecode_core::config::{Config, Xlen};
///
/// let config = Config::default();
/// assert_eq!(config.decoder.xlen, Xlen::Rv32);
///
/// let json = r#"{ "decoder": { "xlen": "rv64" } }"#;
/// let config: Config = serde_json::from_str(json).unwrap();
/// assert_eq!(config.decoder.xlen, Xlen::Rv64);
/// assert!(!config.general.trace_decode);
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// General settings.
    #[serde(default)]
    pub general: GeneralConfig,
    /// Decoder width settings.
    #[serde(default)]
    pub decoder: DecoderConfig,
}

impl Config {
    /// Parses a configuration from a JSON document.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error if the document is malformed or a field
    /// has the wrong type.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
