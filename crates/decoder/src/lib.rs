//! RISC-V RV32G instruction decoder library.
//!
//! This crate turns raw 32-bit RISC-V instruction words into validated,
//! structured decode results. It provides:
//! 1. **ISA:** Field extraction, opcode classification, immediate generation,
//!    and the ALU / FPU / memory subcode tables consumed by execution units.
//! 2. **Decode:** A stateless orchestrator that applies per-class legality rules
//!    and width gating (RV32 vs RV64 forms).
//! 3. **Core:** A decode pipeline stage with valid / stall / reset gating and a
//!    register file with single-writer, multi-reader port semantics.
//! 4. **Simulation:** Configuration, decode statistics, and an instruction-word loader.

/// Common types (errors, register file).
pub mod common;
/// Decoder configuration (defaults, XLEN, JSON deserialisation).
pub mod config;
/// Pipeline plumbing around the decoder (latches, decode stage).
pub mod core;
/// Instruction set (fields, classifier, immediates, subcodes, decode, disasm).
pub mod isa;
/// Instruction-word loading from ELF or raw binaries.
pub mod sim;
/// Decode statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::{Config, Xlen};
/// Illegal-instruction error returned by [`decode`].
pub use crate::common::error::{IllegalInstruction, IllegalReason};
/// Stateless decoder entry point and its result type.
pub use crate::isa::decode::{DecodeResult, OpCategory, decode};
