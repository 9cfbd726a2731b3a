//! Instruction Set Architecture (ISA) Definitions.
//!
//! Contains the opcode and function-code constants, the decode pipeline
//! components, and the subcode tables, organized by RISC-V extension.
//!
//! # Components (leaves first)
//!
//! * `instruction`: Field extractor (raw sub-fields of a 32-bit word).
//! * `immediate`: Immediate generator for the I/S/B/U/J formats.
//! * `opcode`: Opcode classifier (32-entry class table).
//! * `subcode`: ALU / FPU / memory subcode generators.
//! * `decode`: Decode orchestrator and `DecodeResult`.
//!
//! # Extensions
//!
//! * `rvi`: Base integer set (RV32I plus the RV64I forms that are width-gated).
//! * `rvm`: Integer multiplication and division.
//! * `rva`: Atomic memory operations.
//! * `rvf`: Single- and double-precision floating point (F and D).
//! * `privileged`: SYSTEM encodings (environment calls, trap returns, CSRs).

/// Instruction decoding orchestrator and decode result types.
pub mod decode;

/// Instruction disassembler for traces and CLI output.
pub mod disasm;

/// Immediate value generation for all instruction formats.
pub mod immediate;

/// Instruction field extraction utilities.
pub mod instruction;

/// Primary opcode classification.
pub mod opcode;

/// Privileged architecture encodings (SYSTEM opcode).
pub mod privileged;

/// Atomic memory operations extension (A).
pub mod rva;

/// Single/double-precision floating-point extensions (F and D).
pub mod rvf;

/// Base integer instruction set (I).
pub mod rvi;

/// Integer multiply/divide extension (M).
pub mod rvm;

/// Operation subcode tables (ALU, FPU, memory).
pub mod subcode;
