//! RISC-V Privileged Architecture Encodings.
//!
//! Defines the SYSTEM-opcode encodings recognised by the decoder: environment
//! calls, trap returns, wait-for-interrupt, address-translation fences, and
//! CSR access.

/// SYSTEM opcode function codes and exact encodings.
pub mod opcodes;
