//! Pipeline stage implementations.

/// Instruction decode stage implementation.
pub mod decode;

/// Decode stage (ID stage).
pub use decode::DecodeStage;
