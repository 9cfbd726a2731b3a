//! Shared test infrastructure.

/// Instruction encoders.
pub mod builder;
