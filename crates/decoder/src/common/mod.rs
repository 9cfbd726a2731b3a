//! Common types shared across the decoder.
//!
//! 1. **Error Handling:** The single `IllegalInstruction` outcome and its causes.
//! 2. **Register Management:** A register file addressed by decoded index fields.

/// Error types returned by the decoder.
pub mod error;

/// Register file with select-driven read and write ports.
pub mod reg;

pub use error::{IllegalInstruction, IllegalReason};
pub use reg::RegisterFile;
