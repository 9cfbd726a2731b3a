//! Decode pipeline stage.
//!
//! This module contains the pieces that surround the decoder in a pipelined
//! core:
//! 1. **Latches:** IF/ID input and ID/EX output entries.
//! 2. **Stages:** The decode stage with valid / stall / reset gating.
//! 3. **Traits:** The latch interface (flush and status checks).

/// Inter-stage pipeline latches (IF/ID, ID/EX).
pub mod latches;

/// Pipeline stage implementations.
pub mod stages;

/// Traits for pipeline latches.
pub mod traits;
