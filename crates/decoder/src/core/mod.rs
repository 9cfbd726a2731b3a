//! Pipeline plumbing around the decoder.
//!
//! The decoder itself is a pure function. This module models the pipeline
//! stage that invokes it once per cycle, gated by the fetch stage's valid
//! signal, a stall condition, and reset.

/// Decode pipeline stage, latches, and latch interface.
pub mod pipeline;
