//! Pipeline Latch Interface.

/// Common operations on an inter-stage buffer.
pub trait PipelineLatch {
    /// Discards the held entry, leaving a bubble.
    fn flush(&mut self);

    /// `true` if the latch holds no entry.
    fn is_empty(&self) -> bool;

    /// `true` if the held entry is an illegal instruction that must trap
    /// when it reaches execute.
    fn has_trap(&self) -> bool;
}
