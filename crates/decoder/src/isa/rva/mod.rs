//! Atomics (A).
//!
//! `funct3` carries the access width and `funct5` the operation. Bits 26 and
//! 25 are the `aq` and `rl` ordering flags, which never affect legality.

/// AMO access widths.
pub mod funct3;

/// AMO operation selectors.
pub mod funct5;
