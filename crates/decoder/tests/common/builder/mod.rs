//! Builders for raw instruction words and program images.

/// Minimal ELF images for loader tests.
pub mod elf;
