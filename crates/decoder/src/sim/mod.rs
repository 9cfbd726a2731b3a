//! Simulation utilities and program loading.
//!
//! Provides utilities for reading instruction words out of ELF executables
//! and raw binary images so they can be fed to the decoder.

/// ELF and raw binary loading.
pub mod loader;
