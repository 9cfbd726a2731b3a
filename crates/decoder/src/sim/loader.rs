//! Binary Loader.
//!
//! This module turns program files into instruction words. It performs:
//! 1. **ELF loading:** Parses RISC-V ELF files and collects every executable
//!    section with its load address.
//! 2. **Raw loading:** Treats a flat binary as little-endian words starting at a
//!    caller-chosen base address.
//! 3. **Width detection:** Reports the ELF class (32 or 64 bit) so callers can
//!    pick a matching decoder width.

use std::fs;
use std::path::{Path, PathBuf};

use object::{Architecture, Object, ObjectSection, SectionKind};
use thiserror::Error;

use crate::config::Xlen;

/// Size of one instruction word in bytes.
const WORD_BYTES: usize = 4;

/// Errors raised while loading a program.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file could not be read.
    #[error("could not read '{}': {source}", path.display())]
    Io {
        /// Path that failed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The file is not a parseable object file.
    #[error("invalid ELF file: {0}")]
    Elf(#[from] object::read::Error),

    /// The ELF targets a different architecture.
    #[error("not a RISC-V executable (architecture {0:?})")]
    NotRiscv(Architecture),

    /// The ELF is big-endian; RISC-V instruction parcels are little-endian.
    #[error("big-endian ELF files are not supported")]
    BigEndian,

    /// The ELF has no executable section with contents.
    #[error("no executable sections found")]
    NoText,
}

/// One contiguous run of instruction words.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextSection {
    /// Section name (`.text`, `.init`, ...). Empty for raw images.
    pub name: String,
    /// Load address of the first word.
    pub addr: u64,
    /// Instruction words in address order.
    pub words: Vec<u32>,
}

/// Instruction words extracted from a program file.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Program {
    /// Executable sections in file order.
    pub sections: Vec<TextSection>,
    /// Register width implied by the ELF class, if known.
    pub xlen: Option<Xlen>,
}

impl Program {
    /// Iterates over `(pc, word)` pairs across all sections.
    ///
    /// The pc wraps modulo 2^64, so a section based near the top of the
    /// address space continues from zero.
    pub fn words(&self) -> impl Iterator<Item = (u64, u32)> + '_ {
        self.sections.iter().flat_map(|s| {
            s.words
                .iter()
                .enumerate()
                .map(move |(i, &w)| (s.addr.wrapping_add((i * WORD_BYTES) as u64), w))
        })
    }

    /// Total number of words.
    pub fn len(&self) -> usize {
        self.sections.iter().map(|s| s.words.len()).sum()
    }

    /// True if no words were loaded.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Splits a byte buffer into little-endian 32-bit words.
///
/// Trailing bytes that do not fill a whole word are dropped.
pub fn words_from_bytes(bytes: &[u8]) -> Vec<u32> {
    let chunks = bytes.chunks_exact(WORD_BYTES);
    if !chunks.remainder().is_empty() {
        tracing::warn!(
            trailing = chunks.remainder().len(),
            "ignoring bytes after the last whole word"
        );
    }
    chunks
        .map(|c| u32::from_le_bytes([c[0], c[1], c[2], c[3]]))
        .collect()
}

/// Wraps a raw binary image as a single section at `base`.
pub fn load_raw(bytes: &[u8], base: u64) -> Program {
    Program {
        sections: vec![TextSection {
            name: String::new(),
            addr: base,
            words: words_from_bytes(bytes),
        }],
        xlen: None,
    }
}

/// Extracts the executable sections of a RISC-V ELF image.
///
/// # Errors
///
/// Returns [`LoadError`] if the bytes are not an ELF, the ELF is not a
/// little-endian RISC-V file, or it has no executable section with data.
pub fn load_elf(bytes: &[u8]) -> Result<Program, LoadError> {
    let file = object::File::parse(bytes)?;

    let xlen = match file.architecture() {
        Architecture::Riscv32 => Xlen::Rv32,
        Architecture::Riscv64 => Xlen::Rv64,
        other => return Err(LoadError::NotRiscv(other)),
    };
    if !file.is_little_endian() {
        return Err(LoadError::BigEndian);
    }

    let mut sections = Vec::new();
    for section in file.sections() {
        if section.kind() != SectionKind::Text {
            continue;
        }
        let data = section.data()?;
        if data.is_empty() {
            continue;
        }
        let name = section.name().unwrap_or("").to_string();
        tracing::debug!(
            section = %name,
            addr = format_args!("{:#x}", section.address()),
            bytes = data.len(),
            "loading executable section"
        );
        sections.push(TextSection {
            name,
            addr: section.address(),
            words: words_from_bytes(data),
        });
    }

    if sections.is_empty() {
        return Err(LoadError::NoText);
    }
    Ok(Program {
        sections,
        xlen: Some(xlen),
    })
}

/// Loads a program file from disk.
///
/// # Arguments
///
/// * `path` - File to read.
/// * `raw` - Treat the file as a flat binary (base address 0) instead of an ELF.
///
/// # Errors
///
/// Returns [`LoadError::Io`] if the file cannot be read, otherwise any error
/// from [`load_elf`].
pub fn load_file(path: impl AsRef<Path>, raw: bool) -> Result<Program, LoadError> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    if raw {
        Ok(load_raw(&bytes, 0))
    } else {
        load_elf(&bytes)
    }
}
