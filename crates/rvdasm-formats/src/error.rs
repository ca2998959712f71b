//! Error types for binary format parsing.

use thiserror::Error;

/// Error type for ELF parsing.
#[derive(Error, Debug)]
pub enum ParseError {
    /// Invalid magic number at start of file.
    #[error("invalid magic number: expected {expected}, got {actual:02x?}")]
    InvalidMagic {
        expected: &'static str,
        actual: Vec<u8>,
    },

    /// File is too short to contain required data.
    #[error("file too short: expected at least {expected} bytes, got {actual}")]
    TooShort { expected: usize, actual: usize },

    /// Not a 32-bit ELF file.
    #[error("unsupported ELF class {0} (only ELF32 is supported)")]
    UnsupportedClass(u8),

    /// Not a little-endian ELF file.
    #[error("unsupported ELF data encoding {0} (only little-endian is supported)")]
    UnsupportedEncoding(u8),

    /// Invalid section or table structure.
    #[error("invalid {kind} at offset {offset:#x}: {reason}")]
    InvalidStructure {
        kind: &'static str,
        offset: u64,
        reason: String,
    },

    /// Invalid string table index.
    #[error("invalid string table index: {index} (table size: {size})")]
    InvalidStringIndex { index: usize, size: usize },

    /// A section this tool requires is absent.
    #[error("missing required section: {0}")]
    MissingSection(&'static str),
}

impl ParseError {
    /// Creates a new InvalidMagic error.
    pub fn invalid_magic(expected: &'static str, actual: &[u8]) -> Self {
        Self::InvalidMagic {
            expected,
            actual: actual.to_vec(),
        }
    }

    /// Creates a new TooShort error.
    pub fn too_short(expected: usize, actual: usize) -> Self {
        Self::TooShort { expected, actual }
    }

    /// Creates a new InvalidStructure error.
    pub fn invalid_structure(kind: &'static str, offset: u64, reason: impl Into<String>) -> Self {
        Self::InvalidStructure {
            kind,
            offset,
            reason: reason.into(),
        }
    }
}
