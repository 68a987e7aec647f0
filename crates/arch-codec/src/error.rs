//! Error types for encoding and decoding architecture descriptions.

use std::path::PathBuf;

/// Errors that can occur while encoding or decoding a document.
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    /// TOML deserialization error.
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// TOML serialization error.
    #[error("TOML serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    /// Binary payload could not be encoded or decoded.
    #[error("binary payload error: {0}")]
    Postcard(#[from] postcard::Error),

    /// I/O error reading or writing a document.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Document file not found.
    #[error("architecture file not found: {}", path.display())]
    NotFound {
        /// The path that was not found.
        path: PathBuf,
    },

    /// A failure attributed to a specific file.
    #[error("{}: {source}", path.display())]
    InFile {
        /// The file being read or written.
        path: PathBuf,
        /// The underlying failure.
        #[source]
        source: Box<CodecError>,
    },

    #[error("invalid magic bytes: expected ARC\\0")]
    InvalidMagic,

    #[error("unsupported binary format version {major}.{minor}.{patch}")]
    UnsupportedVersion { major: u8, minor: u8, patch: u8 },

    #[error("binary document is truncated")]
    Truncated,

    #[error("reserved header byte is {value:#04x}, expected 0")]
    ReservedByte { value: u8 },

    #[error("{extra} unexpected bytes after the binary document")]
    TrailingData { extra: usize },

    #[error("content hash mismatch: binary document is corrupted")]
    HashMismatch,
}

impl CodecError {
    /// Attribute this error to `path`.
    pub fn in_file(self, path: impl Into<PathBuf>) -> Self {
        CodecError::InFile {
            path: path.into(),
            source: Box::new(self),
        }
    }
}

/// Result type for codec operations.
pub type Result<T> = std::result::Result<T, CodecError>;
