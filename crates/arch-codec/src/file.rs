//! Encoding selection for document files.

use std::path::Path;

use arch_model::ArchitectureDescription;

use crate::binary::{read_binary_file, write_binary_file};
use crate::error::Result;
use crate::text::{read_text_file, write_text_file};

/// On-disk encoding of a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    /// Human-readable TOML.
    Text,
    /// Compact binary frame.
    Binary,
}

impl Encoding {
    /// Infer the encoding from a file extension: `.pb` is binary, anything else is text.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some("pb") => Encoding::Binary,
            _ => Encoding::Text,
        }
    }
}

impl std::fmt::Display for Encoding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Encoding::Text => f.write_str("text"),
            Encoding::Binary => f.write_str("binary"),
        }
    }
}

/// Load a document from `path` in the given encoding.
pub fn read_architecture(path: &Path, encoding: Encoding) -> Result<ArchitectureDescription> {
    match encoding {
        Encoding::Text => read_text_file(path),
        Encoding::Binary => read_binary_file(path),
    }
}

/// Write a document to `path` in the given encoding.
pub fn write_architecture(
    path: &Path,
    architecture: &ArchitectureDescription,
    encoding: Encoding,
) -> Result<()> {
    match encoding {
        Encoding::Text => write_text_file(path, architecture),
        Encoding::Binary => write_binary_file(path, architecture),
    }
}
