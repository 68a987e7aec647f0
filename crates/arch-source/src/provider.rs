//! Providers of architecture descriptions.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use arch_model::ArchitectureDescription;

use crate::error::Result;

/// Something that can produce an architecture description.
///
/// Each call yields a valid document; implementations need not return the
/// same `Arc` twice.
pub trait ArchitectureProvider: Send + Sync {
    /// Produce the document.
    fn produce(&self) -> Result<Arc<ArchitectureDescription>>;
}

/// Reads a document from a text (TOML) file.
#[derive(Debug, Clone)]
pub struct TextFileProvider {
    path: PathBuf,
}

impl TextFileProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ArchitectureProvider for TextFileProvider {
    fn produce(&self) -> Result<Arc<ArchitectureDescription>> {
        Ok(Arc::new(arch_codec::read_text_file(&self.path)?))
    }
}

/// Reads a document from a binary file.
#[derive(Debug, Clone)]
pub struct BinaryFileProvider {
    path: PathBuf,
}

impl BinaryFileProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ArchitectureProvider for BinaryFileProvider {
    fn produce(&self) -> Result<Arc<ArchitectureDescription>> {
        Ok(Arc::new(arch_codec::read_binary_file(&self.path)?))
    }
}
