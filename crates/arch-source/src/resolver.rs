//! Resolution of source specifiers.

use std::path::Path;
use std::sync::Arc;

use arch_codec::Encoding;
use arch_model::ArchitectureDescription;

use crate::error::{Result, SourceError};
use crate::provider::{ArchitectureProvider, BinaryFileProvider, TextFileProvider};
use crate::registry::ProviderRegistry;
use crate::specifier::Specifier;

/// How to treat a specifier whose scheme is not recognized.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FallbackPolicy {
    /// Fail with [`SourceError::UnknownSource`].
    #[default]
    Reject,
    /// Treat the whole specifier as a file path; `.pb` files are binary,
    /// everything else is text.
    BarePath,
}

/// Resolves specifiers against a provider registry.
#[derive(Debug, Clone, Copy)]
pub struct Resolver<'r> {
    registry: &'r ProviderRegistry,
    fallback: FallbackPolicy,
}

impl<'r> Resolver<'r> {
    pub fn new(registry: &'r ProviderRegistry) -> Self {
        Self {
            registry,
            fallback: FallbackPolicy::default(),
        }
    }

    /// A resolver over the global registry.
    pub fn global() -> Result<Resolver<'static>> {
        Ok(Resolver::new(ProviderRegistry::global()?))
    }

    pub fn with_fallback(mut self, fallback: FallbackPolicy) -> Self {
        self.fallback = fallback;
        self
    }

    pub fn fallback(&self) -> FallbackPolicy {
        self.fallback
    }

    /// Resolve `specifier` to a document.
    ///
    /// Exactly one provider runs per call. Errors name the offending
    /// specifier, path or provider.
    pub fn resolve(&self, specifier: &str) -> Result<Arc<ArchitectureDescription>> {
        if specifier.is_empty() {
            return Err(SourceError::MissingSpecifier);
        }

        let parsed = Specifier::parse(specifier);
        tracing::debug!(
            %specifier,
            scheme = parsed.scheme().unwrap_or("none"),
            "resolving architecture"
        );

        match parsed {
            Specifier::TextFile(path) => TextFileProvider::new(path).produce(),
            Specifier::BinaryFile(path) => BinaryFileProvider::new(path).produce(),
            Specifier::Registered(name) => {
                let provider =
                    self.registry
                        .lookup(&name)
                        .ok_or_else(|| SourceError::UnknownProvider {
                            known: self.registry.names().map(str::to_string).collect(),
                            name,
                        })?;
                provider.produce()
            }
            Specifier::Unrecognized(raw) => match self.fallback {
                FallbackPolicy::Reject => Err(SourceError::UnknownSource { specifier: raw }),
                FallbackPolicy::BarePath => {
                    let path = Path::new(&raw);
                    tracing::debug!(path = %path.display(), "treating specifier as a file path");
                    match Encoding::from_path(path) {
                        Encoding::Text => TextFileProvider::new(path).produce(),
                        Encoding::Binary => BinaryFileProvider::new(path).produce(),
                    }
                }
            },
        }
    }
}

/// Resolve `specifier` against the global registry, rejecting unknown schemes.
pub fn get_architecture(specifier: &str) -> Result<Arc<ArchitectureDescription>> {
    Resolver::global()?.resolve(specifier)
}
