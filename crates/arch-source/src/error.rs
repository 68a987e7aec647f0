//! Error types for source resolution.

use arch_codec::CodecError;

/// Errors raised while building a provider registry.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    /// Two providers were registered under the same name.
    #[error("architecture provider '{name}' is registered more than once")]
    DuplicateProvider {
        /// The contested name.
        name: String,
    },
}

/// Errors that can occur while resolving a source specifier.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// No specifier was supplied.
    #[error("no architecture specified; please provide one (e.g. 'pbtxt:/path/to/file.pbtxt')")]
    MissingSpecifier,

    /// The specifier's scheme is not recognized.
    #[error(
        "unknown architecture source '{specifier}' (expected 'pbtxt:<path>', 'pb:<path>' or 'registered:<name>')"
    )]
    UnknownSource {
        /// The full specifier as given.
        specifier: String,
    },

    /// No provider is registered under the requested name.
    #[error(
        "no architecture provider registered as '{name}' (registered providers: {})",
        display_names(known)
    )]
    UnknownProvider {
        /// The requested provider name.
        name: String,
        /// Names that are registered.
        known: Vec<String>,
    },

    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// A registered provider failed to produce its document.
    #[error("architecture provider '{name}' failed: {detail}")]
    Provider {
        /// The provider's registered name.
        name: String,
        /// Description of the failure.
        detail: String,
    },

    #[error(transparent)]
    Codec(#[from] CodecError),
}

fn display_names(names: &[String]) -> String {
    if names.is_empty() {
        "none".into()
    } else {
        names.join(", ")
    }
}

/// Result type for source resolution.
pub type Result<T> = std::result::Result<T, SourceError>;
