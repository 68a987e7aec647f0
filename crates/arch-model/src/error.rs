//! Error types for architecture model operations.

/// Errors that can occur while building models from an architecture description.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ModelError {
    /// The requested microarchitecture is not described by the architecture.
    #[error(
        "unknown microarchitecture '{id}' for architecture '{architecture}' (available: {})",
        display_ids(available)
    )]
    UnknownMicroarchitecture {
        /// The requested microarchitecture id.
        id: String,
        /// Name of the architecture that was searched.
        architecture: String,
        /// Ids the architecture does describe.
        available: Vec<String>,
    },
}

fn display_ids(ids: &[String]) -> String {
    if ids.is_empty() {
        "none".into()
    } else {
        ids.join(", ")
    }
}

/// Result type for model operations.
pub type Result<T> = std::result::Result<T, ModelError>;
