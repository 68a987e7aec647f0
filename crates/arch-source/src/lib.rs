//! Resolution of source specifiers into architecture descriptions.
//!
//! A source specifier names where a document comes from:
//!
//! | Specifier            | Source                                   |
//! |----------------------|------------------------------------------|
//! | `pbtxt:<path>`       | text (TOML) file                         |
//! | `pb:<path>`          | binary file                              |
//! | `registered:<name>`  | provider registered under `<name>`       |
//!
//! Providers register themselves with [`register_architecture_provider!`];
//! the global [`ProviderRegistry`] is built from those registrations on first
//! use. [`get_architecture`] resolves a specifier against it.

pub mod builtin;
pub mod error;
pub mod provider;
pub mod registry;
pub mod resolver;
pub mod specifier;

pub use error::{RegistryError, Result, SourceError};
pub use provider::{ArchitectureProvider, BinaryFileProvider, TextFileProvider};
pub use registry::{DuplicatePolicy, ProviderRegistration, ProviderRegistry, RegistryBuilder};
pub use resolver::{get_architecture, FallbackPolicy, Resolver};
pub use specifier::{split_specifier, Specifier, PBTXT_SOURCE, PB_SOURCE, REGISTERED_SOURCE};

#[doc(hidden)]
pub use inventory;
