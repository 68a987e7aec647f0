//! Architecture selection from command-line flags and configuration.
//!
//! The `*_or_die` accessors are the fail-fast boundary: they print the
//! diagnostic and terminate the process instead of returning an error.

use std::fmt::Display;
use std::process;
use std::sync::Arc;

use anyhow::Result;
use arch_model::{ArchitectureDescription, MicroArchitectureData};
use arch_source::{FallbackPolicy, Resolver, SourceError};

use crate::config::SourceConfig;

/// Microarchitecture used when none is configured.
pub const DEFAULT_MICROARCHITECTURE: &str = "hsw";

/// The effective architecture selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchitectureFlags {
    /// Source specifier, if any was supplied.
    pub architecture: Option<String>,
    /// Microarchitecture id.
    pub microarchitecture: String,
    /// Treatment of unrecognized specifiers.
    pub fallback: FallbackPolicy,
}

impl ArchitectureFlags {
    /// Merge command-line values over the config file's `[source]` section.
    pub fn merge(
        architecture: Option<String>,
        microarchitecture: Option<String>,
        allow_bare_path: bool,
        config: &SourceConfig,
    ) -> Self {
        let fallback = if allow_bare_path || config.allow_bare_path {
            FallbackPolicy::BarePath
        } else {
            FallbackPolicy::Reject
        };
        Self {
            architecture: architecture.or_else(|| config.architecture.clone()),
            microarchitecture: microarchitecture
                .or_else(|| config.microarchitecture.clone())
                .unwrap_or_else(|| DEFAULT_MICROARCHITECTURE.to_string()),
            fallback,
        }
    }
}

/// Fails unless an architecture specifier was supplied.
pub fn check_architecture_flag(flags: &ArchitectureFlags) -> Result<&str, SourceError> {
    match flags.architecture.as_deref() {
        Some(spec) if !spec.is_empty() => Ok(spec),
        _ => Err(SourceError::MissingSpecifier),
    }
}

/// Resolve the architecture named by `flags`.
pub fn get_architecture_from_flags(
    flags: &ArchitectureFlags,
) -> Result<Arc<ArchitectureDescription>, SourceError> {
    let specifier = check_architecture_flag(flags)?;
    Resolver::global()?
        .with_fallback(flags.fallback)
        .resolve(specifier)
}

/// Resolve the architecture and bind it to the configured microarchitecture.
pub fn get_microarchitecture_data_from_flags(
    flags: &ArchitectureFlags,
) -> Result<MicroArchitectureData> {
    let architecture = get_architecture_from_flags(flags)?;
    Ok(MicroArchitectureData::for_microarchitecture_id(
        architecture,
        &flags.microarchitecture,
    )?)
}

/// [`get_architecture_from_flags`], terminating the process on failure.
pub fn get_architecture_or_die(flags: &ArchitectureFlags) -> Arc<ArchitectureDescription> {
    get_architecture_from_flags(flags).unwrap_or_else(|e| die(e))
}

/// [`get_microarchitecture_data_from_flags`], terminating the process on failure.
pub fn get_microarchitecture_data_or_die(flags: &ArchitectureFlags) -> MicroArchitectureData {
    get_microarchitecture_data_from_flags(flags).unwrap_or_else(|e| die(format!("{e:#}")))
}

fn die(err: impl Display) -> ! {
    tracing::debug!(error = %err, "cannot resolve architecture");
    eprintln!("error: {err}");
    process::exit(1);
}
