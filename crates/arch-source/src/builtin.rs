//! Registered generators for the built-in architecture descriptions.
//!
//! Available as `registered:builtin:x86_64` and `registered:builtin:armv7-m`.

use std::sync::Arc;

use arch_model::ArchitectureDescription;

use crate::error::Result;
use crate::provider::ArchitectureProvider;

/// Generates [`ArchitectureDescription::x86_64`].
#[derive(Debug, Default)]
pub struct X86_64Provider;

impl ArchitectureProvider for X86_64Provider {
    fn produce(&self) -> Result<Arc<ArchitectureDescription>> {
        Ok(Arc::new(ArchitectureDescription::x86_64()))
    }
}

crate::register_architecture_provider!("builtin:x86_64", X86_64Provider);

/// Generates [`ArchitectureDescription::armv7m`].
#[derive(Debug, Default)]
pub struct Armv7mProvider;

impl ArchitectureProvider for Armv7mProvider {
    fn produce(&self) -> Result<Arc<ArchitectureDescription>> {
        Ok(Arc::new(ArchitectureDescription::armv7m()))
    }
}

crate::register_architecture_provider!("builtin:armv7-m", Armv7mProvider);
