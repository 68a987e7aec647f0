//! `archsrc providers` — list registered architecture providers.

use anyhow::Result;
use arch_source::ProviderRegistry;

pub fn run(registry: &ProviderRegistry) -> Result<()> {
    println!("Registered architecture providers:");
    println!();
    for name in registry.names() {
        println!("  registered:{name}");
    }
    Ok(())
}
