//! `archsrc show` — print the resolved architecture.

use anyhow::Result;
use arch_model::ArchitectureDescription;
use clap::ValueEnum;

/// Output format for `show`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ShowFormat {
    #[default]
    Toml,
    Json,
}

/// Render the architecture in the requested format.
pub fn render(architecture: &ArchitectureDescription, format: ShowFormat) -> Result<String> {
    Ok(match format {
        ShowFormat::Toml => arch_codec::architecture_to_toml(architecture)?,
        ShowFormat::Json => serde_json::to_string_pretty(architecture)?,
    })
}

pub fn run(architecture: &ArchitectureDescription, format: ShowFormat) -> Result<()> {
    println!("{}", render(architecture, format)?);
    Ok(())
}
