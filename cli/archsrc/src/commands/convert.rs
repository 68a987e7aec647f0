//! `archsrc convert` — write the resolved architecture to a file.

use std::path::Path;

use anyhow::{Context, Result};
use arch_codec::Encoding;
use arch_model::ArchitectureDescription;
use clap::ValueEnum;

/// Encoding choice on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum EncodingArg {
    Text,
    Binary,
}

impl From<EncodingArg> for Encoding {
    fn from(arg: EncodingArg) -> Self {
        match arg {
            EncodingArg::Text => Encoding::Text,
            EncodingArg::Binary => Encoding::Binary,
        }
    }
}

/// Write `architecture` to `output`. Without an explicit encoding it is
/// inferred from the output extension. Returns the encoding used.
pub fn convert(
    architecture: &ArchitectureDescription,
    output: &Path,
    encoding: Option<EncodingArg>,
) -> Result<Encoding> {
    let encoding = encoding
        .map(Encoding::from)
        .unwrap_or_else(|| Encoding::from_path(output));
    arch_codec::write_architecture(output, architecture, encoding)
        .with_context(|| format!("writing {}", output.display()))?;
    Ok(encoding)
}

pub fn run(
    architecture: &ArchitectureDescription,
    output: &Path,
    encoding: Option<EncodingArg>,
) -> Result<()> {
    let encoding = convert(architecture, output, encoding)?;
    println!(
        "Wrote '{}' ({encoding}) to {}",
        architecture.name,
        output.display()
    );
    Ok(())
}
