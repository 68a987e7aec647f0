//! `archsrc.toml` configuration.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

/// File looked up in the working directory when no `--config` is given.
pub const DEFAULT_CONFIG_FILE: &str = "archsrc.toml";

/// Top-level configuration file structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Where the architecture comes from.
    #[serde(default)]
    pub source: SourceConfig,
}

/// `[source]` section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct SourceConfig {
    /// Architecture source specifier (e.g. "pbtxt:/path/to/arch.pbtxt").
    #[serde(default)]
    pub architecture: Option<String>,
    /// Microarchitecture id.
    #[serde(default)]
    pub microarchitecture: Option<String>,
    /// Treat unrecognized specifiers as file paths.
    #[serde(default)]
    pub allow_bare_path: bool,
}

impl Config {
    /// Load `explicit` if given (it must exist), otherwise `archsrc.toml` in
    /// `dir` if present, otherwise defaults.
    pub fn load(explicit: Option<&Path>, dir: &Path) -> Result<Self> {
        let path: PathBuf = match explicit {
            Some(path) => {
                if !path.is_file() {
                    bail!("config file not found: {}", path.display());
                }
                path.to_path_buf()
            }
            None => {
                let candidate = dir.join(DEFAULT_CONFIG_FILE);
                if !candidate.is_file() {
                    return Ok(Self::default());
                }
                candidate
            }
        };

        tracing::debug!(path = %path.display(), "loading config");
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("reading {}", path.display()))?;
        Self::from_str(&content).with_context(|| format!("parsing {}", path.display()))
    }

    /// Parse a configuration from a TOML string.
    pub fn from_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }
}
