//! TOML text encoding.

use std::path::Path;

use arch_model::ArchitectureDescription;

use crate::error::{CodecError, Result};

/// Parse a document from a TOML string.
pub fn parse_architecture_toml(toml_str: &str) -> Result<ArchitectureDescription> {
    let architecture: ArchitectureDescription = toml::from_str(toml_str)?;
    Ok(architecture)
}

/// Serialize a document to pretty TOML.
pub fn architecture_to_toml(architecture: &ArchitectureDescription) -> Result<String> {
    let toml_str = toml::to_string_pretty(architecture)?;
    Ok(toml_str)
}

/// Load a document from a TOML file.
pub fn read_text_file(path: &Path) -> Result<ArchitectureDescription> {
    if !path.exists() {
        return Err(CodecError::NotFound {
            path: path.to_path_buf(),
        });
    }
    tracing::debug!(path = %path.display(), "reading text architecture");
    let content = std::fs::read_to_string(path).map_err(|e| CodecError::from(e).in_file(path))?;
    parse_architecture_toml(&content).map_err(|e| e.in_file(path))
}

/// Write a document to a TOML file, replacing any existing file.
pub fn write_text_file(path: &Path, architecture: &ArchitectureDescription) -> Result<()> {
    let content = architecture_to_toml(architecture)?;
    std::fs::write(path, content).map_err(|e| CodecError::from(e).in_file(path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_name_only() {
        let arch = parse_architecture_toml(r#"name = "some_arch""#).unwrap();
        assert_eq!(arch, ArchitectureDescription::named("some_arch"));
    }

    #[test]
    fn round_trip_x86_64() {
        let original = ArchitectureDescription::x86_64();
        let toml_str = architecture_to_toml(&original).unwrap();
        let parsed = parse_architecture_toml(&toml_str).unwrap();
        assert_eq!(original, parsed);
    }

    #[test]
    fn parse_handwritten_document() {
        let toml_str = r#"
name = "ARMv7-M"

[instruction-set]
name = "ARMv7-M"
endianness = "little"
word-size = 32
register-classes = [{ name = "gpr", count = 13, width-bits = 32 }]

[[microarchitectures]]
id = "cortex-m4"
name = "Cortex-M4"
deterministic-timing = true

[microarchitectures.pipeline]
stages = 3
execution-ports = 1
branch-penalty-cycles = 3
"#;
        let arch = parse_architecture_toml(toml_str).unwrap();
        assert_eq!(arch.name, "ARMv7-M");
        let isa = arch.instruction_set.as_ref().unwrap();
        assert_eq!(isa.gp_register_count(), 13);
        assert!(isa.extensions.is_empty());
        let uarch = arch.microarchitecture("cortex-m4").unwrap();
        assert_eq!(uarch.pipeline.stages, 3);
        assert!(uarch.deterministic_timing);
        assert_eq!(uarch.memory_timing.bus_width_bits, 0);
    }

    #[test]
    fn parse_invalid_returns_error() {
        assert!(parse_architecture_toml("this is not valid toml [[[").is_err());
    }

    #[test]
    fn parse_missing_name_returns_error() {
        let err = parse_architecture_toml("microarchitectures = []").unwrap_err();
        assert!(matches!(err, CodecError::Toml(_)));
    }

    #[test]
    fn file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("arch.pbtxt");
        let original = ArchitectureDescription::armv7m();
        write_text_file(&path, &original).unwrap();
        assert_eq!(read_text_file(&path).unwrap(), original);
    }

    #[test]
    fn read_not_found() {
        let err = read_text_file(Path::new("/nonexistent/arch.pbtxt")).unwrap_err();
        assert!(matches!(err, CodecError::NotFound { .. }));
        assert!(err.to_string().contains("/nonexistent/arch.pbtxt"));
    }

    #[test]
    fn malformed_file_names_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.pbtxt");
        std::fs::write(&path, "name = ").unwrap();
        let err = read_text_file(&path).unwrap_err();
        assert!(matches!(err, CodecError::InFile { .. }));
        assert!(err.to_string().contains("broken.pbtxt"));
    }
}
