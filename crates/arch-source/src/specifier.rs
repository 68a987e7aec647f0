//! Source specifier parsing.

use std::fmt;
use std::path::PathBuf;

/// Scheme for text (TOML) files.
pub const PBTXT_SOURCE: &str = "pbtxt";
/// Scheme for binary files.
pub const PB_SOURCE: &str = "pb";
/// Scheme for registered providers.
pub const REGISTERED_SOURCE: &str = "registered";

const DELIMITER: char = ':';

/// Split a specifier at its first `:` into `(scheme, remainder)`.
///
/// Without a delimiter the whole string is the scheme and the remainder is empty.
pub fn split_specifier(specifier: &str) -> (&str, &str) {
    specifier.split_once(DELIMITER).unwrap_or((specifier, ""))
}

/// A parsed source specifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Specifier {
    /// `pbtxt:<path>`
    TextFile(PathBuf),
    /// `pb:<path>`
    BinaryFile(PathBuf),
    /// `registered:<name>`
    Registered(String),
    /// Anything else, kept verbatim.
    Unrecognized(String),
}

impl Specifier {
    /// Parse a specifier. Never fails; unknown schemes yield [`Specifier::Unrecognized`].
    pub fn parse(specifier: &str) -> Self {
        let (scheme, remainder) = split_specifier(specifier);
        match scheme {
            PBTXT_SOURCE => Specifier::TextFile(PathBuf::from(remainder)),
            PB_SOURCE => Specifier::BinaryFile(PathBuf::from(remainder)),
            REGISTERED_SOURCE => Specifier::Registered(remainder.to_string()),
            _ => Specifier::Unrecognized(specifier.to_string()),
        }
    }

    /// The scheme token, if recognized.
    pub fn scheme(&self) -> Option<&'static str> {
        match self {
            Specifier::TextFile(_) => Some(PBTXT_SOURCE),
            Specifier::BinaryFile(_) => Some(PB_SOURCE),
            Specifier::Registered(_) => Some(REGISTERED_SOURCE),
            Specifier::Unrecognized(_) => None,
        }
    }
}

impl fmt::Display for Specifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Specifier::TextFile(path) => write!(f, "{PBTXT_SOURCE}:{}", path.display()),
            Specifier::BinaryFile(path) => write!(f, "{PB_SOURCE}:{}", path.display()),
            Specifier::Registered(name) => write!(f, "{REGISTERED_SOURCE}:{name}"),
            Specifier::Unrecognized(raw) => f.write_str(raw),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_at_first_delimiter() {
        assert_eq!(split_specifier("pb:/tmp/a.pb"), ("pb", "/tmp/a.pb"));
        assert_eq!(
            split_specifier("registered:a:b:c"),
            ("registered", "a:b:c")
        );
        assert_eq!(split_specifier("pbtxt:"), ("pbtxt", ""));
    }

    #[test]
    fn split_without_delimiter() {
        assert_eq!(split_specifier("unknown_source"), ("unknown_source", ""));
        assert_eq!(split_specifier(""), ("", ""));
    }

    #[test]
    fn parse_known_schemes() {
        assert_eq!(
            Specifier::parse("pbtxt:/data/arch.pbtxt"),
            Specifier::TextFile(PathBuf::from("/data/arch.pbtxt"))
        );
        assert_eq!(
            Specifier::parse("pb:rel/arch.pb"),
            Specifier::BinaryFile(PathBuf::from("rel/arch.pb"))
        );
        assert_eq!(
            Specifier::parse("registered:test:provider:with:colon"),
            Specifier::Registered("test:provider:with:colon".into())
        );
    }

    #[test]
    fn schemes_are_case_sensitive() {
        assert_eq!(
            Specifier::parse("PB:/a.pb"),
            Specifier::Unrecognized("PB:/a.pb".into())
        );
    }

    #[test]
    fn unrecognized_keeps_full_input() {
        let spec = Specifier::parse("file:/a/b");
        assert_eq!(spec, Specifier::Unrecognized("file:/a/b".into()));
        assert_eq!(spec.scheme(), None);
        assert_eq!(spec.to_string(), "file:/a/b");
    }

    #[test]
    fn display_is_canonical() {
        for raw in ["pbtxt:/a/b.pbtxt", "pb:/a/b.pb", "registered:x:y"] {
            assert_eq!(Specifier::parse(raw).to_string(), raw);
        }
    }
}
