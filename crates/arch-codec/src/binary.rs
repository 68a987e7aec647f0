//! Compact binary encoding.
//!
//! A fixed header with magic bytes, format version and payload length,
//! followed by a `postcard` payload and a SHA-256 hash over everything
//! before it.

use std::path::Path;

use arch_model::ArchitectureDescription;
use sha2::{Digest, Sha256};

use crate::error::{CodecError, Result};

/// Magic bytes identifying a binary architecture document: "ARC\0"
pub const MAGIC: [u8; 4] = [0x41, 0x52, 0x43, 0x00];

/// 4 (magic) + 3 (version) + 1 (reserved) + 8 (payload_len) = 16 bytes
const HEADER_SIZE: usize = 16;

/// Size of the trailing content hash.
const HASH_SIZE: usize = 32;

/// Binary format version.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatVersion {
    pub major: u8,
    pub minor: u8,
    pub patch: u8,
}

impl FormatVersion {
    /// The version written by this implementation.
    pub const CURRENT: FormatVersion = FormatVersion {
        major: 0,
        minor: 1,
        patch: 0,
    };

    /// Whether documents of this version can be decoded.
    pub fn is_compatible(&self) -> bool {
        self.major == Self::CURRENT.major && self.minor <= Self::CURRENT.minor
    }
}

impl std::fmt::Display for FormatVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// Encode a document in the binary format.
pub fn encode_binary(architecture: &ArchitectureDescription) -> Result<Vec<u8>> {
    let payload = postcard::to_stdvec(architecture)?;
    let version = FormatVersion::CURRENT;

    let mut buf = Vec::with_capacity(HEADER_SIZE + payload.len() + HASH_SIZE);
    buf.extend_from_slice(&MAGIC);
    buf.extend_from_slice(&[version.major, version.minor, version.patch, 0]);
    buf.extend_from_slice(&(payload.len() as u64).to_le_bytes());
    buf.extend_from_slice(&payload);

    let hash: [u8; HASH_SIZE] = Sha256::digest(&buf).into();
    buf.extend_from_slice(&hash);
    Ok(buf)
}

/// Decode a document from the binary format.
pub fn decode_binary(data: &[u8]) -> Result<ArchitectureDescription> {
    if data.len() < HEADER_SIZE + HASH_SIZE {
        return Err(CodecError::Truncated);
    }

    if data[0..4] != MAGIC {
        return Err(CodecError::InvalidMagic);
    }

    let version = FormatVersion {
        major: data[4],
        minor: data[5],
        patch: data[6],
    };
    if !version.is_compatible() {
        return Err(CodecError::UnsupportedVersion {
            major: version.major,
            minor: version.minor,
            patch: version.patch,
        });
    }

    if data[7] != 0 {
        return Err(CodecError::ReservedByte { value: data[7] });
    }

    let mut len_bytes = [0u8; 8];
    len_bytes.copy_from_slice(&data[8..HEADER_SIZE]);
    let payload_len =
        usize::try_from(u64::from_le_bytes(len_bytes)).map_err(|_| CodecError::Truncated)?;

    let payload_end = HEADER_SIZE
        .checked_add(payload_len)
        .ok_or(CodecError::Truncated)?;
    let frame_end = payload_end.saturating_add(HASH_SIZE);
    if data.len() < frame_end {
        return Err(CodecError::Truncated);
    }
    if data.len() > frame_end {
        return Err(CodecError::TrailingData {
            extra: data.len() - frame_end,
        });
    }

    let stored_hash = &data[payload_end..payload_end + HASH_SIZE];
    let computed_hash: [u8; HASH_SIZE] = Sha256::digest(&data[..payload_end]).into();
    if computed_hash[..] != *stored_hash {
        return Err(CodecError::HashMismatch);
    }

    let (architecture, rest) = postcard::take_from_bytes(&data[HEADER_SIZE..payload_end])?;
    if !rest.is_empty() {
        return Err(CodecError::TrailingData { extra: rest.len() });
    }
    Ok(architecture)
}

/// Load a document from a binary file.
pub fn read_binary_file(path: &Path) -> Result<ArchitectureDescription> {
    if !path.exists() {
        return Err(CodecError::NotFound {
            path: path.to_path_buf(),
        });
    }
    tracing::debug!(path = %path.display(), "reading binary architecture");
    let data = std::fs::read(path).map_err(|e| CodecError::from(e).in_file(path))?;
    decode_binary(&data).map_err(|e| e.in_file(path))
}

/// Write a document to a binary file, replacing any existing file.
pub fn write_binary_file(path: &Path, architecture: &ArchitectureDescription) -> Result<()> {
    let data = encode_binary(architecture)?;
    std::fs::write(path, data).map_err(|e| CodecError::from(e).in_file(path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip() {
        let original = ArchitectureDescription::x86_64();
        let bytes = encode_binary(&original).unwrap();
        assert_eq!(decode_binary(&bytes).unwrap(), original);
    }

    #[test]
    fn name_only_round_trip() {
        let original = ArchitectureDescription::named("some_arch");
        let bytes = encode_binary(&original).unwrap();
        assert_eq!(&bytes[0..4], &MAGIC);
        assert_eq!(decode_binary(&bytes).unwrap(), original);
    }

    #[test]
    fn invalid_magic_rejected() {
        let mut bytes = encode_binary(&ArchitectureDescription::named("a")).unwrap();
        bytes[0] = 0xFF;
        assert!(matches!(decode_binary(&bytes), Err(CodecError::InvalidMagic)));
    }

    #[test]
    fn future_version_rejected() {
        let mut bytes = encode_binary(&ArchitectureDescription::named("a")).unwrap();
        bytes[4] = FormatVersion::CURRENT.major + 1;
        assert!(matches!(
            decode_binary(&bytes),
            Err(CodecError::UnsupportedVersion { .. })
        ));
    }

    #[test]
    fn corrupted_payload_rejected() {
        let mut bytes = encode_binary(&ArchitectureDescription::armv7m()).unwrap();
        bytes[HEADER_SIZE + 2] ^= 0xFF;
        assert!(matches!(decode_binary(&bytes), Err(CodecError::HashMismatch)));
    }

    #[test]
    fn truncated_rejected() {
        let bytes = encode_binary(&ArchitectureDescription::armv7m()).unwrap();
        assert!(matches!(
            decode_binary(&bytes[..bytes.len() - 1]),
            Err(CodecError::Truncated)
        ));
        assert!(matches!(
            decode_binary(&MAGIC),
            Err(CodecError::Truncated)
        ));
    }

    #[test]
    fn text_is_not_binary() {
        let text = b"name = \"some_arch\"\n# padding to get past the minimum frame size\n";
        assert!(matches!(decode_binary(text), Err(CodecError::InvalidMagic)));
    }

    /// Frame an arbitrary payload with a valid header and hash.
    fn frame(payload: &[u8]) -> Vec<u8> {
        let mut buf = MAGIC.to_vec();
        buf.extend_from_slice(&[0, 1, 0, 0]);
        buf.extend_from_slice(&(payload.len() as u64).to_le_bytes());
        buf.extend_from_slice(payload);
        let hash: [u8; HASH_SIZE] = Sha256::digest(&buf).into();
        buf.extend_from_slice(&hash);
        buf
    }

    #[test]
    fn bytes_after_hash_rejected() {
        let mut bytes = encode_binary(&ArchitectureDescription::named("a")).unwrap();
        bytes.extend_from_slice(b"GARBAGE AFTER HASH");
        assert!(matches!(
            decode_binary(&bytes),
            Err(CodecError::TrailingData { extra: 18 })
        ));
    }

    #[test]
    fn slack_in_payload_rejected() {
        let mut payload = postcard::to_stdvec(&ArchitectureDescription::named("a")).unwrap();
        assert_eq!(
            decode_binary(&frame(&payload)).unwrap(),
            ArchitectureDescription::named("a")
        );

        payload.extend_from_slice(&[0xAA, 0xBB]);
        assert!(matches!(
            decode_binary(&frame(&payload)),
            Err(CodecError::TrailingData { extra: 2 })
        ));
    }

    #[test]
    fn nonzero_reserved_byte_rejected() {
        let mut bytes = encode_binary(&ArchitectureDescription::named("a")).unwrap();
        bytes[7] = 0x01;
        assert!(matches!(
            decode_binary(&bytes),
            Err(CodecError::ReservedByte { value: 1 })
        ));
    }

    #[test]
    fn version_display() {
        assert_eq!(FormatVersion::CURRENT.to_string(), "0.1.0");
    }

    #[test]
    fn file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("arch.pb");
        let original = ArchitectureDescription::x86_64();
        write_binary_file(&path, &original).unwrap();
        assert_eq!(read_binary_file(&path).unwrap(), original);
    }

    #[test]
    fn read_not_found() {
        let err = read_binary_file(Path::new("/nonexistent/arch.pb")).unwrap_err();
        assert!(matches!(err, CodecError::NotFound { .. }));
    }
}
