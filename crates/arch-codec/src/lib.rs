//! Text and binary encodings for architecture description documents.
//!
//! - **Text:** TOML, for documents written and reviewed by hand.
//! - **Binary:** a framed `postcard` payload with an integrity hash.
//!
//! ## Binary Layout
//!
//! ```text
//! ┌──────────────────────────────┐
//! │ Magic: 0x41524300 ("ARC\0") │  4 bytes
//! │ Version: major.minor.patch   │  3 bytes
//! │ Reserved (must be 0)         │  1 byte
//! │ payload_length: u64 (LE)     │  8 bytes
//! ├──────────────────────────────┤
//! │ postcard payload             │
//! ├──────────────────────────────┤
//! │ Content Hash (SHA-256)       │  32 bytes
//! └──────────────────────────────┘
//! ```
//!
//! Decoding rejects a non-zero reserved byte and any bytes beyond the hash
//! or left over after the payload.

pub mod binary;
pub mod error;
pub mod file;
pub mod text;

pub use binary::{decode_binary, encode_binary, read_binary_file, write_binary_file, FormatVersion};
pub use error::{CodecError, Result};
pub use file::{read_architecture, write_architecture, Encoding};
pub use text::{architecture_to_toml, parse_architecture_toml, read_text_file, write_text_file};
