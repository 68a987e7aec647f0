//! Architecture description documents.
//!
//! An [`ArchitectureDescription`] names an architecture and optionally carries
//! its instruction set and the microarchitectures that implement it. Documents
//! are produced once and shared read-only behind an `Arc`.
//!
//! [`MicroArchitectureData`] binds a shared document to one of its
//! microarchitectures, selected by id.

pub mod architecture;
pub mod error;
pub mod isa;
pub mod microarch;

pub use architecture::ArchitectureDescription;
pub use error::{ModelError, Result};
pub use isa::{Endianness, InstructionSet, RegisterClass};
pub use microarch::{MemoryTiming, MicroArchitecture, MicroArchitectureData, PipelineModel};
