//! The architecture description document.

use serde::{Deserialize, Serialize};

use crate::isa::InstructionSet;
use crate::microarch::MicroArchitecture;

/// Description of an architecture.
///
/// Only `name` is required; a document may carry nothing else.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ArchitectureDescription {
    /// Architecture name (e.g., "x86_64").
    pub name: String,
    /// Instruction set, if described.
    #[serde(default)]
    pub instruction_set: Option<InstructionSet>,
    /// Microarchitectures implementing this architecture.
    #[serde(default)]
    pub microarchitectures: Vec<MicroArchitecture>,
}

impl ArchitectureDescription {
    /// A description carrying only a name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Look up a microarchitecture by id.
    pub fn microarchitecture(&self, id: &str) -> Option<&MicroArchitecture> {
        self.microarchitectures.iter().find(|m| m.id == id)
    }

    /// Ids of all described microarchitectures, in document order.
    pub fn microarchitecture_ids(&self) -> impl Iterator<Item = &str> {
        self.microarchitectures.iter().map(|m| m.id.as_str())
    }

    /// x86-64 with Haswell and Skylake.
    pub fn x86_64() -> Self {
        Self {
            name: "x86_64".into(),
            instruction_set: Some(InstructionSet::x86_64()),
            microarchitectures: vec![MicroArchitecture::haswell(), MicroArchitecture::skylake()],
        }
    }

    /// ARMv7-M with Cortex-M4.
    pub fn armv7m() -> Self {
        Self {
            name: "ARMv7-M".into(),
            instruction_set: Some(InstructionSet::armv7m()),
            microarchitectures: vec![MicroArchitecture::cortex_m4()],
        }
    }
}
