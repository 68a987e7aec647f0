//! Microarchitecture models.
//!
//! A [`MicroArchitecture`] describes one processor implementation of an
//! architecture: its pipeline and memory timing. [`MicroArchitectureData`]
//! pairs a shared [`ArchitectureDescription`] with one of them.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::architecture::ArchitectureDescription;
use crate::error::{ModelError, Result};

/// Memory subsystem timing characteristics.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct MemoryTiming {
    /// Width of the memory bus in bits.
    pub bus_width_bits: u32,
    /// Flash read wait states (embedded targets).
    pub flash_wait_states: Option<u32>,
    /// L1 data cache load latency in cycles.
    pub l1_load_latency_cycles: u32,
}

/// Pipeline model for timing estimation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct PipelineModel {
    /// Number of pipeline stages.
    pub stages: u32,
    /// Number of execution ports.
    pub execution_ports: u32,
    /// Branch misprediction penalty in cycles.
    pub branch_penalty_cycles: u32,
}

/// One processor implementation of an architecture.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct MicroArchitecture {
    /// Short identifier (e.g., "hsw", "cortex-m4").
    pub id: String,
    /// Human-readable name (e.g., "Haswell").
    #[serde(default)]
    pub name: String,
    /// CPU model numbers that identify this microarchitecture.
    #[serde(default)]
    pub model_numbers: Vec<String>,
    /// Pipeline timing model.
    #[serde(default)]
    pub pipeline: PipelineModel,
    /// Memory subsystem timing.
    #[serde(default)]
    pub memory_timing: MemoryTiming,
    /// Whether timing is fully deterministic.
    #[serde(default)]
    pub deterministic_timing: bool,
}

impl MicroArchitecture {
    /// Intel Haswell.
    pub fn haswell() -> Self {
        Self {
            id: "hsw".into(),
            name: "Haswell".into(),
            model_numbers: vec!["06_3C".into(), "06_45".into(), "06_46".into(), "06_3F".into()],
            pipeline: PipelineModel {
                stages: 14,
                execution_ports: 8,
                branch_penalty_cycles: 15,
            },
            memory_timing: MemoryTiming {
                bus_width_bits: 64,
                flash_wait_states: None,
                l1_load_latency_cycles: 4,
            },
            deterministic_timing: false,
        }
    }

    /// Intel Skylake.
    pub fn skylake() -> Self {
        Self {
            id: "skl".into(),
            name: "Skylake".into(),
            model_numbers: vec!["06_4E".into(), "06_5E".into()],
            pipeline: PipelineModel {
                stages: 14,
                execution_ports: 8,
                branch_penalty_cycles: 16,
            },
            memory_timing: MemoryTiming {
                bus_width_bits: 64,
                flash_wait_states: None,
                l1_load_latency_cycles: 5,
            },
            deterministic_timing: false,
        }
    }

    /// ARM Cortex-M4.
    pub fn cortex_m4() -> Self {
        Self {
            id: "cortex-m4".into(),
            name: "Cortex-M4".into(),
            model_numbers: vec!["r0p1".into()],
            pipeline: PipelineModel {
                stages: 3,
                execution_ports: 1,
                branch_penalty_cycles: 3,
            },
            memory_timing: MemoryTiming {
                bus_width_bits: 32,
                flash_wait_states: Some(5),
                l1_load_latency_cycles: 1,
            },
            deterministic_timing: true,
        }
    }
}

/// A shared architecture description bound to one of its microarchitectures.
#[derive(Debug, Clone)]
pub struct MicroArchitectureData {
    architecture: Arc<ArchitectureDescription>,
    index: usize,
}

impl MicroArchitectureData {
    /// Select the microarchitecture `id` from `architecture`.
    pub fn for_microarchitecture_id(
        architecture: Arc<ArchitectureDescription>,
        id: &str,
    ) -> Result<Self> {
        let index = architecture
            .microarchitectures
            .iter()
            .position(|m| m.id == id)
            .ok_or_else(|| ModelError::UnknownMicroarchitecture {
                id: id.to_string(),
                architecture: architecture.name.clone(),
                available: architecture
                    .microarchitecture_ids()
                    .map(str::to_string)
                    .collect(),
            })?;
        Ok(Self {
            architecture,
            index,
        })
    }

    /// The architecture description this model was built from.
    pub fn architecture(&self) -> &Arc<ArchitectureDescription> {
        &self.architecture
    }

    /// The selected microarchitecture.
    pub fn microarchitecture(&self) -> &MicroArchitecture {
        &self.architecture.microarchitectures[self.index]
    }

    /// Id of the selected microarchitecture.
    pub fn id(&self) -> &str {
        &self.microarchitecture().id
    }
}
