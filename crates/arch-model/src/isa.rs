//! Instruction set section of an architecture description.

use serde::{Deserialize, Serialize};

/// Byte ordering of the architecture.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Endianness {
    #[default]
    Little,
    Big,
    /// Hardware supports both orderings (e.g., ARM).
    BiEndian,
}

/// A class of registers (e.g., general-purpose, FP, vector).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct RegisterClass {
    /// Name of the register class (e.g., "gpr", "xmm").
    pub name: String,
    /// Number of registers in this class.
    pub count: u32,
    /// Width of each register in bits.
    pub width_bits: u32,
}

/// Instruction set of an architecture.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct InstructionSet {
    /// Instruction set name (e.g., "x86_64", "ARMv7-M").
    pub name: String,
    /// Byte ordering.
    #[serde(default)]
    pub endianness: Endianness,
    /// Native word size in bits.
    #[serde(default)]
    pub word_size: u32,
    /// Available register classes.
    #[serde(default)]
    pub register_classes: Vec<RegisterClass>,
    /// Instruction set extensions (e.g., "AVX2", "Thumb2").
    #[serde(default)]
    pub extensions: Vec<String>,
}

impl InstructionSet {
    /// Total number of general-purpose registers (class name "gpr").
    pub fn gp_register_count(&self) -> u32 {
        self.register_classes
            .iter()
            .filter(|rc| rc.name == "gpr")
            .map(|rc| rc.count)
            .sum()
    }

    /// Whether the instruction set lists the given extension.
    pub fn has_extension(&self, extension: &str) -> bool {
        self.extensions.iter().any(|e| e == extension)
    }

    /// The x86-64 instruction set.
    pub fn x86_64() -> Self {
        Self {
            name: "x86_64".into(),
            endianness: Endianness::Little,
            word_size: 64,
            register_classes: vec![
                RegisterClass {
                    name: "gpr".into(),
                    count: 16,
                    width_bits: 64,
                },
                RegisterClass {
                    name: "ymm".into(),
                    count: 16,
                    width_bits: 256,
                },
            ],
            extensions: vec![
                "SSE4.2".into(),
                "AVX".into(),
                "AVX2".into(),
                "BMI2".into(),
                "FMA".into(),
            ],
        }
    }

    /// The ARMv7-M instruction set (Cortex-M class).
    pub fn armv7m() -> Self {
        Self {
            name: "ARMv7-M".into(),
            endianness: Endianness::Little,
            word_size: 32,
            register_classes: vec![
                RegisterClass {
                    name: "gpr".into(),
                    count: 13,
                    width_bits: 32,
                },
                RegisterClass {
                    name: "fpr".into(),
                    count: 32,
                    width_bits: 32,
                },
            ],
            extensions: vec!["Thumb2".into(), "DSP".into(), "FPv4-SP".into()],
        }
    }
}
