//! `archsrc microarch` — describe the selected microarchitecture.

use std::fmt::{self, Write};

use anyhow::Result;
use arch_model::MicroArchitectureData;

/// Human-readable description of `data`.
pub fn describe(data: &MicroArchitectureData) -> Result<String, fmt::Error> {
    let arch = data.architecture();
    let uarch = data.microarchitecture();
    let mut out = String::new();

    writeln!(out, "=== Microarchitecture: {} ({}) ===", uarch.name, uarch.id)?;
    writeln!(out, "Architecture: {}", arch.name)?;
    if let Some(isa) = &arch.instruction_set {
        writeln!(
            out,
            "Instruction set: {} ({} bits, {:?}, {} GPRs)",
            isa.name,
            isa.word_size,
            isa.endianness,
            isa.gp_register_count()
        )?;
    }
    if !uarch.model_numbers.is_empty() {
        writeln!(out, "Model numbers: {}", uarch.model_numbers.join(", "))?;
    }
    writeln!(
        out,
        "Pipeline: {} stages, {} ports, {} cycle branch penalty",
        uarch.pipeline.stages, uarch.pipeline.execution_ports, uarch.pipeline.branch_penalty_cycles
    )?;
    writeln!(
        out,
        "Memory: {}-bit bus, {} cycle L1 load",
        uarch.memory_timing.bus_width_bits, uarch.memory_timing.l1_load_latency_cycles
    )?;
    if let Some(ws) = uarch.memory_timing.flash_wait_states {
        writeln!(out, "Flash wait states: {ws}")?;
    }
    writeln!(
        out,
        "Deterministic timing: {}",
        if uarch.deterministic_timing { "yes" } else { "no" }
    )?;
    Ok(out)
}

pub fn run(data: &MicroArchitectureData) -> Result<()> {
    print!("{}", describe(data)?);
    Ok(())
}
