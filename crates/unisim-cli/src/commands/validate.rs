//! Validate command implementation.

use anyhow::Result;
use console::style;

use unisim_core::Unitary;
use unisim_ir::{CompiledCircuit, Operation};

use super::common::load_circuit;
use crate::config::Config;

/// Operation counts of a compiled circuit.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CircuitSummary {
    pub single_qubit_gates: usize,
    pub two_qubit_gates: usize,
    /// Gates the engine cannot embed.
    pub other_gates: usize,
    pub measures: usize,
    pub resets: usize,
}

impl CircuitSummary {
    /// Tally the operations of `circuit`.
    pub fn of(circuit: &CompiledCircuit) -> Self {
        let mut summary = Self::default();
        for op in circuit.operations() {
            match op {
                Operation::Gate(g) => match g.gate_size {
                    1 => summary.single_qubit_gates += 1,
                    2 => summary.two_qubit_gates += 1,
                    _ => summary.other_gates += 1,
                },
                Operation::Measure(_) => summary.measures += 1,
                Operation::Reset(_) => summary.resets += 1,
            }
        }
        summary
    }
}

/// Execute the validate command.
pub fn execute(input: &str, config: &Config) -> Result<()> {
    let circuit = load_circuit(input)?;
    let summary = CircuitSummary::of(&circuit);

    println!(
        "{} {} is a valid compiled circuit",
        style("✓").green().bold(),
        style(input).green()
    );
    println!("  Qubits:      {}", circuit.num_qubits());
    println!("  Cbits:       {}", circuit.num_cbits());
    println!("  Operations:  {}", circuit.num_operations());
    println!("    1-qubit gates: {}", summary.single_qubit_gates);
    println!("    2-qubit gates: {}", summary.two_qubit_gates);
    println!("    measure:       {}", summary.measures);
    println!("    reset:         {}", summary.resets);

    if let Some(bytes) = Unitary::memory_bytes(circuit.num_qubits() as u32) {
        println!("  Unitary size: {bytes} bytes");
    }

    if summary.other_gates > 0 {
        anyhow::bail!(
            "{} gate(s) act on more than two qubits and cannot be simulated",
            summary.other_gates
        );
    }
    if circuit.num_qubits() > config.simulator.max_qubits {
        anyhow::bail!(
            "Circuit has {} qubits, above the configured limit of {}",
            circuit.num_qubits(),
            config.simulator.max_qubits
        );
    }

    Ok(())
}
