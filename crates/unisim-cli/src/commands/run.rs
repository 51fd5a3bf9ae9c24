//! Run command implementation.

use anyhow::Result;
use console::style;
use tracing::debug;

use unisim_core::{RunReport, UnitarySimulator};

use super::common::{emit, format_unitary, load_circuit};
use crate::config::{Config, OutputFormat};

/// Largest `U†U - I` deviation accepted by `--check-unitary`.
const UNITARITY_TOLERANCE: f64 = 1e-8;

/// Execute the run command.
pub fn execute(
    input: &str,
    output: Option<&str>,
    format: Option<OutputFormat>,
    check_unitary: bool,
    config: &Config,
) -> Result<()> {
    let format = match format {
        Some(f) => f,
        None => config.output_format()?,
    };

    let circuit = load_circuit(input)?;
    debug!(
        "Loaded {}: {} qubits, {} operations",
        input,
        circuit.num_qubits(),
        circuit.num_operations()
    );

    let simulator = UnitarySimulator::with_max_qubits(config.simulator.max_qubits);
    let outcome = simulator.run(&circuit);
    let report = RunReport::from_outcome(circuit.num_qubits(), &outcome);

    if format == OutputFormat::Json {
        emit(&report.to_json()?, output)?;
    }

    let result = outcome?;

    if format == OutputFormat::Table {
        eprintln!(
            "{} {} ({} qubits, {} gates applied)",
            style("✓").green().bold(),
            style(input).green(),
            circuit.num_qubits(),
            result.gates_applied
        );
        for diagnostic in &result.diagnostics {
            eprintln!("  {} {}", style("warning:").yellow(), diagnostic.message);
        }
        emit(
            &format_unitary(result.unitary(), config.output.precision),
            output,
        )?;
    }

    if check_unitary {
        let error = result.unitary().unitarity_error();
        if !result.unitary().is_unitary(UNITARITY_TOLERANCE) {
            anyhow::bail!("Result is not unitary: max |U†U - I| entry is {error:.3e}");
        }
        eprintln!(
            "{} U†U = I within {UNITARITY_TOLERANCE:e} (max deviation {error:.3e})",
            style("✓").green().bold()
        );
    }

    if let Some(path) = output {
        eprintln!("  Written to {}", style(path).cyan());
    }

    Ok(())
}
