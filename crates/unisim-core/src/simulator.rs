//! The execution driver.

use std::time::Instant;

use tracing::{debug, info, instrument, warn};
use unisim_ir::{CompiledCircuit, Operation, QubitId};

use crate::diagnostics::Diagnostic;
use crate::error::{SimError, SimResult};
use crate::result::{ResultData, RunStatus, SimulationResult};
use crate::state::UnitaryState;
use crate::unitary::Unitary;

/// Default qubit limit. A 12-qubit unitary takes 256 MiB.
pub const DEFAULT_MAX_QUBITS: usize = 12;

/// Hard ceiling on register width, whatever the options say.
///
/// Widest register whose dense matrix size in bytes (`16 * 4^n`) still fits
/// in an `isize`: 29 qubits on 64-bit targets.
pub const MAX_SUPPORTED_QUBITS: usize = (usize::BITS as usize - 5) / 2;

/// Tunables for [`UnitarySimulator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulatorOptions {
    /// Widest circuit the simulator will accept.
    pub max_qubits: usize,
}

impl Default for SimulatorOptions {
    fn default() -> Self {
        Self {
            max_qubits: DEFAULT_MAX_QUBITS,
        }
    }
}

/// Computes the full unitary of a compiled circuit.
///
/// The simulator holds no per-run state, so one instance can be reused and
/// shared freely. Each [`run`](Self::run) owns its own matrix.
#[derive(Debug, Clone, Default)]
pub struct UnitarySimulator {
    options: SimulatorOptions,
}

impl UnitarySimulator {
    /// Create a simulator with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a simulator with a custom qubit limit.
    pub fn with_max_qubits(max_qubits: usize) -> Self {
        Self::with_options(SimulatorOptions { max_qubits })
    }

    /// Create a simulator from explicit options.
    pub fn with_options(options: SimulatorOptions) -> Self {
        Self { options }
    }

    /// The configured options.
    pub fn options(&self) -> &SimulatorOptions {
        &self.options
    }

    /// The limit `run` enforces: the configured one, capped at
    /// [`MAX_SUPPORTED_QUBITS`].
    pub fn effective_max_qubits(&self) -> usize {
        self.options.max_qubits.min(MAX_SUPPORTED_QUBITS)
    }

    /// Multiply out `circuit` into its unitary.
    ///
    /// Gates are applied in circuit order: the result is `U_k · … · U_1`.
    /// Measurements and resets are skipped and reported as diagnostics. Any
    /// invalid operation fails the whole run before the matrix is allocated.
    #[instrument(skip(self, circuit), fields(num_qubits = circuit.num_qubits()))]
    pub fn run(&self, circuit: &CompiledCircuit) -> SimResult<SimulationResult> {
        let start = Instant::now();
        let num_qubits = circuit.num_qubits();

        let max_qubits = self.effective_max_qubits();
        if num_qubits > max_qubits {
            return Err(SimError::QubitLimitExceeded {
                num_qubits,
                max_qubits,
            });
        }
        self.check(circuit)?;

        debug!(
            "Starting unitary simulation: {} qubits, {} operations, {} bytes",
            num_qubits,
            circuit.num_operations(),
            Unitary::memory_bytes(num_qubits as u32).unwrap_or(u128::MAX)
        );

        let mut state = UnitaryState::new(num_qubits);
        let mut diagnostics = Vec::new();

        for (index, op) in circuit.operations().iter().enumerate() {
            match op {
                Operation::Gate(gate) => state.apply_gate(gate)?,
                Operation::Measure(m) => {
                    let cbit_labels: Vec<String> = m
                        .cbit_indices
                        .iter()
                        .map(|&c| circuit.describe_cbit(c))
                        .collect();
                    let d = Diagnostic::dropped_measure(
                        index,
                        &m.qubit_indices,
                        &m.cbit_indices,
                        &labels(circuit, &m.qubit_indices),
                        &cbit_labels,
                    );
                    warn!("{}", d.message);
                    diagnostics.push(d);
                }
                Operation::Reset(r) => {
                    let d = Diagnostic::dropped_reset(
                        index,
                        &r.qubit_indices,
                        &labels(circuit, &r.qubit_indices),
                    );
                    warn!("{}", d.message);
                    diagnostics.push(d);
                }
            }
        }

        let gates_applied = state.gates_applied();
        info!(
            "Unitary simulation completed in {:?}: {} gates, {} dropped",
            start.elapsed(),
            gates_applied,
            diagnostics.len()
        );

        Ok(SimulationResult {
            data: ResultData {
                unitary: state.into_unitary(),
            },
            status: RunStatus::Completed,
            diagnostics,
            gates_applied,
        })
    }

    /// Reject anything the engine cannot finish before touching any state.
    fn check(&self, circuit: &CompiledCircuit) -> SimResult<()> {
        circuit.validate()?;
        for op in circuit.operations() {
            if let Some(gate) = op.as_gate() {
                if !matches!(gate.gate_size, 1 | 2) {
                    return Err(SimError::UnsupportedGateArity {
                        gate_name: gate.name.clone(),
                        gate_size: gate.gate_size,
                    });
                }
            }
        }
        Ok(())
    }
}

fn labels(circuit: &CompiledCircuit, qubits: &[QubitId]) -> Vec<String> {
    qubits.iter().map(|&q| circuit.describe_qubit(q)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use unisim_ir::GateMatrix;

    #[test]
    fn test_default_limit() {
        assert_eq!(UnitarySimulator::new().options().max_qubits, DEFAULT_MAX_QUBITS);
        assert_eq!(UnitarySimulator::with_max_qubits(4).options().max_qubits, 4);
    }

    #[test]
    fn test_limit_checked_first() {
        let circuit = CompiledCircuit::new(5, 0);
        let err = UnitarySimulator::with_max_qubits(4).run(&circuit).unwrap_err();
        assert!(matches!(
            err,
            SimError::QubitLimitExceeded {
                num_qubits: 5,
                max_qubits: 4
            }
        ));
    }

    #[test]
    fn test_limit_capped_at_supported_width() {
        let sim = UnitarySimulator::with_max_qubits(100);
        assert_eq!(sim.options().max_qubits, 100);
        assert_eq!(sim.effective_max_qubits(), MAX_SUPPORTED_QUBITS);
        assert!(Unitary::memory_bytes(MAX_SUPPORTED_QUBITS as u32).unwrap() <= isize::MAX as u128);

        for width in [MAX_SUPPORTED_QUBITS as u32 + 1, 64, 100] {
            let err = sim.run(&CompiledCircuit::new(width, 0)).unwrap_err();
            assert!(matches!(
                err,
                SimError::QubitLimitExceeded { num_qubits, max_qubits }
                    if num_qubits == width as usize && max_qubits == MAX_SUPPORTED_QUBITS
            ));
        }
    }

    #[test]
    fn test_unsupported_arity_fails_whole_run() {
        let mut circuit = CompiledCircuit::new(3, 0);
        circuit.x(QubitId(0)).unwrap();
        circuit
            .gate(
                "ccx",
                [QubitId(0), QubitId(1), QubitId(2)],
                GateMatrix::identity(8),
            )
            .unwrap();

        let err = UnitarySimulator::new().run(&circuit).unwrap_err();
        assert!(err.to_string().contains("'ccx' acts on 3 qubits"));
    }

    #[test]
    fn test_zero_qubit_gate_is_refused() {
        let mut circuit = CompiledCircuit::new(1, 0);
        circuit
            .gate("gphase", Vec::<QubitId>::new(), GateMatrix::identity(1))
            .unwrap();
        assert!(matches!(
            UnitarySimulator::new().run(&circuit),
            Err(SimError::UnsupportedGateArity { gate_size: 0, .. })
        ));
    }

    #[test]
    fn test_diagnostics_name_registers() {
        let mut circuit = CompiledCircuit::new(1, 1)
            .with_qubit_order(vec![unisim_ir::BitLabel::new("anc", 0)])
            .unwrap();
        circuit.measure(QubitId(0), unisim_ir::ClbitId(0)).unwrap();

        let result = UnitarySimulator::new().run(&circuit).unwrap();
        assert_eq!(result.status, RunStatus::Completed);
        assert_eq!(result.diagnostics.len(), 1);
        assert!(result.diagnostics[0].message.contains("anc[0] -> c0"));
        assert_eq!(result.diagnostics[0].cbits, vec![unisim_ir::ClbitId(0)]);
    }
}
