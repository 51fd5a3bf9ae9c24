//! The running unitary of one simulation.

use tracing::debug;
use unisim_ir::{GateOp, IrError};

use crate::embed::{embed_single, embed_two};
use crate::error::{SimError, SimResult};
use crate::unitary::Unitary;

/// Accumulated operator `U_k · … · U_1` for the gates applied so far.
///
/// Owned by exactly one run. Starts as the identity and is only ever
/// left-multiplied by freshly built embeddings.
pub(crate) struct UnitaryState {
    num_qubits: usize,
    unitary: Unitary,
    gates_applied: usize,
}

impl UnitaryState {
    /// Identity state on `num_qubits` qubits.
    pub(crate) fn new(num_qubits: usize) -> Self {
        Self {
            num_qubits,
            unitary: Unitary::identity(num_qubits),
            gates_applied: 0,
        }
    }

    /// Embed `gate` and left-multiply it into the state.
    pub(crate) fn apply_gate(&mut self, gate: &GateOp) -> SimResult<()> {
        let qubits: Vec<usize> = gate.qubit_indices.iter().map(|q| q.index()).collect();

        let op = match (gate.gate_size, qubits.as_slice()) {
            (1, &[q]) => embed_single(&gate.matrix, q, self.num_qubits)?,
            (2, &[q0, q1]) => embed_two(&gate.matrix, q0, q1, self.num_qubits)?,
            (1 | 2, _) => {
                return Err(IrError::QubitCountMismatch {
                    gate_name: gate.name.clone(),
                    expected: gate.gate_size,
                    got: qubits.len() as u32,
                }
                .into());
            }
            (gate_size, _) => {
                return Err(SimError::UnsupportedGateArity {
                    gate_name: gate.name.clone(),
                    gate_size,
                });
            }
        };

        self.unitary.left_multiply(&op);
        self.gates_applied += 1;
        debug!("Applied {} on {:?}", gate.name, qubits);
        Ok(())
    }

    /// Number of gates multiplied in so far.
    pub(crate) fn gates_applied(&self) -> usize {
        self.gates_applied
    }

    /// Hand over the accumulated unitary.
    pub(crate) fn into_unitary(self) -> Unitary {
        self.unitary
    }
}
