//! Compiled-circuit operations.

use serde::{Deserialize, Serialize};

use crate::error::{IrError, IrResult};
use crate::gate::GateMatrix;
use crate::qubit::{ClbitId, QubitId};

/// A gate with its qubit operands and matrix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GateOp {
    /// Gate name as emitted by the unroller, e.g. `CX` or `U(1.57,0,3.14)`.
    pub name: String,
    /// Qubits the gate acts on, in matrix-index order.
    pub qubit_indices: Vec<QubitId>,
    /// Declared number of qubits.
    pub gate_size: u32,
    /// Dense gate matrix of dimension `2^gate_size`.
    pub matrix: GateMatrix,
}

impl GateOp {
    /// Create a gate operation, taking `gate_size` from the operand count.
    pub fn new(
        name: impl Into<String>,
        qubits: impl IntoIterator<Item = QubitId>,
        matrix: GateMatrix,
    ) -> Self {
        let qubit_indices: Vec<QubitId> = qubits.into_iter().collect();
        Self {
            name: name.into(),
            gate_size: qubit_indices.len() as u32,
            qubit_indices,
            matrix,
        }
    }

    /// Check operand count, matrix dimension, duplicates and qubit range.
    ///
    /// Arity itself is not restricted here: a consistent 3-qubit gate is
    /// structurally valid, it is the engine that refuses to embed it.
    pub fn validate(&self, num_qubits: u32) -> IrResult<()> {
        let got = self.qubit_indices.len() as u32;
        if got != self.gate_size {
            return Err(IrError::QubitCountMismatch {
                gate_name: self.name.clone(),
                expected: self.gate_size,
                got,
            });
        }

        let expected = 1usize.checked_shl(self.gate_size).unwrap_or(0);
        if self.matrix.dim() != expected {
            return Err(IrError::MatrixDimensionMismatch {
                gate_name: self.name.clone(),
                gate_size: self.gate_size,
                expected,
                got: self.matrix.dim(),
            });
        }

        for (i, &qubit) in self.qubit_indices.iter().enumerate() {
            if qubit.0 >= num_qubits {
                return Err(IrError::QubitOutOfRange {
                    qubit,
                    num_qubits,
                    gate_name: Some(self.name.clone()),
                });
            }
            if self.qubit_indices[..i].contains(&qubit) {
                return Err(IrError::DuplicateQubit {
                    qubit,
                    gate_name: Some(self.name.clone()),
                });
            }
        }
        Ok(())
    }
}

/// A measurement of qubits into classical bits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeasureOp {
    /// Measured qubits.
    pub qubit_indices: Vec<QubitId>,
    /// Destination classical bits, paired with `qubit_indices`.
    pub cbit_indices: Vec<ClbitId>,
}

/// A reset of qubits to |0⟩.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResetOp {
    /// Qubits being reset.
    pub qubit_indices: Vec<QubitId>,
}

/// One entry of a compiled circuit, tagged by `type` in JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Operation {
    /// A unitary gate.
    Gate(GateOp),
    /// Measurement (no unitary representation).
    Measure(MeasureOp),
    /// Reset (no unitary representation).
    Reset(ResetOp),
}

impl Operation {
    /// Create a gate operation.
    pub fn gate(
        name: impl Into<String>,
        qubits: impl IntoIterator<Item = QubitId>,
        matrix: GateMatrix,
    ) -> Self {
        Operation::Gate(GateOp::new(name, qubits, matrix))
    }

    /// Create a single-qubit measurement.
    pub fn measure(qubit: QubitId, clbit: ClbitId) -> Self {
        Operation::Measure(MeasureOp {
            qubit_indices: vec![qubit],
            cbit_indices: vec![clbit],
        })
    }

    /// Create a reset.
    pub fn reset(qubit: QubitId) -> Self {
        Operation::Reset(ResetOp {
            qubit_indices: vec![qubit],
        })
    }

    /// Operation name: the gate name, or `measure` / `reset`.
    pub fn name(&self) -> &str {
        match self {
            Operation::Gate(g) => &g.name,
            Operation::Measure(_) => "measure",
            Operation::Reset(_) => "reset",
        }
    }

    /// Qubits this operation touches.
    pub fn qubits(&self) -> &[QubitId] {
        match self {
            Operation::Gate(g) => &g.qubit_indices,
            Operation::Measure(m) => &m.qubit_indices,
            Operation::Reset(r) => &r.qubit_indices,
        }
    }

    /// Get the gate if this is a gate operation.
    pub fn as_gate(&self) -> Option<&GateOp> {
        match self {
            Operation::Gate(g) => Some(g),
            _ => None,
        }
    }

    /// Validate operands against the register sizes.
    pub fn validate(&self, num_qubits: u32, num_cbits: u32) -> IrResult<()> {
        match self {
            Operation::Gate(g) => g.validate(num_qubits),
            Operation::Measure(m) => {
                if m.qubit_indices.len() != m.cbit_indices.len() {
                    return Err(IrError::MeasureOperandMismatch {
                        qubits: m.qubit_indices.len(),
                        cbits: m.cbit_indices.len(),
                    });
                }
                check_qubits(&m.qubit_indices, num_qubits)?;
                if let Some(&clbit) = m.cbit_indices.iter().find(|c| c.0 >= num_cbits) {
                    return Err(IrError::ClbitOutOfRange { clbit, num_cbits });
                }
                Ok(())
            }
            Operation::Reset(r) => check_qubits(&r.qubit_indices, num_qubits),
        }
    }
}

fn check_qubits(qubits: &[QubitId], num_qubits: u32) -> IrResult<()> {
    match qubits.iter().find(|q| q.0 >= num_qubits) {
        Some(&qubit) => Err(IrError::QubitOutOfRange {
            qubit,
            num_qubits,
            gate_name: None,
        }),
        None => Ok(()),
    }
}
