//! The compiled circuit handed to the unitary engine.

use serde::{Deserialize, Serialize};

use crate::error::{IrError, IrResult};
use crate::gate::GateMatrix;
use crate::operation::Operation;
use crate::qubit::{BitLabel, ClbitId, QubitId};

/// A compiled circuit: register sizes plus an ordered operation list.
///
/// Every operation is validated on insertion, so a `CompiledCircuit` always
/// satisfies the operand invariants (indices in range, matrix dimension equal
/// to `2^gate_size`). JSON input goes through the same checks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "CircuitRecord", into = "CircuitRecord")]
pub struct CompiledCircuit {
    num_qubits: u32,
    num_cbits: u32,
    qubit_order: Vec<BitLabel>,
    cbit_order: Vec<BitLabel>,
    operations: Vec<Operation>,
}

impl CompiledCircuit {
    /// Create an empty circuit with the given register sizes.
    pub fn new(num_qubits: u32, num_cbits: u32) -> Self {
        Self {
            num_qubits,
            num_cbits,
            qubit_order: vec![],
            cbit_order: vec![],
            operations: vec![],
        }
    }

    /// Parse and validate a circuit from JSON.
    ///
    /// Syntax errors come back as [`IrError::Json`]; a well-formed document
    /// that breaks an operand invariant yields the specific variant.
    pub fn from_json(json: &str) -> IrResult<Self> {
        let record: CircuitRecord = serde_json::from_str(json)?;
        Self::try_from(record)
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json(&self) -> IrResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Attach register labels for the qubits, one per flat position.
    pub fn with_qubit_order(mut self, labels: Vec<BitLabel>) -> IrResult<Self> {
        check_order("qubit_order", &labels, self.num_qubits)?;
        self.qubit_order = labels;
        Ok(self)
    }

    /// Attach register labels for the classical bits, one per flat position.
    pub fn with_cbit_order(mut self, labels: Vec<BitLabel>) -> IrResult<Self> {
        check_order("cbit_order", &labels, self.num_cbits)?;
        self.cbit_order = labels;
        Ok(self)
    }

    /// Number of qubits.
    pub fn num_qubits(&self) -> usize {
        self.num_qubits as usize
    }

    /// Number of classical bits.
    pub fn num_cbits(&self) -> usize {
        self.num_cbits as usize
    }

    /// Number of operations.
    pub fn num_operations(&self) -> usize {
        self.operations.len()
    }

    /// Operations in circuit order.
    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }

    /// Register label of a qubit, if labels were supplied.
    pub fn qubit_label(&self, qubit: QubitId) -> Option<&BitLabel> {
        self.qubit_order.get(qubit.index())
    }

    /// Register label of a classical bit, if labels were supplied.
    pub fn cbit_label(&self, clbit: ClbitId) -> Option<&BitLabel> {
        self.cbit_order.get(clbit.0 as usize)
    }

    /// Human-readable qubit name: the register label if known, else `qN`.
    pub fn describe_qubit(&self, qubit: QubitId) -> String {
        self.qubit_label(qubit)
            .map_or_else(|| qubit.to_string(), ToString::to_string)
    }

    /// Human-readable classical bit name: the register label if known, else `cN`.
    pub fn describe_cbit(&self, clbit: ClbitId) -> String {
        self.cbit_label(clbit)
            .map_or_else(|| clbit.to_string(), ToString::to_string)
    }

    /// Validate and append an operation.
    pub fn push(&mut self, op: Operation) -> IrResult<&mut Self> {
        op.validate(self.num_qubits, self.num_cbits)?;
        self.operations.push(op);
        Ok(self)
    }

    /// Re-check every operation against the register sizes.
    pub fn validate(&self) -> IrResult<()> {
        self.operations
            .iter()
            .try_for_each(|op| op.validate(self.num_qubits, self.num_cbits))
    }

    /// Append an arbitrary gate.
    pub fn gate(
        &mut self,
        name: impl Into<String>,
        qubits: impl IntoIterator<Item = QubitId>,
        matrix: GateMatrix,
    ) -> IrResult<&mut Self> {
        self.push(Operation::gate(name, qubits, matrix))
    }

    // =========================================================================
    // Single-qubit gates
    // =========================================================================

    /// Apply Pauli-X gate.
    pub fn x(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.gate("x", [qubit], GateMatrix::x())
    }

    /// Apply Pauli-Y gate.
    pub fn y(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.gate("y", [qubit], GateMatrix::y())
    }

    /// Apply Pauli-Z gate.
    pub fn z(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.gate("z", [qubit], GateMatrix::z())
    }

    /// Apply Hadamard gate.
    pub fn h(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.gate("h", [qubit], GateMatrix::h())
    }

    /// Apply S gate.
    pub fn s(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.gate("s", [qubit], GateMatrix::s())
    }

    /// Apply T gate.
    pub fn t(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.gate("t", [qubit], GateMatrix::t())
    }

    /// Apply Rx rotation gate.
    pub fn rx(&mut self, theta: f64, qubit: QubitId) -> IrResult<&mut Self> {
        self.gate("rx", [qubit], GateMatrix::rx(theta))
    }

    /// Apply Ry rotation gate.
    pub fn ry(&mut self, theta: f64, qubit: QubitId) -> IrResult<&mut Self> {
        self.gate("ry", [qubit], GateMatrix::ry(theta))
    }

    /// Apply Rz rotation gate.
    pub fn rz(&mut self, theta: f64, qubit: QubitId) -> IrResult<&mut Self> {
        self.gate("rz", [qubit], GateMatrix::rz(theta))
    }

    /// Apply U(theta, phi, lambda), named the way the unroller names it.
    pub fn u(&mut self, theta: f64, phi: f64, lambda: f64, qubit: QubitId) -> IrResult<&mut Self> {
        self.gate(
            format!("U({theta:.15},{phi:.15},{lambda:.15})"),
            [qubit],
            GateMatrix::u(theta, phi, lambda),
        )
    }

    // =========================================================================
    // Two-qubit gates
    // =========================================================================

    /// Apply CNOT gate.
    pub fn cx(&mut self, control: QubitId, target: QubitId) -> IrResult<&mut Self> {
        self.gate("CX", [control, target], GateMatrix::cx())
    }

    /// Apply controlled-Y gate.
    pub fn cy(&mut self, control: QubitId, target: QubitId) -> IrResult<&mut Self> {
        self.gate("cy", [control, target], GateMatrix::cy())
    }

    /// Apply controlled-Z gate.
    pub fn cz(&mut self, control: QubitId, target: QubitId) -> IrResult<&mut Self> {
        self.gate("cz", [control, target], GateMatrix::cz())
    }

    /// Apply SWAP gate.
    pub fn swap(&mut self, q1: QubitId, q2: QubitId) -> IrResult<&mut Self> {
        self.gate("swap", [q1, q2], GateMatrix::swap())
    }

    /// Apply controlled-phase gate.
    pub fn cp(&mut self, lambda: f64, control: QubitId, target: QubitId) -> IrResult<&mut Self> {
        self.gate("cp", [control, target], GateMatrix::cp(lambda))
    }

    /// Apply controlled Rz gate.
    pub fn crz(&mut self, theta: f64, control: QubitId, target: QubitId) -> IrResult<&mut Self> {
        self.gate("crz", [control, target], GateMatrix::crz(theta))
    }

    // =========================================================================
    // Non-unitary operations
    // =========================================================================

    /// Measure a qubit into a classical bit.
    pub fn measure(&mut self, qubit: QubitId, clbit: ClbitId) -> IrResult<&mut Self> {
        self.push(Operation::measure(qubit, clbit))
    }

    /// Reset a qubit.
    pub fn reset(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.push(Operation::reset(qubit))
    }
}

fn check_order(table: &'static str, labels: &[BitLabel], expected: u32) -> IrResult<()> {
    if labels.is_empty() || labels.len() == expected as usize {
        Ok(())
    } else {
        Err(IrError::OrderTableMismatch {
            table,
            expected: expected as usize,
            got: labels.len(),
        })
    }
}

/// Wire form of a compiled circuit.
///
/// The operation list is also accepted under the key `qasm`, the name older
/// unrollers emit.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct CircuitRecord {
    number_of_qubits: u32,
    #[serde(default)]
    number_of_cbits: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    number_of_operations: Option<usize>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    qubit_order: Vec<BitLabel>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    cbit_order: Vec<BitLabel>,
    #[serde(default, alias = "qasm")]
    operations: Vec<Operation>,
}

impl TryFrom<CircuitRecord> for CompiledCircuit {
    type Error = IrError;

    fn try_from(record: CircuitRecord) -> IrResult<Self> {
        if let Some(declared) = record.number_of_operations {
            if declared != record.operations.len() {
                return Err(IrError::OperationCountMismatch {
                    declared,
                    actual: record.operations.len(),
                });
            }
        }

        let mut circuit = CompiledCircuit::new(record.number_of_qubits, record.number_of_cbits)
            .with_qubit_order(record.qubit_order)?
            .with_cbit_order(record.cbit_order)?;
        for op in record.operations {
            circuit.push(op)?;
        }
        Ok(circuit)
    }
}

impl From<CompiledCircuit> for CircuitRecord {
    fn from(circuit: CompiledCircuit) -> Self {
        Self {
            number_of_qubits: circuit.num_qubits,
            number_of_cbits: circuit.num_cbits,
            number_of_operations: Some(circuit.operations.len()),
            qubit_order: circuit.qubit_order,
            cbit_order: circuit.cbit_order,
            operations: circuit.operations,
        }
    }
}
