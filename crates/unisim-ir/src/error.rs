//! Error types for the IR crate.

use crate::qubit::{ClbitId, QubitId};
use thiserror::Error;

/// Errors that can occur while building or validating a compiled circuit.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum IrError {
    /// Qubit index is outside the circuit register.
    #[error("Qubit {qubit} out of range for {num_qubits}-qubit circuit{}", format_gate_context(.gate_name))]
    QubitOutOfRange {
        /// The offending qubit.
        qubit: QubitId,
        /// Number of qubits in the circuit.
        num_qubits: u32,
        /// Optional gate name for context.
        gate_name: Option<String>,
    },

    /// Classical bit index is outside the circuit register.
    #[error("Classical bit {clbit} out of range for circuit with {num_cbits} classical bits")]
    ClbitOutOfRange {
        /// The offending classical bit.
        clbit: ClbitId,
        /// Number of classical bits in the circuit.
        num_cbits: u32,
    },

    /// Gate declares a different size than the number of qubits it names.
    #[error("Gate '{gate_name}' has gate_size {expected} but names {got} qubits")]
    QubitCountMismatch {
        /// Name of the gate.
        gate_name: String,
        /// Declared gate size.
        expected: u32,
        /// Number of qubit indices provided.
        got: u32,
    },

    /// Gate matrix dimension does not equal 2^gate_size.
    #[error("Gate '{gate_name}' of size {gate_size} needs a {expected}x{expected} matrix, got {got}x{got}")]
    MatrixDimensionMismatch {
        /// Name of the gate.
        gate_name: String,
        /// Declared gate size.
        gate_size: u32,
        /// Expected matrix dimension.
        expected: usize,
        /// Actual matrix dimension.
        got: usize,
    },

    /// Matrix rows are ragged or the matrix is empty.
    #[error("Gate matrix must be square and non-empty: {0}")]
    NonSquareMatrix(String),

    /// Same qubit used twice in one gate.
    #[error("Duplicate qubit {qubit} in operation{}", format_gate_context(.gate_name))]
    DuplicateQubit {
        /// The duplicate qubit.
        qubit: QubitId,
        /// Optional gate name for context.
        gate_name: Option<String>,
    },

    /// Measurement pairs a different number of qubits and classical bits.
    #[error("Measure names {qubits} qubits but {cbits} classical bits")]
    MeasureOperandMismatch {
        /// Number of qubits named.
        qubits: usize,
        /// Number of classical bits named.
        cbits: usize,
    },

    /// Declared operation count disagrees with the operation list.
    #[error("number_of_operations is {declared} but {actual} operations were given")]
    OperationCountMismatch {
        /// The declared count.
        declared: usize,
        /// Length of the operation list.
        actual: usize,
    },

    /// A register label table has the wrong length.
    #[error("{table} has {got} entries, expected {expected}")]
    OrderTableMismatch {
        /// Which table (`qubit_order` or `cbit_order`).
        table: &'static str,
        /// Expected number of entries.
        expected: usize,
        /// Actual number of entries.
        got: usize,
    },

    /// JSON (de)serialization failure.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Helper function to format optional gate context.
#[allow(clippy::ref_option)]
fn format_gate_context(gate_name: &Option<String>) -> String {
    match gate_name {
        Some(name) => format!(" (gate: {name})"),
        None => String::new(),
    }
}

/// Result type for IR operations.
pub type IrResult<T> = Result<T, IrError>;
