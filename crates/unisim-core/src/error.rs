//! Error types for the unitary engine.

use thiserror::Error;

/// Errors that abort a unitary simulation run.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SimError {
    /// The compiled circuit violates an operand invariant.
    #[error("Circuit IR error: {0}")]
    Ir(#[from] unisim_ir::IrError),

    /// Gate acts on a number of qubits the engine cannot embed.
    #[error(
        "Unsupported gate arity: '{gate_name}' acts on {gate_size} qubits, only 1- and 2-qubit gates have a unitary embedding"
    )]
    UnsupportedGateArity {
        /// Name of the gate.
        gate_name: String,
        /// Declared gate size.
        gate_size: u32,
    },

    /// Two bits were to be inserted at the same position.
    #[error("Cannot insert two bits at the same position {0}")]
    CoincidentPositions(usize),

    /// Circuit is wider than the configured dense-matrix limit.
    #[error(
        "Circuit has {num_qubits} qubits but the unitary simulator is limited to {max_qubits} (a 2^n x 2^n matrix grows as 4^n)"
    )]
    QubitLimitExceeded {
        /// Qubits in the circuit.
        num_qubits: usize,
        /// Configured limit.
        max_qubits: usize,
    },

    /// Target qubit outside the register being embedded into.
    #[error("Qubit {qubit} out of range for {num_qubits}-qubit register")]
    QubitOutOfRange {
        /// The offending qubit position.
        qubit: usize,
        /// Register width.
        num_qubits: usize,
    },

    /// Gate matrix has the wrong dimension for the embedder it was given to.
    #[error("Expected a {expected}x{expected} gate matrix, got {got}x{got}")]
    GateDimension {
        /// Required dimension.
        expected: usize,
        /// Actual dimension.
        got: usize,
    },

    /// Matrix is not square with a power-of-two dimension.
    #[error("Matrix of shape {rows}x{cols} is not a 2^n x 2^n operator")]
    InvalidShape {
        /// Number of rows.
        rows: usize,
        /// Number of columns.
        cols: usize,
    },
}

/// Result type for unitary simulation.
pub type SimResult<T> = Result<T, SimError>;
