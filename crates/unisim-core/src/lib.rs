//! unisim Unitary Engine
//!
//! Computes the full unitary matrix of a compiled quantum circuit. Each gate
//! is lifted to a `2^n x 2^n` operator and left-multiplied into a running
//! matrix that starts at the identity. The result is used to check that a
//! compiled circuit implements the intended transformation.
//!
//! # Features
//!
//! - **Exact**: dense complex arithmetic, no sampling
//! - **Arbitrary 1- and 2-qubit gates**: the matrix travels with the gate
//! - **Structured diagnostics**: measurements and resets are skipped and
//!   reported, never silently ignored
//! - **Deterministic**: identical input gives a bit-identical result
//!
//! # Memory
//!
//! The result matrix grows as `4^n`, so the simulator refuses circuits wider
//! than [`SimulatorOptions::max_qubits`] (default [`DEFAULT_MAX_QUBITS`]).
//!
//! | Qubits | Matrix size |
//! |--------|-------------|
//! | 4 | 4 KB |
//! | 8 | 1 MB |
//! | 10 | 16 MB |
//! | 12 | 256 MB |
//! | 14 | 4 GB |
//!
//! # Example
//!
//! ```rust
//! use unisim_core::UnitarySimulator;
//! use unisim_ir::{CompiledCircuit, QubitId};
//!
//! let mut circuit = CompiledCircuit::new(1, 0);
//! circuit.h(QubitId(0)).unwrap();
//! circuit.h(QubitId(0)).unwrap();
//!
//! let result = UnitarySimulator::new().run(&circuit).unwrap();
//! assert!(result.unitary().approx_eq(&unisim_core::Unitary::identity(1), 1e-10));
//! ```

pub mod diagnostics;
pub mod embed;
pub mod error;
pub mod index;
pub mod result;
pub mod simulator;
mod state;
pub mod unitary;

pub use diagnostics::{Diagnostic, DiagnosticKind};
pub use error::{SimError, SimResult};
pub use result::{ReportData, ResultData, RunReport, RunStatus, SimulationResult};
pub use simulator::{DEFAULT_MAX_QUBITS, MAX_SUPPORTED_QUBITS, SimulatorOptions, UnitarySimulator};
pub use unitary::Unitary;
