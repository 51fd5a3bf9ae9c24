//! unisim Compiled-Circuit Representation
//!
//! This crate defines the input contract of the unisim unitary engine: the
//! compiled circuit an unrolling stage produces after rewriting a program into
//! basis gates. Each gate already carries its dense matrix, so nothing
//! downstream needs to know gate semantics.
//!
//! # Core Components
//!
//! - **Addressing**: [`QubitId`], [`ClbitId`] flat bit positions, [`BitLabel`]
//!   for the register names they came from
//! - **Gates**: [`GateMatrix`] dense complex matrices, with constructors for
//!   the standard gate set
//! - **Operations**: [`Operation`] (gate, measure, reset)
//! - **Circuit**: [`CompiledCircuit`] validated builder and JSON loader
//!
//! # Example
//!
//! ```rust
//! use unisim_ir::{ClbitId, CompiledCircuit, QubitId};
//!
//! let mut circuit = CompiledCircuit::new(2, 2);
//! circuit.h(QubitId(0)).unwrap();
//! circuit.cx(QubitId(0), QubitId(1)).unwrap();
//! circuit.measure(QubitId(0), ClbitId(0)).unwrap();
//!
//! assert_eq!(circuit.num_operations(), 3);
//! ```
//!
//! # JSON form
//!
//! ```json
//! {
//!   "number_of_qubits": 1,
//!   "number_of_cbits": 0,
//!   "number_of_operations": 1,
//!   "operations": [
//!     { "type": "gate", "name": "x", "qubit_indices": [0], "gate_size": 1,
//!       "matrix": [[[0, 0], [1, 0]], [[1, 0], [0, 0]]] }
//!   ]
//! }
//! ```
//!
//! Matrix entries are `[re, im]` pairs.

pub mod circuit;
pub mod error;
pub mod gate;
pub mod operation;
pub mod qubit;

pub use circuit::CompiledCircuit;
pub use error::{IrError, IrResult};
pub use gate::GateMatrix;
pub use operation::{GateOp, MeasureOp, Operation, ResetOp};
pub use qubit::{BitLabel, ClbitId, QubitId};
