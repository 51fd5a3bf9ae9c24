//! Lifting 1- and 2-qubit gate matrices to full-register operators.
//!
//! Qubit 0 is the least significant bit of a basis index, so a single-qubit
//! gate `G` on qubit `q` of an `n`-qubit register embeds as
//!
//! ```text
//! I(2^(n-q-1)) ⊗ G ⊗ I(2^q)
//! ```
//!
//! Two-qubit gates may act on non-adjacent qubits in either order, so they
//! are placed entry by entry through [`insert_two_bits`] instead.

use ndarray::Array2;
use num_complex::Complex64;
use unisim_ir::GateMatrix;

use crate::error::{SimError, SimResult};
use crate::index::insert_two_bits;
use crate::unitary::Unitary;

/// Embed a 2x2 gate acting on `qubit` into an `num_qubits`-qubit operator.
pub fn embed_single(gate: &GateMatrix, qubit: usize, num_qubits: usize) -> SimResult<Unitary> {
    check_dim(gate, 2)?;
    check_qubit(qubit, num_qubits)?;

    let g = Unitary::from_raw(gate.as_array().clone());
    let above = Unitary::identity(num_qubits - qubit - 1);
    let below = Unitary::identity(qubit);
    Ok(above.kron(&g.kron(&below)))
}

/// Embed a 4x4 gate acting on `(q0, q1)` into an `num_qubits`-qubit operator.
///
/// Gate index `j + 2k` addresses qubit `q0` with bit `j` and qubit `q1` with
/// bit `k`: `q0` is the low bit of the gate's own basis. For CX that makes
/// `q0` the control.
///
/// The result acts as the identity on every other qubit.
pub fn embed_two(gate: &GateMatrix, q0: usize, q1: usize, num_qubits: usize) -> SimResult<Unitary> {
    check_dim(gate, 4)?;
    check_qubit(q0, num_qubits)?;
    check_qubit(q1, num_qubits)?;
    if q0 == q1 {
        return Err(SimError::CoincidentPositions(q0));
    }

    let g = gate.as_array();
    let dim = 1usize << num_qubits;
    let spectators = 1usize << (num_qubits - 2);
    let mut data = Array2::<Complex64>::zeros((dim, dim));

    for i in 0..spectators {
        for (j, k, jj, kk) in bit_quads() {
            let row = insert_two_bits(j, q0, k, q1, i)?;
            let col = insert_two_bits(jj, q0, kk, q1, i)?;
            data[[row, col]] = g[[j + 2 * k, jj + 2 * kk]];
        }
    }

    Ok(Unitary::from_raw(data))
}

/// All `(j, k, jj, kk)` with each component in `{0, 1}`.
fn bit_quads() -> impl Iterator<Item = (usize, usize, usize, usize)> {
    (0..16usize).map(|b| (b & 1, (b >> 1) & 1, (b >> 2) & 1, (b >> 3) & 1))
}

fn check_dim(gate: &GateMatrix, expected: usize) -> SimResult<()> {
    if gate.dim() == expected {
        Ok(())
    } else {
        Err(SimError::GateDimension {
            expected,
            got: gate.dim(),
        })
    }
}

fn check_qubit(qubit: usize, num_qubits: usize) -> SimResult<()> {
    if qubit < num_qubits {
        Ok(())
    } else {
        Err(SimError::QubitOutOfRange { qubit, num_qubits })
    }
}
