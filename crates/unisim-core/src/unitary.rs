//! Dense 2^n x 2^n complex operators.

use ndarray::{Array2, linalg::kron};
use num_complex::Complex64;

use crate::error::{SimError, SimResult};

/// A dense operator on an n-qubit register.
///
/// Row and column indices are basis-state indices with qubit 0 as the least
/// significant bit. The type owns its storage; the running state of a
/// simulation and each per-gate embedding are always separate values.
#[derive(Debug, Clone, PartialEq)]
pub struct Unitary {
    data: Array2<Complex64>,
}

impl Unitary {
    /// The identity on `num_qubits` qubits.
    pub fn identity(num_qubits: usize) -> Self {
        Self {
            data: Array2::eye(1 << num_qubits),
        }
    }

    /// Wrap a dense array. Fails unless it is square with a power-of-two side.
    pub fn from_array(data: Array2<Complex64>) -> SimResult<Self> {
        let (rows, cols) = data.dim();
        if rows != cols || !rows.is_power_of_two() {
            return Err(SimError::InvalidShape { rows, cols });
        }
        Ok(Self { data })
    }

    pub(crate) fn from_raw(data: Array2<Complex64>) -> Self {
        debug_assert!(data.is_square() && data.nrows().is_power_of_two());
        Self { data }
    }

    /// Matrix side length, `2^n`.
    #[inline]
    pub fn dim(&self) -> usize {
        self.data.nrows()
    }

    /// Number of qubits the operator acts on.
    #[inline]
    pub fn num_qubits(&self) -> usize {
        self.dim().trailing_zeros() as usize
    }

    /// Entry at `(row, col)`.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Complex64 {
        self.data[[row, col]]
    }

    /// Borrow the underlying array.
    pub fn as_array(&self) -> &Array2<Complex64> {
        &self.data
    }

    /// Take the underlying array.
    pub fn into_array(self) -> Array2<Complex64> {
        self.data
    }

    /// Replace `self` with `op · self`.
    pub fn left_multiply(&mut self, op: &Unitary) {
        debug_assert_eq!(op.dim(), self.dim());
        self.data = op.data.dot(&self.data);
    }

    /// Matrix product `self · other`.
    pub fn matmul(&self, other: &Unitary) -> Unitary {
        Self::from_raw(self.data.dot(&other.data))
    }

    /// Tensor product `self ⊗ other`; `other` occupies the low qubits.
    pub fn kron(&self, other: &Unitary) -> Unitary {
        Self::from_raw(kron(&self.data, &other.data))
    }

    /// Conjugate transpose.
    pub fn dagger(&self) -> Unitary {
        Self::from_raw(self.data.t().mapv(|z| z.conj()))
    }

    /// Entry-wise comparison within `tol`.
    pub fn approx_eq(&self, other: &Unitary, tol: f64) -> bool {
        self.dim() == other.dim()
            && self
                .data
                .iter()
                .zip(other.data.iter())
                .all(|(a, b)| (a - b).norm() <= tol)
    }

    /// Largest entry-wise deviation of `U†U` from the identity.
    pub fn unitarity_error(&self) -> f64 {
        let product = self.dagger().matmul(self);
        product
            .data
            .indexed_iter()
            .map(|((r, c), z)| {
                let expected = if r == c { 1.0 } else { 0.0 };
                (z - Complex64::new(expected, 0.0)).norm()
            })
            .fold(0.0, f64::max)
    }

    /// Whether `U†U = I` within `tol`. NaN entries make this false.
    pub fn is_unitary(&self, tol: f64) -> bool {
        let err = self.unitarity_error();
        err <= tol && !self.data.iter().any(|z| z.is_nan())
    }

    /// Rows as `[re, im]` pairs, the layout used in reports.
    pub fn to_rows(&self) -> Vec<Vec<[f64; 2]>> {
        self.data
            .outer_iter()
            .map(|row| row.iter().map(|z| [z.re, z.im]).collect())
            .collect()
    }

    /// Bytes needed to hold one dense operator on `num_qubits` qubits, or
    /// `None` if that does not even fit in a `u128`.
    pub fn memory_bytes(num_qubits: u32) -> Option<u128> {
        let entries = 1u128.checked_shl(num_qubits.checked_mul(2)?)?;
        entries.checked_mul(std::mem::size_of::<Complex64>() as u128)
    }
}
