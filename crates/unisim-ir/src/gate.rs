//! Gate matrices.
//!
//! A [`GateMatrix`] is the dense complex matrix a compiled gate carries. The
//! unrolling stage attaches one to every gate, so the engine never needs to
//! know gate names. The standard constructors below exist for building
//! circuits by hand (tests, benchmarks, tooling).
//!
//! Two-qubit matrices are indexed by `bit(q0) + 2 * bit(q1)`, where `q0` and
//! `q1` are the gate's first and second qubit. For the controlled gates the
//! first qubit is the control.

use ndarray::{Array2, arr1, arr2};
use num_complex::Complex64;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

use crate::error::{IrError, IrResult};

#[inline]
fn c(re: f64, im: f64) -> Complex64 {
    Complex64::new(re, im)
}

/// A square complex gate matrix.
///
/// Serialized as a list of rows, each entry a `[re, im]` pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<Complex64>>", into = "Vec<Vec<Complex64>>")]
pub struct GateMatrix {
    data: Array2<Complex64>,
}

impl GateMatrix {
    /// Wrap a dense array. Fails if it is empty or not square.
    pub fn from_array(data: Array2<Complex64>) -> IrResult<Self> {
        let (rows, cols) = data.dim();
        if rows == 0 || rows != cols {
            return Err(IrError::NonSquareMatrix(format!(
                "shape is {rows}x{cols}"
            )));
        }
        Ok(Self { data })
    }

    /// Build from row vectors.
    pub fn from_rows(rows: Vec<Vec<Complex64>>) -> IrResult<Self> {
        let n = rows.len();
        if n == 0 {
            return Err(IrError::NonSquareMatrix("matrix has no rows".into()));
        }
        if let Some((i, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != n) {
            return Err(IrError::NonSquareMatrix(format!(
                "row {i} has {} entries, expected {n}",
                row.len()
            )));
        }
        let flat: Vec<Complex64> = rows.into_iter().flatten().collect();
        let data = Array2::from_shape_vec((n, n), flat)
            .map_err(|e| IrError::NonSquareMatrix(e.to_string()))?;
        Ok(Self { data })
    }

    /// Matrix dimension (number of rows).
    #[inline]
    pub fn dim(&self) -> usize {
        self.data.nrows()
    }

    /// Number of qubits the matrix acts on, if the dimension is a power of two.
    pub fn num_qubits(&self) -> Option<u32> {
        let dim = self.dim();
        dim.is_power_of_two().then(|| dim.trailing_zeros())
    }

    /// Borrow the underlying array.
    #[inline]
    pub fn as_array(&self) -> &Array2<Complex64> {
        &self.data
    }

    /// Take the underlying array.
    pub fn into_array(self) -> Array2<Complex64> {
        self.data
    }

    /// Whether every entry has a zero imaginary part.
    pub fn is_real(&self) -> bool {
        self.data.iter().all(|z| z.im == 0.0)
    }

    fn one_qubit(a: Complex64, b: Complex64, c_: Complex64, d: Complex64) -> Self {
        Self {
            data: arr2(&[[a, b], [c_, d]]),
        }
    }

    fn diagonal(entries: &[Complex64]) -> Self {
        Self {
            data: Array2::from_diag(&arr1(entries)),
        }
    }

    /// Build a 4x4 matrix from a basis permutation: `|perm[i]⟩⟨i|`.
    fn permutation(perm: [usize; 4]) -> Self {
        let mut data = Array2::zeros((4, 4));
        for (col, &row) in perm.iter().enumerate() {
            data[[row, col]] = c(1.0, 0.0);
        }
        Self { data }
    }

    // =========================================================================
    // Single-qubit gates
    // =========================================================================

    /// Identity of the given dimension.
    pub fn identity(dim: usize) -> Self {
        Self {
            data: Array2::eye(dim.max(1)),
        }
    }

    /// Pauli-X gate.
    pub fn x() -> Self {
        Self::one_qubit(c(0.0, 0.0), c(1.0, 0.0), c(1.0, 0.0), c(0.0, 0.0))
    }

    /// Pauli-Y gate.
    pub fn y() -> Self {
        Self::one_qubit(c(0.0, 0.0), c(0.0, -1.0), c(0.0, 1.0), c(0.0, 0.0))
    }

    /// Pauli-Z gate.
    pub fn z() -> Self {
        Self::diagonal(&[c(1.0, 0.0), c(-1.0, 0.0)])
    }

    /// Hadamard gate.
    pub fn h() -> Self {
        let s = 1.0 / 2.0_f64.sqrt();
        Self::one_qubit(c(s, 0.0), c(s, 0.0), c(s, 0.0), c(-s, 0.0))
    }

    /// S gate (sqrt(Z)).
    pub fn s() -> Self {
        Self::p(PI / 2.0)
    }

    /// S-dagger gate.
    pub fn sdg() -> Self {
        Self::p(-PI / 2.0)
    }

    /// T gate (fourth root of Z).
    pub fn t() -> Self {
        Self::p(PI / 4.0)
    }

    /// T-dagger gate.
    pub fn tdg() -> Self {
        Self::p(-PI / 4.0)
    }

    /// sqrt(X) gate.
    pub fn sx() -> Self {
        let plus = c(0.5, 0.5);
        let minus = c(0.5, -0.5);
        Self::one_qubit(plus, minus, minus, plus)
    }

    /// Rotation around X.
    pub fn rx(theta: f64) -> Self {
        let cos = (theta / 2.0).cos();
        let sin = (theta / 2.0).sin();
        Self::one_qubit(c(cos, 0.0), c(0.0, -sin), c(0.0, -sin), c(cos, 0.0))
    }

    /// Rotation around Y.
    pub fn ry(theta: f64) -> Self {
        let cos = (theta / 2.0).cos();
        let sin = (theta / 2.0).sin();
        Self::one_qubit(c(cos, 0.0), c(-sin, 0.0), c(sin, 0.0), c(cos, 0.0))
    }

    /// Rotation around Z.
    pub fn rz(theta: f64) -> Self {
        Self::diagonal(&[
            Complex64::from_polar(1.0, -theta / 2.0),
            Complex64::from_polar(1.0, theta / 2.0),
        ])
    }

    /// Phase gate P(lambda).
    pub fn p(lambda: f64) -> Self {
        Self::diagonal(&[c(1.0, 0.0), Complex64::from_polar(1.0, lambda)])
    }

    /// Universal single-qubit gate U(theta, phi, lambda).
    pub fn u(theta: f64, phi: f64, lambda: f64) -> Self {
        let cos = (theta / 2.0).cos();
        let sin = (theta / 2.0).sin();
        Self::one_qubit(
            c(cos, 0.0),
            -Complex64::from_polar(sin, lambda),
            Complex64::from_polar(sin, phi),
            Complex64::from_polar(cos, phi + lambda),
        )
    }

    // =========================================================================
    // Two-qubit gates (first qubit = control)
    // =========================================================================

    /// Controlled-X (CNOT).
    pub fn cx() -> Self {
        // |01⟩ <-> |11⟩ in |q1 q0⟩ order: index 1 <-> 3
        Self::permutation([0, 3, 2, 1])
    }

    /// Controlled-Y.
    pub fn cy() -> Self {
        let mut m = Self::identity(4);
        m.data[[1, 1]] = c(0.0, 0.0);
        m.data[[3, 3]] = c(0.0, 0.0);
        m.data[[1, 3]] = c(0.0, -1.0);
        m.data[[3, 1]] = c(0.0, 1.0);
        m
    }

    /// Controlled-Z.
    pub fn cz() -> Self {
        Self::diagonal(&[c(1.0, 0.0), c(1.0, 0.0), c(1.0, 0.0), c(-1.0, 0.0)])
    }

    /// SWAP.
    pub fn swap() -> Self {
        Self::permutation([0, 2, 1, 3])
    }

    /// Controlled phase CP(lambda).
    pub fn cp(lambda: f64) -> Self {
        Self::diagonal(&[
            c(1.0, 0.0),
            c(1.0, 0.0),
            c(1.0, 0.0),
            Complex64::from_polar(1.0, lambda),
        ])
    }

    /// Controlled Z-rotation CRz(theta).
    pub fn crz(theta: f64) -> Self {
        Self::diagonal(&[
            c(1.0, 0.0),
            Complex64::from_polar(1.0, -theta / 2.0),
            c(1.0, 0.0),
            Complex64::from_polar(1.0, theta / 2.0),
        ])
    }
}

impl TryFrom<Vec<Vec<Complex64>>> for GateMatrix {
    type Error = IrError;

    fn try_from(rows: Vec<Vec<Complex64>>) -> IrResult<Self> {
        Self::from_rows(rows)
    }
}

impl From<GateMatrix> for Vec<Vec<Complex64>> {
    fn from(m: GateMatrix) -> Self {
        m.data.outer_iter().map(|row| row.to_vec()).collect()
    }
}
