//! Non-fatal findings recorded during a run.

use std::fmt;

use serde::{Deserialize, Serialize};
use unisim_ir::{ClbitId, QubitId};

/// What kind of operation was skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticKind {
    /// A measurement was dropped; it has no unitary representation.
    DroppedMeasure,
    /// A reset was dropped; it has no unitary representation.
    DroppedReset,
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticKind::DroppedMeasure => write!(f, "dropped_measure"),
            DiagnosticKind::DroppedReset => write!(f, "dropped_reset"),
        }
    }
}

/// A warning attached to a successful run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Kind of finding.
    pub kind: DiagnosticKind,
    /// Position of the operation in the circuit.
    pub operation_index: usize,
    /// Qubits the operation referred to.
    pub qubits: Vec<QubitId>,
    /// Classical bits a dropped measurement would have written.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub cbits: Vec<ClbitId>,
    /// Human-readable message.
    pub message: String,
}

impl Diagnostic {
    /// Record a dropped measurement.
    ///
    /// `labels` and `cbit_labels` are the display names of `qubits` and
    /// `cbits`, paired up in order.
    pub fn dropped_measure(
        operation_index: usize,
        qubits: &[QubitId],
        cbits: &[ClbitId],
        labels: &[String],
        cbit_labels: &[String],
    ) -> Self {
        let targets: Vec<String> = labels
            .iter()
            .zip(cbit_labels)
            .map(|(q, c)| format!("{q} -> {c}"))
            .collect();
        Self {
            kind: DiagnosticKind::DroppedMeasure,
            operation_index,
            qubits: qubits.to_vec(),
            cbits: cbits.to_vec(),
            message: format!(
                "measure {} at operation {operation_index} has no unitary representation; dropped",
                targets.join(", ")
            ),
        }
    }

    /// Record a dropped reset. `labels` are the qubits' display names.
    pub fn dropped_reset(operation_index: usize, qubits: &[QubitId], labels: &[String]) -> Self {
        Self {
            kind: DiagnosticKind::DroppedReset,
            operation_index,
            qubits: qubits.to_vec(),
            cbits: Vec::new(),
            message: format!(
                "reset on {} at operation {operation_index} has no unitary representation; dropped",
                labels.join(", ")
            ),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.kind, self.message)
    }
}
