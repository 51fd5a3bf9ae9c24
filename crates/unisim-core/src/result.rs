//! Simulation results and the serialized run report.

use serde::{Deserialize, Serialize};

use crate::diagnostics::Diagnostic;
use crate::error::SimResult;
use crate::unitary::Unitary;

/// Outcome of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunStatus {
    /// The whole circuit was multiplied out.
    #[serde(rename = "DONE")]
    Completed,
    /// The run was aborted on invalid input.
    #[serde(rename = "ERROR")]
    Failed,
}

/// Payload of a completed run.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultData {
    /// The circuit's full unitary.
    pub unitary: Unitary,
}

/// Result of a completed run.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationResult {
    /// The computed unitary.
    pub data: ResultData,
    /// Always [`RunStatus::Completed`]; failures are returned as errors.
    pub status: RunStatus,
    /// Operations that were skipped, in circuit order.
    pub diagnostics: Vec<Diagnostic>,
    /// Number of gates multiplied into the unitary.
    pub gates_applied: usize,
}

impl SimulationResult {
    /// Shorthand for `self.data.unitary`.
    pub fn unitary(&self) -> &Unitary {
        &self.data.unitary
    }
}

/// Serializable record of a run, successful or not.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunReport {
    /// `DONE` or `ERROR`.
    pub status: RunStatus,
    /// Register width of the simulated circuit.
    pub number_of_qubits: usize,
    /// Result payload; absent on failure.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<ReportData>,
    /// Gates multiplied into the unitary.
    pub gates_applied: usize,
    /// Non-fatal findings.
    #[serde(default)]
    pub diagnostics: Vec<Diagnostic>,
    /// Error message of a failed run.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Serialized result payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportData {
    /// Unitary rows of `[re, im]` pairs.
    pub unitary: Vec<Vec<[f64; 2]>>,
}

impl RunReport {
    /// Build a report from the outcome of [`UnitarySimulator::run`](crate::UnitarySimulator::run).
    pub fn from_outcome(number_of_qubits: usize, outcome: &SimResult<SimulationResult>) -> Self {
        match outcome {
            Ok(result) => Self {
                status: RunStatus::Completed,
                number_of_qubits,
                data: Some(ReportData {
                    unitary: result.unitary().to_rows(),
                }),
                gates_applied: result.gates_applied,
                diagnostics: result.diagnostics.clone(),
                error: None,
            },
            Err(e) => Self {
                status: RunStatus::Failed,
                number_of_qubits,
                data: None,
                gates_applied: 0,
                diagnostics: vec![],
                error: Some(e.to_string()),
            },
        }
    }

    /// Pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
