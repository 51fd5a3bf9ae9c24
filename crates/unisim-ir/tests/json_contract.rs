//! Tests for the JSON input contract of compiled circuits.

use unisim_ir::{ClbitId, CompiledCircuit, GateMatrix, IrError, Operation, QubitId};

const BELL_WITH_RESET: &str = r#"{
    "number_of_qubits": 2,
    "number_of_cbits": 2,
    "number_of_operations": 4,
    "qubit_order": [{"register": "q", "index": 0}, {"register": "v", "index": 0}],
    "cbit_order": [{"register": "c", "index": 0}, {"register": "c", "index": 1}],
    "qasm": [
        {
            "type": "gate",
            "name": "U(1.570796326794897,0.000000000000000,3.141592653589793)",
            "qubit_indices": [0],
            "gate_size": 1,
            "matrix": [[[0.70710678, 0.0], [0.70710678, -8.65956056e-17]],
                       [[0.70710678, 0.0], [-0.70710678, 8.65956056e-17]]]
        },
        {
            "type": "gate",
            "name": "CX",
            "qubit_indices": [0, 1],
            "gate_size": 2,
            "matrix": [[[1, 0], [0, 0], [0, 0], [0, 0]],
                       [[0, 0], [0, 0], [0, 0], [1, 0]],
                       [[0, 0], [0, 0], [1, 0], [0, 0]],
                       [[0, 0], [1, 0], [0, 0], [0, 0]]]
        },
        { "type": "reset", "qubit_indices": [1] },
        { "type": "measure", "qubit_indices": [0], "cbit_indices": [0] }
    ]
}"#;

#[test]
fn parses_unroller_output() {
    let circuit = CompiledCircuit::from_json(BELL_WITH_RESET).unwrap();
    assert_eq!(circuit.num_qubits(), 2);
    assert_eq!(circuit.num_cbits(), 2);
    assert_eq!(circuit.num_operations(), 4);

    let names: Vec<&str> = circuit.operations().iter().map(Operation::name).collect();
    assert_eq!(names[1..], ["CX", "reset", "measure"]);

    let cx = circuit.operations()[1].as_gate().unwrap();
    assert_eq!(cx.matrix, GateMatrix::cx());
    assert_eq!(cx.qubit_indices, vec![QubitId(0), QubitId(1)]);

    assert_eq!(circuit.describe_qubit(QubitId(1)), "v[0]");
    assert_eq!(circuit.cbit_label(ClbitId(1)).unwrap().index, 1);
}

#[test]
fn operations_key_is_accepted() {
    let json = r#"{
        "number_of_qubits": 1,
        "operations": [{ "type": "reset", "qubit_indices": [0] }]
    }"#;
    let circuit = CompiledCircuit::from_json(json).unwrap();
    assert_eq!(circuit.num_operations(), 1);
    assert_eq!(circuit.num_cbits(), 0);
}

#[test]
fn operation_count_must_match() {
    let json = r#"{
        "number_of_qubits": 1,
        "number_of_operations": 2,
        "operations": [{ "type": "reset", "qubit_indices": [0] }]
    }"#;
    let err = CompiledCircuit::from_json(json).unwrap_err();
    assert!(err.to_string().contains("number_of_operations is 2"));
    assert!(matches!(
        err,
        IrError::OperationCountMismatch {
            declared: 2,
            actual: 1
        }
    ));
}

#[test]
fn matrix_dimension_must_match_gate_size() {
    let json = r#"{
        "number_of_qubits": 2,
        "operations": [{
            "type": "gate", "name": "bad", "qubit_indices": [0, 1], "gate_size": 2,
            "matrix": [[[0, 0], [1, 0]], [[1, 0], [0, 0]]]
        }]
    }"#;
    let err = CompiledCircuit::from_json(json).unwrap_err();
    assert!(err.to_string().contains("needs a 4x4 matrix"));
    assert!(matches!(
        err,
        IrError::MatrixDimensionMismatch {
            expected: 4,
            got: 2,
            ..
        }
    ));
}

#[test]
fn out_of_range_qubit_is_rejected() {
    let json = r#"{
        "number_of_qubits": 1,
        "operations": [{ "type": "reset", "qubit_indices": [5] }]
    }"#;
    assert!(matches!(
        CompiledCircuit::from_json(json),
        Err(IrError::QubitOutOfRange {
            qubit: QubitId(5),
            num_qubits: 1,
            ..
        })
    ));
}

#[test]
fn malformed_json_is_a_json_error() {
    assert!(matches!(
        CompiledCircuit::from_json(r#"{"number_of_qubits": "two"}"#),
        Err(IrError::Json(_))
    ));
}

#[test]
fn complex_entries_survive_serialization() {
    let mut circuit = CompiledCircuit::new(2, 0);
    circuit.cy(QubitId(1), QubitId(0)).unwrap();
    circuit.reset(QubitId(0)).unwrap();

    let json = circuit.to_json().unwrap();
    assert!(json.contains("\"number_of_operations\": 2"));

    let back = CompiledCircuit::from_json(&json).unwrap();
    assert_eq!(back, circuit);
    assert!(!back.operations()[0].as_gate().unwrap().matrix.is_real());
}
