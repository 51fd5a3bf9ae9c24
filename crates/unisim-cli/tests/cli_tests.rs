//! CLI command parsing, configuration and command tests.
//!
//! Tests cover argument parsing (via clap `try_parse_from`), file-backed
//! configuration, and the `run` / `validate` commands end to end on
//! temporary files.

use std::io::Write;

use clap::Parser;
use tempfile::NamedTempFile;

use unisim_cli::cli::{Cli, Commands};
use unisim_cli::commands::{common, run, validate};
use unisim_cli::config::{Config, ConfigError, OutputFormat};

const BELL: &str = r#"{
    "number_of_qubits": 2,
    "number_of_cbits": 2,
    "number_of_operations": 3,
    "operations": [
        { "type": "gate", "name": "h", "qubit_indices": [0], "gate_size": 1,
          "matrix": [[[0.7071067811865476, 0], [0.7071067811865476, 0]],
                     [[0.7071067811865476, 0], [-0.7071067811865476, 0]]] },
        { "type": "gate", "name": "CX", "qubit_indices": [0, 1], "gate_size": 2,
          "matrix": [[[1, 0], [0, 0], [0, 0], [0, 0]],
                     [[0, 0], [0, 0], [0, 0], [1, 0]],
                     [[0, 0], [0, 0], [1, 0], [0, 0]],
                     [[0, 0], [1, 0], [0, 0], [0, 0]]] },
        { "type": "measure", "qubit_indices": [1], "cbit_indices": [1] }
    ]
}"#;

fn temp_file(contents: &str, suffix: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

fn path_of(file: &NamedTempFile) -> &str {
    file.path().to_str().unwrap()
}

// ============================================================================
// Clap argument parsing
// ============================================================================

mod clap_parsing {
    use super::*;

    #[test]
    fn test_run_defaults() {
        let cli = Cli::try_parse_from(["unisim", "run", "-i", "bell.json"]).unwrap();
        assert_eq!(cli.verbose, 0);
        assert!(cli.config.is_none());
        match cli.command {
            Commands::Run {
                input,
                output,
                format,
                check_unitary,
            } => {
                assert_eq!(input, "bell.json");
                assert!(output.is_none());
                assert!(format.is_none());
                assert!(!check_unitary);
            }
            other => panic!("expected run, got {other:?}"),
        }
    }

    #[test]
    fn test_run_all_options() {
        let cli = Cli::try_parse_from([
            "unisim",
            "-vv",
            "run",
            "--input",
            "bell.json",
            "--output",
            "u.json",
            "--format",
            "json",
            "--check-unitary",
            "--config",
            "unisim.yaml",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.config.as_deref(), Some("unisim.yaml"));
        match cli.command {
            Commands::Run {
                output,
                format,
                check_unitary,
                ..
            } => {
                assert_eq!(output.as_deref(), Some("u.json"));
                assert_eq!(format, Some(OutputFormat::Json));
                assert!(check_unitary);
            }
            other => panic!("expected run, got {other:?}"),
        }
    }

    #[test]
    fn test_run_requires_input() {
        assert!(Cli::try_parse_from(["unisim", "run"]).is_err());
    }

    #[test]
    fn test_unknown_format_rejected() {
        assert!(Cli::try_parse_from(["unisim", "run", "-i", "x.json", "-f", "csv"]).is_err());
    }

    #[test]
    fn test_validate_and_version() {
        let cli = Cli::try_parse_from(["unisim", "validate", "-i", "bell.json"]).unwrap();
        assert!(matches!(cli.command, Commands::Validate { ref input } if input == "bell.json"));

        let cli = Cli::try_parse_from(["unisim", "version"]).unwrap();
        assert!(matches!(cli.command, Commands::Version));
    }
}

// ============================================================================
// Configuration files
// ============================================================================

mod config_files {
    use super::*;

    #[test]
    fn test_load_yaml_file() {
        let file = temp_file(
            "simulator:\n  max_qubits: 4\noutput:\n  format: json\n  precision: 6\n",
            ".yaml",
        );
        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.simulator.max_qubits, 4);
        assert_eq!(config.output_format().unwrap(), OutputFormat::Json);
        assert_eq!(config.output.precision, 6);
        assert_eq!(config.logging.format, "console");
    }

    #[test]
    fn test_invalid_yaml_value() {
        let file = temp_file("logging:\n  level: loud\n", ".yaml");
        assert!(matches!(
            Config::from_file(file.path()),
            Err(ConfigError::ValidationError(_))
        ));
    }

    #[test]
    fn test_malformed_yaml() {
        let file = temp_file("simulator: [unclosed\n", ".yaml");
        assert!(matches!(
            Config::from_file(file.path()),
            Err(ConfigError::ParseError(_))
        ));
    }

    #[test]
    fn test_max_qubits_above_supported_width() {
        let file = temp_file("simulator:\n  max_qubits: 200\n", ".yaml");
        assert!(matches!(
            Config::from_file(file.path()),
            Err(ConfigError::ValidationError(msg)) if msg.contains("at most")
        ));
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            Config::from_file("/nonexistent/unisim.yaml"),
            Err(ConfigError::IoError(_))
        ));
    }
}

// ============================================================================
// Commands
// ============================================================================

mod commands {
    use super::*;

    #[test]
    fn test_load_circuit() {
        let file = temp_file(BELL, ".json");
        let circuit = common::load_circuit(path_of(&file)).unwrap();
        assert_eq!(circuit.num_qubits(), 2);
        assert_eq!(circuit.num_operations(), 3);
    }

    #[test]
    fn test_load_invalid_circuit() {
        let json = r#"{"number_of_qubits": 1, "operations": [{"type": "reset", "qubit_indices": [3]}]}"#;
        let file = temp_file(json, ".json");
        let err = common::load_circuit(path_of(&file)).unwrap_err();
        assert!(format!("{err:#}").contains("Invalid compiled circuit"));
    }

    #[test]
    fn test_run_writes_json_report() {
        let input = temp_file(BELL, ".json");
        let output = tempfile::Builder::new().suffix(".json").tempfile().unwrap();

        run::execute(
            path_of(&input),
            Some(path_of(&output)),
            Some(OutputFormat::Json),
            true,
            &Config::default(),
        )
        .unwrap();

        let written = std::fs::read_to_string(output.path()).unwrap();
        let report: serde_json::Value = serde_json::from_str(&written).unwrap();
        assert_eq!(report["status"], "DONE");
        assert_eq!(report["number_of_qubits"], 2);
        assert_eq!(report["gates_applied"], 2);
        assert_eq!(report["diagnostics"][0]["kind"], "dropped_measure");
        assert_eq!(report["diagnostics"][0]["cbits"], serde_json::json!([1]));

        let unitary = report["data"]["unitary"].as_array().unwrap();
        assert_eq!(unitary.len(), 4);
        let amp = unitary[3][0][0].as_f64().unwrap();
        assert!((amp - 1.0 / 2f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_run_over_limit_writes_error_report() {
        let input = temp_file(BELL, ".json");
        let output = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        let mut config = Config::default();
        config.simulator.max_qubits = 1;

        let err = run::execute(
            path_of(&input),
            Some(path_of(&output)),
            Some(OutputFormat::Json),
            false,
            &config,
        )
        .unwrap_err();
        assert!(err.to_string().contains("limited to 1"));

        let written = std::fs::read_to_string(output.path()).unwrap();
        let report: serde_json::Value = serde_json::from_str(&written).unwrap();
        assert_eq!(report["status"], "ERROR");
        assert!(report.get("data").is_none());
    }

    #[test]
    fn test_run_table_output() {
        let input = temp_file(BELL, ".json");
        let output = tempfile::Builder::new().suffix(".txt").tempfile().unwrap();
        let mut config = Config::default();
        config.output.precision = 3;

        run::execute(path_of(&input), Some(path_of(&output)), None, false, &config).unwrap();

        let table = std::fs::read_to_string(output.path()).unwrap();
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("+0.707+0.000i"));
    }

    #[test]
    fn test_validate_command() {
        let input = temp_file(BELL, ".json");
        validate::execute(path_of(&input), &Config::default()).unwrap();

        let mut tight = Config::default();
        tight.simulator.max_qubits = 1;
        assert!(validate::execute(path_of(&input), &tight).is_err());
    }
}
