//! Shared helpers for CLI commands.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use unisim_core::Unitary;
use unisim_ir::CompiledCircuit;

/// Load a compiled circuit from a JSON file.
pub fn load_circuit(path: &str) -> Result<CompiledCircuit> {
    let path_obj = Path::new(path);

    if !path_obj.exists() {
        anyhow::bail!("File not found: {path}");
    }

    let source =
        fs::read_to_string(path).with_context(|| format!("Failed to read file: {path}"))?;

    CompiledCircuit::from_json(&source).with_context(|| format!("Invalid compiled circuit: {path}"))
}

/// Write `contents` to `path`, or to stdout when no path is given.
pub fn emit(contents: &str, path: Option<&str>) -> Result<()> {
    match path {
        Some(path) => {
            fs::write(path, contents).with_context(|| format!("Failed to write file: {path}"))
        }
        None => {
            println!("{contents}");
            Ok(())
        }
    }
}

/// Render a unitary as a plain-text table, one matrix row per line.
pub fn format_unitary(unitary: &Unitary, precision: usize) -> String {
    unitary
        .as_array()
        .outer_iter()
        .map(|row| {
            row.iter()
                .map(|&z| format_entry(z.re, z.im, precision))
                .collect::<Vec<_>>()
                .join("  ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// `a+bi` with explicit signs and fixed decimals, e.g. `+0.7071-0.5000i`.
///
/// Negative zero prints as positive so exact results read cleanly.
pub fn format_entry(re: f64, im: f64, precision: usize) -> String {
    format!("{:+.precision$}{:+.precision$}i", clean(re), clean(im))
}

fn clean(x: f64) -> f64 {
    if x == 0.0 { 0.0 } else { x }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_identity() {
        let table = format_unitary(&Unitary::identity(1), 2);
        assert_eq!(table, "+1.00+0.00i  +0.00+0.00i\n+0.00+0.00i  +1.00+0.00i");
    }

    #[test]
    fn test_negative_zero_is_clean() {
        assert_eq!(format_entry(-0.0, -0.0, 1), "+0.0+0.0i");
        assert_eq!(format_entry(-0.5, 0.25, 2), "-0.50+0.25i");
    }

    #[test]
    fn test_missing_file() {
        let err = load_circuit("/nonexistent/circuit.json").unwrap_err();
        assert!(err.to_string().contains("File not found"));
    }
}
