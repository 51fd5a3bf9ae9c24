//! Version command implementation.

use console::style;

use unisim_core::DEFAULT_MAX_QUBITS;

/// Execute the version command.
pub fn execute() {
    let version = env!("CARGO_PKG_VERSION");

    println!(
        "{} {} - dense unitary simulator for compiled quantum circuits",
        style("unisim").cyan().bold(),
        style(format!("v{version}")).yellow()
    );
    println!();
    println!("Components:");
    println!("  unisim-ir    Compiled-circuit representation");
    println!("  unisim-core  Unitary engine");
    println!("  unisim-cli   Command-line interface");
    println!();
    println!("Default qubit limit: {DEFAULT_MAX_QUBITS}");
    println!(
        "Repository: {}",
        style(env!("CARGO_PKG_REPOSITORY")).underlined()
    );
    println!("License:    {}", style(env!("CARGO_PKG_LICENSE")).dim());
}
