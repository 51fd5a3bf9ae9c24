//! Command-line arguments.

use clap::{Parser, Subcommand};

use crate::config::OutputFormat;

/// unisim - compute the full unitary of a compiled quantum circuit
#[derive(Parser, Debug)]
#[command(name = "unisim")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Configuration file (YAML)
    #[arg(short, long, global = true, env = "UNISIM_CONFIG")]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compute the unitary of a compiled circuit
    Run {
        /// Compiled circuit (JSON)
        #[arg(short, long)]
        input: String,

        /// Write the output to a file instead of stdout
        #[arg(short, long)]
        output: Option<String>,

        /// Output format (overrides the configured one)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Fail unless the result satisfies U†U = I
        #[arg(long)]
        check_unitary: bool,
    },

    /// Load and validate a compiled circuit without simulating it
    Validate {
        /// Compiled circuit (JSON)
        #[arg(short, long)]
        input: String,
    },

    /// Show version information
    Version,
}
