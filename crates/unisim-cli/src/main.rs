//! unisim Command-Line Interface
//!
//! The main entry point for the `unisim` tool.
//!
//! ```text
//! unisim run -i bell.json               # print the unitary as a table
//! unisim run -i bell.json -f json -o u.json --check-unitary
//! unisim validate -i bell.json
//! ```

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use clap::Parser;
use console::style;

use unisim_cli::cli::{Cli, Commands};
use unisim_cli::commands::{run, validate, version};
use unisim_cli::config::Config;
use unisim_cli::logging::{self, LogFormat};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match Config::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{} {}", style("Error:").red().bold(), e);
            std::process::exit(2);
        }
    };

    // Setup logging
    logging::init(
        &logging::filter_for(cli.verbose, &config.logging.level),
        LogFormat::from_name(&config.logging.format),
    );

    // Execute command
    let result = match cli.command {
        Commands::Run {
            input,
            output,
            format,
            check_unitary,
        } => run::execute(&input, output.as_deref(), format, check_unitary, &config),

        Commands::Validate { input } => validate::execute(&input, &config),

        Commands::Version => {
            version::execute();
            Ok(())
        }
    };

    // Handle errors
    if let Err(e) = result {
        eprintln!("{} {:#}", style("Error:").red().bold(), e);
        std::process::exit(1);
    }

    Ok(())
}
