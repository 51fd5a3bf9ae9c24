//! unisim Command-Line Interface
//!
//! Argument parsing, configuration, logging setup and the command
//! implementations behind the `unisim` binary.

pub mod cli;
pub mod commands;
pub mod config;
pub mod logging;
