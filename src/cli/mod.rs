//! Command-line interface for adv-qc.
//!
//! Provides commands for running the quality-check battery over a table
//! of ADV measurements and listing the available checks.

mod commands;

pub use commands::{parse_cli, run, run_with_cli, CheckArgs, Cli, Commands};
