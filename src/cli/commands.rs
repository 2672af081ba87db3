//! CLI command definitions for adv-qc.
//!
//! Runs the quality-check battery over every window of a column-oriented
//! ADV table and reports per-window verdicts.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::{info, warn};

use crate::chunk::{load_table, split_windows, Chunk};
use crate::config::{QcConfig, TestsConfig};
use crate::quality::{available_checks, check_adv, run_checks, CheckContext, ChunkReport};
use crate::velocity::FixedVelocity;

/// Quality control for acoustic doppler velocimeter bursts.
#[derive(Parser)]
#[command(name = "adv-qc")]
#[command(about = "Run data-quality checks over windowed ADV measurements")]
#[command(version)]
#[command(
    long_about = "adv-qc flags ADV bursts that are too noisy, poorly correlated across beams, or violate the frozen turbulence hypothesis.\n\nExample usage:\n  adv-qc check --input burst.json --tests all --reference-velocity 0.2 --verbose"
)]
pub struct Cli {
    /// The subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,

    /// Log level (trace, debug, info, warn, error).
    #[arg(short, long, default_value = "info", global = true)]
    pub log_level: String,
}

/// Available CLI subcommands.
#[derive(clap::Subcommand)]
pub enum Commands {
    /// Run quality checks over a table of ADV measurements.
    Check(CheckArgs),

    /// List the available quality checks.
    List,
}

/// Arguments for `adv-qc check`.
#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Column-oriented table to check (.json, .yaml or .yml).
    #[arg(short = 'i', long)]
    pub input: PathBuf,

    /// YAML run configuration. Command-line flags take precedence.
    #[arg(short = 'c', long)]
    pub config: Option<PathBuf>,

    /// Comma-separated check names, or "all". Required here or in the config.
    #[arg(short = 't', long, value_delimiter = ',')]
    pub tests: Option<Vec<String>>,

    /// Print per-check diagnostics for every window.
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// Minimum mean signal-to-noise ratio per axis (0-100).
    #[arg(long)]
    pub signal_threshold: Option<f64>,

    /// Minimum mean beam correlation (0-100).
    #[arg(long)]
    pub correlation_threshold: Option<f64>,

    /// Reference velocity for the frozen turbulence check.
    #[arg(long, allow_hyphen_values = true)]
    pub reference_velocity: Option<f64>,

    /// Column grouping rows into windows.
    #[arg(long)]
    pub window_column: Option<String>,

    /// Output JSON reports instead of text.
    #[arg(short = 'j', long)]
    pub json: bool,
}

impl CheckArgs {
    /// Merges these flags over a loaded configuration.
    pub fn apply_to(&self, mut config: QcConfig) -> QcConfig {
        if let Some(tests) = &self.tests {
            config.tests = Some(TestsConfig::List(tests.clone()));
        }
        config.verbose |= self.verbose;
        if let Some(threshold) = self.signal_threshold {
            config.params.signal_threshold = threshold;
        }
        if let Some(threshold) = self.correlation_threshold {
            config.params.correlation_threshold = threshold;
        }
        if let Some(velocity) = self.reference_velocity {
            config.reference_velocity = Some(velocity);
        }
        if let Some(column) = &self.window_column {
            config.window_column = column.clone();
        }
        config
    }
}

/// Parse CLI arguments.
pub fn parse_cli() -> Cli {
    Cli::parse()
}

/// Run the CLI by parsing arguments and executing the command.
pub fn run() -> anyhow::Result<()> {
    run_with_cli(parse_cli())
}

/// Run the CLI with the parsed arguments.
pub fn run_with_cli(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Check(args) => run_check_command(args),
        Commands::List => {
            for name in available_checks() {
                println!("{}", name);
            }
            Ok(())
        }
    }
}

fn run_check_command(args: CheckArgs) -> anyhow::Result<()> {
    let base = match &args.config {
        Some(path) => QcConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => QcConfig::default(),
    };
    let config = args.apply_to(base);
    config.validate()?;
    let tests = config.selection()?;

    let table = load_table(&args.input)
        .with_context(|| format!("Failed to load table {}", args.input.display()))?;
    let windows = windows_of(&table, &config.window_column)?;
    info!(
        input = %args.input.display(),
        windows = windows.len(),
        "Running quality checks"
    );

    let velocity = config.reference_velocity.map(FixedVelocity);
    let mut ctx = CheckContext::new(config.params);
    if let Some(v) = velocity.as_ref() {
        ctx = ctx.with_velocity(v);
    }

    if args.json {
        let reports = windows
            .iter()
            .map(|(index, chunk)| -> anyhow::Result<ChunkReport> {
                let report = run_checks(chunk, &tests, &ctx)
                    .with_context(|| window_label(*index))?;
                Ok(match index {
                    Some(i) => report.with_window(*i),
                    None => report,
                })
            })
            .collect::<anyhow::Result<Vec<_>>>()?;
        let output = serde_json::to_string_pretty(&reports)
            .map_err(|e| anyhow::anyhow!("Failed to serialize JSON output: {}", e))?;
        println!("{}", output);
        return Ok(());
    }

    let mut failed_windows = 0usize;
    for (index, chunk) in &windows {
        let label = window_label(*index);
        info!(window = %label, "Checking");
        let failed = check_adv(chunk, &tests, config.verbose, &ctx)
            .with_context(|| label.clone())?;
        if failed {
            failed_windows += 1;
        }
        println!("{}: {}", label, if failed { "failed" } else { "passed" });
    }

    println!();
    println!("{} of {} windows failed", failed_windows, windows.len());
    Ok(())
}

/// Splits the table by `column`, or treats it as one chunk if the column is absent.
fn windows_of(table: &Chunk, column: &str) -> anyhow::Result<Vec<(Option<i64>, Chunk)>> {
    if !table.has_column(column) {
        warn!(column, "Window column not found; checking the table as a single chunk");
        return Ok(vec![(None, table.clone())]);
    }
    let windows = split_windows(table, column)?;
    Ok(windows
        .into_iter()
        .map(|w| (Some(w.index), w.chunk))
        .collect())
}

fn window_label(index: Option<i64>) -> String {
    match index {
        Some(i) => format!("window {}", i),
        None => "table".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chunk::columns;
    use crate::quality::TestSelection;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).expect("arguments should parse")
    }

    #[test]
    fn test_parse_check_command() {
        let cli = parse(&[
            "adv-qc",
            "check",
            "--input",
            "burst.json",
            "--tests",
            "signal.noise_check_adv,beam.correlation_check_adv",
            "--signal-threshold",
            "20",
            "--verbose",
        ]);

        match cli.command {
            Commands::Check(args) => {
                assert_eq!(args.input, PathBuf::from("burst.json"));
                assert_eq!(
                    args.tests,
                    Some(vec![
                        "signal.noise_check_adv".to_string(),
                        "beam.correlation_check_adv".to_string(),
                    ])
                );
                assert_eq!(args.signal_threshold, Some(20.0));
                assert!(args.verbose);
            }
            Commands::List => panic!("Expected check command"),
        }
        assert_eq!(cli.log_level, "info");
    }

    #[test]
    fn test_flags_override_config() {
        let cli = parse(&[
            "adv-qc",
            "check",
            "-i",
            "burst.json",
            "--tests",
            "all",
            "--correlation-threshold",
            "75",
            "--reference-velocity",
            "0.4",
        ]);
        let Commands::Check(args) = cli.command else {
            panic!("Expected check command");
        };

        let base = QcConfig {
            tests: Some(TestsConfig::List(vec!["signal.noise_check_adv".to_string()])),
            verbose: true,
            ..QcConfig::default()
        };
        let config = args.apply_to(base);

        assert_eq!(config.selection().expect("tests set"), TestSelection::All);
        assert!(config.verbose);
        assert_eq!(config.params.correlation_threshold, 75.0);
        assert_eq!(config.params.signal_threshold, 15.0);
        assert_eq!(config.reference_velocity, Some(0.4));
    }

    #[test]
    fn test_missing_tests_rejected() {
        let cli = parse(&["adv-qc", "check", "-i", "burst.json"]);
        let Commands::Check(args) = cli.command else {
            panic!("Expected check command");
        };

        let config = args.apply_to(QcConfig::default());
        let err = config.selection().unwrap_err();
        assert!(matches!(err, crate::error::DispatchError::InvalidArgument(_)));
    }

    #[test]
    fn test_blank_tests_flag_is_empty_selection() {
        let cli = parse(&["adv-qc", "check", "-i", "burst.json", "--tests", ""]);
        let Commands::Check(args) = cli.command else {
            panic!("Expected check command");
        };

        let config = args.apply_to(QcConfig::default());
        assert_eq!(
            config.selection().expect("tests flag given"),
            TestSelection::Named(Vec::new())
        );
    }

    #[test]
    fn test_windows_of_without_column() {
        let table = Chunk::from_columns([(columns::VELOCITY_Z, vec![1.0, -1.0])]).expect("ok");
        let windows = windows_of(&table, columns::WINDOW_INDEX).expect("single chunk");
        assert_eq!(windows.len(), 1);
        assert_eq!(windows[0].0, None);
    }

    #[test]
    fn test_windows_of_with_column() {
        let table = Chunk::from_columns([
            (columns::WINDOW_INDEX, vec![3.0, 3.0, 7.0]),
            (columns::VELOCITY_Z, vec![1.0, -1.0, 0.0]),
        ])
        .expect("ok");
        let windows = windows_of(&table, columns::WINDOW_INDEX).expect("split");
        let indices: Vec<Option<i64>> = windows.iter().map(|(i, _)| *i).collect();
        assert_eq!(indices, vec![Some(3), Some(7)]);
    }
}
