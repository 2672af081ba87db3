//! Check dispatch: resolve requested names, run the checks, aggregate.

use std::io::{self, Write};

use tracing::{debug, info};

use super::params::CheckContext;
use super::registry::{available_checks_listing, QualityCheck};
use super::report::{format_diagnostics, CheckOutcome, ChunkReport};
use crate::chunk::Chunk;
use crate::error::DispatchError;

/// Literal token selecting every registered check.
pub const ALL_TESTS: &str = "all";

/// Which checks to run.
///
/// There is no default: callers must name checks or ask for `"all"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TestSelection {
    /// Every registered check, in registry order.
    All,
    /// The named checks, in the given order.
    Named(Vec<String>),
}

impl TestSelection {
    /// Builds a selection from raw names; a lone `"all"` selects everything.
    ///
    /// Blank names are dropped, so `[""]` is an empty selection.
    pub fn parse<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names
            .into_iter()
            .map(|n| Into::<String>::into(n).trim().to_string())
            .filter(|n| !n.is_empty())
            .collect();
        if names.len() == 1 && names[0] == ALL_TESTS {
            TestSelection::All
        } else {
            TestSelection::Named(names)
        }
    }

    /// The effective list of names to run.
    pub fn names(&self) -> Vec<String> {
        match self {
            TestSelection::All => QualityCheck::ALL
                .iter()
                .map(|c| c.name().to_string())
                .collect(),
            TestSelection::Named(names) => names.clone(),
        }
    }
}

impl From<Vec<QualityCheck>> for TestSelection {
    fn from(checks: Vec<QualityCheck>) -> Self {
        TestSelection::Named(checks.iter().map(|c| c.name().to_string()).collect())
    }
}

/// Runs the selected checks and returns one outcome per check.
///
/// Nothing is printed. The first unknown name or failing check aborts the
/// run; no partial report is returned.
pub fn run_checks(
    chunk: &Chunk,
    tests: &TestSelection,
    ctx: &CheckContext<'_>,
) -> Result<ChunkReport, DispatchError> {
    let names = tests.names();
    if names.is_empty() {
        return Err(DispatchError::InvalidArgument(format!(
            "no tests specified; pass \"{}\" to run every available check",
            ALL_TESTS
        )));
    }

    log_inapplicable_params(&names, ctx);

    let mut outcomes = Vec::with_capacity(names.len());
    for name in names {
        let check: QualityCheck = name.parse()?;
        let failed = check
            .run(chunk, ctx)
            .map_err(|source| DispatchError::CheckFailed {
                name: name.clone(),
                available: available_checks_listing(),
                source,
            })?;
        debug!(check = %name, failed, "Check finished");
        outcomes.push(CheckOutcome::new(name, failed));
    }

    Ok(ChunkReport::new(outcomes))
}

/// Runs the selected checks and returns `true` if any of them failed.
///
/// With `verbose`, prints one dot-padded `passed`/`failed` line per check
/// to stdout, in request order.
pub fn check_adv(
    chunk: &Chunk,
    tests: &TestSelection,
    verbose: bool,
    ctx: &CheckContext<'_>,
) -> Result<bool, DispatchError> {
    check_adv_to(chunk, tests, verbose, ctx, &mut io::stdout().lock())
}

/// Same as [`check_adv`], writing verbose diagnostics to `out`.
pub fn check_adv_to<W: Write>(
    chunk: &Chunk,
    tests: &TestSelection,
    verbose: bool,
    ctx: &CheckContext<'_>,
    out: &mut W,
) -> Result<bool, DispatchError> {
    let report = run_checks(chunk, tests, ctx)?;

    if verbose {
        for line in format_diagnostics(&report.outcomes) {
            writeln!(out, "{}", line)?;
        }
    }

    if report.failed {
        info!(failed = ?report.failed_checks(), "Chunk failed quality checks");
    }
    Ok(report.failed)
}

/// Logs overridden parameters that none of the requested checks read.
fn log_inapplicable_params(names: &[String], ctx: &CheckContext<'_>) {
    let declared: Vec<&str> = names
        .iter()
        .filter_map(|n| n.parse::<QualityCheck>().ok())
        .flat_map(|c| c.declared_params().iter().copied())
        .collect();

    for param in ctx.params.overridden() {
        if !declared.contains(&param) {
            debug!(param, "Parameter not used by any requested check; ignoring");
        }
    }
}
