//! Per-check outcomes and their console rendering.

use serde::{Deserialize, Serialize};

/// Extra dots appended after the longest check name.
const PADDING_GAP: usize = 3;

/// Result of one check on one chunk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckOutcome {
    /// Registered name of the check.
    pub name: String,
    /// Whether the chunk failed the check.
    pub failed: bool,
}

impl CheckOutcome {
    pub fn new(name: impl Into<String>, failed: bool) -> Self {
        Self {
            name: name.into(),
            failed,
        }
    }

    /// `"passed"` or `"failed"`.
    pub fn status(&self) -> &'static str {
        if self.failed {
            "failed"
        } else {
            "passed"
        }
    }
}

/// Outcomes of every requested check on one chunk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChunkReport {
    /// Window index, when the chunk came from a windowed table.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub window: Option<i64>,
    /// Outcomes in request order.
    pub outcomes: Vec<CheckOutcome>,
    /// True if any check failed.
    pub failed: bool,
}

impl ChunkReport {
    /// Creates a report, deriving the aggregate verdict from the outcomes.
    pub fn new(outcomes: Vec<CheckOutcome>) -> Self {
        let failed = outcomes.iter().any(|o| o.failed);
        Self {
            window: None,
            outcomes,
            failed,
        }
    }

    /// Tags the report with a window index.
    pub fn with_window(mut self, window: i64) -> Self {
        self.window = Some(window);
        self
    }

    /// Names of the checks that failed.
    pub fn failed_checks(&self) -> Vec<&str> {
        self.outcomes
            .iter()
            .filter(|o| o.failed)
            .map(|o| o.name.as_str())
            .collect()
    }
}

/// Formats one `"<name><dots><status>"` line per outcome.
///
/// Names are padded with dots to the longest name in `outcomes` plus three.
pub fn format_diagnostics(outcomes: &[CheckOutcome]) -> Vec<String> {
    let width = outcomes
        .iter()
        .map(|o| o.name.chars().count())
        .max()
        .unwrap_or(0);

    outcomes
        .iter()
        .map(|o| {
            let dots = width - o.name.chars().count() + PADDING_GAP;
            format!("{}{}{}", o.name, ".".repeat(dots), o.status())
        })
        .collect()
}
