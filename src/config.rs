//! Run configuration for quality-check sessions.
//!
//! Configuration is read from YAML.
//!
//! Every field is optional except that a run needs `tests` from either the
//! file or the command line.
//!
//! ```yaml
//! tests: all
//! verbose: false
//! window_column: window.idx
//! reference_velocity: 0.25
//! params:
//!   signal_threshold: 15
//!   correlation_threshold: 90
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::chunk::columns;
use crate::error::{ConfigError, DispatchError};
use crate::quality::{CheckParams, TestSelection, ALL_TESTS};

/// Either the `"all"` token (or a single name) or a list of check names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TestsConfig {
    Token(String),
    List(Vec<String>),
}

impl TestsConfig {
    /// Converts into a dispatcher selection.
    pub fn to_selection(&self) -> TestSelection {
        match self {
            TestsConfig::Token(token) => TestSelection::parse([token.as_str()]),
            TestsConfig::List(names) => TestSelection::parse(names.iter().map(String::as_str)),
        }
    }
}

/// Settings for one `adv-qc check` run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QcConfig {
    /// Checks to run. Unset means the run is rejected, not that all checks run.
    pub tests: Option<TestsConfig>,
    /// Print per-check diagnostics.
    pub verbose: bool,
    /// Column used to slice the input table into windows.
    pub window_column: String,
    /// Constant reference velocity for the frozen-turbulence check.
    pub reference_velocity: Option<f64>,
    /// Check thresholds.
    pub params: CheckParams,
}

impl Default for QcConfig {
    fn default() -> Self {
        Self {
            tests: None,
            verbose: false,
            window_column: columns::WINDOW_INDEX.to_string(),
            reference_velocity: None,
            params: CheckParams::default(),
        }
    }
}

impl QcConfig {
    /// Loads and validates a configuration file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parses and validates a YAML configuration.
    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        let config: QcConfig = serde_yaml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// The checks to run, or `InvalidArgument` if `tests` was never set.
    pub fn selection(&self) -> Result<TestSelection, DispatchError> {
        self.tests
            .as_ref()
            .map(TestsConfig::to_selection)
            .ok_or_else(|| {
                DispatchError::InvalidArgument(format!(
                    "no tests specified; pass \"{}\" to run every available check",
                    ALL_TESTS
                ))
            })
    }

    /// Rejects values that cannot describe a meaningful run.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.window_column.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "window_column".to_string(),
                reason: "must not be empty".to_string(),
            });
        }
        if let Some(v) = self.reference_velocity {
            if !v.is_finite() {
                return Err(ConfigError::InvalidValue {
                    field: "reference_velocity".to_string(),
                    reason: format!("must be a finite number, got {}", v),
                });
            }
        }
        Ok(())
    }
}
