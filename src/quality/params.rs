//! Parameters and invocation context shared by the quality checks.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::CheckError;
use crate::velocity::ReferenceVelocity;

/// Default minimum mean signal-to-noise ratio per axis.
pub const DEFAULT_SIGNAL_THRESHOLD: f64 = 15.0;

/// Default minimum mean beam correlation (percent).
pub const DEFAULT_CORRELATION_THRESHOLD: f64 = 90.0;

/// Tunable thresholds forwarded to the checks that declare them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckParams {
    /// Used by the signal-to-noise check.
    pub signal_threshold: f64,
    /// Used by the beam-correlation check.
    pub correlation_threshold: f64,
}

impl Default for CheckParams {
    fn default() -> Self {
        Self {
            signal_threshold: DEFAULT_SIGNAL_THRESHOLD,
            correlation_threshold: DEFAULT_CORRELATION_THRESHOLD,
        }
    }
}

impl CheckParams {
    /// Sets the signal-to-noise threshold.
    pub fn with_signal_threshold(mut self, threshold: f64) -> Self {
        self.signal_threshold = threshold;
        self
    }

    /// Sets the beam-correlation threshold.
    pub fn with_correlation_threshold(mut self, threshold: f64) -> Self {
        self.correlation_threshold = threshold;
        self
    }

    /// Names of parameters that differ from their defaults.
    pub(crate) fn overridden(&self) -> Vec<&'static str> {
        let defaults = Self::default();
        let mut names = Vec::new();
        if self.signal_threshold != defaults.signal_threshold {
            names.push("signal_threshold");
        }
        if self.correlation_threshold != defaults.correlation_threshold {
            names.push("correlation_threshold");
        }
        names
    }
}

/// Checks that a percentage threshold lies within [0, 100].
pub(crate) fn validate_percent(name: &str, value: f64) -> Result<(), CheckError> {
    if (0.0..=100.0).contains(&value) {
        Ok(())
    } else {
        Err(CheckError::InvalidArgument(format!(
            "{} must be between 0 and 100, got {}",
            name, value
        )))
    }
}

/// Everything a check receives besides the chunk itself.
#[derive(Clone, Copy, Default)]
pub struct CheckContext<'a> {
    pub params: CheckParams,
    pub velocity: Option<&'a dyn ReferenceVelocity>,
}

impl<'a> CheckContext<'a> {
    /// Creates a context with the given parameters and no velocity provider.
    pub fn new(params: CheckParams) -> Self {
        Self {
            params,
            velocity: None,
        }
    }

    /// Attaches the reference velocity provider used by the frozen-turbulence check.
    pub fn with_velocity(mut self, velocity: &'a dyn ReferenceVelocity) -> Self {
        self.velocity = Some(velocity);
        self
    }
}

impl fmt::Debug for CheckContext<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CheckContext")
            .field("params", &self.params)
            .field("velocity", &self.velocity.map(|_| "<provider>"))
            .finish()
    }
}
