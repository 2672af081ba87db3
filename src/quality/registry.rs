//! Registry of available quality checks.
//!
//! Every check is a variant of [`QualityCheck`] mapped to a function with the
//! shared [`CheckFn`] signature. Adding a check means adding a variant, its
//! name, and its entry in [`QualityCheck::ALL`].

use std::fmt;
use std::str::FromStr;

use super::beam_correlation::beam_correlation_check;
use super::frozen_turbulence::frozen_turbulence_check;
use super::params::CheckContext;
use super::signal_noise::signal_noise_check;
use crate::chunk::Chunk;
use crate::error::{CheckError, DispatchError};

/// Shared signature of every quality check. `Ok(true)` means the chunk failed.
pub type CheckFn = fn(&Chunk, &CheckContext<'_>) -> Result<bool, CheckError>;

/// The known quality checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QualityCheck {
    SignalNoise,
    BeamCorrelation,
    FrozenTurbulence,
}

impl QualityCheck {
    /// All checks in registry order.
    pub const ALL: [QualityCheck; 3] = [
        QualityCheck::SignalNoise,
        QualityCheck::BeamCorrelation,
        QualityCheck::FrozenTurbulence,
    ];

    /// Registered name of the check.
    pub fn name(&self) -> &'static str {
        match self {
            QualityCheck::SignalNoise => "signal.noise_check_adv",
            QualityCheck::BeamCorrelation => "beam.correlation_check_adv",
            QualityCheck::FrozenTurbulence => "frozen.turbulence_check_adv",
        }
    }

    /// The function implementing the check.
    pub fn function(&self) -> CheckFn {
        match self {
            QualityCheck::SignalNoise => signal_noise_check,
            QualityCheck::BeamCorrelation => beam_correlation_check,
            QualityCheck::FrozenTurbulence => frozen_turbulence_check,
        }
    }

    /// Parameters of [`CheckParams`](super::CheckParams) this check reads.
    pub fn declared_params(&self) -> &'static [&'static str] {
        match self {
            QualityCheck::SignalNoise => &["signal_threshold"],
            QualityCheck::BeamCorrelation => &["correlation_threshold"],
            QualityCheck::FrozenTurbulence => &[],
        }
    }

    /// Runs the check against a chunk.
    pub fn run(&self, chunk: &Chunk, ctx: &CheckContext<'_>) -> Result<bool, CheckError> {
        (self.function())(chunk, ctx)
    }
}

impl fmt::Display for QualityCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for QualityCheck {
    type Err = DispatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        QualityCheck::ALL
            .into_iter()
            .find(|check| check.name() == s)
            .ok_or_else(|| DispatchError::UnknownCheck {
                name: s.to_string(),
                available: available_checks_listing(),
            })
    }
}

/// Names of all available checks, in registry order.
pub fn available_checks() -> Vec<&'static str> {
    QualityCheck::ALL.iter().map(|c| c.name()).collect()
}

/// Available check names joined one per line, for error messages.
pub(crate) fn available_checks_listing() -> String {
    available_checks().join("\n")
}
