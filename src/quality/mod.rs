//! Quality checks for ADV bursts.
//!
//! This module provides the three burst checks (signal-to-noise, beam
//! correlation, frozen turbulence), the registry that names them, and the
//! dispatcher that runs a selection of them over a chunk.

mod beam_correlation;
mod dispatch;
mod frozen_turbulence;
mod params;
mod registry;
mod report;
mod signal_noise;
pub mod stats;

pub use beam_correlation::beam_correlation_check;
pub use dispatch::{check_adv, check_adv_to, run_checks, TestSelection, ALL_TESTS};
pub use frozen_turbulence::frozen_turbulence_check;
pub use params::{
    CheckContext, CheckParams, DEFAULT_CORRELATION_THRESHOLD, DEFAULT_SIGNAL_THRESHOLD,
};
pub use registry::{available_checks, CheckFn, QualityCheck};
pub use report::{format_diagnostics, CheckOutcome, ChunkReport};
pub use signal_noise::signal_noise_check;
