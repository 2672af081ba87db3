//! Signal-to-noise ratio check.
//!
//! A burst is too noisy if the mean signal-to-noise ratio of any axis falls
//! below the acceptable ratio (Kitaigorodskii et al. 1983; Vachon et al. 2010).

use tracing::debug;

use super::params::{validate_percent, CheckContext};
use super::stats::{any_below, column_means};
use crate::chunk::{columns, Chunk};
use crate::error::CheckError;

/// Returns `true` if any per-axis mean `signal.rat.*` is below
/// `signal_threshold`.
pub fn signal_noise_check(chunk: &Chunk, ctx: &CheckContext<'_>) -> Result<bool, CheckError> {
    let threshold = ctx.params.signal_threshold;
    validate_percent("signal_threshold", threshold)?;

    let means = column_means(chunk, columns::SIGNAL_RATIOS)?;
    let failed = any_below(&means, threshold);
    debug!(?means, threshold, failed, "Signal-to-noise check");
    Ok(failed)
}
