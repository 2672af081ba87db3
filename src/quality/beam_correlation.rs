//! Beam correlation check.
//!
//! Discards a burst when the mean correlation of any beam drops below the
//! acceptable level (Lien & D'Asaro 2006).

use tracing::debug;

use super::params::{validate_percent, CheckContext};
use super::stats::{any_below, column_means};
use crate::chunk::{columns, Chunk};
use crate::error::CheckError;

/// Returns `true` if any per-beam mean `correlation.*` is below
/// `correlation_threshold`.
pub fn beam_correlation_check(chunk: &Chunk, ctx: &CheckContext<'_>) -> Result<bool, CheckError> {
    let threshold = ctx.params.correlation_threshold;
    validate_percent("correlation_threshold", threshold)?;

    let means = column_means(chunk, columns::CORRELATIONS)?;
    let failed = any_below(&means, threshold);
    debug!(?means, threshold, failed, "Beam correlation check");
    Ok(failed)
}
