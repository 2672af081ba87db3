//! Small statistics helpers over chunk columns.

use ndarray::Array1;

use crate::chunk::Chunk;
use crate::error::CheckError;

/// Arithmetic mean ignoring `NaN` samples.
///
/// Returns `None` when every sample is missing.
pub fn nan_mean(values: &Array1<f64>) -> Option<f64> {
    let (sum, count) = values
        .iter()
        .filter(|v| !v.is_nan())
        .fold((0.0_f64, 0usize), |(sum, count), v| (sum + v, count + 1));
    if count == 0 {
        None
    } else {
        Some(sum / count as f64)
    }
}

/// Means of several columns, ignoring missing samples.
pub(crate) fn column_means<const N: usize>(
    chunk: &Chunk,
    names: [&str; N],
) -> Result<[f64; N], CheckError> {
    let mut means = [0.0; N];
    for (slot, name) in means.iter_mut().zip(names) {
        *slot = nan_mean(chunk.column(name)?)
            .ok_or_else(|| CheckError::NoValidSamples(name.to_string()))?;
    }
    Ok(means)
}

/// True if any mean is strictly below `threshold`.
pub(crate) fn any_below(means: &[f64], threshold: f64) -> bool {
    means.iter().any(|&m| m < threshold)
}
