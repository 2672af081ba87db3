//! Frozen turbulence check.
//!
//! The frozen turbulence hypothesis holds while the RMS of the fluctuating
//! vertical velocity stays small relative to the advection velocity `V`.
//! The cutoff `(rms / V)^3 < 1` follows from Lagrangian-float dissipation
//! theory and is not configurable.

use tracing::debug;

use super::params::CheckContext;
use crate::chunk::{columns, Chunk};
use crate::error::CheckError;

/// Returns `true` if `(rms(w') / V)^3 >= 1` for the chunk's `velocity.Z`.
///
/// Missing `velocity.Z` samples are rejected rather than skipped, since the
/// RMS is taken over every sample of the window.
///
/// `V` is not guarded against zero: a zero reference velocity yields an
/// infinite ratio (failure), or `NaN` (pass) if the series is also constant.
pub fn frozen_turbulence_check(chunk: &Chunk, ctx: &CheckContext<'_>) -> Result<bool, CheckError> {
    let provider = ctx.velocity.ok_or(CheckError::MissingReferenceVelocity)?;

    let w = chunk.column(columns::VELOCITY_Z)?;
    if w.iter().any(|v| v.is_nan()) {
        return Err(CheckError::MissingValues(columns::VELOCITY_Z.to_string()));
    }
    let mean = w
        .mean()
        .ok_or_else(|| CheckError::EmptySeries(columns::VELOCITY_Z.to_string()))?;

    let n = w.len() as f64;
    let rms = (w.mapv(|x| (x - mean).powi(2)).sum() / n).sqrt();

    let reference = provider.reference_velocity(chunk);
    let ratio = (rms / reference).powi(3);
    let failed = ratio >= 1.0;
    debug!(rms, reference, ratio, failed, "Frozen turbulence check");
    Ok(failed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::velocity::FixedVelocity;

    fn create_chunk() -> Chunk {
        Chunk::from_columns([(columns::VELOCITY_Z, vec![1.0, -1.0, 1.0, -1.0])])
            .expect("valid chunk")
    }

    fn run(chunk: &Chunk, v: f64) -> Result<bool, CheckError> {
        let provider = FixedVelocity(v);
        let ctx = CheckContext::default().with_velocity(&provider);
        frozen_turbulence_check(chunk, &ctx)
    }

    #[test]
    fn test_fast_advection_passes() {
        assert!(!run(&create_chunk(), 2.0).expect("check runs"));
    }

    #[test]
    fn test_slow_advection_fails() {
        assert!(run(&create_chunk(), 0.5).expect("check runs"));
    }

    #[test]
    fn test_ratio_of_one_fails() {
        assert!(run(&create_chunk(), 1.0).expect("check runs"));
    }

    #[test]
    fn test_mean_is_removed() {
        let chunk = Chunk::from_columns([(columns::VELOCITY_Z, vec![11.0, 9.0, 11.0, 9.0])])
            .expect("valid chunk");
        assert!(!run(&chunk, 2.0).expect("check runs"));
    }

    #[test]
    fn test_zero_reference_velocity() {
        assert!(run(&create_chunk(), 0.0).expect("check runs"));

        let still = Chunk::from_columns([(columns::VELOCITY_Z, vec![0.5, 0.5])]).expect("ok");
        assert!(!run(&still, 0.0).expect("check runs"));
    }

    #[test]
    fn test_missing_sample_rejected() {
        // Without the gap the ratio would be far above one
        let chunk = Chunk::from_columns([(columns::VELOCITY_Z, vec![5.0, -5.0, f64::NAN, 5.0])])
            .expect("valid chunk");
        let err = run(&chunk, 0.5).unwrap_err();
        assert!(matches!(err, CheckError::MissingValues(ref c) if c == columns::VELOCITY_Z));
    }

    #[test]
    fn test_requires_velocity_provider() {
        let err = frozen_turbulence_check(&create_chunk(), &CheckContext::default()).unwrap_err();
        assert!(matches!(err, CheckError::MissingReferenceVelocity));
    }

    #[test]
    fn test_empty_series() {
        let chunk = Chunk::from_columns([(columns::VELOCITY_Z, Vec::new())]).expect("ok");
        assert!(matches!(run(&chunk, 1.0), Err(CheckError::EmptySeries(_))));
    }

    #[test]
    fn test_closure_provider_sees_chunk() {
        let chunk = create_chunk();
        let provider = |c: &Chunk| c.len() as f64;
        let ctx = CheckContext::default().with_velocity(&provider);
        // rms 1, V 4
        assert!(!frozen_turbulence_check(&chunk, &ctx).expect("check runs"));
    }
}
