//! Reference velocity providers for the frozen-turbulence check.
//!
//! The physical velocity computation lives outside this crate; anything
//! that maps a chunk to a single velocity can be plugged in.

use crate::chunk::Chunk;

/// Supplies the reference (advection) velocity `V` for a chunk.
pub trait ReferenceVelocity {
    fn reference_velocity(&self, chunk: &Chunk) -> f64;
}

/// A constant reference velocity, independent of the chunk contents.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedVelocity(pub f64);

impl ReferenceVelocity for FixedVelocity {
    fn reference_velocity(&self, _chunk: &Chunk) -> f64 {
        self.0
    }
}

impl<F> ReferenceVelocity for F
where
    F: Fn(&Chunk) -> f64,
{
    fn reference_velocity(&self, chunk: &Chunk) -> f64 {
        self(chunk)
    }
}
