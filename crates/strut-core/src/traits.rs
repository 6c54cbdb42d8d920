use crate::error::Result;
use crate::tolerance::Tolerance;

/// Check construction-time invariants of a geometric entity against a tolerance.
pub trait Validate {
    fn validate(&self, tolerance: Tolerance) -> Result<()>;
}

/// Compute an axis-aligned bounding volume.
pub trait BoundingBox {
    type Bounds;
    fn bounds(&self) -> Self::Bounds;
}

/// Produce a copy traversed in the opposite direction.
pub trait Reversible: Sized {
    fn reversed(&self) -> Self;
}
