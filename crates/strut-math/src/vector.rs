//! Vector algebra on top of [`glam::DVec3`].
//!
//! glam supplies the arithmetic (add, sub, scale, dot, cross, length); this
//! module adds the fallible normalization and tolerance-based comparisons
//! the curve kernel is built on.

use strut_core::{Result, StrutError, Tolerance};

use crate::Vector3;

/// Vectors shorter than this cannot be normalized.
const MIN_NORMALIZABLE_LENGTH: f64 = 1e-12;

pub trait VectorExt: Sized {
    /// Unit vector in the same direction, or [`StrutError::DegenerateVector`]
    /// when the length is (almost) zero.
    fn normalized(self) -> Result<Self>;

    /// Normalized sum of two vectors. Used for miter bisectors.
    fn average(self, other: Self) -> Result<Self>;

    /// Equality within the default linear tolerance.
    fn is_almost_equal_to(self, other: Self) -> bool;

    /// Equality within an explicit linear tolerance.
    fn is_almost_equal_within(self, other: Self, tolerance: Tolerance) -> bool;

    /// Whether two non-zero vectors point along the same line.
    fn is_parallel_to(self, other: Self, tolerance: Tolerance) -> bool;
}

impl VectorExt for Vector3 {
    fn normalized(self) -> Result<Self> {
        let length = self.length();
        if !length.is_finite() || length < MIN_NORMALIZABLE_LENGTH {
            return Err(StrutError::DegenerateVector);
        }
        Ok(self / length)
    }

    fn average(self, other: Self) -> Result<Self> {
        (self + other).normalized()
    }

    fn is_almost_equal_to(self, other: Self) -> bool {
        self.is_almost_equal_within(other, Tolerance::default())
    }

    fn is_almost_equal_within(self, other: Self, tolerance: Tolerance) -> bool {
        self.distance(other) <= tolerance.linear
    }

    fn is_parallel_to(self, other: Self, tolerance: Tolerance) -> bool {
        match (self.normalized(), other.normalized()) {
            (Ok(a), Ok(b)) => tolerance.is_angular_zero(a.cross(b).length()),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use glam::dvec3;

    #[test]
    fn test_normalized() {
        let v = dvec3(3.0, 0.0, 4.0).normalized().unwrap();
        assert_relative_eq!(v.length(), 1.0);
        assert_relative_eq!(v.x, 0.6);
        assert_relative_eq!(v.z, 0.8);
    }

    #[test]
    fn test_normalize_zero_fails() {
        assert_eq!(Vector3::ZERO.normalized(), Err(StrutError::DegenerateVector));
        assert_eq!(
            dvec3(f64::NAN, 0.0, 0.0).normalized(),
            Err(StrutError::DegenerateVector)
        );
    }

    #[test]
    fn test_average_is_bisector() {
        let bisector = Vector3::X.average(Vector3::Y).unwrap();
        let expected = dvec3(1.0, 1.0, 0.0) / 2f64.sqrt();
        assert!(bisector.is_almost_equal_to(expected));
    }

    #[test]
    fn test_average_of_opposites_is_degenerate() {
        assert!(Vector3::X.average(-Vector3::X).is_err());
    }

    #[test]
    fn test_almost_equal() {
        let a = dvec3(1.0, 2.0, 3.0);
        assert!(a.is_almost_equal_to(a + Vector3::splat(1e-11)));
        assert!(!a.is_almost_equal_to(a + Vector3::splat(1e-6)));
        assert!(a.is_almost_equal_within(a + Vector3::splat(1e-6), Tolerance::loose()));
    }

    #[test]
    fn test_parallel() {
        let tol = Tolerance::default();
        assert!(Vector3::Z.is_parallel_to(dvec3(0.0, 0.0, -7.0), tol));
        assert!(!Vector3::Z.is_parallel_to(Vector3::X, tol));
        assert!(!Vector3::Z.is_parallel_to(Vector3::ZERO, tol));
    }
}
