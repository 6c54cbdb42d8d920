use crate::vector::VectorExt;
use crate::{Point3, Vector3};
use serde::{Deserialize, Serialize};
use strut_core::{Result, StrutError, Tolerance};

/// A plane in 3D space defined by a point and a unit normal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Plane {
    pub origin: Point3,
    pub normal: Vector3,
}

impl Plane {
    /// Construct a plane from an origin and normal. The normal is scaled to
    /// unit length; passing a zero vector is a caller error.
    pub fn new(origin: Point3, normal: Vector3) -> Self {
        Self {
            origin,
            normal: normal.normalize(),
        }
    }

    /// Construct a plane through three points with `origin = a` and normal
    /// `(b - a) x (c - a)`.
    ///
    /// Fails with [`StrutError::DegenerateGeometry`] when any two points
    /// coincide or the three points are collinear.
    pub fn from_points(a: Point3, b: Point3, c: Point3) -> Result<Self> {
        Self::from_points_with_tolerance(a, b, c, Tolerance::default())
    }

    pub fn from_points_with_tolerance(
        a: Point3,
        b: Point3,
        c: Point3,
        tolerance: Tolerance,
    ) -> Result<Self> {
        let normal = normal_through(a, b, c, tolerance)?;
        Ok(Self { origin: a, normal })
    }

    /// Construct a plane at `origin` whose normal is derived from the first
    /// three of `points`; the rest are ignored.
    pub fn from_origin_and_points(origin: Point3, points: &[Point3]) -> Result<Self> {
        match points {
            [a, b, c, ..] => Ok(Self {
                origin,
                normal: normal_through(*a, *b, *c, Tolerance::default())?,
            }),
            _ => Err(StrutError::InvalidArgument(format!(
                "a plane requires at least 3 points, {} supplied",
                points.len()
            ))),
        }
    }

    pub fn xy() -> Self {
        Self::new(Point3::ZERO, Vector3::Z)
    }

    pub fn xz() -> Self {
        Self::new(Point3::ZERO, Vector3::Y)
    }

    pub fn yz() -> Self {
        Self::new(Point3::ZERO, Vector3::X)
    }

    /// Signed distance from a point to this plane.
    pub fn signed_distance(&self, point: Point3) -> f64 {
        (point - self.origin).dot(self.normal)
    }

    /// Project a point onto this plane.
    pub fn project_point(&self, point: Point3) -> Point3 {
        point - self.normal * self.signed_distance(point)
    }
}

fn normal_through(a: Point3, b: Point3, c: Point3, tolerance: Tolerance) -> Result<Vector3> {
    if a.is_almost_equal_within(b, tolerance)
        || a.is_almost_equal_within(c, tolerance)
        || b.is_almost_equal_within(c, tolerance)
    {
        return Err(StrutError::DegenerateGeometry(
            "the plane could not be created: the points must not be coincident".into(),
        ));
    }
    let ab = (b - a).normalized()?;
    let ac = (c - a).normalized()?;
    ab.cross(ac).normalized().map_err(|_| {
        StrutError::DegenerateGeometry(
            "the plane could not be created: the points are collinear".into(),
        )
    })
}
