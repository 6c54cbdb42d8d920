use crate::vector::VectorExt;
use crate::{DAffine3, DMat3, Point3, Vector3};
use serde::{Deserialize, Serialize};
use strut_core::{Result, StrutError, Tolerance};

/// Rigid coordinate frame: an origin and an orthonormal, right-handed basis.
///
/// Applying a transform maps a point from the frame's local space into its
/// parent space. For frames produced along a curve, `z_axis` is tangent to
/// the curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub origin: Point3,
    pub x_axis: Vector3,
    pub y_axis: Vector3,
    pub z_axis: Vector3,
}

impl Transform {
    pub fn identity() -> Self {
        Self::from_translation(Vector3::ZERO)
    }

    pub fn from_translation(t: Vector3) -> Self {
        Self {
            origin: t,
            x_axis: Vector3::X,
            y_axis: Vector3::Y,
            z_axis: Vector3::Z,
        }
    }

    /// Build a frame at `origin` from a z direction and an approximate x
    /// direction. `x` is re-orthogonalized against `z` and `y = z x x`.
    pub fn from_x_and_z(origin: Point3, x: Vector3, z: Vector3) -> Result<Self> {
        let z_axis = z.normalized()?;
        let x_axis = (x - z_axis * x.dot(z_axis)).normalized().map_err(|_| {
            StrutError::DegenerateGeometry(
                "the transform could not be created: x and z axes are parallel".into(),
            )
        })?;
        Ok(Self {
            origin,
            x_axis,
            y_axis: z_axis.cross(x_axis),
            z_axis,
        })
    }

    pub fn from_affine(affine: DAffine3) -> Self {
        Self {
            origin: affine.translation,
            x_axis: affine.matrix3.x_axis,
            y_axis: affine.matrix3.y_axis,
            z_axis: affine.matrix3.z_axis,
        }
    }

    pub fn to_affine(&self) -> DAffine3 {
        DAffine3 {
            matrix3: DMat3::from_cols(self.x_axis, self.y_axis, self.z_axis),
            translation: self.origin,
        }
    }

    /// Map a point from local to parent space.
    pub fn transform_point(&self, p: Point3) -> Point3 {
        self.origin + self.transform_vector(p)
    }

    /// Map a direction from local to parent space (no translation).
    pub fn transform_vector(&self, v: Vector3) -> Vector3 {
        self.x_axis * v.x + self.y_axis * v.y + self.z_axis * v.z
    }

    pub fn transform_points(&self, points: &[Point3]) -> Vec<Point3> {
        points.iter().map(|&p| self.transform_point(p)).collect()
    }

    /// Nest `child` inside this frame: the result maps a point through
    /// `child` first and then through `self`.
    pub fn compose(&self, child: &Transform) -> Transform {
        Self {
            origin: self.transform_point(child.origin),
            x_axis: self.transform_vector(child.x_axis),
            y_axis: self.transform_vector(child.y_axis),
            z_axis: self.transform_vector(child.z_axis),
        }
    }

    /// Apply `self`, then `other`.
    pub fn then(&self, other: &Transform) -> Transform {
        other.compose(self)
    }

    pub fn inverse(&self) -> Option<Transform> {
        let affine = self.to_affine();
        if affine.matrix3.determinant().abs() < 1e-15 {
            None
        } else {
            Some(Self::from_affine(affine.inverse()))
        }
    }

    /// Whether the basis is orthonormal and right-handed within `tolerance`.
    pub fn is_orthonormal(&self, tolerance: Tolerance) -> bool {
        let unit = |v: Vector3| (v.length() - 1.0).abs() <= tolerance.linear.max(1e-12);
        let orthogonal = |a: Vector3, b: Vector3| a.dot(b).abs() <= tolerance.linear.max(1e-12);
        unit(self.x_axis)
            && unit(self.y_axis)
            && unit(self.z_axis)
            && orthogonal(self.x_axis, self.y_axis)
            && orthogonal(self.y_axis, self.z_axis)
            && orthogonal(self.z_axis, self.x_axis)
            && self
                .x_axis
                .cross(self.y_axis)
                .is_almost_equal_within(self.z_axis, Tolerance::loose())
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}
