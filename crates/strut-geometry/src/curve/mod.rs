//! Curve variants and the operations shared by all of them.
//!
//! Every curve is parameterized over `[0, 1]` by normalized arc length and
//! is immutable once constructed: reversal and transformation return new
//! curves.

mod chain;
mod frame;
mod line;
mod polygon;
mod polyline;

use strut_core::traits::{BoundingBox, Reversible};
use strut_core::{Result, Tolerance};
use strut_math::{BBox3, Point3, Transform, Vector3};

pub use frame::WORLD_UP;
pub use line::Line;
pub use polygon::Polygon;
pub use polyline::Polyline;

/// A curve of any supported kind.
#[derive(Debug, Clone, PartialEq)]
pub enum Curve {
    Line(Line),
    Polyline(Polyline),
    Polygon(Polygon),
}

impl Curve {
    /// The stable, lower-case tag identifying this curve kind in documents.
    pub fn type_tag(&self) -> &'static str {
        match self {
            Curve::Line(_) => Line::TYPE_TAG,
            Curve::Polyline(_) => Polyline::TYPE_TAG,
            Curve::Polygon(_) => Polygon::TYPE_TAG,
        }
    }

    pub fn length(&self) -> f64 {
        match self {
            Curve::Line(c) => c.length(),
            Curve::Polyline(c) => c.length(),
            Curve::Polygon(c) => c.length(),
        }
    }

    pub fn start(&self) -> Point3 {
        match self {
            Curve::Line(c) => c.start(),
            Curve::Polyline(c) => c.start(),
            Curve::Polygon(c) => c.start(),
        }
    }

    pub fn end(&self) -> Point3 {
        match self {
            Curve::Line(c) => c.end(),
            Curve::Polyline(c) => c.end(),
            Curve::Polygon(c) => c.end(),
        }
    }

    /// The tolerance the curve was validated with.
    pub fn tolerance(&self) -> Tolerance {
        match self {
            Curve::Line(c) => c.tolerance(),
            Curve::Polyline(c) => c.tolerance(),
            Curve::Polygon(c) => c.tolerance(),
        }
    }

    pub fn is_closed(&self) -> bool {
        matches!(self, Curve::Polygon(_))
    }

    /// Point at parameter `u` in `[0, 1]`.
    pub fn point_at(&self, u: f64) -> Result<Point3> {
        match self {
            Curve::Line(c) => c.point_at(u),
            Curve::Polyline(c) => c.point_at(u),
            Curve::Polygon(c) => c.point_at(u),
        }
    }

    /// Frame at parameter `u` with its z axis tangent to the curve, using
    /// [`WORLD_UP`] as the up vector.
    pub fn transform_at(&self, u: f64) -> Result<Transform> {
        self.transform_at_with_up(u, WORLD_UP)
    }

    pub fn transform_at_with_up(&self, u: f64, up: Vector3) -> Result<Transform> {
        match self {
            Curve::Line(c) => c.transform_at_with_up(u, up),
            Curve::Polyline(c) => c.transform_at_with_up(u, up),
            Curve::Polygon(c) => c.transform_at_with_up(u, up),
        }
    }

    /// One frame per vertex, for sweeping a cross-section along the curve.
    pub fn frames(&self, start_setback: f64, end_setback: f64) -> Result<Vec<Transform>> {
        match self {
            Curve::Line(c) => c.frames(start_setback, end_setback),
            Curve::Polyline(c) => c.frames(start_setback, end_setback),
            Curve::Polygon(c) => c.frames(start_setback, end_setback),
        }
    }

    /// The points defining the curve, in traversal order.
    pub fn vertices(&self) -> Vec<Point3> {
        match self {
            Curve::Line(c) => vec![c.start(), c.end()],
            Curve::Polyline(c) => c.vertices().to_vec(),
            Curve::Polygon(c) => c.vertices().to_vec(),
        }
    }
}

impl Reversible for Curve {
    fn reversed(&self) -> Self {
        match self {
            Curve::Line(c) => Curve::Line(c.reversed()),
            Curve::Polyline(c) => Curve::Polyline(c.reversed()),
            Curve::Polygon(c) => Curve::Polygon(c.reversed()),
        }
    }
}

impl BoundingBox for Curve {
    type Bounds = BBox3;

    fn bounds(&self) -> BBox3 {
        match self {
            Curve::Line(c) => c.bounds(),
            Curve::Polyline(c) => c.bounds(),
            Curve::Polygon(c) => c.bounds(),
        }
    }
}

impl From<Line> for Curve {
    fn from(line: Line) -> Self {
        Curve::Line(line)
    }
}

impl From<Polyline> for Curve {
    fn from(polyline: Polyline) -> Self {
        Curve::Polyline(polyline)
    }
}

impl From<Polygon> for Curve {
    fn from(polygon: Polygon) -> Self {
        Curve::Polygon(polygon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strut_core::StrutError;
    use strut_math::dvec3;

    fn all_kinds() -> Vec<Curve> {
        let a = dvec3(0.0, 0.0, 0.0);
        let b = dvec3(4.0, 0.0, 0.0);
        let c = dvec3(4.0, 3.0, 0.0);
        vec![
            Line::new(a, b).unwrap().into(),
            Polyline::new(vec![a, b, c]).unwrap().into(),
            Polygon::new(vec![a, b, c]).unwrap().into(),
        ]
    }

    #[test]
    fn test_type_tags_are_distinct() {
        let tags: Vec<_> = all_kinds().iter().map(Curve::type_tag).collect();
        assert_eq!(
            tags,
            vec![
                "elements.geometry.line",
                "elements.geometry.polyline",
                "elements.geometry.polygon"
            ]
        );
    }

    #[test]
    fn test_out_of_range_parameter_fails_for_every_kind() {
        for curve in all_kinds() {
            for u in [-0.1, 1.5, f64::NAN] {
                assert!(matches!(curve.point_at(u), Err(StrutError::ParameterRange(_))));
                assert!(matches!(curve.transform_at(u), Err(StrutError::ParameterRange(_))));
            }
        }
    }

    #[test]
    fn test_double_reversal_is_identity() {
        for curve in all_kinds() {
            assert_eq!(curve.reversed().reversed(), curve);
        }
    }

    #[test]
    fn test_lengths() {
        let lengths: Vec<_> = all_kinds().iter().map(Curve::length).collect();
        assert_eq!(lengths, vec![4.0, 7.0, 12.0]);
    }

    #[test]
    fn test_closed_curve_ends_at_start() {
        let curves = all_kinds();
        assert!(curves[2].is_closed());
        assert_eq!(curves[2].end(), curves[2].start());
        assert!(!curves[1].is_closed());
        assert_eq!(curves[1].end(), dvec3(4.0, 3.0, 0.0));
    }

    #[test]
    fn test_bounds() {
        let bounds = all_kinds()[1].bounds();
        assert_eq!(bounds.min, Point3::ZERO);
        assert_eq!(bounds.max, dvec3(4.0, 3.0, 0.0));
    }
}
