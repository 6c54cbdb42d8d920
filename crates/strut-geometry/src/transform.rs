//! Placing curves with rigid transforms.

use strut_math::Transform;

use crate::curve::{Curve, Line, Polygon, Polyline};

/// Apply a [`Transform`] to every vertex of a curve, producing a new curve.
///
/// A rigid transform preserves distances, so the result keeps the source
/// curve's invariants and tolerance without re-validation.
pub trait TransformCurves {
    fn of_line(&self, line: &Line) -> Line;
    fn of_polyline(&self, polyline: &Polyline) -> Polyline;
    fn of_polygon(&self, polygon: &Polygon) -> Polygon;

    fn of_curve(&self, curve: &Curve) -> Curve {
        match curve {
            Curve::Line(c) => Curve::Line(self.of_line(c)),
            Curve::Polyline(c) => Curve::Polyline(self.of_polyline(c)),
            Curve::Polygon(c) => Curve::Polygon(self.of_polygon(c)),
        }
    }
}

impl TransformCurves for Transform {
    fn of_line(&self, line: &Line) -> Line {
        Line::from_distinct(
            self.transform_point(line.start()),
            self.transform_point(line.end()),
            line.tolerance(),
        )
    }

    fn of_polyline(&self, polyline: &Polyline) -> Polyline {
        Polyline::from_distinct(self.transform_points(polyline.vertices()), polyline.tolerance())
    }

    fn of_polygon(&self, polygon: &Polygon) -> Polygon {
        Polygon::from_distinct(self.transform_points(polygon.vertices()), polygon.tolerance())
    }
}
