//! Closed piecewise-linear curve.

use serde::Serialize;
use strut_core::traits::{BoundingBox, Reversible, Validate};
use strut_core::{Result, StrutError, Tolerance};
use strut_math::{dvec3, BBox3, Point3, Transform, Vector3};

use super::{chain, frame, Line};

/// A closed chain of at least three distinct vertices. The last vertex
/// connects back to the first, so the curve starts and ends at vertex 0.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Polygon {
    vertices: Vec<Point3>,
    #[serde(skip)]
    tolerance: Tolerance,
}

impl Polygon {
    pub const TYPE_TAG: &'static str = "elements.geometry.polygon";

    pub fn new(vertices: Vec<Point3>) -> Result<Self> {
        Self::with_tolerance(vertices, Tolerance::default())
    }

    pub fn with_tolerance(vertices: Vec<Point3>, tolerance: Tolerance) -> Result<Self> {
        let polygon = Self { vertices, tolerance };
        polygon.validate(tolerance)?;
        Ok(polygon)
    }

    pub(crate) fn from_distinct(vertices: Vec<Point3>, tolerance: Tolerance) -> Self {
        Self { vertices, tolerance }
    }

    /// Counter-clockwise rectangle in the XY plane centered on `center`.
    pub fn rectangle(width: f64, height: f64, center: Point3) -> Result<Self> {
        if !(width > 0.0 && height > 0.0) {
            return Err(StrutError::InvalidArgument(format!(
                "rectangle dimensions must be positive, got {width} x {height}"
            )));
        }
        let (hw, hh) = (width / 2.0, height / 2.0);
        Self::new(vec![
            center + dvec3(-hw, -hh, 0.0),
            center + dvec3(hw, -hh, 0.0),
            center + dvec3(hw, hh, 0.0),
            center + dvec3(-hw, hh, 0.0),
        ])
    }

    pub fn vertices(&self) -> &[Point3] {
        &self.vertices
    }

    /// The tolerance used for validation and for snapping parameters to vertices.
    pub fn tolerance(&self) -> Tolerance {
        self.tolerance
    }

    pub fn start(&self) -> Point3 {
        self.vertices[0]
    }

    /// The closing point, which is the start.
    pub fn end(&self) -> Point3 {
        self.vertices[0]
    }

    /// Perimeter, including the closing segment.
    pub fn length(&self) -> f64 {
        chain::length(&self.vertices, true)
    }

    pub fn segments(&self) -> Vec<Line> {
        chain::edges(&self.vertices, true)
            .map(|(a, b)| Line::from_distinct(a, b, self.tolerance))
            .collect()
    }

    pub fn point_at(&self, u: f64) -> Result<Point3> {
        let station = chain::station_at(&self.vertices, true, u, self.tolerance)?;
        Ok(station.point)
    }

    pub fn transform_at(&self, u: f64) -> Result<Transform> {
        self.transform_at_with_up(u, frame::WORLD_UP)
    }

    pub fn transform_at_with_up(&self, u: f64, up: Vector3) -> Result<Transform> {
        let up = frame::unit_up(up)?;
        let station = chain::station_at(&self.vertices, true, u, self.tolerance)?;
        match station.vertex {
            Some(i) => frame::vertex_frame(&self.vertices, true, i, up, self.tolerance),
            None => {
                let a = self.vertices[station.edge];
                let b = self.vertices[(station.edge + 1) % self.vertices.len()];
                frame::frame_along(station.point, b - a, up, self.tolerance)
            }
        }
    }

    /// One mitered frame per vertex. A closed curve has no ends, so the
    /// setbacks do not apply.
    pub fn frames(&self, _start_setback: f64, _end_setback: f64) -> Result<Vec<Transform>> {
        frame::vertex_frames(&self.vertices, true, frame::WORLD_UP, self.tolerance)
    }
}

impl Validate for Polygon {
    fn validate(&self, tolerance: Tolerance) -> Result<()> {
        chain::validate_vertices(&self.vertices, 3, tolerance)
    }
}

impl Reversible for Polygon {
    fn reversed(&self) -> Self {
        Self {
            vertices: self.vertices.iter().rev().copied().collect(),
            tolerance: self.tolerance,
        }
    }
}

impl BoundingBox for Polygon {
    type Bounds = BBox3;

    fn bounds(&self) -> BBox3 {
        chain::bounds(&self.vertices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use strut_math::VectorExt;

    fn triangle() -> Polygon {
        Polygon::new(vec![Point3::ZERO, dvec3(3.0, 0.0, 0.0), dvec3(0.0, 4.0, 0.0)]).unwrap()
    }

    #[test]
    fn test_length_includes_closing_segment() {
        assert_relative_eq!(triangle().length(), 12.0);
        assert_eq!(triangle().segments().len(), 3);
    }

    #[test]
    fn test_two_vertices_rejected() {
        let err = Polygon::new(vec![Point3::ZERO, Vector3::X]).unwrap_err();
        assert!(matches!(err, StrutError::InvalidArgument(_)));
    }

    #[test]
    fn test_duplicate_vertices_rejected() {
        let err =
            Polygon::new(vec![Point3::ZERO, Vector3::X, Vector3::Y, Point3::ZERO]).unwrap_err();
        assert_eq!(err, StrutError::DuplicateVertex { first: 0, second: 3 });
    }

    #[test]
    fn test_point_at_on_closing_segment() {
        // 3 + 5 along the perimeter reaches (0, 4, 0); 10 is halfway down the closing edge.
        let p = triangle().point_at(10.0 / 12.0).unwrap();
        assert!(p.is_almost_equal_to(dvec3(0.0, 2.0, 0.0)));
        assert_eq!(triangle().point_at(1.0).unwrap(), Point3::ZERO);
    }

    #[test]
    fn test_frames_one_per_vertex() {
        let frames = triangle().frames(0.0, 0.0).unwrap();
        assert_eq!(frames.len(), 3);
        for (frame, vertex) in frames.iter().zip(triangle().vertices()) {
            assert_eq!(frame.origin, *vertex);
            assert!(frame.is_orthonormal(Tolerance::default()));
        }
    }

    #[test]
    fn test_frames_wrap_at_first_vertex() {
        let frames = triangle().frames(0.0, 0.0).unwrap();
        // Arriving from (0,4) heading -Y, leaving along +X.
        let expected = dvec3(1.0, -1.0, 0.0).normalize();
        assert!(frames[0].z_axis.is_almost_equal_to(expected));
    }

    #[test]
    fn test_snapping_follows_construction_tolerance() {
        let vertices = triangle().vertices().to_vec();
        let loose = Polygon::with_tolerance(vertices, Tolerance::loose()).unwrap();
        // 1e-6 along the perimeter from the second vertex at (3, 0, 0).
        let u = (3.0 + 1e-6) / 12.0;
        assert_eq!(loose.point_at(u).unwrap(), dvec3(3.0, 0.0, 0.0));
        assert_ne!(triangle().point_at(u).unwrap(), dvec3(3.0, 0.0, 0.0));
    }

    #[test]
    fn test_transform_at_end_matches_start() {
        let polygon = triangle();
        let start = polygon.transform_at(0.0).unwrap();
        let end = polygon.transform_at(1.0).unwrap();
        assert_eq!(start, end);
    }

    #[test]
    fn test_rectangle() {
        let rect = Polygon::rectangle(4.0, 2.0, dvec3(1.0, 1.0, 0.0)).unwrap();
        assert_eq!(rect.vertices()[0], dvec3(-1.0, 0.0, 0.0));
        assert_eq!(rect.vertices()[2], dvec3(3.0, 2.0, 0.0));
        assert_relative_eq!(rect.length(), 12.0);
        assert!(Polygon::rectangle(0.0, 2.0, Point3::ZERO).is_err());
    }

    #[test]
    fn test_reversed_keeps_closure() {
        let reversed = triangle().reversed();
        assert_eq!(reversed.vertices()[0], dvec3(0.0, 4.0, 0.0));
        assert_relative_eq!(reversed.length(), 12.0);
        assert_eq!(reversed.reversed(), triangle());
    }
}
