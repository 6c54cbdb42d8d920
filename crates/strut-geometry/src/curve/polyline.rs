//! Open piecewise-linear curve.

use serde::Serialize;
use strut_core::traits::{BoundingBox, Reversible, Validate};
use strut_core::{Result, Tolerance};
use strut_math::{BBox3, Point3, Transform, Vector3};

use super::{chain, frame, Line};

/// An open chain of line segments through at least two distinct vertices,
/// traversed in vertex order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Polyline {
    vertices: Vec<Point3>,
    #[serde(skip)]
    tolerance: Tolerance,
}

impl Polyline {
    pub const TYPE_TAG: &'static str = "elements.geometry.polyline";

    /// Fails with [`strut_core::StrutError::DuplicateVertex`] when any two
    /// vertices are almost equal.
    pub fn new(vertices: Vec<Point3>) -> Result<Self> {
        Self::with_tolerance(vertices, Tolerance::default())
    }

    pub fn with_tolerance(vertices: Vec<Point3>, tolerance: Tolerance) -> Result<Self> {
        let polyline = Self { vertices, tolerance };
        polyline.validate(tolerance)?;
        Ok(polyline)
    }

    pub(crate) fn from_distinct(vertices: Vec<Point3>, tolerance: Tolerance) -> Self {
        Self { vertices, tolerance }
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

    pub fn end(&self) -> Point3 {
        self.vertices[self.vertices.len() - 1]
    }

    pub fn length(&self) -> f64 {
        chain::length(&self.vertices, false)
    }

    pub fn segments(&self) -> Vec<Line> {
        chain::edges(&self.vertices, false)
            .map(|(a, b)| Line::from_distinct(a, b, self.tolerance))
            .collect()
    }

    /// Point at normalized arc length `u`.
    pub fn point_at(&self, u: f64) -> Result<Point3> {
        let station = chain::station_at(&self.vertices, false, u, self.tolerance)?;
        Ok(station.point)
    }

    pub fn transform_at(&self, u: f64) -> Result<Transform> {
        self.transform_at_with_up(u, frame::WORLD_UP)
    }

    /// Frame at normalized arc length `u`. On a vertex the frame is mitered
    /// between the adjacent segments; elsewhere z follows the segment.
    pub fn transform_at_with_up(&self, u: f64, up: Vector3) -> Result<Transform> {
        let up = frame::unit_up(up)?;
        let station = chain::station_at(&self.vertices, false, u, self.tolerance)?;
        match station.vertex {
            Some(i) => frame::vertex_frame(&self.vertices, false, i, up, self.tolerance),
            None => {
                let a = self.vertices[station.edge];
                let b = self.vertices[station.edge + 1];
                frame::frame_along(station.point, b - a, up, self.tolerance)
            }
        }
    }

    /// One frame per vertex; the first and last move inward by the setbacks.
    pub fn frames(&self, start_setback: f64, end_setback: f64) -> Result<Vec<Transform>> {
        let mut frames =
            frame::vertex_frames(&self.vertices, false, frame::WORLD_UP, self.tolerance)?;
        frame::apply_setbacks(&mut frames, &self.vertices, start_setback, end_setback)?;
        Ok(frames)
    }
}

impl Validate for Polyline {
    fn validate(&self, tolerance: Tolerance) -> Result<()> {
        chain::validate_vertices(&self.vertices, 2, tolerance)
    }
}

impl Reversible for Polyline {
    fn reversed(&self) -> Self {
        Self {
            vertices: self.vertices.iter().rev().copied().collect(),
            tolerance: self.tolerance,
        }
    }
}

impl BoundingBox for Polyline {
    type Bounds = BBox3;

    fn bounds(&self) -> BBox3 {
        chain::bounds(&self.vertices)
    }
}
