//! Line segment curve.

use serde::Serialize;
use strut_core::traits::{BoundingBox, Reversible};
use strut_core::{Result, StrutError, Tolerance};
use strut_math::{BBox3, Plane, Point3, Transform, Vector3, VectorExt};

use super::{chain, frame};

/// A line segment from `start` to `end`, parameterized over `[0, 1]`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Line {
    start: Point3,
    end: Point3,
    #[serde(skip)]
    tolerance: Tolerance,
}

impl Line {
    pub const TYPE_TAG: &'static str = "elements.geometry.line";

    /// Fails with [`StrutError::DegenerateGeometry`] when the endpoints coincide.
    pub fn new(start: Point3, end: Point3) -> Result<Self> {
        Self::with_tolerance(start, end, Tolerance::default())
    }

    pub fn with_tolerance(start: Point3, end: Point3, tolerance: Tolerance) -> Result<Self> {
        if start.is_almost_equal_within(end, tolerance) {
            return Err(StrutError::DegenerateGeometry(format!(
                "the line could not be created: start {start} and end {end} coincide"
            )));
        }
        Ok(Self { start, end, tolerance })
    }

    /// Endpoints already known to be distinct, e.g. consecutive vertices of a
    /// validated chain or the image of a valid line under a rigid transform.
    pub(crate) fn from_distinct(start: Point3, end: Point3, tolerance: Tolerance) -> Self {
        Self { start, end, tolerance }
    }

    /// The tolerance the line was validated with.
    pub fn tolerance(&self) -> Tolerance {
        self.tolerance
    }

    pub fn start(&self) -> Point3 {
        self.start
    }

    pub fn end(&self) -> Point3 {
        self.end
    }

    pub fn length(&self) -> f64 {
        self.start.distance(self.end)
    }

    /// Unit vector from `start` to `end`.
    pub fn direction(&self) -> Vector3 {
        (self.end - self.start) / self.length()
    }

    pub fn point_at(&self, u: f64) -> Result<Point3> {
        chain::check_parameter(u)?;
        Ok(self.start + u * (self.end - self.start))
    }

    pub fn transform_at(&self, u: f64) -> Result<Transform> {
        self.transform_at_with_up(u, frame::WORLD_UP)
    }

    pub fn transform_at_with_up(&self, u: f64, up: Vector3) -> Result<Transform> {
        let up = frame::unit_up(up)?;
        frame::frame_along(self.point_at(u)?, self.end - self.start, up, self.tolerance)
    }

    /// Frames at the start and end, each moved inward by its setback.
    pub fn frames(&self, start_setback: f64, end_setback: f64) -> Result<Vec<Transform>> {
        let vertices = [self.start, self.end];
        let mut frames = frame::vertex_frames(&vertices, false, frame::WORLD_UP, self.tolerance)?;
        frame::apply_setbacks(&mut frames, &vertices, start_setback, end_setback)?;
        Ok(frames)
    }

    /// Point where the segment crosses `plane`, or `None` when the segment
    /// is parallel to the plane or the crossing lies beyond its endpoints.
    pub fn intersect(&self, plane: &Plane) -> Option<Point3> {
        let delta = self.end - self.start;
        let denominator = delta.dot(plane.normal);
        if self.tolerance.is_angular_zero(denominator / delta.length()) {
            return None;
        }
        let t = (plane.origin - self.start).dot(plane.normal) / denominator;
        if !(0.0..=1.0).contains(&t) {
            return None;
        }
        Some(self.start + delta * t)
    }

    /// `divisions` equal spaces along the line: `divisions + 1` points when
    /// `include_end` is set, otherwise the end point is omitted.
    pub fn divide(&self, divisions: usize, include_end: bool) -> Result<Vec<Point3>> {
        if divisions == 0 {
            return Err(StrutError::InvalidArgument(
                "a line must be divided into at least one space".into(),
            ));
        }
        let count = if include_end { divisions + 1 } else { divisions };
        let delta = self.end - self.start;
        Ok((0..count)
            .map(|i| self.start + delta * (i as f64 / divisions as f64))
            .collect())
    }
}

impl Reversible for Line {
    fn reversed(&self) -> Self {
        Self {
            start: self.end,
            end: self.start,
            tolerance: self.tolerance,
        }
    }
}

impl BoundingBox for Line {
    type Bounds = BBox3;

    fn bounds(&self) -> BBox3 {
        BBox3::new(self.start, self.end)
    }
}
