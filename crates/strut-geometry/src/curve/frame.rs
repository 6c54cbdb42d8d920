//! Sweep frames along vertex chains.
//!
//! Along a segment and at the ends of an open chain `z` follows the
//! direction of travel and `x = z x up`. At a vertex joining two edges `x`
//! is the miter bisector pointing between the neighbours and `z = x x up`,
//! so a cross-section placed in the frame's xy plane meets its neighbour on
//! the miter plane. All frames are right-handed with `y = z x x`.

use strut_core::{Result, StrutError, Tolerance};
use strut_math::{Point3, Transform, Vector3, VectorExt};

/// Default up vector for frames.
pub const WORLD_UP: Vector3 = Vector3::Z;

/// `up`, or a world axis when the tangent runs along `up`.
fn reference_up(tangent: Vector3, up: Vector3, tolerance: Tolerance) -> Vector3 {
    if !tangent.is_parallel_to(up, tolerance) {
        return up;
    }
    let fallback = if tangent.x.abs() < 0.9 { Vector3::X } else { Vector3::Y };
    tracing::trace!(?tangent, ?fallback, "tangent parallel to up vector, using fallback axis");
    fallback
}

pub(crate) fn unit_up(up: Vector3) -> Result<Vector3> {
    up.normalized()
        .map_err(|_| StrutError::InvalidArgument("the up vector must have non-zero length".into()))
}

/// Frame at `origin` with z along `tangent` and x along `tangent x up`.
pub(crate) fn frame_along(
    origin: Point3,
    tangent: Vector3,
    up: Vector3,
    tolerance: Tolerance,
) -> Result<Transform> {
    let z = tangent.normalized()?;
    let up = reference_up(z, up, tolerance);
    Transform::from_x_and_z(origin, z.cross(up), z)
}

/// Frame at a vertex shared by the edges `prev -> origin` and `origin -> next`.
pub(crate) fn miter_frame(
    origin: Point3,
    prev: Point3,
    next: Point3,
    up: Vector3,
    tolerance: Tolerance,
) -> Result<Transform> {
    let to_prev = (prev - origin).normalized()?;
    let to_next = (next - origin).normalized()?;
    // Straight through: the neighbours have no bisector.
    let Ok(bisector) = to_prev.average(to_next) else {
        return frame_along(origin, next - origin, up, tolerance);
    };
    if bisector.is_parallel_to(up, tolerance) {
        return frame_along(origin, next - origin, up, tolerance);
    }
    Transform::from_x_and_z(origin, bisector, bisector.cross(up))
}

/// Frame at vertex `i`. Open chains use the single neighbour at their ends.
pub(crate) fn vertex_frame(
    vertices: &[Point3],
    closed: bool,
    i: usize,
    up: Vector3,
    tolerance: Tolerance,
) -> Result<Transform> {
    let n = vertices.len();
    let here = vertices[i];
    let prev = match i {
        0 if closed => Some(vertices[n - 1]),
        0 => None,
        _ => Some(vertices[i - 1]),
    };
    let next = if i + 1 < n {
        Some(vertices[i + 1])
    } else if closed {
        Some(vertices[0])
    } else {
        None
    };

    match (prev, next) {
        (Some(prev), Some(next)) => miter_frame(here, prev, next, up, tolerance),
        (None, Some(next)) => frame_along(here, next - here, up, tolerance),
        (Some(prev), None) => frame_along(here, here - prev, up, tolerance),
        (None, None) => Err(StrutError::InvalidArgument(
            "a frame requires at least two vertices".into(),
        )),
    }
}

/// One frame per vertex.
pub(crate) fn vertex_frames(
    vertices: &[Point3],
    closed: bool,
    up: Vector3,
    tolerance: Tolerance,
) -> Result<Vec<Transform>> {
    (0..vertices.len())
        .map(|i| vertex_frame(vertices, closed, i, up, tolerance))
        .collect()
}

/// Slide the first and last frames of an open chain inward along their
/// edges by the setback distances. Orientation is left unchanged.
pub(crate) fn apply_setbacks(
    frames: &mut [Transform],
    vertices: &[Point3],
    start_setback: f64,
    end_setback: f64,
) -> Result<()> {
    for setback in [start_setback, end_setback] {
        if !setback.is_finite() || setback < 0.0 {
            return Err(StrutError::InvalidArgument(format!(
                "setbacks must be finite and non-negative, got {setback}"
            )));
        }
    }

    let n = vertices.len();
    let first_edge = vertices[1] - vertices[0];
    let last_edge = vertices[n - 1] - vertices[n - 2];
    let (first_room, last_room) = if n == 2 {
        let length = first_edge.length();
        (length - end_setback, length - start_setback)
    } else {
        (first_edge.length(), last_edge.length())
    };
    if start_setback >= first_room || end_setback >= last_room {
        return Err(StrutError::InvalidArgument(format!(
            "setbacks ({start_setback}, {end_setback}) leave no curve to sweep"
        )));
    }

    if let Some(first) = frames.first_mut() {
        first.origin += first_edge.normalized()? * start_setback;
    }
    if let Some(last) = frames.last_mut() {
        last.origin -= last_edge.normalized()? * end_setback;
    }
    Ok(())
}
