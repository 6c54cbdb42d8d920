//! Arc-length bookkeeping over an ordered vertex sequence, shared by the
//! open and closed vertex curves.

use strut_core::{Result, StrutError, Tolerance};
use strut_math::{BBox3, Point3, VectorExt};

/// Reject parameters outside `[0, 1]` (including NaN).
pub(crate) fn check_parameter(u: f64) -> Result<()> {
    if (0.0..=1.0).contains(&u) {
        Ok(())
    } else {
        Err(StrutError::ParameterRange(u))
    }
}

/// Check the vertex count and that no two vertices are almost equal.
pub(crate) fn validate_vertices(
    vertices: &[Point3],
    min_count: usize,
    tolerance: Tolerance,
) -> Result<()> {
    if vertices.len() < min_count {
        return Err(StrutError::InvalidArgument(format!(
            "at least {} vertices are required, {} supplied",
            min_count,
            vertices.len()
        )));
    }
    for (i, a) in vertices.iter().enumerate() {
        for (j, b) in vertices.iter().enumerate().skip(i + 1) {
            if a.is_almost_equal_within(*b, tolerance) {
                return Err(StrutError::DuplicateVertex { first: i, second: j });
            }
        }
    }
    Ok(())
}

pub(crate) fn edge_count(vertices: &[Point3], closed: bool) -> usize {
    if closed {
        vertices.len()
    } else {
        vertices.len().saturating_sub(1)
    }
}

/// Consecutive vertex pairs; a closed chain includes the edge back to the first vertex.
pub(crate) fn edges(
    vertices: &[Point3],
    closed: bool,
) -> impl Iterator<Item = (Point3, Point3)> + '_ {
    let n = vertices.len();
    (0..edge_count(vertices, closed)).map(move |i| (vertices[i], vertices[(i + 1) % n]))
}

pub(crate) fn length(vertices: &[Point3], closed: bool) -> f64 {
    edges(vertices, closed).map(|(a, b)| a.distance(b)).sum()
}

/// Bounds of a non-empty vertex sequence.
pub(crate) fn bounds(vertices: &[Point3]) -> BBox3 {
    let first = BBox3::new(vertices[0], vertices[0]);
    vertices[1..].iter().fold(first, |bbox, &p| bbox.including(p))
}

/// A resolved position along a chain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Station {
    pub point: Point3,
    /// Index of the edge containing the point.
    pub edge: usize,
    /// Set when the point coincides with a vertex.
    pub vertex: Option<usize>,
}

/// Resolve parameter `u` to a point by walking edges until the accumulated
/// length reaches `u * length`. Positions within the tolerance's snap
/// distance of a vertex resolve to that vertex, lowest index first.
pub(crate) fn station_at(
    vertices: &[Point3],
    closed: bool,
    u: f64,
    tolerance: Tolerance,
) -> Result<Station> {
    check_parameter(u)?;

    let n = vertices.len();
    let total = length(vertices, closed);
    let target = total * u;
    let snap = tolerance.snap_distance(total);

    let mut walked = 0.0;
    for (i, (a, b)) in edges(vertices, closed).enumerate() {
        if (target - walked).abs() <= snap {
            return Ok(Station {
                point: a,
                edge: i,
                vertex: Some(i),
            });
        }
        let edge_length = a.distance(b);
        if target <= walked + edge_length {
            if walked + edge_length - target <= snap {
                return Ok(Station {
                    point: b,
                    edge: i,
                    vertex: Some((i + 1) % n),
                });
            }
            let t = (target - walked) / edge_length;
            return Ok(Station {
                point: a + (b - a) * t,
                edge: i,
                vertex: None,
            });
        }
        walked += edge_length;
    }

    // Accumulated rounding can leave the target just past the final edge.
    let last = if closed { 0 } else { n - 1 };
    Ok(Station {
        point: vertices[last],
        edge: edge_count(vertices, closed) - 1,
        vertex: Some(last),
    })
}
