//! Strut geometry: curves, sweep frames, and curve serialization.

pub mod curve;
pub mod serialize;
pub mod transform;

pub use curve::{Curve, Line, Polygon, Polyline};
pub use serialize::{CurveCodec, CurveRegistry};
pub use transform::TransformCurves;
