/// Tolerances used when comparing coordinates and directions.
///
/// Curves are validated against a tolerance when constructed and keep it:
/// the same tolerance decides whether a curve parameter lands on a vertex
/// and whether two directions count as parallel.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Tolerance {
    /// Linear tolerance for distance comparisons (in model units)
    pub linear: f64,
    /// Angular tolerance, compared against sines and cosines of unit vectors
    pub angular: f64,
}

impl Tolerance {
    pub const DEFAULT_LINEAR: f64 = 1e-9;
    pub const DEFAULT_ANGULAR: f64 = 1e-10;

    pub fn new(linear: f64, angular: f64) -> Self {
        Self { linear, angular }
    }

    pub fn default_precision() -> Self {
        Self {
            linear: Self::DEFAULT_LINEAR,
            angular: Self::DEFAULT_ANGULAR,
        }
    }

    pub fn loose() -> Self {
        Self {
            linear: 1e-5,
            angular: 1e-6,
        }
    }

    pub fn tight() -> Self {
        Self {
            linear: 1e-12,
            angular: 1e-12,
        }
    }

    /// Check if a unit-vector product (sine or cosine) is zero within angular tolerance
    pub fn is_angular_zero(self, v: f64) -> bool {
        v.abs() <= self.angular
    }

    /// Distance along a curve of the given total length within which a
    /// position is considered to coincide with a vertex.
    pub fn snap_distance(self, length: f64) -> f64 {
        self.linear * length.max(1.0)
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::default_precision()
    }
}
