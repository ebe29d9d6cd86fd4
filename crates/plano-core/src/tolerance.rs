/// Numeric thresholds shared by the plane operations.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Tolerance {
    /// Shortest vector length that may still be normalized
    pub degenerate_length: f64,
    /// Allowed deviation of a normal's length from 1
    pub unit_length: f64,
    /// Smallest `|direction · normal|` that still counts as a crossing
    pub parallel: f64,
}

impl Tolerance {
    pub const DEFAULT_DEGENERATE_LENGTH: f64 = 1e-12;
    pub const DEFAULT_UNIT_LENGTH: f64 = 1e-9;
    pub const DEFAULT_PARALLEL: f64 = 1e-12;

    pub fn new(degenerate_length: f64, unit_length: f64, parallel: f64) -> Self {
        Self {
            degenerate_length,
            unit_length,
            parallel,
        }
    }

    pub fn default_precision() -> Self {
        Self {
            degenerate_length: Self::DEFAULT_DEGENERATE_LENGTH,
            unit_length: Self::DEFAULT_UNIT_LENGTH,
            parallel: Self::DEFAULT_PARALLEL,
        }
    }

    /// Check if a vector of this length is too short to normalize
    pub fn is_degenerate(self, length: f64) -> bool {
        length.is_nan() || length < self.degenerate_length
    }

    /// Check if a length is 1 within tolerance
    pub fn is_unit(self, length: f64) -> bool {
        (length - 1.0).abs() <= self.unit_length
    }

    /// Check if a direction/normal dot product means "no crossing"
    pub fn is_parallel(self, denom: f64) -> bool {
        denom.is_nan() || denom.abs() < self.parallel
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::default_precision()
    }
}
