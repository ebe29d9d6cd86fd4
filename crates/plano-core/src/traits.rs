use crate::error::Result;
use crate::tolerance::Tolerance;

/// Check that a value satisfies its invariants before it is consumed.
pub trait Validate {
    fn validate(&self, tolerance: Tolerance) -> Result<()>;
}
