use plano_core::{PlaneError, Result, Tolerance};
use plano_math::{Plane, Vector3};
use serde::{Deserialize, Serialize};

/// Startup settings for a [`crate::PlaneSession`].
///
/// Every field is optional in serialized form; missing fields take the
/// defaults below.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Initial plane normal. Normalized when the session starts.
    pub normal: Vector3,
    /// Initial plane offset (`normal · p + offset = 0`).
    pub offset: f64,
    /// Only record hits in front of the ray origin (`t >= 0`).
    pub forward_only: bool,
    pub tolerance: Tolerance,
}

impl SessionConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| PlaneError::Config(e.to_string()))
    }

    /// Build the initial plane described by this config.
    pub fn plane(&self) -> Result<Plane> {
        let mut plane = Plane::default();
        plane.set_normal_with(self.normal, self.tolerance)?;
        plane.set_offset(self.offset)?;
        Ok(plane)
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            normal: Vector3::ONE,
            offset: -1.0,
            forward_only: true,
            tolerance: Tolerance::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_default_plane() {
        let plane = SessionConfig::default().plane().unwrap();
        let expected = Vector3::ONE.normalize();
        assert_abs_diff_eq!((plane.normal() - expected).length(), 0.0, epsilon = 1e-15);
        assert_eq!(plane.offset(), -1.0);
    }

    #[test]
    fn test_from_json_partial() {
        let config = SessionConfig::from_json(r#"{ "offset": 2.5, "forward_only": false }"#).unwrap();
        assert_eq!(config.offset, 2.5);
        assert!(!config.forward_only);
        assert_eq!(config.normal, Vector3::ONE);
        assert_eq!(config.tolerance, Tolerance::default());
    }

    #[test]
    fn test_from_json_normal_and_tolerance() {
        let config = SessionConfig::from_json(
            r#"{ "normal": [0.0, 0.0, 3.0], "tolerance": { "parallel": 1e-4 } }"#,
        )
        .unwrap();
        assert_eq!(config.plane().unwrap().normal(), Vector3::Z);
        assert_eq!(config.tolerance.parallel, 1e-4);
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        let err = SessionConfig::from_json("{ offset: ").unwrap_err();
        assert!(matches!(err, PlaneError::Config(_)));
    }

    #[test]
    fn test_zero_normal_is_degenerate() {
        let config = SessionConfig {
            normal: Vector3::ZERO,
            ..SessionConfig::default()
        };
        assert!(matches!(config.plane(), Err(PlaneError::DegenerateNormal { .. })));
    }

    #[test]
    fn test_round_trips_through_json() {
        let config = SessionConfig {
            offset: 0.125,
            ..SessionConfig::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(SessionConfig::from_json(&json).unwrap(), config);
    }
}
