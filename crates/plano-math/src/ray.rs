use crate::{Plane, Point3, Vector3};
use plano_core::Tolerance;
use serde::{Deserialize, Serialize};

/// A ray in 3D space defined by origin and direction.
///
/// The direction is stored as given; intersection does not need it to be unit
/// length, only non-zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ray {
    pub origin: Point3,
    pub direction: Vector3,
}

impl Ray {
    pub fn new(origin: Point3, direction: Vector3) -> Self {
        Self { origin, direction }
    }

    /// Get a point along the ray at parameter t.
    pub fn at(&self, t: f64) -> Point3 {
        self.origin + self.direction * t
    }

    /// Parameter `t` at which the line of this ray meets the plane, or `None`
    /// when the direction is (nearly) parallel to it. `t` may be negative.
    ///
    /// A ray with a non-finite component, or one whose hit point would
    /// overflow, never intersects.
    pub fn intersect_param(&self, plane: &Plane, tolerance: Tolerance) -> Option<f64> {
        if !self.origin.is_finite() || !self.direction.is_finite() {
            return None;
        }
        let denom = self.direction.dot(plane.normal());
        if tolerance.is_parallel(denom) {
            return None;
        }
        let t = -plane.signed_distance(self.origin) / denom;
        self.at(t).is_finite().then_some(t)
    }

    /// Point where the line of this ray meets the plane.
    pub fn intersect_plane(&self, plane: &Plane) -> Option<Point3> {
        self.intersect_param(plane, Tolerance::default())
            .map(|t| self.at(t))
    }
}

/// Intersect a ray with a plane; `None` means no intersection.
pub fn intersect(ray: &Ray, plane: &Plane) -> Option<Point3> {
    ray.intersect_plane(plane)
}
