use plano_math::{Plane, PlaneFrame, Point3, Vector3};
use serde::{Deserialize, Serialize};

/// Placement of an arrow-shaped visual helper.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Arrow {
    pub origin: Point3,
    /// Unit direction
    pub direction: Vector3,
    pub length: f64,
}

impl Arrow {
    pub fn new(origin: Point3, direction: Vector3, length: f64) -> Self {
        Self {
            origin,
            direction,
            length,
        }
    }

    pub fn tip(&self) -> Point3 {
        self.origin + self.direction * self.length
    }
}

/// Where a renderer should draw the plane's axis helpers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlaneHelpers {
    /// Unit normal drawn from the plane origin
    pub normal: Arrow,
    /// From the world origin to the plane origin
    pub position: Arrow,
    pub basis_u: Arrow,
    pub basis_v: Arrow,
}

impl PlaneHelpers {
    pub fn new(plane: &Plane, frame: &PlaneFrame) -> Self {
        let normal = plane.normal();
        let offset = plane.offset();

        // with a zero offset the origin vector has no direction of its own
        let position_dir = if offset == 0.0 {
            normal
        } else {
            normal * -offset.signum()
        };

        Self {
            normal: Arrow::new(frame.origin, normal, 1.0),
            position: Arrow::new(Point3::ZERO, position_dir, offset.abs()),
            basis_u: Arrow::new(Point3::ZERO, frame.basis_u, 1.0),
            basis_v: Arrow::new(Point3::ZERO, frame.basis_v, 1.0),
        }
    }
}
