//! Orthonormal 2D coordinate frames embedded in a plane.

use crate::{Plane, Point3, Vector3};
use plano_core::{Result, Tolerance, Validate};
use serde::{Deserialize, Serialize};

/// A plane's local coordinate system: an origin on the plane and two
/// orthonormal tangent axes.
///
/// `{basis_u, basis_v, normal}` is right-handed. A frame is a snapshot of the
/// plane it was built from and must be rebuilt after the plane changes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlaneFrame {
    pub origin: Point3,
    pub basis_u: Vector3,
    pub basis_v: Vector3,
}

impl PlaneFrame {
    /// Derive the frame of a plane.
    ///
    /// The first axis is `normal × reference`, where the reference is world Y
    /// when `|normal.x| > |normal.y|` and world X otherwise, so the reference
    /// is never close to parallel with the normal. The choice switches where
    /// `|normal.x| == |normal.y|`, which rotates the basis there.
    pub fn build(plane: &Plane) -> Result<Self> {
        Self::build_with(plane, Tolerance::default())
    }

    pub fn build_with(plane: &Plane, tolerance: Tolerance) -> Result<Self> {
        plane.validate(tolerance)?;

        let normal = plane.normal();
        let reference = Self::reference_axis(normal);
        let basis_u = normal.cross(reference).normalize();
        let basis_v = normal.cross(basis_u).normalize();

        Ok(Self {
            origin: plane.origin(),
            basis_u,
            basis_v,
        })
    }

    /// World axis crossed with `normal` to obtain `basis_u`.
    pub fn reference_axis(normal: Vector3) -> Vector3 {
        if normal.x.abs() > normal.y.abs() {
            Vector3::Y
        } else {
            Vector3::X
        }
    }

    /// The implicit third axis, `basis_u × basis_v`.
    pub fn normal(&self) -> Vector3 {
        self.basis_u.cross(self.basis_v)
    }
}

/// A point in a [`PlaneFrame`]'s local coordinates:
/// `origin + u * basis_u + v * basis_v`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PlanePoint2 {
    pub u: f64,
    pub v: f64,
}

impl PlanePoint2 {
    pub fn new(u: f64, v: f64) -> Self {
        Self { u, v }
    }
}
