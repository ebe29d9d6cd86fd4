use crate::{Point3, Vector3};
use plano_core::{PlaneError, Result, Tolerance, Validate};
use serde::{Deserialize, Serialize};

/// One of the three world axes, used to address a single normal component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Axis::X => "normal.x",
            Axis::Y => "normal.y",
            Axis::Z => "normal.z",
        }
    }
}

/// An oriented plane in Hesse normal form: `normal · p + offset = 0`.
///
/// The normal is kept at unit length. Every mutation renormalizes before
/// returning, and a mutation that would leave a zero-length normal is
/// rejected with the previous state intact.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawPlane", into = "RawPlane")]
pub struct Plane {
    normal: Vector3,
    offset: f64,
}

/// Serialized form of [`Plane`]; normalized and checked on the way in.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct RawPlane {
    normal: Vector3,
    offset: f64,
}

impl TryFrom<RawPlane> for Plane {
    type Error = PlaneError;

    fn try_from(raw: RawPlane) -> Result<Self> {
        Plane::new(raw.normal, raw.offset)
    }
}

impl From<Plane> for RawPlane {
    fn from(plane: Plane) -> Self {
        Self {
            normal: plane.normal,
            offset: plane.offset,
        }
    }
}

impl Plane {
    pub fn new(normal: Vector3, offset: f64) -> Result<Self> {
        let mut plane = Self {
            normal: Vector3::Z,
            offset: 0.0,
        };
        plane.set_normal(normal)?;
        plane.set_offset(offset)?;
        Ok(plane)
    }

    /// Plane through `point` facing along `normal`.
    pub fn from_point_normal(point: Point3, normal: Vector3) -> Result<Self> {
        let mut plane = Self::new(normal, 0.0)?;
        plane.set_offset(-plane.normal.dot(point))?;
        Ok(plane)
    }

    pub fn xy() -> Self {
        Self {
            normal: Vector3::Z,
            offset: 0.0,
        }
    }

    pub fn xz() -> Self {
        Self {
            normal: Vector3::Y,
            offset: 0.0,
        }
    }

    pub fn yz() -> Self {
        Self {
            normal: Vector3::X,
            offset: 0.0,
        }
    }

    pub fn normal(&self) -> Vector3 {
        self.normal
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// The point of the plane closest to the world origin, `-offset * normal`.
    pub fn origin(&self) -> Point3 {
        self.normal * -self.offset
    }

    /// Signed distance from a point to this plane, positive on the normal side.
    pub fn signed_distance(&self, point: Point3) -> f64 {
        point.dot(self.normal) + self.offset
    }

    /// Replace the whole normal, renormalizing it.
    pub fn set_normal(&mut self, normal: Vector3) -> Result<()> {
        self.set_normal_with(normal, Tolerance::default())
    }

    pub fn set_normal_with(&mut self, normal: Vector3, tolerance: Tolerance) -> Result<()> {
        for axis in Axis::ALL {
            let value = normal[axis.index()];
            if !value.is_finite() {
                return Err(PlaneError::NonFiniteValue {
                    field: axis.name(),
                    value,
                });
            }
        }
        // scale by the largest component first so huge inputs cannot overflow
        let scale = normal.abs().max_element();
        if scale == 0.0 {
            return Err(PlaneError::DegenerateNormal { length: 0.0 });
        }
        let scaled = normal / scale;
        let scaled_length = scaled.length();
        let length = scale * scaled_length;
        if tolerance.is_degenerate(length) {
            return Err(PlaneError::DegenerateNormal { length });
        }
        self.normal = scaled / scaled_length;
        Ok(())
    }

    /// Set one component of the normal, then renormalize.
    ///
    /// Fails with [`PlaneError::DegenerateNormal`] if the edited vector is
    /// (nearly) zero; the previous normal is kept in that case.
    pub fn set_normal_component(&mut self, axis: Axis, value: f64) -> Result<()> {
        self.set_normal_component_with(axis, value, Tolerance::default())
    }

    pub fn set_normal_component_with(
        &mut self,
        axis: Axis,
        value: f64,
        tolerance: Tolerance,
    ) -> Result<()> {
        let mut candidate = self.normal;
        candidate[axis.index()] = value;
        self.set_normal_with(candidate, tolerance)
    }

    pub fn set_offset(&mut self, offset: f64) -> Result<()> {
        if !offset.is_finite() {
            return Err(PlaneError::NonFiniteValue {
                field: "offset",
                value: offset,
            });
        }
        self.offset = offset;
        Ok(())
    }
}

#[cfg(test)]
impl Plane {
    /// Build a plane without normalizing, to exercise the precondition checks.
    pub(crate) fn unchecked(normal: Vector3, offset: f64) -> Self {
        Self { normal, offset }
    }
}

impl Default for Plane {
    fn default() -> Self {
        Self::xy()
    }
}

impl Validate for Plane {
    fn validate(&self, tolerance: Tolerance) -> Result<()> {
        if !self.normal.is_finite() || !self.offset.is_finite() {
            return Err(PlaneError::InvalidPlaneState(format!(
                "non-finite plane: normal {}, offset {}",
                self.normal, self.offset
            )));
        }
        let length = self.normal.length();
        if !tolerance.is_unit(length) {
            return Err(PlaneError::InvalidPlaneState(format!(
                "normal {} has length {length}, expected 1",
                self.normal
            )));
        }
        Ok(())
    }
}
