pub mod frame;
pub mod plane;
pub mod ray;
pub mod transform;

pub use glam::{dvec3, DAffine3, DVec3};
pub use frame::{PlaneFrame, PlanePoint2};
pub use plane::{Axis, Plane};
pub use ray::{intersect, Ray};
pub use transform::{embed, project, snap_to_plane};

pub type Point3 = DVec3;
pub type Vector3 = DVec3;
