use crate::{DAffine3, Plane, PlaneFrame, PlanePoint2, Point3};

/// Express a world point in the frame's local coordinates.
///
/// The component of `point - origin` along the normal is dropped, so this is
/// the orthogonal projection onto the plane.
pub fn project(frame: &PlaneFrame, point: Point3) -> PlanePoint2 {
    let rel = point - frame.origin;
    PlanePoint2::new(rel.dot(frame.basis_u), rel.dot(frame.basis_v))
}

/// Map local frame coordinates back to a world point on the plane.
pub fn embed(frame: &PlaneFrame, point: PlanePoint2) -> Point3 {
    frame.origin + point.u * frame.basis_u + point.v * frame.basis_v
}

/// Move a point onto the plane along the normal.
pub fn snap_to_plane(plane: &Plane, point: Point3) -> Point3 {
    point - plane.normal() * plane.signed_distance(point)
}

impl PlaneFrame {
    /// Affine map from local `(u, v, w)` to world space, `w` running along the
    /// normal. Lets a renderer place helpers with a single matrix.
    pub fn to_affine(&self) -> DAffine3 {
        DAffine3::from_cols(self.basis_u, self.basis_v, self.normal(), self.origin)
    }

    /// Inverse of [`PlaneFrame::to_affine`]. The `z` of a transformed point is
    /// its signed height above the plane.
    pub fn world_to_local(&self) -> DAffine3 {
        self.to_affine().inverse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Vector3;
    use approx::assert_abs_diff_eq;
    use glam::dvec3;

    #[test]
    fn test_project_xy() {
        let frame = PlaneFrame::build(&Plane::xy()).unwrap();
        // basis_u = +Y, basis_v = -X
        let p = project(&frame, dvec3(1.0, 2.0, 7.0));
        assert_abs_diff_eq!(p.u, 2.0);
        assert_abs_diff_eq!(p.v, -1.0);
    }

    #[test]
    fn test_embed_origin() {
        let plane = Plane::new(dvec3(0.0, 3.0, 4.0), -5.0).unwrap();
        let frame = PlaneFrame::build(&plane).unwrap();
        let p = embed(&frame, PlanePoint2::default());
        assert_abs_diff_eq!((p - dvec3(0.0, 3.0, 4.0)).length(), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_project_discards_normal_component() {
        let plane = Plane::new(dvec3(1.0, -2.0, 0.5), 1.5).unwrap();
        let frame = PlaneFrame::build(&plane).unwrap();
        let on = snap_to_plane(&plane, dvec3(0.3, 0.7, -1.1));
        let off = on + plane.normal() * 4.0;
        let a = project(&frame, on);
        let b = project(&frame, off);
        assert_abs_diff_eq!(a.u, b.u, epsilon = 1e-12);
        assert_abs_diff_eq!(a.v, b.v, epsilon = 1e-12);
    }

    #[test]
    fn test_snap_to_plane() {
        let plane = Plane::new(Vector3::Z, -1.0).unwrap();
        let snapped = snap_to_plane(&plane, dvec3(2.0, -3.0, 8.0));
        assert_abs_diff_eq!((snapped - dvec3(2.0, -3.0, 1.0)).length(), 0.0);
    }

    #[test]
    fn test_snap_is_idempotent() {
        let plane = Plane::new(dvec3(-1.0, 4.0, 2.0), 0.75).unwrap();
        let once = snap_to_plane(&plane, dvec3(5.0, 5.0, 5.0));
        let twice = snap_to_plane(&plane, once);
        assert_abs_diff_eq!((once - twice).length(), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_affine_matches_embed() {
        let plane = Plane::new(dvec3(2.0, 1.0, -1.0), 0.5).unwrap();
        let frame = PlaneFrame::build(&plane).unwrap();
        let local = PlanePoint2::new(1.25, -0.5);
        let via_affine = frame.to_affine().transform_point3(dvec3(local.u, local.v, 0.0));
        assert_abs_diff_eq!((via_affine - embed(&frame, local)).length(), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_world_to_local_height() {
        let plane = Plane::new(Vector3::Y, -2.0).unwrap();
        let frame = PlaneFrame::build(&plane).unwrap();
        let local = frame.world_to_local().transform_point3(dvec3(3.0, 5.0, -4.0));
        assert_abs_diff_eq!(local.z, 3.0, epsilon = 1e-12);
        let p = project(&frame, dvec3(3.0, 5.0, -4.0));
        assert_abs_diff_eq!(local.x, p.u, epsilon = 1e-12);
        assert_abs_diff_eq!(local.y, p.v, epsilon = 1e-12);
    }
}
