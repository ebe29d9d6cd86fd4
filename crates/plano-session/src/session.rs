use log::{debug, warn};
use plano_core::Result;
use plano_math::{embed, project, Axis, Plane, PlaneFrame, PlanePoint2, Point3, Ray};
use serde::{Deserialize, Serialize};

use crate::config::SessionConfig;
use crate::helpers::PlaneHelpers;

/// A single edit coming from one input control.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PlaneControl {
    Offset(f64),
    Normal(Axis, f64),
}

impl PlaneControl {
    pub fn field(&self) -> &'static str {
        match self {
            PlaneControl::Offset(_) => "offset",
            PlaneControl::Normal(axis, _) => axis.name(),
        }
    }
}

/// The interactive plane and the points placed on it.
///
/// The session is the only writer of its plane. Every edit goes through
/// [`PlaneSession::apply`], which renormalizes and rebuilds the frame before
/// the new state becomes visible; a rejected edit leaves everything as it was.
///
/// Recorded points are stored in plane-local coordinates, so they move with
/// the plane when it is tilted or shifted.
#[derive(Debug, Clone)]
pub struct PlaneSession {
    config: SessionConfig,
    plane: Plane,
    frame: PlaneFrame,
    points: Vec<PlanePoint2>,
}

impl PlaneSession {
    pub fn new(config: SessionConfig) -> Result<Self> {
        let plane = config.plane()?;
        let frame = PlaneFrame::build_with(&plane, config.tolerance)?;
        debug!(
            "session started: normal {}, offset {}",
            plane.normal(),
            plane.offset()
        );
        Ok(Self {
            config,
            plane,
            frame,
            points: Vec::new(),
        })
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn plane(&self) -> &Plane {
        &self.plane
    }

    pub fn frame(&self) -> &PlaneFrame {
        &self.frame
    }

    /// Recorded points in insertion order.
    pub fn points(&self) -> &[PlanePoint2] {
        &self.points
    }

    /// Current `[offset, normal.x, normal.y, normal.z]`, for initializing
    /// input controls.
    pub fn control_values(&self) -> [f64; 4] {
        let n = self.plane.normal();
        [self.plane.offset(), n.x, n.y, n.z]
    }

    /// Apply one control edit and return the rebuilt frame.
    pub fn apply(&mut self, control: PlaneControl) -> Result<PlaneFrame> {
        match self.try_apply(control) {
            Ok((plane, frame)) => {
                self.plane = plane;
                self.frame = frame;
                debug!(
                    "{} updated: normal {}, offset {}",
                    control.field(),
                    plane.normal(),
                    plane.offset()
                );
                Ok(frame)
            }
            Err(err) => {
                warn!("ignoring {} update: {err}", control.field());
                Err(err)
            }
        }
    }

    fn try_apply(&self, control: PlaneControl) -> Result<(Plane, PlaneFrame)> {
        let tolerance = self.config.tolerance;
        let mut plane = self.plane;
        match control {
            PlaneControl::Offset(value) => plane.set_offset(value)?,
            PlaneControl::Normal(axis, value) => {
                plane.set_normal_component_with(axis, value, tolerance)?
            }
        }
        let frame = PlaneFrame::build_with(&plane, tolerance)?;
        Ok((plane, frame))
    }

    /// Record the point where `ray` meets the plane.
    ///
    /// Returns `None` and records nothing when the ray is parallel to the
    /// plane or not finite, or, with `forward_only`, when the plane lies
    /// behind the ray.
    pub fn record_point(&mut self, ray: &Ray) -> Option<PlanePoint2> {
        let Some(t) = ray.intersect_param(&self.plane, self.config.tolerance) else {
            debug!("ray {ray:?} does not meet the plane");
            return None;
        };
        if self.config.forward_only && t < 0.0 {
            debug!("plane is behind ray origin (t = {t})");
            return None;
        }

        let local = project(&self.frame, ray.at(t));
        if !local.u.is_finite() || !local.v.is_finite() {
            debug!("hit for ray {ray:?} is out of range");
            return None;
        }
        self.points.push(local);
        debug!(
            "recorded point #{} at ({}, {})",
            self.points.len(),
            local.u,
            local.v
        );
        Some(local)
    }

    /// World positions of all recorded points under the current frame.
    pub fn marker_positions(&self) -> Vec<Point3> {
        self.points.iter().map(|&p| embed(&self.frame, p)).collect()
    }

    pub fn helpers(&self) -> PlaneHelpers {
        PlaneHelpers::new(&self.plane, &self.frame)
    }
}
