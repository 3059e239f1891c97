/// Perspective projection from world space to viewport pixels
use nalgebra::Point3;

use crate::camera::Camera;
use crate::geometry::{magnitude, subtract};
use crate::transform::Transform;

/// Projection mode for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProjectionMode {
    Orthographic,
    #[default]
    Perspective,
}

impl ProjectionMode {
    pub fn toggled(self) -> Self {
        match self {
            ProjectionMode::Orthographic => ProjectionMode::Perspective,
            ProjectionMode::Perspective => ProjectionMode::Orthographic,
        }
    }
}

/// A point in viewport pixel coordinates (origin top-left, y down)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectedPoint {
    pub x: f64,
    pub y: f64,
    /// Distance from the rotated point to the camera
    pub depth: f64,
}

impl ProjectedPoint {
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.depth.is_finite()
    }
}

/// Scale a camera-space coordinate onto a screen axis of `extent` pixels.
///
/// The denominator grows with depth and with the field of view, pulling far
/// points toward the vanishing point.
pub fn perspective_divide(extent: f64, coord: f64, depth: f64, fov_radians: f64) -> f64 {
    extent * coord / (extent + 2.0 * depth * (fov_radians / 2.0).tan())
}

/// Projects world points for a fixed viewport
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projector {
    width: f64,
    height: f64,
    mode: ProjectionMode,
}

impl Projector {
    pub fn new(width: u32, height: u32, mode: ProjectionMode) -> Self {
        Self {
            width: width as f64,
            height: height as f64,
            mode,
        }
    }

    pub fn mode(&self) -> ProjectionMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: ProjectionMode) {
        self.mode = mode;
    }

    pub fn center(&self) -> (f64, f64) {
        (self.width / 2.0, self.height / 2.0)
    }

    /// Project a world point to viewport pixels.
    ///
    /// The point is rotated about the world origin, not about the camera, and
    /// its depth is the straight-line distance to the camera position rather
    /// than a true camera-space z. Degenerate input yields non-finite output
    /// instead of an error; check `ProjectedPoint::is_finite` before drawing.
    pub fn project(&self, camera: &Camera, point: &Point3<f64>) -> ProjectedPoint {
        let rotation = Transform::rotation_matrix(&camera.angles());
        let rotated = Transform::apply(&rotation, point);
        let depth = magnitude(&subtract(&rotated, &camera.position()));

        let (x, y) = match self.mode {
            ProjectionMode::Perspective => {
                let fov = camera.fov_radians();
                (
                    perspective_divide(self.width, rotated.x, depth, fov),
                    perspective_divide(self.height, rotated.y, depth, fov),
                )
            }
            ProjectionMode::Orthographic => (rotated.x, rotated.y),
        };

        let (cx, cy) = self.center();
        ProjectedPoint {
            x: x + cx,
            y: cy - y,
            depth,
        }
    }

    pub fn project_all(&self, camera: &Camera, points: &[Point3<f64>]) -> Vec<ProjectedPoint> {
        points.iter().map(|p| self.project(camera, p)).collect()
    }
}
