/// Scene configuration and defaults
use nalgebra::Point3;

use crate::camera::{self, Camera};
use crate::error::{Result, Wf3dError};
use crate::projection::ProjectionMode;
use crate::surface::Color;

pub const DEFAULT_WIDTH: u32 = 1500;
pub const DEFAULT_HEIGHT: u32 = 800;
pub const DEFAULT_POINT_SIZE: f64 = 5.0;
pub const DEFAULT_LINE_WIDTH: f64 = 1.0;
/// Camera translation per key press, in world units
pub const DEFAULT_MOVE_STEP: f64 = 1.0;
/// Field of view change per key press, in degrees
pub const FOV_STEP: f64 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Style {
    pub stroke: Color,
    pub fill: Color,
    pub line_width: f64,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            stroke: Color::BLACK,
            fill: Color::BLACK,
            line_width: DEFAULT_LINE_WIDTH,
        }
    }
}

/// Everything fixed at scene construction
#[derive(Debug, Clone, PartialEq)]
pub struct SceneConfig {
    pub width: u32,
    pub height: u32,
    /// Side of the square drawn at every projected point
    pub point_size: f64,
    pub style: Style,
    pub camera_position: Point3<f64>,
    pub camera_direction: Point3<f64>,
    /// Degrees
    pub fov: f64,
    pub move_step: f64,
    pub mode: ProjectionMode,
}

impl Default for SceneConfig {
    fn default() -> Self {
        let [x, y, z] = camera::DEFAULT_POSITION;
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            point_size: DEFAULT_POINT_SIZE,
            style: Style::default(),
            camera_position: Point3::new(x, y, z),
            camera_direction: Point3::origin(),
            fov: camera::DEFAULT_FOV,
            move_step: DEFAULT_MOVE_STEP,
            mode: ProjectionMode::default(),
        }
    }
}

impl SceneConfig {
    pub fn with_viewport(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_point_size(mut self, point_size: f64) -> Self {
        self.point_size = point_size;
        self
    }

    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn with_camera(mut self, position: Point3<f64>, direction: Point3<f64>) -> Self {
        self.camera_position = position;
        self.camera_direction = direction;
        self
    }

    pub fn with_fov(mut self, fov: f64) -> Self {
        self.fov = fov;
        self
    }

    pub fn with_move_step(mut self, move_step: f64) -> Self {
        self.move_step = move_step;
        self
    }

    pub fn with_mode(mut self, mode: ProjectionMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(Wf3dError::InvalidViewport {
                width: self.width,
                height: self.height,
            });
        }
        if !self.point_size.is_finite() || self.point_size <= 0.0 {
            return Err(Wf3dError::InvalidPointSize(self.point_size));
        }
        if !self.style.line_width.is_finite() || !self.move_step.is_finite() {
            return Err(Wf3dError::NonFinite("scene config"));
        }
        self.camera().map(|_| ())
    }

    /// Camera described by this config
    pub fn camera(&self) -> Result<Camera> {
        Camera::new(self.camera_position, self.camera_direction, self.fov)
    }
}
