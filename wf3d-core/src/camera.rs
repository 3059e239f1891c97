/// Movable look-at camera
use nalgebra::{Point3, Vector3};

use crate::error::{Result, Wf3dError};
use crate::geometry::is_finite_point;
use crate::transform::ViewAngles;

pub const DEFAULT_POSITION: [f64; 3] = [0.0, 0.0, -50.0];
pub const DEFAULT_FOV: f64 = 120.0;

/// Camera with a position, a look-at target and a field of view.
///
/// The view angles are derived state and are recomputed whenever position,
/// target or fov change, so the fields stay private.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    position: Point3<f64>,
    direction: Point3<f64>,
    fov: f64,
    angles: ViewAngles,
}

impl Camera {
    /// `fov` is in degrees and must lie strictly between 0 and 180.
    pub fn new(position: Point3<f64>, direction: Point3<f64>, fov: f64) -> Result<Self> {
        validate_fov(fov)?;
        validate_view(&position, &direction)?;

        let mut camera = Self {
            position,
            direction,
            fov,
            angles: ViewAngles::zero(),
        };
        camera.recompute_angles();
        Ok(camera)
    }

    pub fn position(&self) -> Point3<f64> {
        self.position
    }

    /// Look-at target
    pub fn direction(&self) -> Point3<f64> {
        self.direction
    }

    /// Field of view in degrees
    pub fn fov(&self) -> f64 {
        self.fov
    }

    pub fn fov_radians(&self) -> f64 {
        self.fov.to_radians()
    }

    pub fn angles(&self) -> ViewAngles {
        self.angles
    }

    /// Translate the camera and return the new state.
    ///
    /// A move that would leave the camera on the target's depth plane is
    /// rejected and the camera keeps its previous state.
    pub fn move_by(&mut self, delta: Vector3<f64>) -> Result<Camera> {
        let position = self.position + delta;
        validate_view(&position, &self.direction)?;

        self.position = position;
        self.recompute_angles();
        log::trace!("camera moved to {:?}, angles {:?}", self.position, self.angles);
        Ok(*self)
    }

    pub fn look_at(&mut self, direction: Point3<f64>) -> Result<Camera> {
        validate_view(&self.position, &direction)?;

        self.direction = direction;
        self.recompute_angles();
        Ok(*self)
    }

    pub fn set_fov(&mut self, fov: f64) -> Result<Camera> {
        validate_fov(fov)?;

        self.fov = fov;
        self.recompute_angles();
        Ok(*self)
    }

    fn recompute_angles(&mut self) {
        let depth = (self.direction.z - self.position.z).abs();
        self.angles = ViewAngles::new(
            view_angle(self.position.y - self.direction.y, depth),
            view_angle(self.position.x - self.direction.x, depth),
        );
    }
}

impl Default for Camera {
    fn default() -> Self {
        let [x, y, z] = DEFAULT_POSITION;
        let position = Point3::new(x, y, z);
        let direction = Point3::origin();
        let mut camera = Self {
            position,
            direction,
            fov: DEFAULT_FOV,
            angles: ViewAngles::zero(),
        };
        camera.recompute_angles();
        camera
    }
}

/// `atan(offset / depth)`, clamped to +/-90 degrees when depth is zero
fn view_angle(offset: f64, depth: f64) -> f64 {
    if depth == 0.0 {
        if offset == 0.0 {
            0.0
        } else {
            std::f64::consts::FRAC_PI_2.copysign(offset)
        }
    } else {
        (offset / depth).atan()
    }
}

fn validate_fov(fov: f64) -> Result<()> {
    if fov.is_finite() && fov > 0.0 && fov < 180.0 {
        Ok(())
    } else {
        Err(Wf3dError::InvalidFov(fov))
    }
}

fn validate_view(position: &Point3<f64>, direction: &Point3<f64>) -> Result<()> {
    if !is_finite_point(position) {
        return Err(Wf3dError::NonFinite("camera position"));
    }
    if !is_finite_point(direction) {
        return Err(Wf3dError::NonFinite("camera direction"));
    }
    if position.z == direction.z {
        return Err(Wf3dError::DegenerateView(position.z));
    }
    Ok(())
}
