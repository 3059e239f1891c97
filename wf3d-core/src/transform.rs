/// Camera-space rotation matrices and view angles
use nalgebra::{Matrix3, Point3};

/// Rotation angles derived from the camera (in radians)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ViewAngles {
    /// Pitch: rotation about the x axis, in the y-z plane
    pub yz: f64,
    /// Yaw: rotation about the y axis, in the x-z plane
    pub xz: f64,
    /// Roll about the view axis. Reserved, always zero.
    pub xy: f64,
}

impl ViewAngles {
    pub fn new(yz: f64, xz: f64) -> Self {
        Self { yz, xz, xy: 0.0 }
    }

    pub fn zero() -> Self {
        Self::default()
    }

    pub fn to_degrees(self) -> (f64, f64, f64) {
        (self.yz.to_degrees(), self.xz.to_degrees(), self.xy.to_degrees())
    }
}

/// Elemental rotation builders
pub struct Transform;

impl Transform {
    pub fn rotation_x(angle: f64) -> Matrix3<f64> {
        let (s, c) = angle.sin_cos();
        Matrix3::new(
            1.0, 0.0, 0.0, //
            0.0, c, -s, //
            0.0, s, c,
        )
    }

    pub fn rotation_y(angle: f64) -> Matrix3<f64> {
        let (s, c) = angle.sin_cos();
        Matrix3::new(
            c, 0.0, s, //
            0.0, 1.0, 0.0, //
            -s, 0.0, c,
        )
    }

    pub fn rotation_z(angle: f64) -> Matrix3<f64> {
        let (s, c) = angle.sin_cos();
        Matrix3::new(
            c, -s, 0.0, //
            s, c, 0.0, //
            0.0, 0.0, 1.0,
        )
    }

    /// Combined camera rotation: x first, then y, then z
    pub fn rotation_matrix(angles: &ViewAngles) -> Matrix3<f64> {
        Self::rotation_z(angles.xy) * Self::rotation_y(angles.xz) * Self::rotation_x(angles.yz)
    }

    /// Rotate a point about the world origin
    pub fn apply(matrix: &Matrix3<f64>, point: &Point3<f64>) -> Point3<f64> {
        Point3::from(matrix * point.coords)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    fn assert_close(a: Point3<f64>, b: Point3<f64>) {
        assert!((a - b).norm() < 1e-9, "{a} != {b}");
    }

    #[test]
    fn test_identity_rotation() {
        let matrix = Transform::rotation_matrix(&ViewAngles::zero());
        assert!((matrix - Matrix3::identity()).norm() < 1e-12);
    }

    #[test]
    fn test_quarter_turns() {
        let p = Point3::new(0.0, 1.0, 0.0);
        assert_close(
            Transform::apply(&Transform::rotation_x(FRAC_PI_2), &p),
            Point3::new(0.0, 0.0, 1.0),
        );

        let p = Point3::new(0.0, 0.0, 1.0);
        assert_close(
            Transform::apply(&Transform::rotation_y(FRAC_PI_2), &p),
            Point3::new(1.0, 0.0, 0.0),
        );

        let p = Point3::new(1.0, 0.0, 0.0);
        assert_close(
            Transform::apply(&Transform::rotation_z(FRAC_PI_2), &p),
            Point3::new(0.0, 1.0, 0.0),
        );
    }

    #[test]
    fn test_x_then_y_order() {
        // x first sends +y to +z, then y sends +z to +x
        let angles = ViewAngles::new(FRAC_PI_2, FRAC_PI_2);
        let matrix = Transform::rotation_matrix(&angles);
        assert_close(
            Transform::apply(&matrix, &Point3::new(0.0, 1.0, 0.0)),
            Point3::new(1.0, 0.0, 0.0),
        );
    }

    #[test]
    fn test_rotation_preserves_length() {
        let matrix = Transform::rotation_matrix(&ViewAngles::new(0.3, -1.1));
        let p = Point3::new(3.0, -4.0, 12.0);
        let rotated = Transform::apply(&matrix, &p);
        assert!((rotated.coords.norm() - 13.0).abs() < 1e-9);
    }
}
