/// Camera controls delivered by a front-end's input layer
use nalgebra::Vector3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
    /// Toward +z
    Forward,
    /// Toward -z
    Backward,
}

impl Direction {
    /// Unit step along the matching world axis
    pub fn unit(self) -> Vector3<f64> {
        match self {
            Direction::Left => -Vector3::x(),
            Direction::Right => Vector3::x(),
            Direction::Up => Vector3::y(),
            Direction::Down => -Vector3::y(),
            Direction::Forward => Vector3::z(),
            Direction::Backward => -Vector3::z(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraControl {
    Move(Direction),
    WidenFov,
    NarrowFov,
    ToggleProjection,
    /// Restore the configured camera
    Reset,
}

/// Map a DOM `KeyboardEvent.key` value to a control
pub fn control_for_key(key: &str) -> Option<CameraControl> {
    let control = match key {
        "ArrowLeft" => CameraControl::Move(Direction::Left),
        "ArrowRight" => CameraControl::Move(Direction::Right),
        "ArrowUp" => CameraControl::Move(Direction::Up),
        "ArrowDown" => CameraControl::Move(Direction::Down),
        "w" | "W" => CameraControl::Move(Direction::Forward),
        "s" | "S" => CameraControl::Move(Direction::Backward),
        "]" => CameraControl::WidenFov,
        "[" => CameraControl::NarrowFov,
        "p" | "P" => CameraControl::ToggleProjection,
        "r" | "R" => CameraControl::Reset,
        _ => return None,
    };
    Some(control)
}
