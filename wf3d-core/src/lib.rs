/// WF3D Core Library - Wireframe geometry pipeline
///
/// Shapes are lists of world-space points joined by edges. A scene projects them
/// through a movable perspective camera and hands the resulting 2D points and
/// lines to an injected drawing surface.

pub mod camera;
pub mod config;
pub mod error;
pub mod geometry;
pub mod input;
pub mod parse;
pub mod projection;
pub mod scene;
pub mod shapes;
pub mod surface;
pub mod transform;

// Re-export commonly used types
pub use camera::Camera;
pub use config::{SceneConfig, Style};
pub use error::{Result, Wf3dError};
pub use geometry::{Edge, Shape};
pub use input::{control_for_key, CameraControl, Direction};
pub use projection::{ProjectedPoint, ProjectionMode, Projector};
pub use scene::{RenderStats, Scene};
pub use shapes::Placement;
pub use surface::{Color, DisplayList, DrawCommand, DrawSurface};
pub use transform::{Transform, ViewAngles};
