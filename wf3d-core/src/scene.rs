/// Scene: shapes plus one camera, rendered onto a drawing surface
use nalgebra::{Point3, Vector3};

use crate::camera::Camera;
use crate::config::{SceneConfig, FOV_STEP};
use crate::error::Result;
use crate::geometry::Shape;
use crate::input::CameraControl;
use crate::projection::{ProjectedPoint, ProjectionMode, Projector};
use crate::shapes::{self, Placement};
use crate::surface::DrawSurface;

/// Cubes of the bootstrap scene: center and side length
pub const DEMO_CUBES: [([f64; 3], f64); 8] = [
    ([0.0, 0.0, 0.0], 100.0),
    ([-150.0, -100.0, 0.0], 20.0),
    ([0.0, 125.0, 0.0], 50.0),
    ([150.0, 50.0, 0.0], 100.0),
    ([-200.0, 0.0, 0.0], 100.0),
    ([300.0, -200.0, 500.0], 120.0),
    ([-200.0, 0.0, 0.0], 100.0),
    ([0.0, -150.0, -10.0], 50.0),
];

/// Counters from one render pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderStats {
    pub shapes: usize,
    pub points: usize,
    pub edges: usize,
    pub skipped_points: usize,
    pub skipped_edges: usize,
}

pub struct Scene {
    config: SceneConfig,
    camera: Camera,
    shapes: Vec<Shape>,
    projector: Projector,
}

impl Scene {
    pub fn new(config: SceneConfig) -> Result<Self> {
        config.validate()?;
        let camera = config.camera()?;
        let projector = Projector::new(config.width, config.height, config.mode);

        Ok(Self {
            config,
            camera,
            shapes: Vec::new(),
            projector,
        })
    }

    /// Scene populated with the demo cubes
    pub fn demo(config: SceneConfig) -> Result<Self> {
        let mut scene = Self::new(config)?;
        for ([x, y, z], side) in DEMO_CUBES {
            scene.add_cube(Point3::new(x, y, z), side, Placement::Centered)?;
        }
        Ok(scene)
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn mode(&self) -> ProjectionMode {
        self.projector.mode()
    }

    /// Generate a cube, append it with the next index and return it
    pub fn add_cube(
        &mut self,
        origin: Point3<f64>,
        side: f64,
        placement: Placement,
    ) -> Result<&Shape> {
        let shape = shapes::cube(self.shapes.len(), origin, side, placement)?;
        log::debug!(
            "added cube #{} at {:?} (side {}, {:?})",
            shape.index(),
            origin,
            side,
            placement
        );
        self.shapes.push(shape);
        Ok(&self.shapes[self.shapes.len() - 1])
    }

    pub fn move_camera(&mut self, delta: Vector3<f64>) -> Result<Camera> {
        self.camera.move_by(delta)
    }

    /// Apply one input control and return the resulting camera.
    ///
    /// On error the scene is left unchanged.
    pub fn apply(&mut self, control: CameraControl) -> Result<Camera> {
        let camera = match control {
            CameraControl::Move(direction) => {
                self.move_camera(direction.unit() * self.config.move_step)?
            }
            CameraControl::WidenFov => self.camera.set_fov(self.camera.fov() + FOV_STEP)?,
            CameraControl::NarrowFov => self.camera.set_fov(self.camera.fov() - FOV_STEP)?,
            CameraControl::ToggleProjection => {
                self.projector.set_mode(self.projector.mode().toggled());
                self.camera
            }
            CameraControl::Reset => {
                self.camera = self.config.camera()?;
                self.camera
            }
        };
        log::debug!("{:?} -> camera at {:?}", control, camera.position());
        Ok(camera)
    }

    pub fn project(&self, shape: &Shape) -> Vec<ProjectedPoint> {
        self.projector.project_all(&self.camera, shape.points())
    }

    pub fn clear<S: DrawSurface>(&self, surface: &mut S) {
        surface.clear_rect(
            0.0,
            0.0,
            self.config.width as f64,
            self.config.height as f64,
        );
    }

    /// Draw every shape: a filled square per point, then a line per edge.
    ///
    /// Points with non-finite coordinates are skipped along with their edges.
    pub fn render<S: DrawSurface>(&self, surface: &mut S) -> RenderStats {
        let style = &self.config.style;
        surface.set_stroke_style(style.stroke, style.line_width);
        surface.set_fill_style(style.fill);

        let size = self.config.point_size;
        let mut stats = RenderStats::default();

        for shape in &self.shapes {
            let images = self.project(shape);

            for image in &images {
                if image.is_finite() {
                    surface.fill_rect(image.x - size / 2.0, image.y - size / 2.0, size, size);
                    stats.points += 1;
                } else {
                    stats.skipped_points += 1;
                }
            }

            for &(a, b) in shape.edges() {
                let (from, to) = (images[a], images[b]);
                if from.is_finite() && to.is_finite() {
                    surface.stroke_line(from.x, from.y, to.x, to.y);
                    stats.edges += 1;
                } else {
                    stats.skipped_edges += 1;
                }
            }
            stats.shapes += 1;
        }

        if stats.skipped_points > 0 {
            log::warn!(
                "skipped {} non-finite points and {} edges",
                stats.skipped_points,
                stats.skipped_edges
            );
        }
        log::debug!("rendered {:?}", stats);
        stats
    }

    /// Full clear and render
    pub fn redraw<S: DrawSurface>(&self, surface: &mut S) -> RenderStats {
        self.clear(surface);
        self.render(surface)
    }
}
