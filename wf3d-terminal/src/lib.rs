/// Terminal front-end for the wireframe renderer
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    execute, queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{self, ClearType},
};
use std::io::{self, stdout, Write};
use wf3d_core::{control_for_key, CameraControl, Direction, Scene};

pub mod cli;
pub mod renderer;

pub use cli::Options;
pub use renderer::CharCanvas;

/// Main application struct for terminal rendering
pub struct TerminalApp {
    scene: Scene,
    canvas: CharCanvas,
    running: bool,
    status: Option<String>,
}

impl TerminalApp {
    pub fn new(scene: Scene) -> io::Result<Self> {
        let (width, height) = terminal::size()?;
        Ok(Self::with_size(scene, width, height))
    }

    /// App drawing into a `cols` x `rows` terminal; the last row holds the status line
    pub fn with_size(scene: Scene, cols: u16, rows: u16) -> Self {
        let canvas = Self::canvas_for(&scene, cols, rows);
        Self {
            scene,
            canvas,
            running: true,
            status: None,
        }
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn canvas(&self) -> &CharCanvas {
        &self.canvas
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    fn canvas_for(scene: &Scene, cols: u16, rows: u16) -> CharCanvas {
        let config = scene.config();
        CharCanvas::new(
            cols.max(1) as usize,
            rows.saturating_sub(1).max(1) as usize,
            config.width,
            config.height,
        )
    }

    pub fn run(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        execute!(stdout(), terminal::EnterAlternateScreen, cursor::Hide)?;

        let result = self.main_loop();

        // Cleanup
        terminal::disable_raw_mode()?;
        execute!(stdout(), terminal::LeaveAlternateScreen, cursor::Show)?;

        result
    }

    /// Redraws once up front, then only after events that change the frame
    fn main_loop(&mut self) -> io::Result<()> {
        self.redraw();
        self.present()?;

        while self.running {
            let dirty = match event::read()? {
                Event::Key(KeyEvent {
                    code,
                    kind: KeyEventKind::Press,
                    ..
                }) => self.handle_key(code),
                Event::Resize(cols, rows) => {
                    self.canvas = Self::canvas_for(&self.scene, cols, rows);
                    true
                }
                _ => false,
            };

            if dirty && self.running {
                self.redraw();
                self.present()?;
            }
        }

        Ok(())
    }

    /// Apply a key press. Returns whether the frame needs redrawing.
    pub fn handle_key(&mut self, code: KeyCode) -> bool {
        if matches!(code, KeyCode::Char('q') | KeyCode::Esc) {
            self.running = false;
            return false;
        }

        let Some(control) = control_for_code(code) else {
            return false;
        };

        match self.scene.apply(control) {
            Ok(camera) => {
                log::debug!("{:?} accepted, camera at {:?}", control, camera.position());
                self.status = None;
            }
            Err(err) => {
                log::warn!("{:?} rejected: {}", control, err);
                self.status = Some(err.to_string());
            }
        }
        true
    }

    /// Rasterise the scene into the character canvas
    pub fn redraw(&mut self) {
        let stats = self.scene.redraw(&mut self.canvas);
        log::trace!("frame: {:?}", stats);
    }

    pub fn status_line(&self) -> String {
        if let Some(status) = &self.status {
            return format!("! {status}");
        }

        let camera = self.scene.camera();
        let position = camera.position();
        let (yz, xz, _) = camera.angles().to_degrees();
        format!(
            "WF3D | camera ({:.0}, {:.0}, {:.0}) pitch {:.1} yaw {:.1} fov {:.0} {:?} | \
             Arrows=Move W/S=Dolly [/]=FOV P=Projection R=Reset Q=Quit",
            position.x,
            position.y,
            position.z,
            yz,
            xz,
            camera.fov(),
            self.scene.mode(),
        )
    }

    fn present(&self) -> io::Result<()> {
        let mut stdout = stdout();
        queue!(stdout, cursor::MoveTo(0, 0))?;

        self.canvas.draw(&mut stdout)?;

        let mut status = self.status_line();
        status.truncate(self.canvas.width());
        let color = if self.status.is_some() {
            Color::Red
        } else {
            Color::Yellow
        };
        queue!(
            stdout,
            cursor::MoveTo(0, self.canvas.height() as u16),
            terminal::Clear(ClearType::CurrentLine),
            SetForegroundColor(color),
            Print(status),
            ResetColor
        )?;

        stdout.flush()?;
        Ok(())
    }
}

/// Map a terminal key to a camera control
pub fn control_for_code(code: KeyCode) -> Option<CameraControl> {
    match code {
        KeyCode::Left => Some(CameraControl::Move(Direction::Left)),
        KeyCode::Right => Some(CameraControl::Move(Direction::Right)),
        KeyCode::Up => Some(CameraControl::Move(Direction::Up)),
        KeyCode::Down => Some(CameraControl::Move(Direction::Down)),
        KeyCode::Char(c) => control_for_key(c.encode_utf8(&mut [0; 4])),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Point3;
    use wf3d_core::{Placement, SceneConfig};

    fn app() -> TerminalApp {
        let mut scene = Scene::new(SceneConfig::default().with_move_step(10.0)).unwrap();
        scene
            .add_cube(Point3::origin(), 100.0, Placement::Centered)
            .unwrap();
        TerminalApp::with_size(scene, 150, 41)
    }

    #[test]
    fn test_canvas_leaves_room_for_status() {
        let app = app();
        assert_eq!(app.canvas().width(), 150);
        assert_eq!(app.canvas().height(), 40);
    }

    #[test]
    fn test_arrow_moves_camera() {
        let mut app = app();
        assert!(app.handle_key(KeyCode::Right));
        assert_eq!(
            app.scene().camera().position(),
            Point3::new(10.0, 0.0, -50.0)
        );
        assert!(app.is_running());
    }

    #[test]
    fn test_quit_keys() {
        let mut app = app();
        assert!(!app.handle_key(KeyCode::Char('q')));
        assert!(!app.is_running());
    }

    #[test]
    fn test_unmapped_key_is_ignored() {
        let mut app = app();
        assert!(!app.handle_key(KeyCode::Char('x')));
        assert!(!app.handle_key(KeyCode::Tab));
    }

    #[test]
    fn test_rejected_move_sets_status() {
        let mut app = app();
        for _ in 0..4 {
            app.handle_key(KeyCode::Char('w'));
        }
        assert!(app.status_line().starts_with("WF3D"));
        assert_eq!(app.scene().camera().position().z, -10.0);

        app.handle_key(KeyCode::Char('w'));
        assert!(app.status_line().starts_with('!'));
        assert_eq!(app.scene().camera().position().z, -10.0);

        app.handle_key(KeyCode::Char('r'));
        assert!(app.status_line().starts_with("WF3D"));
    }

    #[test]
    fn test_redraw_puts_cube_on_canvas() {
        let mut app = app();
        app.redraw();
        let rows = app.canvas().rows();
        let points = rows.iter().map(|r| r.matches('@').count()).sum::<usize>();
        assert!(points >= 8);
        // Front face is symmetric about the center cell
        assert_eq!(app.canvas().cell(75, 20), Some(' '));
    }

    #[test]
    fn test_char_keys_share_dom_mapping() {
        assert_eq!(
            control_for_code(KeyCode::Char('p')),
            Some(CameraControl::ToggleProjection)
        );
        assert_eq!(
            control_for_code(KeyCode::Up),
            control_for_key("ArrowUp")
        );
    }
}
