/// WF3D Web - HTML canvas front-end
///
/// Binds a scene to a `<canvas>` element through the 2D context. Keyboard
/// events are forwarded from JavaScript with `handle_key(event.key)`.
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};
use wf3d_core::{control_for_key, Color, DrawSurface, Scene, SceneConfig, Wf3dError};

/// Drawing surface backed by a canvas 2D context
pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(ctx: CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }
}

impl DrawSurface for CanvasSurface {
    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.ctx.clear_rect(x, y, width, height);
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.ctx.fill_rect(x, y, width, height);
    }

    fn stroke_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) {
        self.ctx.begin_path();
        self.ctx.move_to(x1, y1);
        self.ctx.line_to(x2, y2);
        self.ctx.stroke();
    }

    #[allow(deprecated)]
    fn set_stroke_style(&mut self, color: Color, line_width: f64) {
        self.ctx
            .set_stroke_style(&JsValue::from_str(&color.to_string()));
        self.ctx.set_line_width(line_width);
    }

    #[allow(deprecated)]
    fn set_fill_style(&mut self, color: Color) {
        self.ctx.set_fill_style(&JsValue::from_str(&color.to_string()));
    }
}

fn to_js(err: Wf3dError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Apply the control bound to `key`. Rejected controls are logged and returned.
fn dispatch_key(scene: &mut Scene, key: &str) -> Result<bool, Wf3dError> {
    let Some(control) = control_for_key(key) else {
        return Ok(false);
    };
    if let Err(err) = scene.apply(control) {
        log::warn!("{:?} rejected: {}", control, err);
        return Err(err);
    }
    Ok(true)
}

#[wasm_bindgen]
pub struct WebRenderer {
    scene: Scene,
    surface: CanvasSurface,
}

#[wasm_bindgen]
impl WebRenderer {
    /// Attach to the canvas with the given id and draw the demo scene
    #[wasm_bindgen(constructor)]
    pub fn new(canvas_id: &str) -> Result<WebRenderer, JsValue> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| JsValue::from_str("no document available"))?;
        let canvas: HtmlCanvasElement = document
            .get_element_by_id(canvas_id)
            .ok_or_else(|| JsValue::from_str(&format!("no element with id {canvas_id:?}")))?
            .dyn_into()
            .map_err(|_| JsValue::from_str(&format!("#{canvas_id} is not a canvas")))?;

        let config = SceneConfig::default();
        canvas.set_width(config.width);
        canvas.set_height(config.height);

        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into()?;

        let scene = Scene::demo(config).map_err(to_js)?;
        let mut renderer = WebRenderer {
            scene,
            surface: CanvasSurface::new(ctx),
        };
        renderer.render();
        Ok(renderer)
    }

    /// Clear and redraw the whole scene
    pub fn render(&mut self) {
        let stats = self.scene.redraw(&mut self.surface);
        log::debug!("rendered {:?}", stats);
    }

    /// Handle a `KeyboardEvent.key` value. Returns whether the key was used.
    pub fn handle_key(&mut self, key: &str) -> Result<bool, JsValue> {
        let used = dispatch_key(&mut self.scene, key).map_err(to_js)?;
        if used {
            self.render();
        }
        Ok(used)
    }

    /// Translate the camera and redraw
    pub fn move_camera(&mut self, dx: f64, dy: f64, dz: f64) -> Result<(), JsValue> {
        let delta = nalgebra::Vector3::new(dx, dy, dz);
        if let Err(err) = self.scene.move_camera(delta) {
            log::warn!("camera move by {:?} rejected: {}", delta, err);
            return Err(to_js(err));
        }
        self.render();
        Ok(())
    }

    /// Camera position as `[x, y, z]`
    pub fn camera_position(&self) -> Vec<f64> {
        let p = self.scene.camera().position();
        vec![p.x, p.y, p.z]
    }
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    Ok(())
}
