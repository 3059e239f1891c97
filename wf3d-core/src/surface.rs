/// Drawing surface abstraction consumed by the scene renderer
use std::fmt;

/// 8-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

/// CSS hex notation, e.g. `#00ff7f`
impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// 2D raster target. Coordinates are viewport pixels, origin top-left.
pub trait DrawSurface {
    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64);

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64);

    fn stroke_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64);

    fn set_stroke_style(&mut self, color: Color, line_width: f64);

    fn set_fill_style(&mut self, color: Color);
}

/// A single recorded drawing call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear { x: f64, y: f64, width: f64, height: f64 },
    FillRect { x: f64, y: f64, width: f64, height: f64 },
    Line { x1: f64, y1: f64, x2: f64, y2: f64 },
    StrokeStyle { color: Color, line_width: f64 },
    FillStyle { color: Color },
}

/// Surface that records every call instead of rasterising
#[derive(Debug, Clone, Default)]
pub struct DisplayList {
    pub commands: Vec<DrawCommand>,
}

impl DisplayList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Line { .. }))
    }

    pub fn rects(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::FillRect { .. }))
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl DrawSurface for DisplayList {
    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.commands.push(DrawCommand::Clear {
            x,
            y,
            width,
            height,
        });
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.commands.push(DrawCommand::FillRect {
            x,
            y,
            width,
            height,
        });
    }

    fn stroke_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) {
        self.commands.push(DrawCommand::Line { x1, y1, x2, y2 });
    }

    fn set_stroke_style(&mut self, color: Color, line_width: f64) {
        self.commands
            .push(DrawCommand::StrokeStyle { color, line_width });
    }

    fn set_fill_style(&mut self, color: Color) {
        self.commands.push(DrawCommand::FillStyle { color });
    }
}
