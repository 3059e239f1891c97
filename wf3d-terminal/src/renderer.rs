/// Character-cell drawing surface for terminal rendering
use crossterm::{
    style::{Color, Print, ResetColor, SetForegroundColor},
    QueueableCommand,
};
use std::io::Write;
use wf3d_core::{surface, DrawSurface};

const POINT_GLYPH: char = '@';
const EMPTY: char = ' ';

/// Maps a virtual pixel viewport onto a grid of terminal cells
pub struct CharCanvas {
    width: usize,
    height: usize,
    scale_x: f64,
    scale_y: f64,
    char_buffer: Vec<char>,
    color_buffer: Vec<Color>,
    stroke: Color,
    fill: Color,
}

impl CharCanvas {
    /// `width` x `height` cells covering a `viewport_width` x `viewport_height`
    /// pixel viewport
    pub fn new(width: usize, height: usize, viewport_width: u32, viewport_height: u32) -> Self {
        let size = width * height;
        Self {
            width,
            height,
            scale_x: width as f64 / viewport_width.max(1) as f64,
            scale_y: height as f64 / viewport_height.max(1) as f64,
            char_buffer: vec![EMPTY; size],
            color_buffer: vec![Color::Reset; size],
            stroke: Color::Reset,
            fill: Color::Reset,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Glyph at a cell, if inside the grid
    pub fn cell(&self, col: usize, row: usize) -> Option<char> {
        if col < self.width && row < self.height {
            Some(self.char_buffer[row * self.width + col])
        } else {
            None
        }
    }

    /// Rows as strings, without color
    pub fn rows(&self) -> Vec<String> {
        self.char_buffer
            .chunks(self.width.max(1))
            .map(|row| row.iter().collect())
            .collect()
    }

    fn to_cell(&self, x: f64, y: f64) -> (f64, f64) {
        (x * self.scale_x, y * self.scale_y)
    }

    fn plot(&mut self, col: i64, row: i64, glyph: char, color: Color) {
        if col < 0 || row < 0 || col >= self.width as i64 || row >= self.height as i64 {
            return;
        }
        let idx = row as usize * self.width + col as usize;
        // Points win over lines passing through the same cell
        if self.char_buffer[idx] == POINT_GLYPH && glyph != POINT_GLYPH {
            return;
        }
        self.char_buffer[idx] = glyph;
        self.color_buffer[idx] = color;
    }

    /// Fill every cell whose area overlaps the pixel rectangle
    fn fill_cells(&mut self, x: f64, y: f64, width: f64, height: f64, glyph: char, color: Color) {
        if ![x, y, width, height].iter().all(|v| v.is_finite()) {
            return;
        }
        let (x0, y0) = self.to_cell(x, y);
        let (x1, y1) = self.to_cell(x + width, y + height);
        let max_col = self.width as f64;
        let max_row = self.height as f64;

        // Clamp one cell past each border so fully off-grid rects plot nothing
        let col_start = x0.floor().clamp(-1.0, max_col) as i64;
        let col_end = (x1.ceil().clamp(-1.0, max_col) as i64).max(col_start + 1);
        let row_start = y0.floor().clamp(-1.0, max_row) as i64;
        let row_end = (y1.ceil().clamp(-1.0, max_row) as i64).max(row_start + 1);

        for row in row_start..row_end {
            for col in col_start..col_end {
                self.plot(col, row, glyph, color);
            }
        }
    }

    pub fn draw<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        let mut current = None;
        for y in 0..self.height {
            for x in 0..self.width {
                let idx = y * self.width + x;
                let color = self.color_buffer[idx];
                if current != Some(color) {
                    writer.queue(SetForegroundColor(color))?;
                    current = Some(color);
                }
                writer.queue(Print(self.char_buffer[idx]))?;
            }
            writer.queue(Print("\r\n"))?;
        }
        writer.queue(ResetColor)?;
        Ok(())
    }
}

impl DrawSurface for CharCanvas {
    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        if ![x, y, width, height].iter().all(|v| v.is_finite()) {
            return;
        }
        let (x0, y0) = self.to_cell(x, y);
        let (x1, y1) = self.to_cell(x + width, y + height);
        let col_start = x0.floor().max(0.0) as usize;
        let row_start = y0.floor().max(0.0) as usize;
        let col_end = (x1.ceil().max(0.0) as usize).min(self.width);
        let row_end = (y1.ceil().max(0.0) as usize).min(self.height);

        for row in row_start..row_end {
            for col in col_start..col_end {
                let idx = row * self.width + col;
                self.char_buffer[idx] = EMPTY;
                self.color_buffer[idx] = Color::Reset;
            }
        }
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.fill_cells(x, y, width, height, POINT_GLYPH, self.fill);
    }

    fn stroke_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) {
        if ![x1, y1, x2, y2].iter().all(|v| v.is_finite()) {
            return;
        }
        let from = self.to_cell(x1, y1);
        let to = self.to_cell(x2, y2);
        let glyph = line_glyph(to.0 - from.0, to.1 - from.1);

        let bounds = (self.width as f64, self.height as f64);
        let Some(((c1, r1), (c2, r2))) = clip_segment(from, to, bounds) else {
            log::trace!("line from ({x1}, {y1}) to ({x2}, {y2}) misses the grid");
            return;
        };
        let (dc, dr) = (c2 - c1, r2 - r1);

        // DDA in cell space, one plot per cell step along the major axis
        let steps = dc.abs().max(dr.abs()).ceil().max(1.0) as i64;
        for i in 0..=steps {
            let t = i as f64 / steps as f64;
            let col = (c1 + dc * t).floor() as i64;
            let row = (r1 + dr * t).floor() as i64;
            self.plot(col, row, glyph, self.stroke);
        }
    }

    fn set_stroke_style(&mut self, color: surface::Color, _line_width: f64) {
        self.stroke = to_terminal_color(color);
    }

    fn set_fill_style(&mut self, color: surface::Color) {
        self.fill = to_terminal_color(color);
    }
}

/// Liang-Barsky clip of a segment to `[0, max.0] x [0, max.1]`
fn clip_segment(
    from: (f64, f64),
    to: (f64, f64),
    max: (f64, f64),
) -> Option<((f64, f64), (f64, f64))> {
    let (dx, dy) = (to.0 - from.0, to.1 - from.1);
    let (mut t0, mut t1) = (0.0f64, 1.0f64);

    for (p, q) in [
        (-dx, from.0),
        (dx, max.0 - from.0),
        (-dy, from.1),
        (dy, max.1 - from.1),
    ] {
        if p == 0.0 {
            // Parallel to this border
            if q < 0.0 {
                return None;
            }
            continue;
        }
        let r = q / p;
        if p < 0.0 {
            if r > t1 {
                return None;
            }
            t0 = t0.max(r);
        } else {
            if r < t0 {
                return None;
            }
            t1 = t1.min(r);
        }
    }

    Some((
        (from.0 + t0 * dx, from.1 + t0 * dy),
        (from.0 + t1 * dx, from.1 + t1 * dy),
    ))
}

/// Glyph approximating a line's slope in screen space (y down)
fn line_glyph(dc: f64, dr: f64) -> char {
    let (adc, adr) = (dc.abs(), dr.abs());
    if adr * 2.0 < adc {
        '-'
    } else if adc * 2.0 < adr {
        '|'
    } else if (dc > 0.0) == (dr > 0.0) {
        '\\'
    } else {
        '/'
    }
}

/// Black is the default ink; map it to the terminal's foreground
fn to_terminal_color(color: surface::Color) -> Color {
    if color == surface::Color::BLACK {
        Color::Reset
    } else {
        Color::Rgb {
            r: color.r,
            g: color.g,
            b: color.b,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn canvas() -> CharCanvas {
        // One cell per 10x10 pixels
        CharCanvas::new(20, 10, 200, 100)
    }

    #[test]
    fn test_fill_rect_marks_cells() {
        let mut canvas = canvas();
        canvas.fill_rect(48.0, 48.0, 4.0, 4.0);
        assert_eq!(canvas.cell(4, 4), Some(POINT_GLYPH));
        assert_eq!(canvas.cell(5, 5), Some(POINT_GLYPH));
        assert_eq!(canvas.cell(3, 3), Some(EMPTY));
    }

    #[test]
    fn test_horizontal_line() {
        let mut canvas = canvas();
        canvas.stroke_line(5.0, 25.0, 95.0, 25.0);
        assert_eq!(canvas.rows()[2], "----------          ");
    }

    #[test]
    fn test_line_glyphs() {
        assert_eq!(line_glyph(10.0, 0.0), '-');
        assert_eq!(line_glyph(0.0, -10.0), '|');
        assert_eq!(line_glyph(5.0, 5.0), '\\');
        assert_eq!(line_glyph(5.0, -5.0), '/');
    }

    #[test]
    fn test_points_are_not_overdrawn_by_lines() {
        let mut canvas = canvas();
        canvas.fill_rect(0.0, 0.0, 5.0, 5.0);
        canvas.stroke_line(0.0, 5.0, 50.0, 5.0);
        assert_eq!(canvas.cell(0, 0), Some(POINT_GLYPH));
        assert_eq!(canvas.cell(1, 0), Some('-'));
    }

    #[test]
    fn test_out_of_range_input_is_clipped() {
        let mut canvas = canvas();
        canvas.fill_rect(-1000.0, -1000.0, 5.0, 5.0);
        canvas.stroke_line(f64::NAN, 0.0, 10.0, 10.0);
        canvas.stroke_line(-50.0, 5.0, 15.0, 5.0);
        assert_eq!(canvas.cell(0, 0), Some('-'));
        assert_eq!(canvas.cell(0, 1), Some(EMPTY));
    }

    #[test]
    fn test_long_line_is_clipped_not_dropped() {
        let mut canvas = canvas();
        canvas.stroke_line(-1.0e6, 25.0, 1.0e6, 25.0);
        assert_eq!(canvas.rows()[2], "-".repeat(20));

        canvas.stroke_line(-1.0e6, -1.0e6, 1.0e6, 1.0e6);
        assert_eq!(canvas.cell(0, 0), Some('\\'));
        assert_eq!(canvas.cell(9, 9), Some('\\'));
    }

    #[test]
    fn test_line_outside_grid_draws_nothing() {
        let mut canvas = canvas();
        canvas.stroke_line(-1.0e6, -50.0, 1.0e6, -50.0);
        canvas.stroke_line(500.0, 0.0, 500.0, 100.0);
        assert!(canvas.rows().iter().all(|row| row.trim().is_empty()));
    }

    #[test]
    fn test_clip_segment() {
        let clipped = clip_segment((-10.0, 5.0), (30.0, 5.0), (20.0, 10.0)).unwrap();
        assert_eq!(clipped, ((0.0, 5.0), (20.0, 5.0)));
        assert_eq!(
            clip_segment((1.0, 1.0), (4.0, 2.0), (20.0, 10.0)),
            Some(((1.0, 1.0), (4.0, 2.0)))
        );
        assert_eq!(clip_segment((-5.0, -1.0), (-1.0, -5.0), (20.0, 10.0)), None);
    }

    #[test]
    fn test_clear_rect() {
        let mut canvas = canvas();
        canvas.fill_rect(0.0, 0.0, 200.0, 100.0);
        canvas.clear_rect(0.0, 0.0, 200.0, 100.0);
        assert!(canvas.rows().iter().all(|row| row.trim().is_empty()));
    }

    #[test]
    fn test_draw_writes_every_row() {
        let mut canvas = canvas();
        canvas.fill_rect(0.0, 0.0, 5.0, 5.0);
        let mut out = Vec::new();
        canvas.draw(&mut out).unwrap();
        let text = String::from_utf8_lossy(&out);
        assert_eq!(text.matches("\r\n").count(), 10);
        assert!(text.contains(POINT_GLYPH));
    }
}
