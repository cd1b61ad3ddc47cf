/// Character-cell rasterizer for terminal rendering
use crossterm::{
    style::{Color, Print, ResetColor, SetForegroundColor},
    QueueableCommand,
};
use std::io::Write;
use wire3d_core::{Rasterizer, ScreenPoint};

const POLYGON_CHAR: char = '.';
const LINE_CHAR: char = '#';
const MARKER_CHAR: char = 'o';

/// One terminal cell: a glyph and its foreground color
#[derive(Debug, Clone, Copy, PartialEq)]
struct Cell {
    ch: char,
    color: Color,
}

const EMPTY: Cell = Cell {
    ch: ' ',
    color: Color::Reset,
};

/// A framebuffer of terminal cells implementing the core's rasterizer
/// contract
///
/// Primitives clip themselves to the buffer cell by cell, so callers can
/// hand over any integer coordinates the projection produces.
pub struct CellRenderer {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl CellRenderer {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![EMPTY; width * height],
        }
    }

    pub fn clear(&mut self) {
        self.cells.fill(EMPTY);
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    fn set(&mut self, x: i32, y: i32, ch: char, color: Color) {
        if x >= 0 && (x as usize) < self.width && y >= 0 && (y as usize) < self.height {
            self.cells[y as usize * self.width + x as usize] = Cell { ch, color };
        }
    }

    #[cfg(test)]
    fn char_at(&self, x: usize, y: usize) -> char {
        self.cells[y * self.width + x].ch
    }

    /// Queue the whole buffer to the terminal
    pub fn draw<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        for y in 0..self.height {
            for x in 0..self.width {
                let cell = self.cells[y * self.width + x];
                writer.queue(SetForegroundColor(cell.color))?;
                writer.queue(Print(cell.ch))?;
            }
            if y + 1 < self.height {
                writer.queue(Print("\r\n"))?;
            }
        }
        writer.queue(ResetColor)?;
        Ok(())
    }
}

fn to_term_color(color: wire3d_core::Color) -> Color {
    Color::Rgb {
        r: color.r,
        g: color.g,
        b: color.b,
    }
}

impl Rasterizer for CellRenderer {
    /// Even-odd scanline fill over the polygon's bounding rows
    fn fill_polygon(&mut self, points: &[ScreenPoint], color: wire3d_core::Color) {
        if points.len() < 3 {
            return;
        }
        let term_color = to_term_color(color);

        let min_y = points.iter().map(|p| p.y).min().unwrap_or(0).max(0);
        let max_y = points
            .iter()
            .map(|p| p.y)
            .max()
            .unwrap_or(-1)
            .min(self.height as i32 - 1);

        for y in min_y..=max_y {
            let scan = y as f64 + 0.5;
            let mut crossings: Vec<f64> = Vec::new();

            for i in 0..points.len() {
                let a = points[i];
                let b = points[(i + 1) % points.len()];
                let (y0, y1) = (a.y as f64, b.y as f64);
                if (y0 <= scan) == (y1 <= scan) {
                    continue;
                }
                let t = (scan - y0) / (y1 - y0);
                crossings.push(a.x as f64 + t * (b.x as f64 - a.x as f64));
            }

            crossings.sort_by(|p, q| p.total_cmp(q));
            for pair in crossings.chunks_exact(2) {
                let start = pair[0].ceil() as i32;
                let end = pair[1].floor() as i32;
                for x in start..=end {
                    self.set(x, y, POLYGON_CHAR, term_color);
                }
            }
        }
    }

    /// Bresenham integer line walk
    fn draw_line(&mut self, a: ScreenPoint, b: ScreenPoint, color: wire3d_core::Color) {
        let term_color = to_term_color(color);
        let (mut x0, mut y0) = (a.x, a.y);
        let (x1, y1) = (b.x, b.y);

        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;

        loop {
            self.set(x0, y0, LINE_CHAR, term_color);
            if x0 == x1 && y0 == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x0 += sx;
            }
            if e2 <= dx {
                err += dx;
                y0 += sy;
            }
        }
    }

    fn draw_marker(&mut self, point: ScreenPoint, color: wire3d_core::Color) {
        self.set(point.x, point.y, MARKER_CHAR, to_term_color(color));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wire3d_core::Color as CoreColor;

    #[test]
    fn test_horizontal_line_fills_every_cell_between_endpoints() {
        let mut renderer = CellRenderer::new(20, 10);
        renderer.draw_line(
            ScreenPoint::new(2, 5),
            ScreenPoint::new(8, 5),
            CoreColor::BLUE,
        );
        for x in 2..=8 {
            assert_eq!(renderer.char_at(x, 5), LINE_CHAR);
        }
        assert_eq!(renderer.char_at(1, 5), ' ');
        assert_eq!(renderer.char_at(9, 5), ' ');
    }

    #[test]
    fn test_diagonal_line_touches_both_endpoints() {
        let mut renderer = CellRenderer::new(20, 20);
        renderer.draw_line(
            ScreenPoint::new(0, 0),
            ScreenPoint::new(10, 7),
            CoreColor::GREEN,
        );
        assert_eq!(renderer.char_at(0, 0), LINE_CHAR);
        assert_eq!(renderer.char_at(10, 7), LINE_CHAR);
    }

    #[test]
    fn test_primitives_clip_to_the_buffer() {
        let mut renderer = CellRenderer::new(10, 10);
        renderer.draw_line(
            ScreenPoint::new(-5, -5),
            ScreenPoint::new(15, 15),
            CoreColor::RED,
        );
        renderer.draw_marker(ScreenPoint::new(100, 100), CoreColor::RED);
        renderer.draw_marker(ScreenPoint::new(-1, 3), CoreColor::RED);
        // In-bounds part of the diagonal survives
        assert_eq!(renderer.char_at(5, 5), LINE_CHAR);
    }

    #[test]
    fn test_polygon_fill_covers_interior_not_exterior() {
        let mut renderer = CellRenderer::new(20, 20);
        let square = [
            ScreenPoint::new(4, 4),
            ScreenPoint::new(14, 4),
            ScreenPoint::new(14, 14),
            ScreenPoint::new(4, 14),
        ];
        renderer.fill_polygon(&square, CoreColor::SHADOW);
        assert_eq!(renderer.char_at(9, 9), POLYGON_CHAR);
        assert_eq!(renderer.char_at(5, 10), POLYGON_CHAR);
        assert_eq!(renderer.char_at(2, 9), ' ');
        assert_eq!(renderer.char_at(16, 9), ' ');
        assert_eq!(renderer.char_at(9, 2), ' ');
    }

    #[test]
    fn test_degenerate_polygon_is_ignored() {
        let mut renderer = CellRenderer::new(10, 10);
        renderer.fill_polygon(
            &[ScreenPoint::new(1, 1), ScreenPoint::new(5, 5)],
            CoreColor::SHADOW,
        );
        assert!(renderer.cells.iter().all(|c| c.ch == ' '));
    }

    #[test]
    fn test_clear_resets_cells() {
        let mut renderer = CellRenderer::new(10, 10);
        renderer.draw_marker(ScreenPoint::new(3, 3), CoreColor::RED);
        renderer.clear();
        assert!(renderer.cells.iter().all(|c| *c == EMPTY));
    }
}
