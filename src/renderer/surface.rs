//! Drawing primitives supplied by the host
//!
//! A surface is a grid of character cells. Only `draw` is required; lines,
//! rectangles and text are built on top of it, so an adapter that changes
//! how a single cell is plotted (see [`Wrapped`]) changes every primitive.

use crate::sim::{Playfield, wrap_axis};

/// Full block glyph used for solid cells
pub const SOLID: char = '\u{2588}';

/// Palette used by the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Color {
    #[default]
    Black,
    White,
    Yellow,
}

/// One character cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub glyph: char,
    pub color: Color,
}

impl Cell {
    /// Cleared background
    pub const BLANK: Cell = Cell {
        glyph: SOLID,
        color: Color::Black,
    };

    pub const fn solid(color: Color) -> Self {
        Self { glyph: SOLID, color }
    }

    /// True when the cell carries no visible ink
    pub fn is_blank(&self) -> bool {
        self.color == Color::Black || self.glyph == ' '
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::BLANK
    }
}

/// A drawable cell grid
pub trait Surface {
    fn width(&self) -> i32;
    fn height(&self) -> i32;

    /// Plot a single cell. Implementations ignore cells they cannot show.
    fn draw(&mut self, x: i32, y: i32, cell: Cell);

    /// Bresenham line, both endpoints inclusive
    fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, cell: Cell) {
        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;
        let (mut x, mut y) = (x0, y0);

        loop {
            self.draw(x, y, cell);
            if x == x1 && y == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, cell: Cell) {
        for row in y..y + h {
            for col in x..x + w {
                self.draw(col, row, cell);
            }
        }
    }

    fn draw_text(&mut self, x: i32, y: i32, text: &str, color: Color) {
        for (i, glyph) in text.chars().enumerate() {
            self.draw(x + i as i32, y, Cell { glyph, color });
        }
    }

    fn clear(&mut self) {
        let (w, h) = (self.width(), self.height());
        self.fill_rect(0, 0, w, h, Cell::BLANK);
    }
}

/// Plots every cell through the playfield wraparound mapper
pub struct Wrapped<'a, S: Surface + ?Sized> {
    inner: &'a mut S,
    playfield: Playfield,
}

impl<'a, S: Surface + ?Sized> Wrapped<'a, S> {
    pub fn new(inner: &'a mut S, playfield: Playfield) -> Self {
        Self { inner, playfield }
    }
}

impl<S: Surface + ?Sized> Surface for Wrapped<'_, S> {
    fn width(&self) -> i32 {
        self.inner.width()
    }

    fn height(&self) -> i32 {
        self.inner.height()
    }

    fn draw(&mut self, x: i32, y: i32, cell: Cell) {
        let wx = wrap_axis(x as f32, self.playfield.width) as i32;
        let wy = wrap_axis(y as f32, self.playfield.height) as i32;
        self.inner.draw(wx, wy, cell);
    }
}
