//! In-memory cell framebuffer

use super::surface::{Cell, Surface};

/// A fixed-size grid of cells. Out-of-range writes are dropped.
#[derive(Debug, Clone)]
pub struct Canvas {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Canvas {
    pub fn new(width: u16, height: u16) -> Self {
        let (width, height) = (width as usize, height as usize);
        Self {
            width,
            height,
            cells: vec![Cell::BLANK; width * height],
        }
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        (x < self.width && y < self.height).then(|| y * self.width + x)
    }

    pub fn get(&self, x: i32, y: i32) -> Option<Cell> {
        self.index(x, y).map(|i| self.cells[i])
    }

    /// One row of cells
    pub fn row(&self, y: usize) -> &[Cell] {
        &self.cells[y * self.width..(y + 1) * self.width]
    }

    /// Coordinates of every visible cell, row by row
    pub fn inked(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| !c.is_blank())
            .map(|(i, _)| ((i % self.width) as i32, (i / self.width) as i32))
    }

    /// Text from one row, blank cells as spaces
    pub fn row_text(&self, y: usize) -> String {
        self.row(y)
            .iter()
            .map(|c| if c.is_blank() { ' ' } else { c.glyph })
            .collect()
    }
}

impl Surface for Canvas {
    fn width(&self) -> i32 {
        self.width as i32
    }

    fn height(&self) -> i32 {
        self.height as i32
    }

    fn draw(&mut self, x: i32, y: i32, cell: Cell) {
        if let Some(i) = self.index(x, y) {
            self.cells[i] = cell;
        }
    }
}
