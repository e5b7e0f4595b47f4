//! In-memory cell store shared by every surface implementation.

use crate::ui::core::geom::{Point, Size};
use crate::ui::core::style::Style;
use crate::ui::surface::Cell;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CellGrid {
    size: Size,
    cells: Vec<Cell>,
}

impl CellGrid {
    pub fn new(size: Size) -> Self {
        let len = size.width.max(0) as usize * size.height.max(0) as usize;
        Self {
            size,
            cells: vec![Cell::default(); len],
        }
    }

    pub fn size(&self) -> Size {
        self.size
    }

    /// Replaces the grid with a blank one of the given size.
    pub fn resize(&mut self, size: Size) {
        *self = Self::new(size);
    }

    pub fn cell(&self, x: i32, y: i32) -> Option<&Cell> {
        let idx = self.idx(x, y)?;
        self.cells.get(idx)
    }

    pub fn cell_mut(&mut self, x: i32, y: i32) -> Option<&mut Cell> {
        let idx = self.idx(x, y)?;
        self.cells.get_mut(idx)
    }

    pub fn set(&mut self, x: i32, y: i32, ch: char, style: Style) {
        if let Some(cell) = self.cell_mut(x, y) {
            cell.ch = ch;
            cell.style = style;
        }
    }

    /// The characters of row `y`, or an empty string when the row is off-grid.
    pub fn row_text(&self, y: i32) -> String {
        (0..self.size.width)
            .filter_map(|x| self.cell(x, y).map(|c| c.ch))
            .collect()
    }

    fn idx(&self, x: i32, y: i32) -> Option<usize> {
        if !self.size.contains(Point::new(x, y)) {
            return None;
        }
        Some(y as usize * self.size.width as usize + x as usize)
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/backend/grid.rs"]
mod tests;
