//! The terminal surface contract.
//!
//! Everything above this trait draws in cells; everything below it talks to a
//! real terminal (or a headless grid in tests).

use crate::core::event::InputEvent;
use crate::ui::core::geom::Size;
use crate::ui::core::style::Style;
use std::io;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub style: Style,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            style: Style::default(),
        }
    }
}

pub trait Surface {
    fn size(&self) -> Size;

    /// Writes one cell. Coordinates outside the surface are ignored.
    fn set_cell(&mut self, x: i32, y: i32, ch: char, style: Style);

    /// Returns `None` for coordinates outside the surface.
    fn get_cell(&self, x: i32, y: i32) -> Option<Cell>;

    /// Flushes pending cell changes to the display.
    fn present(&mut self) -> io::Result<()>;

    /// Blocks until the next input event.
    fn poll_event(&mut self) -> io::Result<InputEvent>;

    /// Picks up the current terminal size and forces a full repaint on the next `present`.
    fn sync(&mut self) -> io::Result<()>;
}
