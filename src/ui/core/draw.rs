//! Absolute-coordinate drawing primitives.
//!
//! All routines write through [`Surface::set_cell`] and stay inside the
//! rectangle they are given. `Panel` builds its local-frame drawing on top of
//! these.

use super::geom::{normalize, Point};
use super::style::Style;
use crate::ui::surface::Surface;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BorderGlyphs {
    pub top_left: char,
    pub top_right: char,
    pub bottom_left: char,
    pub bottom_right: char,
    pub horizontal: char,
    pub vertical: char,
}

pub const PLAIN_BORDER: BorderGlyphs = BorderGlyphs {
    top_left: '┌',
    top_right: '┐',
    bottom_left: '└',
    bottom_right: '┘',
    horizontal: '─',
    vertical: '│',
};

/// Blanks the rectangle and draws a border around it, all in `style`.
///
/// Corners are only drawn when the rectangle has both a distinct top/bottom and
/// a distinct left/right edge; a one-row or one-column box is just a line.
pub fn draw_box(surface: &mut dyn Surface, p1: Point, p2: Point, style: Style) {
    let (p1, p2) = normalize(p1, p2);
    let g = PLAIN_BORDER;

    for x in p1.x..=p2.x {
        for y in p1.y + 1..p2.y {
            surface.set_cell(x, y, ' ', style);
        }
    }

    for x in p1.x..=p2.x {
        surface.set_cell(x, p1.y, g.horizontal, style);
        surface.set_cell(x, p2.y, g.horizontal, style);
    }
    for y in p1.y + 1..p2.y {
        surface.set_cell(p1.x, y, g.vertical, style);
        surface.set_cell(p2.x, y, g.vertical, style);
    }

    if p1.y != p2.y && p1.x != p2.x {
        surface.set_cell(p1.x, p1.y, g.top_left, style);
        surface.set_cell(p2.x, p1.y, g.top_right, style);
        surface.set_cell(p1.x, p2.y, g.bottom_left, style);
        surface.set_cell(p2.x, p2.y, g.bottom_right, style);
    }
}

/// Writes `text` one char per cell starting at `p1`.
///
/// The column wraps back to `p1.x` on the next row as soon as it reaches
/// `p2.x` (exclusive), mid-word if need be. Drawing stops once the row passes
/// `p2.y` (inclusive); the rest of the text is dropped. A rectangle whose right
/// edge is not past `p1.x`, or whose bottom is above `p1.y`, draws nothing.
pub fn draw_text(surface: &mut dyn Surface, p1: Point, p2: Point, style: Style, text: &str) {
    if p1.x >= p2.x || p1.y > p2.y {
        return;
    }

    let mut col = p1.x;
    let mut row = p1.y;
    for ch in text.chars() {
        surface.set_cell(col, row, ch, style);
        col += 1;
        if col >= p2.x {
            row += 1;
            col = p1.x;
        }
        if row > p2.y {
            break;
        }
    }
}

/// Single-row form of [`draw_text`]: the right edge is `p.x + len(text)`.
pub fn draw_text_simple(surface: &mut dyn Surface, p: Point, style: Style, text: &str) {
    let end = Point::new(p.x + text_len(text), p.y);
    draw_text(surface, p, end, style, text);
}

/// Restyles every cell in the rectangle, keeping its character.
pub fn set_style(surface: &mut dyn Surface, p1: Point, p2: Point, style: Style) {
    let (p1, p2) = normalize(p1, p2);
    for x in p1.x..=p2.x {
        for y in p1.y..=p2.y {
            if let Some(cell) = surface.get_cell(x, y) {
                surface.set_cell(x, y, cell.ch, style);
            }
        }
    }
}

/// Number of cells `text` occupies when drawn by [`draw_text`].
pub fn text_len(text: &str) -> i32 {
    text.chars().count() as i32
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/core/draw.rs"]
mod tests;
