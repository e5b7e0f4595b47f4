//! Bordered panels with a local drawing frame.

use super::draw;
use super::geom::{normalize, Point};
use super::style::Style;
use crate::ui::surface::Surface;

/// Offset from a panel's top-left corner to its local `(0, 0)`, leaving room for the border.
pub const INSET: Point = Point::new(1, 1);

/// A rectangular region of the surface that doubles as a coordinate frame.
///
/// Positions handed to [`Panel::draw_text`] and [`Panel::draw_text_simple`] are
/// relative to the top-left corner plus [`INSET`], and everything they draw is
/// clipped to the panel interior.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Panel {
    origin: Point,
    corner: Point,
}

impl Panel {
    pub fn new(origin: Point, corner: Point) -> Self {
        Self { origin, corner }
    }

    /// Top-left and bottom-right corners, border included.
    pub fn bounds(&self) -> (Point, Point) {
        normalize(self.origin, self.corner)
    }

    /// Inclusive corners of the area inside the border, or `None` when the border leaves no room.
    pub fn interior(&self) -> Option<(Point, Point)> {
        let (lo, hi) = self.bounds();
        let lo = lo + INSET;
        let hi = Point::new(hi.x - 1, hi.y - 1);
        if lo.x > hi.x || lo.y > hi.y {
            return None;
        }
        Some((lo, hi))
    }

    /// Converts a panel-local position to surface coordinates.
    pub fn to_surface(&self, local: Point) -> Point {
        self.bounds().0 + INSET + local
    }

    pub fn render(&self, surface: &mut dyn Surface, style: Style) {
        let (lo, hi) = self.bounds();
        draw::draw_box(surface, lo, hi, style);
    }

    /// Local-frame [`draw::draw_text`], with the rectangle cut down to the interior.
    pub fn draw_text(
        &self,
        surface: &mut dyn Surface,
        p1: Point,
        p2: Point,
        style: Style,
        text: &str,
    ) {
        let Some((inner_lo, inner_hi)) = self.interior() else {
            return;
        };
        let start = self.to_surface(p1);
        if start.x < inner_lo.x || start.y < inner_lo.y {
            return;
        }
        let end = self.to_surface(p2);
        let end = Point::new(end.x.min(inner_hi.x + 1), end.y.min(inner_hi.y));
        draw::draw_text(surface, start, end, style, text);
    }

    /// Local-frame [`draw::draw_text_simple`].
    pub fn draw_text_simple(&self, surface: &mut dyn Surface, p: Point, style: Style, text: &str) {
        let end = Point::new(p.x + draw::text_len(text), p.y);
        self.draw_text(surface, p, end, style, text);
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/core/panel.rs"]
mod tests;
