//! Real terminal surface: a [`CellGrid`] flushed through ratatui, input from crossterm.
//!
//! ratatui diffs successive frames, so `present` only writes cells that changed.

use super::grid::CellGrid;
use crate::core::event::InputEvent;
use crate::tui::crossterm::into_input_event;
use crate::ui::core::geom::Size;
use crate::ui::core::style::{Color, Mod, Style};
use crate::ui::surface::{Cell, Surface};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Rect as RRect;
use ratatui::style::{Color as RColor, Modifier as RModifier, Style as RStyle};
use ratatui::Terminal;
use std::io;

pub struct TerminalSurface {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    grid: CellGrid,
}

impl TerminalSurface {
    /// Expects the terminal to already be in raw mode (see `TerminalGuard`).
    pub fn new(stdout: io::Stdout) -> io::Result<Self> {
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        let size = current_size()?;
        Ok(Self {
            terminal,
            grid: CellGrid::new(size),
        })
    }
}

fn current_size() -> io::Result<Size> {
    let (w, h) = crossterm::terminal::size()?;
    Ok(Size::new(i32::from(w), i32::from(h)))
}

impl Surface for TerminalSurface {
    fn size(&self) -> Size {
        self.grid.size()
    }

    fn set_cell(&mut self, x: i32, y: i32, ch: char, style: Style) {
        self.grid.set(x, y, ch, style);
    }

    fn get_cell(&self, x: i32, y: i32) -> Option<Cell> {
        self.grid.cell(x, y).copied()
    }

    fn present(&mut self) -> io::Result<()> {
        let grid = &self.grid;
        self.terminal.draw(|frame| {
            let buf = frame.buffer_mut();
            let area = buf.area;
            for y in area.top()..area.bottom() {
                for x in area.left()..area.right() {
                    let Some(src) = grid.cell(i32::from(x), i32::from(y)) else {
                        continue;
                    };
                    if let Some(dst) = buf.cell_mut((x, y)) {
                        dst.set_char(src.ch).set_style(to_ratatui_style(src.style));
                    }
                }
            }
        })?;
        Ok(())
    }

    fn poll_event(&mut self) -> io::Result<InputEvent> {
        Ok(into_input_event(crossterm::event::read()?))
    }

    fn sync(&mut self) -> io::Result<()> {
        let size = current_size()?;
        let area = RRect::new(0, 0, size.width as u16, size.height as u16);
        // Resizing also clears the screen and the previous frame, so the next
        // draw repaints every cell.
        self.terminal.resize(area)?;
        self.grid.resize(size);
        Ok(())
    }
}

fn to_ratatui_style(s: Style) -> RStyle {
    let mut out = RStyle::default();
    if let Some(fg) = s.fg {
        out = out.fg(to_ratatui_color(fg));
    }
    if let Some(bg) = s.bg {
        out = out.bg(to_ratatui_color(bg));
    }
    out.add_modifier(to_ratatui_mods(s.mods))
}

fn to_ratatui_color(c: Color) -> RColor {
    match c {
        Color::Reset => RColor::Reset,
        Color::Indexed(i) => RColor::Indexed(i),
    }
}

fn to_ratatui_mods(m: Mod) -> RModifier {
    if m.contains(Mod::BOLD) {
        RModifier::BOLD
    } else {
        RModifier::empty()
    }
}
