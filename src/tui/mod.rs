//! TUI integration layer (crossterm + ratatui).

pub mod crossterm;
pub mod terminal_guard;
