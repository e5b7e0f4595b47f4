//! Surface implementations.

pub mod grid;
#[cfg(feature = "tui")]
pub mod terminal;
