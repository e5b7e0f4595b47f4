//! Cell-level UI: geometry, styles, drawing, and the surface the drawing lands on.
//!
//! Only `backend::terminal` knows about ratatui.

pub mod backend;
pub mod core;
pub mod surface;
