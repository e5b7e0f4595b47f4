pub mod draw;
pub mod geom;
pub mod panel;
pub mod style;
