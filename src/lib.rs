//! dockview - terminal dashboard for running containers
//!
//! Module layout:
//! - core: backend-neutral input events and event results
//! - ui: geometry, styles, drawing primitives, panels, and the surface contract
//! - tui: crossterm event conversion and terminal mode guard
//! - models: container snapshot records
//! - services: settings and the container engine client
//! - app: the dashboard view controller

pub mod app;
pub mod core;
pub mod error;
pub mod models;
pub mod services;
#[cfg(feature = "tui")]
pub mod tui;
pub mod ui;
