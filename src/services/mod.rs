//! Services
//!
//! - config: settings file and per-user directories
//! - docker: container enumeration

pub mod config;
pub mod docker;

pub use config::{load_settings, Settings};
pub use docker::{ContainerSource, DockerSource, SourceError};
