//! Data model

pub mod container;

pub use container::{ContainerRecord, PortMapping};
