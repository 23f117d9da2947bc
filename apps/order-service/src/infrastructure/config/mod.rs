//! Configuration and Dependency Injection
//!
//! Wires adapters into use cases.

mod container;

pub use container::{Container, ContainerError, ServiceContainer, build_container};
