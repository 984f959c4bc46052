//! Infrastructure adapters for Taracol Scaffold.
//!
//! This crate implements the ports defined in
//! `taracol-scaffold-core::application::ports` and ships the built-in
//! Taracol blueprint. It contains all I/O.

pub mod blueprint;
pub mod filesystem;
pub mod renderer;

// Re-export commonly used adapters
pub use blueprint::taracol_blueprint;
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use renderer::SimpleRenderer;
