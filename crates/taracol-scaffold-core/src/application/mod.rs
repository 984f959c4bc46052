//! Application layer for Taracol Scaffold.
//!
//! This layer contains:
//! - **Services**: use case orchestration (`ScaffoldService`)
//! - **Ports**: interface definitions (traits) for external dependencies
//! - **Errors**: application-specific error types
//!
//! Blueprint rules live in `crate::domain`; this layer only coordinates.

pub mod error;
pub mod ports;
pub mod services;

pub use services::{ScaffoldReport, ScaffoldService};

pub use ports::{BlueprintRenderer, Filesystem, ProgressReporter, SilentProgress};

pub use error::ApplicationError;
