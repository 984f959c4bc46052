//! Application ports (traits) for external dependencies.
//!
//! - **Driven (Output) Ports**: called by the application, implemented by infrastructure
//!   - `Filesystem`: directory/file operations
//!   - `BlueprintRenderer`: blueprint to concrete structure
//!   - `ProgressReporter`: human-facing progress lines

pub mod output;

pub use output::{BlueprintRenderer, Filesystem, ProgressReporter, SilentProgress};

#[cfg(test)]
pub use output::{MockBlueprintRenderer, MockFilesystem};
