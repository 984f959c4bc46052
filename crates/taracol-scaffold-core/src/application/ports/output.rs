//! Driven (output) ports - implemented by infrastructure.
//!
//! The `taracol-scaffold-adapters` crate provides implementations.

use std::path::Path;

use crate::domain::{Blueprint, ProjectStructure, RenderContext};
use crate::error::ScaffoldResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `taracol_scaffold_adapters::filesystem::LocalFilesystem` (production)
/// - `taracol_scaffold_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories. Existing directories are not an error.
    fn create_dir_all(&self, path: &Path) -> ScaffoldResult<()>;

    /// Write content to a file, replacing whatever was there.
    fn write_file(&self, path: &Path, content: &str) -> ScaffoldResult<()>;

    /// Set or clear the executable bits.
    fn set_permissions(&self, path: &Path, executable: bool) -> ScaffoldResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;
}

/// Port for blueprint rendering.
///
/// Implemented by `taracol_scaffold_adapters::renderer::SimpleRenderer`.
#[cfg_attr(test, mockall::automock)]
pub trait BlueprintRenderer: Send + Sync {
    /// Render a blueprint into a project structure rooted at `output_root`.
    fn render(
        &self,
        blueprint: &Blueprint,
        context: &RenderContext,
        output_root: &Path,
    ) -> ScaffoldResult<ProjectStructure>;
}

/// Port for progress lines, one per scaffold step.
pub trait ProgressReporter {
    fn step(&self, icon: &str, title: &str);
}

/// Reporter that discards everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentProgress;

impl ProgressReporter for SilentProgress {
    fn step(&self, _icon: &str, _title: &str) {}
}
