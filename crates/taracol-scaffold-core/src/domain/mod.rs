//! Core domain layer for Taracol Scaffold.
//!
//! Pure data and rules with no I/O. Filesystem and rendering concerns are
//! handled via ports (traits) defined in the application layer.
//!
//! - **No async**: everything is synchronous
//! - **No I/O**: no filesystem calls
//! - **No external crates**: only std + thiserror
pub mod entities;
pub mod error;

mod validation;

pub use entities::{
    blueprint::{
        Blueprint, BlueprintBuilder, DirectorySpec, FileSpec, Section, TemplateContent,
        TemplateSource,
    },
    common::{Permissions, RelativePath, WritePolicy},
    project::{DEFAULT_PROJECT_NAME, ProjectDescriptor, ProjectName},
    project_structure::{DirectoryToCreate, FileToWrite, FsEntry, ProjectStructure, Step},
    render_context::RenderContext,
};

pub use error::{DomainError, ErrorCategory};
pub use validation::DomainValidator;
