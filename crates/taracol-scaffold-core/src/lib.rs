//! Taracol Scaffold Core - ports and adapters layout
//!
//! Domain and application layers for the tool that lays out the Taracol
//! monorepo: a fixed directory tree plus boilerplate manifests, scripts and
//! placeholder sources.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │        taracol-scaffold-cli (CLI)       │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │          ScaffoldService                │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │  Ports: Filesystem, BlueprintRenderer,  │
//! │         ProgressReporter                │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │   taracol-scaffold-adapters             │
//! │ (LocalFilesystem, SimpleRenderer, ...)  │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use taracol_scaffold_core::{
//!     application::{ScaffoldService, SilentProgress},
//!     domain::{ProjectDescriptor, ProjectName},
//! };
//!
//! let project = ProjectDescriptor::resolve(ProjectName::default(), None, ".")?;
//! let service = ScaffoldService::new(renderer, filesystem);
//! service.scaffold(&blueprint, &project, &SilentProgress).unwrap();
//! ```

pub mod application;
pub mod domain;
pub mod error;

pub mod prelude {
    pub use crate::application::{
        ScaffoldReport, ScaffoldService,
        ports::{BlueprintRenderer, Filesystem, ProgressReporter, SilentProgress},
    };
    pub use crate::domain::{
        Blueprint, FileSpec, ProjectDescriptor, ProjectName, ProjectStructure, RenderContext,
        Section, WritePolicy,
    };
    pub use crate::error::{ScaffoldError, ScaffoldResult};
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
