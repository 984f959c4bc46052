//! Blueprint: the static description of a project tree.
//!
//! ## Structure
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Blueprint                                                  │
//! │  ├── directories: Vec<DirectorySpec>   (created first)      │
//! │  └── sections: Vec<Section>            (written in order)   │
//! │       └── files: Vec<FileSpec>                              │
//! │            ├── path: RelativePath                           │
//! │            ├── content: Literal | Parameterized             │
//! │            ├── permissions (executable bit)                 │
//! │            └── policy: Overwrite | CreateIfAbsent           │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! A blueprint is plain data. Rendering turns it into a
//! [`ProjectStructure`](super::project_structure::ProjectStructure), which the
//! scaffold service writes through the `Filesystem` port.

use std::collections::HashSet;

use super::DomainError;
use super::common::{Permissions, RelativePath, WritePolicy};

/// The complete, ordered description of what a scaffold run creates.
#[derive(Debug, Clone)]
pub struct Blueprint {
    pub name: String,
    pub directories: Vec<DirectorySpec>,
    pub sections: Vec<Section>,
}

impl Blueprint {
    pub fn builder(name: impl Into<String>) -> BlueprintBuilder {
        BlueprintBuilder {
            name: name.into(),
            directories: Vec::new(),
            sections: Vec::new(),
        }
    }

    /// Check structural invariants: something to do, no path listed twice.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.directories.is_empty() && self.sections.iter().all(|s| s.files.is_empty()) {
            return Err(DomainError::EmptyBlueprint {
                blueprint: self.name.clone(),
            });
        }

        let mut seen_dirs = HashSet::new();
        for dir in &self.directories {
            if !seen_dirs.insert(dir.path.as_path()) {
                return Err(DomainError::DuplicatePath {
                    path: dir.path.to_string(),
                });
            }
        }

        let mut seen_files = HashSet::new();
        for file in self.files() {
            if !seen_files.insert(file.path.as_path()) || seen_dirs.contains(file.path.as_path()) {
                return Err(DomainError::DuplicatePath {
                    path: file.path.to_string(),
                });
            }
        }

        for section in &self.sections {
            if section.title.trim().is_empty() {
                return Err(DomainError::InvalidBlueprint(
                    "section title cannot be empty".into(),
                ));
            }
        }

        Ok(())
    }

    pub fn files(&self) -> impl Iterator<Item = &FileSpec> {
        self.sections.iter().flat_map(|s| s.files.iter())
    }

    pub fn file_count(&self) -> usize {
        self.sections.iter().map(|s| s.files.len()).sum()
    }
}

pub struct BlueprintBuilder {
    name: String,
    directories: Vec<DirectorySpec>,
    sections: Vec<Section>,
}

impl BlueprintBuilder {
    pub fn directory(mut self, path: impl Into<RelativePath>) -> Self {
        self.directories.push(DirectorySpec::new(path));
        self
    }

    pub fn directories<I, P>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<RelativePath>,
    {
        self.directories
            .extend(paths.into_iter().map(DirectorySpec::new));
        self
    }

    pub fn section(mut self, section: Section) -> Self {
        self.sections.push(section);
        self
    }

    pub fn build(self) -> Result<Blueprint, DomainError> {
        let blueprint = Blueprint {
            name: self.name,
            directories: self.directories,
            sections: self.sections,
        };
        blueprint.validate()?;
        Ok(blueprint)
    }
}

/// One writer group: files announced by a single progress line.
#[derive(Debug, Clone)]
pub struct Section {
    pub icon: &'static str,
    pub title: String,
    pub files: Vec<FileSpec>,
}

impl Section {
    pub fn new(icon: &'static str, title: impl Into<String>) -> Self {
        Self {
            icon,
            title: title.into(),
            files: Vec::new(),
        }
    }

    pub fn file(mut self, spec: FileSpec) -> Self {
        self.files.push(spec);
        self
    }

    pub fn files(mut self, specs: impl IntoIterator<Item = FileSpec>) -> Self {
        self.files.extend(specs);
        self
    }
}

/// Specification for a file to create.
///
/// Defaults to a non-executable file and [`WritePolicy::Overwrite`].
#[derive(Debug, Clone)]
pub struct FileSpec {
    pub path: RelativePath,
    pub content: TemplateContent,
    pub permissions: Permissions,
    pub policy: WritePolicy,
    /// File-local variables layered over the run's render context.
    pub variables: Vec<(String, String)>,
}

impl FileSpec {
    pub fn new(path: impl Into<RelativePath>, content: TemplateContent) -> Self {
        Self {
            path: path.into(),
            content,
            permissions: Permissions::regular(),
            policy: WritePolicy::Overwrite,
            variables: Vec::new(),
        }
    }

    /// Shorthand for a literal file.
    pub fn literal(path: impl Into<RelativePath>, content: impl Into<TemplateSource>) -> Self {
        Self::new(path, TemplateContent::Literal(content.into()))
    }

    /// Shorthand for a file with `{{VARIABLE}}` placeholders.
    pub fn parameterized(
        path: impl Into<RelativePath>,
        content: impl Into<TemplateSource>,
    ) -> Self {
        Self::new(path, TemplateContent::Parameterized(content.into()))
    }

    /// Mark this file as executable (shell scripts).
    pub fn executable(mut self) -> Self {
        self.permissions = Permissions::executable();
        self
    }

    /// Leave an existing file untouched.
    pub fn create_if_absent(mut self) -> Self {
        self.policy = WritePolicy::CreateIfAbsent;
        self
    }

    pub fn with_variable(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.variables.push((key.into(), value.into()));
        self
    }
}

/// Specification for a directory to create.
#[derive(Debug, Clone)]
pub struct DirectorySpec {
    pub path: RelativePath,
}

impl DirectorySpec {
    pub fn new(path: impl Into<RelativePath>) -> Self {
        Self { path: path.into() }
    }
}

// ============================================================================
// Content Types
// ============================================================================

/// Content specification for a file.
#[derive(Debug, Clone)]
pub enum TemplateContent {
    /// Content used exactly as provided.
    Literal(TemplateSource),

    /// Content with `{{VARIABLE}}` placeholders to be substituted.
    Parameterized(TemplateSource),
}

/// Source of template content: either compile-time or runtime.
///
/// `Static` points at binary data; `Owned` holds generated content such as
/// serialised JSON manifests.
#[derive(Debug, Clone)]
pub enum TemplateSource {
    Static(&'static str),
    Owned(String),
}

impl From<&'static str> for TemplateSource {
    fn from(s: &'static str) -> Self {
        Self::Static(s)
    }
}

impl From<String> for TemplateSource {
    fn from(s: String) -> Self {
        Self::Owned(s)
    }
}

impl TemplateSource {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Static(s) => s,
            Self::Owned(s) => s,
        }
    }

    /// Does this source carry `{{...}}` placeholders?
    pub fn contains_placeholder(&self) -> bool {
        self.as_str().contains("{{") && self.as_str().contains("}}")
    }
}
