//! Project descriptor: the one input to a scaffold run.

use std::fmt;
use std::path::{Path, PathBuf};

use super::DomainError;

/// Project name used when none is supplied.
pub const DEFAULT_PROJECT_NAME: &str = "taracol";

/// A validated project name.
///
/// Invariant: not blank. Anything else is accepted here; whether the name
/// can double as a directory is checked by [`ProjectDescriptor::resolve`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProjectName(String);

impl ProjectName {
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::InvalidProjectName {
                name,
                reason: "name cannot be empty".into(),
            });
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ProjectName {
    fn default() -> Self {
        Self(DEFAULT_PROJECT_NAME.to_string())
    }
}

impl fmt::Display for ProjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Name and target directory of the project being scaffolded.
///
/// Built once at startup and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectDescriptor {
    name: ProjectName,
    base_dir: PathBuf,
}

impl ProjectDescriptor {
    pub fn new(name: ProjectName, base_dir: impl Into<PathBuf>) -> Self {
        Self {
            name,
            base_dir: base_dir.into(),
        }
    }

    /// Resolve the base directory: an explicit `dir` wins, otherwise `<cwd>/<name>`.
    ///
    /// Without `dir` the name must end in a real directory entry, so `.` and
    /// `..` (or `foo/..`) are refused instead of scaffolding into the working
    /// directory or its parent.
    pub fn resolve(
        name: ProjectName,
        dir: Option<PathBuf>,
        cwd: impl AsRef<Path>,
    ) -> Result<Self, DomainError> {
        let base_dir = match dir {
            Some(dir) => dir,
            None => {
                if Path::new(name.as_str()).file_name().is_none() {
                    return Err(DomainError::InvalidProjectName {
                        name: name.as_str().to_string(),
                        reason: "name does not denote a directory below the working directory"
                            .into(),
                    });
                }
                cwd.as_ref().join(name.as_str())
            }
        };
        Ok(Self::new(name, base_dir))
    }

    pub fn name(&self) -> &ProjectName {
        &self.name
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }
}

impl fmt::Display for ProjectDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}", self.name, self.base_dir.display())
    }
}
