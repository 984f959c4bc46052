use super::DomainError;
use std::fmt;
use std::path::{Component, Path, PathBuf};

/// A filesystem path guaranteed to stay below the directory it is joined to.
///
/// Invariant: never absolute, never contains `..`. Enforced at construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RelativePath(PathBuf);

impl RelativePath {
    /// Create a new relative path.
    ///
    /// # Panics
    /// Panics if path is absolute or climbs out with `..` (use `try_new` for fallible).
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        assert!(
            check_contained(&path).is_ok(),
            "RelativePath must stay below its root: {:?}",
            path
        );
        Self(path)
    }

    /// Fallible constructor.
    pub fn try_new(path: impl Into<PathBuf>) -> Result<Self, DomainError> {
        let path = path.into();
        check_contained(&path)?;
        Ok(Self(path))
    }

    /// Join a segment, maintaining the containment invariant.
    pub fn join(&self, segment: impl AsRef<Path>) -> Result<Self, DomainError> {
        let segment = segment.as_ref();
        check_contained(segment)?;
        Ok(Self(self.0.join(segment)))
    }

    pub fn as_path(&self) -> &Path {
        &self.0
    }

    pub fn as_str(&self) -> &str {
        self.0.to_str().unwrap_or("")
    }

    pub fn into_path_buf(self) -> PathBuf {
        self.0
    }
}

/// Reject anything that could resolve outside the joining root.
pub(crate) fn check_contained(path: &Path) -> Result<(), DomainError> {
    if path.is_absolute() || path.has_root() {
        return Err(DomainError::AbsolutePathNotAllowed {
            path: path.display().to_string(),
        });
    }
    for component in path.components() {
        match component {
            Component::Normal(_) | Component::CurDir => {}
            Component::ParentDir => {
                return Err(DomainError::PathEscapesRoot {
                    path: path.display().to_string(),
                });
            }
            Component::RootDir | Component::Prefix(_) => {
                return Err(DomainError::AbsolutePathNotAllowed {
                    path: path.display().to_string(),
                });
            }
        }
    }
    Ok(())
}

impl AsRef<Path> for RelativePath {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

impl From<&str> for RelativePath {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for RelativePath {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl fmt::Display for RelativePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}

/// File mode beyond the platform default.
///
/// Only the executable bit is modelled; directories always get the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Permissions {
    executable: bool,
}

impl Permissions {
    /// Plain file, left at the umask default.
    pub const fn regular() -> Self {
        Self { executable: false }
    }

    /// Scripts: `mode | 0o111` on Unix.
    pub const fn executable() -> Self {
        Self { executable: true }
    }

    pub const fn executable_flag(&self) -> bool {
        self.executable
    }
}

/// What to do when a blueprint file already exists on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WritePolicy {
    /// Replace the file on every run.
    #[default]
    Overwrite,
    /// Write only when nothing is there yet; an existing file is left byte-for-byte intact.
    CreateIfAbsent,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_path_accepts_nested_segments() {
        let p = RelativePath::try_new("core/taracol-types/src").unwrap();
        assert_eq!(p.as_str(), "core/taracol-types/src");
    }

    #[test]
    fn relative_path_rejects_absolute() {
        assert!(matches!(
            RelativePath::try_new("/etc/passwd"),
            Err(DomainError::AbsolutePathNotAllowed { .. })
        ));
    }

    #[test]
    fn relative_path_rejects_parent_components() {
        assert!(matches!(
            RelativePath::try_new("scripts/../../outside"),
            Err(DomainError::PathEscapesRoot { .. })
        ));
    }

    #[test]
    fn join_keeps_invariant() {
        let base = RelativePath::from("services");
        assert!(base.join("identity-service/src").is_ok());
        assert!(base.join("..").is_err());
    }

    #[test]
    #[should_panic(expected = "RelativePath must stay below its root")]
    fn new_panics_on_escape() {
        let _ = RelativePath::new("../x");
    }

    #[test]
    fn default_policy_overwrites() {
        assert_eq!(WritePolicy::default(), WritePolicy::Overwrite);
        assert_eq!(Permissions::default(), Permissions::regular());
        assert!(!Permissions::default().executable_flag());
        assert!(Permissions::executable().executable_flag());
    }
}
