use std::collections::HashSet;
use std::path::PathBuf;

use crate::domain::{
    entities::common::{Permissions, WritePolicy, check_contained},
    error::DomainError,
};

/// Final project structure ready for materialization.
///
/// This is the output of blueprint rendering. It contains no business logic,
/// only data: a root and the ordered steps that populate it.
#[derive(Debug, Clone)]
pub struct ProjectStructure {
    pub(crate) root: PathBuf,
    pub(crate) steps: Vec<Step>,
}

/// Entries announced together by one progress line.
#[derive(Debug, Clone)]
pub struct Step {
    pub icon: &'static str,
    pub title: String,
    pub entries: Vec<FsEntry>,
}

impl Step {
    pub fn new(icon: &'static str, title: impl Into<String>) -> Self {
        Self {
            icon,
            title: title.into(),
            entries: Vec::new(),
        }
    }

    pub fn add_file(
        &mut self,
        path: impl Into<PathBuf>,
        content: String,
        perms: Permissions,
        policy: WritePolicy,
    ) {
        self.entries.push(FsEntry::File(FileToWrite {
            path: path.into(),
            content,
            permissions: perms,
            policy,
        }));
    }

    pub fn add_directory(&mut self, path: impl Into<PathBuf>) {
        self.entries
            .push(FsEntry::Directory(DirectoryToCreate { path: path.into() }));
    }

    pub fn with_file(
        mut self,
        path: impl Into<PathBuf>,
        content: String,
        perms: Permissions,
        policy: WritePolicy,
    ) -> Self {
        self.add_file(path, content, perms, policy);
        self
    }

    pub fn with_directory(mut self, path: impl Into<PathBuf>) -> Self {
        self.add_directory(path);
        self
    }
}

impl ProjectStructure {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            steps: Vec::new(),
        }
    }

    pub fn push_step(&mut self, step: Step) {
        self.steps.push(step);
    }

    pub fn with_step(mut self, step: Step) -> Self {
        self.push_step(step);
        self
    }

    pub fn root(&self) -> &std::path::Path {
        &self.root
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.entries().next().is_none() {
            return Err(DomainError::InvalidBlueprint(
                "Project structure is empty".into(),
            ));
        }

        let mut seen = HashSet::new();
        for entry in self.entries() {
            let path = entry.path();

            if !seen.insert(path) {
                return Err(DomainError::DuplicatePath {
                    path: path.display().to_string(),
                });
            }

            check_contained(path)?;
        }

        Ok(())
    }

    pub fn entries(&self) -> impl Iterator<Item = &FsEntry> {
        self.steps.iter().flat_map(|s| s.entries.iter())
    }

    pub fn files(&self) -> impl Iterator<Item = &FileToWrite> {
        self.entries().filter_map(|e| match e {
            FsEntry::File(f) => Some(f),
            _ => None,
        })
    }

    pub fn directories(&self) -> impl Iterator<Item = &DirectoryToCreate> {
        self.entries().filter_map(|e| match e {
            FsEntry::Directory(d) => Some(d),
            _ => None,
        })
    }

    pub fn entry_count(&self) -> usize {
        self.steps.iter().map(|s| s.entries.len()).sum()
    }
}

#[derive(Debug, Clone)]
pub enum FsEntry {
    File(FileToWrite),
    Directory(DirectoryToCreate),
}

impl FsEntry {
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::File(f) => &f.path,
            Self::Directory(d) => &d.path,
        }
    }
}

#[derive(Debug, Clone)]
pub struct FileToWrite {
    pub path: PathBuf,
    pub content: String,
    pub permissions: Permissions,
    pub policy: WritePolicy,
}

impl FileToWrite {
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    pub fn size(&self) -> usize {
        self.content.len()
    }
}

#[derive(Debug, Clone)]
pub struct DirectoryToCreate {
    pub path: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file_step(path: &str) -> Step {
        Step::new("📄", "files").with_file(
            path,
            "x".into(),
            Permissions::regular(),
            WritePolicy::Overwrite,
        )
    }

    #[test]
    fn empty_structure_is_invalid() {
        assert!(ProjectStructure::new("/out").validate().is_err());
        let only_empty_steps = ProjectStructure::new("/out").with_step(Step::new("📁", "dirs"));
        assert!(only_empty_steps.validate().is_err());
    }

    #[test]
    fn duplicate_across_steps_is_invalid() {
        let s = ProjectStructure::new("/out")
            .with_step(file_step("README.md"))
            .with_step(file_step("README.md"));
        assert!(matches!(
            s.validate(),
            Err(DomainError::DuplicatePath { .. })
        ));
    }

    #[test]
    fn escaping_entry_is_invalid() {
        let s = ProjectStructure::new("/out").with_step(file_step("../evil"));
        assert!(matches!(
            s.validate(),
            Err(DomainError::PathEscapesRoot { .. })
        ));
    }

    #[test]
    fn counts_and_iterators() {
        let s = ProjectStructure::new("/out")
            .with_step(Step::new("📁", "dirs").with_directory("docs"))
            .with_step(file_step("README.md"));
        assert!(s.validate().is_ok());
        assert_eq!(s.entry_count(), 2);
        assert_eq!(s.files().count(), 1);
        assert_eq!(s.directories().count(), 1);
        assert_eq!(s.files().next().unwrap().size(), 1);
    }
}
