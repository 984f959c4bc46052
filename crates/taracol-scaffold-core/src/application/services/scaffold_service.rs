//! Scaffold Service - main application orchestrator.
//!
//! This service coordinates the entire scaffolding workflow:
//! 1. Validate the blueprint
//! 2. Render it for the project
//! 3. Validate the rendered structure
//! 4. Write every step to the filesystem, reporting progress
//!
//! There is no rollback. A failure stops the run where it is; re-running
//! resumes safely because directories are reused and files are rewritten.

use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument};

use crate::{
    application::ports::{BlueprintRenderer, Filesystem, ProgressReporter},
    domain::{
        Blueprint, DomainValidator as validator, FileToWrite, FsEntry, ProjectDescriptor,
        ProjectStructure, RenderContext, WritePolicy,
    },
    error::{ScaffoldError, ScaffoldResult},
};

/// Counts of what a scaffold run did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScaffoldReport {
    pub root: PathBuf,
    pub directories: usize,
    pub files_written: usize,
    /// Files left untouched because of [`WritePolicy::CreateIfAbsent`].
    pub files_kept: usize,
    pub executables: usize,
}

/// Main scaffolding service.
pub struct ScaffoldService {
    renderer: Box<dyn BlueprintRenderer>,
    filesystem: Box<dyn Filesystem>,
}

impl ScaffoldService {
    /// Create a new scaffold service with the given adapters.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use taracol_scaffold_core::application::{ScaffoldService, ports::*};
    ///
    /// let service = ScaffoldService::new(
    ///     renderer,   // impl BlueprintRenderer
    ///     filesystem, // impl Filesystem
    /// );
    /// ```
    pub fn new(renderer: Box<dyn BlueprintRenderer>, filesystem: Box<dyn Filesystem>) -> Self {
        Self {
            renderer,
            filesystem,
        }
    }

    /// Scaffold a project from a blueprint.
    #[instrument(
        skip_all,
        fields(
            blueprint = %blueprint.name,
            project = %project.name(),
            base_dir = %project.base_dir().display()
        )
    )]
    pub fn scaffold(
        &self,
        blueprint: &Blueprint,
        project: &ProjectDescriptor,
        progress: &dyn ProgressReporter,
    ) -> ScaffoldResult<ScaffoldReport> {
        info!("Scaffolding project");

        // 1. Validate blueprint
        validator::validate_blueprint(blueprint).map_err(ScaffoldError::Domain)?;

        // 2. Render
        let structure = self
            .renderer
            .render(blueprint, &RenderContext::new(), project.base_dir())?;
        debug!(entries = structure.entry_count(), "Blueprint rendered");

        // 3. Nothing touches disk unless every rendered path stays under the root
        validator::validate_project_structure(&structure).map_err(ScaffoldError::Domain)?;

        // 4. Write
        let report = self.write_structure(&structure, progress)?;

        info!(
            directories = report.directories,
            files_written = report.files_written,
            files_kept = report.files_kept,
            "Scaffold completed successfully"
        );
        Ok(report)
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    fn write_structure(
        &self,
        structure: &ProjectStructure,
        progress: &dyn ProgressReporter,
    ) -> ScaffoldResult<ScaffoldReport> {
        let root = structure.root();
        let mut report = ScaffoldReport {
            root: root.to_path_buf(),
            ..ScaffoldReport::default()
        };

        self.filesystem.create_dir_all(root)?;

        for step in structure.steps() {
            progress.step(step.icon, &step.title);

            for entry in &step.entries {
                match entry {
                    FsEntry::Directory(dir) => {
                        let path = root.join(&dir.path);
                        debug!(path = %path.display(), "ensure directory");
                        self.filesystem.create_dir_all(&path)?;
                        report.directories += 1;
                    }
                    FsEntry::File(file) => self.write_file(root, file, &mut report)?,
                }
            }
        }

        Ok(report)
    }

    fn write_file(
        &self,
        root: &Path,
        file: &FileToWrite,
        report: &mut ScaffoldReport,
    ) -> ScaffoldResult<()> {
        let path = root.join(&file.path);

        if file.policy == WritePolicy::CreateIfAbsent && self.filesystem.exists(&path) {
            debug!(path = %path.display(), "exists, keeping");
            report.files_kept += 1;
            return Ok(());
        }

        if let Some(parent) = path.parent() {
            self.filesystem.create_dir_all(parent)?;
        }

        debug!(path = %path.display(), bytes = file.size(), "write file");
        self.filesystem.write_file(&path, &file.content)?;
        report.files_written += 1;

        if file.permissions.executable_flag() {
            self.filesystem.set_permissions(&path, true)?;
            report.executables += 1;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use mockall::predicate::*;

    use super::*;
    use crate::application::ApplicationError;
    use crate::application::ports::{MockBlueprintRenderer, MockFilesystem};
    use crate::domain::{DomainError, FileSpec, Permissions, ProjectName, Section, Step};

    #[derive(Default)]
    struct RecordingProgress(RefCell<Vec<String>>);

    impl ProgressReporter for RecordingProgress {
        fn step(&self, _icon: &str, title: &str) {
            self.0.borrow_mut().push(title.to_string());
        }
    }

    fn blueprint() -> Blueprint {
        Blueprint::builder("test")
            .directory("scripts")
            .section(Section::new("📜", "scripts").file(FileSpec::literal("scripts/a.sh", "x")))
            .build()
            .unwrap()
    }

    fn project() -> ProjectDescriptor {
        ProjectDescriptor::new(ProjectName::new("demo").unwrap(), "/out/demo")
    }

    fn structure() -> ProjectStructure {
        ProjectStructure::new("/out/demo")
            .with_step(
                Step::new("📁", "Creating directory structure")
                    .with_directory("scripts"),
            )
            .with_step(
                Step::new("📜", "Creating utility scripts")
                    .with_file(
                        "scripts/setup.sh",
                        "#!/bin/bash\n".into(),
                        Permissions::executable(),
                        WritePolicy::Overwrite,
                    )
                    .with_file(
                        ".env.example",
                        "A=1\n".into(),
                        Permissions::regular(),
                        WritePolicy::CreateIfAbsent,
                    ),
            )
    }

    fn renderer_returning(s: ProjectStructure) -> MockBlueprintRenderer {
        let mut renderer = MockBlueprintRenderer::new();
        renderer.expect_render().returning(move |_, _, _| Ok(s.clone()));
        renderer
    }

    #[test]
    fn writes_every_step_and_reports_progress() {
        let mut fs = MockFilesystem::new();
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_exists()
            .with(eq(Path::new("/out/demo/.env.example")))
            .return_const(false);
        fs.expect_write_file().times(2).returning(|_, _| Ok(()));
        fs.expect_set_permissions()
            .with(eq(Path::new("/out/demo/scripts/setup.sh")), eq(true))
            .times(1)
            .returning(|_, _| Ok(()));

        let service = ScaffoldService::new(Box::new(renderer_returning(structure())), Box::new(fs));
        let progress = RecordingProgress::default();
        let report = service.scaffold(&blueprint(), &project(), &progress).unwrap();

        assert_eq!(report.directories, 1);
        assert_eq!(report.files_written, 2);
        assert_eq!(report.files_kept, 0);
        assert_eq!(report.executables, 1);
        assert_eq!(
            *progress.0.borrow(),
            vec!["Creating directory structure", "Creating utility scripts"]
        );
    }

    #[test]
    fn existing_create_if_absent_file_is_kept() {
        let mut fs = MockFilesystem::new();
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_exists().return_const(true);
        fs.expect_write_file()
            .with(eq(Path::new("/out/demo/scripts/setup.sh")), always())
            .times(1)
            .returning(|_, _| Ok(()));
        fs.expect_set_permissions().returning(|_, _| Ok(()));

        let service = ScaffoldService::new(Box::new(renderer_returning(structure())), Box::new(fs));
        let report = service
            .scaffold(&blueprint(), &project(), &RecordingProgress::default())
            .unwrap();

        assert_eq!(report.files_written, 1);
        assert_eq!(report.files_kept, 1);
    }

    #[test]
    fn filesystem_error_stops_the_run() {
        let mut fs = MockFilesystem::new();
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_write_file().times(1).returning(|path, _| {
            Err(ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "Permission denied".into(),
            }
            .into())
        });
        // Never reached: neither chmod nor the second file.
        fs.expect_set_permissions().never();
        fs.expect_exists().never();

        let service = ScaffoldService::new(Box::new(renderer_returning(structure())), Box::new(fs));
        let err = service
            .scaffold(&blueprint(), &project(), &RecordingProgress::default())
            .unwrap_err();

        assert!(matches!(
            err,
            ScaffoldError::Application(ApplicationError::FilesystemError { .. })
        ));
    }

    #[test]
    fn render_receives_empty_context_and_project_root() {
        let mut renderer = MockBlueprintRenderer::new();
        renderer
            .expect_render()
            .withf(|_, ctx, root| {
                ctx.get("PROJECT_NAME").is_none() && root == Path::new("/out/demo")
            })
            .times(1)
            .returning(|_, _, _| Ok(structure()));

        let mut fs = MockFilesystem::new();
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_exists().return_const(false);
        fs.expect_write_file().returning(|_, _| Ok(()));
        fs.expect_set_permissions().returning(|_, _| Ok(()));

        let service = ScaffoldService::new(Box::new(renderer), Box::new(fs));
        assert!(
            service
                .scaffold(&blueprint(), &project(), &RecordingProgress::default())
                .is_ok()
        );
    }

    #[test]
    fn escaping_rendered_path_is_rejected_before_any_write() {
        let escaping = ProjectStructure::new("/out/demo").with_step(
            Step::new("📜", "Creating utility scripts").with_file(
                "../evil.sh",
                "#!/bin/bash\n".into(),
                Permissions::executable(),
                WritePolicy::Overwrite,
            ),
        );

        let mut fs = MockFilesystem::new();
        fs.expect_create_dir_all().never();
        fs.expect_write_file().never();
        fs.expect_set_permissions().never();
        fs.expect_exists().never();

        let progress = RecordingProgress::default();
        let service = ScaffoldService::new(Box::new(renderer_returning(escaping)), Box::new(fs));
        let err = service.scaffold(&blueprint(), &project(), &progress).unwrap_err();

        assert!(matches!(
            err,
            ScaffoldError::Domain(DomainError::PathEscapesRoot { .. })
        ));
        assert!(progress.0.borrow().is_empty());
    }

    #[test]
    fn empty_rendered_structure_is_rejected() {
        let mut fs = MockFilesystem::new();
        fs.expect_create_dir_all().never();

        let service = ScaffoldService::new(
            Box::new(renderer_returning(ProjectStructure::new("/out/demo"))),
            Box::new(fs),
        );
        let err = service
            .scaffold(&blueprint(), &project(), &RecordingProgress::default())
            .unwrap_err();

        assert!(matches!(err, ScaffoldError::Domain(DomainError::InvalidBlueprint(_))));
    }
}
