//! Simple variable substitution renderer.

use std::path::Path;

use taracol_scaffold_core::{
    application::ports::BlueprintRenderer,
    domain::{Blueprint, FileSpec, ProjectStructure, RenderContext, Step, TemplateContent},
    error::ScaffoldResult,
};
use tracing::{instrument, warn};

/// Icon and title of the directory step that always runs first.
pub const DIRECTORY_STEP: (&str, &str) = ("📁", "Creating directory structure...");

/// Renderer using `{{VARIABLE}}` substitution.
///
/// Pure transformation; [`ScaffoldService`](taracol_scaffold_core::application::ScaffoldService)
/// validates the blueprint before and the structure after.
pub struct SimpleRenderer;

impl SimpleRenderer {
    /// Create a new simple renderer.
    pub fn new() -> Self {
        Self
    }
}

impl Default for SimpleRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl BlueprintRenderer for SimpleRenderer {
    #[instrument(skip_all, fields(blueprint = %blueprint.name))]
    fn render(
        &self,
        blueprint: &Blueprint,
        context: &RenderContext,
        output_root: &Path,
    ) -> ScaffoldResult<ProjectStructure> {
        let mut structure = ProjectStructure::new(output_root);

        let (icon, title) = DIRECTORY_STEP;
        let mut dirs = Step::new(icon, title);
        for dir in &blueprint.directories {
            dirs.add_directory(dir.path.as_path());
        }
        structure.push_step(dirs);

        for section in &blueprint.sections {
            let mut step = Step::new(section.icon, section.title.as_str());
            for spec in &section.files {
                let content = render_content(spec, context);
                step.add_file(spec.path.as_path(), content, spec.permissions, spec.policy);
            }
            structure.push_step(step);
        }

        Ok(structure)
    }
}

fn render_content(spec: &FileSpec, ctx: &RenderContext) -> String {
    match &spec.content {
        TemplateContent::Literal(source) => source.as_str().to_string(),
        TemplateContent::Parameterized(source) => {
            if !source.contains_placeholder() {
                warn!(path = %spec.path, "parameterized file has no placeholders");
            }
            let ctx = spec
                .variables
                .iter()
                .fold(ctx.clone(), |ctx, (k, v)| ctx.with_variable(k, v));
            ctx.render(source.as_str())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use taracol_scaffold_core::domain::{FsEntry, Section, WritePolicy};

    fn blueprint() -> Blueprint {
        Blueprint::builder("t")
            .directories(["docs", "services/x/src"])
            .section(
                Section::new("🔧", "Creating microservices...").file(
                    FileSpec::parameterized("services/x/src/main.rs", "//! {{SERVICE_DESCRIPTION}}\n")
                        .with_variable("SERVICE_DESCRIPTION", "X things"),
                ),
            )
            .section(
                Section::new("🐳", "Creating infrastructure files...")
                    .file(FileSpec::literal(".env.example", "A={{NOT_A_VAR}}\n").create_if_absent()),
            )
            .build()
            .unwrap()
    }

    #[test]
    fn directories_come_first_then_sections_in_order() {
        let s = SimpleRenderer::new()
            .render(&blueprint(), &RenderContext::new(), Path::new("/out"))
            .unwrap();

        let titles: Vec<_> = s.steps().iter().map(|st| st.title.as_str()).collect();
        assert_eq!(
            titles,
            [
                "Creating directory structure...",
                "Creating microservices...",
                "Creating infrastructure files..."
            ]
        );
        assert_eq!(s.directories().count(), 2);
        assert_eq!(s.root(), Path::new("/out"));
    }

    #[test]
    fn file_variables_are_substituted_and_literals_untouched() {
        let s = SimpleRenderer::new()
            .render(&blueprint(), &RenderContext::new(), Path::new("/out"))
            .unwrap();
        let files: Vec<_> = s.files().collect();

        assert_eq!(files[0].content, "//! X things\n");
        assert_eq!(files[1].content, "A={{NOT_A_VAR}}\n");
        assert_eq!(files[1].policy, WritePolicy::CreateIfAbsent);
    }

    #[test]
    fn paths_stay_relative_in_structure() {
        let s = SimpleRenderer::new()
            .render(&blueprint(), &RenderContext::new(), Path::new("/out"))
            .unwrap();
        assert!(s.entries().all(|e| match e {
            FsEntry::File(f) => f.path.is_relative(),
            FsEntry::Directory(d) => d.path.is_relative(),
        }));
    }
}
