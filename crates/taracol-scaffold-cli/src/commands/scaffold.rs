//! The scaffold run: resolve the project, build adapters, write the tree.
//!
//! No business logic lives here.

use tracing::{info, instrument};

use taracol_scaffold_adapters::{LocalFilesystem, SimpleRenderer, taracol_blueprint};
use taracol_scaffold_core::{
    application::ScaffoldService,
    domain::{ProjectDescriptor, ProjectName},
    error::ScaffoldError,
};

use crate::{
    cli::Cli,
    error::{CliResult, IntoCli},
    output::{OutputManager, banner},
};

/// Execute a scaffold run.
///
/// 1. Validate the name and resolve the base directory
/// 2. Build the built-in blueprint and the local adapters
/// 3. Scaffold, printing one line per writer group
/// 4. Print the summary and next steps
#[instrument(skip_all, fields(project = %cli.name))]
pub fn execute(cli: Cli, output: &OutputManager) -> CliResult<()> {
    let name = ProjectName::new(cli.name).map_err(ScaffoldError::Domain)?;
    let cwd = std::env::current_dir().with_cli_context(|| "cannot read current directory")?;
    let project = ProjectDescriptor::resolve(name, cli.dir, cwd).map_err(ScaffoldError::Domain)?;

    let blueprint = taracol_blueprint().with_cli_context(|| "building blueprint")?;
    let service = ScaffoldService::new(
        Box::new(SimpleRenderer::new()),
        Box::new(LocalFilesystem::new()),
    );

    output.header(&banner(project.base_dir()))?;
    info!(path = %project.base_dir().display(), "Scaffold started");

    let report = service
        .scaffold(&blueprint, &project, output)
        .with_cli_context(|| format!("scaffolding {}", project.base_dir().display()))?;

    info!(
        files_written = report.files_written,
        files_kept = report.files_kept,
        "Scaffold completed"
    );

    output.finished(&report)?;
    Ok(())
}
