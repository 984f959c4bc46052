//! CLI argument definitions using the clap derive API.
//!
//! Only argument names and help text live here. Validation of the project
//! name happens in the core domain.

use std::path::PathBuf;

use clap::Parser;
use taracol_scaffold_core::domain::DEFAULT_PROJECT_NAME;

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name     = "taracol-scaffold",
    bin_name = "taracol-scaffold",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{1f577}\u{fe0f} Scaffold the Taracol monorepo",
    long_about = "Creates the Taracol workspace tree: Rust core crates, \
                  microservices, API gateway, client and SDK packages, \
                  infrastructure files and helper scripts. Safe to re-run.",
    after_help = "EXAMPLES:\n\
        \x20 taracol-scaffold\n\
        \x20 taracol-scaffold --name demo\n\
        \x20 taracol-scaffold --name demo --dir ~/work/demo",
)]
pub struct Cli {
    /// Project name; also the directory name when `--dir` is absent.
    #[arg(
        long = "name",
        value_name = "NAME",
        default_value = DEFAULT_PROJECT_NAME,
        help = "Project name"
    )]
    pub name: String,

    /// Base directory to scaffold into.
    #[arg(
        long = "dir",
        value_name = "PATH",
        help = "Base directory (defaults to ./<NAME>)"
    )]
    pub dir: Option<PathBuf>,
}
