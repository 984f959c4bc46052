//! Tracing subscriber initialisation.
//!
//! Only this binary installs a subscriber; `taracol-scaffold-core` and the
//! adapters only *emit* spans and events.
//!
//! `RUST_LOG` overrides the configured `logging.level` if set.

use std::io::IsTerminal as _;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::AppConfig;

/// Crates whose events pass the configured level.
const TARGETS: &[&str] = &[
    "taracol_scaffold",
    "taracol_scaffold_core",
    "taracol_scaffold_adapters",
];

/// Initialise the global tracing subscriber.
///
/// Must be called exactly once, before any tracing macros fire.
pub fn init_logging(config: &AppConfig) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(directives(&config.logging.level)))?;

    let use_ansi = !config.output.no_color && std::io::stderr().is_terminal();

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_ansi(use_ansi)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialise tracing: {e}"))?;

    Ok(())
}

/// Filter string giving every workspace crate the same level.
fn directives(level: &str) -> String {
    let level = level.to_ascii_lowercase();
    TARGETS
        .iter()
        .map(|target| format!("{target}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}
