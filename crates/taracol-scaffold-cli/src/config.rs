//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by reference. The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. Environment variables prefixed `TARACOL_SCAFFOLD__`
//!    (`TARACOL_SCAFFOLD__LOGGING__LEVEL=debug`), plus `NO_COLOR`
//! 2. Config file: `$TARACOL_SCAFFOLD_CONFIG`, else the platform config dir
//! 3. Built-in defaults

use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

/// Variable naming an explicit config file.
pub const CONFIG_PATH_ENV: &str = "TARACOL_SCAFFOLD_CONFIG";

const ENV_PREFIX: &str = "TARACOL_SCAFFOLD";
const LEVELS: &[&str] = &["off", "error", "warn", "info", "debug", "trace"];

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub logging: LoggingConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter level used when `RUST_LOG` is unset.
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    /// Suppress progress lines. Errors are always printed.
    pub quiet: bool,
}

impl AppConfig {
    /// Load from the process environment.
    pub fn load() -> anyhow::Result<Self> {
        let explicit = std::env::var_os(CONFIG_PATH_ENV).map(PathBuf::from);
        let mut cfg = Self::build(explicit.as_deref(), None)?;

        if std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty()) {
            cfg.output.no_color = true;
        }
        Ok(cfg)
    }

    /// Merge defaults, the config file and `TARACOL_SCAFFOLD__*` variables.
    ///
    /// An explicit file must exist; the default location is optional.
    /// `env` replaces the process environment when given.
    fn build(
        explicit: Option<&Path>,
        env: Option<config::Map<String, String>>,
    ) -> anyhow::Result<Self> {
        let file = match explicit {
            Some(path) => File::from(path).format(FileFormat::Toml).required(true),
            None => File::from(Self::config_path())
                .format(FileFormat::Toml)
                .required(false),
        };

        let cfg: Self = Config::builder()
            .add_source(file)
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true)
                    .source(env),
            )
            .build()
            .context("cannot read configuration")?
            .try_deserialize()
            .context("invalid configuration")?;

        cfg.validate()?;
        Ok(cfg)
    }

    fn validate(&self) -> anyhow::Result<()> {
        let level = self.logging.level.to_ascii_lowercase();
        if !LEVELS.contains(&level.as_str()) {
            bail!(
                "logging.level '{}' is not one of {}",
                self.logging.level,
                LEVELS.join(", ")
            );
        }
        Ok(())
    }

    /// Path to the default configuration file.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("org", "taracol", "taracol-scaffold")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".taracol-scaffold.toml"))
    }

    /// `true` when the level is chatty enough to show error causes.
    pub fn is_verbose(&self) -> bool {
        matches!(
            self.logging.level.to_ascii_lowercase().as_str(),
            "debug" | "trace"
        )
    }
}
