//! Output management and formatting.
//!
//! Progress goes to stdout through [`console::Term`]; diagnostics go to
//! stderr through tracing.

use std::io::{self, IsTerminal};
use std::path::Path;

use console::Term;
use owo_colors::OwoColorize;
use taracol_scaffold_core::application::{ProgressReporter, ScaffoldReport};
use tracing::warn;

use crate::config::AppConfig;

/// Manages CLI output based on configuration.
pub struct OutputManager {
    quiet: bool,
    no_color: bool,
    term: Term,
}

impl OutputManager {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            quiet: config.output.quiet,
            no_color: config.output.no_color || !io::stdout().is_terminal(),
            term: Term::stdout(),
        }
    }

    /// Generic message; suppressed in quiet mode.
    pub fn print(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_line(msg)
    }

    /// Bold cyan header line.
    pub fn header(&self, text: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            text.to_owned()
        } else {
            text.cyan().bold().to_string()
        };
        self.term.write_line(&line)
    }

    /// Green success line.
    pub fn success(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            msg.to_owned()
        } else {
            msg.green().bold().to_string()
        };
        self.term.write_line(&line)
    }

    /// Success banner, location, counts and next steps.
    pub fn finished(&self, report: &ScaffoldReport) -> io::Result<()> {
        self.print("")?;
        self.success("\u{2705} Taracol project scaffolded successfully!")?;
        self.print(&format!("\u{1f4cd} Project location: {}", report.root.display()))?;
        self.print(&summary_line(report))?;
        self.print("")?;
        for line in next_steps(&report.root) {
            self.print(&line)?;
        }
        Ok(())
    }

}

impl ProgressReporter for OutputManager {
    fn step(&self, icon: &str, title: &str) {
        if let Err(e) = self.print(&format!("{icon} {title}")) {
            warn!(error = %e, "cannot write progress line");
        }
    }
}

/// Header printed before the first step.
pub fn banner(root: &Path) -> String {
    format!(
        "\u{1f577}\u{fe0f}  Scaffolding Taracol project at {}",
        root.display()
    )
}

fn summary_line(report: &ScaffoldReport) -> String {
    let mut line = format!(
        "   {} directories, {} files written",
        report.directories, report.files_written
    );
    if report.files_kept > 0 {
        line.push_str(&format!(", {} kept", report.files_kept));
    }
    line
}

fn next_steps(root: &Path) -> Vec<String> {
    vec![
        "\u{1f680} Next steps:".into(),
        format!("   1. cd {}", root.display()),
        "   2. ./scripts/setup-dev.sh".into(),
        "   3. Start building! \u{1f577}\u{fe0f}".into(),
    ]
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    fn manager(quiet: bool, no_color: bool) -> OutputManager {
        let mut config = AppConfig::default();
        config.output.quiet = quiet;
        config.output.no_color = no_color;
        OutputManager::new(&config)
    }

    fn report(kept: usize) -> ScaffoldReport {
        ScaffoldReport {
            root: PathBuf::from("/work/demo"),
            directories: 95,
            files_written: 60,
            files_kept: kept,
            executables: 2,
        }
    }

    #[test]
    fn quiet_suppresses_print() {
        let out = manager(true, true);
        assert!(out.quiet);
        assert!(out.print("hello").is_ok());
        assert!(out.finished(&report(0)).is_ok());
    }

    #[test]
    fn no_color_from_config() {
        assert!(manager(false, true).no_color);
    }

    #[test]
    fn banner_names_the_root() {
        assert!(banner(Path::new("/work/demo")).ends_with("Taracol project at /work/demo"));
    }

    #[test]
    fn summary_mentions_kept_files_only_when_present() {
        assert_eq!(
            summary_line(&report(0)),
            "   95 directories, 60 files written"
        );
        assert!(summary_line(&report(1)).ends_with(", 1 kept"));
    }

    #[test]
    fn next_steps_start_with_cd() {
        let steps = next_steps(Path::new("/work/demo"));
        assert_eq!(steps[1], "   1. cd /work/demo");
        assert_eq!(steps[2], "   2. ./scripts/setup-dev.sh");
    }
}
