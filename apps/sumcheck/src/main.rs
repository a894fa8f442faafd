#![deny(clippy::pedantic, unsafe_code)]
#![allow(clippy::module_name_repetitions)]

//! sumcheck - Recursive MD5 manifest verifier
//!
//! Finds `md5sum*.txt` manifests under a directory tree and checks every file
//! they list against its recorded digest.

mod cli;
mod display;
mod error;
mod logging;

use crate::cli::Cli;
use crate::display::OutputRenderer;
use crate::error::CliError;
use clap::Parser;
use console::Term;
use std::path::Path;
use std::process;
use sumcheck_config::Config;
use sumcheck_types::{ColorChoice, OutputFormat};
use sumcheck_verify::{Verifier, VerifyOptions};
use tracing::{error, info};

/// Exit status when `--fail-exit` is set and verification found problems
const EXIT_VERIFY_FAILED: i32 = 2;

fn main() {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(code) => process::exit(code),
        Err(e) => {
            error!("Application error: {}", e);
            eprintln!("Error: {e}");
            process::exit(1);
        }
    }
}

/// Main application logic; returns the process exit status
fn run(cli: &Cli) -> Result<i32, CliError> {
    // Load configuration with proper precedence:
    // 1. Start with file config (or defaults)
    let mut config = Config::load_or_default(cli.config.as_deref()).map_err(CliError::Config)?;

    // 2. Merge environment variables
    config.merge_env().map_err(CliError::Config)?;

    // 3. Apply CLI flags (highest precedence)
    apply_cli_config(&mut config, cli);

    let json_output = config.general.output == OutputFormat::Json;
    let color = match config.general.output {
        OutputFormat::Plain => ColorChoice::Never,
        _ => config.general.color,
    };
    init_tracing(
        json_output,
        cli.debug,
        stderr_colors(color),
        &config.log_dir(),
    );
    info!("Starting sumcheck v{}", env!("CARGO_PKG_VERSION"));

    let verifier = Verifier::new(VerifyOptions {
        root: cli.root.clone(),
        pattern: config.verify.pattern.clone(),
    })?;

    let mut renderer =
        OutputRenderer::new(json_output, cli.quiet, color).with_event_logging(cli.debug);

    let report = verifier.run(&mut renderer)?;
    renderer.render_report(&report)?;

    info!(
        manifests = report.manifests.len(),
        duration_ms = report.duration_ms,
        "verification finished"
    );

    if config.verify.fail_exit && report.has_issues() {
        Ok(EXIT_VERIFY_FAILED)
    } else {
        Ok(0)
    }
}

/// Apply CLI configuration overrides
fn apply_cli_config(config: &mut Config, cli: &Cli) {
    if let Some(color) = cli.color {
        config.general.color = color;
    }
    if cli.json {
        config.general.output = OutputFormat::Json;
    }
    if let Some(pattern) = &cli.pattern {
        config.verify.pattern.clone_from(pattern);
    }
    if cli.fail_exit {
        config.verify.fail_exit = true;
    }
}

/// Whether console log lines on stderr may carry ANSI styling
fn stderr_colors(color_choice: ColorChoice) -> bool {
    match color_choice {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => Term::stderr().features().colors_supported(),
    }
}

/// Initialize tracing/logging
fn init_tracing(json_mode: bool, debug_enabled: bool, ansi: bool, log_dir: &Path) {
    let filter = |default: &str| {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default))
    };

    if debug_enabled {
        // Debug mode: structured JSON logs to file
        if let Err(e) = std::fs::create_dir_all(log_dir) {
            if !json_mode {
                eprintln!("Warning: Failed to create log directory: {e}");
            }
        }

        let log_file = log_dir.join(format!(
            "sumcheck-{}.log",
            chrono::Utc::now().format("%Y%m%d-%H%M%S")
        ));

        match std::fs::File::create(&log_file) {
            Ok(file) => {
                tracing_subscriber::fmt()
                    .json()
                    .with_writer(file)
                    .with_env_filter(filter("info,sumcheck=debug,sumcheck_verify=debug"))
                    .init();

                if !json_mode {
                    eprintln!("Debug logging enabled: {}", log_file.display());
                }
                return;
            }
            Err(e) => {
                if !json_mode {
                    eprintln!("Warning: Failed to create log file: {e}");
                }
            }
        }
    }

    if json_mode {
        // JSON mode: suppress console logging so stdout stays parseable
        tracing_subscriber::fmt()
            .with_writer(std::io::sink)
            .with_env_filter("off")
            .init();
    } else if debug_enabled {
        // Fallback to stderr
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_ansi(ansi)
            .with_env_filter(filter("info"))
            .init();
    } else {
        // Normal mode: minimal logging to stderr
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_ansi(ansi)
            .with_env_filter(filter("warn"))
            .init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stderr_colors_follow_explicit_choice() {
        assert!(stderr_colors(ColorChoice::Always));
        assert!(!stderr_colors(ColorChoice::Never));
    }

    #[test]
    fn test_cli_flags_override_config() {
        let mut config = Config::default();
        let cli = Cli::parse_from(["sumcheck", "--json", "--fail-exit", "-p", "*.md5"]);
        apply_cli_config(&mut config, &cli);

        assert_eq!(config.general.output, OutputFormat::Json);
        assert!(config.verify.fail_exit);
        assert_eq!(config.verify.pattern, "*.md5");
    }
}
