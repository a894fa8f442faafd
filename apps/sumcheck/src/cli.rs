//! Command line interface definition

use clap::Parser;
use std::path::PathBuf;
use sumcheck_types::ColorChoice;

/// sumcheck - Recursive MD5 manifest verifier
#[derive(Parser, Debug)]
#[command(name = "sumcheck")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Recursive MD5 manifest verifier")]
#[command(long_about = None)]
pub struct Cli {
    /// Directory to scan for manifests
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    pub root: PathBuf,

    /// File-name glob identifying manifests [default: md5sum*.txt]
    #[arg(short, long, value_name = "GLOB")]
    pub pattern: Option<String>,

    /// Only print results, summaries and warnings
    #[arg(short, long)]
    pub quiet: bool,

    /// Exit with status 2 if any entry failed verification
    #[arg(long)]
    pub fail_exit: bool,

    /// Output the run report in JSON format
    #[arg(long)]
    pub json: bool,

    /// Color output control
    #[arg(long, value_enum)]
    pub color: Option<ColorChoice>,

    /// Use alternate config file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Enable debug logging to the log directory
    #[arg(long)]
    pub debug: bool,
}
