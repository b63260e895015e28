//! Command-line interface for codescan.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::AnalysisConfig;
use crate::engine::Engine;
use crate::report;

/// Exit codes.
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_ERROR: i32 = 2;

/// Default config file names to search for.
const DEFAULT_CONFIG_NAMES: &[&str] = &["codescan.yaml", ".codescan.yaml"];

/// Static analysis engine for multi-language codebases.
///
/// Codescan walks a directory tree, parses every supported source file,
/// and reports per-file quality metrics plus cross-file findings: dead
/// code, duplicated blocks, and a lexical call graph.
#[derive(Parser)]
#[command(name = "codescan")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze a directory tree
    #[command(visible_alias = "analyze")]
    Scan(ScanArgs),
}

/// Arguments for the scan command.
#[derive(Parser)]
pub struct ScanArgs {
    /// Directory to analyze
    pub path: PathBuf,

    /// Path to config YAML file (default: auto-discover)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output format: pretty or json
    #[arg(short, long, default_value = "pretty")]
    pub format: String,

    /// Number of refactor candidates to list in pretty output
    #[arg(short, long, default_value_t = 5)]
    pub top: usize,
}

/// Find a config file in the current directory, if any.
fn discover_config() -> Option<PathBuf> {
    DEFAULT_CONFIG_NAMES
        .iter()
        .map(PathBuf::from)
        .find(|p| p.exists())
}

/// Run the scan command.
pub fn run_scan(args: &ScanArgs) -> anyhow::Result<i32> {
    if args.format != "pretty" && args.format != "json" {
        eprintln!(
            "Error: invalid format {:?}, must be 'pretty' or 'json'",
            args.format
        );
        return Ok(EXIT_ERROR);
    }

    let config = match args.config.clone().or_else(discover_config) {
        Some(path) => match AnalysisConfig::parse_file(&path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error: {}", e);
                return Ok(EXIT_ERROR);
            }
        },
        None => AnalysisConfig::default(),
    };

    let engine = match Engine::new(config) {
        Ok(e) => e,
        Err(e) => {
            eprintln!("Error: {}", e);
            return Ok(EXIT_ERROR);
        }
    };

    let result = match engine.analyze(&args.path) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Error: {}", e);
            return Ok(EXIT_ERROR);
        }
    };

    match args.format.as_str() {
        "json" => report::write_json(&result)?,
        _ => report::write_pretty(&result, args.top),
    }

    Ok(EXIT_SUCCESS)
}
