//! CLI argument parsing for benchsift

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Console output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable tables (default)
    Text,
    /// JSON format for machine parsing
    Json,
    /// CSV format for spreadsheet analysis
    Csv,
}

#[derive(Parser, Debug)]
#[command(name = "benchsift")]
#[command(version)]
#[command(about = "Flag commits whose benchmark results changed beyond configured thresholds", long_about = None)]
pub struct Cli {
    /// Directory of functional-test report files (*.json)
    #[arg(value_name = "DIRECTORY")]
    pub directory: Option<PathBuf>,

    /// Microbenchmark (JMH) report file
    #[arg(long = "jmh", value_name = "FILE")]
    pub jmh: Option<PathBuf>,

    /// Tolerated growth of the current commit over the next older one (default: 2)
    #[arg(
        long = "delta-threshold",
        value_name = "SECONDS",
        allow_negative_numbers = true
    )]
    pub delta_threshold: Option<f64>,

    /// Tolerated ratio of the current measurement to the former one (default: 2.0)
    #[arg(long = "speedup-threshold", value_name = "RATIO")]
    pub speedup_threshold: Option<f64>,

    /// TOML file with delta_threshold / speedup_threshold
    #[arg(long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Only analyse tests whose name matches this regex
    #[arg(long = "filter", value_name = "REGEX")]
    pub filter: Option<String>,

    /// Output format
    #[arg(long = "format", value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Also write statistics.json and salient_commits.json into this directory
    #[arg(short = 'o', long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Exit with an error status when any commit is salient
    #[arg(long = "fail-on-salient")]
    pub fail_on_salient: bool,

    /// Enable debug tracing to stderr
    #[arg(long = "debug")]
    pub debug: bool,
}
