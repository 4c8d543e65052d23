//! Command-line interface definitions for mdquiz

use clap::Parser;
use mdquiz::pipeline::{DEFAULT_OUTPUT, DOC_PATH_ENV};
use std::path::PathBuf;

/// CLI structure for the mdquiz application
#[derive(Parser, Debug)]
#[command(name = "mdquiz")]
#[command(version)]
#[command(about = "Compile a markdown quiz into a survey JSON document", long_about = None)]
pub struct Cli {
    /// Markdown quiz source
    #[arg(value_name = "PATH", env = DOC_PATH_ENV)]
    pub source: Option<PathBuf>,

    /// Output JSON file path
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Quiz configuration file (TOML)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Seed for question order and element names (reproducible output)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print the JSON to stdout instead of writing the output file
    #[arg(long)]
    pub stdout: bool,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
