//! mdquiz - Markdown quiz compiler
//!
//! Reads a markdown quiz (H1 title, one H2 per question, a blockquote
//! description and a task list of choices) and writes the survey JSON
//! document the quiz renderer consumes.

#![deny(unsafe_code)]
#![cfg_attr(all(not(debug_assertions), not(test)), deny(clippy::all))]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use mdquiz::pipeline;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Main entry point for the mdquiz CLI application
fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {:?}", e);
        std::process::exit(1);
    }
}

/// Run the CLI application
fn run() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let config = pipeline::load_config(cli.config.as_deref())?;

    let mut rng = match cli.seed {
        Some(seed) => {
            log::info!("Using seed {}", seed);
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };

    // Stage 1: Read the source document
    let markdown = pipeline::read_source(cli.source.as_deref())?;

    // Stages 2-3: Parse, validate and assemble
    let document = pipeline::compile_with_rng(&markdown, &config, &mut rng).with_context(|| {
        format!(
            "Failed to compile quiz from {}",
            cli.source
                .as_deref()
                .map(|p| p.display().to_string())
                .unwrap_or_default()
        )
    })?;

    // Stage 4: Export
    if cli.stdout {
        println!("{}", pipeline::export::to_json(&document)?);
        return Ok(());
    }

    pipeline::export::write_json(&document, &cli.output)
        .with_context(|| format!("Failed to write quiz to {}", cli.output.display()))?;

    println!(
        "✓ Wrote {} question(s) to {}",
        document.question_count(),
        cli.output.display()
    );

    Ok(())
}

/// Initialize logging; `RUST_LOG` overrides the default level
fn init_logging(verbose: bool) {
    let default_level = if verbose { "info" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
}
