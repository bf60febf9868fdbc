//! FlatCopy CLI - Filtered, flattening file copy
//!
//! Copies files of configured extensions into a single flat destination
//! directory, skipping blacklisted subtrees.

use clap::Parser;
use flatcopy::config::{CliArgs, CopyConfig};
use flatcopy::core::CopyEngine;
use flatcopy::error::Result;
use flatcopy::progress::ProgressReporter;
use tracing_subscriber::EnvFilter;

fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .init();

    // Parse CLI arguments
    let args = CliArgs::parse();

    // Both the usage case and runtime failures go to standard output;
    // exit status is not differentiated.
    if let Err(e) = run(args) {
        println!("ERROR: {}", e);
    }
}

fn run(args: CliArgs) -> Result<()> {
    // Require source and destination
    if args.source.is_none() || args.destination.is_none() {
        println!("Usage: flatcopy <source_directory> <destination_directory>");
        return Ok(());
    }

    // Build configuration; fileTypes.txt and blacklistedDirectories.txt
    // are read from the current working directory.
    let config = CopyConfig::from_cli(&args)?;

    if args.verbose > 0 {
        print_config(&config);
    }

    // Create progress reporter
    let progress = if args.progress && !args.quiet {
        ProgressReporter::new()
    } else {
        ProgressReporter::disabled()
    };

    // Create and run copy engine
    let engine = CopyEngine::new(config)
        .with_progress(progress)
        .quiet(args.quiet);

    let result = engine.execute()?;

    if !args.quiet {
        result.print_summary();
    }

    Ok(())
}

fn print_config(config: &CopyConfig) {
    println!("=== Configuration ===");
    println!("Source:      {:?}", config.source);
    println!("Destination: {:?}", config.destination);
    println!("File types:  {:?}", config.file_types);
    println!("Blacklist:   {:?}", config.blacklist);
    println!();
}
