use anyhow::Result;
use clap::Parser;
use std::path::Path;
use tracing::error;

use seogeo::patterns::DEFAULT_PATTERN_FILE;
use seogeo::utils::setup_logging;
use seogeo::{init_default_patterns, run, Args};

fn main() -> Result<()> {
    let args = Args::parse();
    setup_logging(args.verbose);

    if args.init {
        return init_default_patterns(Path::new(DEFAULT_PATTERN_FILE));
    }

    match run(&args) {
        Ok(report) => {
            println!("{}", report);
            Ok(())
        }
        Err(e) => {
            error!(error = %e, "Analysis failed");
            eprintln!("Error: {:#}", e);
            std::process::exit(1);
        }
    }
}
