use anyhow::{Context, Result};
use clap::Parser;

use pdfopt::cli::Args;
use pdfopt::config::Settings;
use pdfopt::optimizer::PdfOptimizer;

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    env_logger::Builder::new()
        .filter_level(match args.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            _ => log::LevelFilter::Debug,
        })
        .init();

    let settings = Settings::from_args(&args);

    // A missing engine is fatal before any file is touched
    let optimizer = PdfOptimizer::from_settings(&args.input, settings)
        .with_context(|| "Cannot optimize PDFs without a PDF engine")?;

    // The version probe starts the engine, so only run it when it gets logged
    if log::log_enabled!(log::Level::Info) {
        if let Some(version) = optimizer.engine().version() {
            log::info!("Using {} {}", optimizer.engine().name(), version);
        }
    }

    if args.in_place {
        optimizer
            .optimize_in_place()
            .with_context(|| format!("Failed to optimize {} in place", args.input.display()))?;

        println!("Successfully optimized {}", args.input.display());
    } else {
        let output_path = args.output_path();
        optimizer.optimize(&output_path).with_context(|| {
            format!(
                "Failed to optimize {} into {}",
                args.input.display(),
                output_path.display()
            )
        })?;

        println!("Successfully wrote PDF to {}", output_path.display());
    }

    Ok(())
}
