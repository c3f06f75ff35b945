use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::config::defaults::{
    EBOOK_RESOLUTION, PREPRESS_RESOLUTION, PRINT_RESOLUTION, SCREEN_RESOLUTION,
};

#[derive(Parser, Debug)]
#[command(name = "pdfopt")]
#[command(
    author,
    version,
    about = "Recompress and downsample PDF files through Ghostscript quality presets"
)]
pub struct Args {
    /// Input PDF file path
    #[arg(required = true)]
    pub input: PathBuf,

    /// Output PDF file path (defaults to <input>.optimized.pdf)
    #[arg(short, long, conflicts_with = "in_place")]
    pub output: Option<PathBuf>,

    /// Overwrite the input file with the optimized result
    #[arg(short, long)]
    pub in_place: bool,

    /// Quality preset
    #[arg(short, long, value_enum, default_value = "screen")]
    pub preset: Preset,

    /// Image resolution in DPI (defaults to the preset's resolution)
    #[arg(short, long, allow_negative_numbers = true)]
    pub dpi: Option<i32>,

    /// Engine executable name or path (defaults to gs on PATH)
    #[arg(long)]
    pub engine: Option<PathBuf>,

    /// Replace the input with a single rename when used with --in-place
    #[arg(long, requires = "in_place")]
    pub atomic: bool,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Quality preset selecting the engine's settings profile
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum, Default)]
pub enum Preset {
    /// Low resolution output for on-screen viewing
    #[default]
    Screen,
    /// Medium resolution output for e-readers
    Ebook,
    /// High resolution output for desktop printing
    Print,
    /// High resolution output with color preservation for prepress
    Prepress,
}

impl Preset {
    /// Settings profile token passed to the engine
    pub fn settings_token(&self) -> &'static str {
        match self {
            Preset::Screen => "/screen",
            Preset::Ebook => "/ebook",
            Preset::Print => "/printer",
            Preset::Prepress => "/prepress",
        }
    }

    /// Image resolution used until overridden
    pub fn default_resolution(&self) -> i32 {
        match self {
            Preset::Screen => SCREEN_RESOLUTION,
            Preset::Ebook => EBOOK_RESOLUTION,
            Preset::Print => PRINT_RESOLUTION,
            Preset::Prepress => PREPRESS_RESOLUTION,
        }
    }
}

impl Args {
    /// Get the output path, defaulting to the input with a .optimized.pdf extension
    pub fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| self.input.with_extension("optimized.pdf"))
    }
}
