pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod optimizer;

pub use cli::Preset;
pub use config::Settings;
pub use engine::Engine;
pub use error::{OptimizeError, Result};
pub use optimizer::{build_arguments, PdfOptimizer, ReplaceStrategy};
