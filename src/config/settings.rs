use std::path::PathBuf;

use crate::cli::{Args, Preset};
use crate::optimizer::ReplaceStrategy;

/// Runtime settings for an optimization run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub preset: Preset,

    /// Image resolution in DPI, applied to color, gray and mono images alike.
    /// Passed to the engine uninterpreted.
    pub resolution: i32,

    /// How the optimized file replaces the input in in-place mode
    pub replace: ReplaceStrategy,

    /// Engine name or path overriding the default PATH lookup
    pub engine: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self::for_preset(Preset::default())
    }
}

impl Settings {
    /// Create settings with the preset's default resolution
    pub fn for_preset(preset: Preset) -> Self {
        Self {
            preset,
            resolution: preset.default_resolution(),
            replace: ReplaceStrategy::default(),
            engine: None,
        }
    }

    /// Create settings from CLI arguments
    pub fn from_args(args: &Args) -> Self {
        let mut settings = Self::for_preset(args.preset);

        if let Some(dpi) = args.dpi {
            settings.resolution = dpi;
        }
        if args.atomic {
            settings.replace = ReplaceStrategy::AtomicRename;
        }
        settings.engine = args.engine.clone();

        settings
    }
}
