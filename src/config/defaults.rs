/// Engine executable looked up on PATH when no override is given
pub const DEFAULT_ENGINE: &str = "gs";

/// Suffix appended to the input path for the in-place scratch file
pub const TEMP_SUFFIX: &str = ".tmp";

/// Image resolution for the screen preset (DPI)
pub const SCREEN_RESOLUTION: i32 = 72;

/// Image resolution for the ebook preset (DPI)
pub const EBOOK_RESOLUTION: i32 = 150;

/// Image resolution for the print preset (DPI)
pub const PRINT_RESOLUTION: i32 = 300;

/// Image resolution for the prepress preset (DPI)
pub const PREPRESS_RESOLUTION: i32 = 300;

/// Downsample whenever the source resolution exceeds the target
pub const DOWNSAMPLE_THRESHOLD: &str = "1.0";

/// PDF compatibility level written by the engine
pub const COMPATIBILITY_LEVEL: &str = "1.4";

/// Transparency flattening level
pub const TRANSPARENCY_LEVEL: u8 = 1;
