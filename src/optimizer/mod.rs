//! PDF optimizer configuration and invocation.

pub mod arguments;
pub mod replace;

pub use arguments::build_arguments;
pub use replace::{replace_file, ReplaceStrategy};

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::cli::Preset;
use crate::config::defaults::{DEFAULT_ENGINE, TEMP_SUFFIX};
use crate::config::Settings;
use crate::engine::Engine;
use crate::error::Result;

/// Optimizes one input PDF through the external engine.
///
/// The engine is resolved once at construction. Presets and resolution are
/// set through chained builder calls, then [`optimize`](Self::optimize) or
/// [`optimize_in_place`](Self::optimize_in_place) runs the engine. Selecting a
/// preset resets the resolution to that preset's default, so
/// [`image_dpi`](Self::image_dpi) only sticks when called after the preset.
///
/// # Example
///
/// ```no_run
/// use pdfopt::PdfOptimizer;
///
/// PdfOptimizer::new("report.pdf")?
///     .for_ebook()
///     .image_dpi(120)
///     .optimize("report-small.pdf")?;
/// # Ok::<(), pdfopt::OptimizeError>(())
/// ```
#[derive(Debug, Clone)]
pub struct PdfOptimizer {
    input: PathBuf,
    engine: Engine,
    settings: Settings,
}

impl PdfOptimizer {
    /// Create an optimizer using `gs` from PATH, with the screen preset.
    ///
    /// # Errors
    ///
    /// Returns [`OptimizeError::EngineNotFound`](crate::OptimizeError::EngineNotFound)
    /// if the engine cannot be resolved.
    pub fn new(input: impl Into<PathBuf>) -> Result<Self> {
        Self::from_settings(input, Settings::default())
    }

    /// Create an optimizer using an explicit engine name or path.
    pub fn with_engine(input: impl Into<PathBuf>, engine: impl Into<PathBuf>) -> Result<Self> {
        Self::from_settings(
            input,
            Settings {
                engine: Some(engine.into()),
                ..Settings::default()
            },
        )
    }

    /// Create an optimizer from complete settings.
    pub fn from_settings(input: impl Into<PathBuf>, settings: Settings) -> Result<Self> {
        let engine = match settings.engine {
            Some(ref path) => Engine::locate(path)?,
            None => Engine::locate(DEFAULT_ENGINE)?,
        };

        Ok(Self {
            input: input.into(),
            engine,
            settings,
        })
    }

    /// Select a preset, resetting the resolution to its default.
    pub fn preset(mut self, preset: Preset) -> Self {
        self.settings.preset = preset;
        self.settings.resolution = preset.default_resolution();
        self
    }

    pub fn for_screen(self) -> Self {
        self.preset(Preset::Screen)
    }

    pub fn for_ebook(self) -> Self {
        self.preset(Preset::Ebook)
    }

    pub fn for_print(self) -> Self {
        self.preset(Preset::Print)
    }

    pub fn for_prepress(self) -> Self {
        self.preset(Preset::Prepress)
    }

    /// Override the image resolution. The value is not validated.
    pub fn image_dpi(mut self, dpi: i32) -> Self {
        self.settings.resolution = dpi;
        self
    }

    pub fn replace_strategy(mut self, strategy: ReplaceStrategy) -> Self {
        self.settings.replace = strategy;
        self
    }

    pub fn input(&self) -> &Path {
        &self.input
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Scratch path used by in-place optimization: the input path plus `.tmp`.
    pub fn temp_path(&self) -> PathBuf {
        let mut path = OsString::from(self.input.as_os_str());
        path.push(TEMP_SUFFIX);
        PathBuf::from(path)
    }

    /// Engine arguments for writing to `output`.
    pub fn arguments(&self, output: &Path) -> Vec<String> {
        build_arguments(
            self.settings.preset,
            self.settings.resolution,
            &self.input,
            output,
        )
    }

    /// Write the optimized PDF to `output`, leaving the input untouched.
    ///
    /// # Errors
    ///
    /// Returns [`OptimizeError::EngineExecutionFailed`](crate::OptimizeError::EngineExecutionFailed)
    /// if the engine cannot be launched or exits non-zero.
    pub fn optimize(&self, output: impl AsRef<Path>) -> Result<()> {
        let output = output.as_ref();
        self.engine.run(&self.arguments(output))?;

        log::info!(
            "Optimized {} -> {} ({:?}, {} dpi)",
            self.input.display(),
            output.display(),
            self.settings.preset,
            self.settings.resolution
        );

        Ok(())
    }

    /// Optimize and replace the input file with the result.
    ///
    /// The engine writes to [`temp_path`](Self::temp_path), which then
    /// replaces the input according to the configured [`ReplaceStrategy`].
    /// Nothing is cleaned up or rolled back on failure.
    pub fn optimize_in_place(&self) -> Result<()> {
        let temp = self.temp_path();
        self.optimize(&temp)?;
        replace_file(&temp, &self.input, self.settings.replace)
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use crate::OptimizeError;

    // `true` stands in for the engine; these tests never invoke it.
    fn optimizer() -> PdfOptimizer {
        PdfOptimizer::with_engine("doc.pdf", "true").expect("true should be on PATH")
    }

    fn resolution_tokens(args: &[String]) -> Vec<String> {
        args.iter()
            .filter(|a| a.contains("ImageResolution="))
            .cloned()
            .collect()
    }

    #[test]
    fn test_defaults_to_screen() {
        let opt = optimizer();
        assert_eq!(opt.settings().preset, Preset::Screen);
        assert_eq!(opt.settings().resolution, 72);
        assert_eq!(opt.input(), Path::new("doc.pdf"));
    }

    #[test]
    fn test_missing_engine() {
        let result = PdfOptimizer::with_engine("doc.pdf", "nonexistent_engine_12345");
        assert!(matches!(result, Err(OptimizeError::EngineNotFound { .. })));
    }

    #[test]
    fn test_preset_builders() {
        let opt = optimizer().for_ebook();
        assert_eq!(opt.settings().preset, Preset::Ebook);
        assert_eq!(opt.settings().resolution, 150);

        let opt = opt.for_print();
        assert_eq!(opt.settings().resolution, 300);

        let opt = opt.for_prepress();
        assert_eq!(opt.settings().preset, Preset::Prepress);
        assert_eq!(opt.settings().resolution, 300);

        let opt = opt.for_screen();
        assert_eq!(opt.settings().resolution, 72);
    }

    #[test]
    fn test_ebook_default_resolution_tokens() {
        let args = optimizer().for_ebook().arguments(Path::new("out.pdf"));
        assert_eq!(
            resolution_tokens(&args),
            vec![
                "-dColorImageResolution=150",
                "-dGrayImageResolution=150",
                "-dMonoImageResolution=150",
            ]
        );
    }

    #[test]
    fn test_dpi_before_preset_is_reset() {
        let args = optimizer()
            .image_dpi(600)
            .for_print()
            .arguments(Path::new("out.pdf"));
        assert!(resolution_tokens(&args).iter().all(|t| t.ends_with("=300")));
    }

    #[test]
    fn test_dpi_after_preset_overrides_resolution_only() {
        let args = optimizer()
            .for_print()
            .image_dpi(600)
            .arguments(Path::new("out.pdf"));
        assert!(resolution_tokens(&args).iter().all(|t| t.ends_with("=600")));
        assert!(args.contains(&"-dPDFSETTINGS=/printer".to_string()));
    }

    #[test]
    fn test_temp_path_appends_suffix() {
        assert_eq!(optimizer().temp_path(), PathBuf::from("doc.pdf.tmp"));
    }

    #[test]
    fn test_replace_strategy_builder() {
        let opt = optimizer().replace_strategy(ReplaceStrategy::AtomicRename);
        assert_eq!(opt.settings().replace, ReplaceStrategy::AtomicRename);
    }
}
