//! Engine argument list construction.

use std::path::Path;

use crate::cli::Preset;
use crate::config::defaults::{COMPATIBILITY_LEVEL, DOWNSAMPLE_THRESHOLD, TRANSPARENCY_LEVEL};

/// Build the engine argument list for one run.
///
/// Pure string assembly: nothing is validated, and the output path must come
/// before the input path.
pub fn build_arguments(
    preset: Preset,
    resolution: i32,
    input: &Path,
    output: &Path,
) -> Vec<String> {
    let mut args: Vec<String> = vec![
        "-sDEVICE=pdfwrite".into(),
        // PDF/A-1b compatible output
        "-sProcessColorModel=DeviceCMYK".into(),
        "-sPDFACompatibilityPolicy=1".into(),
        "-sColorConversionStrategy=RGB".into(),
        "-dPDFA=1".into(),
        format!("-dPDFSETTINGS={}", preset.settings_token()),
        "-dPDFACompatibilityPolicy=1".into(),
        format!("-dCompatibilityLevel={}", COMPATIBILITY_LEVEL),
    ];

    for class in ["Color", "Gray", "Mono"] {
        args.push(format!("-dDownsample{}Images=true", class));
    }
    for class in ["Color", "Gray", "Mono"] {
        args.push(format!("-d{}ImageResolution={}", class, resolution));
    }
    for class in ["Color", "Gray", "Mono"] {
        args.push(format!(
            "-d{}ImageDownsampleThreshold={}",
            class, DOWNSAMPLE_THRESHOLD
        ));
    }

    args.extend(
        [
            "-dSubsetFonts=true",
            "-dEmbedAllFonts=true",
            "-dPreserveAnnots=true",
            "-dPreserveEPSInfo=true",
            "-dPreserveOPIComments=true",
            "-dPreserveOverprintSettings=true",
            "-dAutoFilterColorImages=false",
            "-dAutoFilterGrayImages=false",
        ]
        .map(String::from),
    );
    args.push(format!("-dTransparencyLevel={}", TRANSPARENCY_LEVEL));
    args.push("-q".into());

    args.push("-o".into());
    args.push(output.to_string_lossy().into_owned());
    args.push(input.to_string_lossy().into_owned());

    args
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolution_tokens(args: &[String]) -> Vec<&str> {
        args.iter()
            .filter(|a| a.contains("ImageResolution="))
            .map(|a| a.split('=').nth(1).unwrap_or(""))
            .collect()
    }

    fn settings_tokens(args: &[String]) -> Vec<&str> {
        args.iter()
            .filter_map(|a| a.strip_prefix("-dPDFSETTINGS="))
            .collect()
    }

    #[test]
    fn test_full_argument_list() {
        let args = build_arguments(
            Preset::Ebook,
            150,
            Path::new("in.pdf"),
            Path::new("out.pdf"),
        );
        let expected = vec![
            "-sDEVICE=pdfwrite",
            "-sProcessColorModel=DeviceCMYK",
            "-sPDFACompatibilityPolicy=1",
            "-sColorConversionStrategy=RGB",
            "-dPDFA=1",
            "-dPDFSETTINGS=/ebook",
            "-dPDFACompatibilityPolicy=1",
            "-dCompatibilityLevel=1.4",
            "-dDownsampleColorImages=true",
            "-dDownsampleGrayImages=true",
            "-dDownsampleMonoImages=true",
            "-dColorImageResolution=150",
            "-dGrayImageResolution=150",
            "-dMonoImageResolution=150",
            "-dColorImageDownsampleThreshold=1.0",
            "-dGrayImageDownsampleThreshold=1.0",
            "-dMonoImageDownsampleThreshold=1.0",
            "-dSubsetFonts=true",
            "-dEmbedAllFonts=true",
            "-dPreserveAnnots=true",
            "-dPreserveEPSInfo=true",
            "-dPreserveOPIComments=true",
            "-dPreserveOverprintSettings=true",
            "-dAutoFilterColorImages=false",
            "-dAutoFilterGrayImages=false",
            "-dTransparencyLevel=1",
            "-q",
            "-o",
            "out.pdf",
            "in.pdf",
        ];
        assert_eq!(args, expected);
    }

    #[test]
    fn test_one_settings_token_per_preset() {
        for preset in [Preset::Screen, Preset::Ebook, Preset::Print, Preset::Prepress] {
            let args = build_arguments(preset, 96, Path::new("a.pdf"), Path::new("b.pdf"));
            assert_eq!(settings_tokens(&args), vec![preset.settings_token()]);
            assert_eq!(resolution_tokens(&args), vec!["96", "96", "96"]);
        }
    }

    #[test]
    fn test_resolution_passed_through_unvalidated() {
        let args = build_arguments(Preset::Print, -1, Path::new("a.pdf"), Path::new("b.pdf"));
        assert_eq!(resolution_tokens(&args), vec!["-1", "-1", "-1"]);

        let args = build_arguments(Preset::Print, 0, Path::new("a.pdf"), Path::new("b.pdf"));
        assert_eq!(resolution_tokens(&args), vec!["0", "0", "0"]);
    }

    #[test]
    fn test_output_precedes_input() {
        let args = build_arguments(
            Preset::Screen,
            72,
            Path::new("/docs/my report.pdf"),
            Path::new("/tmp/out.pdf"),
        );
        let n = args.len();
        assert_eq!(args[n - 3], "-o");
        assert_eq!(args[n - 2], "/tmp/out.pdf");
        assert_eq!(args[n - 1], "/docs/my report.pdf");
    }
}
