//! Validate command implementation.
//!
//! Scans an exports directory and reports the result. Strictness is decided
//! here, not in the scanner: errors always fail, warnings fail only under
//! `--strict-warnings`.

use std::path::PathBuf;

use clap::Args;

use crate::error::{FrameError, Result};
use crate::output::{display_path, plural, Printer};
use crate::scan::{scan_exports, ScanOptions, Severity};

/// Validate an exports directory against naming and size conventions
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Directory containing exported PNG frames
    pub exports_dir: PathBuf,

    /// Expected frame canvas width
    #[arg(long, default_value_t = 24)]
    pub width: u32,

    /// Expected frame canvas height
    #[arg(long, default_value_t = 48)]
    pub height: u32,

    /// Disable PNG canvas size validation
    #[arg(long)]
    pub no_size_check: bool,

    /// Fail if any required runtime animation is missing
    #[arg(long)]
    pub require_all: bool,

    /// Treat warnings as failures (non-zero exit)
    #[arg(long)]
    pub strict_warnings: bool,
}

pub fn run(args: ValidateArgs, printer: &Printer) -> Result<()> {
    let expected_size = if args.no_size_check {
        None
    } else {
        Some((args.width, args.height))
    };
    let options = ScanOptions {
        expected_size,
        require_all: args.require_all,
        ..ScanOptions::default()
    };

    let result = scan_exports(&args.exports_dir, &options);
    let display = display_path(&args.exports_dir);

    printer.status("Scanning", &display);
    match expected_size {
        Some((width, height)) => printer.info("Expecting", &format!("{width}x{height} canvas")),
        None => printer.info("Expecting", "any canvas (size check disabled)"),
    }

    for (animation, frames) in &result.frames_by_animation {
        let indices: Vec<String> = frames.iter().map(|f| f.index.to_string()).collect();
        let mut sizes: Vec<(u32, u32)> = frames.iter().map(|f| (f.width, f.height)).collect();
        sizes.sort_unstable();
        sizes.dedup();
        let sizes_text: Vec<String> = sizes
            .iter()
            .map(|(width, height)| format!("{width}x{height}"))
            .collect();
        printer.info(
            animation,
            &format!(
                "{}, indices=[{}], sizes=[{}]",
                plural(frames.len(), "frame", "frames"),
                indices.join(", "),
                sizes_text.join(", ")
            ),
        );
    }

    let missing = result.missing_required();
    if !missing.is_empty() && !args.require_all {
        printer.warning(
            "Missing",
            &format!("{} (use --require-all to fail)", missing.join(", ")),
        );
    }

    for diagnostic in result.diagnostics.iter() {
        match diagnostic.severity {
            Severity::Warning => printer.warning("warning", &diagnostic.message),
            Severity::Error => printer.error("error", &diagnostic.message),
        }
    }

    let errors = result.diagnostics.error_count();
    let warnings = result.diagnostics.warning_count();
    let failed = errors > 0 || (args.strict_warnings && warnings > 0);

    if failed {
        let message = if errors > 0 {
            format!("{} in {}", plural(errors, "error", "errors"), display)
        } else {
            format!(
                "{} in {} (treated as errors by --strict-warnings)",
                plural(warnings, "warning", "warnings"),
                display
            )
        };
        return Err(FrameError::Validation {
            message,
            help: Some("See the report above for details".to_string()),
        });
    }

    printer.success(
        "Validated",
        &format!(
            "{} across {}",
            plural(result.total_frames(), "frame", "frames"),
            plural(result.animation_count(), "animation", "animations")
        ),
    );

    Ok(())
}
