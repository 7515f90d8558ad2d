//! Manifest command implementation.
//!
//! Scans an exports directory, builds the manifest document, attaches the
//! generation timestamp, and writes pretty JSON. Validation findings are
//! embedded in the manifest rather than gating it, unless `--strict`.

use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;
use clap::Args;

use crate::error::{FrameError, Result};
use crate::manifest::build_manifest;
use crate::output::{display_path, plural, Printer};
use crate::scan::{scan_exports, ScanOptions};

/// Generate a JSON manifest for an exports directory
#[derive(Args, Debug)]
pub struct ManifestArgs {
    /// Directory containing exported PNG frames
    pub exports_dir: PathBuf,

    /// Character id to embed in the manifest (default: inferred from path)
    #[arg(long)]
    pub character_id: Option<String>,

    /// Output JSON path (default: <character>/character_manifest.json)
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Expected frame canvas width
    #[arg(long, default_value_t = 24)]
    pub width: u32,

    /// Expected frame canvas height
    #[arg(long, default_value_t = 48)]
    pub height: u32,

    /// Disable PNG canvas size validation
    #[arg(long)]
    pub no_size_check: bool,

    /// Validate that all required runtime animations exist
    #[arg(long)]
    pub require_all: bool,

    /// Do not write a manifest if validation has errors
    #[arg(long)]
    pub strict: bool,
}

pub fn run(args: ManifestArgs, printer: &Printer) -> Result<()> {
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

    if args.strict && result.has_errors() {
        for error in result.errors() {
            printer.error("error", error);
        }
        return Err(FrameError::Validation {
            message: format!(
                "manifest not written: {}",
                plural(
                    result.diagnostics.error_count(),
                    "validation error",
                    "validation errors"
                )
            ),
            help: Some("Run without --strict to embed the errors in the manifest".to_string()),
        });
    }

    let character_id = args
        .character_id
        .clone()
        .unwrap_or_else(|| infer_character_id(&args.exports_dir));

    let mut manifest = build_manifest(&result, &character_id, true);
    manifest.generated_at_utc = Some(Utc::now().to_rfc3339());

    let output_path = infer_output_path(&args.exports_dir, args.output.as_deref());
    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).map_err(|e| FrameError::Io {
                path: parent.to_path_buf(),
                message: format!("Failed to create output directory: {e}"),
            })?;
        }
    }
    fs::write(&output_path, manifest.to_json_string()?).map_err(|e| FrameError::Io {
        path: output_path.clone(),
        message: format!("Failed to write manifest: {e}"),
    })?;

    printer.status("Wrote", &display_path(&output_path));
    printer.info(
        "Character",
        &format!(
            "{} | {} | {}",
            character_id,
            plural(result.animation_count(), "animation", "animations"),
            plural(result.total_frames(), "frame", "frames")
        ),
    );
    if result.has_warnings() {
        printer.warning(
            "Embedded",
            &plural(result.diagnostics.warning_count(), "warning", "warnings"),
        );
    }
    if result.has_errors() {
        printer.warning(
            "Embedded",
            &plural(result.diagnostics.error_count(), "error", "errors"),
        );
    } else {
        printer.success("Clean", "no validation errors embedded");
    }

    Ok(())
}

/// Infer the character id from the exports path: the parent directory of a
/// conventional `exports` directory, else the directory's own name.
fn infer_character_id(exports_dir: &Path) -> String {
    if exports_dir.file_name() == Some(OsStr::new("exports")) {
        if let Some(parent) = exports_dir.parent().and_then(Path::file_name) {
            return parent.to_string_lossy().into_owned();
        }
    }
    exports_dir
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| exports_dir.display().to_string())
}

/// Default manifest location: next to a conventional `exports` directory,
/// otherwise inside the scanned directory itself.
fn infer_output_path(exports_dir: &Path, explicit: Option<&Path>) -> PathBuf {
    if let Some(path) = explicit {
        return path.to_path_buf();
    }
    if exports_dir.file_name() == Some(OsStr::new("exports")) {
        if let Some(parent) = exports_dir.parent() {
            return parent.join("character_manifest.json");
        }
    }
    exports_dir.join("character_manifest.json")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    use crate::manifest::Manifest;
    use crate::png::PNG_SIGNATURE;

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let mut bytes = Vec::new();
        bytes.extend_from_slice(&PNG_SIGNATURE);
        bytes.extend_from_slice(&13u32.to_be_bytes());
        bytes.extend_from_slice(b"IHDR");
        bytes.extend_from_slice(&width.to_be_bytes());
        bytes.extend_from_slice(&height.to_be_bytes());
        bytes.extend_from_slice(&[8, 6, 0, 0, 0]);
        bytes
    }

    #[test]
    fn test_infer_character_id_from_exports_parent() {
        assert_eq!(
            infer_character_id(Path::new("assets/characters/brawler/exports")),
            "brawler"
        );
        assert_eq!(infer_character_id(Path::new("some/dir")), "dir");
    }

    #[test]
    fn test_infer_output_path() {
        assert_eq!(
            infer_output_path(Path::new("chars/brawler/exports"), None),
            PathBuf::from("chars/brawler/character_manifest.json")
        );
        assert_eq!(
            infer_output_path(Path::new("some/dir"), None),
            PathBuf::from("some/dir/character_manifest.json")
        );
        assert_eq!(
            infer_output_path(Path::new("chars/brawler/exports"), Some(Path::new("out.json"))),
            PathBuf::from("out.json")
        );
    }

    #[test]
    fn test_manifest_written_with_timestamp() {
        let dir = tempdir().unwrap();
        let exports = dir.path().join("brawler").join("exports");
        fs::create_dir_all(&exports).unwrap();
        fs::write(exports.join("idle_0.png"), png_bytes(24, 48)).unwrap();

        let args = ManifestArgs {
            exports_dir: exports.clone(),
            character_id: None,
            output: None,
            width: 24,
            height: 48,
            no_size_check: false,
            require_all: false,
            strict: false,
        };
        run(args, &Printer::new()).unwrap();

        let written = dir.path().join("brawler").join("character_manifest.json");
        let manifest: Manifest =
            serde_json::from_str(&fs::read_to_string(&written).unwrap()).unwrap();

        assert_eq!(manifest.character_id, "brawler");
        assert_eq!(manifest.summary.frame_count, 1);
        assert!(manifest.generated_at_utc.is_some());
        assert_eq!(
            manifest.summary.missing_required_animations.as_ref().map(Vec::len),
            Some(13)
        );
    }

    #[test]
    fn test_strict_refuses_to_write_on_errors() {
        let dir = tempdir().unwrap();
        let exports = dir.path().join("exports");
        fs::create_dir_all(&exports).unwrap();
        fs::write(exports.join("idle_0.png"), png_bytes(10, 10)).unwrap();

        let args = ManifestArgs {
            exports_dir: exports.clone(),
            character_id: Some("brawler".to_string()),
            output: Some(dir.path().join("manifest.json")),
            width: 24,
            height: 48,
            no_size_check: false,
            require_all: false,
            strict: true,
        };
        let result = run(args, &Printer::new());

        assert!(matches!(result, Err(FrameError::Validation { .. })));
        assert!(!dir.path().join("manifest.json").exists());
    }

    #[test]
    fn test_errors_embedded_without_strict() {
        let dir = tempdir().unwrap();
        let exports = dir.path().join("exports");
        fs::create_dir_all(&exports).unwrap();
        fs::write(exports.join("idle_1.png"), png_bytes(24, 48)).unwrap();

        let output = dir.path().join("manifest.json");
        let args = ManifestArgs {
            exports_dir: exports,
            character_id: Some("brawler".to_string()),
            output: Some(output.clone()),
            width: 24,
            height: 48,
            no_size_check: false,
            require_all: false,
            strict: false,
        };
        run(args, &Printer::new()).unwrap();

        let manifest: Manifest =
            serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
        assert!(!manifest.validation.errors.is_empty());
    }
}
