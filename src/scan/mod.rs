//! Export directory scanning and validation.
//!
//! Walks one character's exports directory, reads PNG headers for frame
//! dimensions, groups frames into animations by filename convention, and
//! validates the frame set: canvas size, index contiguity, duplicates, and
//! required-animation coverage. Per-file problems never abort the scan;
//! they accumulate as diagnostics so a single pass reports everything.
//!
//! The directory is assumed quiescent for the duration of a scan.

mod diagnostics;
mod frame;

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::png;

pub use diagnostics::{Diagnostic, Diagnostics, Severity};
pub use frame::{parse_frame_name, FrameRecord, FRAME_EXTENSION, SIDECAR_SUFFIX};

/// Animation names the runtime expects every character to provide.
pub const DEFAULT_REQUIRED_ANIMATIONS: [&str; 14] = [
    "idle",
    "walk",
    "jump",
    "light",
    "heavy",
    "special",
    "throw",
    "block",
    "hit_light",
    "hit_heavy",
    "hit",
    "fall",
    "getup",
    "ko",
];

/// The canvas size characters are exported at by convention.
pub const DEFAULT_EXPECTED_SIZE: (u32, u32) = (24, 48);

/// Options controlling a single export scan.
#[derive(Debug, Clone)]
pub struct ScanOptions {
    /// Animation names treated as the runtime-required baseline set.
    pub required_animations: Vec<String>,

    /// Expected frame canvas; `None` disables the size check.
    pub expected_size: Option<(u32, u32)>,

    /// Turn absent required animations into errors instead of only
    /// reporting them in the missing list.
    pub require_all: bool,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            required_animations: DEFAULT_REQUIRED_ANIMATIONS
                .iter()
                .map(|name| name.to_string())
                .collect(),
            expected_size: Some(DEFAULT_EXPECTED_SIZE),
            require_all: false,
        }
    }
}

/// Result of scanning an exports directory.
///
/// Frames are grouped by animation name (sorted by name via the map) and
/// each bucket is sorted by `(index, filename)` once the scan finalizes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanResult {
    /// The scanned directory.
    pub exports_dir: PathBuf,
    /// The required-animation list the scan was configured with.
    pub required_animations: Vec<String>,
    /// The expected canvas, if size checking was enabled.
    pub expected_size: Option<(u32, u32)>,
    /// Accepted frames, keyed by animation name.
    pub frames_by_animation: BTreeMap<String, Vec<FrameRecord>>,
    /// Errors and warnings accumulated over the scan.
    pub diagnostics: Diagnostics,
}

impl ScanResult {
    fn new(exports_dir: &Path, options: &ScanOptions) -> Self {
        Self {
            exports_dir: exports_dir.to_path_buf(),
            required_animations: options.required_animations.clone(),
            expected_size: options.expected_size,
            frames_by_animation: BTreeMap::new(),
            diagnostics: Diagnostics::new(),
        }
    }

    /// Total number of accepted frames across all animations.
    pub fn total_frames(&self) -> usize {
        self.frames_by_animation.values().map(Vec::len).sum()
    }

    /// Number of distinct animations found.
    pub fn animation_count(&self) -> usize {
        self.frames_by_animation.len()
    }

    /// Required animations absent from the scan, in required-list order.
    pub fn missing_required(&self) -> Vec<String> {
        self.required_animations
            .iter()
            .filter(|name| !self.frames_by_animation.contains_key(name.as_str()))
            .cloned()
            .collect()
    }

    /// Error messages, in the order they were recorded.
    pub fn errors(&self) -> impl Iterator<Item = &str> {
        self.diagnostics.errors()
    }

    /// Warning messages, in the order they were recorded.
    pub fn warnings(&self) -> impl Iterator<Item = &str> {
        self.diagnostics.warnings()
    }

    /// Check if the scan recorded any errors.
    pub fn has_errors(&self) -> bool {
        self.diagnostics.has_errors()
    }

    /// Check if the scan recorded any warnings.
    pub fn has_warnings(&self) -> bool {
        self.diagnostics.has_warnings()
    }
}

/// Scan a character exports directory.
///
/// Walks the directory's immediate entries in name-sorted order, classifies
/// each by the `<animation>_<index>.png` convention, reads PNG headers for
/// dimensions, and runs the structural checks. The only early return is a
/// missing or non-directory root; every other problem is recorded and the
/// scan continues.
pub fn scan_exports(exports_dir: &Path, options: &ScanOptions) -> ScanResult {
    let mut result = ScanResult::new(exports_dir, options);

    if !exports_dir.exists() {
        result.diagnostics.error(format!(
            "Exports directory does not exist: {}",
            exports_dir.display()
        ));
        return result;
    }
    if !exports_dir.is_dir() {
        result.diagnostics.error(format!(
            "Exports path is not a directory: {}",
            exports_dir.display()
        ));
        return result;
    }

    for entry in WalkDir::new(exports_dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let name = entry.file_name().to_string_lossy().to_string();

        if name.starts_with('.') {
            continue;
        }
        if entry.file_type().is_dir() {
            result
                .diagnostics
                .warning(format!("Ignoring subdirectory: {name}"));
            continue;
        }
        // Engine importer sidecars are expected noise next to every frame.
        if name.ends_with(SIDECAR_SUFFIX) {
            continue;
        }
        let is_png = Path::new(&name)
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case(FRAME_EXTENSION))
            .unwrap_or(false);
        if !is_png {
            result
                .diagnostics
                .warning(format!("Ignoring non-PNG file: {name}"));
            continue;
        }

        let Some((animation, index)) = parse_frame_name(&name) else {
            result.diagnostics.warning(format!(
                "Filename does not match '<animation>_<index>.png': {name}"
            ));
            continue;
        };
        let animation = animation.to_string();

        let (width, height) = match png::read_dimensions(entry.path()) {
            Ok(dimensions) => dimensions,
            Err(err) => {
                result
                    .diagnostics
                    .error(format!("Failed to read PNG header for {name}: {err}"));
                continue;
            }
        };

        result
            .frames_by_animation
            .entry(animation.clone())
            .or_default()
            .push(FrameRecord {
                animation,
                index,
                filename: name.clone(),
                path: entry.into_path(),
                width,
                height,
            });

        // A size mismatch is reported, not fatal: the frame stays counted.
        if let Some((expected_w, expected_h)) = result.expected_size {
            if (width, height) != (expected_w, expected_h) {
                result.diagnostics.error(format!(
                    "Wrong canvas size for {name}: {width}x{height} (expected {expected_w}x{expected_h})"
                ));
            }
        }
    }

    finalize(&mut result);

    if options.require_all {
        for animation in result.missing_required() {
            result
                .diagnostics
                .error(format!("Missing required animation: {animation}"));
        }
    }

    result
}

/// Sort each bucket and run the per-animation and global structural checks.
fn finalize(result: &mut ScanResult) {
    let ScanResult {
        frames_by_animation,
        required_animations,
        diagnostics,
        ..
    } = result;

    for (animation, frames) in frames_by_animation.iter_mut() {
        frames.sort_by(|a, b| a.index.cmp(&b.index).then_with(|| a.filename.cmp(&b.filename)));
        let frames = &*frames;

        let mut by_index: BTreeMap<u32, Vec<&str>> = BTreeMap::new();
        for frame in frames {
            by_index
                .entry(frame.index)
                .or_default()
                .push(&frame.filename);
        }
        for (index, names) in &by_index {
            if names.len() > 1 {
                diagnostics.error(format!(
                    "Duplicate frame index in animation '{animation}' for index {index}: {}",
                    names.join(", ")
                ));
            }
        }

        let Some(first) = frames.first() else {
            continue;
        };
        if first.index != 0 {
            diagnostics.error(format!(
                "Animation '{animation}' must start at frame 0 (found {})",
                first.index
            ));
        }
        let max_index = frames.iter().map(|f| f.index).fold(0, u32::max);
        let missing: Vec<String> = (0..=max_index)
            .filter(|index| !by_index.contains_key(index))
            .map(|index| index.to_string())
            .collect();
        if !missing.is_empty() {
            diagnostics.error(format!(
                "Animation '{animation}' has missing frame indices: {}",
                missing.join(", ")
            ));
        }
    }

    if frames_by_animation.is_empty() {
        diagnostics.error("No valid exported PNG frames found");
    } else {
        // Present-but-unknown animations are flagged for review, not
        // rejected. When nothing at all was found they contribute only to
        // the empty-result error above.
        for animation in frames_by_animation.keys() {
            if !required_animations.iter().any(|name| name == animation) {
                diagnostics.warning(format!(
                    "Animation '{animation}' is not in the required runtime list (kept, but verify usage)"
                ));
            }
        }
    }
}
