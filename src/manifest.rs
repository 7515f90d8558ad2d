//! Manifest document derived from a completed scan.
//!
//! The manifest is a pure projection of a `ScanResult` plus a caller-supplied
//! character id: building one never fails and never touches the clock. A scan
//! with errors still yields a manifest; the validation block is how those
//! errors travel to downstream tooling.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::error::{FrameError, Result};
use crate::scan::ScanResult;

/// Current manifest schema version.
pub const SCHEMA_VERSION: u32 = 1;

/// A pixel width/height pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanvasSize {
    pub width: u32,
    pub height: u32,
}

/// One frame within an animation entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameEntry {
    pub file: String,
    pub index: u32,
    pub width: u32,
    pub height: u32,
}

/// Per-animation section of the manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnimationEntry {
    pub frame_count: usize,
    pub indices: Vec<u32>,
    pub frames: Vec<FrameEntry>,
}

/// Aggregate counts and detected sizes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub animation_count: usize,
    pub frame_count: usize,
    pub detected_canvas_sizes: Vec<CanvasSize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub missing_required_animations: Option<Vec<String>>,
}

/// Order-preserving copy of the scan's errors and warnings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Validation {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

/// The character export manifest document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    pub schema_version: u32,
    pub character_id: String,
    pub exports_dir: String,
    pub expected_canvas: Option<CanvasSize>,
    pub required_animations: Vec<String>,
    pub animations: BTreeMap<String, AnimationEntry>,
    pub summary: Summary,
    pub validation: Validation,
    /// Attached by the caller at write time, never by the builder.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generated_at_utc: Option<String>,
}

impl Manifest {
    /// Serialize to pretty-printed JSON with a trailing newline.
    pub fn to_json_string(&self) -> Result<String> {
        let json = serde_json::to_string_pretty(self).map_err(|e| FrameError::Parse {
            message: format!("Failed to serialize manifest: {e}"),
            help: None,
        })?;
        Ok(json + "\n")
    }
}

/// Build a manifest from a completed scan.
///
/// Animations are emitted in name order; each animation's frames keep the
/// `(index, filename)` order established by the scan. Detected canvas sizes
/// are sorted by width then height. The validation block mirrors the scan's
/// diagnostics verbatim.
pub fn build_manifest(
    result: &ScanResult,
    character_id: &str,
    include_missing_required: bool,
) -> Manifest {
    let mut sizes: BTreeSet<(u32, u32)> = BTreeSet::new();
    for frames in result.frames_by_animation.values() {
        for frame in frames {
            sizes.insert((frame.width, frame.height));
        }
    }

    let animations: BTreeMap<String, AnimationEntry> = result
        .frames_by_animation
        .iter()
        .map(|(name, frames)| {
            let entry = AnimationEntry {
                frame_count: frames.len(),
                indices: frames.iter().map(|f| f.index).collect(),
                frames: frames
                    .iter()
                    .map(|f| FrameEntry {
                        file: f.filename.clone(),
                        index: f.index,
                        width: f.width,
                        height: f.height,
                    })
                    .collect(),
            };
            (name.clone(), entry)
        })
        .collect();

    Manifest {
        schema_version: SCHEMA_VERSION,
        character_id: character_id.to_string(),
        exports_dir: result.exports_dir.display().to_string(),
        expected_canvas: result
            .expected_size
            .map(|(width, height)| CanvasSize { width, height }),
        required_animations: result.required_animations.clone(),
        animations,
        summary: Summary {
            animation_count: result.animation_count(),
            frame_count: result.total_frames(),
            detected_canvas_sizes: sizes
                .into_iter()
                .map(|(width, height)| CanvasSize { width, height })
                .collect(),
            missing_required_animations: include_missing_required
                .then(|| result.missing_required()),
        },
        validation: Validation {
            errors: result.errors().map(str::to_string).collect(),
            warnings: result.warnings().map(str::to_string).collect(),
        },
        generated_at_utc: None,
    }
}
