//! framecheck - Character sprite export validation
//!
//! A library for validating exported character animation frames against
//! naming and canvas conventions, and deriving a JSON manifest describing
//! the scanned content.

pub mod brief;
pub mod cli;
pub mod error;
pub mod manifest;
pub mod output;
pub mod png;
pub mod scan;

pub use brief::{load_brief, Brief};
pub use error::{FrameError, Result};
pub use manifest::{
    build_manifest, AnimationEntry, CanvasSize, FrameEntry, Manifest, Summary, Validation,
    SCHEMA_VERSION,
};
pub use png::{read_dimensions, FormatError, PNG_SIGNATURE};
pub use scan::{
    parse_frame_name, scan_exports, Diagnostic, Diagnostics, FrameRecord, ScanOptions, ScanResult,
    Severity, DEFAULT_EXPECTED_SIZE, DEFAULT_REQUIRED_ANIMATIONS,
};
