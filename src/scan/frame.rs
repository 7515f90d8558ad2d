//! Frame records and the export filename convention.

use std::path::PathBuf;

/// The raster extension recognized for exported frames.
pub const FRAME_EXTENSION: &str = "png";

/// Suffix of engine importer sidecar files, skipped silently during a scan.
pub const SIDECAR_SUFFIX: &str = ".import";

/// One accepted exported frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameRecord {
    /// Animation name parsed from the filename.
    pub animation: String,
    /// Frame index parsed from the filename.
    pub index: u32,
    /// The bare filename, e.g. `idle_0.png`.
    pub filename: String,
    /// Full path to the file.
    pub path: PathBuf,
    /// Declared canvas width from the PNG header.
    pub width: u32,
    /// Declared canvas height from the PNG header.
    pub height: u32,
}

/// Parse `<animation>_<index>.png` into its animation name and frame index.
///
/// The animation part is one or more lowercase alphanumeric/underscore
/// characters and the index is one or more decimal digits; the split is at
/// the last underscore, so `hit_light_0.png` parses as `("hit_light", 0)`.
/// The extension must be the literal lowercase `.png`.
pub fn parse_frame_name(filename: &str) -> Option<(&str, u32)> {
    let stem = filename.strip_suffix(".png")?;
    let (animation, index) = stem.rsplit_once('_')?;
    if animation.is_empty() || index.is_empty() {
        return None;
    }
    if !animation
        .bytes()
        .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'_')
    {
        return None;
    }
    if !index.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let index = index.parse().ok()?;
    Some((animation, index))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_name() {
        assert_eq!(parse_frame_name("idle_0.png"), Some(("idle", 0)));
        assert_eq!(parse_frame_name("walk_12.png"), Some(("walk", 12)));
    }

    #[test]
    fn test_parse_underscored_animation() {
        assert_eq!(parse_frame_name("hit_light_3.png"), Some(("hit_light", 3)));
        assert_eq!(parse_frame_name("a__0.png"), Some(("a_", 0)));
    }

    #[test]
    fn test_parse_digits_in_animation() {
        assert_eq!(parse_frame_name("combo2_1.png"), Some(("combo2", 1)));
    }

    #[test]
    fn test_reject_missing_index() {
        assert_eq!(parse_frame_name("idle.png"), None);
        assert_eq!(parse_frame_name("idle_.png"), None);
    }

    #[test]
    fn test_reject_missing_animation() {
        assert_eq!(parse_frame_name("_0.png"), None);
    }

    #[test]
    fn test_reject_uppercase_and_bad_chars() {
        assert_eq!(parse_frame_name("Idle_0.png"), None);
        assert_eq!(parse_frame_name("idle-run_0.png"), None);
    }

    #[test]
    fn test_reject_non_numeric_index() {
        // The last underscore split leaves "0a" as the index, which is not
        // all digits; the greedy animation part cannot absorb 'a' either.
        assert_eq!(parse_frame_name("idle_0a.png"), None);
    }

    #[test]
    fn test_reject_wrong_extension_case() {
        assert_eq!(parse_frame_name("idle_0.PNG"), None);
        assert_eq!(parse_frame_name("idle_0.Png"), None);
    }

    #[test]
    fn test_reject_index_overflow() {
        assert_eq!(parse_frame_name("idle_99999999999999999999.png"), None);
    }
}
