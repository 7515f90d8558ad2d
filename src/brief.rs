//! Character brief loading.
//!
//! Briefs are small YAML documents describing a character for the asset
//! pipeline (display name, hook, palette, prop lists). Loading tries two
//! strategies in a fixed order and never mixes them: proper YAML first,
//! then a forgiving line scanner for hand-written briefs that predate the
//! YAML convention. A missing file yields an empty brief.

use std::collections::BTreeMap;
use std::path::Path;

use serde_yaml::Value;

use crate::error::{FrameError, Result};

/// A parsed character brief: top-level keys to YAML values.
pub type Brief = BTreeMap<String, Value>;

/// Load a character brief from a file.
pub fn load_brief(path: &Path) -> Result<Brief> {
    if !path.exists() {
        return Ok(Brief::new());
    }

    let text = std::fs::read_to_string(path).map_err(|e| FrameError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to read brief: {e}"),
    })?;

    // Strategy 1: YAML. Accepted only when the document is a mapping;
    // anything else falls through to the line scanner.
    if let Ok(Value::Mapping(mapping)) = serde_yaml::from_str::<Value>(&text) {
        let mut brief = Brief::new();
        for (key, value) in mapping {
            if let Value::String(key) = key {
                brief.insert(key, value);
            }
        }
        return Ok(brief);
    }

    // Strategy 2: line scanner.
    Ok(scan_lines(&text))
}

/// Hand-rolled scanner for `key: value` lines and `key:` list blocks.
///
/// Unparseable lines are skipped rather than rejected; briefs are advisory
/// input and a partial read beats none.
fn scan_lines(text: &str) -> Brief {
    let mut brief = Brief::new();
    let mut current_list: Option<String> = None;

    for raw_line in text.lines() {
        let line = raw_line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if let Some(item) = line.strip_prefix("- ") {
            if let Some(key) = &current_list {
                if let Some(Value::Sequence(items)) = brief.get_mut(key) {
                    items.push(parse_inline_value(item.trim()));
                }
            }
            continue;
        }

        let Some((key, value)) = line.split_once(':') else {
            continue;
        };
        let key = key.trim();
        if key.is_empty() || !key.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'_') {
            continue;
        }

        let value = value.trim();
        if value.is_empty() {
            current_list = Some(key.to_string());
            brief
                .entry(key.to_string())
                .or_insert_with(|| Value::Sequence(Vec::new()));
        } else {
            current_list = None;
            brief.insert(key.to_string(), parse_inline_value(value));
        }
    }

    brief
}

/// Parse a scalar brief value: strip matched quotes, split inline lists,
/// pass everything else through as a string.
fn parse_inline_value(value: &str) -> Value {
    let value = value.trim();
    if value.len() >= 2 {
        for quote in ['"', '\''] {
            if value.starts_with(quote) && value.ends_with(quote) {
                return Value::String(value[1..value.len() - 1].to_string());
            }
        }
    }
    if let Some(inner) = value.strip_prefix('[').and_then(|v| v.strip_suffix(']')) {
        let items: Vec<Value> = inner
            .split(',')
            .map(|item| parse_inline_value(item.trim()))
            .filter(|item| item != &Value::String(String::new()))
            .collect();
        return Value::Sequence(items);
    }
    Value::String(value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_load_yaml_brief() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("brawler.yaml");
        fs::write(
            &path,
            "display_name: The Brawler\nhook: Retired bouncer\npalette:\n  - crimson\n  - steel\n",
        )
        .unwrap();

        let brief = load_brief(&path).unwrap();

        assert_eq!(
            brief["display_name"],
            Value::String("The Brawler".to_string())
        );
        assert!(matches!(brief["palette"], Value::Sequence(_)));
    }

    #[test]
    fn test_missing_brief_is_empty() {
        let dir = tempdir().unwrap();
        let brief = load_brief(&dir.path().join("ghost.yaml")).unwrap();
        assert!(brief.is_empty());
    }

    #[test]
    fn test_line_scanner_fallback() {
        // Tab-indented and loosely formatted: rejected by YAML, handled by
        // the scanner.
        let dir = tempdir().unwrap();
        let path = dir.path().join("loose.yaml");
        fs::write(
            &path,
            "# character notes\ndisplay_name: The Brawler\nmust_have_props:\n\t- \"broken bottle\"\n\t- bar stool\nnot a key line\n",
        )
        .unwrap();

        let brief = load_brief(&path).unwrap();

        assert_eq!(
            brief["display_name"],
            Value::String("The Brawler".to_string())
        );
        let Value::Sequence(props) = &brief["must_have_props"] else {
            panic!("expected a sequence");
        };
        assert_eq!(
            props,
            &[
                Value::String("broken bottle".to_string()),
                Value::String("bar stool".to_string()),
            ]
        );
    }

    #[test]
    fn test_scan_lines_inline_list() {
        let brief = scan_lines("palette: [crimson, steel]\n");
        let Value::Sequence(items) = &brief["palette"] else {
            panic!("expected a sequence");
        };
        assert_eq!(items.len(), 2);
        assert_eq!(items[0], Value::String("crimson".to_string()));
    }

    #[test]
    fn test_scan_lines_quoted_value() {
        let brief = scan_lines("hook: 'keeps: receipts'\n");
        assert_eq!(brief["hook"], Value::String("keeps: receipts".to_string()));
    }

    #[test]
    fn test_scan_lines_list_without_key_is_dropped() {
        let brief = scan_lines("- orphan item\nname: ok\n");
        assert_eq!(brief.len(), 1);
        assert_eq!(brief["name"], Value::String("ok".to_string()));
    }
}
