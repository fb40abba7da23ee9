//! I/O helpers for point files and JSON.
//!
//! - `load_points_json`: read `[[x, y], ...]` from disk into a [`PointSet`].
//! - `write_json_file`: pretty-print a serializable value to disk.
use crate::types::PointSet;
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Load a JSON array of `[x, y]` pairs.
pub fn load_points_json(path: &Path) -> Result<PointSet, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read points {}: {e}", path.display()))?;
    parse_points_json(&data).map_err(|e| format!("Failed to parse points {}: {e}", path.display()))
}

pub fn parse_points_json(data: &str) -> Result<PointSet, String> {
    let pairs: Vec<[f64; 2]> = serde_json::from_str(data).map_err(|e| e.to_string())?;
    Ok(PointSet::from_pairs(pairs.into_iter().map(|[x, y]| (x, y))))
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize JSON for {}: {e}", path.display()))?;
    fs::write(path, json).map_err(|e| format!("Failed to write JSON {}: {e}", path.display()))
}

fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {e}", parent.display()))?;
        }
    }
    Ok(())
}
