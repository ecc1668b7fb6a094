use crate::SpindleError;
use std::fs;
use std::path::Path;
use tracing::{debug, error, trace};

/// Returns the patterns of a manifest in file order.
///
/// Lines are trimmed; blank lines and lines starting with `#` are dropped.
pub fn parse_manifest(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| {
            let keep = !line.is_empty() && !line.starts_with('#');
            if !keep {
                trace!("Skipping manifest line: {:?}", line);
            }
            keep
        })
        .map(str::to_owned)
        .collect()
}

pub fn read_manifest(path: &Path) -> Result<Vec<String>, SpindleError> {
    debug!("Loading manifest: {}", path.display());
    let text = fs::read_to_string(path)
        .map_err(|e| SpindleError::ManifestUnreadable(path.to_path_buf(), e.to_string()))?;
    let patterns = parse_manifest(&text);
    debug!("Loaded {} patterns from {}", patterns.len(), path.display());
    Ok(patterns)
}

/// Reads the manifest at `path`.
///
/// A missing or undecodable manifest is logged and yields no patterns; the
/// caller decides whether that ends the run.
pub fn load_manifest(path: &Path) -> Vec<String> {
    read_manifest(path).unwrap_or_else(|e| {
        error!("Error loading file list: {}", e);
        Vec::new()
    })
}
