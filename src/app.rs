use crate::config::SpindleConfig;
use crate::copy::{copy_to_clipboard, ClipboardSink};
use crate::manifest::load_manifest;
use crate::merge::{merge_files, MergeReport};
use crate::reporting::print_stats;
use crate::SpindleError;
use tracing::{debug, warn};

/// Runs one manifest → merge → clipboard pass.
///
/// The clipboard is only touched once the output file has been written in
/// full. Passing `None` skips the copy.
pub fn run(
    config: &SpindleConfig,
    clipboard: Option<&mut dyn ClipboardSink>,
) -> Result<MergeReport, SpindleError> {
    let patterns = load_manifest(&config.manifest);
    if patterns.is_empty() {
        return Err(SpindleError::NoPatterns(config.manifest.clone()));
    }
    debug!("Merging {} patterns", patterns.len());

    let report = merge_files(&patterns, &config.output)?;

    if config.stats {
        if let Err(e) = print_stats(&report, &config.model) {
            warn!("Skipping token statistics: {}", e);
        }
    }

    if config.clipboard {
        if let Some(sink) = clipboard {
            copy_to_clipboard(sink, &report.content);
        }
    }

    Ok(report)
}
