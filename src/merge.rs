use crate::utils::{classify, expand_pattern, format_header, read_file_content, EntryKind};
use crate::SpindleError;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::ops::Range;
use std::path::{Path, PathBuf};
use tracing::{debug, info, trace, warn};

/// One header+content block of the merged document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergedFile {
    pub path: PathBuf,
    /// Byte range of the block inside [`MergeReport::content`].
    pub span: Range<usize>,
}

#[derive(Debug)]
pub struct MergeReport {
    pub output: PathBuf,
    /// The complete merged document, byte-identical to the output file.
    pub content: String,
    pub merged_files: Vec<MergedFile>,
    pub warnings: usize,
}

impl MergeReport {
    pub fn block(&self, file: &MergedFile) -> &str {
        &self.content[file.span.clone()]
    }
}

/// Streams merged blocks to a writer while keeping a copy of everything written.
pub struct Merger<W: Write> {
    writer: W,
    output: PathBuf,
    /// Canonical output path, so a pattern that matches the output is not read back.
    output_canonical: Option<PathBuf>,
    content: String,
    merged_files: Vec<MergedFile>,
    warnings: usize,
}

impl<W: Write> Merger<W> {
    pub fn new(writer: W, output: impl Into<PathBuf>) -> Self {
        let output = output.into();
        let output_canonical = fs::canonicalize(&output).ok();
        Merger {
            writer,
            output,
            output_canonical,
            content: String::new(),
            merged_files: Vec::new(),
            warnings: 0,
        }
    }

    fn warn_count(&mut self) {
        self.warnings += 1;
    }

    /// Merges every regular file matched by `pattern`.
    ///
    /// Only a failing write to the output is returned as an error; everything
    /// else is logged and skipped.
    pub fn merge_pattern(&mut self, pattern: &str) -> Result<(), SpindleError> {
        debug!("Expanding pattern: {}", pattern);
        let matches = match expand_pattern(pattern) {
            Ok(matches) => matches,
            Err(e) => {
                warn!("{}", e);
                self.warn_count();
                return Ok(());
            }
        };
        self.warnings += matches.unreadable;

        if matches.paths.is_empty() {
            warn!("No files matched: {}", pattern);
            self.warn_count();
            return Ok(());
        }

        for path in matches.paths {
            match classify(&path) {
                EntryKind::File => self.merge_file(&path)?,
                EntryKind::Directory => trace!("Skipping directory: {}", path.display()),
                EntryKind::Other => {
                    warn!("Not a valid file: {}", path.display());
                    self.warn_count();
                }
            }
        }
        Ok(())
    }

    fn is_output(&self, path: &Path) -> bool {
        match (&self.output_canonical, fs::canonicalize(path)) {
            (Some(output), Ok(candidate)) => *output == candidate,
            _ => false,
        }
    }

    fn merge_file(&mut self, path: &Path) -> Result<(), SpindleError> {
        if self.is_output(path) {
            warn!("Skipping output file matched by a pattern: {}", path.display());
            self.warn_count();
            return Ok(());
        }

        // The header only goes out once the content is in hand.
        let content = match read_file_content(path) {
            Ok(content) => content,
            Err(e) => {
                warn!("Error reading {}: {}", path.display(), e);
                self.warn_count();
                return Ok(());
            }
        };

        let mut block = format_header(path);
        block.push_str(&content);
        block.push('\n');

        self.writer
            .write_all(block.as_bytes())
            .map_err(|e| SpindleError::OutputWriteError(self.output.clone(), e.to_string()))?;

        let start = self.content.len();
        self.content.push_str(&block);
        self.merged_files.push(MergedFile {
            path: path.to_path_buf(),
            span: start..self.content.len(),
        });
        info!("Merged: {}", path.display());
        Ok(())
    }

    /// Flushes the writer and hands back what was merged.
    pub fn finish(mut self) -> Result<MergeReport, SpindleError> {
        self.writer
            .flush()
            .map_err(|e| SpindleError::OutputWriteError(self.output.clone(), e.to_string()))?;
        Ok(MergeReport {
            output: self.output,
            content: self.content,
            merged_files: self.merged_files,
            warnings: self.warnings,
        })
    }
}

/// Merges the files matched by `patterns`, in order, into `output_path`.
///
/// The output file is created or truncated up front; failing to open or write
/// it aborts the whole merge.
pub fn merge_files(patterns: &[String], output_path: &Path) -> Result<MergeReport, SpindleError> {
    let file = File::create(output_path)
        .map_err(|e| SpindleError::OutputWriteError(output_path.to_path_buf(), e.to_string()))?;
    let mut merger = Merger::new(BufWriter::new(file), output_path);

    for pattern in patterns {
        merger.merge_pattern(pattern)?;
    }

    let report = merger.finish()?;
    info!(
        "All files have been merged into {} ({} files, {} warnings)",
        output_path.display(),
        report.merged_files.len(),
        report.warnings
    );
    Ok(report)
}
