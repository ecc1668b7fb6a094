use std::path::PathBuf;

/// Manifest read when no path is given on the command line.
pub const DEFAULT_MANIFEST_FILE: &str = "file_list.txt";
/// Output written when `--output` is not given.
pub const DEFAULT_OUTPUT_FILE: &str = "merged_output.txt";
pub const DEFAULT_TOKENIZER_MODEL: &str = "gpt-4o";

pub const SEPARATOR_CHAR: char = '=';
pub const SEPARATOR_WIDTH: usize = 80;

#[derive(Debug, Clone)]
pub struct SpindleConfig {
    pub manifest: PathBuf,
    pub output: PathBuf,
    /// Copy the merged document to the system clipboard after writing it.
    pub clipboard: bool,
    /// Log per-file token counts once the merge is done.
    pub stats: bool,
    pub model: String,
}

impl SpindleConfig {
    pub fn new(manifest: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        SpindleConfig {
            manifest: manifest.into(),
            output: output.into(),
            clipboard: true,
            stats: false,
            model: DEFAULT_TOKENIZER_MODEL.to_owned(),
        }
    }
}

impl Default for SpindleConfig {
    fn default() -> Self {
        SpindleConfig::new(DEFAULT_MANIFEST_FILE, DEFAULT_OUTPUT_FILE)
    }
}
