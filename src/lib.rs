pub mod app;
pub mod config;
pub mod copy;
pub mod errors;
pub mod logger;
pub mod manifest;
pub mod merge;
pub mod reporting;
pub mod trie;
pub mod utils;

pub use app::run;
pub use config::SpindleConfig;
pub use copy::{ClipboardSink, SystemClipboard};
pub use errors::SpindleError;
pub use manifest::load_manifest;
pub use merge::{merge_files, MergeReport};
