use crate::config::{SEPARATOR_CHAR, SEPARATOR_WIDTH};
use crate::SpindleError;
use glob::MatchOptions;
use std::fs;
use std::path::{is_separator, Path, PathBuf};
use tracing::{trace, warn};

/// What a matched path turned out to be once symlinks are followed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
    /// Broken symlinks, sockets, devices and anything else we cannot stat.
    Other,
}

const GLOB_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: true,
};

/// Matches of one pattern, plus how many entries the walker failed to read.
#[derive(Debug, Default)]
pub struct PatternMatches {
    pub paths: Vec<PathBuf>,
    pub unreadable: usize,
}

#[cfg(unix)]
fn user_home(name: &str) -> Option<PathBuf> {
    match nix::unistd::User::from_name(name) {
        Ok(user) => user.map(|user| user.dir),
        Err(e) => {
            warn!("Failed to look up user {}: {}", name, e);
            None
        }
    }
}

#[cfg(not(unix))]
fn user_home(_name: &str) -> Option<PathBuf> {
    None
}

/// Expands a leading `~` to the home directory and `~name` to the home
/// directory of user `name`.
///
/// A `~name` prefix naming no known user is left as written.
pub fn expand_home(pattern: &str) -> String {
    let Some(rest) = pattern.strip_prefix('~') else {
        return pattern.to_owned();
    };
    let (user, tail) = match rest.find(is_separator) {
        Some(idx) => rest.split_at(idx),
        None => (rest, ""),
    };
    if user.is_empty() {
        return shellexpand::tilde(pattern).into_owned();
    }
    match user_home(user) {
        Some(home) => format!("{}{}", home.display(), tail),
        None => {
            trace!("Leaving {} unexpanded", pattern);
            pattern.to_owned()
        }
    }
}

/// Expands `pattern` (including `**`) against the filesystem.
///
/// Entries within a directory come back sorted, so the result is stable
/// across runs. Entries the walker cannot read are logged, skipped and
/// counted in [`PatternMatches::unreadable`].
pub fn expand_pattern(pattern: &str) -> Result<PatternMatches, SpindleError> {
    let expanded = expand_home(pattern);
    let paths = glob::glob_with(&expanded, GLOB_OPTIONS)
        .map_err(|e| SpindleError::InvalidPattern(expanded.clone(), e.to_string()))?;

    let mut matches = PatternMatches::default();
    for entry in paths {
        match entry {
            Ok(path) => matches.paths.push(path),
            Err(e) => {
                warn!("Error processing pattern {}: {}", expanded, e);
                matches.unreadable += 1;
            }
        }
    }
    trace!("Pattern {} matched {} entries", expanded, matches.paths.len());
    Ok(matches)
}

pub fn classify(path: &Path) -> EntryKind {
    match fs::metadata(path) {
        Ok(meta) if meta.is_file() => EntryKind::File,
        Ok(meta) if meta.is_dir() => EntryKind::Directory,
        _ => EntryKind::Other,
    }
}

pub fn read_file_content(path: &Path) -> Result<String, SpindleError> {
    fs::read_to_string(path).map_err(|err| SpindleError::IoError(err.to_string()))
}

pub fn separator_line() -> String {
    SEPARATOR_CHAR.to_string().repeat(SEPARATOR_WIDTH)
}

/// Header block written before each merged file.
pub fn format_header(path: &Path) -> String {
    let separator = separator_line();
    format!("{0}\nFile: {1}\n{0}\n\n", separator, path.display())
}
