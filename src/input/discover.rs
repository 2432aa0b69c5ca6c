//! Turn command-line arguments into sources
//!
//! Folders are scanned (not recursively) for `*.json`, files are taken as
//! given and `-` reads stdin into a single in-memory source.

use std::io::Read;
use std::path::{Path, PathBuf};

use glob::{MatchOptions, Pattern};

use super::Source;
use crate::error::StatsError;

/// Name given to the in-memory source read from stdin
pub const STDIN_NAME: &str = "<stdin>";

/// Sources found for a set of arguments, plus the arguments that could not be used
#[derive(Debug, Default)]
pub struct Discovery {
    pub sources: Vec<Source>,
    pub errors: Vec<StatsError>,
}

/// Resolve every argument, in order. Never fails as a whole; unusable
/// arguments end up in `errors`.
pub fn discover(args: &[PathBuf]) -> Discovery {
    let mut discovery = Discovery::default();

    for arg in args {
        if arg.as_os_str() == "-" {
            match read_memory(STDIN_NAME, std::io::stdin().lock()) {
                Ok(source) => discovery.sources.push(source),
                Err(e) => discovery.errors.push(e),
            }
        } else if arg.is_dir() {
            match scan_directory(arg) {
                Ok(paths) => {
                    log::debug!("{} JSON files in {}", paths.len(), arg.display());
                    discovery
                        .sources
                        .extend(paths.into_iter().map(Source::Path));
                }
                Err(e) => discovery.errors.push(e),
            }
        } else if arg.is_file() {
            discovery.sources.push(Source::Path(arg.clone()));
        } else {
            discovery.errors.push(StatsError::InvalidPath {
                path: arg.display().to_string(),
            });
        }
    }

    discovery
}

/// All `*.json` files directly inside `dir`, sorted by path
pub fn scan_directory(dir: &Path) -> Result<Vec<PathBuf>, StatsError> {
    let dir_str = dir.to_str().ok_or_else(|| StatsError::InvalidPath {
        path: dir.display().to_string(),
    })?;
    let pattern = format!("{}/*.json", Pattern::escape(dir_str.trim_end_matches('/')));

    // Dotfiles such as `._match.json` are not match files
    let options = MatchOptions {
        require_literal_leading_dot: true,
        ..MatchOptions::new()
    };
    let entries = glob::glob_with(&pattern, options).map_err(|e| StatsError::Io {
        name: dir.display().to_string(),
        message: e.to_string(),
    })?;

    let mut paths = Vec::new();
    for entry in entries {
        match entry {
            Ok(path) if path.is_file() => paths.push(path),
            Ok(_) => {}
            Err(e) => log::warn!("Skipping unreadable entry in {}: {}", dir.display(), e),
        }
    }
    paths.sort();
    Ok(paths)
}

/// Read a whole stream into an in-memory source
pub fn read_memory(name: &str, mut reader: impl Read) -> Result<Source, StatsError> {
    let mut bytes = Vec::new();
    reader
        .read_to_end(&mut bytes)
        .map_err(|e| StatsError::Io {
            name: name.to_string(),
            message: e.to_string(),
        })?;
    Ok(Source::memory(name, bytes))
}
