use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a whole run.
///
/// Anything that only affects one section or entry is reported as an
/// `Issue` instead and never surfaces here.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Keymap file does not exist.
    #[error("Keymap file not found: {0}")]
    NotFound(PathBuf),
    /// Keymap file is not valid YAML.
    #[error("Could not parse {path}: {message}")]
    Parse { path: PathBuf, message: String },
    /// YAML root is a list or scalar.
    #[error("Could not parse {0}: YAML root must be a mapping")]
    RootNotMapping(PathBuf),
    /// Path is not valid UTF-8 and cannot be expanded.
    #[error("Invalid path encoding: {0}")]
    InvalidPath(PathBuf),
    /// Atomic write of the generated script failed.
    #[error("Atomic write failed: {0}")]
    WriteFailed(String),
    /// Generic I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
