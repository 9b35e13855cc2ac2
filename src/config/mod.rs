// Copyright 2025 Eric Jingryd (tidynest@proton.me)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Keymap file loading and processing.
//!
//! A keymap file is a YAML mapping of section name → list of binding
//! entries. Keys starting with `_` hold metadata (`_tool_name`, ...) and
//! are never treated as sections:
//!
//! ```yaml
//! _tool_name: zsh
//!
//! emacs:
//!   - shortcut: C-a
//!     description: Beginning of line
//!     action: beginning-of-line
//!   - shortcut: "^[[A"
//!     action: up-line-or-history
//!     raw: true
//! ```
//!
//! - **Loading** (this module): file checks, YAML parsing, root shape
//! - **Generation** (`generator.rs`): `bindkey` lines for the valid entries
//! - **Validation** (`validator.rs`): every issue in the file, errors and warnings
//! - **Output** (`output.rs`): atomic writes of the generated script
//!
//! # Example
//!
//! ```no_run
//! use zsh_keymap::config::{generate, validate, KeymapConfig};
//! use std::path::Path;
//!
//! let config = KeymapConfig::load(Path::new("keymap_zsh.yaml"))?;
//!
//! let report = validate(&config);
//! for issue in &report.issues {
//!     eprintln!("{}", issue);
//! }
//!
//! let script = generate(&config, &[]);
//! print!("{}", script.to_script());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use serde_yaml::{Mapping, Value};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

use crate::core::types::BindingEntry;

pub mod error;
pub mod generator;
pub mod output;
pub mod validator;

pub use error::ConfigError;
pub use generator::{generate, GeneratedKeymap};
pub use validator::{validate, Issue, IssueLevel, Location, ValidationReport};

/// Top-level keys with this prefix are metadata, not sections
pub const METADATA_PREFIX: &str = "_";

/// Returns true for metadata keys such as `_tool_name`
pub fn is_metadata_key(key: &str) -> bool {
    key.starts_with(METADATA_PREFIX)
}

/// Expands a leading `~` in a user-supplied path.
///
/// # Errors
///
/// Returns `ConfigError::InvalidPath` if the path isn't valid UTF-8.
pub fn expand_path(path: &Path) -> Result<PathBuf, ConfigError> {
    let raw = path
        .to_str()
        .ok_or_else(|| ConfigError::InvalidPath(path.to_path_buf()))?;

    Ok(PathBuf::from(shellexpand::tilde(raw).as_ref()))
}

/// A parsed keymap file.
///
/// Holds the YAML document as loaded. Section order is the order of the
/// file, which `serde_yaml::Mapping` preserves.
#[derive(Clone, Debug)]
pub struct KeymapConfig {
    /// Where the document came from, used in messages
    path: PathBuf,
    document: Mapping,
}

impl KeymapConfig {
    /// Loads and parses a keymap file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotFound` if the file doesn't exist,
    /// `ConfigError::Parse` for invalid YAML and
    /// `ConfigError::RootNotMapping` when the document isn't a mapping.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }

        let content = fs::read_to_string(path)?;
        let config = Self::parse(&content, path.to_path_buf())?;

        debug!(path = %path.display(), sections = config.sections().count(), "loaded keymap");
        Ok(config)
    }

    /// Parses a keymap from an in-memory YAML string.
    pub fn from_yaml_str(content: &str) -> Result<Self, ConfigError> {
        Self::parse(content, PathBuf::from("<string>"))
    }

    fn parse(content: &str, path: PathBuf) -> Result<Self, ConfigError> {
        let document: Value = serde_yaml::from_str(content).map_err(|e| ConfigError::Parse {
            path: path.clone(),
            message: e.to_string(),
        })?;

        match document {
            Value::Mapping(document) => Ok(Self { path, document }),
            _ => Err(ConfigError::RootNotMapping(path)),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Iterates the sections in file order, skipping metadata keys.
    ///
    /// Non-string top-level keys can't name a section and are skipped too.
    pub fn sections(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.document
            .iter()
            .filter_map(|(key, value)| key.as_str().map(|name| (name, value)))
            .filter(|(name, _)| !is_metadata_key(name))
    }

    /// Looks up any top-level key, metadata included.
    pub fn section(&self, name: &str) -> Option<&Value> {
        self.document.get(name)
    }

    /// Returns a string metadata value (`_tool_name` → "zsh").
    pub fn metadata(&self, key: &str) -> Option<&str> {
        if !is_metadata_key(key) {
            return None;
        }
        self.document.get(key).and_then(Value::as_str)
    }
}

/// Why a list item couldn't be read as a binding entry
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum EntryError {
    #[error("is not a mapping, skipping")]
    NotAMapping,

    #[error("is not a valid binding record ({0}), skipping")]
    Malformed(String),
}

/// One decoded item of a section list
#[derive(Clone, Debug)]
pub struct SectionEntry<'a> {
    pub entry: BindingEntry,
    /// Raw fields, kept for unknown-field checks
    pub fields: &'a Mapping,
}

/// Decodes the items of a section.
///
/// Returns `None` when the section value isn't a list. Each item yields
/// either a decoded entry or the reason it was rejected.
pub fn section_entries(
    value: &Value,
) -> Option<impl Iterator<Item = (usize, Result<SectionEntry<'_>, EntryError>)>> {
    let items = value.as_sequence()?;

    Some(items.iter().enumerate().map(|(index, item)| {
        let decoded = decode_entry(item).map(|(entry, fields)| SectionEntry { entry, fields });
        (index, decoded)
    }))
}

fn decode_entry(item: &Value) -> Result<(BindingEntry, &Mapping), EntryError> {
    let fields = item.as_mapping().ok_or(EntryError::NotAMapping)?;

    // Cheat-sheet entries are exempt from every check, field types included
    if fields.get("display_only").and_then(Value::as_bool) == Some(true) {
        let entry = BindingEntry {
            display_only: true,
            ..Default::default()
        };
        return Ok((entry, fields));
    }

    // Non-string keys can't name a field; the validator reports them as unknown
    let named: Mapping = fields
        .iter()
        .filter(|(key, _)| key.is_string())
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect();

    let entry = serde_yaml::from_value(Value::Mapping(named))
        .map_err(|e| EntryError::Malformed(e.to_string()))?;

    Ok((entry, fields))
}

/// Renders a YAML key for messages (`widget`, `42`)
pub(crate) fn describe_key(key: &Value) -> String {
    match key {
        Value::String(s) => s.clone(),
        other => serde_yaml::to_string(other)
            .map(|s| s.trim_end().to_string())
            .unwrap_or_else(|_| format!("{:?}", other)),
    }
}

impl fmt::Display for KeymapConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.metadata("_tool_name") {
            Some(tool) => write!(f, "{} ({})", self.path.display(), tool),
            None => write!(f, "{}", self.path.display()),
        }
    }
}

#[cfg(test)]
mod tests;
