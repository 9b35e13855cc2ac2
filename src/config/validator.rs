//! Keymap validation.
//!
//! Walks every section of a keymap and collects all issues into a
//! structured report instead of stopping at the first one:
//! - **Structure**: sections that aren't lists, items that aren't entries
//! - **Required fields**: missing `shortcut` or `action`
//! - **Typos**: field names outside the known set
//! - **Notation**: shortcuts the resolver rejects
//! - **Duplicates**: two entries resolving to the same zsh sequence
//!
//! Display-only entries are cheat-sheet material and skip every check.
//!
//! # Example
//! ```
//! use zsh_keymap::config::{validate, KeymapConfig};
//!
//! let config = KeymapConfig::from_yaml_str("emacs:\n  - shortcut: C-a\n").unwrap();
//! let report = validate(&config);
//!
//! assert!(report.has_errors());
//! assert_eq!(report.issues[0].to_string(), "error: [emacs][0] missing 'action'");
//! ```

use serde_yaml::Value;
use std::fmt;

use crate::config::{describe_key, section_entries, KeymapConfig};
use crate::core::conflict::{BindingOrigin, DuplicateDetector};
use crate::core::types::KNOWN_FIELDS;

/// Validation severity level
///
/// - **Error**: The run fails (`error_count() > 0`)
/// - **Warning**: Reported, but generation carries on
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum IssueLevel {
    Error,
    Warning,
}

impl fmt::Display for IssueLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Padded so messages line up in a column
        match self {
            IssueLevel::Error => write!(f, "error:"),
            IssueLevel::Warning => write!(f, "warn: "),
        }
    }
}

/// Position of an issue: a whole section or one entry in it
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Location {
    pub section: String,
    pub index: Option<usize>,
}

impl Location {
    pub fn section(section: &str) -> Self {
        Self {
            section: section.to_string(),
            index: None,
        }
    }

    pub fn entry(section: &str, index: usize) -> Self {
        Self {
            section: section.to_string(),
            index: Some(index),
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.section)?;

        if let Some(index) = self.index {
            write!(f, "[{}]", index)?;
        }

        Ok(())
    }
}

/// A single problem found in a keymap
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Issue {
    pub level: IssueLevel,
    pub location: Location,
    /// Human-readable description of the issue
    pub message: String,
}

impl Issue {
    pub fn error(location: Location, message: impl Into<String>) -> Self {
        Self {
            level: IssueLevel::Error,
            location,
            message: message.into(),
        }
    }

    pub fn warning(location: Location, message: impl Into<String>) -> Self {
        Self {
            level: IssueLevel::Warning,
            location,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.level == IssueLevel::Error
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.level, self.location, self.message)
    }
}

/// Every issue found in a keymap, in file order
#[derive(Clone, Debug, Default)]
pub struct ValidationReport {
    pub issues: Vec<Issue>,
}

impl ValidationReport {
    /// Creates a new empty validation report
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if the report contains any Error-level issues
    pub fn has_errors(&self) -> bool {
        self.issues.iter().any(Issue::is_error)
    }

    pub fn error_count(&self) -> usize {
        self.issues.iter().filter(|issue| issue.is_error()).count()
    }

    pub fn warning_count(&self) -> usize {
        self.issues.len() - self.error_count()
    }

    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn add_error(&mut self, location: Location, message: impl Into<String>) {
        self.issues.push(Issue::error(location, message));
    }

    pub fn add_warning(&mut self, location: Location, message: impl Into<String>) {
        self.issues.push(Issue::warning(location, message));
    }
}

/// Validates a complete keymap
///
/// Visits every non-metadata section, ignoring any section filter the
/// caller may use for generation: all sections share zsh's key namespace,
/// so duplicates are only meaningful across the whole file.
///
/// Never fails; the report's `error_count()` decides whether the run
/// passed.
pub fn validate(config: &KeymapConfig) -> ValidationReport {
    let mut report = ValidationReport::new();
    let mut detector = DuplicateDetector::new();

    for (section, value) in config.sections() {
        let Some(entries) = section_entries(value) else {
            report.add_warning(Location::section(section), "is not a list, skipping");
            continue;
        };

        for (index, decoded) in entries {
            let location = Location::entry(section, index);

            let item = match decoded {
                Ok(item) => item,
                Err(e) => {
                    report.add_warning(location, e.to_string());
                    continue;
                }
            };

            let entry = &item.entry;
            if entry.display_only {
                continue;
            }

            if entry.shortcut().is_empty() {
                report.add_error(location.clone(), "missing 'shortcut'");
            }
            if entry.action().is_empty() {
                report.add_error(location.clone(), "missing 'action'");
            }

            for key in item.fields.keys() {
                if !key.as_str().is_some_and(|k| KNOWN_FIELDS.contains(&k)) {
                    report.add_warning(location.clone(), unknown_field_message(key));
                }
            }

            if entry.shortcut().is_empty() {
                continue;
            }

            let sequence = match entry.resolve() {
                Ok(sequence) => sequence,
                Err(e) => {
                    report.add_warning(location, e.to_string());
                    continue;
                }
            };

            let origin = BindingOrigin {
                section: section.to_string(),
                index,
                action: entry.action().to_string(),
            };

            if let Some(previous) = detector.register(sequence.clone(), origin) {
                let message = format!(
                    "duplicate shortcut '{}' (→ '{}'): '{}' is also bound to {}",
                    entry.shortcut(),
                    sequence,
                    entry.action(),
                    previous
                );
                report.add_warning(location, message);
            }
        }
    }

    report
}

fn unknown_field_message(key: &Value) -> String {
    format!(
        "unknown field '{}' (known: {})",
        describe_key(key),
        KNOWN_FIELDS.join(", ")
    )
}
