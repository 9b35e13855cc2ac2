//! Config module tests
//!
//! Contains test suites for keymap processing:
//! - Loading tests (file checks, YAML root shape, section iteration)
//! - Generation tests (bindkey output, filtering, best-effort skipping)
//! - Validation tests (errors, warnings, duplicate detection)
//! - Output tests (atomic writes, staleness check)

use crate::config::KeymapConfig;

/// Helper: parses an in-memory keymap, panicking on invalid YAML.
pub(super) fn keymap(yaml: &str) -> KeymapConfig {
    KeymapConfig::from_yaml_str(yaml).unwrap()
}

#[cfg(test)]
mod output_tests;
