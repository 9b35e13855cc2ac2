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

//! `bindkey` script generation.
//!
//! Generation is best-effort: anything that can't be turned into a valid
//! line is skipped with a warning, and the rest of the keymap is still
//! emitted. Output layout:
//!
//! ```zsh
//! # Generated by zsh-keymap. Do not edit by hand.
//!
//! # emacs
//! bindkey '^a' beginning-of-line  # Beginning of line
//! bindkey '^[^I' expand-or-complete
//!
//! ```

use tracing::{debug, warn};

use crate::config::validator::{Issue, Location};
use crate::config::{section_entries, KeymapConfig};
use crate::core::types::{BindingEntry, KeySequence};

/// First line of every generated script
pub const GENERATED_HEADER: &str = "# Generated by zsh-keymap. Do not edit by hand.";

/// zsh builtin that installs a key binding
pub const BIND_DIRECTIVE: &str = "bindkey";

/// A generated script plus everything skipped along the way
#[derive(Clone, Debug, Default)]
pub struct GeneratedKeymap {
    /// Script lines, without trailing newlines
    pub lines: Vec<String>,
    /// Warnings for skipped sections and entries
    pub warnings: Vec<Issue>,
}

impl GeneratedKeymap {
    /// Joins the lines into the text of a sourceable file.
    pub fn to_script(&self) -> String {
        let mut script = self.lines.join("\n");
        script.push('\n');
        script
    }

    /// Number of `bindkey` lines emitted.
    pub fn binding_count(&self) -> usize {
        self.lines
            .iter()
            .filter(|line| line.starts_with(BIND_DIRECTIVE))
            .count()
    }

    fn skip(&mut self, issue: Issue) {
        warn!(location = %issue.location, "{}", issue.message);
        self.warnings.push(issue);
    }
}

/// Generates `bindkey` lines for a keymap
///
/// # Arguments
/// * `config` - The loaded keymap
/// * `requested` - Sections to emit, in this order. Empty means every
///   section, in file order.
///
/// Sections that end up with no `bindkey` lines (everything display-only,
/// incomplete or unresolvable) produce no output at all.
pub fn generate(config: &KeymapConfig, requested: &[String]) -> GeneratedKeymap {
    let mut generated = GeneratedKeymap {
        lines: vec![GENERATED_HEADER.to_string(), String::new()],
        warnings: Vec::new(),
    };

    let active: Vec<&str> = if requested.is_empty() {
        config.sections().map(|(name, _)| name).collect()
    } else {
        requested.iter().map(String::as_str).collect()
    };

    for section in active {
        let Some(value) = config.section(section) else {
            generated.skip(Issue::warning(
                Location::section(section),
                "section not found in config",
            ));
            continue;
        };

        let Some(entries) = section_entries(value) else {
            generated.skip(Issue::warning(Location::section(section), "is not a list, skipping"));
            continue;
        };

        let mut lines = Vec::new();
        for (index, decoded) in entries {
            let item = match decoded {
                Ok(item) => item,
                Err(e) => {
                    generated.skip(Issue::warning(Location::entry(section, index), e.to_string()));
                    continue;
                }
            };

            if !item.entry.is_bindable() {
                continue;
            }

            match item.entry.resolve() {
                Ok(sequence) => lines.push(bindkey_line(&sequence, &item.entry)),
                Err(e) => generated.skip(Issue::warning(
                    Location::entry(section, index),
                    format!("skipping '{}': {}", item.entry.shortcut(), e),
                )),
            }
        }

        if lines.is_empty() {
            debug!(section, "no bindable entries, section omitted");
            continue;
        }

        debug!(section, bindings = lines.len(), "section generated");
        generated.lines.push(format!("# {}", section));
        generated.lines.append(&mut lines);
        generated.lines.push(String::new());
    }

    generated
}

/// Formats one `bindkey '<sequence>' <action>  # <description>` line
pub fn bindkey_line(sequence: &KeySequence, entry: &BindingEntry) -> String {
    let mut line = format!(
        "{} '{}' {}",
        BIND_DIRECTIVE,
        sequence.single_quoted_body(),
        entry.action()
    );

    if !entry.description().is_empty() {
        line.push_str("  # ");
        line.push_str(entry.description());
    }

    line
}
