//! Duplicate binding detection
//!
//! zsh has one key namespace per keymap, so every section of a keymap file
//! shares it. Two entries conflict when they resolve to the same
//! `KeySequence`, no matter how the shortcut was written (`M-x` and `A-x`
//! are the same binding).
//!
//! # Performance
//! - Register binding: O(1) average case
//!
//! The first binding seen for a sequence wins; later ones are reported
//! against it.

use std::collections::HashMap;
use std::fmt;

use crate::core::types::KeySequence;

/// Where a binding was defined, and what it does
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BindingOrigin {
    /// Section name in the keymap file
    pub section: String,

    /// 0-based position inside the section
    pub index: usize,

    /// zsh widget bound by the entry
    pub action: String,
}

impl fmt::Display for BindingOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}' in [{}][{}]", self.action, self.section, self.index)
    }
}

/// Tracks the first binding for each resolved sequence.
pub struct DuplicateDetector {
    /// Maps each sequence to the binding that claimed it first.
    first_seen: HashMap<KeySequence, BindingOrigin>,
}

impl DuplicateDetector {
    /// Creates a new empty detector.
    pub fn new() -> Self {
        Self {
            first_seen: HashMap::new(),
        }
    }

    /// Registers a binding for `sequence`.
    ///
    /// Returns the earlier binding when the sequence is already taken; the
    /// earlier binding stays the recorded owner.
    ///
    /// Time complexity: O(1) average case
    pub fn register(&mut self, sequence: KeySequence, origin: BindingOrigin) -> Option<&BindingOrigin> {
        use std::collections::hash_map::Entry;

        match self.first_seen.entry(sequence) {
            Entry::Occupied(existing) => Some(existing.into_mut()),
            Entry::Vacant(slot) => {
                slot.insert(origin);
                None
            }
        }
    }
}

impl Default for DuplicateDetector {
    fn default() -> Self {
        Self::new()
    }
}
