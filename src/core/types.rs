//! src/core/types.rs
//!
//! Core type definitions for keymap processing
//!
//! This module defines the fundamental types used throughout the crate:
//! - `Modifier`: Modifier prefixes understood by the notation (Ctrl, Meta)
//! - `KeySequence`: A resolved zsh `bindkey` sequence
//! - `BindingEntry`: One shortcut → action record from a keymap section
//!
//! `KeySequence` is the identity used for duplicate detection: two entries
//! are the same binding when they resolve to the same sequence, whatever
//! notation they were written in.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use std::fmt;

use crate::core::notation::{resolve, NotationError};

/// Field names a binding entry may carry, sorted for display.
pub const KNOWN_FIELDS: &[&str] = &["action", "description", "display_only", "raw", "shortcut"];

/// Modifier prefixes in universal notation
///
/// `A-` (Alt) is read as Meta: zsh only sees the ESC prefix either way.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Modifier {
    /// Control key (`C-`)
    Ctrl,
    /// Meta/Alt key (`M-` or `A-`), encoded as an ESC prefix
    Meta,
}

/// A resolved `bindkey` sequence such as `^a`, `^[^I` or `^[[A`
///
/// Implements Hash and Eq for use as a HashMap key in duplicate detection.
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct KeySequence(String);

impl KeySequence {
    pub fn new(sequence: impl Into<String>) -> Self {
        Self(sequence.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the sequence ready to sit inside a single-quoted zsh string
    ///
    /// A single quote cannot appear inside `'...'`, so it is written as
    /// `'\''` (close, escaped quote, reopen).
    pub fn single_quoted_body(&self) -> String {
        self.0.replace('\'', r"'\''")
    }
}

impl fmt::Display for KeySequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for KeySequence {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// One binding record from a keymap section
///
/// Every field is optional at the YAML level; emptiness rules are applied
/// by the generator and validator rather than by deserialisation.
///
/// # Example
/// ```yaml
/// - shortcut: C-a
///   description: Beginning of line
///   action: beginning-of-line
/// ```
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(default)]
pub struct BindingEntry {
    /// Universal notation (`C-a`, `M-<Tab>`) or a raw sequence when `raw` is set
    #[serde(deserialize_with = "null_as_default")]
    pub shortcut: String,

    /// Free text copied into the generated line as a trailing comment
    #[serde(deserialize_with = "scalar_as_text")]
    pub description: String,

    /// zsh widget name
    #[serde(deserialize_with = "null_as_default")]
    pub action: String,

    /// Use `shortcut` verbatim instead of resolving it
    #[serde(deserialize_with = "null_as_default")]
    pub raw: bool,

    /// Cheat-sheet entry only; never emitted or validated
    #[serde(deserialize_with = "null_as_default")]
    pub display_only: bool,
}

/// `shortcut:` with no value is YAML null; read it as empty/false
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Accepts any scalar as comment text (`description: 42` → "42")
fn scalar_as_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_yaml::Value::deserialize(deserializer)? {
        serde_yaml::Value::Null => Ok(String::new()),
        serde_yaml::Value::Bool(flag) => Ok(flag.to_string()),
        serde_yaml::Value::Number(number) => Ok(number.to_string()),
        serde_yaml::Value::String(text) => Ok(text),
        _ => Err(D::Error::custom("invalid type: expected a scalar description")),
    }
}

impl BindingEntry {
    pub fn shortcut(&self) -> &str {
        self.shortcut.trim()
    }

    pub fn action(&self) -> &str {
        self.action.trim()
    }

    pub fn description(&self) -> &str {
        self.description.trim()
    }

    /// True when the entry should become a `bindkey` line
    pub fn is_bindable(&self) -> bool {
        !self.display_only && !self.shortcut().is_empty() && !self.action().is_empty()
    }

    /// Resolves the shortcut to its zsh sequence
    ///
    /// Raw entries never reach the notation resolver.
    pub fn resolve(&self) -> Result<KeySequence, NotationError> {
        if self.raw {
            Ok(KeySequence::new(self.shortcut()))
        } else {
            resolve(&self.shortcut)
        }
    }
}
