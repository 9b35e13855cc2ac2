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

//! src/core/notation.rs
//!
//! Universal shortcut notation → zsh `bindkey` sequences
//!
//! | Notation     | Sequence | Meaning              |
//! |--------------|----------|----------------------|
//! | `C-x`        | `^x`     | Ctrl (lowercased)    |
//! | `C-<Tab>`    | `^I`     | Ctrl + named key     |
//! | `M-x`, `A-x` | `^[x`    | Meta/Alt (ESC prefix)|
//! | `M-<Tab>`    | `^[^I`   | Meta + named key     |
//! | `C-M-x`      | `^[^x`   | Ctrl + Meta          |
//! | `x`          | `x`      | bare key, unchanged  |
//!
//! # Architecture
//! Modifier prefixes are consumed with nom combinators (at most two, in any
//! order). Everything after them is looked up in two static tables:
//! `SPECIAL_KEYS` for keys with a fixed control-code fragment, and
//! `TERMINAL_SEQUENCES` for keys whose encoding depends on the terminal.
//! The latter are rejected when combined with modifiers and must be written
//! as `raw: true` entries instead.

use std::sync::LazyLock;

use nom::{
    branch::alt,
    bytes::complete::tag,
    combinator::value,
    multi::many_m_n,
    IResult, Parser,
};
use regex::Regex;
use thiserror::Error;

use crate::core::types::{KeySequence, Modifier};

/// Prefix for control characters (`^I` is Tab)
pub const CTRL_PREFIX: &str = "^";

/// Prefix for the ESC character, used to encode Meta
pub const ESC_PREFIX: &str = "^[";

/// Named keys → single-character control-code fragment
///
/// `<Space>` is the exception: its fragment is a literal space.
pub const SPECIAL_KEYS: &[(&str, &str)] = &[
    ("<Space>", " "),
    ("<Tab>", "I"),
    ("<Return>", "M"),
    ("<CR>", "M"),
    ("<Enter>", "M"),
    ("<BS>", "H"),
    ("<Del>", "?"),
    ("<Esc>", "["),
];

/// Keys whose sequences vary by terminal emulator (xterm/VT100 defaults)
///
/// These can't be derived from notation. Check what your terminal sends
/// with `cat -v` and write the entry with `raw: true`.
pub const TERMINAL_SEQUENCES: &[(&str, &str)] = &[
    // Arrow keys
    ("<Up>", "^[[A"),
    ("<Down>", "^[[B"),
    ("<Right>", "^[[C"),
    ("<Left>", "^[[D"),
    // Editing cluster
    ("<Insert>", "^[[2~"),
    ("<Delete>", "^[[3~"),
    ("<Home>", "^[[H"),
    ("<End>", "^[[F"),
    ("<PgUp>", "^[[5~"),
    ("<PgDown>", "^[[6~"),
    // Function keys
    ("<F1>", "^[[11~"),
    ("<F2>", "^[[12~"),
    ("<F3>", "^[[13~"),
    ("<F4>", "^[[14~"),
    ("<F5>", "^[[15~"),
    ("<F6>", "^[[17~"),
    ("<F7>", "^[[18~"),
    ("<F8>", "^[[19~"),
    ("<F9>", "^[[20~"),
    ("<F10>", "^[[21~"),
    ("<F11>", "^[[23~"),
    ("<F12>", "^[[24~"),
];

/// Uppercase letter + hyphen, the shape of a modifier prefix (`S-`, `H-`)
static MODIFIER_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Z]-").expect("modifier prefix pattern should be valid regex")
});

/// Notation resolution errors
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum NotationError {
    /// Modifier zsh cannot express (Shift, Super, Hyper, ...)
    #[error("unrecognised modifier in '{shortcut}': zsh supports C-, M-, A- only (use raw: true for Shift and special sequences)")]
    UnsupportedModifier { shortcut: String },

    /// Terminal-dependent key combined with a modifier
    #[error("'{key}' is a terminal-specific sequence in '{shortcut}': use raw: true with the exact sequence your terminal sends")]
    TerminalSpecificSequence { key: String, shortcut: String },
}

/// Looks up the control-code fragment for a named key
pub fn special_key(name: &str) -> Option<&'static str> {
    SPECIAL_KEYS
        .iter()
        .find(|(key, _)| *key == name)
        .map(|(_, fragment)| *fragment)
}

/// Looks up the xterm default sequence for a terminal-specific key
pub fn terminal_sequence(name: &str) -> Option<&'static str> {
    TERMINAL_SEQUENCES
        .iter()
        .find(|(key, _)| *key == name)
        .map(|(_, sequence)| *sequence)
}

/// Converts a universal shortcut token into a zsh `bindkey` sequence
///
/// # Errors
/// - `UnsupportedModifier` for prefixes outside `C-`, `M-`, `A-`
/// - `TerminalSpecificSequence` for modified arrows, F-keys and the
///   editing cluster
///
/// # Example
/// ```
/// use zsh_keymap::core::notation::resolve;
///
/// assert_eq!(resolve("C-a").unwrap().as_str(), "^a");
/// assert_eq!(resolve("M-<Tab>").unwrap().as_str(), "^[^I");
/// ```
pub fn resolve(shortcut: &str) -> Result<KeySequence, NotationError> {
    let shortcut = shortcut.trim();
    if shortcut.is_empty() {
        return Ok(KeySequence::default());
    }

    let (rest, modifiers) = modifier_prefixes(shortcut).unwrap_or((shortcut, Vec::new()));
    let ctrl = modifiers.contains(&Modifier::Ctrl);
    let meta = modifiers.contains(&Modifier::Meta);

    // Catches both `S-x` and `C-S-x`
    if MODIFIER_SHAPE.is_match(rest) {
        return Err(NotationError::UnsupportedModifier {
            shortcut: shortcut.to_string(),
        });
    }

    if !ctrl && !meta {
        return Ok(KeySequence::new(shortcut));
    }

    if terminal_sequence(rest).is_some() {
        return Err(NotationError::TerminalSpecificSequence {
            key: rest.to_string(),
            shortcut: shortcut.to_string(),
        });
    }

    let special = special_key(rest);
    let key = match special {
        Some(fragment) => fragment.to_string(),
        None => normalise_key(rest),
    };
    let ctrl_part = format!("{CTRL_PREFIX}{key}");

    let sequence = if ctrl && meta {
        format!("{ESC_PREFIX}{ctrl_part}")
    } else if meta {
        match special {
            Some(_) if rest != "<Space>" => format!("{ESC_PREFIX}{ctrl_part}"),
            _ => format!("{ESC_PREFIX}{key}"),
        }
    } else {
        ctrl_part
    };

    Ok(KeySequence::new(sequence))
}

/// Parses up to two modifier prefixes, in any order
fn modifier_prefixes(input: &str) -> IResult<&str, Vec<Modifier>> {
    many_m_n(0, 2, modifier_prefix).parse(input)
}

/// Parses a single `C-`, `M-` or `A-` prefix
fn modifier_prefix(input: &str) -> IResult<&str, Modifier> {
    alt((
        value(Modifier::Ctrl, tag("C-")),
        value(Modifier::Meta, tag("M-")),
        value(Modifier::Meta, tag("A-")),
    ))
    .parse(input)
}

/// Single letters are lowercased (Ctrl convention); anything else is kept
fn normalise_key(key: &str) -> String {
    let mut chars = key.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_alphabetic() => c.to_lowercase().collect(),
        _ => key.to_string(),
    }
}
