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

use pretty_assertions::assert_eq;
use proptest::prelude::*;

use crate::core::notation::{resolve, special_key, terminal_sequence, NotationError, SPECIAL_KEYS, TERMINAL_SEQUENCES};

/// Helper: resolves and unwraps to a plain string
fn zsh(shortcut: &str) -> String {
    resolve(shortcut)
        .unwrap_or_else(|e| panic!("'{}' should resolve: {}", shortcut, e))
        .to_string()
}

// ========================================================================
// Ctrl
// ========================================================================

#[test]
fn test_ctrl_letters() {
    assert_eq!(zsh("C-a"), "^a");
    assert_eq!(zsh("C-r"), "^r");
}

#[test]
fn test_ctrl_letter_is_lowercased() {
    assert_eq!(zsh("C-A"), "^a");
    assert_eq!(zsh("C-X"), "^x");
}

#[test]
fn test_ctrl_special_keys() {
    assert_eq!(zsh("C-<Space>"), "^ ");
    assert_eq!(zsh("C-<Tab>"), "^I");
    assert_eq!(zsh("C-<Return>"), "^M");
    assert_eq!(zsh("C-<CR>"), "^M");
    assert_eq!(zsh("C-<Enter>"), "^M");
    assert_eq!(zsh("C-<BS>"), "^H");
    assert_eq!(zsh("C-<Del>"), "^?");
    assert_eq!(zsh("C-<Esc>"), "^[");
}

#[test]
fn test_ctrl_symbols_pass_through() {
    assert_eq!(zsh("C-_"), "^_");
    assert_eq!(zsh("C-/"), "^/");
}

// ========================================================================
// Meta / Alt
// ========================================================================

#[test]
fn test_meta_letters() {
    assert_eq!(zsh("M-t"), "^[t");
    assert_eq!(zsh("M-f"), "^[f");
    assert_eq!(zsh("M-b"), "^[b");
    assert_eq!(zsh("M-d"), "^[d");
}

#[test]
fn test_alt_is_meta() {
    assert_eq!(zsh("A-c"), "^[c");
    assert_eq!(zsh("A-<Tab>"), zsh("M-<Tab>"));
}

#[test]
fn test_meta_special_keys() {
    assert_eq!(zsh("M-<Space>"), "^[ ");
    assert_eq!(zsh("M-<Tab>"), "^[^I");
    assert_eq!(zsh("M-<Return>"), "^[^M");
    assert_eq!(zsh("M-<BS>"), "^[^H");
    assert_eq!(zsh("M-<Del>"), "^[^?");
    assert_eq!(zsh("M-<Esc>"), "^[^[");
}

#[test]
fn test_meta_symbol() {
    assert_eq!(zsh("M-."), "^[.");
}

// ========================================================================
// Ctrl + Meta
// ========================================================================

#[test]
fn test_ctrl_meta_either_order() {
    assert_eq!(zsh("C-M-x"), "^[^x");
    assert_eq!(zsh("M-C-x"), "^[^x");
    assert_eq!(zsh("C-A-x"), "^[^x");
}

#[test]
fn test_ctrl_meta_special_keys() {
    assert_eq!(zsh("C-M-<Tab>"), "^[^I");
    assert_eq!(zsh("M-C-<Space>"), "^[^ ");
}

// ========================================================================
// Bare keys
// ========================================================================

#[test]
fn test_bare_keys_pass_through() {
    assert_eq!(zsh("x"), "x");
    assert_eq!(zsh("|"), "|");
    assert_eq!(zsh("-"), "-");
    assert_eq!(zsh("X"), "X");
}

#[test]
fn test_whitespace_is_trimmed() {
    assert_eq!(zsh("  C-a  "), "^a");
}

#[test]
fn test_empty_input() {
    assert_eq!(zsh(""), "");
    assert_eq!(zsh("   "), "");
}

#[test]
fn test_bare_terminal_key_passes_through() {
    // Only modified terminal keys are rejected
    assert_eq!(zsh("<Up>"), "<Up>");
}

// ========================================================================
// Errors
// ========================================================================

#[test]
fn test_shift_is_unsupported() {
    assert_eq!(
        resolve("S-x"),
        Err(NotationError::UnsupportedModifier {
            shortcut: "S-x".to_string()
        })
    );
}

#[test]
fn test_unsupported_after_supported() {
    assert!(matches!(
        resolve("C-S-x"),
        Err(NotationError::UnsupportedModifier { .. })
    ));
    assert!(matches!(
        resolve("C-M-S-x"),
        Err(NotationError::UnsupportedModifier { .. })
    ));
}

#[test]
fn test_third_modifier_is_rejected() {
    assert!(matches!(
        resolve("C-M-A-x"),
        Err(NotationError::UnsupportedModifier { .. })
    ));
}

#[test]
fn test_unsupported_message_mentions_raw() {
    let err = resolve("H-x").unwrap_err();
    let message = err.to_string();

    assert!(message.contains("'H-x'"), "Message should name the token: {}", message);
    assert!(message.contains("raw: true"), "Message should hint at raw: {}", message);
}

#[test]
fn test_lowercase_prefix_is_a_bare_key() {
    // Only uppercase letter prefixes look like modifiers
    assert_eq!(zsh("s-x"), "s-x");
}

#[test]
fn test_modified_terminal_keys_are_rejected() {
    for (name, _) in TERMINAL_SEQUENCES {
        for modifier in ["C-", "M-", "A-", "C-M-"] {
            let shortcut = format!("{}{}", modifier, name);
            assert_eq!(
                resolve(&shortcut),
                Err(NotationError::TerminalSpecificSequence {
                    key: name.to_string(),
                    shortcut: shortcut.clone(),
                }),
                "{} should be rejected",
                shortcut
            );
        }
    }
}

// ========================================================================
// Tables
// ========================================================================

#[test]
fn test_special_key_table() {
    let expected = [
        ("<Space>", " "),
        ("<Tab>", "I"),
        ("<Return>", "M"),
        ("<CR>", "M"),
        ("<Enter>", "M"),
        ("<BS>", "H"),
        ("<Del>", "?"),
        ("<Esc>", "["),
    ];

    assert_eq!(SPECIAL_KEYS.len(), expected.len());
    for (name, fragment) in expected {
        assert_eq!(special_key(name), Some(fragment), "fragment for {}", name);
    }
}

#[test]
fn test_terminal_sequence_lookup() {
    assert_eq!(terminal_sequence("<Up>"), Some("^[[A"));
    assert_eq!(terminal_sequence("<Delete>"), Some("^[[3~"));
    assert_eq!(terminal_sequence("<F6>"), Some("^[[17~"));
    assert_eq!(terminal_sequence("<Del>"), None);
}

#[test]
fn test_resolution_is_deterministic() {
    for shortcut in ["C-a", "M-<Tab>", "C-M-x", "x", "S-x", "C-<Up>"] {
        assert_eq!(resolve(shortcut), resolve(shortcut));
    }
}

// ========================================================================
// Properties
// ========================================================================

proptest! {
    #[test]
    fn prop_ctrl_is_caret_plus_lowercase(k in proptest::char::range('!', '~')) {
        let expected = format!("^{}", k.to_lowercase());
        prop_assert_eq!(zsh(&format!("C-{}", k)), expected);
    }

    #[test]
    fn prop_bare_key_is_unchanged(k in proptest::char::range('!', '~')) {
        let key = k.to_string();
        prop_assert_eq!(zsh(&key), key);
    }

    #[test]
    fn prop_unknown_uppercase_modifier_fails(m in proptest::char::range('A', 'Z')) {
        prop_assume!(!matches!(m, 'A' | 'C' | 'M'));
        let shortcut = format!("{}-x", m);
        let is_unsupported = matches!(
            resolve(&shortcut),
            Err(NotationError::UnsupportedModifier { .. })
        );
        prop_assert!(is_unsupported);
    }
}
