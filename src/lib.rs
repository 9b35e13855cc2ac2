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

//! zsh Keymap Interpreter
//!
//! Turns a portable YAML keymap (sections of shortcut → action entries in
//! universal notation) into a sourceable file of zsh `bindkey` lines, and
//! lints the keymap for mistakes before it ever reaches a shell.
//!
//! # Features
//!
//! - **Notation Resolution:** `C-a`, `M-<Tab>`, `C-M-x` → `^a`, `^[^I`, `^[^x`
//! - **Duplicate Detection:** Bindings that collide in zsh's key namespace
//! - **Validation:** Missing fields, unknown fields, unsupported modifiers
//! - **Best-Effort Generation:** Bad entries are skipped, never fatal
//! - **Atomic Output:** Generated scripts are written temp-file-then-rename
//!
//! # Architecture
//!
//! - **`core`:** Pure logic (types, notation resolver, duplicate detection)
//! - **`config`:** Keymap files (loading, generation, validation, output)
//!
//! # Examples
//!
//! ## Resolving a shortcut
//!
//! ```
//! use zsh_keymap::core::resolve;
//!
//! let sequence = resolve("M-<BS>")?;
//! assert_eq!(sequence.as_str(), "^[^H");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Generating bindkey lines
//!
//! ```
//! use zsh_keymap::config::{generate, KeymapConfig};
//!
//! let config = KeymapConfig::from_yaml_str(
//!     "emacs:\n  - shortcut: C-a\n    action: beginning-of-line\n",
//! )?;
//! let generated = generate(&config, &[]);
//!
//! assert!(generated.lines.contains(&"bindkey '^a' beginning-of-line".to_string()));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod config;
pub mod core;

// Re-export commonly used types for convenience
pub use crate::config::{generate, validate, KeymapConfig};
pub use crate::core::{BindingEntry, KeySequence, Modifier};
