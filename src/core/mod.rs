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

//! src/core/mod.rs
//!
//! Core business logic module
//!
//! This module contains the fundamental data structures and algorithms
//! for keymap processing, including:
//! - Type definitions for binding entries and resolved sequences
//! - Shortcut notation resolution (universal notation → zsh sequences)
//! - Duplicate detection using HashMap-based O(1) lookup
//!
//! Nothing in here touches the filesystem or the console, so every piece
//! can be unit tested on plain strings.

pub mod conflict;
pub mod notation;
pub mod types;

pub use conflict::{BindingOrigin, DuplicateDetector};
pub use notation::{resolve, NotationError};
pub use types::*;

#[cfg(test)]
mod tests;
