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

//! Writing generated scripts to disk.
//!
//! The generated file is sourced by every new shell, so it must never be
//! observed half-written. Writes go through `AtomicWriteFile` (temp file
//! in the same directory, then rename).

use atomic_write_file::AtomicWriteFile;
use std::fs;
use std::io::Write;
use std::path::Path;
use tracing::debug;

use crate::config::ConfigError;

/// Atomically replaces `path` with `content`.
///
/// # Errors
///
/// Returns `ConfigError::WriteFailed` if the temporary file can't be
/// created, written or renamed into place. The previous file, if any, is
/// left untouched in that case.
pub fn write_atomically(path: &Path, content: &str) -> Result<(), ConfigError> {
    let mut file = AtomicWriteFile::options().open(path).map_err(|e| {
        ConfigError::WriteFailed(format!("Failed to open {} for atomic write: {}", path.display(), e))
    })?;

    file.write_all(content.as_bytes())
        .map_err(|e| ConfigError::WriteFailed(format!("Failed to write content: {}", e)))?;

    file.commit().map_err(|e| {
        ConfigError::WriteFailed(format!("Failed to commit atomic write: {}", e))
    })?;

    debug!(path = %path.display(), bytes = content.len(), "wrote generated script");
    Ok(())
}

/// Returns true when `output` exists and is at least as new as `input`.
///
/// Mirrors the mtime check a shell startup file would do before
/// regenerating. Any metadata error counts as stale.
pub fn is_up_to_date(input: &Path, output: &Path) -> bool {
    let modified = |path: &Path| fs::metadata(path).and_then(|meta| meta.modified());

    match (modified(input), modified(output)) {
        (Ok(input_time), Ok(output_time)) => output_time >= input_time,
        _ => false,
    }
}
