// yml2env: YAML-to-environment command launcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Loading variables from a YAML file.
//!
//! ```text
//! load_variables(path)
//!   load_document()   exists? read bytes        NotFound | Read
//!   parse_document()  flat scalar mapping       Parse | InvalidDocument
//!   normalize()       KEY uppercase, "value"
//!       --> Vec<Variable> (document order, duplicates kept)
//! ```

pub mod parser;
pub mod scalar;

#[cfg(test)]
mod tests;

use std::path::Path;

use tracing::debug;

use crate::error::DocumentError;
pub use parser::parse_document;
pub use scalar::{Scalar, Variable, VariableEntry};

/// Reads the raw bytes of a YAML file.
///
/// # Errors
///
/// Returns `DocumentError::NotFound` if nothing exists at `path` and
/// `DocumentError::Read` if it exists but cannot be read.
pub fn load_document(path: &Path) -> Result<Vec<u8>, DocumentError> {
    if !path.try_exists().unwrap_or(true) {
        return Err(DocumentError::NotFound {
            path: path.to_path_buf(),
        });
    }

    std::fs::read(path).map_err(|source| DocumentError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Loads, parses and normalizes the variables in a YAML file.
///
/// # Errors
///
/// Returns the first [`DocumentError`] raised by loading or parsing; no
/// partial result is ever returned.
pub fn load_variables(path: &Path) -> Result<Vec<Variable>, DocumentError> {
    let bytes = load_document(path)?;
    let entries = parse_document(&bytes).map_err(|e| e.at(path))?;
    debug!(path = %path.display(), count = entries.len(), "loaded variables");

    Ok(entries.into_iter().map(VariableEntry::normalize).collect())
}
