// yml2env: YAML-to-environment command launcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!            AppError (~24 bytes)
//!                   |
//!     +--------+----+-----+--------+
//!     |        |          |        |
//!     v        v          v        v
//!   Usage   Document   Process    Io
//!             Box        Box      Box
//!
//! Sub-errors (unboxed internally):
//!   Document  NotFound, Read, Parse, InvalidDocument
//!   Process   SpawnFailed
//!
//! Every AppError terminates the invocation with exit code 1.
//! ```

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`AppError`].
pub type AppResult<T> = std::result::Result<T, AppError>;

/// Fixed usage line printed for every argument error.
pub const USAGE: &str = "yml2env <YAML file> [<command> | --eval]";

/// Top-level application error type.
///
/// Sub-errors are boxed to keep this enum small on the stack.
#[derive(Debug, Error)]
pub enum AppError {
    /// Wrong argument count or mutually exclusive flags.
    #[error("{}", USAGE)]
    Usage,

    /// The YAML document could not be loaded or is not a flat scalar mapping.
    #[error(transparent)]
    Document(Box<DocumentError>),

    /// The target command could not be started.
    #[error(transparent)]
    Process(Box<ProcessError>),

    /// I/O error writing our own output.
    #[error("io error: {0}")]
    Io(Box<std::io::Error>),
}

impl AppError {
    /// Exit code this process terminates with when the error is fatal.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        1
    }
}

// --- From implementations for boxing ---

/// Macro to generate `From` implementations that box the source error.
macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for AppError {
                fn from(err: $error) -> Self {
                    AppError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    DocumentError => Document,
    ProcessError => Process,
    std::io::Error => Io,
}

// --- Document Errors ---

/// Errors raised while loading, parsing or validating the YAML document.
#[derive(Debug, Error)]
pub enum DocumentError {
    /// The YAML path does not exist.
    #[error("{} does not exist", .path.display())]
    NotFound { path: PathBuf },

    /// The YAML path exists but could not be read.
    #[error("could not read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The document is not well-formed YAML.
    #[error("could not parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// The document parsed but is not a flat mapping of scalars.
    #[error("invalid YAML in {}: {message}", .path.display())]
    InvalidDocument { path: PathBuf, message: String },
}

impl DocumentError {
    /// Attaches the document path to a parse or validation error raised
    /// before the path was known.
    #[must_use]
    pub fn at(self, path: &Path) -> Self {
        match self {
            Self::Parse { source, .. } => Self::Parse {
                path: path.to_path_buf(),
                source,
            },
            Self::InvalidDocument { message, .. } => Self::InvalidDocument {
                path: path.to_path_buf(),
                message,
            },
            other => other,
        }
    }
}

// --- Process Errors ---

/// Process execution errors.
#[derive(Debug, Error)]
pub enum ProcessError {
    /// Failed to spawn the process (not found, not executable, permission denied).
    #[error("failed to spawn process '{command}': {source}")]
    SpawnFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests;
