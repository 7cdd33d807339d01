// yml2env: YAML-to-environment command launcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Launch configuration for a single child process.
//!
//! ```text
//! ProcessBuilder::new(program)
//!   .args(..)          handed to the OS verbatim
//!   .env(Env)          replaces the inherited environment
//!   .capture_stdout()  collect stdout instead of sharing it
//!   .run()  -->  ProcessOutput { termination, stdout }
//! ```
//!
//! Stdin and stderr are always shared with this process.

use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

use super::status::Termination;
use crate::core::env::container::Env;

/// What is left of a child once it has terminated.
#[derive(Debug, Clone)]
pub struct ProcessOutput {
    termination: Termination,
    stdout: String,
}

impl ProcessOutput {
    pub(super) const fn new(termination: Termination, stdout: String) -> Self {
        Self {
            termination,
            stdout,
        }
    }

    /// Returns how the process ended.
    #[must_use]
    pub const fn termination(&self) -> Termination {
        self.termination
    }

    /// Returns the exit code a shell would report (see [`Termination::exit_code`]).
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        self.termination.exit_code()
    }

    /// Collected stdout; empty unless [`ProcessBuilder::capture_stdout`] was set.
    #[must_use]
    pub fn stdout(&self) -> &str {
        &self.stdout
    }
}

/// A command to launch, with the environment it should see.
///
/// Arguments are handed to the OS exactly as given; nothing is re-split,
/// quoted or glob-expanded.
#[derive(Debug)]
pub struct ProcessBuilder {
    program: PathBuf,
    args: Vec<OsString>,
    /// Complete environment for the child; `None` inherits ours
    env: Option<Env>,
    capture_stdout: bool,
}

impl ProcessBuilder {
    /// Creates a launcher for `program`, resolved through PATH when it is a bare name.
    pub fn new(program: impl AsRef<Path>) -> Self {
        Self {
            program: program.as_ref().to_path_buf(),
            args: Vec::new(),
            env: None,
            capture_stdout: false,
        }
    }

    /// Appends arguments to the command line.
    #[must_use]
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        self.args
            .extend(args.into_iter().map(|arg| arg.as_ref().to_os_string()));
        self
    }

    /// Sets the complete environment for the process.
    ///
    /// The child sees exactly these variables and nothing else.
    #[must_use]
    pub fn env(mut self, env: Env) -> Self {
        self.env = Some(env);
        self
    }

    /// Collects stdout into [`ProcessOutput::stdout`] instead of sharing it.
    #[must_use]
    pub const fn capture_stdout(mut self) -> Self {
        self.capture_stdout = true;
        self
    }

    /// Returns the program as given to [`ProcessBuilder::new`].
    #[must_use]
    pub const fn program(&self) -> &PathBuf {
        &self.program
    }

    pub(super) fn args_slice(&self) -> &[OsString] {
        &self.args
    }

    pub(super) const fn environment(&self) -> Option<&Env> {
        self.env.as_ref()
    }

    pub(super) const fn captures_stdout(&self) -> bool {
        self.capture_stdout
    }
}
