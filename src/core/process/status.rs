// yml2env: YAML-to-environment command launcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Mapping a child's termination to our own exit code.
//!
//! ```text
//! ExitStatus
//!   code() = Some(n)     --> Exited(n)     --> n
//!   signal() = Some(s)   --> Signaled(s)   --> 128 + s   (unix)
//!   neither / wait error --> Undetermined  --> 254
//! ```

use std::process::ExitStatus;

/// Offset added to a signal number, as a POSIX shell reports it.
pub const SIGNAL_EXIT_OFFSET: i32 = 128;

/// Exit code used when the child's fate cannot be determined.
pub const UNDETERMINED_EXIT_CODE: i32 = 254;

/// How a child process ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// Exited normally with this status code.
    Exited(i32),
    /// Killed by this signal number.
    Signaled(i32),
    /// Waiting failed or the status carried neither code nor signal.
    Undetermined,
}

impl Termination {
    /// The exit code a shell would report for this termination.
    #[must_use]
    pub const fn exit_code(self) -> i32 {
        match self {
            Self::Exited(code) => code,
            Self::Signaled(signal) => SIGNAL_EXIT_OFFSET + signal,
            Self::Undetermined => UNDETERMINED_EXIT_CODE,
        }
    }
}

impl From<ExitStatus> for Termination {
    fn from(status: ExitStatus) -> Self {
        if let Some(code) = status.code() {
            return Self::Exited(code);
        }

        #[cfg(unix)]
        {
            use std::os::unix::process::ExitStatusExt;
            if let Some(signal) = status.signal() {
                return Self::Signaled(signal);
            }
        }

        Self::Undetermined
    }
}
