// yml2env: YAML-to-environment command launcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Process execution and lifecycle management.
//!
//! ```text
//!            run()
//!              |
//!              v
//!     build_command()
//!     args, env (cleared + replaced)
//!     stdin/stderr inherited, stdout inherited or piped
//!              |
//!              v
//!          spawn() ------------> ProcessError::SpawnFailed
//!              |
//!              v
//!     wait_with_output()
//!       Ok(status)  --> Termination::from(status)
//!       Err(_)      --> Termination::Undetermined
//!              |
//!              v
//!       ProcessOutput
//!    { termination, stdout }
//! ```

use std::process::Stdio;
use tokio::process::Command;
use tracing::{debug, error, trace};

use super::builder::{ProcessBuilder, ProcessOutput};
use super::status::Termination;
use crate::error::ProcessError;

impl ProcessBuilder {
    /// Short name used in log events: the program's file stem.
    fn display_name(&self) -> String {
        self.program().file_stem().map_or_else(
            || "process".to_string(),
            |s| s.to_string_lossy().into_owned(),
        )
    }

    /// Returns the full command line as a string (for logging).
    fn command_line(&self) -> String {
        use std::fmt::Write as _;

        let mut cmd = format!("{}", self.program().display());
        for arg in self.args_slice() {
            let arg = arg.to_string_lossy();
            if arg.contains(' ') {
                let _ = write!(cmd, " \"{arg}\"");
            } else {
                let _ = write!(cmd, " {arg}");
            }
        }
        cmd
    }

    /// Spawns the process and blocks this task until it terminates.
    ///
    /// A non-zero exit or a signal death is not an error: it is reported
    /// through [`ProcessOutput::termination`].
    ///
    /// # Errors
    ///
    /// Returns `ProcessError::SpawnFailed` if the executable cannot be started
    /// (not found, not executable, permission denied).
    pub async fn run(self) -> Result<ProcessOutput, ProcessError> {
        let name = self.display_name();
        debug!(cmd = %self.command_line(), "exec");

        let child = self
            .build_command()
            .spawn()
            .map_err(|source| ProcessError::SpawnFailed {
                command: self.program().display().to_string(),
                source,
            })?;
        trace!(process = %name, pid = ?child.id(), "spawned");

        let output = match child.wait_with_output().await {
            Ok(output) => ProcessOutput::new(
                Termination::from(output.status),
                String::from_utf8_lossy(&output.stdout).into_owned(),
            ),
            Err(e) => {
                error!(process = %name, error = %e, "failed waiting for process to exit");
                ProcessOutput::new(Termination::Undetermined, String::new())
            }
        };

        trace!(
            process = %name,
            termination = ?output.termination(),
            exit_code = output.exit_code(),
            "completed"
        );
        Ok(output)
    }

    fn build_command(&self) -> Command {
        let mut command = Command::new(self.program());
        command.args(self.args_slice());

        if let Some(env) = self.environment() {
            command.env_clear();
            command.envs(env.iter());
        }

        let stdout = if self.captures_stdout() {
            Stdio::piped()
        } else {
            Stdio::inherit()
        };
        command
            .stdin(Stdio::inherit())
            .stdout(stdout)
            .stderr(Stdio::inherit());

        command
    }
}
