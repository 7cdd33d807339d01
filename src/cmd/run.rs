// yml2env: YAML-to-environment command launcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Run command implementation.

use std::ffi::{OsStr, OsString};
use std::path::Path;

use tracing::debug;

use crate::core::env::container::Env;
use crate::core::env::current_env;
use crate::core::process::builder::ProcessBuilder;
use crate::error::AppResult;
use crate::vars::{Variable, load_variables};

/// Builds the child environment: the inherited one with `vars` applied on top.
#[must_use]
pub fn merged_env(vars: &[Variable]) -> Env {
    let mut env = current_env();
    let inherited = env.len();
    env.merge(vars);
    debug!(
        inherited,
        applied = vars.len(),
        total = env.len(),
        "merged environment"
    );
    env
}

/// Main handler for running a command under the YAML-defined environment.
///
/// Returns the exit code this process should terminate with: the child's
/// own code, `128 + signal` for a signal death, or 254 when undeterminable.
///
/// # Errors
///
/// Returns an error if the YAML file cannot be loaded or the command cannot
/// be spawned. Nothing is run when loading fails.
pub async fn run_command(yaml_file: &Path, program: &OsStr, args: &[OsString]) -> AppResult<i32> {
    let vars = load_variables(yaml_file)?;
    let env = merged_env(&vars);

    let output = ProcessBuilder::new(program)
        .args(args)
        .env(env)
        .run()
        .await?;

    Ok(output.exit_code())
}
