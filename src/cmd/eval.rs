// yml2env: YAML-to-environment command launcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Eval command implementation.

use std::io::Write;
use std::path::Path;

use crate::error::AppResult;
use crate::export::render_exports;
use crate::vars::load_variables;

/// Writes an `export` statement for every variable in `yaml_file` to `out`.
///
/// # Errors
///
/// Returns an error if the YAML file cannot be loaded or `out` fails.
/// Nothing is written when loading fails.
pub fn run_eval_command(yaml_file: &Path, out: impl Write) -> AppResult<()> {
    let vars = load_variables(yaml_file)?;
    render_exports(&vars, out)?;
    Ok(())
}
