// yml2env: YAML-to-environment command launcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command implementations.
//!
//! ```text
//! Invocation --> cmd handlers
//!   Run      run_command()        load -> merge -> spawn -> exit code
//!   Eval     run_eval_command()   load -> export lines on stdout
//!   Version  version_string()
//! ```

pub mod eval;
pub mod run;
pub mod version;

#[cfg(test)]
mod tests;
