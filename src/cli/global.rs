// yml2env: YAML-to-environment command launcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Global CLI options.
//!
//! # Option Precedence
//!
//! ```text
//! --log-level N     ← Console verbosity (0-6), else $YML2ENV_LOG_LEVEL
//! --file-log-level  ← File verbosity (defaults to --log-level)
//! --log-file FILE   ← Also log to FILE, else $YML2ENV_LOG_FILE
//!
//! Precedence: CLI flags > environment > defaults (console: warn)
//! ```

use clap::Args;
use std::path::PathBuf;

/// Global options available for every invocation.
///
/// They must precede the YAML file; everything after the command name
/// belongs to the command.
#[derive(Debug, Clone, Default, Args)]
pub struct GlobalOptions {
    /// Console log level (0=silent, 1=errors, 2=warnings, 3=info, 4=debug, 5=trace, 6=dump).
    #[arg(
        short = 'l',
        long = "log-level",
        value_name = "LEVEL",
        env = "YML2ENV_LOG_LEVEL",
        value_parser = clap::value_parser!(u8).range(0..=6)
    )]
    pub log_level: Option<u8>,

    /// File log level, overrides --log-level for the log file.
    #[arg(
        long = "file-log-level",
        value_name = "LEVEL",
        value_parser = clap::value_parser!(u8).range(0..=6)
    )]
    pub file_log_level: Option<u8>,

    /// Path to log file.
    #[arg(long = "log-file", value_name = "FILE", env = "YML2ENV_LOG_FILE")]
    pub log_file: Option<PathBuf>,
}
