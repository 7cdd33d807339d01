// yml2env: YAML-to-environment command launcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module using clap derive.
//!
//! # Invocation Forms
//!
//! ```text
//! yml2env [global options] <YAML file> <command> [args...]   run
//! yml2env [global options] <YAML file> --eval                 print exports
//! yml2env --version | -v                                      print version
//! anything else                                               usage, exit 1
//! ```

pub mod global;


use std::ffi::OsString;
use std::path::PathBuf;

use clap::Parser;

use crate::cli::global::GlobalOptions;
use crate::error::{AppError, AppResult};

/// Run a command with environment variables loaded from a YAML file.
#[derive(Debug, Parser)]
#[command(
    name = "yml2env",
    author,
    about = "Run a command with environment variables loaded from a flat YAML file",
    long_about = "Run a command with environment variables loaded from a flat YAML file.\n\n\
                  Top-level keys are uppercased and become environment variables;\n\
                  boolean and integer values are converted to strings. Variables\n\
                  already present in the environment are overridden. The command's\n\
                  exit code is passed through (128 + N when killed by signal N).",
    override_usage = "yml2env <YAML file> [<command> | --eval]",
    after_help = "EXAMPLES:\n\n\
                  \x20 yml2env vars.yml make deploy\n\
                  \x20 eval \"$(yml2env vars.yml --eval)\""
)]
pub struct Cli {
    /// Global options
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Print the version and exit. Takes no other arguments.
    #[arg(short = 'v', long = "version")]
    pub version: bool,

    /// Print `export 'KEY=VALUE'` lines instead of running a command.
    #[arg(long)]
    pub eval: bool,

    /// Flat YAML mapping of variables.
    #[arg(value_name = "YAML file")]
    pub yaml_file: Option<PathBuf>,

    /// Command to run, followed by its arguments (passed through untouched).
    #[arg(
        value_name = "command",
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub command: Vec<OsString>,
}

/// What a parsed command line asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    /// Print the packaged version.
    Version,
    /// Print export statements for the variables in `yaml_file`.
    Eval { yaml_file: PathBuf },
    /// Run `program args...` with the variables in `yaml_file`.
    Run {
        yaml_file: PathBuf,
        program: OsString,
        args: Vec<OsString>,
    },
}

impl Cli {
    /// Resolves the parsed flags and positionals into a single invocation.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Usage` when the YAML file is missing, when `--eval`
    /// is combined with a command, when neither is given, or when `--version`
    /// comes with anything but logging options.
    pub fn into_invocation(self) -> AppResult<Invocation> {
        if self.version {
            let alone = self.yaml_file.is_none() && self.command.is_empty() && !self.eval;
            return if alone {
                Ok(Invocation::Version)
            } else {
                Err(AppError::Usage)
            };
        }

        let Some(yaml_file) = self.yaml_file else {
            return Err(AppError::Usage);
        };

        let mut command = self.command.into_iter();
        match (self.eval, command.next()) {
            (true, None) => Ok(Invocation::Eval { yaml_file }),
            (false, Some(program)) => Ok(Invocation::Run {
                yaml_file,
                program,
                args: command.collect(),
            }),
            (true, Some(_)) | (false, None) => Err(AppError::Usage),
        }
    }
}

/// Parses command-line arguments from an iterator.
///
/// # Errors
///
/// Returns a `clap::Error` if the arguments are invalid or if help
/// information was requested.
pub fn try_parse_from<I, T>(iter: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    Cli::try_parse_from(iter)
}

/// Tries to parse the process's command-line arguments.
///
/// # Errors
///
/// Returns a `clap::Error` if the arguments are invalid or if help
/// information was requested.
pub fn try_parse() -> Result<Cli, clap::Error> {
    Cli::try_parse()
}
