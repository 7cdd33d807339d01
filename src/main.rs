// yml2env: YAML-to-environment command launcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::try_parse() --> Logging --> Invocation Dispatch
//!   Run | Eval | Version
//!   errors --> stderr, exit 1
//! ```

use std::process::ExitCode;

use clap::error::ErrorKind;
use yml2env::cli::global::GlobalOptions;
use yml2env::cli::{self, Invocation};
use yml2env::cmd::eval::run_eval_command;
use yml2env::cmd::run::run_command;
use yml2env::cmd::version::version_string;
use yml2env::error::{AppError, AppResult};
use yml2env::logging::init_logging;
use yml2env::logging::{LogConfig, LogLevel};

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = match cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if e.kind() == ErrorKind::DisplayHelp => {
            let _ = e.print();
            return ExitCode::SUCCESS;
        }
        Err(_) => return report(&AppError::Usage),
    };

    let log_config = build_log_config(&cli.global);
    let _log_guard = match init_logging(&log_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    match dispatch_invocation(cli.into_invocation()).await {
        Ok(code) => exit_code(code),
        Err(e) => report(&e),
    }
}

fn build_log_config(global: &GlobalOptions) -> LogConfig {
    let console_level = global
        .log_level
        .and_then(LogLevel::from_u8)
        .unwrap_or(LogLevel::WARN);

    let file_level = global
        .file_log_level
        .and_then(LogLevel::from_u8)
        .unwrap_or(console_level);

    LogConfig::builder()
        .with_console_level(console_level)
        .with_file_level(file_level)
        .maybe_with_log_file(global.log_file.as_ref().map(|p| p.display().to_string()))
        .build()
}

async fn dispatch_invocation(invocation: AppResult<Invocation>) -> AppResult<i32> {
    match invocation? {
        Invocation::Version => {
            println!("{}", version_string());
            Ok(0)
        }
        Invocation::Eval { yaml_file } => {
            run_eval_command(&yaml_file, std::io::stdout().lock())?;
            Ok(0)
        }
        Invocation::Run {
            yaml_file,
            program,
            args,
        } => run_command(&yaml_file, &program, &args).await,
    }
}

fn report(err: &AppError) -> ExitCode {
    eprintln!("{err}");
    exit_code(err.exit_code())
}

/// Truncates to the low byte, as the OS does for a process exit status.
fn exit_code(code: i32) -> ExitCode {
    ExitCode::from(u8::try_from(code & 0xff).unwrap_or(u8::MAX))
}
