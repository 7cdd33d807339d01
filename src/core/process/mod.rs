// yml2env: YAML-to-environment command launcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Async process spawning and exit-code mapping.
//!
//! ```text
//! ProcessBuilder::new("make")
//!   .args() .env() [.capture_stdout()]
//!   .run()
//!       --> tokio::process::Command
//!       --> ProcessOutput { termination, stdout }
//!       --> exit_code(): n | 128 + signal | 254
//! ```

pub mod builder;
mod runner;
pub mod status;
