// yml2env: YAML-to-environment command launcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Environment variable management.
//!
//! # Architecture
//!
//! ```text
//! current_env() --> Env (inherited, ordered)
//!                    .merge(&[Variable])
//!                --> child environment
//! ```
//!
//! - **Case-sensitive** keys on every platform
//! - **No duplicates**: an existing key is replaced where it stands
//! - **OS strings**: non-UTF-8 inherited variables pass through untouched

pub mod container;


/// Captures the current process environment.
#[must_use]
pub fn current_env() -> container::Env {
    container::Env::from_pairs(std::env::vars_os())
}
