// yml2env: YAML-to-environment command launcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Core modules for process and environment management.
//!
//! ```text
//!              core
//!               |
//!         +-----+-----+
//!         v           v
//!        env       process
//!         |           |
//!        Env       Builder
//!       merge      Termination
//! ```

pub mod env;
pub mod process;
