// yml2env: YAML-to-environment command launcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Library root.
//!
//! # Crate Architecture
//!
//! ```text
//!                        main.rs
//!                           |
//!                +----------+----------+
//!                v                     v
//!             cli (clap)          cmd (handlers)
//!             Invocation        run / eval / version
//!                                      |
//!                     +----------------+--------------+
//!                     v                               v
//!     ,-------------------------------,     ,------------------,
//!     |             vars              |     |      export      |
//!     | load -> parse -> normalize    |     | export 'K=V'     |
//!     '---------------+---------------'     '------------------'
//!                     v
//!   +-----------------------------------------+
//!   |  core   env (merge), process (spawn,    |
//!   |         exit-code mapping)              |
//!   +-----------------------------------------+
//!   |  foundation   error, logging            |
//!   +-----------------------------------------+
//! ```

pub mod cli;
pub mod cmd;
pub mod core;
pub mod error;
pub mod export;
pub mod logging;
pub mod vars;
