// yml2env: YAML-to-environment command launcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Version reporting.

/// Contents of the packaged `version` file.
const VERSION_FILE: &str = include_str!("../../version");

/// The version printed by `--version`.
#[must_use]
pub fn version_string() -> &'static str {
    VERSION_FILE.trim()
}
