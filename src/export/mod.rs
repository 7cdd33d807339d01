// yml2env: YAML-to-environment command launcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Shell export statements for `eval "$(yml2env vars.yml --eval)"`.
//!
//! ```text
//! Variable { KEY, value }  -->  export 'KEY=value'
//! embedded '               -->  '\''
//! ```

use std::borrow::Cow;
use std::io::{self, Write};

use crate::vars::Variable;

/// Formats one variable as a single-quoted `export` statement.
#[must_use]
pub fn export_line(var: &Variable) -> String {
    format!(
        "export '{}={}'",
        escape_single_quoted(var.key()),
        escape_single_quoted(var.value())
    )
}

/// Writes one export line per variable, in order.
///
/// # Errors
///
/// Returns any error raised by the writer.
pub fn render_exports<'a, I, W>(vars: I, mut out: W) -> io::Result<()>
where
    I: IntoIterator<Item = &'a Variable>,
    W: Write,
{
    for var in vars {
        writeln!(out, "{}", export_line(var))?;
    }
    out.flush()
}

fn escape_single_quoted(s: &str) -> Cow<'_, str> {
    if s.contains('\'') {
        Cow::Owned(s.replace('\'', r"'\''"))
    } else {
        Cow::Borrowed(s)
    }
}
