// yml2env: YAML-to-environment command launcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Scalar values and their normalized string form.
//!
//! ```text
//! VariableEntry { key, Scalar }  --normalize()-->  Variable { KEY, "value" }
//!
//! Scalar::String("x")   --> "x"
//! Scalar::Boolean(true) --> "true"
//! Scalar::Integer(42)   --> "42"
//! ```

use std::fmt;

/// An atomic YAML value accepted as a variable value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Scalar {
    String(String),
    Boolean(bool),
    Integer(i64),
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(s) => f.write_str(s),
            Self::Boolean(b) => write!(f, "{b}"),
            Self::Integer(i) => write!(f, "{i}"),
        }
    }
}

impl From<Scalar> for String {
    fn from(scalar: Scalar) -> Self {
        match scalar {
            Scalar::String(s) => s,
            other => other.to_string(),
        }
    }
}

/// A top-level mapping entry as it appears in the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableEntry {
    key: String,
    value: Scalar,
}

impl VariableEntry {
    pub fn new(key: impl Into<String>, value: Scalar) -> Self {
        Self {
            key: key.into(),
            value,
        }
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    #[must_use]
    pub const fn value(&self) -> &Scalar {
        &self.value
    }

    /// Uppercases the key (ASCII only) and coerces the value to a string.
    #[must_use]
    pub fn normalize(self) -> Variable {
        Variable {
            key: self.key.to_ascii_uppercase(),
            value: self.value.into(),
        }
    }
}

/// A normalized variable, ready for the environment or an export line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variable {
    key: String,
    value: String,
}

impl Variable {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}
