// yml2env: YAML-to-environment command launcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Ordered environment table.
//!
//! # Architecture
//!
//! ```text
//! Env: Vec<(OsString, OsString)> in inheritance order
//! set(KEY, v):  KEY present (exact match) --> replace value in place
//!               KEY absent                --> append
//! merge(vars):  set() for each variable, in document order
//! ```

use std::ffi::{OsStr, OsString};

use crate::vars::Variable;

/// An ordered set of environment variables with unique keys.
///
/// Keys are compared case-sensitively and byte-for-byte.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Env {
    vars: Vec<(OsString, OsString)>,
}

impl Env {
    #[must_use]
    pub const fn new() -> Self {
        Self { vars: Vec::new() }
    }

    /// Creates an environment from `(key, value)` pairs, keeping their order.
    ///
    /// A key repeated in `vars` keeps its first position and its last value.
    pub fn from_pairs<I, K, V>(vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<OsString>,
        V: Into<OsString>,
    {
        let mut env = Self::new();
        for (key, value) in vars {
            env.set(key, value);
        }
        env
    }

    /// Sets an environment variable, replacing an existing value in place.
    pub fn set(&mut self, key: impl Into<OsString>, value: impl Into<OsString>) -> &mut Self {
        let key = key.into();
        let value = value.into();

        match self.vars.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = value,
            None => self.vars.push((key, value)),
        }

        self
    }

    /// Applies normalized variables in order; later duplicates win.
    pub fn merge<'a>(&mut self, vars: impl IntoIterator<Item = &'a Variable>) -> &mut Self {
        for var in vars {
            self.set(var.key(), var.value());
        }
        self
    }

    /// Gets an environment variable value.
    #[must_use]
    pub fn get(&self, key: impl AsRef<OsStr>) -> Option<&OsStr> {
        let key = key.as_ref();
        self.vars
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_os_str())
    }

    /// Returns an iterator over environment variables, in table order.
    pub fn iter(&self) -> impl Iterator<Item = (&OsStr, &OsStr)> {
        self.vars.iter().map(|(k, v)| (k.as_os_str(), v.as_os_str()))
    }

    /// Returns true if no variables are set.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.vars.len()
    }
}
