// yml2env: YAML-to-environment command launcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! YAML decoding into an ordered list of entries.
//!
//! ```text
//! bytes --serde_yaml--> RawDocument
//!                        Empty            --> []
//!                        Mapping(k, v)*   --> validate each --> [VariableEntry]
//!                        Other(kind)      --> InvalidDocument
//! ```
//!
//! The top-level mapping is read through a custom visitor rather than
//! `serde_yaml::Mapping` so that document order and duplicate keys survive.

use std::fmt;
use std::path::PathBuf;

use serde::de::{
    self, Deserialize, Deserializer, EnumAccess, IgnoredAny, MapAccess, SeqAccess, VariantAccess,
    Visitor,
};

use super::scalar::{Scalar, VariableEntry};
use crate::error::DocumentError;

/// Top-level shape of a decoded document.
#[derive(Debug)]
enum RawDocument {
    Empty,
    Mapping(Vec<(RawNode, RawNode)>),
    Other(&'static str),
}

/// A key or value of the top-level mapping.
///
/// Only the scalars that can become variables keep their payload; anything
/// else is remembered by kind for the error message.
#[derive(Debug)]
enum RawNode {
    String(String),
    Boolean(bool),
    Integer(i64),
    /// An integer that does not fit in `i64`
    OutOfRange,
    Float,
    Null,
    Sequence,
    Mapping,
    Tagged,
}

impl RawNode {
    const fn describe(&self) -> &'static str {
        match self {
            Self::String(_) => "a string",
            Self::Boolean(_) => "a boolean",
            Self::Integer(_) | Self::OutOfRange => "a number",
            Self::Float => "a float",
            Self::Null => "null",
            Self::Sequence => "a sequence",
            Self::Mapping => "a mapping",
            Self::Tagged => "a tagged value",
        }
    }
}

impl<'de> Deserialize<'de> for RawDocument {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(RawDocumentVisitor)
    }
}

impl<'de> Deserialize<'de> for RawNode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(RawNodeVisitor)
    }
}

struct RawDocumentVisitor;

impl<'de> Visitor<'de> for RawDocumentVisitor {
    type Value = RawDocument;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a mapping of variable names to scalar values")
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(RawDocument::Empty)
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(RawDocument::Empty)
    }

    fn visit_bool<E: de::Error>(self, _: bool) -> Result<Self::Value, E> {
        Ok(RawDocument::Other("a scalar"))
    }

    fn visit_i64<E: de::Error>(self, _: i64) -> Result<Self::Value, E> {
        Ok(RawDocument::Other("a scalar"))
    }

    fn visit_u64<E: de::Error>(self, _: u64) -> Result<Self::Value, E> {
        Ok(RawDocument::Other("a scalar"))
    }

    fn visit_i128<E: de::Error>(self, _: i128) -> Result<Self::Value, E> {
        Ok(RawDocument::Other("a scalar"))
    }

    fn visit_u128<E: de::Error>(self, _: u128) -> Result<Self::Value, E> {
        Ok(RawDocument::Other("a scalar"))
    }

    fn visit_f64<E: de::Error>(self, _: f64) -> Result<Self::Value, E> {
        Ok(RawDocument::Other("a scalar"))
    }

    fn visit_str<E: de::Error>(self, _: &str) -> Result<Self::Value, E> {
        Ok(RawDocument::Other("a scalar"))
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        while seq.next_element::<IgnoredAny>()?.is_some() {}
        Ok(RawDocument::Other("a sequence"))
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
        while let Some(entry) = map.next_entry::<RawNode, RawNode>()? {
            entries.push(entry);
        }
        Ok(RawDocument::Mapping(entries))
    }

    fn visit_enum<A>(self, data: A) -> Result<Self::Value, A::Error>
    where
        A: EnumAccess<'de>,
    {
        skip_tagged(data)?;
        Ok(RawDocument::Other("a tagged value"))
    }
}

struct RawNodeVisitor;

impl<'de> Visitor<'de> for RawNodeVisitor {
    type Value = RawNode;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("any YAML node")
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(RawNode::Null)
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(RawNode::Null)
    }

    fn visit_bool<E: de::Error>(self, b: bool) -> Result<Self::Value, E> {
        Ok(RawNode::Boolean(b))
    }

    fn visit_i64<E: de::Error>(self, n: i64) -> Result<Self::Value, E> {
        Ok(RawNode::Integer(n))
    }

    fn visit_u64<E: de::Error>(self, n: u64) -> Result<Self::Value, E> {
        Ok(i64::try_from(n).map_or(RawNode::OutOfRange, RawNode::Integer))
    }

    fn visit_i128<E: de::Error>(self, n: i128) -> Result<Self::Value, E> {
        Ok(i64::try_from(n).map_or(RawNode::OutOfRange, RawNode::Integer))
    }

    fn visit_u128<E: de::Error>(self, n: u128) -> Result<Self::Value, E> {
        Ok(i64::try_from(n).map_or(RawNode::OutOfRange, RawNode::Integer))
    }

    fn visit_f64<E: de::Error>(self, _: f64) -> Result<Self::Value, E> {
        Ok(RawNode::Float)
    }

    fn visit_str<E: de::Error>(self, s: &str) -> Result<Self::Value, E> {
        Ok(RawNode::String(s.to_owned()))
    }

    fn visit_string<E: de::Error>(self, s: String) -> Result<Self::Value, E> {
        Ok(RawNode::String(s))
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        while seq.next_element::<IgnoredAny>()?.is_some() {}
        Ok(RawNode::Sequence)
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        while map.next_entry::<IgnoredAny, IgnoredAny>()?.is_some() {}
        Ok(RawNode::Mapping)
    }

    fn visit_enum<A>(self, data: A) -> Result<Self::Value, A::Error>
    where
        A: EnumAccess<'de>,
    {
        skip_tagged(data)?;
        Ok(RawNode::Tagged)
    }
}

/// Consumes a `!tag value` node, which serde_yaml presents as an enum.
fn skip_tagged<'de, A>(data: A) -> Result<(), A::Error>
where
    A: EnumAccess<'de>,
{
    let (IgnoredAny, variant) = data.variant::<IgnoredAny>()?;
    variant.newtype_variant::<IgnoredAny>()?;
    Ok(())
}

/// Decodes a YAML document into entries, in document order.
///
/// The returned errors carry an empty path; callers attach it with
/// [`DocumentError::at`].
///
/// # Errors
///
/// Returns `DocumentError::Parse` for malformed YAML and
/// `DocumentError::InvalidDocument` when the document is not a flat mapping
/// of string keys to string, boolean or integer values.
pub fn parse_document(bytes: &[u8]) -> Result<Vec<VariableEntry>, DocumentError> {
    let raw = match serde_yaml::from_slice::<RawDocument>(bytes) {
        Ok(raw) => raw,
        // A stream with no document at all is an empty set of variables.
        Err(_) if serde_yaml::Deserializer::from_slice(bytes).next().is_none() => {
            RawDocument::Empty
        }
        Err(source) => {
            return Err(DocumentError::Parse {
                path: PathBuf::new(),
                source,
            });
        }
    };

    match raw {
        RawDocument::Empty => Ok(Vec::new()),
        RawDocument::Other(kind) => {
            Err(invalid(format!("top level must be a mapping, found {kind}")))
        }
        RawDocument::Mapping(entries) => entries
            .into_iter()
            .enumerate()
            .map(|(index, (key, value))| validate_entry(index, key, value))
            .collect(),
    }
}

fn validate_entry(
    index: usize,
    key: RawNode,
    value: RawNode,
) -> Result<VariableEntry, DocumentError> {
    let key = match key {
        RawNode::String(key) => key,
        other => {
            return Err(invalid(format!(
                "key #{} is {}, expected a string",
                index + 1,
                other.describe()
            )));
        }
    };

    let scalar = match value {
        RawNode::String(s) => Scalar::String(s),
        RawNode::Boolean(b) => Scalar::Boolean(b),
        RawNode::Integer(i) => Scalar::Integer(i),
        RawNode::Float => return Err(invalid(format!("value of '{key}' is a float"))),
        RawNode::OutOfRange => {
            return Err(invalid(format!("value of '{key}' is out of integer range")));
        }
        other => {
            return Err(invalid(format!(
                "value of '{key}' is {}, expected a scalar",
                other.describe()
            )));
        }
    };

    Ok(VariableEntry::new(key, scalar))
}

fn invalid(message: String) -> DocumentError {
    DocumentError::InvalidDocument {
        path: PathBuf::new(),
        message,
    }
}
