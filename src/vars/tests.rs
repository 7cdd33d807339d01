// yml2env: YAML-to-environment command launcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Tests for loading, parsing and normalizing variables.

use std::io::Write as _;
use std::path::Path;

use super::{Scalar, Variable, VariableEntry, load_document, load_variables, parse_document};
use crate::error::DocumentError;

fn write_yaml(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

fn render(vars: &[Variable]) -> String {
    vars.iter()
        .map(|v| format!("{}={}", v.key(), v.value()))
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn test_parse_preserves_document_order() {
    let entries = parse_document(b"zeta: last\nalpha: first\nmiddle: m\n").unwrap();
    let keys: Vec<_> = entries.iter().map(VariableEntry::key).collect();
    assert_eq!(keys, ["zeta", "alpha", "middle"]);
}

#[test]
fn test_parse_scalar_kinds() {
    let entries =
        parse_document(b"name: value from yaml\nflag: true\nanswer: 42\nquoted: \"42\"\n").unwrap();
    let values: Vec<_> = entries.iter().map(|e| e.value().clone()).collect();
    assert_eq!(
        values,
        [
            Scalar::String("value from yaml".to_string()),
            Scalar::Boolean(true),
            Scalar::Integer(42),
            Scalar::String("42".to_string()),
        ]
    );
}

#[test]
fn test_parse_keeps_duplicate_keys() {
    let entries = parse_document(b"var: one\nother: x\nvar: two\n").unwrap();
    let pairs: Vec<_> = entries
        .iter()
        .map(|e| (e.key(), e.value().to_string()))
        .collect();
    insta::assert_debug_snapshot!(pairs, @r#"
    [
        (
            "var",
            "one",
        ),
        (
            "other",
            "x",
        ),
        (
            "var",
            "two",
        ),
    ]
    "#);
}

#[test]
fn test_parse_empty_document() {
    assert!(parse_document(b"").unwrap().is_empty());
    assert!(parse_document(b"# only a comment\n").unwrap().is_empty());
    assert!(parse_document(b"---\n").unwrap().is_empty());
}

#[test]
fn test_parse_rejects_nested_mapping() {
    let err = parse_document(b"plain: ok\nnested:\n  inner: value\n").unwrap_err();
    insta::assert_snapshot!(
        err.at(Path::new("vars.yml")).to_string(),
        @"invalid YAML in vars.yml: value of 'nested' is a mapping, expected a scalar"
    );
}

#[test]
fn test_parse_rejects_sequence_value() {
    let err = parse_document(b"list:\n  - a\n  - b\n").unwrap_err();
    assert!(matches!(err, DocumentError::InvalidDocument { .. }), "{err}");
}

#[test]
fn test_parse_rejects_non_string_key() {
    let err = parse_document(b"1: one\n").unwrap_err();
    insta::assert_snapshot!(
        err.at(Path::new("vars.yml")).to_string(),
        @"invalid YAML in vars.yml: key #1 is a number, expected a string"
    );
}

#[test]
fn test_parse_rejects_null_and_float() {
    for doc in ["empty:\n", "ratio: 1.5\n"] {
        let err = parse_document(doc.as_bytes()).unwrap_err();
        assert!(
            matches!(err, DocumentError::InvalidDocument { .. }),
            "{doc:?}: {err}"
        );
    }
}

#[test]
fn test_parse_integer_range_boundaries() {
    let entries = parse_document(b"max: 9223372036854775807\nmin: -9223372036854775808\n").unwrap();
    let values: Vec<_> = entries.iter().map(|e| e.value().clone()).collect();
    assert_eq!(values, [Scalar::Integer(i64::MAX), Scalar::Integer(i64::MIN)]);

    // Just past i64, past u64, and below i64::MIN.
    for doc in [
        "k: 9223372036854775808\n",
        "k: 99999999999999999999\n",
        "k: -9223372036854775809\n",
    ] {
        let err = parse_document(doc.as_bytes()).unwrap_err();
        assert!(
            matches!(
                err,
                DocumentError::InvalidDocument { ref message, .. }
                    if message == "value of 'k' is out of integer range"
            ),
            "{doc:?}: {err}"
        );
    }
}

#[test]
fn test_parse_rejects_tagged_value() {
    let err = parse_document(b"k: !custom value\n").unwrap_err();
    insta::assert_snapshot!(
        err.at(Path::new("vars.yml")).to_string(),
        @"invalid YAML in vars.yml: value of 'k' is a tagged value, expected a scalar"
    );
}

#[test]
fn test_parse_rejects_top_level_sequence() {
    let err = parse_document(b"- a\n- b\n").unwrap_err();
    assert!(matches!(err, DocumentError::InvalidDocument { .. }), "{err}");
}

#[test]
fn test_parse_malformed_yaml() {
    let err = parse_document(b"key: [unclosed\n").unwrap_err();
    assert!(matches!(err, DocumentError::Parse { .. }), "{err}");
}

#[test]
fn test_normalize_entry() {
    let cases = [
        VariableEntry::new("var_from_yaml", Scalar::String("value from yaml".into())),
        VariableEntry::new("Enabled", Scalar::Boolean(true)),
        VariableEntry::new("disabled", Scalar::Boolean(false)),
        VariableEntry::new("count", Scalar::Integer(42)),
        VariableEntry::new("offset", Scalar::Integer(-7)),
    ];
    let vars: Vec<_> = cases.into_iter().map(VariableEntry::normalize).collect();
    insta::assert_snapshot!(render(&vars), @r"
    VAR_FROM_YAML=value from yaml
    ENABLED=true
    DISABLED=false
    COUNT=42
    OFFSET=-7
    ");
}

#[test]
fn test_normalize_uppercases_ascii_only() {
    let var = VariableEntry::new("straße", Scalar::String("x".into())).normalize();
    assert_eq!(var.key(), "STRAßE");
}

#[test]
fn test_load_variables_from_file() {
    let file = write_yaml("var_from_yaml: value from yaml\nbool_var: true\nint_var: 42\n");
    let vars = load_variables(file.path()).unwrap();
    assert_eq!(
        vars,
        [
            Variable::new("VAR_FROM_YAML", "value from yaml"),
            Variable::new("BOOL_VAR", "true"),
            Variable::new("INT_VAR", "42"),
        ]
    );
}

#[test]
fn test_load_document_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("no-such-file.yml");
    let err = load_document(&path).unwrap_err();
    assert!(matches!(err, DocumentError::NotFound { .. }));
    assert_eq!(err.to_string(), format!("{} does not exist", path.display()));
}

#[test]
fn test_load_document_directory_is_read_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_document(dir.path()).unwrap_err();
    assert!(matches!(err, DocumentError::Read { .. }), "{err}");
}

#[test]
fn test_load_variables_parse_error_carries_path() {
    let file = write_yaml("key: [unclosed\n");
    let err = load_variables(file.path()).unwrap_err();
    assert!(
        err.to_string()
            .starts_with(&format!("could not parse {}", file.path().display())),
        "{err}"
    );
}
