// yml2env: YAML-to-environment command launcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::ffi::OsStr;
use std::io::Write as _;

use super::eval::run_eval_command;
use super::run::{merged_env, run_command};
use super::version::version_string;
use crate::error::{AppError, DocumentError};
use crate::vars::Variable;

fn write_yaml(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_version_matches_package() {
    assert_eq!(version_string(), env!("CARGO_PKG_VERSION"));
}

#[test]
fn test_eval_prints_exports() {
    let file = write_yaml("var_from_yaml: value from yaml\nbool_var: true\nint_var: 42\n");
    let mut out = Vec::<u8>::new();
    run_eval_command(file.path(), &mut out).unwrap();

    insta::assert_snapshot!(String::from_utf8(out).unwrap(), @r"
    export 'VAR_FROM_YAML=value from yaml'
    export 'BOOL_VAR=true'
    export 'INT_VAR=42'
    ");
}

#[test]
fn test_eval_invalid_document_writes_nothing() {
    let file = write_yaml("ok: yes\nnested:\n  a: b\n");
    let mut out = Vec::<u8>::new();
    let err = run_eval_command(file.path(), &mut out).unwrap_err();

    assert!(matches!(
        err,
        AppError::Document(ref e) if matches!(**e, DocumentError::InvalidDocument { .. })
    ));
    assert!(out.is_empty());
}

#[test]
fn test_merged_env_keeps_inherited() {
    let env = merged_env(&[Variable::new("YML2ENV_TEST_MERGED", "from yaml")]);
    assert_eq!(env.get("YML2ENV_TEST_MERGED"), Some(OsStr::new("from yaml")));
    assert!(env.get("PATH").is_some() || env.get("Path").is_some());
}

#[cfg(unix)]
#[tokio::test]
async fn test_run_command_sees_variables() {
    let file = write_yaml("var_from_yaml: value from yaml\nbool_var: true\nint_var: 42\n");
    let script = r#"test "$VAR_FROM_YAML" = "value from yaml" && test "$BOOL_VAR" = true && test "$INT_VAR" = 42"#;

    let code = run_command(file.path(), OsStr::new("sh"), &["-c".into(), script.into()])
        .await
        .unwrap();
    assert_eq!(code, 0);
}

#[cfg(unix)]
#[tokio::test]
async fn test_run_command_propagates_exit_code() {
    let file = write_yaml("a: b\n");
    let code = run_command(file.path(), OsStr::new("sh"), &["-c".into(), "exit 3".into()])
        .await
        .unwrap();
    assert_eq!(code, 3);
}

#[cfg(unix)]
#[tokio::test]
async fn test_run_command_missing_yaml_runs_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let marker = dir.path().join("ran");
    let script = format!("touch '{}'", marker.display());

    let err = run_command(
        &dir.path().join("missing.yml"),
        OsStr::new("sh"),
        &["-c".into(), script.into()],
    )
    .await
    .unwrap_err();

    assert!(err.to_string().ends_with("missing.yml does not exist"), "{err}");
    assert!(!marker.exists(), "command must not run");
}

#[tokio::test]
async fn test_run_command_spawn_failure() {
    let file = write_yaml("a: b\n");
    let err = run_command(file.path(), OsStr::new("nonexistent_program_12345"), &[])
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::Process(_)), "{err}");
    assert_eq!(err.exit_code(), 1);
}
