// yml2env: YAML-to-environment command launcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::path::{Path, PathBuf};

use super::{AppError, AppResult, DocumentError, ProcessError};

#[test]
fn test_not_found_display() {
    let err = AppError::from(DocumentError::NotFound {
        path: PathBuf::from("no/such/file.yml"),
    });
    insta::assert_snapshot!(err.to_string(), @"no/such/file.yml does not exist");
}

#[test]
fn test_usage_display() {
    insta::assert_snapshot!(AppError::Usage.to_string(), @"yml2env <YAML file> [<command> | --eval]");
}

#[test]
fn test_invalid_document_at_path() {
    let err = DocumentError::InvalidDocument {
        path: PathBuf::new(),
        message: "value of 'nested' is a mapping".to_string(),
    }
    .at(Path::new("vars.yml"));
    insta::assert_snapshot!(err.to_string(), @"invalid YAML in vars.yml: value of 'nested' is a mapping");
}

#[test]
fn test_spawn_failed_display() {
    let err = ProcessError::SpawnFailed {
        command: "missing-tool".to_string(),
        source: std::io::Error::from(std::io::ErrorKind::NotFound),
    };
    assert!(err.to_string().starts_with("failed to spawn process 'missing-tool': "));
}

#[test]
fn test_every_error_exits_one() {
    let errors = [
        AppError::Usage,
        AppError::from(DocumentError::NotFound {
            path: PathBuf::from("x.yml"),
        }),
        AppError::from(std::io::Error::from(std::io::ErrorKind::BrokenPipe)),
    ];
    for err in errors {
        assert_eq!(err.exit_code(), 1, "{err}");
    }
}

#[test]
fn test_app_error_size() {
    let size = std::mem::size_of::<AppError>();
    assert!(size <= 16, "AppError is {size} bytes, expected <= 16");
}

#[test]
fn test_app_result_size() {
    let size = std::mem::size_of::<AppResult<()>>();
    assert!(size <= 16, "AppResult<()> is {size} bytes, expected <= 16");
}
