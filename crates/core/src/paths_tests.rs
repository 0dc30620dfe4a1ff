// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use tempfile::tempdir;

use super::*;

#[test]
fn resolve_joins_fixed_names() {
    let paths = RuntimePaths::resolve("/home/u/.msg");
    assert_eq!(paths.dir, Path::new("/home/u/.msg"));
    assert_eq!(paths.config_path, Path::new("/home/u/.msg/config.toml"));
    assert_eq!(paths.socket_path, Path::new("/home/u/.msg/msgd.sock"));
    assert_eq!(paths.pid_path, Path::new("/home/u/.msg/msgd.pid"));
}

#[test]
fn resolve_is_deterministic() {
    let a = RuntimePaths::resolve("/tmp/base");
    let b = RuntimePaths::resolve("/tmp/base");
    assert_eq!(a, b);
}

#[test]
fn default_base_dir_ends_with_msg() {
    assert!(RuntimePaths::default_base_dir().ends_with(".msg"));
}

#[test]
fn ensure_runtime_dir_creates_recursively() {
    let temp = tempdir().unwrap();
    let paths = RuntimePaths::resolve(temp.path().join("nested/.msg"));

    ensure_runtime_dir(&paths).unwrap();
    assert!(paths.dir.is_dir());
}

#[test]
fn ensure_runtime_dir_is_idempotent() {
    let temp = tempdir().unwrap();
    let paths = RuntimePaths::resolve(temp.path().join(".msg"));

    ensure_runtime_dir(&paths).unwrap();
    ensure_runtime_dir(&paths).unwrap();
    assert!(paths.dir.is_dir());
}

#[cfg(unix)]
#[test]
fn ensure_runtime_dir_is_owner_only() {
    use std::os::unix::fs::PermissionsExt;

    let temp = tempdir().unwrap();
    let paths = RuntimePaths::resolve(temp.path().join(".msg"));

    ensure_runtime_dir(&paths).unwrap();
    let mode = std::fs::metadata(&paths.dir).unwrap().permissions().mode();
    assert_eq!(mode & 0o777, 0o700);
}
