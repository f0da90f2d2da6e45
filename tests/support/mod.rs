//! Shared helpers for integration tests

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

pub fn expected(name: &str) -> String {
    fs::read_to_string(fixtures_dir().join("expected").join(name))
        .unwrap_or_else(|e| panic!("Failed to read expected fixture {}: {}", name, e))
}

/// Copies a fixture service directory into `root/<as_name>`
pub fn copy_services(fixture: &str, root: &Path, as_name: &str) {
    let source = fixtures_dir().join(fixture);
    let target = root.join(as_name);
    fs::create_dir_all(&target).expect("Failed to create service directory");

    for entry in fs::read_dir(&source).expect("Failed to list fixture directory") {
        let entry = entry.expect("Failed to read fixture entry");
        fs::copy(entry.path(), target.join(entry.file_name())).expect("Failed to copy fixture");
    }
}

/// Temporary project with the given fixture copied to `services/`
pub fn project_with(fixture: &str) -> TempDir {
    let temp = TempDir::new().expect("Failed to create temp dir");
    copy_services(fixture, temp.path(), "services");
    temp
}
