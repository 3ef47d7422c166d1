// tests/common.rs

use std::fs;
use std::path::Path;
use std::process::Command;

// Helper function to get the binary command.
// Points the settings directory at a path that never exists, so the run is
// isolated from any per-user config.toml on the developer's machine.
#[allow(dead_code)] // This is used by many integration tests, but not all.
pub fn projtext_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("projtext"));
    cmd.env(
        "PROJTEXT_CONFIG_DIR",
        std::env::temp_dir().join("projtext-tests-no-settings"),
    );
    cmd
}

// Reads the content of the export file a run created in `root`.
// Panics if there is not exactly one export file.
#[allow(dead_code)]
pub fn read_export(root: &Path) -> String {
    let mut exports: Vec<_> = fs::read_dir(root)
        .unwrap()
        .filter_map(|e| e.ok())
        .map(|e| e.file_name().to_string_lossy().into_owned())
        .filter(|name| name.starts_with("export_") && name.ends_with(".txt"))
        .collect();
    assert_eq!(exports.len(), 1, "expected exactly one export file, found {exports:?}");
    fs::read_to_string(root.join(exports.remove(0))).unwrap()
}
