// tests/filter_binary.rs

mod common;

use assert_cmd::prelude::*;
use common::{projtext_cmd, read_export};
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_null_bytes_mark_binary() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    fs::write(temp.path().join("image.dat"), vec![0u8; 4096])?;
    fs::write(temp.path().join("notes.txt"), "plain text")?;

    projtext_cmd()
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Files processed: 1"))
        .stdout(predicate::str::contains("Files skipped (binary): 1"));

    let export = read_export(temp.path());
    assert!(export.contains("Filename: ./notes.txt"));
    assert!(!export.contains("image.dat"));

    temp.close()?;
    Ok(())
}

#[test]
fn test_non_ascii_ratio_boundary() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;

    // "é" encodes to two non-ASCII bytes, keeping the file valid UTF-8.
    // 155 of them in 1000 bytes: 31% non-ASCII, over the threshold.
    let over = format!("{}{}", "é".repeat(155), "a".repeat(690));
    assert_eq!(over.len(), 1000);
    fs::write(temp.path().join("over.dat"), over)?;

    // 145 in 1000 bytes: 29% non-ASCII, under the threshold.
    let under = format!("{}{}", "é".repeat(145), "a".repeat(710));
    assert_eq!(under.len(), 1000);
    fs::write(temp.path().join("under.dat"), under)?;

    projtext_cmd()
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Files skipped (binary): 1"));

    let export = read_export(temp.path());
    assert!(export.contains("Filename: ./under.dat"));
    assert!(!export.contains("Filename: ./over.dat"));

    temp.close()?;
    Ok(())
}

#[test]
fn test_null_byte_beyond_sample_window_is_missed() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;

    // Only the first 4096 bytes are sampled. A null byte after that does not
    // flip the verdict, and the file is included as text.
    let mut content = vec![b'x'; 5000];
    content[4500] = 0;
    fs::write(temp.path().join("late_null.txt"), content)?;

    projtext_cmd()
        .arg(temp.path())
        .arg("--no-file")
        .assert()
        .success()
        .stdout(predicate::str::contains("Files processed: 1"))
        .stdout(predicate::str::contains("(binary)").not());

    temp.close()?;
    Ok(())
}
