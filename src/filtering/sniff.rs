// src/filtering/sniff.rs

//! Heuristic classification of files as binary or text.
//!
//! The classifier samples a bounded prefix of the file and applies two rules:
//! any null byte means binary, and so does a high fraction of non-ASCII
//! bytes. This is a heuristic, not a content-type authority.

use crate::constants::{BINARY_NON_ASCII_THRESHOLD, SNIFF_BUFFER_SIZE};
use log::warn;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Classifies a byte sample as binary.
///
/// A sample is binary if it contains a 0x00 byte, or if the fraction of
/// bytes greater than 127 strictly exceeds 30%. An empty sample is text.
///
/// # Examples
/// ```
/// use projtext::filtering::is_binary_buffer;
///
/// assert!(!is_binary_buffer(b"plain ASCII text"));
/// assert!(is_binary_buffer(b"has a null \0 byte"));
/// assert!(!is_binary_buffer(b""));
/// ```
pub fn is_binary_buffer(sample: &[u8]) -> bool {
    if sample.is_empty() {
        return false;
    }
    let mut non_ascii = 0usize;
    for &byte in sample {
        if byte == 0 {
            return true;
        }
        if byte > 127 {
            non_ascii += 1;
        }
    }
    (non_ascii as f64 / sample.len() as f64) > BINARY_NON_ASCII_THRESHOLD
}

/// Classifies a file as binary by sampling its first 4096 bytes.
///
/// Fails safe: if the file cannot be opened or read, the failure is logged
/// and the file is treated as text (inclusion is then subject to the normal
/// read-failure handling).
pub fn is_binary_file(path: &Path) -> bool {
    match read_sample(path) {
        Ok(sample) => is_binary_buffer(&sample),
        Err(e) => {
            warn!(
                "Could not sample '{}' for binary detection, treating as text: {}",
                path.display(),
                e
            );
            false
        }
    }
}

/// Reads at most the first `SNIFF_BUFFER_SIZE` bytes of the file.
fn read_sample(path: &Path) -> std::io::Result<Vec<u8>> {
    let file = File::open(path)?;
    let mut sample = Vec::with_capacity(SNIFF_BUFFER_SIZE);
    file.take(SNIFF_BUFFER_SIZE as u64).read_to_end(&mut sample)?;
    Ok(sample)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    /// Builds a sample of `len` bytes where exactly `non_ascii` of them are
    /// above 127 and none are null.
    fn sample_with_non_ascii(len: usize, non_ascii: usize) -> Vec<u8> {
        let mut buf = vec![b'a'; len];
        for slot in buf.iter_mut().take(non_ascii) {
            *slot = 0xC3;
        }
        buf
    }

    #[test]
    fn test_buffer_null_byte_is_binary() {
        assert!(is_binary_buffer(b"text with \0 inside"));
        assert!(is_binary_buffer(&vec![0u8; SNIFF_BUFFER_SIZE]));
    }

    #[test]
    fn test_buffer_ascii_is_text() {
        assert!(!is_binary_buffer(b"fn main() { println!(\"hi\"); }\n"));
    }

    #[test]
    fn test_buffer_empty_is_text() {
        assert!(!is_binary_buffer(b""));
    }

    #[test]
    fn test_buffer_threshold_is_exclusive() {
        // 1270/4096 is just above 31%, 1188/4096 just above 29%. The boundary
        // sits at 0.30 exclusive, so the first is binary and the second text.
        assert!(is_binary_buffer(&sample_with_non_ascii(4096, 1270)));
        assert!(!is_binary_buffer(&sample_with_non_ascii(4096, 1188)));
        // Exactly 30% is still text.
        assert!(!is_binary_buffer(&sample_with_non_ascii(1000, 300)));
        assert!(is_binary_buffer(&sample_with_non_ascii(1000, 301)));
    }

    #[test]
    fn test_file_null_bytes_is_binary() -> std::io::Result<()> {
        let temp = tempdir()?;
        let path = temp.path().join("zeros.bin");
        fs::write(&path, vec![0u8; SNIFF_BUFFER_SIZE])?;
        assert!(is_binary_file(&path));
        Ok(())
    }

    #[test]
    fn test_file_ascii_is_text() -> std::io::Result<()> {
        let temp = tempdir()?;
        let path = temp.path().join("notes.txt");
        fs::write(&path, "Printable ASCII under 4096 bytes.")?;
        assert!(!is_binary_file(&path));
        Ok(())
    }

    #[test]
    fn test_file_empty_is_text() -> std::io::Result<()> {
        let temp = tempdir()?;
        let path = temp.path().join("empty");
        fs::write(&path, "")?;
        assert!(!is_binary_file(&path));
        Ok(())
    }

    #[test]
    fn test_file_only_first_4096_bytes_are_sampled() -> std::io::Result<()> {
        let temp = tempdir()?;
        let path = temp.path().join("late_null.txt");
        let mut content = vec![b'a'; SNIFF_BUFFER_SIZE];
        content.push(0); // beyond the sample window
        fs::write(&path, content)?;
        assert!(!is_binary_file(&path));
        Ok(())
    }

    #[test]
    fn test_missing_file_fails_open_as_text() {
        let path = Path::new("does_not_exist_for_sniffing.bin");
        assert!(!is_binary_file(path));
    }
}
