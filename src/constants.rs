// src/constants.rs

/// Prefix of generated export filenames.
pub const EXPORT_FILE_PREFIX: &str = "export_";

/// Extension of generated export filenames (without leading dot).
pub const EXPORT_FILE_EXT: &str = "txt";

/// Timestamp format embedded in export filenames: second precision, no
/// separator punctuation (e.g. `export_20240115143022.txt`).
pub const EXPORT_TIMESTAMP_FORMAT: &str = "%Y%m%d%H%M%S";

/// Separator line between the header fields of an export record.
pub const RECORD_SEPARATOR: &str = ">----------<";

/// Conventional name of the root-level ignore file.
pub const IGNORE_FILE_NAME: &str = ".gitignore";

/// Maximum number of bytes sampled by the binary sniffer.
pub const SNIFF_BUFFER_SIZE: usize = 4096;

/// Fraction of high (>127) bytes above which a sample is classified as
/// binary. The boundary is exclusive: exactly 30% is still text.
pub const BINARY_NON_ASCII_THRESHOLD: f64 = 0.30;
