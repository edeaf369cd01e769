//! Output file naming conventions.
//!
//! | Operation  | Input requirement            | Output                         |
//! |------------|------------------------------|--------------------------------|
//! | compress   | not `*_compressed.txt`       | `<base>_compressed.txt`        |
//! | decompress | `*_compressed.txt`           | `<stem>_decompressed.txt`      |
//! | encrypt    | any                          | `<base>_<algorithm>.enc`       |
//! | decrypt    | `*_<algorithm>.enc`          | `<stem>.dec.txt`               |
//!
//! `<base>` is the input without its last extension; `<stem>` is the input
//! with the required suffix removed.

use crate::common::constants::{
    COMPRESSED_SUFFIX, DECOMPRESSED_SUFFIX, DECRYPTED_SUFFIX, ENCRYPTED_EXTENSION,
};
use crate::crypto::Algorithm;

/// Violations of the naming conventions.
//
// // 违反文件命名约定时产生的错误。
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum NamingError {
    /// Compressing a file that already carries the compressed marker.
    #[error("File '{0}' is already compressed.")]
    AlreadyEncoded(String),

    /// Decompressing a file that already carries the decompressed marker.
    #[error("File '{0}' is already decompressed.")]
    AlreadyDecoded(String),

    /// Decompressing a file without the compressed marker.
    #[error("Only files with a '_compressed.txt' suffix can be decompressed, got '{0}'.")]
    WrongSuffix(String),

    /// Decrypting a file whose suffix does not match the algorithm.
    #[error("File '{name}' does not match the expected encrypted file format for '{algorithm}' (expected suffix '{expected}').")]
    SuffixMismatch {
        name: String,
        algorithm: Algorithm,
        expected: String,
    },
}

/// Strips the last extension of `name`.
///
/// Only the final path component is searched, and a leading dot does not
/// start an extension: `docs.v2/notes` and `.profile` are returned unchanged.
pub fn base_name(name: &str) -> &str {
    let file_start = name.rfind(['/', '\\']).map_or(0, |i| i + 1);
    match name[file_start..].rfind('.') {
        Some(dot) if dot > 0 => &name[..file_start + dot],
        _ => name,
    }
}

/// Output name for compressing `name`.
pub fn compressed_name(name: &str) -> Result<String, NamingError> {
    if name.ends_with(COMPRESSED_SUFFIX) {
        return Err(NamingError::AlreadyEncoded(name.to_string()));
    }
    Ok(format!("{}{}", base_name(name), COMPRESSED_SUFFIX))
}

/// Output name for decompressing `name`.
pub fn decompressed_name(name: &str) -> Result<String, NamingError> {
    if name.ends_with(DECOMPRESSED_SUFFIX) {
        return Err(NamingError::AlreadyDecoded(name.to_string()));
    }
    let stem = name
        .strip_suffix(COMPRESSED_SUFFIX)
        .ok_or_else(|| NamingError::WrongSuffix(name.to_string()))?;
    Ok(format!("{}{}", stem, DECOMPRESSED_SUFFIX))
}

/// `_<algorithm>.enc`
pub fn encrypted_suffix(algorithm: Algorithm) -> String {
    format!("_{}{}", algorithm.name(), ENCRYPTED_EXTENSION)
}

/// Output name for encrypting `name` with `algorithm`.
pub fn encrypted_name(name: &str, algorithm: Algorithm) -> String {
    format!("{}{}", base_name(name), encrypted_suffix(algorithm))
}

/// Output name for decrypting `name` with `algorithm`.
pub fn decrypted_name(name: &str, algorithm: Algorithm) -> Result<String, NamingError> {
    let expected = encrypted_suffix(algorithm);
    let stem = name
        .strip_suffix(expected.as_str())
        .ok_or_else(|| NamingError::SuffixMismatch {
            name: name.to_string(),
            algorithm,
            expected: expected.clone(),
        })?;
    Ok(format!("{}{}", stem, DECRYPTED_SUFFIX))
}
