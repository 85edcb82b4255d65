//! Denylist management module
//!
//! Loads and queries sets of common passwords that are never accepted.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable pointing to a denylist file.
pub const DENYLIST_PATH_ENV: &str = "PWD_DENYLIST_PATH";

/// Built-in common passwords, used when no denylist file is configured.
pub const DEFAULT_DENYLIST: &[&str] = &[
    "password",
    "password1",
    "password123",
    "123456",
    "12345678",
    "123456789",
    "qwerty",
    "qwerty123",
    "abc123",
    "111111",
    "letmein",
    "welcome",
    "admin",
    "iloveyou",
    "monkey",
    "dragon",
    "football",
    "baseball",
    "sunshine",
    "princess",
];

#[derive(Error, Debug)]
pub enum DenylistError {
    #[error("Denylist file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read denylist file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Denylist file is empty")]
    EmptyFile,
}

/// Returns the denylist file path from `PWD_DENYLIST_PATH`, if set and non-empty.
pub fn get_denylist_path() -> Option<PathBuf> {
    std::env::var_os(DENYLIST_PATH_ENV)
        .filter(|p| !p.is_empty())
        .map(PathBuf::from)
}

/// The built-in denylist, lowercased.
pub fn default_denylist() -> HashSet<String> {
    normalize(DEFAULT_DENYLIST.iter().copied())
}

/// Loads a denylist file with one password per line.
///
/// Lines are trimmed and lowercased; blank lines are skipped.
///
/// # Errors
///
/// Returns error if:
/// - File does not exist
/// - File cannot be read
/// - File has no entries
pub fn load_denylist_from_path<P: AsRef<Path>>(path: P) -> Result<HashSet<String>, DenylistError> {
    let path = path.as_ref();

    if !path.exists() {
        #[cfg(feature = "tracing")]
        tracing::error!("Denylist loading FAILED: file not found {:?}", path);
        return Err(DenylistError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;
    let set = normalize(content.lines());

    if set.is_empty() {
        #[cfg(feature = "tracing")]
        tracing::error!("Denylist loading FAILED: empty file {:?}", path);
        return Err(DenylistError::EmptyFile);
    }

    #[cfg(feature = "tracing")]
    tracing::info!("Denylist loaded: {} passwords from {:?}", set.len(), path);

    Ok(set)
}

/// Case-insensitive exact membership check.
pub fn is_denied(denylist: &HashSet<String>, password: &str) -> bool {
    denylist.contains(&password.to_lowercase())
}

pub(crate) fn normalize<'a, I>(entries: I) -> HashSet<String>
where
    I: IntoIterator<Item = &'a str>,
{
    entries
        .into_iter()
        .map(|l| l.trim().to_lowercase())
        .filter(|l| !l.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Write;
    use tempfile::NamedTempFile;

    /// Helper to safely set env var in tests
    fn set_env(key: &str, value: &str) {
        // SAFETY: serialized tests only
        unsafe { std::env::set_var(key, value); }
    }

    /// Helper to safely remove env var in tests
    fn remove_env(key: &str) {
        // SAFETY: serialized tests only
        unsafe { std::env::remove_var(key); }
    }

    #[test]
    #[serial]
    fn test_get_denylist_path_unset() {
        remove_env(DENYLIST_PATH_ENV);
        assert_eq!(get_denylist_path(), None);
    }

    #[test]
    #[serial]
    fn test_get_denylist_path_empty_is_unset() {
        set_env(DENYLIST_PATH_ENV, "");
        assert_eq!(get_denylist_path(), None);
        remove_env(DENYLIST_PATH_ENV);
    }

    #[test]
    #[serial]
    fn test_get_denylist_path_from_env() {
        let custom_path = "/custom/path/denylist.txt";
        set_env(DENYLIST_PATH_ENV, custom_path);

        assert_eq!(get_denylist_path(), Some(PathBuf::from(custom_path)));

        remove_env(DENYLIST_PATH_ENV);
    }

    #[test]
    fn test_load_file_not_found() {
        let result = load_denylist_from_path("/nonexistent/path/denylist.txt");
        assert!(matches!(result, Err(DenylistError::FileNotFound(_))));
    }

    #[test]
    fn test_load_empty_file() {
        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        writeln!(temp_file, "   ").expect("Failed to write");
        writeln!(temp_file).expect("Failed to write");

        let result = load_denylist_from_path(temp_file.path());
        assert!(matches!(result, Err(DenylistError::EmptyFile)));
    }

    #[test]
    fn test_load_success_normalizes_entries() {
        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        writeln!(temp_file, "  Password123 ").expect("Failed to write");
        writeln!(temp_file, "qwerty").expect("Failed to write");
        writeln!(temp_file, "QWERTY").expect("Failed to write");
        writeln!(temp_file).expect("Failed to write");

        let set = load_denylist_from_path(temp_file.path()).expect("load");
        assert_eq!(set.len(), 2);
        assert!(set.contains("password123"));
        assert!(set.contains("qwerty"));
    }

    #[test]
    fn test_is_denied_case_insensitive() {
        let set = default_denylist();
        assert!(is_denied(&set, "password"));
        assert!(is_denied(&set, "PassWord"));
        assert!(!is_denied(&set, "password!"));
        assert!(!is_denied(&set, "veryuncommonpassword987"));
    }

    #[test]
    fn test_default_denylist_is_lowercase() {
        assert!(default_denylist().iter().all(|p| *p == p.to_lowercase()));
    }
}
