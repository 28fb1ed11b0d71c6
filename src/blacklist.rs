//! Common-password list: built-in defaults plus an optional file override.

use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::RwLock;

use thiserror::Error;

/// Passwords flagged as commonly used regardless of any override file.
static BUILT_IN: &[&str] = &[
    "password",
    "123456",
    "12345678",
    "qwerty",
    "abc123",
    "monkey",
    "1234567",
    "letmein",
    "trustno1",
    "dragon",
    "baseball",
    "master",
    "michael",
    "shadow",
    "ashley",
    "foobar",
    "123123",
    "654321",
    "superman",
    "qazwsx",
    "admin",
    "administrator",
    "root",
    "login",
    "welcome",
    "password1",
    "password123",
    "passw0rd",
    "p@ssword",
    "iloveyou",
    "princess",
    "sunshine",
    "whatever",
    "ninja",
];

static OVERRIDE_LIST: RwLock<Option<HashSet<String>>> = RwLock::new(None);

#[derive(Error, Debug)]
pub enum BlacklistError {
    #[error("Blacklist file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read blacklist file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Blacklist file is empty")]
    EmptyFile,
}

/// Returns the override file path.
///
/// Priority:
/// 1. Environment variable `PWD_ANALYZER_BLACKLIST_PATH`
/// 2. Default path `./assets/common-passwords.txt`
pub fn get_blacklist_path() -> PathBuf {
    std::env::var("PWD_ANALYZER_BLACKLIST_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("./assets/common-passwords.txt"))
}

/// Loads a larger common-password list from the configured file path.
///
/// Entirely optional: scoring works against the built-in list without it.
///
/// # Errors
///
/// Returns error if:
/// - File does not exist
/// - File cannot be read
/// - File is empty
pub fn init_blacklist() -> Result<usize, BlacklistError> {
    let path = get_blacklist_path();
    init_blacklist_from_path(&path)
}

/// Loads the override list from a specific file, one password per line.
///
/// Idempotent: once a list is loaded, later calls return its size without
/// re-reading the file.
pub fn init_blacklist_from_path<P: AsRef<std::path::Path>>(
    path: P,
) -> Result<usize, BlacklistError> {
    {
        let guard = OVERRIDE_LIST.read().unwrap();
        if let Some(set) = guard.as_ref() {
            return Ok(set.len());
        }
    }

    let path = path.as_ref();

    if !path.exists() {
        #[cfg(feature = "tracing")]
        tracing::error!("Blacklist override load FAILED: file not found {:?}", path);
        return Err(BlacklistError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;

    if content.trim().is_empty() {
        #[cfg(feature = "tracing")]
        tracing::error!("Blacklist override load FAILED: empty file {:?}", path);
        return Err(BlacklistError::EmptyFile);
    }

    let set: HashSet<String> = content
        .lines()
        .map(|l| l.trim().to_lowercase())
        .filter(|l| !l.is_empty())
        .collect();

    let count = set.len();
    {
        let mut guard = OVERRIDE_LIST.write().unwrap();
        *guard = Some(set);
    }

    #[cfg(feature = "tracing")]
    tracing::info!("Blacklist override loaded: {} passwords from {:?}", count, path);

    Ok(count)
}

/// Checks whether a password is commonly used (case-insensitive).
///
/// Consults the override list when one is loaded, the built-in list
/// otherwise. Never fails.
pub fn is_common(password: &str) -> bool {
    let lowered = password.to_lowercase();
    let guard = OVERRIDE_LIST.read().unwrap();
    match guard.as_ref() {
        Some(set) => set.contains(&lowered),
        None => BUILT_IN.contains(&lowered.as_str()),
    }
}

/// Resets the override list for testing purposes.
#[cfg(test)]
pub fn reset_blacklist_for_testing() {
    let mut guard = OVERRIDE_LIST.write().unwrap();
    *guard = None;
}
