//! Forbidden word list loading
//!
//! Reads newline-separated word lists to feed the `noForbiddenWords` rule.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable overriding the word list location.
pub const FORBIDDEN_WORDS_PATH_VAR: &str = "PWD_FORBIDDEN_WORDS_PATH";

const DEFAULT_FORBIDDEN_WORDS_PATH: &str = "./assets/forbidden-words.txt";

#[derive(Error, Debug)]
pub enum WordListError {
    #[error("Word list file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read word list file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Word list file is empty")]
    EmptyFile,
}

/// Returns the word list file path.
///
/// Priority:
/// 1. Environment variable `PWD_FORBIDDEN_WORDS_PATH`
/// 2. Default path `./assets/forbidden-words.txt`
pub fn forbidden_words_path() -> PathBuf {
    std::env::var(FORBIDDEN_WORDS_PATH_VAR)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_FORBIDDEN_WORDS_PATH))
}

/// Loads forbidden words from the configured path.
///
/// # Errors
///
/// Returns error if:
/// - File does not exist
/// - File cannot be read
/// - File has no usable words
///
/// # Example
///
/// ```rust,ignore
/// let words = pwd_meter::load_forbidden_words()?;
/// let options = StrengthOptions::default().with_forbidden_words(words);
/// ```
pub fn load_forbidden_words() -> Result<Vec<String>, WordListError> {
    load_forbidden_words_from_path(forbidden_words_path())
}

/// Loads forbidden words from a specific file path.
///
/// Words are trimmed and lowercased. Blank lines and `#` comments are
/// skipped, duplicates keep their first position.
pub fn load_forbidden_words_from_path<P: AsRef<Path>>(
    path: P,
) -> Result<Vec<String>, WordListError> {
    let path = path.as_ref();

    if !path.exists() {
        #[cfg(feature = "tracing")]
        tracing::error!("Word list loading FAILED: FileNotFound {:?}", path);
        return Err(WordListError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;

    let mut seen = HashSet::new();
    let words: Vec<String> = content
        .lines()
        .map(|l| l.trim().to_lowercase())
        .filter(|l| !l.is_empty() && !l.starts_with('#'))
        .filter(|l| seen.insert(l.clone()))
        .collect();

    if words.is_empty() {
        #[cfg(feature = "tracing")]
        tracing::error!("Word list loading FAILED: Empty file {:?}", path);
        return Err(WordListError::EmptyFile);
    }

    #[cfg(feature = "tracing")]
    tracing::info!("Word list loaded: {} words from {:?}", words.len(), path);

    Ok(words)
}
