//! dirsum-core: Summarize a directory and chat about its files
//!
//! This library extracts text from plain-text and office documents, asks a
//! hosted language model for a one-paragraph summary of each file, and
//! answers questions about the scanned files, re-reading a file in full
//! when a question names it.

pub mod assistant;
pub mod chat;
pub mod client;
pub mod config;
pub mod consts;
pub mod discover;
pub mod extract;
pub mod parse;
pub mod prompt;
pub mod session;
pub mod summarize;

use std::path::{Path, PathBuf};

pub use assistant::Assistant;
pub use chat::{ChatEvent, ChatResponder};
pub use client::{Completer, GeminiClient};
pub use config::Config;
pub use consts::*;
pub use discover::{scan_directory, DiscoveredFile};
pub use extract::{extract, ContentLimit, ExtractError};
pub use session::{ChatTurn, Role, ScanSession, ScannedFile, Summary, Transcript};
pub use summarize::{ProgressEvent, ScanStats, Summarizer};

#[derive(Debug, thiserror::Error)]
pub enum DirsumError {
    #[error("Not a directory: {0}")]
    InvalidDirectory(PathBuf),

    #[error("API key not provided")]
    MissingApiKey,

    #[error("HTTP client error: {0}")]
    Http(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, DirsumError>;

/// Check the two user inputs before any scanning or API work starts.
pub fn validate_inputs(api_key: &str, dir: &Path) -> Result<()> {
    if api_key.trim().is_empty() {
        return Err(DirsumError::MissingApiKey);
    }
    if !dir.is_dir() {
        return Err(DirsumError::InvalidDirectory(dir.to_path_buf()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_inputs() {
        let temp = tempfile::tempdir().unwrap();
        assert!(validate_inputs("key", temp.path()).is_ok());
        assert!(matches!(
            validate_inputs("", temp.path()),
            Err(DirsumError::MissingApiKey)
        ));
        assert!(matches!(
            validate_inputs("key", &temp.path().join("nope")),
            Err(DirsumError::InvalidDirectory(_))
        ));
    }

    #[test]
    fn test_validate_rejects_file_path() {
        let temp = tempfile::tempdir().unwrap();
        let file = temp.path().join("a.txt");
        std::fs::write(&file, "x").unwrap();
        assert!(matches!(
            validate_inputs("key", &file),
            Err(DirsumError::InvalidDirectory(_))
        ));
    }
}
