//! Text extraction from files
//!
//! Dispatches on the lowercased extension to a format-specific reader.
//! Every failure, including unsupported formats, comes back as an
//! [`ExtractError`] so a single bad file never aborts a scan or chat turn.

use std::path::Path;

use crate::discover::extension_of;
use crate::parse;
use crate::SUMMARY_CHAR_LIMIT;

/// Plain text and source/config extensions read directly as UTF-8.
const TEXT_EXTENSIONS: &[&str] = &[
    // Plain text
    "txt", "md", "log",
    // Code
    "py", "java", "js", "sh", "bat",
    // Web
    "html", "css",
    // Config and data
    "json", "xml", "csv", "ini", "cfg",
];

/// Extraction strategy for a file, chosen from its extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Text,
    Pdf,
    Presentation,
    Spreadsheet,
    Document,
}

impl FileKind {
    /// Detect the strategy from a file extension (case-insensitive).
    pub fn from_extension(ext: &str) -> Option<Self> {
        let ext = ext.to_lowercase();
        match ext.as_str() {
            "pdf" => Some(Self::Pdf),
            "pptx" => Some(Self::Presentation),
            "xlsx" | "xls" => Some(Self::Spreadsheet),
            "docx" => Some(Self::Document),
            e if TEXT_EXTENSIONS.contains(&e) => Some(Self::Text),
            _ => None,
        }
    }

    pub fn from_path(path: &Path) -> Option<Self> {
        Self::from_extension(&extension_of(path))
    }
}

/// How much of a file's text to return.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentLimit {
    /// The whole text, regardless of size
    Full,
    /// At most this many characters from the start
    Chars(usize),
}

impl ContentLimit {
    /// The cap used for the summarization pass.
    pub fn summary() -> Self {
        Self::Chars(SUMMARY_CHAR_LIMIT)
    }
}

/// Why a file's text could not be produced.
///
/// `Display` is the bare message shown to the user.
#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    #[error("Unsupported file type")]
    Unsupported,

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Pdf(String),

    #[error("{0}")]
    Archive(#[from] zip::result::ZipError),

    #[error("{0}")]
    Xml(String),

    #[error("{0}")]
    Spreadsheet(#[from] calamine::Error),
}

/// Extract text content from a file, capped according to `limit`.
pub fn extract(path: &Path, limit: ContentLimit) -> Result<String, ExtractError> {
    let kind = FileKind::from_path(path).ok_or(ExtractError::Unsupported)?;

    let text = match kind {
        FileKind::Text => read_text(path)?,
        FileKind::Pdf => parse::pdf_text(path)?,
        FileKind::Presentation => parse::presentation_text(path)?,
        FileKind::Spreadsheet => parse::spreadsheet_text(path)?,
        FileKind::Document => parse::document_text(path)?,
    };

    tracing::debug!(
        "Extracted {} chars from {} ({:?})",
        text.chars().count(),
        path.display(),
        kind
    );

    Ok(match limit {
        ContentLimit::Full => text,
        ContentLimit::Chars(max) => truncate_chars(text, max),
    })
}

/// Read a text file, replacing invalid UTF-8 and normalizing line endings.
pub fn read_text(path: &Path) -> Result<String, ExtractError> {
    let bytes = std::fs::read(path)?;
    let text = String::from_utf8_lossy(&bytes);
    Ok(text.replace("\r\n", "\n").replace('\r', "\n"))
}

/// Keep the first `max` characters (not bytes) of `text`.
pub fn truncate_chars(mut text: String, max: usize) -> String {
    if let Some((idx, _)) = text.char_indices().nth(max) {
        text.truncate(idx);
    }
    text
}
