//! Scan results and chat transcript for one running session

use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::discover::DiscoveredFile;
use crate::{EMPTY_MARKER, UNREADABLE_MARKER};

/// What the summarization pass produced for a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Summary {
    /// Text returned by the completion client (which may itself be an error marker)
    Generated(String),
    /// Extraction failed; the reason is kept for logs, not for display
    Unreadable { reason: String },
    /// Extraction succeeded but there was nothing to summarize
    Empty,
}

impl Summary {
    /// Display text: the model output, or a fixed marker.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Generated(text) => text,
            Self::Unreadable { .. } => UNREADABLE_MARKER,
            Self::Empty => EMPTY_MARKER,
        }
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Summary {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// One file in the current scan.
#[derive(Debug, Clone, Serialize)]
pub struct ScannedFile {
    /// Key used for lookup and mention detection
    pub name: String,
    pub path: PathBuf,
    pub summary: Summary,
    #[serde(skip)]
    relative: String,
}

/// The current scan's files, in the order they were summarized.
///
/// Reset wholesale at the start of every scan; never merged. Names are
/// unique within a scan.
#[derive(Debug, Default)]
pub struct ScanSession {
    root: Option<PathBuf>,
    files: Vec<ScannedFile>,
    index: HashMap<String, usize>,
}

impl ScanSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop all results and start over for `root`.
    pub fn reset(&mut self, root: &Path) {
        self.root = Some(root.to_path_buf());
        self.files.clear();
        self.index.clear();
    }

    pub fn root(&self) -> Option<&Path> {
        self.root.as_deref()
    }

    /// Record a summarized file and return the key it was stored under.
    ///
    /// A file keeps its bare name unless another file already holds it, in
    /// which case it is keyed by its root-relative path. A file directly
    /// under the root always wins its bare name: a nested file that took it
    /// first is moved to its own relative path.
    pub fn insert(&mut self, file: &DiscoveredFile, summary: Summary) -> String {
        let name = self.claim_name(file);

        self.index.insert(name.clone(), self.files.len());
        self.files.push(ScannedFile {
            name: name.clone(),
            path: file.path.clone(),
            summary,
            relative: file.relative.clone(),
        });
        name
    }

    fn claim_name(&mut self, file: &DiscoveredFile) -> String {
        let Some(&holder) = self.index.get(&file.name) else {
            return file.name.clone();
        };

        let held = &self.files[holder];
        let top_level = file.relative == file.name;
        if top_level && held.relative != held.name && !self.index.contains_key(&held.relative) {
            let moved = held.relative.clone();
            tracing::debug!("Filename {} now keyed as {}", file.name, moved);
            self.index.remove(&file.name);
            self.index.insert(moved.clone(), holder);
            self.files[holder].name = moved;
            return file.name.clone();
        }

        tracing::debug!(
            "Filename {} already scanned, keying {} by relative path",
            file.name,
            file.path.display()
        );
        let mut name = file.relative.clone();
        let mut n = 2;
        while self.index.contains_key(&name) {
            name = format!("{}#{n}", file.relative);
            n += 1;
        }
        name
    }

    pub fn get(&self, name: &str) -> Option<&ScannedFile> {
        self.index.get(name).map(|&i| &self.files[i])
    }

    pub fn iter(&self) -> impl Iterator<Item = &ScannedFile> {
        self.files.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.files.iter().map(|f| f.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatTurn {
    pub role: Role,
    pub content: String,
}

/// Visible chat history. Append-only; never sent back to the model.
#[derive(Debug, Default)]
pub struct Transcript {
    turns: Vec<ChatTurn>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a question and its answer, in that order.
    pub fn push_exchange(&mut self, question: &str, answer: &str) {
        self.turns.push(ChatTurn {
            role: Role::User,
            content: question.to_string(),
        });
        self.turns.push(ChatTurn {
            role: Role::Assistant,
            content: answer.to_string(),
        });
    }

    pub fn turns(&self) -> &[ChatTurn] {
        &self.turns
    }

    pub fn clear(&mut self) {
        self.turns.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }
}
