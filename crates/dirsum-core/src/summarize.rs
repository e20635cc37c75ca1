//! Summarization pipeline: extract, prompt, complete, record

use crate::client::{self, Completer};
use crate::discover::DiscoveredFile;
use crate::extract::{self, ContentLimit};
use crate::prompt;
use crate::session::{ScanSession, Summary};
use crate::SUMMARY_CHAR_LIMIT;

/// Progress events emitted while summarizing.
#[derive(Debug, Clone)]
pub enum ProgressEvent<'a> {
    /// Summarization is about to start on `total` files.
    Started { total: usize },
    /// About to process a file.
    Processing {
        current: usize,
        total: usize,
        name: &'a str,
    },
    /// Finished a file.
    Completed {
        completed: usize,
        total: usize,
        name: &'a str,
    },
}

/// Type alias for progress callback.
pub type ProgressCallback = Box<dyn Fn(ProgressEvent) + Send>;

/// Stats from a summarization run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ScanStats {
    pub files_discovered: usize,
    pub files_summarized: usize,
    /// Sent to the model, but the completion came back as an error marker
    pub files_failed: usize,
    pub files_unreadable: usize,
    pub files_empty: usize,
}

/// Turns discovered files into summaries, one at a time.
pub struct Summarizer<'a> {
    completer: &'a dyn Completer,
    char_limit: usize,
    progress_callback: Option<&'a (dyn Fn(ProgressEvent) + Send)>,
}

impl<'a> Summarizer<'a> {
    pub fn new(completer: &'a dyn Completer) -> Self {
        Self {
            completer,
            char_limit: SUMMARY_CHAR_LIMIT,
            progress_callback: None,
        }
    }

    /// Cap on the characters of content sent per summary.
    pub fn with_char_limit(mut self, char_limit: usize) -> Self {
        self.char_limit = char_limit;
        self
    }

    /// Receive progress updates while summarizing.
    pub fn with_progress(mut self, callback: &'a (dyn Fn(ProgressEvent) + Send)) -> Self {
        self.progress_callback = Some(callback);
        self
    }

    /// Emit a progress event if a callback is registered.
    fn emit_progress(&self, event: ProgressEvent) {
        if let Some(callback) = self.progress_callback {
            callback(event);
        }
    }

    /// Summarize every file in order, recording each result in `session`.
    ///
    /// Never aborts early: unreadable files and completion failures are
    /// recorded as that file's summary and the next file is processed.
    pub fn summarize(&self, files: &[DiscoveredFile], session: &mut ScanSession) -> ScanStats {
        let total = files.len();
        let mut stats = ScanStats {
            files_discovered: total,
            ..ScanStats::default()
        };

        self.emit_progress(ProgressEvent::Started { total });

        for (i, file) in files.iter().enumerate() {
            self.emit_progress(ProgressEvent::Processing {
                current: i + 1,
                total,
                name: &file.name,
            });

            let summary = self.summarize_file(file);
            match &summary {
                Summary::Generated(text) if client::is_completion_error(text) => {
                    stats.files_failed += 1
                }
                Summary::Generated(_) => stats.files_summarized += 1,
                Summary::Unreadable { .. } => stats.files_unreadable += 1,
                Summary::Empty => stats.files_empty += 1,
            }
            session.insert(file, summary);

            self.emit_progress(ProgressEvent::Completed {
                completed: i + 1,
                total,
                name: &file.name,
            });
        }

        tracing::info!(
            "Summarized {} of {} files ({} failed, {} unreadable, {} empty)",
            stats.files_summarized,
            stats.files_discovered,
            stats.files_failed,
            stats.files_unreadable,
            stats.files_empty
        );

        stats
    }

    /// Produce the summary for a single file.
    pub fn summarize_file(&self, file: &DiscoveredFile) -> Summary {
        let content = match extract::extract(&file.path, ContentLimit::Chars(self.char_limit)) {
            Ok(content) => content,
            Err(e) => {
                tracing::warn!("Failed to read {}: {}", file.path.display(), e);
                return Summary::Unreadable {
                    reason: e.to_string(),
                };
            }
        };

        if content.trim().is_empty() {
            return Summary::Empty;
        }

        let prompt = prompt::summary_prompt(&file.name, &content);
        Summary::Generated(self.completer.complete(&prompt))
    }
}
