//! The assistant ties one scan session and one chat transcript to a completer.

use std::path::Path;

use crate::chat::{ChatCallback, ChatResponder};
use crate::client::Completer;
use crate::discover;
use crate::session::{ScanSession, Transcript};
use crate::summarize::{ProgressCallback, ScanStats, Summarizer};
use crate::{Config, Result};

pub struct Assistant {
    config: Config,
    completer: Box<dyn Completer>,
    session: ScanSession,
    transcript: Transcript,
    progress_callback: Option<ProgressCallback>,
    chat_callback: Option<ChatCallback>,
}

impl Assistant {
    pub fn new(config: Config, completer: Box<dyn Completer>) -> Self {
        Self {
            config,
            completer,
            session: ScanSession::new(),
            transcript: Transcript::new(),
            progress_callback: None,
            chat_callback: None,
        }
    }

    /// Set a callback to receive progress updates during scans.
    pub fn set_progress_callback(&mut self, callback: ProgressCallback) {
        self.progress_callback = Some(callback);
    }

    /// Set a callback to receive chat events (e.g. a full-file read).
    pub fn set_chat_callback(&mut self, callback: ChatCallback) {
        self.chat_callback = Some(callback);
    }

    /// Scan `root` and summarize every supported file beneath it.
    ///
    /// Clears the previous scan and the chat transcript first. Fails only if
    /// `root` is not a directory; per-file problems end up in the summaries.
    pub fn scan(&mut self, root: &Path) -> Result<ScanStats> {
        let files = discover::scan_directory(root)?;
        tracing::info!("Scanning {} ({} files)", root.display(), files.len());

        self.session.reset(root);
        self.transcript.clear();

        let mut summarizer = Summarizer::new(self.completer.as_ref())
            .with_char_limit(self.config.summary_char_limit);
        if let Some(callback) = self.progress_callback.as_deref() {
            summarizer = summarizer.with_progress(callback);
        }

        Ok(summarizer.summarize(&files, &mut self.session))
    }

    /// Answer a question about the current scan and record the exchange.
    pub fn ask(&mut self, question: &str) -> String {
        let mut responder = ChatResponder::new(self.completer.as_ref());
        if let Some(callback) = self.chat_callback.as_deref() {
            responder = responder.with_events(callback);
        }
        responder.ask(question, &self.session, &mut self.transcript)
    }

    pub fn session(&self) -> &ScanSession {
        &self.session
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}
