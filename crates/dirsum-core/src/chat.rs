//! Chat responder: answer a question, grounding it in one file when named
//!
//! Each answer is a single stateless completion. Earlier turns are kept in
//! the [`Transcript`] for display only and are never sent to the model.

use regex::RegexBuilder;

use crate::client::Completer;
use crate::extract::{self, ContentLimit};
use crate::prompt;
use crate::session::{ScanSession, ScannedFile, Transcript};

/// Events emitted while answering.
#[derive(Debug, Clone)]
pub enum ChatEvent<'a> {
    /// The question names a scanned file; its entire content is about to be
    /// read and sent, which can be expensive for large files.
    ReadingFullFile { name: &'a str },
}

/// Type alias for chat event callback.
pub type ChatCallback = Box<dyn Fn(ChatEvent) + Send>;

/// Find the first scanned file whose name appears in `question` as a whole
/// word, ignoring case. Files are checked in session order.
pub fn find_mentioned_file<'s>(question: &str, session: &'s ScanSession) -> Option<&'s ScannedFile> {
    session.iter().find(|file| mentions(question, &file.name))
}

fn mentions(question: &str, name: &str) -> bool {
    let pattern = format!(r"\b{}\b", regex::escape(name));
    match RegexBuilder::new(&pattern).case_insensitive(true).build() {
        Ok(re) => re.is_match(question),
        Err(e) => {
            tracing::warn!("Could not build mention pattern for {}: {}", name, e);
            false
        }
    }
}

pub struct ChatResponder<'a> {
    completer: &'a dyn Completer,
    event_callback: Option<&'a (dyn Fn(ChatEvent) + Send)>,
}

impl<'a> ChatResponder<'a> {
    pub fn new(completer: &'a dyn Completer) -> Self {
        Self {
            completer,
            event_callback: None,
        }
    }

    pub fn with_events(mut self, callback: &'a (dyn Fn(ChatEvent) + Send)) -> Self {
        self.event_callback = Some(callback);
        self
    }

    fn emit(&self, event: ChatEvent) {
        if let Some(callback) = self.event_callback {
            callback(event);
        }
    }

    /// Answer `question` against the current scan.
    ///
    /// A question naming a scanned file is answered from that file's full,
    /// freshly extracted text. Anything else goes to the model verbatim.
    pub fn respond(&self, question: &str, session: &ScanSession) -> String {
        let Some(file) = find_mentioned_file(question, session) else {
            tracing::debug!("No file mentioned, sending question as-is");
            return self.completer.complete(question);
        };

        self.emit(ChatEvent::ReadingFullFile { name: &file.name });
        tracing::warn!(
            "Question mentions {}; sending its entire content to the model",
            file.name
        );

        match extract::extract(&file.path, ContentLimit::Full) {
            Ok(content) => {
                let prompt = prompt::grounding_prompt(question, &file.name, &content);
                self.completer.complete(&prompt)
            }
            Err(e) => {
                tracing::warn!("Failed to re-read {}: {}", file.path.display(), e);
                format!(
                    "I'm sorry, I couldn't read the full content of {}. Error: {}",
                    file.name, e
                )
            }
        }
    }

    /// Answer `question` and append the exchange to `transcript`.
    pub fn ask(&self, question: &str, session: &ScanSession, transcript: &mut Transcript) -> String {
        let answer = self.respond(question, session);
        transcript.push_exchange(question, &answer);
        answer
    }
}
