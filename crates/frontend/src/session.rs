//! Page-lifetime session state owned by the UI controller.
//!
//! Everything that outlives a single event handler lives here: the cached
//! summaries of the uploaded document, the variant the user is looking at
//! and the chat transcript. Provided once via context in [`crate::app::App`];
//! handlers mutate it through the signals, never through ambient globals.

use crate::chat::view_model::ChatVm;
use contracts::chat::ChatMessage;
use contracts::document::{DocumentSummary, SummaryVariant};
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct SessionVm {
    /// Summaries plus the opaque document identifier from the last
    /// successful upload. `None` until a first upload succeeds.
    pub document: RwSignal<Option<DocumentSummary>>,
    /// Which summary variant the summary region currently shows.
    pub active_variant: RwSignal<SummaryVariant>,
    /// Append-only chat transcript for the current document.
    pub transcript: RwSignal<Vec<ChatMessage>>,
    /// Chat input and error state; cleared together with the transcript
    /// when a new document is selected.
    pub chat: ChatVm,
}

impl SessionVm {
    pub fn new() -> Self {
        Self {
            document: RwSignal::new(None),
            active_variant: RwSignal::new(SummaryVariant::default()),
            transcript: RwSignal::new(Vec::new()),
            chat: ChatVm::new(),
        }
    }

    /// Opaque identifier of the uploaded document, if any.
    pub fn document_id(&self) -> Option<String> {
        self.document.get().map(|d| d.filename)
    }

    /// Drop everything tied to the previous document. Called when the user
    /// picks a new file, before any upload happens.
    pub fn reset_document(&self) {
        self.document.set(None);
        self.transcript.set(Vec::new());
        self.chat.reset();
    }

    pub fn push_message(&self, msg: ChatMessage) {
        self.transcript.update(|t| t.push(msg));
    }
}

impl Default for SessionVm {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::chat::ChatRole;

    fn sample_document() -> DocumentSummary {
        DocumentSummary {
            filename: "annual-report".to_string(),
            bullets: "- growth".to_string(),
            short: "A growth year.".to_string(),
            detailed: "The company grew.".to_string(),
        }
    }

    #[test]
    fn test_transcript_append_order() {
        let session = SessionVm::new();
        session.push_message(ChatMessage::user("What is the capital?"));
        session.push_message(ChatMessage::assistant("Paris"));

        let transcript = session.transcript.get_untracked();
        assert_eq!(transcript.len(), 2);
        assert_eq!(transcript[0].role, ChatRole::User);
        assert_eq!(transcript[0].content, "What is the capital?");
        assert_eq!(transcript[1].role, ChatRole::Assistant);
        assert_eq!(transcript[1].content, "Paris");
    }

    #[test]
    fn test_failed_answer_keeps_user_message() {
        let session = SessionVm::new();
        session.push_message(ChatMessage::user("What is the capital?"));
        // The answer failed; only the error region reports it.
        session.chat.error.set(Some("no document".to_string()));

        let transcript = session.transcript.get_untracked();
        assert_eq!(transcript.len(), 1);
        assert_eq!(transcript[0].role, ChatRole::User);
        assert_eq!(transcript[0].content, "What is the capital?");
        assert!(session
            .chat
            .error
            .get_untracked()
            .is_some_and(|e| e.contains("no document")));
    }

    #[test]
    fn test_reset_document_clears_chat_state() {
        let session = SessionVm::new();
        session.document.set(Some(sample_document()));
        session.push_message(ChatMessage::user("old question"));
        session.chat.question.set("half-typed follow-up".to_string());
        session.chat.error.set(Some("Question failed: HTTP 500".to_string()));

        session.reset_document();

        assert!(session.document.get_untracked().is_none());
        assert!(session.transcript.get_untracked().is_empty());
        assert_eq!(session.chat.question.get_untracked(), "");
        assert!(session.chat.error.get_untracked().is_none());
    }
}
