//! Chat transcript types and the local preconditions for asking a question.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Who authored a transcript entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChatRole {
    User,
    Assistant,
}

impl ChatRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChatRole::User => "user",
            ChatRole::Assistant => "assistant",
        }
    }
}

/// One entry in the page-lifetime transcript. Append-only; never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: Uuid,
    pub role: ChatRole,
    pub content: String,
    pub sent_at: DateTime<Utc>,
}

impl ChatMessage {
    fn new(role: ChatRole, content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            role,
            content: content.into(),
            sent_at: Utc::now(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(ChatRole::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(ChatRole::Assistant, content)
    }
}

/// Local checks before `/ask` is called: a document must have been uploaded
/// and the question must not be blank. Failing either never reaches the
/// network.
pub fn ask_preconditions(document: Option<&str>, question: &str) -> Result<(), String> {
    if document.map_or(true, |d| d.trim().is_empty()) {
        return Err("Upload a PDF before asking questions.".to_string());
    }
    if question.trim().is_empty() {
        return Err("Type a question first.".to_string());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preconditions_require_document() {
        assert!(ask_preconditions(None, "What is this about?").is_err());
        assert!(ask_preconditions(Some("  "), "What is this about?").is_err());
    }

    #[test]
    fn test_preconditions_require_question_text() {
        let err = ask_preconditions(Some("report"), "   ").unwrap_err();
        assert!(err.contains("question"));
        assert!(ask_preconditions(Some("report"), "What is this about?").is_ok());
    }

    #[test]
    fn test_message_constructors() {
        let user = ChatMessage::user("hello");
        let assistant = ChatMessage::assistant("hi");
        assert_eq!(user.role, ChatRole::User);
        assert_eq!(assistant.role, ChatRole::Assistant);
        assert_ne!(user.id, assistant.id);
        assert_eq!(user.role.as_str(), "user");
        assert_eq!(assistant.role.as_str(), "assistant");
    }
}
