//! Wire types for the two backend endpoints.
//!
//! `POST /upload` takes a multipart form with the file under the `pdf` field
//! and answers with [`UploadResponse`]. `POST /ask` takes an [`AskRequest`]
//! JSON body and answers with [`AskResponse`]. The backend omits optional
//! keys rather than sending nulls, so every optional field defaults.

use serde::{Deserialize, Serialize};

/// Fallback shown when the server signals failure without an `error` field.
pub const GENERIC_SERVER_ERROR: &str = "The server reported an error. Please try again.";

/// Response body of `POST /upload`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadResponse {
    #[serde(default)]
    pub success: bool,
    /// Opaque document identifier; scopes later `/ask` calls server-side.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary_bullets: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary_detailed: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary_short: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl UploadResponse {
    /// Server-signaled error text, verbatim when present.
    pub fn error_message(&self) -> String {
        match self.error.as_deref() {
            Some(e) if !e.trim().is_empty() => e.to_string(),
            _ => GENERIC_SERVER_ERROR.to_string(),
        }
    }
}

/// Request body of `POST /ask`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AskRequest {
    pub question: String,
    pub filename: String,
}

/// Response body of `POST /ask`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AskResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub answer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl AskResponse {
    pub fn error_message(&self) -> String {
        match self.error.as_deref() {
            Some(e) if !e.trim().is_empty() => e.to_string(),
            _ => GENERIC_SERVER_ERROR.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upload_response_full_body() {
        let body = r#"{
            "success": true,
            "filename": "report",
            "summary_bullets": "- a\n- b",
            "summary_detailed": "Long text.",
            "summary_short": "Short text."
        }"#;
        let resp: UploadResponse = serde_json::from_str(body).unwrap();
        assert!(resp.success);
        assert_eq!(resp.filename.as_deref(), Some("report"));
        assert_eq!(resp.summary_bullets.as_deref(), Some("- a\n- b"));
        assert!(resp.error.is_none());
    }

    #[test]
    fn test_upload_response_error_body() {
        let resp: UploadResponse =
            serde_json::from_str(r#"{"error": "Could not extract usable text from PDF."}"#)
                .unwrap();
        assert!(!resp.success);
        assert_eq!(
            resp.error_message(),
            "Could not extract usable text from PDF."
        );
    }

    #[test]
    fn test_error_message_fallback_when_absent_or_blank() {
        let resp: UploadResponse = serde_json::from_str(r#"{"success": false}"#).unwrap();
        assert_eq!(resp.error_message(), GENERIC_SERVER_ERROR);

        let resp: AskResponse =
            serde_json::from_str(r#"{"success": false, "error": "  "}"#).unwrap();
        assert_eq!(resp.error_message(), GENERIC_SERVER_ERROR);
    }

    #[test]
    fn test_ask_round_trip() {
        let req = AskRequest {
            question: "What is the capital?".to_string(),
            filename: "report".to_string(),
        };
        let json = serde_json::to_string(&req).unwrap();
        assert!(json.contains("\"question\""));
        assert!(json.contains("\"filename\""));

        let resp: AskResponse =
            serde_json::from_str(r#"{"success": true, "answer": "Paris", "filename": "report"}"#)
                .unwrap();
        assert!(resp.success);
        assert_eq!(resp.answer.as_deref(), Some("Paris"));
    }

    #[test]
    fn test_ask_response_error_verbatim() {
        let resp: AskResponse =
            serde_json::from_str(r#"{"success": false, "error": "no document"}"#).unwrap();
        assert_eq!(resp.error_message(), "no document");
    }
}
