//! Document selection, client-side validation and cached summaries.

use crate::api::UploadResponse;
use serde::{Deserialize, Serialize};

/// Upload ceiling enforced client-side; the backend enforces the same limit.
pub const MAX_UPLOAD_BYTES: u64 = 20 * 1024 * 1024;

/// Only PDF uploads are accepted.
pub const PDF_MIME: &str = "application/pdf";

/// Multipart field name the backend reads the file from.
pub const UPLOAD_FIELD: &str = "pdf";

/// A file the user picked or dropped, before any network activity.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedFile {
    pub name: String,
    pub size: u64,
    pub mime: String,
}

impl SelectedFile {
    pub fn new(name: impl Into<String>, size: u64, mime: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size,
            mime: mime.into(),
        }
    }

    /// Synchronous pre-upload checks. A file of exactly [`MAX_UPLOAD_BYTES`]
    /// passes; one byte more does not.
    pub fn validate(&self) -> Result<(), String> {
        if self.mime != PDF_MIME {
            return Err(format!(
                "Only PDF files are supported (got \"{}\").",
                if self.mime.is_empty() {
                    "unknown"
                } else {
                    self.mime.as_str()
                }
            ));
        }
        if self.size > MAX_UPLOAD_BYTES {
            return Err(format!(
                "File is too large: {:.1} MB exceeds the 20 MB limit.",
                self.size as f64 / (1024.0 * 1024.0)
            ));
        }
        Ok(())
    }
}

/// The three precomputed renderings of a document the backend returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SummaryVariant {
    Bullets,
    Short,
    Detailed,
}

impl SummaryVariant {
    pub const ALL: [SummaryVariant; 3] = [
        SummaryVariant::Bullets,
        SummaryVariant::Short,
        SummaryVariant::Detailed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SummaryVariant::Bullets => "bullets",
            SummaryVariant::Short => "short",
            SummaryVariant::Detailed => "detailed",
        }
    }

    pub fn from_str(s: &str) -> Result<Self, String> {
        match s {
            "bullets" => Ok(SummaryVariant::Bullets),
            "short" => Ok(SummaryVariant::Short),
            "detailed" => Ok(SummaryVariant::Detailed),
            _ => Err(format!("Unknown summary variant: {}", s)),
        }
    }

    /// Section heading shown above the summary body.
    pub fn title(&self) -> &'static str {
        match self {
            SummaryVariant::Bullets => "Key Points",
            SummaryVariant::Short => "Short Overview",
            SummaryVariant::Detailed => "Detailed Summary",
        }
    }

    /// Fixed text rendered when the backend returned nothing for a variant.
    pub fn placeholder(&self) -> &'static str {
        match self {
            SummaryVariant::Bullets => "No bullet-point summary available.",
            SummaryVariant::Short => "No short summary available.",
            SummaryVariant::Detailed => "No detailed summary available.",
        }
    }
}

impl Default for SummaryVariant {
    fn default() -> Self {
        SummaryVariant::Detailed
    }
}

/// Summaries cached after a successful upload, keyed by the opaque
/// document identifier the backend handed back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentSummary {
    pub filename: String,
    pub bullets: String,
    pub short: String,
    pub detailed: String,
}

impl DocumentSummary {
    /// Build from a successful upload response. Fails when the server did
    /// not signal success or omitted the document identifier.
    pub fn from_response(resp: &UploadResponse) -> Result<Self, String> {
        if !resp.success {
            return Err(resp.error_message());
        }
        let filename = resp
            .filename
            .clone()
            .filter(|f| !f.trim().is_empty())
            .ok_or_else(|| "Upload response is missing the document identifier.".to_string())?;
        Ok(Self {
            filename,
            bullets: resp.summary_bullets.clone().unwrap_or_default(),
            short: resp.summary_short.clone().unwrap_or_default(),
            detailed: resp.summary_detailed.clone().unwrap_or_default(),
        })
    }

    pub fn text_for(&self, variant: SummaryVariant) -> &str {
        match variant {
            SummaryVariant::Bullets => &self.bullets,
            SummaryVariant::Short => &self.short,
            SummaryVariant::Detailed => &self.detailed,
        }
    }

    /// Variant text for display, substituting the fixed placeholder for a
    /// blank variant so the summary region is never empty.
    pub fn display_text(&self, variant: SummaryVariant) -> &str {
        let text = self.text_for(variant);
        if text.trim().is_empty() {
            variant.placeholder()
        } else {
            text
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ok_response() -> UploadResponse {
        serde_json::from_str(
            r#"{
                "success": true,
                "filename": "annual-report",
                "summary_bullets": "- revenue up\n- costs down",
                "summary_detailed": "The company grew.",
                "summary_short": "Growth year."
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_rejects_non_pdf_mime() {
        let file = SelectedFile::new("notes.txt", 1024, "text/plain");
        let err = file.validate().unwrap_err();
        assert!(err.contains("Only PDF"));
    }

    #[test]
    fn test_size_boundary_at_20_mib() {
        let at_limit = SelectedFile::new("big.pdf", MAX_UPLOAD_BYTES, PDF_MIME);
        assert!(at_limit.validate().is_ok());

        let over = SelectedFile::new("bigger.pdf", MAX_UPLOAD_BYTES + 1, PDF_MIME);
        let err = over.validate().unwrap_err();
        assert!(err.contains("too large"));
    }

    #[test]
    fn test_variant_keys() {
        for variant in SummaryVariant::ALL {
            assert_eq!(SummaryVariant::from_str(variant.as_str()), Ok(variant));
        }
        assert!(SummaryVariant::from_str("medium").is_err());
        assert_eq!(SummaryVariant::default(), SummaryVariant::Detailed);
    }

    #[test]
    fn test_summary_from_successful_response() {
        let summary = DocumentSummary::from_response(&ok_response()).unwrap();
        assert_eq!(summary.filename, "annual-report");
        assert_eq!(
            summary.display_text(SummaryVariant::Bullets),
            "- revenue up\n- costs down"
        );
        assert_eq!(summary.display_text(SummaryVariant::Short), "Growth year.");
        assert_eq!(
            summary.display_text(SummaryVariant::Detailed),
            "The company grew."
        );
    }

    #[test]
    fn test_summary_from_failed_response() {
        let resp: UploadResponse =
            serde_json::from_str(r#"{"success": false, "error": "bad pdf"}"#).unwrap();
        assert_eq!(DocumentSummary::from_response(&resp).unwrap_err(), "bad pdf");
    }

    #[test]
    fn test_summary_missing_filename() {
        let resp: UploadResponse = serde_json::from_str(r#"{"success": true}"#).unwrap();
        let err = DocumentSummary::from_response(&resp).unwrap_err();
        assert!(err.contains("document identifier"));
    }

    #[test]
    fn test_blank_variant_renders_placeholder() {
        let mut resp = ok_response();
        resp.summary_short = Some("   ".to_string());
        let summary = DocumentSummary::from_response(&resp).unwrap();
        assert_eq!(
            summary.display_text(SummaryVariant::Short),
            SummaryVariant::Short.placeholder()
        );
        // the raw accessor stays untouched
        assert_eq!(summary.text_for(SummaryVariant::Short), "   ");
    }
}
