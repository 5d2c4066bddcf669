//! Document text extraction: turns an uploaded résumé into plain text for prompting.
//!
//! Best-effort and lossy: no layout, formatting, or table structure survives.
//! Decoding is CPU-bound and must run inside `tokio::task::spawn_blocking`.

use bytes::Bytes;
use thiserror::Error;
use tracing::debug;

pub mod docx;
#[cfg(test)]
pub(crate) mod fixtures;
pub mod pdf;

pub const PDF_MIME: &str = "application/pdf";
pub const DOCX_MIME: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// Extracted text shorter than this is treated as "no usable text".
pub const MIN_TEXT_CHARS: usize = 20;

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("Could not read PDF: {0}")]
    Pdf(String),

    #[error("Could not read DOCX: {0}")]
    Docx(String),

    #[error("Document decoder crashed: {0}")]
    Decoder(String),

    #[error("Could not extract meaningful text from resume ({chars} characters found)")]
    InsufficientText { chars: usize },
}

/// Document formats the extractor can read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    Docx,
}

impl DocumentKind {
    pub fn from_mime(mime: &str) -> Option<Self> {
        // Browsers occasionally append parameters ("application/pdf; charset=binary").
        let essence = mime.split(';').next().unwrap_or_default().trim();
        if essence.eq_ignore_ascii_case(PDF_MIME) {
            Some(DocumentKind::Pdf)
        } else if essence.eq_ignore_ascii_case(DOCX_MIME) {
            Some(DocumentKind::Docx)
        } else {
            None
        }
    }

    pub fn from_file_name(file_name: &str) -> Option<Self> {
        let (_, ext) = file_name.rsplit_once('.')?;
        match ext.to_ascii_lowercase().as_str() {
            "pdf" => Some(DocumentKind::Pdf),
            "docx" => Some(DocumentKind::Docx),
            _ => None,
        }
    }

    /// Resolves the kind from the declared MIME type. Only when the browser declared
    /// nothing useful (absent or `application/octet-stream`) does the extension decide.
    pub fn detect(content_type: Option<&str>, file_name: &str) -> Option<Self> {
        match content_type.map(str::trim).filter(|ct| !ct.is_empty()) {
            Some(ct) if !ct.eq_ignore_ascii_case("application/octet-stream") => {
                Self::from_mime(ct)
            }
            _ => Self::from_file_name(file_name),
        }
    }

    pub fn mime(&self) -> &'static str {
        match self {
            DocumentKind::Pdf => PDF_MIME,
            DocumentKind::Docx => DOCX_MIME,
        }
    }
}

/// Extracts, normalizes and length-checks document text on the blocking pool.
/// Decoder panics surface as `ExtractionError::Decoder` instead of taking the task down.
pub async fn extract_text(kind: DocumentKind, data: Bytes) -> Result<String, ExtractionError> {
    run_decoder(move || extract_text_blocking(kind, &data)).await
}

async fn run_decoder<F>(decode: F) -> Result<String, ExtractionError>
where
    F: FnOnce() -> Result<String, ExtractionError> + Send + 'static,
{
    tokio::task::spawn_blocking(decode)
        .await
        .map_err(|e| ExtractionError::Decoder(e.to_string()))?
}

/// Synchronous extraction pipeline: decode → normalize → minimum-length check.
pub fn extract_text_blocking(kind: DocumentKind, data: &[u8]) -> Result<String, ExtractionError> {
    let raw = match kind {
        DocumentKind::Pdf => pdf::extract_pdf_text(data)?,
        DocumentKind::Docx => docx::extract_docx_text(data)?,
    };

    let text = normalize_text(&raw);
    let chars = text.chars().count();
    debug!(?kind, raw_len = raw.len(), chars, "Document text extracted");

    if chars < MIN_TEXT_CHARS {
        return Err(ExtractionError::InsufficientText { chars });
    }
    Ok(text)
}

/// Drops control characters, collapses whitespace runs inside each line and removes
/// blank lines.
pub fn normalize_text(raw: &str) -> String {
    raw.lines()
        .map(|line| {
            line.chars()
                .map(|c| if c.is_control() { ' ' } else { c })
                .collect::<String>()
                .split_whitespace()
                .collect::<Vec<_>>()
                .join(" ")
        })
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_mime_accepts_pdf_and_docx() {
        assert_eq!(DocumentKind::from_mime("application/pdf"), Some(DocumentKind::Pdf));
        assert_eq!(DocumentKind::from_mime(DOCX_MIME), Some(DocumentKind::Docx));
        assert_eq!(
            DocumentKind::from_mime("application/pdf; charset=binary"),
            Some(DocumentKind::Pdf)
        );
    }

    #[test]
    fn test_from_mime_rejects_legacy_word_and_others() {
        assert_eq!(DocumentKind::from_mime("application/msword"), None);
        assert_eq!(DocumentKind::from_mime("image/png"), None);
        assert_eq!(DocumentKind::from_mime("text/plain"), None);
    }

    #[test]
    fn test_detect_prefers_declared_mime_over_extension() {
        // A declared-but-unsupported type must not be rescued by the extension.
        assert_eq!(DocumentKind::detect(Some("image/png"), "resume.pdf"), None);
        assert_eq!(
            DocumentKind::detect(Some("application/pdf"), "resume.bin"),
            Some(DocumentKind::Pdf)
        );
    }

    #[test]
    fn test_detect_falls_back_to_extension_for_octet_stream() {
        assert_eq!(
            DocumentKind::detect(Some("application/octet-stream"), "CV.DOCX"),
            Some(DocumentKind::Docx)
        );
        assert_eq!(DocumentKind::detect(None, "resume.pdf"), Some(DocumentKind::Pdf));
        assert_eq!(DocumentKind::detect(None, "resume"), None);
    }

    #[test]
    fn test_normalize_collapses_whitespace_and_drops_blank_lines() {
        let raw = "  Jane   Doe \n\n\t Senior\u{0}Engineer  \n   \n Rust, Go ";
        assert_eq!(normalize_text(raw), "Jane Doe\nSenior Engineer\nRust, Go");
    }

    #[test]
    fn test_short_text_is_insufficient() {
        let err = extract_text_blocking(DocumentKind::Docx, &fixtures::docx_bytes(&["ab"]))
            .unwrap_err();
        assert!(matches!(err, ExtractionError::InsufficientText { chars: 2 }));
        assert!(err.to_string().contains("Could not extract meaningful text"));
    }

    #[test]
    fn test_docx_pipeline_returns_normalized_text() {
        let data = fixtures::docx_bytes(&["Jane Doe", "", "Staff   Engineer at Example Corp"]);
        let text = extract_text_blocking(DocumentKind::Docx, &data).unwrap();
        assert_eq!(text, "Jane Doe\nStaff Engineer at Example Corp");
    }

    #[tokio::test]
    async fn test_async_extraction_reports_corrupt_pdf() {
        let result = extract_text(DocumentKind::Pdf, Bytes::from_static(b"not a pdf")).await;
        assert!(matches!(
            result,
            Err(ExtractionError::Pdf(_)) | Err(ExtractionError::Decoder(_))
        ));
    }

    #[tokio::test]
    async fn test_decoder_panic_becomes_decoder_error() {
        let result = run_decoder(|| -> Result<String, ExtractionError> {
            panic!("malformed font table")
        })
        .await;
        assert!(matches!(result, Err(ExtractionError::Decoder(_))));
    }

    #[tokio::test]
    async fn test_decoder_result_passes_through() {
        let ok = run_decoder(|| Ok("Jane Doe".to_string())).await.unwrap();
        assert_eq!(ok, "Jane Doe");

        let err = run_decoder(|| Err(ExtractionError::InsufficientText { chars: 3 }))
            .await
            .unwrap_err();
        assert!(matches!(err, ExtractionError::InsufficientText { chars: 3 }));
    }
}
