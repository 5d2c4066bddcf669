// Upload-based features: résumé analysis, ATS check, job matching.
// Pipeline per request: multipart form → validation → text extraction → prompt → model reply.
// All LLM calls go through llm_client, never to a provider directly.

pub mod handlers;
pub mod models;
pub mod prompts;
pub mod upload;

use tracing::info;

use crate::errors::AppError;
use crate::extraction::extract_text;
use upload::UploadedFile;

pub const UNSUPPORTED_TYPE_MESSAGE: &str = "Only PDF and DOCX files are supported";

/// Resolves the document kind (400 when unsupported) and extracts its text.
/// The type check always happens before any decoding work.
pub async fn resume_text(file: &UploadedFile) -> Result<String, AppError> {
    let kind = file
        .document_kind()
        .ok_or_else(|| AppError::validation(UNSUPPORTED_TYPE_MESSAGE))?;

    let text = extract_text(kind, file.data.clone()).await?;
    info!(
        file = %file.file_name,
        ?kind,
        bytes = file.data.len(),
        chars = text.chars().count(),
        "Resume text extracted"
    );
    Ok(text)
}
