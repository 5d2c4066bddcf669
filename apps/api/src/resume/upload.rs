//! Multipart upload parsing shared by the upload-based endpoints.

use axum::{
    extract::{
        multipart::{MultipartError, MultipartRejection},
        Multipart,
    },
    http::StatusCode,
};
use bytes::Bytes;
use tracing::debug;

use crate::errors::AppError;
use crate::extraction::DocumentKind;

pub const FILE_FIELD: &str = "file";
pub const JOB_DESCRIPTION_FIELD: &str = "jobDescription";

const KIB: usize = 1024;
const MIB: usize = 1024 * 1024;

#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub file_name: String,
    pub content_type: Option<String>,
    pub data: Bytes,
}

impl UploadedFile {
    pub fn document_kind(&self) -> Option<DocumentKind> {
        DocumentKind::detect(self.content_type.as_deref(), &self.file_name)
    }
}

/// The fields of an upload form. Unknown fields are ignored.
#[derive(Debug, Default)]
pub struct UploadForm {
    pub file: Option<UploadedFile>,
    pub job_description: Option<String>,
}

impl UploadForm {
    /// Reads every field. A body cut off by the router's size limit is reported
    /// against `max_bytes`, like an oversized file.
    pub async fn read(
        multipart: Result<Multipart, MultipartRejection>,
        max_bytes: usize,
    ) -> Result<Self, AppError> {
        let mut multipart = multipart
            .map_err(|e| AppError::validation(format!("Expected multipart form data: {e}")))?;

        let form_error = |e: MultipartError| invalid_form(e, max_bytes);
        let mut form = UploadForm::default();
        while let Some(field) = multipart.next_field().await.map_err(form_error)? {
            let name = field.name().map(str::to_string);
            match name.as_deref() {
                Some(FILE_FIELD) => {
                    let file_name = field.file_name().unwrap_or_default().to_string();
                    let content_type = field.content_type().map(str::to_string);
                    let data = field.bytes().await.map_err(form_error)?;
                    debug!(%file_name, ?content_type, size = data.len(), "Received upload");
                    form.file = Some(UploadedFile {
                        file_name,
                        content_type,
                        data,
                    });
                }
                Some(JOB_DESCRIPTION_FIELD) => {
                    form.job_description = Some(field.text().await.map_err(form_error)?);
                }
                _ => {}
            }
        }

        Ok(form)
    }

    /// Takes the uploaded file, rejecting a missing/empty part or one over `max_bytes`.
    pub fn take_file(&mut self, max_bytes: usize) -> Result<UploadedFile, AppError> {
        let file = self
            .file
            .take()
            .filter(|f| !f.data.is_empty())
            .ok_or_else(|| AppError::validation("No file uploaded"))?;

        if file.data.len() > max_bytes {
            return Err(file_too_large(max_bytes));
        }
        Ok(file)
    }

    /// The job description text, trimmed. Blank counts as missing.
    pub fn job_description(&self) -> Option<&str> {
        self.job_description
            .as_deref()
            .map(str::trim)
            .filter(|jd| !jd.is_empty())
    }
}

fn invalid_form(e: MultipartError, max_bytes: usize) -> AppError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        return file_too_large(max_bytes);
    }
    AppError::validation(format!("Invalid multipart form data: {e}"))
}

fn file_too_large(max_bytes: usize) -> AppError {
    AppError::validation(format!(
        "File size must be less than {}",
        size_label(max_bytes)
    ))
}

/// Whole megabytes from 1 MiB up, kilobytes below. Both round up.
fn size_label(bytes: usize) -> String {
    if bytes >= MIB {
        format!("{}MB", bytes.div_ceil(MIB))
    } else {
        format!("{}KB", bytes.div_ceil(KIB))
    }
}
