//! PDF → raw text via `pdf-extract`.

use std::fmt::Display;

use tracing::debug;

use super::ExtractionError;

/// Decodes page by page and joins the non-blank pages. When the per-page pass
/// fails, the whole-document decoder gets one more try.
pub fn extract_pdf_text(data: &[u8]) -> Result<String, ExtractionError> {
    decode_with_fallback(
        data,
        pdf_extract::extract_text_from_mem_by_pages,
        pdf_extract::extract_text_from_mem,
    )
}

fn decode_with_fallback<P, W, PE, WE>(
    data: &[u8],
    by_pages: P,
    whole: W,
) -> Result<String, ExtractionError>
where
    P: FnOnce(&[u8]) -> Result<Vec<String>, PE>,
    W: FnOnce(&[u8]) -> Result<String, WE>,
    PE: Display,
    WE: Display,
{
    match by_pages(data) {
        Ok(pages) => Ok(join_pages(&pages)),
        Err(page_err) => {
            debug!("Per-page PDF decode failed ({page_err}), retrying as a whole document");
            whole(data).map_err(|e| ExtractionError::Pdf(e.to_string()))
        }
    }
}

fn join_pages(pages: &[String]) -> String {
    pages
        .iter()
        .map(|page| page.trim())
        .filter(|page| !page.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}
