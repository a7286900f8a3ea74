//! Text extraction from resume and requirements files

use crate::error::{Result, ResumeScreenerError};
use std::path::Path;
use tokio::fs;

pub trait TextExtractor {
    fn extract(&self, path: &Path) -> impl std::future::Future<Output = Result<String>> + Send;
}

pub struct PdfExtractor;

impl TextExtractor for PdfExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let bytes = fs::read(path).await.map_err(|e| {
            ResumeScreenerError::Io(e)
        })?;

        let text = pdf_extract::extract_text_from_mem(&bytes).map_err(|e| {
            ResumeScreenerError::PdfExtraction(format!("Failed to extract text from PDF '{}': {}", path.display(), e))
        })?;
        Ok(text)
    }
}

pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let content = fs::read_to_string(path).await.map_err(|e| {
            ResumeScreenerError::Io(e)
        })?;
        Ok(content)
    }
}

/// Word documents are binary containers this tool does not decode. The
/// extractor reports a decoding failure; screening continues with the
/// default profile.
pub struct WordExtractor;

impl TextExtractor for WordExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        Err(ResumeScreenerError::TextExtraction(format!(
            "Word document decoding is not supported for '{}'. Convert the file to PDF or plain text first.",
            path.display()
        )))
    }
}
