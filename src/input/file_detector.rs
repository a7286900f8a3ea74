//! File type detection

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileType {
    Pdf,
    Docx,
    Doc,
    Text,
    Unknown,
}

impl FileType {
    /// Markdown requirements files carry plain-text content as far as skill
    /// extraction is concerned, so they route through the text extractor.
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_lowercase().as_str() {
            "pdf" => FileType::Pdf,
            "docx" => FileType::Docx,
            "doc" => FileType::Doc,
            "txt" => FileType::Text,
            "md" | "markdown" => FileType::Text,
            _ => FileType::Unknown,
        }
    }
}
