use std::path::Path;

use crate::error::{Result, TocChunkError};
use crate::ingest::DocumentSource;
use crate::models::OutlineEntry;

/// Form-feed separated plain text, as written by `pdftotext` and similar
/// tools, with an outline supplied alongside.
#[derive(Debug, Clone, Default)]
pub struct TextSource {
    content: String,
    outline: Vec<OutlineEntry>,
}

impl TextSource {
    #[must_use]
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            outline: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_outline(mut self, outline: Vec<OutlineEntry>) -> Self {
        self.outline = outline;
        self
    }

    /// Load page text from `path`.
    pub fn from_file(path: &Path) -> Result<Self> {
        Ok(Self::new(std::fs::read_to_string(path)?))
    }

    /// Load page text from `text_path` and the outline from a JSON list of
    /// `[level, title, start_page]` triples at `outline_path`.
    pub fn from_files(text_path: &Path, outline_path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(outline_path)?;
        let triples: Vec<(usize, String, usize)> =
            serde_json::from_str(&raw).map_err(|e| TocChunkError::Parse {
                path: outline_path.to_string_lossy().into(),
                detail: format!("outline must be a list of [level, title, page]: {e}"),
            })?;
        let outline = triples.into_iter().map(OutlineEntry::from).collect();
        Ok(Self::from_file(text_path)?.with_outline(outline))
    }
}

impl DocumentSource for TextSource {
    fn format(&self) -> &'static str {
        "text"
    }

    fn pages(&self) -> Result<Vec<String>> {
        if self.content.is_empty() {
            return Ok(Vec::new());
        }
        // A trailing form feed closes the last page rather than opening a new one.
        let body = self.content.strip_suffix('\x0C').unwrap_or(&self.content);
        Ok(body.split('\x0C').map(str::to_string).collect())
    }

    fn outline(&self) -> Result<Vec<OutlineEntry>> {
        Ok(self.outline.clone())
    }
}
