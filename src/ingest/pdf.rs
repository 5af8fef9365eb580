use std::collections::HashMap;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use lopdf::{Document, Object, ObjectId, Outline};
use tracing::{debug, warn};

use crate::error::{Result, TocChunkError};
use crate::ingest::DocumentSource;
use crate::models::OutlineEntry;

/// PDF document read with `pdf-extract` (page text) and `lopdf` (bookmarks).
pub struct PdfSource {
    path: PathBuf,
    bytes: Vec<u8>,
}

impl PdfSource {
    /// Read a PDF file into memory.
    pub fn open(path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path)?;
        Ok(Self::from_bytes(path, bytes))
    }

    /// Wrap PDF bytes already in memory; `path` is only used in errors.
    #[must_use]
    pub fn from_bytes(path: impl Into<PathBuf>, bytes: Vec<u8>) -> Self {
        Self {
            path: path.into(),
            bytes,
        }
    }

    fn parse_error(&self, detail: String) -> TocChunkError {
        TocChunkError::Parse {
            path: self.path.to_string_lossy().into(),
            detail,
        }
    }

    /// Depth-first walk of the bookmark tree, one entry per bookmark.
    ///
    /// Bookmarks are kept even when titles repeat; a bookmark whose page is
    /// not in the page tree is skipped with a warning.
    fn collect(
        &self,
        doc: &Document,
        nodes: &[Outline],
        level: usize,
        page_numbers: &HashMap<ObjectId, usize>,
        out: &mut Vec<OutlineEntry>,
    ) -> Result<()> {
        for node in nodes {
            match node {
                Outline::Destination(dest) => {
                    let title = dest
                        .title()
                        .and_then(|t| doc.dereference(t))
                        .and_then(|(_, t)| lopdf::decode_text_string(t))
                        .map_err(|e| self.parse_error(format!("bookmark title: {e}")))?;
                    let page = dest
                        .page()
                        .map_err(|e| self.parse_error(format!("bookmark {title:?}: {e}")))?;
                    match self.page_number(page, page_numbers)? {
                        Some(number) => out.push(OutlineEntry::new(level, title, number)),
                        None => {
                            warn!(path = %self.path.display(), title = %title, "bookmark target is not a page, skipped");
                        }
                    }
                }
                Outline::SubOutlines(children) => {
                    self.collect(doc, children, level + 1, page_numbers, out)?;
                }
            }
        }
        Ok(())
    }

    fn page_number(&self, page: &Object, page_numbers: &HashMap<ObjectId, usize>) -> Result<Option<usize>> {
        match page {
            Object::Reference(id) => Ok(page_numbers.get(id).copied()),
            // Remote (GoToR) destinations name a zero-based page index.
            Object::Integer(index) => Ok(usize::try_from(*index).ok().map(|i| i + 1)),
            other => Err(self.parse_error(format!(
                "bookmark destination is {}, expected a page",
                other.enum_variant()
            ))),
        }
    }
}

impl DocumentSource for PdfSource {
    fn format(&self) -> &'static str {
        "pdf"
    }

    fn pages(&self) -> Result<Vec<String>> {
        pdf_extract::extract_text_from_mem_by_pages(&self.bytes)
            .map_err(|e| self.parse_error(format!("PDF extraction error: {e}")))
    }

    fn outline(&self) -> Result<Vec<OutlineEntry>> {
        let doc = Document::load_mem(&self.bytes).map_err(|e| self.parse_error(format!("PDF load error: {e}")))?;

        let catalog = doc
            .catalog()
            .map_err(|e| self.parse_error(format!("PDF catalog error: {e}")))?;
        if !catalog.has(b"Outlines") {
            debug!(path = %self.path.display(), "no outline");
            return Ok(Vec::new());
        }

        let mut named = IndexMap::new();
        let tree = doc
            .get_outlines(None, None, &mut named)
            .map_err(|e| self.parse_error(format!("PDF outline error: {e}")))?
            .unwrap_or_default();

        let page_numbers: HashMap<ObjectId, usize> = doc
            .get_pages()
            .into_iter()
            .map(|(number, id)| (id, number as usize))
            .collect();

        let mut outline = Vec::new();
        self.collect(&doc, &tree, 1, &page_numbers, &mut outline)?;
        debug!(path = %self.path.display(), entries = outline.len(), "outline read");
        Ok(outline)
    }
}
