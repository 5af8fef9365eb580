pub mod pdf;
pub mod text;

pub use pdf::PdfSource;
pub use text::TextSource;

use crate::chunker::chunk_with_fallback;
use crate::config::ChunkingSettings;
use crate::error::Result;
use crate::models::{ChunkSet, OutlineEntry};

/// Provider of page texts and bookmarks for one document.
///
/// Implementations must return pages in document order (page 1 first) and
/// outline entries in depth-first order with levels starting at 1. An empty
/// outline means the document has no bookmarks.
pub trait DocumentSource {
    /// Short name of the source format.
    fn format(&self) -> &str;

    /// Text of every page, in order.
    fn pages(&self) -> Result<Vec<String>>;

    /// Bookmarks as `(level, title, start_page)` entries.
    fn outline(&self) -> Result<Vec<OutlineEntry>>;
}

/// Read pages and outline from `source` and chunk them.
pub fn chunk_source(source: &dyn DocumentSource, settings: &ChunkingSettings) -> Result<ChunkSet> {
    let pages = source.pages()?;
    let outline = source.outline()?;
    tracing::debug!(
        format = source.format(),
        pages = pages.len(),
        bookmarks = outline.len(),
        "loaded document"
    );
    Ok(chunk_with_fallback(&pages, &outline, settings))
}
