use serde::Serialize;

use crate::models::outline::TitlePath;
use crate::models::page::Page;
use crate::models::token_estimate::estimate_tokens_for;

/// A chapter-aligned group of pages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Chunk {
    /// 1-based page numbers, ascending.
    pub pages: Vec<usize>,
    /// Page texts, aligned with `pages`.
    pub texts: Vec<String>,
    /// Hierarchical title active for this chunk.
    pub title_path: TitlePath,
}

impl Chunk {
    /// True for zero-length chunks (two bookmarks on the same page).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// First and last page covered, if any.
    #[must_use]
    pub fn page_range(&self) -> Option<(usize, usize)> {
        Some((*self.pages.first()?, *self.pages.last()?))
    }

    pub fn pages(&self) -> impl Iterator<Item = Page<'_>> {
        self.pages.iter().zip(&self.texts).map(|(&number, text)| Page {
            number,
            text: text.as_str(),
        })
    }

    /// Page texts joined with newlines.
    #[must_use]
    pub fn text(&self) -> String {
        self.texts.join("\n")
    }

    /// Display identifier built from the title path.
    #[must_use]
    pub fn ident(&self) -> String {
        self.title_path.joined(" > ")
    }

    #[must_use]
    pub fn token_estimate(&self) -> u64 {
        estimate_tokens_for(&self.texts)
    }
}

/// Ordered chunks of one document.
///
/// Views the result either as `Chunk` records or, via [`ChunkSet::into_parts`],
/// as three aligned sequences of texts, page numbers and title paths.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ChunkSet {
    chunks: Vec<Chunk>,
}

impl ChunkSet {
    #[must_use]
    pub fn new(chunks: Vec<Chunk>) -> Self {
        Self { chunks }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Chunk> {
        self.chunks.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Chunk> {
        self.chunks.iter()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Chunk] {
        &self.chunks
    }

    pub fn texts(&self) -> impl Iterator<Item = &[String]> {
        self.chunks.iter().map(|c| c.texts.as_slice())
    }

    pub fn page_numbers(&self) -> impl Iterator<Item = &[usize]> {
        self.chunks.iter().map(|c| c.pages.as_slice())
    }

    pub fn titles(&self) -> impl Iterator<Item = &TitlePath> {
        self.chunks.iter().map(|c| &c.title_path)
    }

    /// All page numbers in chunk order.
    #[must_use]
    pub fn covered_pages(&self) -> Vec<usize> {
        self.chunks.iter().flat_map(|c| c.pages.iter().copied()).collect()
    }

    /// Split into the three aligned sequences: texts, page numbers, titles.
    #[must_use]
    pub fn into_parts(self) -> (Vec<Vec<String>>, Vec<Vec<usize>>, Vec<TitlePath>) {
        let mut texts = Vec::with_capacity(self.chunks.len());
        let mut pages = Vec::with_capacity(self.chunks.len());
        let mut titles = Vec::with_capacity(self.chunks.len());
        for c in self.chunks {
            texts.push(c.texts);
            pages.push(c.pages);
            titles.push(c.title_path);
        }
        (texts, pages, titles)
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<Chunk> {
        self.chunks
    }
}

impl IntoIterator for ChunkSet {
    type Item = Chunk;
    type IntoIter = std::vec::IntoIter<Chunk>;

    fn into_iter(self) -> Self::IntoIter {
        self.chunks.into_iter()
    }
}

impl<'a> IntoIterator for &'a ChunkSet {
    type Item = &'a Chunk;
    type IntoIter = std::slice::Iter<'a, Chunk>;

    fn into_iter(self) -> Self::IntoIter {
        self.chunks.iter()
    }
}
