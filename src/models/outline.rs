use serde::{Deserialize, Serialize};

/// One bookmark from a document outline.
///
/// Entries arrive in depth-first order of the source outline. `level` starts
/// at 1 for top-level bookmarks and `start_page` is 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutlineEntry {
    pub level: usize,
    pub title: String,
    pub start_page: usize,
}

impl OutlineEntry {
    #[must_use]
    pub fn new(level: usize, title: impl Into<String>, start_page: usize) -> Self {
        Self {
            level,
            title: title.into(),
            start_page,
        }
    }
}

impl<S: Into<String>> From<(usize, S, usize)> for OutlineEntry {
    fn from((level, title, start_page): (usize, S, usize)) -> Self {
        Self::new(level, title, start_page)
    }
}

/// Hierarchical title of a chunk.
///
/// Slot `i` holds the most recent title seen at level `i + 1`, or an empty
/// string when no title is active at that level.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TitlePath(Vec<String>);

impl TitlePath {
    #[must_use]
    pub fn new(titles: Vec<String>) -> Self {
        Self(titles)
    }

    /// Single-slot path used when a document has no outline.
    #[must_use]
    pub fn single(title: impl Into<String>) -> Self {
        Self(vec![title.into()])
    }

    #[must_use]
    pub fn depth(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    #[must_use]
    pub fn titles(&self) -> Vec<&str> {
        self.0.iter().map(String::as_str).collect()
    }

    /// Deepest non-empty title on the path.
    #[must_use]
    pub fn leaf(&self) -> Option<&str> {
        self.0.iter().rev().find(|t| !t.is_empty()).map(String::as_str)
    }

    /// Join the non-empty titles, e.g. `"Part I > Chapter 2"`.
    #[must_use]
    pub fn joined(&self, sep: &str) -> String {
        self.0
            .iter()
            .filter(|t| !t.is_empty())
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(sep)
    }

    #[must_use]
    pub fn into_inner(self) -> Vec<String> {
        self.0
    }
}

impl From<Vec<String>> for TitlePath {
    fn from(titles: Vec<String>) -> Self {
        Self(titles)
    }
}
