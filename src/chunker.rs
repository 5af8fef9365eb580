//! Outline chunker: aligns a flat page sequence with a bookmark tree.
//!
//! Every outline entry opens a chunk that runs until the next entry's start
//! page (exclusive); the last entry runs to the end of the document. Each
//! chunk carries the hierarchical title path that was active when its
//! bookmark was reached.
//!
//! # Preconditions
//!
//! The page/outline provider must deliver levels `>= 1`, start pages within
//! `1..=pages.len()`, and start pages that never decrease. [`chunk`] does not
//! check these; violating input produces empty or truncated windows rather
//! than an error. Providers that want a guarantee can run [`check_outline`].

use tracing::{debug, warn};

use crate::config::ChunkingSettings;
use crate::error::{Result, TocChunkError};
use crate::models::{Chunk, ChunkSet, OutlineEntry, TitlePath};

/// Title used for the single chunk of a document without bookmarks.
pub const ENTIRE_DOCUMENT: &str = "Entire Document";

/// Split `pages` into chapter-aligned chunks following `outline`.
///
/// With an empty outline the whole document becomes one chunk titled
/// [`ENTIRE_DOCUMENT`]. Pages before the first bookmark belong to no chunk.
#[must_use]
pub fn chunk(pages: &[String], outline: &[OutlineEntry]) -> ChunkSet {
    chunk_with_fallback(pages, outline, &ChunkingSettings::default())
}

/// Same as [`chunk`], with the fallback title and diagnostics taken from
/// `settings`.
#[must_use]
pub fn chunk_with_fallback(
    pages: &[String],
    outline: &[OutlineEntry],
    settings: &ChunkingSettings,
) -> ChunkSet {
    let Some(first) = outline.first() else {
        debug!(pages = pages.len(), "no outline, using a single chunk");
        return ChunkSet::new(vec![Chunk {
            pages: (1..=pages.len()).collect(),
            texts: pages.to_vec(),
            title_path: TitlePath::single(settings.fallback_title.clone()),
        }]);
    };

    if settings.warn_on_leading_gap && first.start_page > 1 {
        warn!(
            dropped = first.start_page - 1,
            first_bookmark = %first.title,
            "pages before the first bookmark are not part of any chunk"
        );
    }

    let titles = title_paths(outline);
    let end = pages.len() + 1;

    let chunks: Vec<Chunk> = outline
        .iter()
        .enumerate()
        .zip(titles)
        .map(|((i, entry), title_path)| {
            let stop = outline.get(i + 1).map_or(end, |next| next.start_page);
            let (numbers, texts) = window(pages, entry.start_page, stop);
            Chunk {
                pages: numbers,
                texts,
                title_path,
            }
        })
        .collect();

    debug!(
        pages = pages.len(),
        bookmarks = outline.len(),
        chunks = chunks.len(),
        "chunked document by outline"
    );
    ChunkSet::new(chunks)
}

/// Build one title path per outline entry, in outline order.
///
/// A single buffer of `max_level` slots is carried across the whole pass.
/// Each entry writes its title at `level - 1`; moving to a shallower level
/// clears the slots that were deeper than the new entry. Skipping levels on
/// the way down leaves the skipped slots as they were.
#[must_use]
pub fn title_paths(outline: &[OutlineEntry]) -> Vec<TitlePath> {
    let max_level = outline.iter().map(|e| e.level).max().unwrap_or(0);
    let mut current = vec![String::new(); max_level];
    let mut previous_level = 0usize;
    let mut paths = Vec::with_capacity(outline.len());

    for entry in outline {
        if let Some(slot) = current.get_mut(entry.level.saturating_sub(1)) {
            slot.clone_from(&entry.title);
        }
        if previous_level > entry.level {
            for slot in &mut current[entry.level..previous_level] {
                slot.clear();
            }
        }
        paths.push(TitlePath::new(current.clone()));
        previous_level = entry.level;
    }

    paths
}

/// Pages `[start, stop)` (1-based) as numbers and texts, clamped to the
/// document so out-of-range bookmarks yield short or empty windows.
fn window(pages: &[String], start: usize, stop: usize) -> (Vec<usize>, Vec<String>) {
    let end = pages.len() + 1;
    let lo = start.clamp(1, end);
    let hi = stop.min(end).max(lo);
    ((lo..hi).collect(), pages[lo - 1..hi - 1].to_vec())
}

/// Verify the chunker's input preconditions for a document of `page_count`
/// pages. Intended for outline providers; [`chunk`] never calls it.
pub fn check_outline(page_count: usize, outline: &[OutlineEntry]) -> Result<()> {
    let mut previous_start = 0usize;
    for (i, entry) in outline.iter().enumerate() {
        if entry.level == 0 {
            return Err(TocChunkError::Outline {
                detail: format!("entry {i} ({:?}) has level 0", entry.title),
            });
        }
        if entry.start_page == 0 || entry.start_page > page_count {
            return Err(TocChunkError::Outline {
                detail: format!(
                    "entry {i} ({:?}) starts on page {} outside 1..={page_count}",
                    entry.title, entry.start_page
                ),
            });
        }
        if entry.start_page < previous_start {
            return Err(TocChunkError::Outline {
                detail: format!(
                    "entry {i} ({:?}) starts on page {} before the previous entry's page {previous_start}",
                    entry.title, entry.start_page
                ),
            });
        }
        previous_start = entry.start_page;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pages(n: usize) -> Vec<String> {
        (1..=n).map(|i| format!("text of page {i}")).collect()
    }

    fn outline(entries: &[(usize, &str, usize)]) -> Vec<OutlineEntry> {
        entries.iter().map(|&(l, t, p)| OutlineEntry::new(l, t, p)).collect()
    }

    #[test]
    fn empty_outline_yields_entire_document() {
        let doc = pages(4);
        let set = chunk(&doc, &[]);
        assert_eq!(set.len(), 1);
        let only = set.get(0).unwrap();
        assert_eq!(only.pages, vec![1, 2, 3, 4]);
        assert_eq!(only.texts, doc);
        assert_eq!(only.title_path.titles(), vec!["Entire Document"]);
    }

    #[test]
    fn empty_outline_on_empty_document() {
        let set = chunk(&[], &[]);
        assert_eq!(set.len(), 1);
        assert!(set.get(0).unwrap().is_empty());
    }

    #[test]
    fn fallback_title_is_configurable() {
        let settings = ChunkingSettings {
            fallback_title: "Whole Book".into(),
            ..ChunkingSettings::default()
        };
        let set = chunk_with_fallback(&pages(2), &[], &settings);
        assert_eq!(set.get(0).unwrap().title_path.titles(), vec!["Whole Book"]);
    }

    #[test]
    fn rollback_clears_deeper_titles() {
        let paths = title_paths(&outline(&[(1, "A", 1), (2, "B", 3), (1, "C", 5)]));
        assert_eq!(paths[0].titles(), vec!["A", ""]);
        assert_eq!(paths[1].titles(), vec!["A", "B"]);
        assert_eq!(paths[2].titles(), vec!["C", ""]);
    }

    #[test]
    fn rollback_spans_several_levels() {
        let paths = title_paths(&outline(&[
            (1, "Part", 1),
            (2, "Chapter", 1),
            (3, "Section", 2),
            (2, "Next chapter", 4),
        ]));
        assert_eq!(paths[2].titles(), vec!["Part", "Chapter", "Section"]);
        assert_eq!(paths[3].titles(), vec!["Part", "Next chapter", ""]);
    }

    #[test]
    fn skipped_level_is_left_untouched() {
        let paths = title_paths(&outline(&[(1, "A", 1), (3, "B", 3)]));
        assert_eq!(paths[0].titles(), vec!["A", "", ""]);
        assert_eq!(paths[1].titles(), vec!["A", "", "B"]);
    }

    #[test]
    fn skipped_level_keeps_stale_title() {
        // Rollback only runs when the level decreases, so a 1 -> 3 jump
        // neither clears nor fills slot 2.
        let paths = title_paths(&outline(&[
            (2, "old", 1),
            (1, "A", 2),
            (3, "deep", 3),
        ]));
        assert_eq!(paths[1].titles(), vec!["A", "", ""]);
        assert_eq!(paths[2].titles(), vec!["A", "", "deep"]);

        let paths = title_paths(&outline(&[
            (1, "A", 1),
            (2, "kept", 2),
            (3, "deep", 3),
            (3, "deeper", 4),
        ]));
        assert_eq!(paths[3].titles(), vec!["A", "kept", "deeper"]);
    }

    #[test]
    fn snapshots_are_independent() {
        let paths = title_paths(&outline(&[(1, "A", 1), (1, "B", 2)]));
        assert_eq!(paths[0].titles(), vec!["A"]);
        assert_eq!(paths[1].titles(), vec!["B"]);
    }

    #[test]
    fn windows_follow_bookmarks() {
        let doc = pages(6);
        let set = chunk(&doc, &outline(&[(1, "A", 1), (2, "B", 3), (1, "C", 5)]));
        let pages: Vec<Vec<usize>> = set.page_numbers().map(<[usize]>::to_vec).collect();
        assert_eq!(pages, vec![vec![1, 2], vec![3, 4], vec![5, 6]]);
        assert_eq!(set.get(1).unwrap().texts, vec![doc[2].clone(), doc[3].clone()]);
        assert_eq!(set.covered_pages(), (1..=6).collect::<Vec<_>>());
    }

    #[test]
    fn leading_pages_are_dropped() {
        let set = chunk(&pages(5), &outline(&[(1, "Intro", 3)]));
        assert_eq!(set.len(), 1);
        assert_eq!(set.get(0).unwrap().pages, vec![3, 4, 5]);
    }

    #[test]
    fn same_page_siblings_make_an_empty_chunk() {
        let set = chunk(&pages(4), &outline(&[(1, "A", 2), (1, "B", 2), (1, "C", 3)]));
        assert_eq!(set.len(), 3);
        assert!(set.get(0).unwrap().is_empty());
        assert!(set.get(0).unwrap().texts.is_empty());
        assert_eq!(set.get(1).unwrap().pages, vec![2]);
        assert_eq!(set.get(2).unwrap().pages, vec![3, 4]);
    }

    #[test]
    fn last_bookmark_on_last_page() {
        let set = chunk(&pages(3), &outline(&[(1, "A", 1), (1, "End", 3)]));
        assert_eq!(set.get(1).unwrap().pages, vec![3]);
    }

    #[test]
    fn out_of_range_input_does_not_panic() {
        let doc = pages(3);
        let set = chunk(&doc, &outline(&[(1, "A", 2), (1, "B", 9), (1, "C", 1)]));
        assert_eq!(set.len(), 3);
        assert_eq!(set.get(0).unwrap().pages, vec![2, 3]);
        assert!(set.get(1).unwrap().is_empty());
        assert_eq!(set.get(2).unwrap().pages, vec![1, 2, 3]);

        let set = chunk(&doc, &outline(&[(0, "zero", 0)]));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn check_outline_accepts_valid_input() {
        assert!(check_outline(5, &outline(&[(1, "A", 1), (2, "B", 1), (1, "C", 5)])).is_ok());
        assert!(check_outline(0, &[]).is_ok());
    }

    #[test]
    fn check_outline_rejects_bad_entries() {
        assert!(check_outline(5, &outline(&[(0, "A", 1)])).is_err());
        assert!(check_outline(5, &outline(&[(1, "A", 0)])).is_err());
        assert!(check_outline(5, &outline(&[(1, "A", 6)])).is_err());

        let err = check_outline(5, &outline(&[(1, "A", 3), (1, "B", 2)])).unwrap_err();
        assert!(err.to_string().contains("before the previous entry"));
    }
}
