// Pedantic lint configuration for the crate.
// - cast_possible_truncation: page counts and levels stay far below u32 limits
// - cast_precision_loss: acceptable for token estimates and probability means
// - missing_errors_doc: Error handling is self-evident from Result types
// - module_name_repetitions: `ChunkSet` in `chunk` reads better than `Set`
#![allow(
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::missing_errors_doc,
    clippy::module_name_repetitions
)]

//! Outline-aligned chunking of paginated documents.
//!
//! The core is [`chunker::chunk`]: it reconciles a flat page sequence with an
//! optional bookmark tree and returns contiguous, title-annotated chunks.
//! [`ingest`] supplies pages and outlines from PDFs or form-feed separated
//! text, and [`transcribe`] holds the confidence-gated recorder that sits in
//! front of a speech model.

pub mod chunker;
pub mod config;
pub mod error;
pub mod ingest;
pub mod logging;
pub mod models;
pub mod output;
pub mod transcribe;

pub use chunker::{check_outline, chunk, chunk_with_fallback};
pub use error::{Result, TocChunkError};
pub use models::{Chunk, ChunkSet, OutlineEntry, Page, TitlePath};
