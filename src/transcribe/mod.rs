//! Confidence-gated transcription in front of a speech model.
//!
//! Audio capture and model inference are provided by the caller: the capture
//! callback pushes frames into a [`Recorder`], and a [`SpeechModel`]
//! implementation turns the buffered samples into segments. The recorder
//! only returns a transcript when the segments pass the [`QualityGate`].

pub mod gate;
pub mod recorder;
pub mod segment;

pub use gate::{QualityGate, Rejection};
pub use recorder::{Outcome, Recorder};
pub use segment::{Segment, TranscriptResult};

use crate::error::Result;

/// Decoder hints handed to the model with each request.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodeOptions {
    pub language: String,
    pub initial_prompt: Option<String>,
    pub sample_rate: u32,
    pub channels: u16,
}

/// Segments produced by one inference call.
///
/// Models may yield segments lazily; the recorder drains the iterator once.
pub struct Transcription {
    pub segments: Box<dyn Iterator<Item = Segment> + Send>,
    /// Language the model detected (or was told to use).
    pub language: String,
}

impl Transcription {
    #[must_use]
    pub fn new(segments: Vec<Segment>, language: impl Into<String>) -> Self {
        Self {
            segments: Box::new(segments.into_iter()),
            language: language.into(),
        }
    }
}

/// A loaded speech-to-text model.
pub trait SpeechModel: Send + Sync {
    /// Transcribe interleaved f32 samples.
    fn transcribe(&self, audio: &[f32], options: &DecodeOptions) -> Result<Transcription>;
}
