use std::sync::{Mutex, MutexGuard, PoisonError};

use tracing::{debug, info, warn};

use crate::config::TranscriptionSettings;
use crate::error::Result;
use crate::transcribe::gate::{QualityGate, Rejection};
use crate::transcribe::segment::{Segment, TranscriptResult};
use crate::transcribe::{DecodeOptions, SpeechModel};

/// Result of stopping a recording, with the reason when nothing was accepted.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Accepted(TranscriptResult),
    Rejected(Rejection),
}

impl Outcome {
    #[must_use]
    pub fn into_result(self) -> Option<TranscriptResult> {
        match self {
            Self::Accepted(result) => Some(result),
            Self::Rejected(_) => None,
        }
    }
}

#[derive(Debug, Default)]
struct RecorderState {
    recording: bool,
    samples: Vec<f32>,
}

/// Buffers captured audio between `start` and `stop`, then transcribes it.
///
/// `feed` is meant to be called from the audio callback thread while another
/// thread calls `start`/`stop`; share the recorder through an `Arc`.
pub struct Recorder<M: SpeechModel> {
    model: M,
    options: DecodeOptions,
    gate: QualityGate,
    state: Mutex<RecorderState>,
}

impl<M: SpeechModel> Recorder<M> {
    #[must_use]
    pub fn new(model: M, settings: &TranscriptionSettings) -> Self {
        Self {
            model,
            options: DecodeOptions {
                language: settings.language.clone(),
                initial_prompt: settings.initial_prompt.clone(),
                sample_rate: settings.sample_rate,
                channels: settings.channels,
            },
            gate: QualityGate::from_settings(settings),
            state: Mutex::new(RecorderState::default()),
        }
    }

    #[must_use]
    pub fn model(&self) -> &M {
        &self.model
    }

    fn lock(&self) -> MutexGuard<'_, RecorderState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    #[must_use]
    pub fn is_recording(&self) -> bool {
        self.lock().recording
    }

    /// Number of samples buffered so far.
    #[must_use]
    pub fn buffered_samples(&self) -> usize {
        self.lock().samples.len()
    }

    /// Begin buffering. Returns `false` if a recording is already running.
    pub fn start(&self) -> bool {
        let mut state = self.lock();
        if state.recording {
            return false;
        }
        state.samples.clear();
        state.recording = true;
        info!(
            sample_rate = self.options.sample_rate,
            channels = self.options.channels,
            "recording started"
        );
        true
    }

    /// Append one captured frame of interleaved samples. Ignored while not
    /// recording.
    pub fn feed(&self, frame: &[f32]) {
        let mut state = self.lock();
        if state.recording {
            state.samples.extend_from_slice(frame);
        }
    }

    /// Report a non-fatal status from the capture stream (overflow etc.).
    ///
    /// Returns whether a recording was running, so callers can tell a
    /// glitch in captured audio from one between recordings.
    pub fn report_status(&self, status: &str) -> bool {
        let state = self.lock();
        warn!(
            status = %status,
            recording = state.recording,
            buffered = state.samples.len(),
            "audio input status"
        );
        state.recording
    }

    /// Stop buffering and transcribe. `None` covers every rejection.
    pub fn stop(&self) -> Result<Option<TranscriptResult>> {
        Ok(self.stop_with_outcome()?.into_result())
    }

    /// Stop buffering and transcribe, keeping the rejection reason.
    ///
    /// Errors only when the model itself fails.
    pub fn stop_with_outcome(&self) -> Result<Outcome> {
        let samples = {
            let mut state = self.lock();
            if !state.recording {
                return Ok(Outcome::Rejected(Rejection::NotRecording));
            }
            state.recording = false;
            std::mem::take(&mut state.samples)
        };

        if samples.is_empty() {
            info!("recording stopped with no audio");
            return Ok(Outcome::Rejected(Rejection::NoAudio));
        }
        debug!(samples = samples.len(), "recording stopped, transcribing");

        let transcription = self.model.transcribe(&samples, &self.options)?;
        let language = transcription.language;
        let segments: Vec<Segment> = transcription.segments.collect();

        if let Err(rejection) = self.gate.check(&segments) {
            info!(%rejection, segments = segments.len(), "transcript rejected");
            return Ok(Outcome::Rejected(rejection));
        }

        let result = TranscriptResult::from_segments(segments, language);
        info!(
            segments = result.segments.len(),
            language = %result.detected_language,
            "transcript accepted"
        );
        Ok(Outcome::Accepted(result))
    }
}
