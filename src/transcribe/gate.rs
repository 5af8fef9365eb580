use std::fmt;

use crate::config::TranscriptionSettings;
use crate::transcribe::segment::Segment;

/// Why a recording produced no transcript.
#[derive(Debug, Clone, PartialEq)]
pub enum Rejection {
    /// `stop` was called without a running recording.
    NotRecording,
    /// No samples were captured.
    NoAudio,
    /// The model returned no segments.
    NoSegments,
    /// Mean `avg_logprob` fell below the threshold.
    LowConfidence { mean_avg_logprob: f64 },
    /// Mean `no_speech_prob` rose above the threshold.
    LikelyNoSpeech { mean_no_speech_prob: f64 },
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotRecording => write!(f, "not recording"),
            Self::NoAudio => write!(f, "no audio captured"),
            Self::NoSegments => write!(f, "no segments transcribed"),
            Self::LowConfidence { mean_avg_logprob } => {
                write!(f, "low confidence (mean avg_logprob {mean_avg_logprob:.3})")
            }
            Self::LikelyNoSpeech {
                mean_no_speech_prob,
            } => write!(f, "likely no speech (mean no_speech_prob {mean_no_speech_prob:.3})"),
        }
    }
}

/// Binary accept/reject check over a complete set of segments.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QualityGate {
    pub min_avg_logprob: f64,
    pub max_no_speech_prob: f64,
}

impl Default for QualityGate {
    fn default() -> Self {
        Self::from_settings(&TranscriptionSettings::default())
    }
}

impl QualityGate {
    #[must_use]
    pub fn from_settings(settings: &TranscriptionSettings) -> Self {
        Self {
            min_avg_logprob: settings.min_avg_logprob,
            max_no_speech_prob: settings.max_no_speech_prob,
        }
    }

    /// Accept when mean `avg_logprob >= min_avg_logprob` and mean
    /// `no_speech_prob <= max_no_speech_prob`. Confidence is checked first.
    pub fn check(&self, segments: &[Segment]) -> Result<(), Rejection> {
        let Some(mean_avg_logprob) = mean(segments.iter().map(|s| s.avg_logprob)) else {
            return Err(Rejection::NoSegments);
        };
        if mean_avg_logprob < self.min_avg_logprob {
            return Err(Rejection::LowConfidence { mean_avg_logprob });
        }

        let mean_no_speech_prob = mean(segments.iter().map(|s| s.no_speech_prob)).unwrap_or(0.0);
        if mean_no_speech_prob > self.max_no_speech_prob {
            return Err(Rejection::LikelyNoSpeech {
                mean_no_speech_prob,
            });
        }
        Ok(())
    }
}

fn mean(values: impl Iterator<Item = f64>) -> Option<f64> {
    let (sum, count) = values.fold((0.0, 0usize), |(sum, n), v| (sum + v, n + 1));
    (count > 0).then(|| sum / count as f64)
}
