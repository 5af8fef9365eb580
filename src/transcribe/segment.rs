use serde::Serialize;

/// One timed piece of transcribed speech with the model's confidence scores.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Segment {
    pub text: String,
    /// Start offset in seconds.
    #[serde(rename = "start")]
    pub start_time: f64,
    /// End offset in seconds.
    #[serde(rename = "end")]
    pub end_time: f64,
    pub avg_logprob: f64,
    pub no_speech_prob: f64,
}

/// Accepted transcript of one recording.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TranscriptResult {
    /// Segment texts joined with single spaces.
    #[serde(rename = "text")]
    pub full_text: String,
    pub segments: Vec<Segment>,
    #[serde(rename = "language")]
    pub detected_language: String,
}

impl TranscriptResult {
    #[must_use]
    pub fn from_segments(segments: Vec<Segment>, detected_language: impl Into<String>) -> Self {
        let full_text = segments
            .iter()
            .map(|s| s.text.as_str())
            .collect::<Vec<_>>()
            .join(" ");
        Self {
            full_text,
            segments,
            detected_language: detected_language.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segment(text: &str, start: f64) -> Segment {
        Segment {
            text: text.into(),
            start_time: start,
            end_time: start + 1.0,
            avg_logprob: -0.5,
            no_speech_prob: 0.1,
        }
    }

    #[test]
    fn full_text_joins_with_spaces() {
        let result = TranscriptResult::from_segments(
            vec![segment("hello", 0.0), segment("there", 1.0)],
            "en",
        );
        assert_eq!(result.full_text, "hello there");
        assert_eq!(result.detected_language, "en");
    }

    #[test]
    fn serialized_keys() {
        let result = TranscriptResult::from_segments(vec![segment("hi", 0.0)], "en");
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["text"], "hi");
        assert_eq!(json["language"], "en");
        assert_eq!(json["segments"][0]["start"], 0.0);
        assert_eq!(json["segments"][0]["end"], 1.0);
        assert_eq!(json["segments"][0]["no_speech_prob"], 0.1);
    }
}
