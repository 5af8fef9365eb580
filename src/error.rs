use thiserror::Error;

#[derive(Error, Debug)]
pub enum TocChunkError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("parse error in {path}: {detail}")]
    Parse { path: String, detail: String },

    #[error("invalid outline: {detail}")]
    Outline { detail: String },

    /// Raised by `SpeechModel` implementations when inference fails.
    #[error("transcription failed: {0}")]
    Transcription(String),

    #[error("config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, TocChunkError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_errors_convert_with_question_mark() {
        fn read() -> Result<String> {
            Ok(std::fs::read_to_string("/nonexistent/tocchunk")?)
        }
        let err = read().unwrap_err();
        assert!(matches!(err, TocChunkError::Io(_)));
        assert!(err.to_string().starts_with("io error: "));
    }

    #[test]
    fn messages_name_the_failing_input() {
        let err = TocChunkError::Parse {
            path: "book.pdf".into(),
            detail: "PDF load error".into(),
        };
        assert_eq!(err.to_string(), "parse error in book.pdf: PDF load error");
        assert_eq!(
            TocChunkError::Outline { detail: "page 0".into() }.to_string(),
            "invalid outline: page 0"
        );
    }
}
