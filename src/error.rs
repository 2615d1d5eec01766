use thiserror::Error;

#[derive(Error, Debug)]
pub enum SubvocabError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Transcript unavailable for video {video_id}: {reason}")]
    TranscriptUnavailable { video_id: String, reason: String },

    #[error("Vocabulary extraction error: {0}")]
    Extraction(String),

    #[error("Output write error: {0}")]
    OutputWrite(String),
}

impl SubvocabError {
    /// Configuration problems stop the run before any output is written.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::Config(_) | Self::Toml(_))
    }
}

pub type Result<T> = std::result::Result<T, SubvocabError>;
