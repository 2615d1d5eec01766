// Subtitle retrieval
//
// Sources implement `TranscriptSource`; the workflow only sees the cleaned
// text lines and the language the source actually served.
// - youtube: YouTube timed-text transcripts

pub mod youtube;

use async_trait::async_trait;

use crate::error::Result;

pub use youtube::YouTubeTranscriptSource;

/// Subtitle text for one video
#[derive(Debug, Clone, PartialEq)]
pub struct Transcript {
    /// Language code of the returned track, which may differ from the one requested
    pub language_code: String,
    /// Non-empty, trimmed lines in transcript order
    pub lines: Vec<String>,
}

impl Transcript {
    pub fn new(language_code: impl Into<String>, texts: impl IntoIterator<Item = String>) -> Self {
        Self {
            language_code: language_code.into(),
            lines: clean_lines(texts),
        }
    }
}

/// Main trait for subtitle retrieval
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TranscriptSource: Send + Sync {
    /// Fetch the transcript of a video. Fails with `TranscriptUnavailable`.
    async fn fetch(&self, video_id: &str, language_code: &str) -> Result<Transcript>;
}

/// Trim each snippet and drop the empty ones
pub fn clean_lines(texts: impl IntoIterator<Item = String>) -> Vec<String> {
    texts
        .into_iter()
        .map(|text| text.trim().to_string())
        .filter(|text| !text.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_lines() {
        let lines = clean_lines(vec![
            " hola ".to_string(),
            "   ".to_string(),
            String::new(),
            "[música]".to_string(),
        ]);
        assert_eq!(lines, vec!["hola", "[música]"]);
    }

    #[test]
    fn test_transcript_keeps_order() {
        let transcript = Transcript::new("es", vec!["uno".to_string(), "dos".to_string()]);
        assert_eq!(transcript.language_code, "es");
        assert_eq!(transcript.lines, vec!["uno", "dos"]);
    }
}
