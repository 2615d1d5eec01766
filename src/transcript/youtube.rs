use async_trait::async_trait;
use tracing::{debug, info};
use yt_transcript_rs::api::YouTubeTranscriptApi;

use crate::config::TranscriptConfig;
use crate::error::{Result, SubvocabError};
use super::{Transcript, TranscriptSource};

/// Fetches YouTube transcripts through the public timed-text endpoints
pub struct YouTubeTranscriptSource {
    api: YouTubeTranscriptApi,
    preserve_formatting: bool,
}

impl YouTubeTranscriptSource {
    pub fn new(config: &TranscriptConfig) -> Result<Self> {
        let api = YouTubeTranscriptApi::new(None, None, None).map_err(|e| {
            SubvocabError::Config(format!("Failed to create YouTube transcript client: {}", e))
        })?;

        Ok(Self {
            api,
            preserve_formatting: config.preserve_formatting,
        })
    }
}

#[async_trait]
impl TranscriptSource for YouTubeTranscriptSource {
    async fn fetch(&self, video_id: &str, language_code: &str) -> Result<Transcript> {
        debug!("Fetching {} transcript for video {}", language_code, video_id);

        let fetched = self
            .api
            .fetch_transcript(video_id, &[language_code], self.preserve_formatting)
            .await
            .map_err(|e| SubvocabError::TranscriptUnavailable {
                video_id: video_id.to_string(),
                reason: e.to_string(),
            })?;

        let transcript = Transcript::new(
            fetched.language_code.clone(),
            fetched.snippets.into_iter().map(|snippet| snippet.text),
        );

        info!(
            "Downloaded {} subtitle lines (language: {})",
            transcript.lines.len(),
            transcript.language_code
        );

        Ok(transcript)
    }
}
