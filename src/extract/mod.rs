// Vocabulary extraction
//
// One completion request per subtitle line. The completion service sits behind
// `CompletionClient` so the HTTP client can be swapped out:
// - openai: OpenAI-compatible chat completions in JSON mode
// - parse: tolerant interpretation of the returned JSON
// - prompt: system and user prompt text

pub mod openai;
pub mod parse;
pub mod prompt;

use async_trait::async_trait;
use tracing::{debug, error};

use crate::error::Result;

pub use parse::parse_vocab_response;

/// A word or phrase from a subtitle line with its translation.
///
/// Both sides are trimmed on construction; equality and hashing cover exactly
/// the trimmed pair, which makes it the per-video deduplication key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VocabPair {
    pub original: String,
    pub translation: String,
}

impl VocabPair {
    pub fn new(original: impl AsRef<str>, translation: impl AsRef<str>) -> Self {
        Self {
            original: original.as_ref().trim().to_string(),
            translation: translation.as_ref().trim().to_string(),
        }
    }
}

/// Chat completion service that answers with a JSON document
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Send one system + user exchange and return the raw response content
    async fn complete_json(&self, system: &str, user: &str) -> Result<String>;
}

pub struct VocabExtractor {
    client: Box<dyn CompletionClient>,
}

impl VocabExtractor {
    pub fn new(client: Box<dyn CompletionClient>) -> Self {
        Self { client }
    }

    /// Extract pairs from one subtitle line. Failures are logged and yield no pairs.
    pub async fn extract(&self, line: &str, source_language: &str) -> Vec<VocabPair> {
        match self.try_extract(line, source_language).await {
            Ok(pairs) => pairs,
            Err(e) => {
                error!("Error extracting vocabulary from '{}': {}", line, e);
                Vec::new()
            }
        }
    }

    pub async fn try_extract(&self, line: &str, source_language: &str) -> Result<Vec<VocabPair>> {
        let user_prompt = prompt::build_extraction_prompt(line, source_language);
        debug!("Requesting vocabulary for line: {}", line);

        let raw = self.client.complete_json(prompt::SYSTEM_PROMPT, &user_prompt).await?;
        debug!("Completion response for line '{}': {}", line, raw);

        parse_vocab_response(&raw).inspect_err(|_| {
            error!("Response content: {}", raw);
        })
    }
}
