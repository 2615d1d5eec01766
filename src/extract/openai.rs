use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

use crate::config::ExtractorConfig;
use crate::error::{Result, SubvocabError};
use super::CompletionClient;

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    response_format: ResponseFormat,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    format_type: &'static str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    #[serde(default)]
    content: Option<String>,
}

/// OpenAI-compatible chat completion client running in JSON mode
pub struct OpenAiClient {
    client: Client,
    endpoint: String,
    model: String,
    api_key: String,
}

impl OpenAiClient {
    pub fn new(config: &ExtractorConfig, api_key: String) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
            model: config.model.clone(),
            api_key,
        })
    }
}

#[async_trait]
impl CompletionClient for OpenAiClient {
    async fn complete_json(&self, system: &str, user: &str) -> Result<String> {
        let request = ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage { role: "system", content: system },
                ChatMessage { role: "user", content: user },
            ],
            response_format: ResponseFormat { format_type: "json_object" },
        };

        debug!("Sending completion request to: {}", self.endpoint);

        let response = self.client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| SubvocabError::Extraction(format!("HTTP request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(SubvocabError::Extraction(format!(
                "Completion API error {}: {}", status, error_text
            )));
        }

        let chat: ChatResponse = response.json().await
            .map_err(|e| SubvocabError::Extraction(format!("Failed to parse response: {}", e)))?;

        let content = chat
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .unwrap_or_default();

        if content.trim().is_empty() {
            return Err(SubvocabError::Extraction("Empty completion received".to_string()));
        }

        Ok(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_body_uses_json_mode() {
        let request = ChatRequest {
            model: "gpt-4o-mini",
            messages: vec![ChatMessage { role: "user", content: "hola" }],
            response_format: ResponseFormat { format_type: "json_object" },
        };

        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(body["response_format"]["type"], "json_object");
        assert_eq!(body["messages"][0]["role"], "user");
        assert_eq!(body["model"], "gpt-4o-mini");
    }

    #[test]
    fn test_response_without_content() {
        let chat: ChatResponse =
            serde_json::from_str(r#"{"choices":[{"message":{"role":"assistant"}}]}"#).unwrap();
        assert!(chat.choices[0].message.content.is_none());
    }

    #[test]
    fn test_client_builds_from_config() {
        let config = ExtractorConfig::default();
        let client = OpenAiClient::new(&config, "sk-test".to_string()).unwrap();
        assert_eq!(client.model, "gpt-4o-mini");
        assert_eq!(client.endpoint, "https://api.openai.com/v1/chat/completions");
    }
}
