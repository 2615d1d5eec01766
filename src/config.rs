use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use crate::error::{Result, SubvocabError};

fn default_endpoint() -> String {
    "https://api.openai.com/v1/chat/completions".to_string()
}

fn default_model() -> String {
    "gpt-4o-mini".to_string()
}

fn default_api_key_env() -> String {
    "OPENAI_API_KEY".to_string()
}

fn default_timeout_secs() -> u64 {
    120
}

fn default_output_root() -> PathBuf {
    PathBuf::from("sets")
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub extractor: ExtractorConfig,
    #[serde(default)]
    pub transcript: TranscriptConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub run: RunConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractorConfig {
    /// Chat completion endpoint URL
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Model used for vocabulary extraction
    #[serde(default = "default_model")]
    pub model: String,
    /// Environment variable holding the API key
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TranscriptConfig {
    /// Keep HTML formatting tags in subtitle text
    #[serde(default)]
    pub preserve_formatting: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Root directory for generated sets
    #[serde(default = "default_output_root")]
    pub root: PathBuf,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunConfig {
    /// Stop after this many videos; unbounded when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_videos: Option<usize>,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            model: default_model(),
            api_key_env: default_api_key_env(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            root: default_output_root(),
        }
    }
}

impl Config {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| SubvocabError::Config(format!("Failed to read config file: {}", e)))?;

        toml::from_str(&content)
            .map_err(|e| SubvocabError::Config(format!("Failed to parse config file: {}", e)))
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| SubvocabError::Config(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(path, content)
            .map_err(|e| SubvocabError::Config(format!("Failed to write config file: {}", e)))?;

        Ok(())
    }

    /// Read the extractor API key from the configured environment variable.
    pub fn api_key(&self) -> Result<String> {
        match std::env::var(&self.extractor.api_key_env) {
            Ok(key) if !key.trim().is_empty() => Ok(key),
            _ => Err(SubvocabError::Config(format!(
                "{} environment variable is required",
                self.extractor.api_key_env
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[extractor]\nmodel = \"gpt-4o\"\n\n[run]\nmax_videos = 2\n").unwrap();

        let config = Config::from_file(&path).unwrap();
        assert_eq!(config.extractor.model, "gpt-4o");
        assert_eq!(config.extractor.endpoint, default_endpoint());
        assert_eq!(config.output.root, PathBuf::from("sets"));
        assert_eq!(config.run.max_videos, Some(2));
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = Config::default();
        config.output.root = PathBuf::from("out/sets");
        config.save_to_file(&path).unwrap();

        let reloaded = Config::from_file(&path).unwrap();
        assert_eq!(reloaded.output.root, PathBuf::from("out/sets"));
        assert_eq!(reloaded.run.max_videos, None);
    }

    #[test]
    fn test_invalid_file_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[extractor\nmodel =").unwrap();

        let err = Config::from_file(&path).unwrap_err();
        assert!(err.is_fatal());
    }

    #[test]
    fn test_missing_api_key_is_config_error() {
        let mut config = Config::default();
        config.extractor.api_key_env = "SUBVOCAB_TEST_KEY_THAT_IS_NEVER_SET".to_string();

        let err = config.api_key().unwrap_err();
        assert!(matches!(err, SubvocabError::Config(_)));
        assert!(err.to_string().contains("SUBVOCAB_TEST_KEY_THAT_IS_NEVER_SET"));
    }
}
