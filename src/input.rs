use std::path::Path;
use tokio::fs;
use tracing::info;

use crate::error::{Result, SubvocabError};

/// Language pair encoded in a video list file name (`<target>_<subtitle>.txt`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguagePair {
    /// Language being learned; every vocab entry and resource is tagged with it
    pub target: String,
    /// Language requested from the subtitle service
    pub subtitle: String,
}

/// Parsed video list: the language pair plus the ordered video identifiers
#[derive(Debug, Clone)]
pub struct VideoList {
    pub languages: LanguagePair,
    pub video_ids: Vec<String>,
}

/// Derive the language pair from the file stem, e.g. `data_in/apc_ar.txt` -> (`apc`, `ar`).
pub fn parse_language_pair<P: AsRef<Path>>(path: P) -> Result<LanguagePair> {
    let path = path.as_ref();
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .ok_or_else(|| invalid_name(path))?;

    let parts: Vec<&str> = stem.split('_').collect();
    match parts.as_slice() {
        [target, subtitle] => Ok(LanguagePair {
            target: target.to_string(),
            subtitle: subtitle.to_string(),
        }),
        _ => Err(invalid_name(path)),
    }
}

fn invalid_name(path: &Path) -> SubvocabError {
    SubvocabError::Config(format!(
        "Could not parse language codes from filename '{}'. Expected format '<target>_<subtitle>.txt'",
        path.display()
    ))
}

/// Trimmed, non-blank lines in file order
pub fn parse_video_ids(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Read a video list file. The file name is validated before the file is opened.
pub async fn read_video_list<P: AsRef<Path>>(path: P) -> Result<VideoList> {
    let path = path.as_ref();
    let languages = parse_language_pair(path)?;

    let content = fs::read_to_string(path).await.map_err(|e| {
        SubvocabError::Config(format!("Failed to read video list {}: {}", path.display(), e))
    })?;
    let video_ids = parse_video_ids(&content);

    info!("Loaded {} video IDs from {}", video_ids.len(), path.display());

    Ok(VideoList {
        languages,
        video_ids,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_language_pair() {
        let pair = parse_language_pair("data_in/apc_ar.txt").unwrap();
        assert_eq!(pair.target, "apc");
        assert_eq!(pair.subtitle, "ar");

        let pair = parse_language_pair("es_en").unwrap();
        assert_eq!(pair, LanguagePair { target: "es".into(), subtitle: "en".into() });
    }

    #[test]
    fn test_parse_language_pair_rejects_bad_names() {
        for name in ["esen.txt", "es_en_x.txt", "a__b.txt"] {
            let err = parse_language_pair(name).unwrap_err();
            assert!(err.is_fatal(), "{} should be rejected", name);
        }
    }

    #[test]
    fn test_parse_language_pair_allows_empty_component() {
        let pair = parse_language_pair("_en.txt").unwrap();
        assert_eq!(pair, LanguagePair { target: String::new(), subtitle: "en".into() });

        let pair = parse_language_pair("es_.txt").unwrap();
        assert_eq!(pair.subtitle, "");
    }

    #[test]
    fn test_parse_video_ids_skips_blank_lines() {
        let ids = parse_video_ids("  abc123 \n\n\t\nxyz789\r\n");
        assert_eq!(ids, vec!["abc123", "xyz789"]);
    }

    #[tokio::test]
    async fn test_read_video_list() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("es_en.txt");
        std::fs::write(&path, "abc123\n\nxyz789\n").unwrap();

        let list = read_video_list(&path).await.unwrap();
        assert_eq!(list.languages.target, "es");
        assert_eq!(list.languages.subtitle, "en");
        assert_eq!(list.video_ids, vec!["abc123", "xyz789"]);
    }

    #[tokio::test]
    async fn test_bad_name_fails_before_reading() {
        let err = read_video_list("does/not/exist/videos.txt").await.unwrap_err();
        assert!(err.to_string().contains("Expected format"));
    }
}
