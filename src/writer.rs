use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::info;

use crate::error::{Result, SubvocabError};
use crate::input::LanguagePair;
use crate::records::BuildContext;

pub const RESOURCES_FILE: &str = "resources.jsonl";
pub const VOCAB_FILE: &str = "vocab.jsonl";
pub const TRANSLATIONS_FILE: &str = "translations.jsonl";
pub const NOTES_FILE: &str = "notes.jsonl";

/// Record counts written for one set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteSummary {
    pub dir: PathBuf,
    pub resources: usize,
    pub vocab: usize,
    pub translations: usize,
    pub notes: usize,
}

/// `<root>/<target>/youtube-<target>-<subtitle>`
pub fn set_dir<P: AsRef<Path>>(root: P, languages: &LanguagePair) -> PathBuf {
    root.as_ref()
        .join(&languages.target)
        .join(format!("youtube-{}-{}", languages.target, languages.subtitle))
}

/// Write the four record files of a set, replacing any earlier output.
pub async fn write_set<P: AsRef<Path>>(
    ctx: &BuildContext,
    root: P,
    languages: &LanguagePair,
) -> Result<WriteSummary> {
    let dir = set_dir(root, languages);
    fs::create_dir_all(&dir).await.map_err(|e| {
        SubvocabError::OutputWrite(format!("Failed to create {}: {}", dir.display(), e))
    })?;

    write_jsonl(dir.join(RESOURCES_FILE), ctx.resources()).await?;
    write_jsonl(dir.join(VOCAB_FILE), ctx.vocab()).await?;
    write_jsonl(dir.join(TRANSLATIONS_FILE), ctx.translations()).await?;
    write_jsonl(dir.join(NOTES_FILE), ctx.notes()).await?;

    let summary = WriteSummary {
        dir,
        resources: ctx.resources().len(),
        vocab: ctx.vocab().len(),
        translations: ctx.translations().len(),
        notes: ctx.notes().len(),
    };

    info!("Saved {} resource entries (immersion content)", summary.resources);
    info!("Saved {} vocab entries", summary.vocab);
    info!("Saved {} translation entries", summary.translations);
    info!("Saved {} note entries", summary.notes);

    Ok(summary)
}

/// One compact JSON object per line, each line newline-terminated
pub fn to_jsonl<T: Serialize>(records: &[T]) -> Result<String> {
    let mut content = String::new();
    for record in records {
        content.push_str(&serde_json::to_string(record)?);
        content.push('\n');
    }
    Ok(content)
}

pub async fn write_jsonl<P: AsRef<Path>, T: Serialize>(path: P, records: &[T]) -> Result<()> {
    let path = path.as_ref();
    let content = to_jsonl(records)?;

    fs::write(path, content).await.map_err(|e| {
        SubvocabError::OutputWrite(format!("Failed to write {}: {}", path.display(), e))
    })?;

    info!("Wrote {} records to {}", records.len(), path.display());
    Ok(())
}

/// Parse a JSONL file, skipping blank lines
pub async fn read_jsonl<P: AsRef<Path>, T: DeserializeOwned>(path: P) -> Result<Vec<T>> {
    let content = fs::read_to_string(path).await?;
    content
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| serde_json::from_str(line).map_err(SubvocabError::from))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::{NewNote, NewResource, NewTranslation, NewVocab, Note, Resource, Translation, Vocab};
    use assert_fs::prelude::*;
    use assert_fs::TempDir;

    fn languages() -> LanguagePair {
        LanguagePair { target: "apc".into(), subtitle: "ar".into() }
    }

    fn sample_context() -> BuildContext {
        let mut ctx = BuildContext::new();
        let translation = ctx.add_translation(NewTranslation { content: "hello".into(), ..Default::default() });
        let vocab = ctx.add_vocab(NewVocab {
            language: "apc".into(),
            content: "مرحبا".into(),
            considered_word: Some(true),
            priority: Some(1),
            translations: translation.into_iter().collect(),
            ..Default::default()
        });
        let note = ctx.add_note(NewNote {
            content: "YouTube Video ID: abc\nSubtitle language: ar".into(),
            ..Default::default()
        });
        ctx.add_resource(NewResource {
            language: "apc".into(),
            title: "YouTube Video - abc".into(),
            priority: Some(1),
            vocab: vec![vocab],
            notes: note.into_iter().collect(),
            ..Default::default()
        });
        ctx
    }

    #[test]
    fn test_set_dir_layout() {
        assert_eq!(set_dir("sets", &languages()), PathBuf::from("sets/apc/youtube-apc-ar"));
    }

    #[test]
    fn test_jsonl_keeps_non_ascii() {
        let ctx = sample_context();
        let content = to_jsonl(ctx.vocab()).unwrap();
        assert_eq!(
            content,
            "{\"id\":\"1\",\"language\":\"apc\",\"content\":\"مرحبا\",\"consideredWord\":true,\"priority\":1,\"translations\":[\"1\"]}\n"
        );
    }

    #[test]
    fn test_empty_accumulator_writes_empty_file_content() {
        let records: Vec<Note> = Vec::new();
        assert_eq!(to_jsonl(&records).unwrap(), "");
    }

    #[tokio::test]
    async fn test_write_set_creates_files_and_reads_back() {
        let temp = TempDir::new().unwrap();
        let ctx = sample_context();

        let summary = write_set(&ctx, temp.path(), &languages()).await.unwrap();
        assert_eq!(summary.resources, 1);
        assert_eq!(summary.notes, 1);

        let dir = temp.child("apc").child("youtube-apc-ar");
        for name in [RESOURCES_FILE, VOCAB_FILE, TRANSLATIONS_FILE, NOTES_FILE] {
            assert!(dir.child(name).path().is_file(), "{} missing", name);
        }

        let resources: Vec<Resource> = read_jsonl(dir.child(RESOURCES_FILE).path()).await.unwrap();
        let vocab: Vec<Vocab> = read_jsonl(dir.child(VOCAB_FILE).path()).await.unwrap();
        let translations: Vec<Translation> = read_jsonl(dir.child(TRANSLATIONS_FILE).path()).await.unwrap();
        let notes: Vec<Note> = read_jsonl(dir.child(NOTES_FILE).path()).await.unwrap();

        assert_eq!(resources, ctx.resources());
        assert_eq!(vocab, ctx.vocab());
        assert_eq!(translations, ctx.translations());
        assert_eq!(notes, ctx.notes());
    }

    #[tokio::test]
    async fn test_write_set_truncates_previous_output() {
        let temp = TempDir::new().unwrap();
        let dir = temp.child("apc").child("youtube-apc-ar");
        dir.create_dir_all().unwrap();
        let notes_file = dir.child(NOTES_FILE);
        notes_file
            .write_str("{\"id\":\"1\",\"content\":\"old\"}\n{\"id\":\"2\",\"content\":\"old\"}\n{\"id\":\"3\",\"content\":\"old\"}\n")
            .unwrap();

        write_set(&sample_context(), temp.path(), &languages()).await.unwrap();

        let notes: Vec<Note> = read_jsonl(notes_file.path()).await.unwrap();
        assert_eq!(notes.len(), 1);
        assert_ne!(notes[0].content, "old");
    }

    #[tokio::test]
    async fn test_write_failure_is_output_error() {
        let temp = TempDir::new().unwrap();
        temp.child("blocked").write_str("not a directory").unwrap();

        let err = write_set(&sample_context(), temp.child("blocked").path(), &languages())
            .await
            .unwrap_err();
        assert!(matches!(err, SubvocabError::OutputWrite(_)));
    }
}
