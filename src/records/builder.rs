use std::collections::HashSet;
use tracing::{debug, info};

use crate::extract::VocabPair;
use super::{BuildContext, NewNote, NewResource, NewTranslation, NewVocab, NoteId, ResourceId, VocabId};

/// Ids created for one processed video
#[derive(Debug, Clone)]
pub struct VideoRecords {
    pub resource_id: ResourceId,
    pub vocab_ids: Vec<VocabId>,
    pub note_id: Option<NoteId>,
    /// Pairs received from the extractor, duplicates included
    pub extracted_pairs: usize,
}

/// Turns the extractor output for a video into linked records
pub struct RecordBuilder {
    target_language: String,
}

impl RecordBuilder {
    pub fn new(target_language: impl Into<String>) -> Self {
        Self {
            target_language: target_language.into(),
        }
    }

    /// Add the records for one video: a translation and vocab entry per
    /// distinct pair, a provenance note, and the resource tying them together.
    pub fn add_video(
        &self,
        ctx: &mut BuildContext,
        video_id: &str,
        subtitle_language: &str,
        pairs: Vec<VocabPair>,
    ) -> VideoRecords {
        let extracted_pairs = pairs.len();
        let unique = dedup_pairs(pairs);
        info!("Extracted {} vocab pairs, {} unique", extracted_pairs, unique.len());

        let vocab_ids: Vec<VocabId> = unique
            .into_iter()
            .map(|pair| self.add_vocab_entry(ctx, pair))
            .collect();

        let note_id = ctx.add_note(NewNote {
            content: provenance_note(video_id, subtitle_language),
            ..Default::default()
        });

        let resource_id = ctx.add_resource(NewResource {
            language: self.target_language.clone(),
            title: video_title(video_id),
            content: Some(format!("Watch this video: {}", watch_url(video_id))),
            priority: Some(1),
            vocab: vocab_ids.clone(),
            notes: note_id.iter().cloned().collect(),
            ..Default::default()
        });

        debug!("Created resource {} with {} vocab entries", resource_id, vocab_ids.len());

        VideoRecords {
            resource_id,
            vocab_ids,
            note_id,
            extracted_pairs,
        }
    }

    fn add_vocab_entry(&self, ctx: &mut BuildContext, pair: VocabPair) -> VocabId {
        let translation_id = ctx.add_translation(NewTranslation {
            content: pair.translation,
            ..Default::default()
        });

        ctx.add_vocab(NewVocab {
            language: self.target_language.clone(),
            content: pair.original,
            considered_word: Some(true),
            priority: Some(1),
            translations: translation_id.into_iter().collect(),
            ..Default::default()
        })
    }
}

/// First occurrence wins; order of first appearance is kept.
pub fn dedup_pairs(pairs: Vec<VocabPair>) -> Vec<VocabPair> {
    let mut seen = HashSet::new();
    pairs
        .into_iter()
        .filter(|pair| seen.insert(pair.clone()))
        .collect()
}

pub fn watch_url(video_id: &str) -> String {
    format!("https://www.youtube.com/watch?v={}", video_id)
}

pub fn video_title(video_id: &str) -> String {
    format!("YouTube Video - {}", video_id)
}

fn provenance_note(video_id: &str, subtitle_language: &str) -> String {
    format!("YouTube Video ID: {}\nSubtitle language: {}", video_id, subtitle_language)
}
