//! Learning-set records
//!
//! Four record kinds make up a set: resources (one per processed video),
//! vocab entries, translations and notes. Records reference each other by id
//! only; ids are per-kind decimal counters starting at 1. Optional fields and
//! empty reference lists are left out of the serialized form entirely.

pub mod builder;
pub mod context;

use serde::{Deserialize, Serialize};

pub use builder::{RecordBuilder, VideoRecords};
pub use context::BuildContext;

pub type ResourceId = String;
pub type VocabId = String;
pub type TranslationId = String;
pub type NoteId = String;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: NoteId,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", alias = "showBeforeExercice")]
    pub show_before_exercise: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Translation {
    pub id: TranslationId,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<Vec<NoteId>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vocab {
    pub id: VocabId,
    pub language: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub considered_character: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub considered_sentence: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub considered_word: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<Vec<NoteId>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub translations: Option<Vec<TranslationId>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    pub id: ResourceId,
    /// Always true for resources produced here
    pub is_immersion_content: bool,
    pub language: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vocab: Option<Vec<VocabId>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<Vec<NoteId>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fact_cards: Option<Vec<String>>,
}

/// Input for [`BuildContext::add_note`]
#[derive(Debug, Clone, Default)]
pub struct NewNote {
    pub content: String,
    pub note_type: Option<String>,
    pub show_before_exercise: Option<bool>,
}

/// Input for [`BuildContext::add_translation`]
#[derive(Debug, Clone, Default)]
pub struct NewTranslation {
    pub content: String,
    pub notes: Vec<NoteId>,
}

/// Input for [`BuildContext::add_vocab`]
#[derive(Debug, Clone, Default)]
pub struct NewVocab {
    pub language: String,
    pub content: String,
    pub considered_character: Option<bool>,
    pub considered_sentence: Option<bool>,
    pub considered_word: Option<bool>,
    pub priority: Option<u32>,
    pub notes: Vec<NoteId>,
    pub translations: Vec<TranslationId>,
}

/// Input for [`BuildContext::add_resource`]
#[derive(Debug, Clone, Default)]
pub struct NewResource {
    pub language: String,
    pub title: String,
    pub content: Option<String>,
    pub priority: Option<u32>,
    pub link: Option<String>,
    pub vocab: Vec<VocabId>,
    pub notes: Vec<NoteId>,
    pub fact_cards: Vec<String>,
}

/// `None` for an empty list so the field is omitted on output.
pub(crate) fn non_empty<T>(items: Vec<T>) -> Option<Vec<T>> {
    if items.is_empty() { None } else { Some(items) }
}

/// `None` for empty text.
pub(crate) fn non_blank(text: Option<String>) -> Option<String> {
    text.filter(|t| !t.is_empty())
}
