use std::collections::HashSet;

use super::{
    non_blank, non_empty, NewNote, NewResource, NewTranslation, NewVocab, Note, NoteId, Resource,
    ResourceId, Translation, TranslationId, Vocab, VocabId,
};

/// Monotonic per-kind id source; the first id handed out is "1"
#[derive(Debug, Default)]
struct IdCounter {
    last: u64,
}

impl IdCounter {
    fn next(&mut self) -> String {
        self.last += 1;
        self.last.to_string()
    }
}

/// Accumulates every record created during a run.
///
/// Ids are assigned here and nowhere else, so each kind's list is always
/// ordered by id with no gaps. Nothing is ever removed.
#[derive(Debug, Default)]
pub struct BuildContext {
    resources: Vec<Resource>,
    vocab: Vec<Vocab>,
    translations: Vec<Translation>,
    notes: Vec<Note>,
    resource_ids: IdCounter,
    vocab_ids: IdCounter,
    translation_ids: IdCounter,
    note_ids: IdCounter,
}

impl BuildContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `None` without consuming an id when the content is empty.
    pub fn add_note(&mut self, note: NewNote) -> Option<NoteId> {
        if note.content.is_empty() {
            return None;
        }

        let id = self.note_ids.next();
        self.notes.push(Note {
            id: id.clone(),
            content: note.content,
            note_type: non_blank(note.note_type),
            show_before_exercise: note.show_before_exercise,
        });
        Some(id)
    }

    /// Returns `None` without consuming an id when the content is empty.
    pub fn add_translation(&mut self, translation: NewTranslation) -> Option<TranslationId> {
        if translation.content.is_empty() {
            return None;
        }

        let id = self.translation_ids.next();
        self.translations.push(Translation {
            id: id.clone(),
            content: translation.content,
            notes: non_empty(translation.notes),
        });
        Some(id)
    }

    pub fn add_vocab(&mut self, vocab: NewVocab) -> VocabId {
        let id = self.vocab_ids.next();
        self.vocab.push(Vocab {
            id: id.clone(),
            language: vocab.language,
            content: vocab.content,
            considered_character: vocab.considered_character,
            considered_sentence: vocab.considered_sentence,
            considered_word: vocab.considered_word,
            priority: vocab.priority,
            notes: non_empty(vocab.notes),
            translations: non_empty(vocab.translations),
        });
        id
    }

    /// Every resource is flagged as immersion content.
    pub fn add_resource(&mut self, resource: NewResource) -> ResourceId {
        let id = self.resource_ids.next();
        self.resources.push(Resource {
            id: id.clone(),
            is_immersion_content: true,
            language: resource.language,
            title: resource.title,
            content: non_blank(resource.content),
            priority: resource.priority,
            link: non_blank(resource.link),
            vocab: non_empty(resource.vocab),
            notes: non_empty(resource.notes),
            fact_cards: non_empty(resource.fact_cards),
        });
        id
    }

    pub fn resources(&self) -> &[Resource] {
        &self.resources
    }

    pub fn vocab(&self) -> &[Vocab] {
        &self.vocab
    }

    pub fn translations(&self) -> &[Translation] {
        &self.translations
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    /// References pointing at ids that were never created, as readable messages.
    pub fn dangling_references(&self) -> Vec<String> {
        let vocab_ids: HashSet<&str> = self.vocab.iter().map(|v| v.id.as_str()).collect();
        let translation_ids: HashSet<&str> =
            self.translations.iter().map(|t| t.id.as_str()).collect();
        let note_ids: HashSet<&str> = self.notes.iter().map(|n| n.id.as_str()).collect();

        let mut problems = Vec::new();
        for resource in &self.resources {
            let owner = format!("resource {}", resource.id);
            missing_refs(&mut problems, &owner, "vocab", &resource.vocab, &vocab_ids);
            missing_refs(&mut problems, &owner, "note", &resource.notes, &note_ids);
        }
        for vocab in &self.vocab {
            let owner = format!("vocab {}", vocab.id);
            missing_refs(&mut problems, &owner, "translation", &vocab.translations, &translation_ids);
            missing_refs(&mut problems, &owner, "note", &vocab.notes, &note_ids);
        }
        for translation in &self.translations {
            let owner = format!("translation {}", translation.id);
            missing_refs(&mut problems, &owner, "note", &translation.notes, &note_ids);
        }

        problems
    }
}

fn missing_refs(
    problems: &mut Vec<String>,
    owner: &str,
    kind: &str,
    ids: &Option<Vec<String>>,
    known: &HashSet<&str>,
) {
    for id in ids.iter().flatten() {
        if !known.contains(id.as_str()) {
            problems.push(format!("{} references missing {} {}", owner, kind, id));
        }
    }
}
