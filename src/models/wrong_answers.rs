//! Wrong-answer list: entries the learner has failed, kept for targeted practice.
use super::VocabularyEntry;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WrongAnswerList {
    pub entries: Vec<VocabularyEntry>,
}

impl WrongAnswerList {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, term: &str) -> bool {
        self.entries.iter().any(|e| e.term == term)
    }

    /// Appends a copy of `entry` unless one with the same term is already
    /// listed. Returns true if it was inserted.
    pub fn insert_if_absent(&mut self, entry: &VocabularyEntry) -> bool {
        if self.contains(&entry.term) {
            return false;
        }
        self.entries.push(entry.clone());
        true
    }

    /// Overwrites the stored copy of an entry with its current state,
    /// keeping its position in the list.
    pub fn refresh(&mut self, entry: &VocabularyEntry) {
        if let Some(copy) = self.entries.iter_mut().find(|e| e.term == entry.term) {
            *copy = entry.clone();
        }
    }

    /// The first `count` entries, in insertion order.
    pub fn head(&self, count: usize) -> &[VocabularyEntry] {
        &self.entries[..count.min(self.entries.len())]
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
