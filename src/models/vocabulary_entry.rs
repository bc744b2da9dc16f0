//! VocabularyEntry is a pair <term, definition> plus its learning progress.
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabularyEntry {
    #[serde(alias = "english")]
    pub term: String,
    #[serde(alias = "chinese")]
    pub definition: String,
    /// Date of the first correct answer. Never reset once set.
    #[serde(default)]
    pub learned_date: Option<NaiveDate>,
    #[serde(default)]
    pub review_count: u32,
}

/// Result of a single quiz attempt, handed back so the caller can route
/// failed entries to the wrong-answer list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AttemptOutcome {
    Correct,
    Incorrect,
}

impl VocabularyEntry {
    pub fn new(term: impl Into<String>, definition: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            definition: definition.into(),
            learned_date: None,
            review_count: 0,
        }
    }

    pub fn is_learned(&self) -> bool {
        self.learned_date.is_some()
    }

    /// Applies one quiz attempt. Only a correct answer changes state: the
    /// first one marks the entry learned on `today`.
    pub fn record_attempt(&mut self, is_correct: bool, today: NaiveDate) -> AttemptOutcome {
        if !is_correct {
            return AttemptOutcome::Incorrect;
        }

        if self.learned_date.is_none() {
            self.learned_date = Some(today);
        }
        self.review_count += 1;
        AttemptOutcome::Correct
    }
}
