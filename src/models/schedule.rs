//! Fixed-interval spaced repetition schedule.
//!
//! An entry is reviewed on fixed checkpoints counted in days since it was
//! first answered correctly (1, 2, 4, 7 and 15 days by default, following the
//! forgetting curve):
//! - The match is exact: an entry is due on a checkpoint day only, never
//!   "on or after" it
//! - Missing a checkpoint does not carry the entry over to the next day
//! - Entries that were never answered correctly are never due

use super::VocabularyEntry;
use crate::error::{Result, VocabError};
use chrono::NaiveDate;

pub const DEFAULT_INTERVALS: [i64; 5] = [1, 2, 4, 7, 15];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReviewSchedule {
    intervals: Vec<i64>,
}

impl Default for ReviewSchedule {
    fn default() -> Self {
        Self {
            intervals: DEFAULT_INTERVALS.to_vec(),
        }
    }
}

impl ReviewSchedule {
    /// Builds a schedule from day checkpoints. Checkpoints are sorted and
    /// deduplicated; an empty list or a non-positive day count is rejected.
    pub fn new(intervals: &[i64]) -> Result<Self> {
        if intervals.is_empty() {
            return Err(VocabError::InvalidConfig(
                "review intervals must not be empty".to_string(),
            ));
        }
        if let Some(bad) = intervals.iter().find(|&&days| days <= 0) {
            return Err(VocabError::InvalidConfig(format!(
                "review interval must be a positive number of days, got {}",
                bad
            )));
        }

        let mut intervals = intervals.to_vec();
        intervals.sort_unstable();
        intervals.dedup();
        Ok(Self { intervals })
    }

    pub fn intervals(&self) -> &[i64] {
        &self.intervals
    }

    /// Returns true when `entry` hits one of the checkpoints exactly on `today`.
    pub fn is_due(&self, entry: &VocabularyEntry, today: NaiveDate) -> bool {
        match entry.learned_date {
            Some(learned) => {
                let days_passed = (today - learned).num_days();
                self.intervals.binary_search(&days_passed).is_ok()
            }
            None => false,
        }
    }

    /// Returns the entries due for review on `today`, in input order.
    pub fn due_for_review<'a, I>(&self, entries: I, today: NaiveDate) -> Vec<&'a VocabularyEntry>
    where
        I: IntoIterator<Item = &'a VocabularyEntry>,
    {
        entries
            .into_iter()
            .filter(|entry| self.is_due(entry, today))
            .collect()
    }
}

/// Free-function form over the default checkpoints.
pub fn due_for_review(entries: &[VocabularyEntry], today: NaiveDate) -> Vec<&VocabularyEntry> {
    ReviewSchedule::default().due_for_review(entries, today)
}
