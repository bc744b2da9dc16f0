//! Quiz session management.
//! Walks a fixed batch of entries once, checks typed answers and applies
//! each attempt to the owning vocabulary and the wrong-answer list.

use super::answer::matches_definition;
use super::{AttemptOutcome, LearningLog, SessionScore, Vocabulary, VocabularyEntry, WrongAnswerList};
use crate::error::{Result, VocabError};
use chrono::NaiveDate;
use log::debug;

/// Where the batch of a quiz comes from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuizMode {
    Random,
    Review,
    WrongAnswers,
}

impl QuizMode {
    pub fn label(&self) -> &'static str {
        match self {
            QuizMode::Random => "Random quiz",
            QuizMode::Review => "Review quiz",
            QuizMode::WrongAnswers => "Wrong-answer practice",
        }
    }
}

/// Feedback for a single answered question.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnswerFeedback {
    pub outcome: AttemptOutcome,
    pub expected: String,
}

/// One pass over a batch of entries. Each entry is asked exactly once.
pub struct QuizSession {
    pub mode: QuizMode,
    pub batch: Vec<VocabularyEntry>,
    pub current_index: usize,
    pub score: SessionScore,
    pub today: NaiveDate,
}

impl QuizSession {
    /// Creates a session over `batch`. An empty batch is refused so a
    /// zero-length quiz can never be scored.
    pub fn new(mode: QuizMode, batch: Vec<VocabularyEntry>, today: NaiveDate) -> Result<Self> {
        if batch.is_empty() {
            return Err(VocabError::EmptyBatch);
        }
        Ok(Self {
            mode,
            batch,
            current_index: 0,
            score: SessionScore::default(),
            today,
        })
    }

    pub fn current_entry(&self) -> Option<&VocabularyEntry> {
        self.batch.get(self.current_index)
    }

    /// Grades `typed` against the current entry and moves to the next one.
    ///
    /// The attempt is applied to the vocabulary's own entry (matched by
    /// term) so progress made while practising wrong answers is kept; the
    /// wrong-answer copy is refreshed, and failed entries are added to it.
    pub fn answer_current(
        &mut self,
        typed: &str,
        vocabulary: &mut Vocabulary,
        wrong_answers: &mut WrongAnswerList,
    ) -> Option<AnswerFeedback> {
        let entry = self.batch.get_mut(self.current_index)?;
        let is_correct = matches_definition(typed, &entry.definition);

        let (outcome, updated) = match vocabulary.find_mut(&entry.term) {
            Some(owned) => {
                let outcome = owned.record_attempt(is_correct, self.today);
                (outcome, owned.clone())
            }
            // Entry removed from the vocabulary file by hand; track the copy.
            None => {
                let outcome = entry.record_attempt(is_correct, self.today);
                (outcome, entry.clone())
            }
        };
        *entry = updated.clone();

        match outcome {
            AttemptOutcome::Correct => {
                self.score.correct += 1;
                wrong_answers.refresh(&updated);
            }
            AttemptOutcome::Incorrect => {
                if !wrong_answers.insert_if_absent(&updated) {
                    wrong_answers.refresh(&updated);
                }
            }
        }
        self.score.total += 1;
        self.current_index += 1;

        debug!("'{}' answered {:?}", updated.term, outcome);

        Some(AnswerFeedback {
            outcome,
            expected: updated.definition,
        })
    }

    pub fn answered_count(&self) -> usize {
        self.current_index.min(self.batch.len())
    }

    pub fn total_count(&self) -> usize {
        self.batch.len()
    }

    pub fn remaining_count(&self) -> usize {
        self.total_count() - self.answered_count()
    }

    pub fn is_completed(&self) -> bool {
        self.current_index >= self.batch.len()
    }

    pub fn phase_message(&self) -> String {
        format!(
            "[{}/{}]",
            (self.current_index + 1).min(self.total_count()),
            self.total_count()
        )
    }

    /// Folds the score into the learning log and returns it.
    pub fn finish(self, log: &mut LearningLog) -> SessionScore {
        log.fold(&self.score, self.today);
        self.score
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    }

    fn first_n(vocabulary: &Vocabulary, n: usize) -> Vec<VocabularyEntry> {
        vocabulary.entries.iter().take(n).cloned().collect()
    }

    #[test]
    fn test_empty_batch_refused() {
        let result = QuizSession::new(QuizMode::Review, Vec::new(), today());
        assert!(matches!(result, Err(VocabError::EmptyBatch)));
    }

    #[test]
    fn test_seventy_percent_session() {
        let mut vocabulary = Vocabulary::seed();
        let mut wrong = WrongAnswerList::default();
        let mut log = LearningLog::default();

        let batch = first_n(&vocabulary, 10);
        let answers: Vec<String> = batch
            .iter()
            .enumerate()
            .map(|(i, e)| if i < 7 { e.definition.clone() } else { "xyz".to_string() })
            .collect();

        let mut session = QuizSession::new(QuizMode::Random, batch, today()).unwrap();
        for answer in &answers {
            assert!(!session.is_completed());
            session.answer_current(answer, &mut vocabulary, &mut wrong);
        }
        assert!(session.is_completed());
        assert!(session.answer_current("late", &mut vocabulary, &mut wrong).is_none());

        let score = session.finish(&mut log);
        assert_eq!(score.total, 10);
        assert_eq!(score.correct, 7);
        assert_eq!(format!("{:.1}", score.accuracy()), "70.0");
        assert_eq!(log.total_attempts, 10);
        assert_eq!(log.correct_attempts, 7);
        assert_eq!(log.last_study_date, Some(today()));

        assert_eq!(vocabulary.learned_count(), 7);
        assert_eq!(wrong.len(), 3);
    }

    #[test]
    fn test_correct_answer_updates_vocabulary_entry() {
        let mut vocabulary = Vocabulary::seed();
        let mut wrong = WrongAnswerList::default();
        let batch = vec![vocabulary.find("abandon").unwrap().clone()];

        let mut session = QuizSession::new(QuizMode::Random, batch, today()).unwrap();
        let feedback = session
            .answer_current("放弃", &mut vocabulary, &mut wrong)
            .unwrap();

        assert_eq!(feedback.outcome, AttemptOutcome::Correct);
        let abandon = vocabulary.find("abandon").unwrap();
        assert_eq!(abandon.learned_date, Some(today()));
        assert_eq!(abandon.review_count, 1);
        assert!(wrong.is_empty());
    }

    #[test]
    fn test_wrong_answer_recorded_once() {
        let mut vocabulary = Vocabulary::seed();
        let mut wrong = WrongAnswerList::default();

        for _ in 0..2 {
            let batch = vec![vocabulary.find("bias").unwrap().clone()];
            let mut session = QuizSession::new(QuizMode::Random, batch, today()).unwrap();
            let feedback = session
                .answer_current("xyz", &mut vocabulary, &mut wrong)
                .unwrap();
            assert_eq!(feedback.outcome, AttemptOutcome::Incorrect);
            assert_eq!(feedback.expected, "偏见");
        }

        assert_eq!(wrong.len(), 1);
        assert_eq!(vocabulary.find("bias").unwrap().review_count, 0);
    }

    #[test]
    fn test_wrong_answer_practice_keeps_progress() {
        let mut vocabulary = Vocabulary::seed();
        let mut wrong = WrongAnswerList::default();
        wrong.insert_if_absent(vocabulary.find("cite").unwrap());

        let batch = wrong.head(10).to_vec();
        let mut session = QuizSession::new(QuizMode::WrongAnswers, batch, today()).unwrap();
        session.answer_current("引用", &mut vocabulary, &mut wrong);

        assert_eq!(vocabulary.find("cite").unwrap().review_count, 1);
        assert_eq!(wrong.entries[0].review_count, 1);
        assert_eq!(wrong.len(), 1);
    }

    #[test]
    fn test_progress_counters() {
        let mut vocabulary = Vocabulary::seed();
        let mut wrong = WrongAnswerList::default();
        let mut session =
            QuizSession::new(QuizMode::Random, first_n(&vocabulary, 3), today()).unwrap();

        assert_eq!(session.phase_message(), "[1/3]");
        session.answer_current("xyz", &mut vocabulary, &mut wrong);
        assert_eq!(session.answered_count(), 1);
        assert_eq!(session.remaining_count(), 2);
        assert_eq!(session.phase_message(), "[2/3]");
    }
}
