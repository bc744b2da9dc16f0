//! Read-only study statistics snapshot.
use super::learning_log::percentage;
use super::{LearningLog, ReviewSchedule, Vocabulary, WrongAnswerList};
use chrono::NaiveDate;

#[derive(Clone, Debug, PartialEq)]
pub struct Statistics {
    pub vocabulary_size: usize,
    pub learned: usize,
    pub progress: f64,
    pub total_attempts: u64,
    pub overall_accuracy: f64,
    pub due_today: usize,
    pub wrong_answers: usize,
    pub last_study_date: Option<NaiveDate>,
    pub days_since_study: Option<i64>,
}

impl Statistics {
    pub fn collect(
        vocabulary: &Vocabulary,
        wrong_answers: &WrongAnswerList,
        log: &LearningLog,
        schedule: &ReviewSchedule,
        today: NaiveDate,
    ) -> Self {
        let learned = vocabulary.learned_count();
        Self {
            vocabulary_size: vocabulary.len(),
            learned,
            progress: percentage(learned as u64, vocabulary.len() as u64),
            total_attempts: log.total_attempts,
            overall_accuracy: log.overall_accuracy(),
            due_today: schedule.due_for_review(&vocabulary.entries, today).len(),
            wrong_answers: wrong_answers.len(),
            last_study_date: log.last_study_date,
            days_since_study: log.last_study_date.map(|d| (today - d).num_days()),
        }
    }
}
