//! Aggregate study counters, updated once per finished quiz.
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LearningLog {
    #[serde(alias = "total_tests", default)]
    pub total_attempts: u64,
    #[serde(alias = "correct_count", default)]
    pub correct_attempts: u64,
    #[serde(default)]
    pub last_study_date: Option<NaiveDate>,
}

/// Result of one quiz run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SessionScore {
    pub total: usize,
    pub correct: usize,
}

impl SessionScore {
    pub fn wrong(&self) -> usize {
        self.total - self.correct
    }

    /// Percentage of correct answers. Zero for an empty batch.
    pub fn accuracy(&self) -> f64 {
        percentage(self.correct as u64, self.total as u64)
    }
}

impl LearningLog {
    /// Adds a finished session's counts and stamps the study date.
    pub fn fold(&mut self, score: &SessionScore, today: NaiveDate) {
        self.total_attempts += score.total as u64;
        self.correct_attempts += score.correct as u64;
        self.last_study_date = Some(today);
    }

    pub fn overall_accuracy(&self) -> f64 {
        percentage(self.correct_attempts, self.total_attempts)
    }
}

pub(crate) fn percentage(part: u64, whole: u64) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64 * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_accuracy() {
        let score = SessionScore {
            total: 10,
            correct: 7,
        };
        assert!((score.accuracy() - 70.0).abs() < f64::EPSILON);
        assert_eq!(score.wrong(), 3);
        assert_eq!(format!("{:.1}", score.accuracy()), "70.0");
    }

    #[test]
    fn test_fold_adds_counts_and_overwrites_date() {
        let mut log = LearningLog {
            total_attempts: 5,
            correct_attempts: 2,
            last_study_date: NaiveDate::from_ymd_opt(2024, 1, 1),
        };
        let today = NaiveDate::from_ymd_opt(2024, 1, 9).unwrap();

        log.fold(
            &SessionScore {
                total: 10,
                correct: 7,
            },
            today,
        );

        assert_eq!(log.total_attempts, 15);
        assert_eq!(log.correct_attempts, 9);
        assert_eq!(log.last_study_date, Some(today));
    }

    #[test]
    fn test_overall_accuracy_without_attempts() {
        assert_eq!(LearningLog::default().overall_accuracy(), 0.0);
    }

    #[test]
    fn test_deserialize_legacy_keys() {
        let json = r#"{"total_tests": 20, "correct_count": 15, "last_study_date": "2024-02-01"}"#;
        let log: LearningLog = serde_json::from_str(json).unwrap();
        assert_eq!(log.total_attempts, 20);
        assert_eq!(log.correct_attempts, 15);
        assert_eq!(log.last_study_date, NaiveDate::from_ymd_opt(2024, 2, 1));
    }
}
