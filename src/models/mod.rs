pub mod answer;
pub mod learning_log;
pub mod quiz_session;
pub mod schedule;
pub mod statistics;
pub mod vocabulary;
pub mod vocabulary_entry;
pub mod wrong_answers;

pub use answer::matches_definition;
pub use learning_log::{LearningLog, SessionScore};
pub use quiz_session::{AnswerFeedback, QuizMode, QuizSession};
pub use schedule::{ReviewSchedule, due_for_review};
pub use statistics::Statistics;
pub use vocabulary::Vocabulary;
pub use vocabulary_entry::{AttemptOutcome, VocabularyEntry};
pub use wrong_answers::WrongAnswerList;
