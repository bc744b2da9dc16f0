pub mod app;
pub mod config;
pub mod content;
pub mod error;
pub mod models;
pub mod storage;

pub use error::{Result, VocabError};
pub use models::{LearningLog, QuizSession, ReviewSchedule, Vocabulary, VocabularyEntry, WrongAnswerList};
