//! Persistence for the vocabulary, the wrong-answer list and the learning log.
//!
//! Each record lives in its own JSON file inside the data directory and is
//! loaded in full at startup and rewritten in full on save.

pub mod json;

use crate::error::{Result, VocabError};
use crate::models::{LearningLog, Vocabulary, WrongAnswerList};
use json::{load_json, save_json};
use log::{info, warn};
use serde::de::DeserializeOwned;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

pub const WORDS_FILE: &str = "words.json";
pub const WRONG_WORDS_FILE: &str = "wrong_words.json";
pub const LEARNING_LOG_FILE: &str = "learning_log.json";

/// File-backed store rooted at a data directory.
pub struct DataStore {
    data_dir: PathBuf,
}

impl DataStore {
    /// Opens the store, creating the data directory if needed.
    pub fn open(data_dir: impl Into<PathBuf>) -> Result<Self> {
        let data_dir = data_dir.into();
        fs::create_dir_all(&data_dir)?;
        Ok(Self { data_dir })
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    fn path(&self, file: &str) -> PathBuf {
        self.data_dir.join(file)
    }

    /// Loads the vocabulary. A missing file is replaced by the seed list,
    /// which is written out immediately; an unreadable one falls back to the
    /// seed list in memory only.
    pub fn load_vocabulary(&self) -> Result<Vocabulary> {
        let path = self.path(WORDS_FILE);
        match load_or_missing(&path) {
            Some(vocabulary) => Ok(vocabulary),
            None if path.exists() => Ok(Vocabulary::seed()),
            None => {
                let seed = Vocabulary::seed();
                self.save_vocabulary(&seed)?;
                info!(
                    "Created sample vocabulary with {} entries at {}",
                    seed.len(),
                    path.display()
                );
                Ok(seed)
            }
        }
    }

    pub fn save_vocabulary(&self, vocabulary: &Vocabulary) -> Result<()> {
        save_json(vocabulary, &self.path(WORDS_FILE))
    }

    pub fn load_wrong_answers(&self) -> WrongAnswerList {
        load_or_missing(&self.path(WRONG_WORDS_FILE)).unwrap_or_default()
    }

    pub fn save_wrong_answers(&self, wrong_answers: &WrongAnswerList) -> Result<()> {
        save_json(wrong_answers, &self.path(WRONG_WORDS_FILE))
    }

    pub fn load_learning_log(&self) -> LearningLog {
        load_or_missing(&self.path(LEARNING_LOG_FILE)).unwrap_or_default()
    }

    pub fn save_learning_log(&self, log: &LearningLog) -> Result<()> {
        save_json(log, &self.path(LEARNING_LOG_FILE))
    }

    /// Writes all three records.
    pub fn save_all(
        &self,
        vocabulary: &Vocabulary,
        wrong_answers: &WrongAnswerList,
        log: &LearningLog,
    ) -> Result<()> {
        self.save_vocabulary(vocabulary)?;
        self.save_wrong_answers(wrong_answers)?;
        self.save_learning_log(log)?;
        info!("Saved study data to {}", self.data_dir.display());
        Ok(())
    }
}

/// Loads `path`, returning None when it is missing or cannot be parsed.
fn load_or_missing<T: DeserializeOwned>(path: &Path) -> Option<T> {
    match load_json(path) {
        Ok(value) => Some(value),
        Err(VocabError::Io(e)) if e.kind() == ErrorKind::NotFound => None,
        Err(e) => {
            warn!("Ignoring unreadable {}: {}", path.display(), e);
            None
        }
    }
}
