//! Runtime configuration.
//!
//! Values come from command line flags, then an optional `config.toml` in the
//! data directory, then the defaults below.

use crate::error::{Result, VocabError};
use crate::models::ReviewSchedule;
use crate::models::schedule::DEFAULT_INTERVALS;
use log::debug;
use serde::Deserialize;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

pub const DEFAULT_DATA_DIR: &str = "user_data";
pub const DEFAULT_QUIZ_SIZE: usize = 10;
pub const CONFIG_FILE: &str = "config.toml";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub data_dir: PathBuf,
    pub quiz_size: usize,
    pub review_intervals: Vec<i64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            quiz_size: DEFAULT_QUIZ_SIZE,
            review_intervals: DEFAULT_INTERVALS.to_vec(),
        }
    }
}

/// Shape of `config.toml`. Every key is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    quiz_size: Option<usize>,
    review_intervals: Option<Vec<i64>>,
}

impl Config {
    /// Resolves the configuration. `quiz_size` from the command line wins over
    /// the file value.
    pub fn load(data_dir: Option<PathBuf>, quiz_size: Option<usize>) -> Result<Self> {
        let mut config = Config::default();
        if let Some(dir) = data_dir {
            config.data_dir = dir;
        }

        let file = read_file_config(&config.data_dir.join(CONFIG_FILE))?;
        if let Some(size) = file.quiz_size {
            config.quiz_size = size;
        }
        if let Some(intervals) = file.review_intervals {
            config.review_intervals = intervals;
        }
        if let Some(size) = quiz_size {
            config.quiz_size = size;
        }

        config.validate()?;
        debug!("Resolved config: {:?}", config);
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.quiz_size == 0 {
            return Err(VocabError::InvalidConfig(
                "quiz_size must be at least 1".to_string(),
            ));
        }
        ReviewSchedule::new(&self.review_intervals)?;
        Ok(())
    }

    pub fn schedule(&self) -> Result<ReviewSchedule> {
        ReviewSchedule::new(&self.review_intervals)
    }
}

fn read_file_config(path: &Path) -> Result<FileConfig> {
    match fs::read_to_string(path) {
        Ok(text) => Ok(toml::from_str(&text)?),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(FileConfig::default()),
        Err(e) => Err(e.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(Some(dir.path().to_path_buf()), None).unwrap();

        assert_eq!(config.quiz_size, 10);
        assert_eq!(config.review_intervals, vec![1, 2, 4, 7, 15]);
        assert_eq!(config.data_dir, dir.path());
    }

    #[test]
    fn test_file_values_and_flag_precedence() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILE),
            "quiz_size = 5\nreview_intervals = [1, 3, 9]\n",
        )
        .unwrap();

        let from_file = Config::load(Some(dir.path().to_path_buf()), None).unwrap();
        assert_eq!(from_file.quiz_size, 5);
        assert_eq!(from_file.review_intervals, vec![1, 3, 9]);

        let with_flag = Config::load(Some(dir.path().to_path_buf()), Some(20)).unwrap();
        assert_eq!(with_flag.quiz_size, 20);
    }

    #[test]
    fn test_invalid_values_rejected() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            Config::load(Some(dir.path().to_path_buf()), Some(0)),
            Err(VocabError::InvalidConfig(_))
        ));

        fs::write(dir.path().join(CONFIG_FILE), "review_intervals = []\n").unwrap();
        assert!(Config::load(Some(dir.path().to_path_buf()), None).is_err());

        fs::write(dir.path().join(CONFIG_FILE), "quiz_size = \"ten\"\n").unwrap();
        assert!(matches!(
            Config::load(Some(dir.path().to_path_buf()), None),
            Err(VocabError::ConfigParse(_))
        ));
    }
}
