//! Error type shared by the library.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum VocabError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config file error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Cannot start a quiz with no entries")]
    EmptyBatch,

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Term '{term}' already exists: {definition}")]
    DuplicateTerm { term: String, definition: String },
}

pub type Result<T> = std::result::Result<T, VocabError>;
