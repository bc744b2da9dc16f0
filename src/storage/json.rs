//! JSON read/write helpers for the persisted records.
//! Files are pretty-printed with two-space indentation; non-ASCII text is
//! written as-is so the word lists stay readable in an editor.

use crate::error::Result;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

/// Writes `value` to `path`, replacing any existing file.
pub fn save_json<T: Serialize>(value: &T, path: &Path) -> Result<()> {
    let json_string = serde_json::to_string_pretty(value)?;
    let mut file = File::create(path)?;
    file.write_all(json_string.as_bytes())?;
    file.write_all(b"\n")?;
    Ok(())
}

/// Reads a value from a JSON file.
/// Returns an error if the file doesn't exist or contains invalid JSON.
pub fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let mut file = File::open(path)?;
    let mut contents = String::new();
    file.read_to_string(&mut contents)?;

    let value: T = serde_json::from_str(&contents)?;
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::VocabError;
    use crate::models::{Vocabulary, VocabularyEntry};
    use std::fs;

    fn create_test_vocabulary() -> Vocabulary {
        Vocabulary {
            entries: vec![
                VocabularyEntry::new("abandon", "放弃、抛弃"),
                VocabularyEntry::new("bias", "偏见"),
            ],
        }
    }

    #[test]
    fn test_save_json_writes_readable_text() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("words.json");

        save_json(&create_test_vocabulary(), &path).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert!(text.contains("放弃、抛弃"), "non-ASCII should not be escaped");
        assert!(text.contains("\n  {"), "should be indented");
        assert!(text.contains("\"learned_date\": null"));
    }

    #[test]
    fn test_load_json() {
        let json_content = r#"[
  {
    "term": "test term",
    "definition": "test definition",
    "learned_date": "2024-05-06",
    "review_count": 2
  }
]"#;
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("words.json");
        fs::write(&path, json_content).unwrap();

        let vocabulary: Vocabulary = load_json(&path).unwrap();
        assert_eq!(vocabulary.len(), 1);
        assert_eq!(vocabulary.entries[0].term, "test term");
        assert_eq!(vocabulary.entries[0].review_count, 2);
    }

    #[test]
    fn test_load_nonexistent_file() {
        let dir = tempfile::tempdir().unwrap();
        let result: Result<Vocabulary> = load_json(&dir.path().join("missing.json"));
        assert!(matches!(result, Err(VocabError::Io(_))));
    }

    #[test]
    fn test_load_invalid_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("words.json");
        fs::write(&path, "{ this is not valid json }").unwrap();

        let result: Result<Vocabulary> = load_json(&path);
        assert!(matches!(result, Err(VocabError::Json(_))));
    }
}
