//! Container for all vocabulary entries, keyed by term.
use super::VocabularyEntry;
use crate::error::{Result, VocabError};
use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Vocabulary {
    pub entries: Vec<VocabularyEntry>,
}

/// Starter word list written when no vocabulary file exists yet.
const SEED_WORDS: [(&str, &str); 30] = [
    ("abandon", "放弃、抛弃"),
    ("abstract", "抽象的、摘要"),
    ("achieve", "实现、达到"),
    ("adapt", "适应、改编"),
    ("advocate", "提倡、拥护"),
    ("allocate", "分配、配置"),
    ("analyze", "分析"),
    ("apparent", "明显的"),
    ("approach", "方法、接近"),
    ("appropriate", "适当的、拨款"),
    ("aspect", "方面、外观"),
    ("assess", "评估"),
    ("assume", "假设、承担"),
    ("attach", "附加、依附"),
    ("attitude", "态度"),
    ("attribute", "归因于、属性"),
    ("authority", "权威、当局"),
    ("available", "可获得的"),
    ("benefit", "利益、有益于"),
    ("bias", "偏见"),
    ("capable", "有能力的"),
    ("capacity", "能力、容量"),
    ("category", "类别"),
    ("challenge", "挑战"),
    ("circumstance", "情况、环境"),
    ("cite", "引用"),
    ("colleague", "同事"),
    ("commit", "承诺、犯罪"),
    ("communicate", "交流"),
    ("community", "社区"),
];

impl Vocabulary {
    pub fn seed() -> Self {
        Self {
            entries: SEED_WORDS
                .iter()
                .map(|(term, definition)| VocabularyEntry::new(*term, *definition))
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn find(&self, term: &str) -> Option<&VocabularyEntry> {
        self.entries.iter().find(|e| e.term == term)
    }

    pub fn find_mut(&mut self, term: &str) -> Option<&mut VocabularyEntry> {
        self.entries.iter_mut().find(|e| e.term == term)
    }

    fn find_ignore_case(&self, term: &str) -> Option<&VocabularyEntry> {
        let term = term.to_lowercase();
        self.entries.iter().find(|e| e.term.to_lowercase() == term)
    }

    pub fn learned_count(&self) -> usize {
        self.entries.iter().filter(|e| e.is_learned()).count()
    }

    /// Entries whose term contains `keyword` (ignoring case) or whose
    /// definition contains it verbatim.
    pub fn search(&self, keyword: &str) -> Vec<&VocabularyEntry> {
        let lowered = keyword.to_lowercase();
        self.entries
            .iter()
            .filter(|e| e.term.to_lowercase().contains(&lowered) || e.definition.contains(keyword))
            .collect()
    }

    /// Up to `count` distinct entries picked at random.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R, count: usize) -> Vec<VocabularyEntry> {
        let mut picked: Vec<VocabularyEntry> = self
            .entries
            .choose_multiple(rng, count.min(self.entries.len()))
            .cloned()
            .collect();
        picked.shuffle(rng);
        picked
    }

    /// Validates and appends a new entry. Nothing is changed on error.
    pub fn add_entry(&mut self, term: &str, definition: &str) -> Result<&VocabularyEntry> {
        let term = term.trim();
        let definition = definition.trim();

        if term.is_empty() {
            return Err(VocabError::InvalidInput("term must not be empty".to_string()));
        }
        if let Some(existing) = self.find_ignore_case(term) {
            return Err(VocabError::DuplicateTerm {
                term: existing.term.clone(),
                definition: existing.definition.clone(),
            });
        }
        if definition.is_empty() {
            return Err(VocabError::InvalidInput(
                "definition must not be empty".to_string(),
            ));
        }

        self.entries.push(VocabularyEntry::new(term, definition));
        Ok(&self.entries[self.entries.len() - 1])
    }

    /// Checks whether `term` could be added, so the CLI can reject a
    /// duplicate before asking for the definition.
    pub fn check_new_term(&self, term: &str) -> Result<()> {
        let term = term.trim();
        if term.is_empty() {
            return Err(VocabError::InvalidInput("term must not be empty".to_string()));
        }
        match self.find_ignore_case(term) {
            Some(existing) => Err(VocabError::DuplicateTerm {
                term: existing.term.clone(),
                definition: existing.definition.clone(),
            }),
            None => Ok(()),
        }
    }
}
