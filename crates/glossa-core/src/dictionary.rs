use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Senses consulted per lookup unless configured otherwise
pub const DEFAULT_MAX_SENSES: usize = 3;

/// Lexical database operations
pub trait LexicalResource: Send + Sync {
    /// All senses of a word in the resource's ranking order, empty if unknown
    fn senses_of(&self, word: &str) -> Vec<Sense>;

    /// Get lexicon metadata
    fn metadata(&self) -> LexiconMetadata;
}

/// One meaning of a word
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sense {
    pub definition: String,
    #[serde(default)]
    pub examples: Vec<String>,
    #[serde(default)]
    pub lemmas: Vec<Lemma>,
}

/// A word form belonging to a sense, with its antonyms in resource order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lemma {
    pub name: String,
    #[serde(default)]
    pub antonyms: Vec<String>,
}

impl Lemma {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            antonyms: vec![],
        }
    }

    pub fn with_antonyms(mut self, antonyms: &[&str]) -> Self {
        self.antonyms = antonyms.iter().map(|a| a.to_string()).collect();
        self
    }
}

#[derive(Debug, Clone)]
pub struct LexiconMetadata {
    pub name: String,
    pub version: String,
    pub language: String,
    pub entry_count: usize,
}

/// Flattened view of the leading senses of a word.
///
/// `synonyms` and `antonyms` deduplicate on the exact, case-sensitive name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DictionaryResult {
    pub meanings: Vec<String>,
    pub synonyms: BTreeSet<String>,
    pub antonyms: BTreeSet<String>,
    pub examples: Vec<String>,
}

impl DictionaryResult {
    pub fn is_empty(&self) -> bool {
        self.meanings.is_empty()
            && self.synonyms.is_empty()
            && self.antonyms.is_empty()
            && self.examples.is_empty()
    }

    /// The definition of the top ranked sense
    pub fn primary_meaning(&self) -> Option<&str> {
        self.meanings.first().map(String::as_str)
    }
}

/// Merge the first `max_senses` senses into a single result
pub fn aggregate_senses(senses: &[Sense], max_senses: usize) -> DictionaryResult {
    let mut result = DictionaryResult::default();

    for sense in senses.iter().take(max_senses) {
        result.meanings.push(sense.definition.clone());
        result.examples.extend(sense.examples.iter().cloned());

        for lemma in &sense.lemmas {
            result.synonyms.insert(lemma.name.clone());
            if let Some(antonym) = lemma.antonyms.first() {
                result.antonyms.insert(antonym.clone());
            }
        }
    }

    result
}

/// Look a word up and aggregate its leading senses
pub fn lookup<R: LexicalResource + ?Sized>(
    resource: &R,
    word: &str,
    max_senses: usize,
) -> DictionaryResult {
    let senses = resource.senses_of(word);
    if senses.is_empty() {
        tracing::debug!("No senses for '{}'", word);
        return DictionaryResult::default();
    }

    tracing::debug!("'{}' has {} senses", word, senses.len());
    aggregate_senses(&senses, max_senses)
}

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}
