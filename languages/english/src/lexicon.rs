use std::collections::HashMap;

use glossa_core::dictionary::{LexicalResource, LexiconMetadata, LoadError, Sense};
use serde::Deserialize;

use crate::wordnet::WordNet;

// JSON structure of a supplementary lexicon file
#[derive(Debug, Deserialize)]
struct LexiconJson {
    entries: HashMap<String, Vec<Sense>>,
}

/// Small hand-maintained lexicon loaded from JSON
#[derive(Debug, Default, Clone)]
pub struct JsonLexicon {
    entries: HashMap<String, Vec<Sense>>,
}

impl JsonLexicon {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load from `{"entries": {"word": [sense, ...]}}`
    pub fn from_json(json_str: &str) -> Result<Self, LoadError> {
        let data: LexiconJson =
            serde_json::from_str(json_str).map_err(|e| LoadError::ParseError(e.to_string()))?;

        for (word, senses) in &data.entries {
            if let Some(sense) = senses.iter().find(|s| s.definition.trim().is_empty()) {
                return Err(LoadError::InvalidFormat(format!(
                    "'{}' has a sense without a definition: {:?}",
                    word, sense
                )));
            }
        }

        Ok(Self {
            entries: data.entries,
        })
    }

    pub fn insert(&mut self, word: impl Into<String>, senses: Vec<Sense>) {
        self.entries.insert(word.into(), senses);
    }

    /// Get the number of words in the lexicon
    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    /// Merge another lexicon into this one.
    /// Words present in both take the other lexicon's senses.
    pub fn merge(mut self, other: JsonLexicon) -> Self {
        self.entries.extend(other.entries);
        self
    }
}

impl LexicalResource for JsonLexicon {
    fn senses_of(&self, word: &str) -> Vec<Sense> {
        self.entries
            .get(word)
            .or_else(|| self.entries.get(&word.to_lowercase()))
            .cloned()
            .unwrap_or_default()
    }

    fn metadata(&self) -> LexiconMetadata {
        LexiconMetadata {
            name: "JSON lexicon".to_string(),
            version: "1.0".to_string(),
            language: "en".to_string(),
            entry_count: self.entries.len(),
        }
    }
}

/// WordNet (when available) followed by supplementary lexicons
#[derive(Default)]
pub struct EnglishLexicon {
    wordnet: Option<WordNet>,
    supplements: JsonLexicon,
}

impl EnglishLexicon {
    pub fn new(wordnet: Option<WordNet>, supplements: JsonLexicon) -> Self {
        Self {
            wordnet,
            supplements,
        }
    }

    pub fn has_wordnet(&self) -> bool {
        self.wordnet.is_some()
    }
}

impl LexicalResource for EnglishLexicon {
    fn senses_of(&self, word: &str) -> Vec<Sense> {
        let mut senses = self
            .wordnet
            .as_ref()
            .map(|wn| wn.senses_of(word))
            .unwrap_or_default();
        senses.extend(self.supplements.senses_of(word));
        senses
    }

    fn metadata(&self) -> LexiconMetadata {
        let wordnet_entries = self
            .wordnet
            .as_ref()
            .map(|wn| wn.lemma_count())
            .unwrap_or(0);

        LexiconMetadata {
            name: if self.has_wordnet() {
                "WordNet + JSON lexicon".to_string()
            } else {
                "JSON lexicon".to_string()
            },
            version: "1.0".to_string(),
            language: "en".to_string(),
            entry_count: wordnet_entries + self.supplements.entry_count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use glossa_core::dictionary::Lemma;

    use super::*;

    const SAMPLE: &str = r#"{
        "entries": {
            "serendipity": [
                {
                    "definition": "good luck in making unexpected and fortunate discoveries",
                    "lemmas": [{"name": "serendipity"}]
                }
            ],
            "hot": [
                {
                    "definition": "used of physical heat",
                    "examples": ["a hot stove"],
                    "lemmas": [{"name": "hot", "antonyms": ["cold"]}]
                }
            ]
        }
    }"#;

    #[test]
    fn loads_entries_with_optional_fields() {
        let lexicon = JsonLexicon::from_json(SAMPLE).unwrap();
        assert_eq!(lexicon.entry_count(), 2);

        let senses = lexicon.senses_of("serendipity");
        assert_eq!(senses.len(), 1);
        assert!(senses[0].examples.is_empty());
        assert!(senses[0].lemmas[0].antonyms.is_empty());

        let hot = lexicon.senses_of("hot");
        assert_eq!(hot[0].lemmas[0].antonyms, vec!["cold"]);
    }

    #[test]
    fn falls_back_to_lowercase() {
        let lexicon = JsonLexicon::from_json(SAMPLE).unwrap();
        assert_eq!(lexicon.senses_of("Hot").len(), 1);
        assert!(lexicon.senses_of("cold").is_empty());
    }

    #[test]
    fn rejects_missing_definitions() {
        let err = JsonLexicon::from_json(r#"{"entries": {"x": [{"definition": " "}]}}"#)
            .unwrap_err();
        assert!(matches!(err, LoadError::InvalidFormat(_)));

        let err = JsonLexicon::from_json("[]").unwrap_err();
        assert!(matches!(err, LoadError::ParseError(_)));
    }

    #[test]
    fn merge_overrides_by_word() {
        let base = JsonLexicon::from_json(SAMPLE).unwrap();
        let mut other = JsonLexicon::new();
        other.insert(
            "hot",
            vec![Sense {
                definition: "spicy".to_string(),
                examples: vec![],
                lemmas: vec![Lemma::new("hot")],
            }],
        );

        let merged = base.merge(other);
        assert_eq!(merged.entry_count(), 2);
        assert_eq!(merged.senses_of("hot")[0].definition, "spicy");
    }

    #[test]
    fn english_lexicon_without_wordnet_uses_supplements() {
        let lexicon = EnglishLexicon::new(None, JsonLexicon::from_json(SAMPLE).unwrap());
        assert!(!lexicon.has_wordnet());
        assert_eq!(lexicon.senses_of("hot").len(), 1);
        assert_eq!(lexicon.metadata().entry_count, 2);
        assert!(EnglishLexicon::default().senses_of("hot").is_empty());
    }
}
