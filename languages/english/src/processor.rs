use glossa_core::language::LanguageProcessor;
use glossa_core::preprocess::{DefaultPreprocessor, Preprocessor};
use unicode_segmentation::UnicodeSegmentation;

use crate::stopwords::StopwordFilter;

/// English language processor
pub struct EnglishProcessor {
    preprocessor: DefaultPreprocessor,
    stopwords: StopwordFilter,
}

impl Default for EnglishProcessor {
    fn default() -> Self {
        Self::new()
    }
}

impl EnglishProcessor {
    /// Create a processor with the English stopword list
    pub fn new() -> Self {
        Self::with_stopwords(StopwordFilter::new("en"))
    }

    pub fn with_stopwords(stopwords: StopwordFilter) -> Self {
        Self {
            preprocessor: DefaultPreprocessor,
            stopwords,
        }
    }
}

impl LanguageProcessor for EnglishProcessor {
    fn language_code(&self) -> &str {
        "en"
    }

    fn normalize(&self, text: &str) -> String {
        self.preprocessor.process(text)
    }

    /// UAX #29 sentence boundaries, trimmed, empty pieces dropped
    fn sentences(&self, text: &str) -> Vec<String> {
        text.unicode_sentences()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// UAX #29 word boundaries; punctuation segments are kept as tokens
    fn tokenize(&self, text: &str) -> Vec<String> {
        text.split_word_bounds()
            .filter(|segment| !segment.trim().is_empty())
            .map(|segment| self.normalize(segment))
            .collect()
    }

    fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.is_stopword(word)
    }
}
