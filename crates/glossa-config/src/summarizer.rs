use serde::{Deserialize, Serialize};

fn default_sentences() -> usize {
    3
}

fn default_stopword_language() -> String {
    "en".to_string()
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct SummarizerConfig {
    /// Number of sentences kept in a summary
    #[serde(default = "default_sentences")]
    pub sentences: usize,
    #[serde(default = "default_stopword_language")]
    pub stopword_language: String,
}

impl Default for SummarizerConfig {
    fn default() -> Self {
        Self {
            sentences: default_sentences(),
            stopword_language: default_stopword_language(),
        }
    }
}
