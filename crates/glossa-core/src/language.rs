/// Text segmentation interface for language implementations
pub trait LanguageProcessor: Send + Sync {
    /// Language identifier (ISO 639-1 code: "en", "de", ...)
    fn language_code(&self) -> &str;

    /// Normalize a single word (case folding, Unicode normalization)
    fn normalize(&self, text: &str) -> String;

    /// Split text into sentences, keeping their original spelling
    fn sentences(&self, text: &str) -> Vec<String>;

    /// Break text into normalized word tokens, punctuation included
    fn tokenize(&self, text: &str) -> Vec<String>;

    /// Whether a normalized token is excluded from frequency scoring
    fn is_stopword(&self, word: &str) -> bool;
}
