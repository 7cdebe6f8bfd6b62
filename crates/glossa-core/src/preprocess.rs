use unicode_normalization::UnicodeNormalization;

pub trait Preprocessor {
    /// Fold a word token to the form used for frequency accounting
    fn process(&self, text: &str) -> String {
        let text = text.trim();

        if text.is_empty() {
            return String::new();
        }

        // Unicode normalization (NFKC), then case folding
        text.nfkc().collect::<String>().to_lowercase()
    }
}

pub struct DefaultPreprocessor;
impl Preprocessor for DefaultPreprocessor {}

/// True for tokens made only of punctuation or symbols (".", "--", "$", "?!")
pub fn is_punctuation(token: &str) -> bool {
    !token.is_empty()
        && token
            .chars()
            .all(|c| !c.is_alphanumeric() && !c.is_whitespace())
}
