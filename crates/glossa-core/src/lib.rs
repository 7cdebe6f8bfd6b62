pub mod dictionary;
pub mod history;
pub mod language;
pub mod preprocess;
pub mod summarizer;
