pub mod lexicon;
pub mod loader;
pub mod processor;
pub mod stopwords;
pub mod translator;
pub mod wordnet;

pub use lexicon::{EnglishLexicon, JsonLexicon};
pub use loader::LexiconLoader;
pub use processor::EnglishProcessor;
pub use stopwords::StopwordFilter;
pub use translator::{DeepLTranslator, GoogleTranslator};
pub use wordnet::{Pos, SynsetId, WordNet};
