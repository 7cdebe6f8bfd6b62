use std::path::Path;

use glossa_core::dictionary::LoadError;

use crate::lexicon::{EnglishLexicon, JsonLexicon};
use crate::wordnet::WordNet;

pub struct LexiconLoader;

impl LexiconLoader {
    /// Load WordNet from a `dict/` directory
    pub fn load_wordnet(dir: &Path) -> Result<WordNet, LoadError> {
        tracing::info!("Loading WordNet from: {}", dir.display());
        WordNet::load(dir)
    }

    /// Load a supplementary lexicon from a JSON file
    pub fn load_json(path: &Path) -> Result<JsonLexicon, LoadError> {
        tracing::info!("Loading lexicon from file: {}", path.display());
        if !path.exists() {
            return Err(LoadError::FileNotFound(path.display().to_string()));
        }
        let json = std::fs::read_to_string(path)?;
        let lexicon = JsonLexicon::from_json(&json)?;
        tracing::info!("Loaded {} lexicon entries from file", lexicon.entry_count());
        Ok(lexicon)
    }

    /// Build the English lexicon, skipping sources that fail to load
    pub fn load(wordnet_dir: Option<&Path>, additional_paths: &[String]) -> EnglishLexicon {
        let wordnet = wordnet_dir.and_then(|dir| {
            Self::load_wordnet(dir)
                .inspect_err(|e| {
                    tracing::error!("Failed to load WordNet: {}", e);
                    tracing::warn!("Continuing without WordNet");
                })
                .ok()
        });

        if wordnet_dir.is_none() {
            tracing::warn!("No WordNet directory configured, lookups use supplementary lexicons only");
        }

        let mut supplements = JsonLexicon::new();
        for path in additional_paths {
            match Self::load_json(Path::new(path)) {
                Ok(additional) => {
                    tracing::info!("Merging additional lexicon from: {}", path);
                    supplements = supplements.merge(additional);
                }
                Err(e) => {
                    tracing::warn!("Failed to load lexicon from {}: {}", path, e);
                }
            }
        }

        EnglishLexicon::new(wordnet, supplements)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use glossa_core::dictionary::LexicalResource;

    use super::*;

    #[test]
    fn missing_sources_are_skipped() {
        let lexicon = LexiconLoader::load(
            Some(Path::new("/nonexistent/wordnet")),
            &["/nonexistent/lexicon.json".to_string()],
        );
        assert!(!lexicon.has_wordnet());
        assert!(lexicon.senses_of("cat").is_empty());
    }

    #[test]
    fn later_files_override_earlier_ones() {
        let mut first = tempfile::NamedTempFile::new().unwrap();
        write!(
            first,
            r#"{{"entries": {{"cat": [{{"definition": "first"}}], "dog": [{{"definition": "canine"}}]}}}}"#
        )
        .unwrap();
        let mut second = tempfile::NamedTempFile::new().unwrap();
        write!(second, r#"{{"entries": {{"cat": [{{"definition": "second"}}]}}}}"#).unwrap();

        let lexicon = LexiconLoader::load(
            None,
            &[
                first.path().display().to_string(),
                second.path().display().to_string(),
            ],
        );
        assert_eq!(lexicon.senses_of("cat")[0].definition, "second");
        assert_eq!(lexicon.senses_of("dog")[0].definition, "canine");
    }

    #[test]
    fn load_json_reports_missing_file() {
        let err = LexiconLoader::load_json(Path::new("/nonexistent/lexicon.json")).unwrap_err();
        assert!(matches!(err, LoadError::FileNotFound(_)));
    }
}
