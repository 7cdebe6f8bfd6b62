use std::io::Write;
use std::time::Duration;

use glossa_config::Config;
use glossa_config::translator::TranslatorConfig;
use glossa_core::language::LanguageProcessor;

use crate::state::{AppState, build_translator};

#[tokio::test]
async fn build_loads_configured_lexicons() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{"entries": {{"cat": [{{"definition": "a small feline"}}]}}}}"#
    )
    .unwrap();

    let mut config = Config::default();
    config.dictionary.additional_paths = vec![file.path().display().to_string()];
    config.translator.enabled = false;

    let state = AppState::build(config).await.unwrap();

    assert!(state.translator.is_none());
    assert_eq!(state.processor.language_code(), "en");
    let metadata = state.lexicon.metadata();
    assert_eq!(metadata.language, "en");
    assert_eq!(metadata.entry_count, 1);
    assert_eq!(state.lexicon.senses_of("cat")[0].definition, "a small feline");
}

#[tokio::test]
async fn disabled_dictionary_answers_nothing() {
    let mut config = Config::default();
    config.dictionary.enabled = false;
    config.translator.enabled = false;

    let state = AppState::build(config).await.unwrap();
    assert_eq!(state.lexicon.metadata().entry_count, 0);
}

#[tokio::test]
async fn translator_follows_provider_setting() {
    let timeout = Duration::from_secs(1);

    let google = build_translator(&TranslatorConfig::default(), timeout).unwrap();
    assert_eq!(google.metadata().name, "Google Translate");

    let keyless_deepl = TranslatorConfig {
        provider: "deepl".to_string(),
        ..TranslatorConfig::default()
    };
    assert!(build_translator(&keyless_deepl, timeout).is_none());

    let deepl = TranslatorConfig {
        provider: "DeepL".to_string(),
        api_key: "secret".to_string(),
        ..TranslatorConfig::default()
    };
    assert!(build_translator(&deepl, timeout).unwrap().metadata().requires_api_key);

    let unknown = TranslatorConfig {
        provider: "babelfish".to_string(),
        ..TranslatorConfig::default()
    };
    assert!(build_translator(&unknown, timeout).is_none());
}
