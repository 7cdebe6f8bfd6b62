use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use glossa_config::Config;
use glossa_config::translator::TranslatorConfig;
use glossa_core::dictionary::LexicalResource;
use glossa_core::history::HistoryStore;
use glossa_core::language::LanguageProcessor;
use glossa_lang_english::{
    DeepLTranslator, EnglishLexicon, EnglishProcessor, GoogleTranslator, LexiconLoader,
    StopwordFilter,
};
use glossa_translator::Translator;
use tokio::sync::RwLock;

pub struct AppState {
    pub config: Arc<RwLock<Config>>,
    pub processor: EnglishProcessor,
    pub lexicon: Arc<dyn LexicalResource>,
    pub translator: Option<Arc<dyn Translator>>,
    pub history: HistoryStore,
}

impl AppState {
    pub fn new(
        config: Config,
        processor: EnglishProcessor,
        lexicon: Arc<dyn LexicalResource>,
        translator: Option<Arc<dyn Translator>>,
    ) -> Self {
        Self {
            config: Arc::new(RwLock::new(config)),
            processor,
            lexicon,
            translator,
            history: HistoryStore::new(),
        }
    }

    /// Load every resource the config asks for
    pub async fn build(config: Config) -> anyhow::Result<Self> {
        let stopwords = StopwordFilter::new(&config.summarizer.stopword_language);
        tracing::info!(
            "Using {} stopwords for '{}'",
            stopwords.len(),
            config.summarizer.stopword_language
        );
        let processor = EnglishProcessor::with_stopwords(stopwords);
        tracing::info!("Text processor language: {}", processor.language_code());

        let lexicon = if config.dictionary.enabled {
            let wordnet_dir = config.dictionary.wordnet_dir.clone();
            let additional_paths = config.dictionary.additional_paths.clone();
            // WordNet parsing is file heavy, keep it off the runtime threads
            tokio::task::spawn_blocking(move || {
                LexiconLoader::load(wordnet_dir.as_deref().map(Path::new), &additional_paths)
            })
            .await?
        } else {
            tracing::warn!("Dictionary disabled, lookups will return nothing");
            EnglishLexicon::default()
        };

        let metadata = lexicon.metadata();
        tracing::info!(
            "Lexicon ready: {} {} [{}] ({} entries)",
            metadata.name,
            metadata.version,
            metadata.language,
            metadata.entry_count
        );

        let timeout = Duration::from_secs(config.timeout_seconds);
        let translator = build_translator(&config.translator, timeout);

        Ok(Self::new(config, processor, Arc::new(lexicon), translator))
    }
}

/// A missing or broken translator only disables translation
pub fn build_translator(
    config: &TranslatorConfig,
    timeout: Duration,
) -> Option<Arc<dyn Translator>> {
    if !config.enabled {
        tracing::info!("Translation disabled");
        return None;
    }

    let translator: Arc<dyn Translator> = match config.provider.to_lowercase().as_str() {
        "google" => match GoogleTranslator::new(config.api_url.clone(), timeout) {
            Ok(translator) => Arc::new(translator),
            Err(e) => {
                tracing::error!("Failed to create Google translator: {}", e);
                return None;
            }
        },
        "deepl" => {
            if config.api_key.is_empty() {
                tracing::warn!("DeepL selected without an API key, translation disabled");
                return None;
            }
            match DeepLTranslator::new(config.api_key.clone(), config.api_url.clone(), timeout) {
                Ok(translator) => Arc::new(translator),
                Err(e) => {
                    tracing::error!("Failed to create DeepL translator: {}", e);
                    return None;
                }
            }
        }
        other => {
            tracing::warn!("Unknown translator provider '{}', translation disabled", other);
            return None;
        }
    };

    tracing::info!(
        "Translator: {} ({} -> {})",
        translator.metadata().name,
        config.from_lang,
        config.to_lang
    );
    Some(translator)
}
