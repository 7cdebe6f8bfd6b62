use std::env;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use self::dictionary::DictionaryConfig;
use self::history::HistoryConfig;
use self::server::ServerConfig;
use self::summarizer::SummarizerConfig;
use self::translator::TranslatorConfig;

pub mod dictionary;
pub mod history;
pub mod server;
pub mod summarizer;
pub mod translator;

fn default_timeout_seconds() -> u64 {
    30
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub summarizer: SummarizerConfig,
    pub dictionary: DictionaryConfig,
    pub translator: TranslatorConfig,
    pub history: HistoryConfig,

    /// Timeout for outbound translation requests
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
    /// Emit logs as JSON lines instead of human readable text
    #[serde(default)]
    pub log_json: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            summarizer: SummarizerConfig::default(),
            dictionary: DictionaryConfig::default(),
            translator: TranslatorConfig::default(),
            history: HistoryConfig::default(),
            timeout_seconds: default_timeout_seconds(),
            log_json: false,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

impl Config {
    /// Build the config from process environment variables
    pub fn new() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the config from any key lookup, falling back to defaults
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Config::default();

        if let Some(bind) = lookup("GLOSSA_BIND") {
            config.server.bind = bind;
        }

        config.summarizer.sentences =
            parse_or(&lookup, "SUMMARY_SENTENCES", config.summarizer.sentences);
        if let Some(language) = lookup("STOPWORD_LANGUAGE") {
            config.summarizer.stopword_language = language;
        }

        if let Some(dir) = lookup("WORDNET_DIR").filter(|d| !d.is_empty()) {
            config.dictionary.wordnet_dir = Some(dir);
        }

        if let Some(provider) = lookup("TRANSLATOR_PROVIDER") {
            config.translator.provider = provider;
        }
        if let Some(to_lang) = lookup("TRANSLATE_TO") {
            config.translator.to_lang = to_lang;
        }
        if let Some(api_key) = lookup("TRANSLATOR_API_KEY") {
            config.translator.api_key = api_key;
        }
        if let Some(api_url) = lookup("TRANSLATOR_API_URL").filter(|u| !u.is_empty()) {
            config.translator.api_url = Some(api_url);
        }

        config.history.display_limit = parse_or(
            &lookup,
            "HISTORY_DISPLAY_LIMIT",
            config.history.display_limit,
        );
        config.timeout_seconds = parse_or(&lookup, "TIMEOUT_SECONDS", config.timeout_seconds);
        config.log_json = parse_or(&lookup, "LOG_JSON", config.log_json);

        config
    }

    /// Load a JSON profile; fields missing from the file keep their defaults
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let data = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;

        serde_json::from_str(&data).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }
}

fn parse_or<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> T {
    lookup(key)
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
