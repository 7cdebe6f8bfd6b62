use serde::{Deserialize, Serialize};

fn default_enabled() -> bool {
    true
}

fn default_max_senses() -> usize {
    3
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct DictionaryConfig {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// WordNet `dict/` directory (index.* and data.* files)
    #[serde(default)]
    pub wordnet_dir: Option<String>,
    /// Supplementary JSON lexicons, merged after WordNet in order
    #[serde(default)]
    pub additional_paths: Vec<String>,
    /// How many senses of a word are consulted per lookup
    #[serde(default = "default_max_senses")]
    pub max_senses: usize,
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            wordnet_dir: None,
            additional_paths: vec![],
            max_senses: default_max_senses(),
        }
    }
}
