use std::path::Path;

use glossa_config::Config;
use serde::{Deserialize, Serialize};

/// Saved settings under a name
#[derive(Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub value: Config,
}

/// Values given on the command line; they win over every other source
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub bind: Option<String>,
    pub wordnet_dir: Option<String>,
}

/// Read a profile file. Both `{"name": .., "value": {..}}` and a bare config
/// object are accepted.
pub fn load_profile(path: &Path) -> anyhow::Result<Config> {
    let data = std::fs::read_to_string(path)?;

    if let Ok(profile) = serde_json::from_str::<Profile>(&data) {
        tracing::info!("Loaded profile '{}' from {}", profile.name, path.display());
        return Ok(profile.value);
    }

    let config = Config::from_file(path)?;
    tracing::info!("Loaded config from {}", path.display());
    Ok(config)
}

/// Profile file when one is given, environment otherwise, then CLI overrides
pub fn resolve_config(path: Option<&Path>, overrides: Overrides) -> anyhow::Result<Config> {
    let mut config = match path {
        Some(path) => load_profile(path)?,
        None => Config::new(),
    };

    if let Some(bind) = overrides.bind {
        config.server.bind = bind;
    }
    if let Some(dir) = overrides.wordnet_dir {
        config.dictionary.wordnet_dir = Some(dir);
    }

    Ok(config)
}
