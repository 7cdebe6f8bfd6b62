use glossa_core::dictionary::{DictionaryResult, lookup};

use crate::state::AppState;

pub struct DictionaryOutcome {
    pub result: DictionaryResult,
    pub translation: Option<String>,
}

/// Look the word up, translate its first meaning and record it in history
pub async fn handle_dictionary(state: &AppState, word: &str) -> DictionaryOutcome {
    let (max_senses, from_lang, to_lang) = {
        let config = state.config.read().await;
        (
            config.dictionary.max_senses,
            config.translator.from_lang.clone(),
            config.translator.to_lang.clone(),
        )
    };

    let result = lookup(state.lexicon.as_ref(), word, max_senses);
    tracing::debug!(
        "'{}': {} meanings, {} synonyms, {} antonyms",
        word,
        result.meanings.len(),
        result.synonyms.len(),
        result.antonyms.len()
    );

    let translation = match result.primary_meaning() {
        Some(meaning) => translate_meaning(state, meaning, from_lang, to_lang).await,
        None => None,
    };

    if state.history.record(word).await {
        tracing::debug!("Added '{}' to history", word);
    }

    DictionaryOutcome {
        result,
        translation,
    }
}

async fn translate_meaning(
    state: &AppState,
    meaning: &str,
    from_lang: String,
    to_lang: String,
) -> Option<String> {
    let translator = state.translator.as_ref()?;

    match translator.translate(meaning, from_lang, to_lang).await {
        Ok(translation) => {
            tracing::debug!("Translated via {}", translation.provider);
            Some(translation.text)
        }
        Err(e) => {
            tracing::warn!("Translation failed: {}", e);
            None
        }
    }
}
