use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use glossa_config::Config;
use glossa_core::dictionary::{Lemma, Sense};
use glossa_lang_english::{EnglishProcessor, JsonLexicon};
use glossa_translator::{LanguageCode, ProviderMetadata, TranslateError, Translation, Translator};

use crate::state::AppState;

/// Records every call and answers with a fixed prefix
#[derive(Default)]
pub struct RecordingTranslator {
    pub calls: Mutex<Vec<(String, String)>>,
    pub fail: bool,
}

impl RecordingTranslator {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<(String, String)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl Translator for RecordingTranslator {
    async fn translate(
        &self,
        text: &str,
        from: LanguageCode,
        to: LanguageCode,
    ) -> Result<Translation, TranslateError> {
        self.calls
            .lock()
            .unwrap()
            .push((text.to_string(), to.clone()));

        if self.fail {
            return Err(TranslateError::ApiError("HTTP 503".to_string()));
        }

        Ok(Translation {
            text: format!("[{}] {}", to, text),
            from,
            to,
            provider: "recording".to_string(),
        })
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "Recording".to_string(),
            requires_api_key: false,
        }
    }
}

fn sense(definition: &str, examples: &[&str], lemmas: Vec<Lemma>) -> Sense {
    Sense {
        definition: definition.to_string(),
        examples: examples.iter().map(|e| e.to_string()).collect(),
        lemmas,
    }
}

pub fn sample_lexicon() -> JsonLexicon {
    let mut lexicon = JsonLexicon::new();
    lexicon.insert(
        "bank",
        vec![
            sense(
                "sloping land beside a body of water",
                &["they pulled the canoe up on the bank"],
                vec![Lemma::new("bank")],
            ),
            sense(
                "a financial institution",
                &["he cashed a check at the bank"],
                vec![
                    Lemma::new("bank"),
                    Lemma::new("depository_financial_institution"),
                ],
            ),
            sense("a long ridge or pile", &[], vec![Lemma::new("bank")]),
            sense("a supply held in reserve", &[], vec![Lemma::new("bank")]),
        ],
    );
    lexicon.insert(
        "good",
        vec![sense(
            "having desirable or positive qualities",
            &["a good report card"],
            vec![Lemma::new("good").with_antonyms(&["bad", "evil"])],
        )],
    );
    for word in ["cat", "dog", "owl", "fox", "elk", "yak", "emu"] {
        lexicon.insert(
            word,
            vec![sense(
                &format!("an animal called {}", word),
                &[],
                vec![Lemma::new(word)],
            )],
        );
    }
    lexicon
}

pub fn state_with(translator: Option<Arc<dyn Translator>>) -> AppState {
    AppState::new(
        Config::default(),
        EnglishProcessor::new(),
        Arc::new(sample_lexicon()),
        translator,
    )
}
