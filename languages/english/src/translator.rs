use std::time::Duration;

use async_trait::async_trait;
use glossa_translator::{LanguageCode, ProviderMetadata, TranslateError, Translation, Translator};

const GOOGLE_API_URL: &str = "https://translate.googleapis.com/translate_a/single";
const DEEPL_API_URL: &str = "https://api-free.deepl.com/v2/translate";

fn http_client(timeout: Duration) -> Result<reqwest::Client, TranslateError> {
    Ok(reqwest::Client::builder().timeout(timeout).build()?)
}

/// Keyless Google Translate web endpoint
#[derive(Clone)]
pub struct GoogleTranslator {
    client: reqwest::Client,
    api_url: String,
}

impl GoogleTranslator {
    pub fn new(api_url: Option<String>, timeout: Duration) -> Result<Self, TranslateError> {
        Ok(Self {
            client: http_client(timeout)?,
            api_url: api_url.unwrap_or_else(|| GOOGLE_API_URL.to_string()),
        })
    }
}

/// The endpoint answers with nested arrays; element 0 lists translated
/// segments as `[translated, original, ...]`.
fn parse_google_response(json: &serde_json::Value) -> Result<String, TranslateError> {
    let segments = json
        .get(0)
        .and_then(|s| s.as_array())
        .ok_or_else(|| TranslateError::ApiError("No translation in response".to_string()))?;

    let text: String = segments
        .iter()
        .filter_map(|segment| segment.get(0).and_then(|t| t.as_str()))
        .collect();

    if text.is_empty() {
        return Err(TranslateError::ApiError("Empty translation".to_string()));
    }
    Ok(text)
}

#[async_trait]
impl Translator for GoogleTranslator {
    async fn translate(
        &self,
        text: &str,
        from: LanguageCode,
        to: LanguageCode,
    ) -> Result<Translation, TranslateError> {
        if to.trim().is_empty() {
            return Err(TranslateError::UnsupportedLanguagePair { from, to });
        }

        let source = if from.is_empty() { "auto" } else { from.as_str() };
        let params = [
            ("client", "gtx"),
            ("sl", source),
            ("tl", to.as_str()),
            ("dt", "t"),
            ("q", text),
        ];

        let response = self.client.get(&self.api_url).query(&params).send().await?;

        if response.status() == 429 {
            return Err(TranslateError::RateLimitExceeded);
        }

        if !response.status().is_success() {
            return Err(TranslateError::ApiError(format!(
                "HTTP {}",
                response.status()
            )));
        }

        let json: serde_json::Value = response.json().await.map_err(|e| {
            TranslateError::ApiError(format!("Failed to parse response: {}", e))
        })?;

        Ok(Translation {
            text: parse_google_response(&json)?,
            from,
            to,
            provider: "google".to_string(),
        })
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "Google Translate".to_string(),
            requires_api_key: false,
        }
    }
}

#[derive(Clone)]
pub struct DeepLTranslator {
    client: reqwest::Client,
    api_key: String,
    api_url: String,
}

impl DeepLTranslator {
    pub fn new(
        api_key: String,
        api_url: Option<String>,
        timeout: Duration,
    ) -> Result<Self, TranslateError> {
        Ok(Self {
            client: http_client(timeout)?,
            api_key,
            api_url: api_url.unwrap_or_else(|| DEEPL_API_URL.to_string()),
        })
    }
}

fn parse_deepl_response(json: &serde_json::Value) -> Result<String, TranslateError> {
    json["translations"]
        .get(0)
        .and_then(|t| t["text"].as_str())
        .map(str::to_string)
        .ok_or_else(|| TranslateError::ApiError("No translation in response".to_string()))
}

#[async_trait]
impl Translator for DeepLTranslator {
    async fn translate(
        &self,
        text: &str,
        from: LanguageCode,
        to: LanguageCode,
    ) -> Result<Translation, TranslateError> {
        if self.api_key.is_empty() {
            return Err(TranslateError::MissingApiKey);
        }

        let source_lang = from.to_uppercase();
        let target_lang = to.to_uppercase();
        let params = [
            ("text", text),
            ("source_lang", source_lang.as_str()),
            ("target_lang", target_lang.as_str()),
        ];

        let response = self
            .client
            .post(&self.api_url)
            .header("Authorization", format!("DeepL-Auth-Key {}", self.api_key))
            .form(&params)
            .send()
            .await?;

        if response.status() == 429 {
            return Err(TranslateError::RateLimitExceeded);
        }

        if response.status() == 403 {
            return Err(TranslateError::AuthenticationError);
        }

        if response.status() == 400 {
            return Err(TranslateError::UnsupportedLanguagePair { from, to });
        }

        if !response.status().is_success() {
            return Err(TranslateError::ApiError(format!(
                "HTTP {}",
                response.status()
            )));
        }

        let json: serde_json::Value = response.json().await.map_err(|e| {
            TranslateError::ApiError(format!("Failed to parse response: {}", e))
        })?;

        Ok(Translation {
            text: parse_deepl_response(&json)?,
            from,
            to,
            provider: "deepl".to_string(),
        })
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "DeepL".to_string(),
            requires_api_key: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn google_segments_are_concatenated() {
        let body = json!([
            [
                ["किनारा। ", "Bank. ", null, null, 10],
                ["नदी", "River", null, null, 10]
            ],
            null,
            "en"
        ]);
        assert_eq!(parse_google_response(&body).unwrap(), "किनारा। नदी");
    }

    #[test]
    fn google_unexpected_shape_is_an_api_error() {
        let err = parse_google_response(&json!({"error": "nope"})).unwrap_err();
        assert!(matches!(err, TranslateError::ApiError(_)));

        let err = parse_google_response(&json!([[]])).unwrap_err();
        assert!(matches!(err, TranslateError::ApiError(_)));
    }

    #[test]
    fn deepl_first_translation_is_used() {
        let body = json!({"translations": [{"detected_source_language": "EN", "text": "Ufer"}]});
        assert_eq!(parse_deepl_response(&body).unwrap(), "Ufer");
        assert!(parse_deepl_response(&json!({"translations": []})).is_err());
    }

    #[tokio::test]
    async fn deepl_without_key_fails_before_any_request() {
        let translator =
            DeepLTranslator::new(String::new(), None, Duration::from_secs(1)).unwrap();
        let err = translator
            .translate("bank", "en".to_string(), "de".to_string())
            .await
            .unwrap_err();
        assert!(matches!(err, TranslateError::MissingApiKey));
        assert!(translator.metadata().requires_api_key);
    }

    #[tokio::test]
    async fn google_rejects_empty_target() {
        let translator = GoogleTranslator::new(None, Duration::from_secs(1)).unwrap();
        let err = translator
            .translate("bank", "en".to_string(), " ".to_string())
            .await
            .unwrap_err();
        assert!(matches!(err, TranslateError::UnsupportedLanguagePair { .. }));
    }
}
