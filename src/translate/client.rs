use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use super::interface::{
    LanguageDetection, SupportedLanguage, Translation, TranslationError, Translator,
};
use crate::provider::GoogleHttpClient;

const TEXT_MIME_TYPE: &str = "text/plain";

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TranslateTextBody<'a> {
    contents: [&'a str; 1],
    target_language_code: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    source_language_code: Option<&'a str>,
    mime_type: &'a str,
}

#[derive(Deserialize)]
struct TranslateTextResponse {
    #[serde(default)]
    translations: Vec<TranslationEntry>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct TranslationEntry {
    #[serde(default)]
    translated_text: String,
    #[serde(default)]
    detected_language_code: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DetectLanguageBody<'a> {
    content: &'a str,
    mime_type: &'a str,
}

#[derive(Deserialize)]
struct DetectLanguageResponse {
    #[serde(default)]
    languages: Vec<DetectedLanguage>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct DetectedLanguage {
    #[serde(default)]
    language_code: String,
    #[serde(default)]
    confidence: f32,
}

#[derive(Deserialize)]
struct SupportedLanguagesResponse {
    #[serde(default)]
    languages: Vec<SupportedLanguageEntry>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SupportedLanguageEntry {
    language_code: String,
    #[serde(default)]
    display_name: Option<String>,
}

/// Translation adapter over the Cloud Translation v3 REST API.
#[derive(Debug, Clone)]
pub struct GoogleTranslateClient {
    http: GoogleHttpClient,
    base_url: String,
    parent: String,
}

impl GoogleTranslateClient {
    /// `parent` is the `projects/{id}/locations/global` scope of every call.
    pub fn new(http: GoogleHttpClient, base_url: &str, parent: String) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            parent,
        }
    }

    fn method_url(&self, method: &str) -> String {
        format!("{}/v3/{}:{}", self.base_url, self.parent, method)
    }
}

#[async_trait]
impl Translator for GoogleTranslateClient {
    async fn translate(
        &self,
        text: &str,
        target_language: &str,
        source_language: Option<&str>,
    ) -> Result<Translation, TranslationError> {
        if text.is_empty() {
            return Err(TranslationError::InvalidInput(
                "text must not be empty".to_string(),
            ));
        }

        let body = TranslateTextBody {
            contents: [text],
            target_language_code: target_language,
            source_language_code: source_language,
            mime_type: TEXT_MIME_TYPE,
        };

        let response: TranslateTextResponse = self
            .http
            .post_json(&self.method_url("translateText"), &body)
            .await
            .map_err(|e| {
                error!("Translation error: {}", e);
                e
            })?;

        let entry = match response.translations.into_iter().next() {
            Some(entry) if !entry.translated_text.is_empty() => entry,
            _ => {
                error!("Translation error: provider returned no translated text");
                return Err(TranslationError::NoResult);
            }
        };

        debug!(
            "Translated {} chars into {}",
            text.chars().count(),
            target_language
        );

        Ok(Translation {
            translated_text: entry.translated_text,
            detected_source_language: entry
                .detected_language_code
                .filter(|code| !code.is_empty())
                .or_else(|| source_language.map(str::to_string)),
            target_language: target_language.to_string(),
        })
    }

    async fn detect_language(&self, text: &str) -> Result<LanguageDetection, TranslationError> {
        if text.is_empty() {
            return Err(TranslationError::InvalidInput(
                "text must not be empty".to_string(),
            ));
        }

        let body = DetectLanguageBody {
            content: text,
            mime_type: TEXT_MIME_TYPE,
        };

        let response: DetectLanguageResponse = self
            .http
            .post_json(&self.method_url("detectLanguage"), &body)
            .await
            .map_err(|e| {
                error!("Language detection error: {}", e);
                e
            })?;

        match response.languages.into_iter().next() {
            Some(language) if !language.language_code.is_empty() => Ok(LanguageDetection {
                language_code: language.language_code,
                confidence: language.confidence,
            }),
            _ => {
                error!("Language detection error: provider returned no language");
                Err(TranslationError::NoDetection)
            }
        }
    }

    async fn supported_languages(
        &self,
        display_language_code: &str,
    ) -> Result<Vec<SupportedLanguage>, TranslationError> {
        let url = format!("{}/v3/{}/supportedLanguages", self.base_url, self.parent);

        let response: SupportedLanguagesResponse = self
            .http
            .get_json(&url, &[("displayLanguageCode", display_language_code)])
            .await?;

        Ok(response
            .languages
            .into_iter()
            .map(|entry| SupportedLanguage {
                language_code: entry.language_code,
                display_name: entry.display_name,
            })
            .collect())
    }
}
