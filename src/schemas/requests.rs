//! Request records of the public API.
//!
//! Field names on the wire are camelCase; each record maps them onto the
//! snake_case arguments of the matching adapter call.

use serde::Deserialize;

use crate::errors::ValidationError;

fn require_non_empty(field: &str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new(format!("{field} must not be empty")));
    }
    Ok(())
}

#[derive(Debug, Clone, Deserialize)]
pub struct TranslateRequest {
    pub text: String,

    /// Auto-detected by the provider when absent.
    #[serde(rename = "sourceLanguage", default)]
    pub source_language: Option<String>,

    #[serde(rename = "targetLanguage")]
    pub target_language: String,
}

impl TranslateRequest {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_non_empty("text", &self.text)?;
        require_non_empty("targetLanguage", &self.target_language)
    }

    /// Source language to forward, with blank values treated as absent.
    pub fn source_language(&self) -> Option<&str> {
        self.source_language
            .as_deref()
            .map(str::trim)
            .filter(|code| !code.is_empty())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct DetectLanguageRequest {
    pub text: String,
}

impl DetectLanguageRequest {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_non_empty("text", &self.text)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct TtsRequest {
    pub text: String,

    /// Voice language, e.g. `en-US`.
    #[serde(rename = "ttsCode")]
    pub language_code: String,

    /// Voice name, e.g. `en-US-Standard-A`.
    #[serde(rename = "ttsName")]
    pub voice_name: String,
}

impl TtsRequest {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_non_empty("text", &self.text)?;
        require_non_empty("ttsCode", &self.language_code)?;
        require_non_empty("ttsName", &self.voice_name)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SttRequest {
    /// Base64-encoded audio.
    #[serde(rename = "audioContent")]
    pub audio_content: String,

    #[serde(rename = "languageCode")]
    pub language_code: String,
}

impl SttRequest {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_non_empty("audioContent", &self.audio_content)?;
        require_non_empty("languageCode", &self.language_code)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SupportedLanguagesQuery {
    #[serde(rename = "displayLanguageCode", default)]
    pub display_language_code: Option<String>,
}

impl SupportedLanguagesQuery {
    pub fn display_language_code(&self) -> &str {
        self.display_language_code
            .as_deref()
            .map(str::trim)
            .filter(|code| !code.is_empty())
            .unwrap_or("en")
    }
}
