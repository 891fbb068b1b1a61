use async_trait::async_trait;

use crate::provider::ProviderError;

/// Result of translating one text.
#[derive(Debug, Clone, PartialEq)]
pub struct Translation {
    pub translated_text: String,
    /// Language reported by the provider, else the caller-supplied source.
    pub detected_source_language: Option<String>,
    /// Always the language the caller asked for.
    pub target_language: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LanguageDetection {
    pub language_code: String,
    pub confidence: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SupportedLanguage {
    pub language_code: String,
    pub display_name: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum TranslationError {
    #[error("{0}")]
    InvalidInput(String),

    #[error("no translation result")]
    NoResult,

    #[error("no language detection result")]
    NoDetection,

    #[error(transparent)]
    Provider(#[from] ProviderError),
}

/// Translation capability of the provider.
#[async_trait]
pub trait Translator: Send + Sync {
    async fn translate(
        &self,
        text: &str,
        target_language: &str,
        source_language: Option<&str>,
    ) -> Result<Translation, TranslationError>;

    async fn detect_language(&self, text: &str) -> Result<LanguageDetection, TranslationError>;

    /// Languages the provider can translate, with names in `display_language_code`.
    async fn supported_languages(
        &self,
        display_language_code: &str,
    ) -> Result<Vec<SupportedLanguage>, TranslationError>;
}
