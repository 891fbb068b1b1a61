use async_trait::async_trait;

use crate::provider::ProviderError;

/// Top recognition hypothesis for one audio clip.
#[derive(Debug, Clone, PartialEq)]
pub struct Transcription {
    pub text: String,
    pub confidence: f32,
    pub language_code: String,
}

impl Transcription {
    /// Outcome for audio in which the provider recognized nothing.
    pub fn no_speech(language_code: &str) -> Self {
        Self {
            text: String::new(),
            confidence: 0.0,
            language_code: language_code.to_string(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SttError {
    #[error("{0}")]
    InvalidInput(String),

    #[error(transparent)]
    Provider(#[from] ProviderError),
}

/// Speech-to-text capability of the provider.
#[async_trait]
pub trait SpeechRecognizer: Send + Sync {
    /// Transcribe base64-encoded audio. The encoding of the audio itself is
    /// detected by the provider.
    async fn transcribe(
        &self,
        audio_content: &str,
        language_code: &str,
    ) -> Result<Transcription, SttError>;
}
