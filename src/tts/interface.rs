use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::provider::ProviderError;

/// Output encoding requested from the provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AudioEncoding {
    #[default]
    Mp3,
    OggOpus,
    Linear16,
    Mulaw,
    Alaw,
}

impl AudioEncoding {
    /// Media type of the bytes the provider returns for this encoding.
    /// PCM-family encodings come back wrapped in a WAV header.
    pub fn content_type(&self) -> &'static str {
        match self {
            AudioEncoding::Mp3 => "audio/mp3",
            AudioEncoding::OggOpus => "audio/ogg",
            AudioEncoding::Linear16 | AudioEncoding::Mulaw | AudioEncoding::Alaw => "audio/wav",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VoiceGender {
    #[default]
    Female,
    Male,
    Neutral,
    #[serde(rename = "SSML_VOICE_GENDER_UNSPECIFIED")]
    Unspecified,
}

/// Synthesized speech, ready to be returned as a response body.
#[derive(Debug, Clone, PartialEq)]
pub struct SynthesizedAudio {
    pub audio_content: Vec<u8>,
    pub encoding: AudioEncoding,
}

#[derive(Debug, thiserror::Error)]
pub enum TtsError {
    #[error("{0}")]
    InvalidInput(String),

    #[error("provider returned no audio")]
    EmptyAudio,

    #[error("provider returned undecodable audio: {0}")]
    InvalidAudio(#[from] base64::DecodeError),

    #[error(transparent)]
    Provider(#[from] ProviderError),
}

/// Text-to-speech capability of the provider.
#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    /// Synthesize `text` with the voice `voice_name` of `language_code`.
    /// One provider call, no retry.
    async fn synthesize(
        &self,
        text: &str,
        language_code: &str,
        voice_name: &str,
    ) -> Result<SynthesizedAudio, TtsError>;
}
