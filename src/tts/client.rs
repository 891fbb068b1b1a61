use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use super::interface::{AudioEncoding, SpeechSynthesizer, SynthesizedAudio, TtsError, VoiceGender};
use crate::provider::GoogleHttpClient;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SynthesizeBody<'a> {
    input: SynthesisInput<'a>,
    voice: VoiceSelection<'a>,
    audio_config: AudioConfig,
}

#[derive(Serialize)]
struct SynthesisInput<'a> {
    text: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct VoiceSelection<'a> {
    language_code: &'a str,
    name: &'a str,
    ssml_gender: VoiceGender,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AudioConfig {
    audio_encoding: AudioEncoding,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SynthesizeResponse {
    #[serde(default)]
    audio_content: String,
}

/// Speech synthesis adapter over the Cloud Text-to-Speech v1 REST API.
#[derive(Debug, Clone)]
pub struct GoogleTtsClient {
    http: GoogleHttpClient,
    base_url: String,
    encoding: AudioEncoding,
    gender: VoiceGender,
}

impl GoogleTtsClient {
    pub fn new(http: GoogleHttpClient, base_url: &str) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            encoding: AudioEncoding::default(),
            gender: VoiceGender::default(),
        }
    }

    pub fn with_encoding(mut self, encoding: AudioEncoding) -> Self {
        self.encoding = encoding;
        self
    }

    pub fn with_gender(mut self, gender: VoiceGender) -> Self {
        self.gender = gender;
        self
    }
}

#[async_trait]
impl SpeechSynthesizer for GoogleTtsClient {
    async fn synthesize(
        &self,
        text: &str,
        language_code: &str,
        voice_name: &str,
    ) -> Result<SynthesizedAudio, TtsError> {
        if text.is_empty() {
            return Err(TtsError::InvalidInput("text must not be empty".to_string()));
        }

        let body = SynthesizeBody {
            input: SynthesisInput { text },
            voice: VoiceSelection {
                language_code,
                name: voice_name,
                ssml_gender: self.gender,
            },
            audio_config: AudioConfig {
                audio_encoding: self.encoding,
            },
        };

        debug!(
            "Sending TTS request: voice={}, language={}, text length={}",
            voice_name,
            language_code,
            text.len()
        );

        let url = format!("{}/v1/text:synthesize", self.base_url);
        let response: SynthesizeResponse = self
            .http
            .post_json(&url, &body)
            .await
            .map_err(|e| {
                error!("TTS error: {}", e);
                e
            })?;

        if response.audio_content.is_empty() {
            error!("TTS error: provider returned no audio");
            return Err(TtsError::EmptyAudio);
        }

        let audio_content = BASE64.decode(response.audio_content.as_bytes())?;
        if audio_content.is_empty() {
            return Err(TtsError::EmptyAudio);
        }

        Ok(SynthesizedAudio {
            audio_content,
            encoding: self.encoding,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::StaticTokenProvider;
    use crate::provider::ProviderError;
    use std::sync::Arc;
    use wiremock::{
        matchers::{body_json, body_partial_json, header, method, path},
        Mock, MockServer, ResponseTemplate,
    };

    const SYNTHESIZE_PATH: &str = "/v1/text:synthesize";

    fn client(server: &MockServer) -> GoogleTtsClient {
        let http = GoogleHttpClient::new(Arc::new(StaticTokenProvider::new("test-token")));
        GoogleTtsClient::new(http, &server.uri())
    }

    #[tokio::test]
    async fn test_synthesize_defaults_to_female_mp3() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(SYNTHESIZE_PATH))
            .and(header("authorization", "Bearer test-token"))
            .and(body_json(serde_json::json!({
                "input": {"text": "Hi"},
                "voice": {
                    "languageCode": "en-US",
                    "name": "en-US-Standard-C",
                    "ssmlGender": "FEMALE"
                },
                "audioConfig": {"audioEncoding": "MP3"}
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "audioContent": BASE64.encode(b"ID3fake-mp3-frames")
            })))
            .expect(1)
            .mount(&server)
            .await;

        let audio = client(&server)
            .synthesize("Hi", "en-US", "en-US-Standard-C")
            .await
            .unwrap();

        assert_eq!(audio.audio_content, b"ID3fake-mp3-frames");
        assert_eq!(audio.encoding, AudioEncoding::Mp3);
    }

    #[tokio::test]
    async fn test_configured_encoding_and_gender_sent() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(SYNTHESIZE_PATH))
            .and(body_partial_json(serde_json::json!({
                "voice": {"ssmlGender": "MALE"},
                "audioConfig": {"audioEncoding": "OGG_OPUS"}
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "audioContent": BASE64.encode(b"OggS")
            })))
            .mount(&server)
            .await;

        let audio = client(&server)
            .with_encoding(AudioEncoding::OggOpus)
            .with_gender(VoiceGender::Male)
            .synthesize("Hallo", "de-DE", "de-DE-Standard-B")
            .await
            .unwrap();

        assert_eq!(audio.encoding.content_type(), "audio/ogg");
    }

    #[tokio::test]
    async fn test_empty_audio_is_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(SYNTHESIZE_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
            .mount(&server)
            .await;

        let result = client(&server)
            .synthesize("Hi", "en-US", "en-US-Standard-A")
            .await;
        assert!(matches!(result, Err(TtsError::EmptyAudio)));
    }

    #[tokio::test]
    async fn test_undecodable_audio_is_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(SYNTHESIZE_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "audioContent": "***not base64***"
            })))
            .mount(&server)
            .await;

        let result = client(&server)
            .synthesize("Hi", "en-US", "en-US-Standard-A")
            .await;
        assert!(matches!(result, Err(TtsError::InvalidAudio(_))));
    }

    #[tokio::test]
    async fn test_unknown_voice_is_provider_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(SYNTHESIZE_PATH))
            .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
                "error": {
                    "code": 400,
                    "message": "Voice 'xx' does not exist.",
                    "status": "INVALID_ARGUMENT"
                }
            })))
            .mount(&server)
            .await;

        let result = client(&server).synthesize("Hi", "en-US", "xx").await;
        assert!(matches!(
            result,
            Err(TtsError::Provider(ProviderError::Api { status: 400, .. }))
        ));
    }
}
