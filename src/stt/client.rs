use async_trait::async_trait;
use base64::{
    engine::general_purpose::{STANDARD as BASE64, URL_SAFE},
    Engine,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use super::interface::{SpeechRecognizer, SttError, Transcription};
use crate::provider::GoogleHttpClient;

/// Recognition model suited to long-form audio.
const RECOGNITION_MODEL: &str = "long";

#[derive(Serialize)]
struct RecognizeBody<'a> {
    config: RecognitionConfig<'a>,
    content: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RecognitionConfig<'a> {
    auto_decoding_config: AutoDetectDecodingConfig,
    language_codes: [&'a str; 1],
    model: &'a str,
}

#[derive(Serialize)]
struct AutoDetectDecodingConfig {}

#[derive(Deserialize)]
struct RecognizeResponse {
    #[serde(default)]
    results: Vec<RecognitionResult>,
}

#[derive(Deserialize)]
struct RecognitionResult {
    #[serde(default)]
    alternatives: Vec<RecognitionAlternative>,
}

#[derive(Deserialize)]
struct RecognitionAlternative {
    #[serde(default)]
    transcript: String,
    #[serde(default)]
    confidence: f32,
}

/// Decodes caller audio given in either base64 alphabet, ignoring the line
/// breaks of MIME-wrapped input. Padding stays mandatory.
fn decode_audio(audio_content: &str) -> Result<Vec<u8>, base64::DecodeError> {
    let compact: String = audio_content
        .chars()
        .filter(|c| !c.is_ascii_whitespace())
        .collect();

    BASE64
        .decode(compact.as_bytes())
        .or_else(|_| URL_SAFE.decode(compact.as_bytes()))
}

/// Speech recognition adapter over the Cloud Speech-to-Text v2 REST API.
#[derive(Debug, Clone)]
pub struct GoogleSttClient {
    http: GoogleHttpClient,
    base_url: String,
    recognizer: String,
}

impl GoogleSttClient {
    /// `parent` is the `projects/{id}/locations/global` scope; requests go to
    /// its default (`_`) recognizer.
    pub fn new(http: GoogleHttpClient, base_url: &str, parent: &str) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            recognizer: format!("{parent}/recognizers/_"),
        }
    }
}

#[async_trait]
impl SpeechRecognizer for GoogleSttClient {
    async fn transcribe(
        &self,
        audio_content: &str,
        language_code: &str,
    ) -> Result<Transcription, SttError> {
        let audio = decode_audio(audio_content).map_err(|e| {
            SttError::InvalidInput(format!("audioContent is not valid base64: {e}"))
        })?;
        if audio.is_empty() {
            return Err(SttError::InvalidInput(
                "audioContent must not be empty".to_string(),
            ));
        }
        let content = BASE64.encode(&audio);

        let body = RecognizeBody {
            config: RecognitionConfig {
                auto_decoding_config: AutoDetectDecodingConfig {},
                language_codes: [language_code],
                model: RECOGNITION_MODEL,
            },
            content: &content,
        };

        debug!(
            "Sending STT request: language={}, audio bytes={}",
            language_code,
            audio.len()
        );

        let url = format!("{}/v2/{}:recognize", self.base_url, self.recognizer);
        let response: RecognizeResponse = self
            .http
            .post_json(&url, &body)
            .await
            .map_err(|e| {
                error!("STT error: {}", e);
                e
            })?;

        let top = response
            .results
            .into_iter()
            .next()
            .and_then(|result| result.alternatives.into_iter().next());

        match top {
            Some(alternative) => Ok(Transcription {
                text: alternative.transcript,
                confidence: alternative.confidence,
                language_code: language_code.to_string(),
            }),
            None => {
                debug!("No speech recognized");
                Ok(Transcription::no_speech(language_code))
            }
        }
    }
}
