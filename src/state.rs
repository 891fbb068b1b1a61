use std::sync::Arc;

use tracing::info;

use crate::auth::{CredentialError, CredentialProvider, GoogleTokenProvider};
use crate::provider::GoogleHttpClient;
use crate::settings::Settings;
use crate::stt::{GoogleSttClient, SpeechRecognizer};
use crate::translate::{GoogleTranslateClient, Translator};
use crate::tts::{GoogleTtsClient, SpeechSynthesizer};

#[derive(Clone)]
pub struct AppState {
    pub settings: Arc<Settings>,
    pub translator: Arc<dyn Translator>,
    pub synthesizer: Arc<dyn SpeechSynthesizer>,
    pub recognizer: Arc<dyn SpeechRecognizer>,
}

impl AppState {
    /// Builds the Google-backed adapters. The credential is parsed here so a
    /// malformed key fails startup instead of the first request.
    pub fn new(settings: Settings) -> Result<Self, CredentialError> {
        let credentials = Arc::new(CredentialProvider::new(
            settings.google_application_credentials.clone(),
        ));
        match credentials.get_credentials()? {
            Some(credential) => info!(
                "Using inline credential (project: {})",
                credential.project_id().unwrap_or("unknown")
            ),
            None => info!("Using Application Default Credentials"),
        }

        let http = GoogleHttpClient::new(Arc::new(GoogleTokenProvider::new(credentials)));
        let parent = settings.provider_parent();

        let translator = GoogleTranslateClient::new(
            http.clone(),
            &settings.translate_base_url,
            parent.clone(),
        );
        let synthesizer = GoogleTtsClient::new(http.clone(), &settings.tts_base_url)
            .with_encoding(settings.tts_audio_encoding)
            .with_gender(settings.tts_voice_gender);
        let recognizer = GoogleSttClient::new(http, &settings.stt_base_url, &parent);

        Ok(Self::with_adapters(
            settings,
            Arc::new(translator),
            Arc::new(synthesizer),
            Arc::new(recognizer),
        ))
    }

    pub fn with_adapters(
        settings: Settings,
        translator: Arc<dyn Translator>,
        synthesizer: Arc<dyn SpeechSynthesizer>,
        recognizer: Arc<dyn SpeechRecognizer>,
    ) -> Self {
        Self {
            settings: Arc::new(settings),
            translator,
            synthesizer,
            recognizer,
        }
    }
}
