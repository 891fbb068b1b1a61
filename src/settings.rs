use serde::{Deserialize, Serialize};

use crate::tts::{AudioEncoding, VoiceGender};

pub const GOOGLE_TRANSLATE_URL: &str = "https://translation.googleapis.com";
pub const GOOGLE_TTS_URL: &str = "https://texttospeech.googleapis.com";
pub const GOOGLE_STT_URL: &str = "https://speech.googleapis.com";

/// Runtime settings for the gateway.
///
/// Values come from (lowest to highest priority) the defaults below, an
/// optional `gateway.{yaml,json,toml}` file and the process environment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_api_prefix")]
    pub api_v1_str: String,

    #[serde(default = "default_project_name")]
    pub project_name: String,

    #[serde(default = "default_version")]
    pub version: String,

    pub google_project_id: String,

    /// Inline service-account JSON, or a path to a key file.
    pub google_application_credentials: String,

    #[serde(default)]
    pub tts_audio_encoding: AudioEncoding,

    #[serde(default)]
    pub tts_voice_gender: VoiceGender,

    #[serde(default = "default_translate_base_url")]
    pub translate_base_url: String,

    #[serde(default = "default_tts_base_url")]
    pub tts_base_url: String,

    #[serde(default = "default_stt_base_url")]
    pub stt_base_url: String,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_api_prefix() -> String {
    "/api".to_string()
}

fn default_project_name() -> String {
    "Translation Service API".to_string()
}

fn default_version() -> String {
    "1.0.0".to_string()
}

fn default_translate_base_url() -> String {
    GOOGLE_TRANSLATE_URL.to_string()
}

fn default_tts_base_url() -> String {
    GOOGLE_TTS_URL.to_string()
}

fn default_stt_base_url() -> String {
    GOOGLE_STT_URL.to_string()
}

impl Settings {
    /// Load settings from `.env`, the optional config file and the environment.
    pub fn load() -> Result<Self, ::config::ConfigError> {
        let _ = dotenvy::dotenv();

        let config_path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| "gateway".to_string());

        let source = ::config::Config::builder()
            .add_source(::config::File::with_name(&config_path).required(false))
            .add_source(::config::Environment::default().try_parsing(true))
            .build()?;

        Self::from_config(source)
    }

    pub fn from_config(source: ::config::Config) -> Result<Self, ::config::ConfigError> {
        let settings: Settings = source.try_deserialize()?;

        if settings.google_project_id.trim().is_empty() {
            return Err(::config::ConfigError::Message(
                "GOOGLE_PROJECT_ID must not be empty".to_string(),
            ));
        }

        Ok(settings)
    }

    /// Route prefix with a single leading slash and no trailing slash.
    /// Empty when the API is mounted at the root.
    pub fn api_prefix(&self) -> String {
        let trimmed = self.api_v1_str.trim().trim_matches('/');
        if trimmed.is_empty() {
            String::new()
        } else {
            format!("/{trimmed}")
        }
    }

    /// `projects/{id}/locations/global`, the scope every provider call runs under.
    pub fn provider_parent(&self) -> String {
        format!("projects/{}/locations/global", self.google_project_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_builder() -> ::config::ConfigBuilder<::config::builder::DefaultState> {
        ::config::Config::builder()
            .set_override("google_project_id", "demo-project")
            .unwrap()
            .set_override("google_application_credentials", "/etc/keys/sa.json")
            .unwrap()
    }

    #[test]
    fn test_defaults_applied() {
        let settings = Settings::from_config(base_builder().build().unwrap()).unwrap();

        assert_eq!(settings.host, "0.0.0.0");
        assert_eq!(settings.port, 8000);
        assert_eq!(settings.api_v1_str, "/api");
        assert_eq!(settings.project_name, "Translation Service API");
        assert_eq!(settings.tts_audio_encoding, AudioEncoding::Mp3);
        assert_eq!(settings.tts_voice_gender, VoiceGender::Female);
        assert_eq!(settings.translate_base_url, GOOGLE_TRANSLATE_URL);
    }

    #[test]
    fn test_missing_project_id_rejected() {
        let source = ::config::Config::builder()
            .set_override("google_application_credentials", "/etc/keys/sa.json")
            .unwrap()
            .build()
            .unwrap();

        assert!(Settings::from_config(source).is_err());
    }

    #[test]
    fn test_blank_project_id_rejected() {
        let source = base_builder()
            .set_override("google_project_id", "  ")
            .unwrap()
            .build()
            .unwrap();

        assert!(Settings::from_config(source).is_err());
    }

    #[test]
    fn test_overrides_parse_enums_and_port() {
        let source = base_builder()
            .set_override("port", 9090_i64)
            .unwrap()
            .set_override("tts_audio_encoding", "OGG_OPUS")
            .unwrap()
            .set_override("tts_voice_gender", "NEUTRAL")
            .unwrap()
            .set_override("api_v1_str", "/v1")
            .unwrap()
            .build()
            .unwrap();

        let settings = Settings::from_config(source).unwrap();
        assert_eq!(settings.port, 9090);
        assert_eq!(settings.tts_audio_encoding, AudioEncoding::OggOpus);
        assert_eq!(settings.tts_voice_gender, VoiceGender::Neutral);
        assert_eq!(settings.api_v1_str, "/v1");
        assert_eq!(settings.api_prefix(), "/v1");
    }

    #[test]
    fn test_api_prefix_normalized() {
        let mut settings = Settings::from_config(base_builder().build().unwrap()).unwrap();

        settings.api_v1_str = "api/v1/".to_string();
        assert_eq!(settings.api_prefix(), "/api/v1");

        settings.api_v1_str = "/".to_string();
        assert_eq!(settings.api_prefix(), "");
    }

    #[test]
    fn test_provider_parent() {
        let settings = Settings::from_config(base_builder().build().unwrap()).unwrap();
        assert_eq!(
            settings.provider_parent(),
            "projects/demo-project/locations/global"
        );
    }
}
