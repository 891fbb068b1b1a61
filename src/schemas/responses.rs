//! Response records of the public API, built from adapter results.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::stt::Transcription;
use crate::translate::{LanguageDetection, SupportedLanguage, Translation};

/// Confidence reported to callers, always within `[0.0, 1.0]`.
pub fn clamp_confidence(confidence: f32) -> f32 {
    if confidence.is_finite() {
        confidence.clamp(0.0, 1.0)
    } else {
        0.0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranslateResponse {
    #[serde(rename = "translatedText")]
    pub translated_text: String,

    #[serde(rename = "detectedSourceLanguage")]
    pub detected_source_language: String,

    #[serde(rename = "targetLanguage")]
    pub target_language: String,
}

impl From<Translation> for TranslateResponse {
    fn from(translation: Translation) -> Self {
        Self {
            translated_text: translation.translated_text,
            detected_source_language: translation.detected_source_language.unwrap_or_default(),
            target_language: translation.target_language,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectLanguageResponse {
    #[serde(rename = "languageCode")]
    pub language_code: String,

    pub confidence: f32,
}

impl From<LanguageDetection> for DetectLanguageResponse {
    fn from(detection: LanguageDetection) -> Self {
        Self {
            language_code: detection.language_code,
            confidence: clamp_confidence(detection.confidence),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SttResponse {
    pub text: String,
    pub confidence: f32,

    #[serde(rename = "languageCode")]
    pub language_code: String,
}

impl From<Transcription> for SttResponse {
    fn from(transcription: Transcription) -> Self {
        Self {
            text: transcription.text,
            confidence: clamp_confidence(transcription.confidence),
            language_code: transcription.language_code,
        }
    }
}

/// Language code to display name, ordered by code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupportedLanguagesResponse {
    pub languages: BTreeMap<String, String>,
}

impl From<Vec<SupportedLanguage>> for SupportedLanguagesResponse {
    fn from(languages: Vec<SupportedLanguage>) -> Self {
        let languages = languages
            .into_iter()
            .map(|language| {
                let name = language
                    .display_name
                    .filter(|name| !name.is_empty())
                    .unwrap_or_else(|| language.language_code.clone());
                (language.language_code, name)
            })
            .collect();

        Self { languages }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_clamp_confidence() {
        assert_eq!(clamp_confidence(0.42), 0.42);
        assert_eq!(clamp_confidence(-0.1), 0.0);
        assert_eq!(clamp_confidence(1.7), 1.0);
        assert_eq!(clamp_confidence(f32::NAN), 0.0);
        assert_eq!(clamp_confidence(f32::INFINITY), 0.0);
    }

    #[test]
    fn test_translate_response_wire_names() {
        let response = TranslateResponse::from(Translation {
            translated_text: "Hola".to_string(),
            detected_source_language: Some("en".to_string()),
            target_language: "es".to_string(),
        });

        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({
                "translatedText": "Hola",
                "detectedSourceLanguage": "en",
                "targetLanguage": "es"
            })
        );
    }

    #[test]
    fn test_translate_response_without_detected_language() {
        let response = TranslateResponse::from(Translation {
            translated_text: "Hola".to_string(),
            detected_source_language: None,
            target_language: "es".to_string(),
        });
        assert_eq!(response.detected_source_language, "");
    }

    #[test]
    fn test_detect_language_response_clamps() {
        let response = DetectLanguageResponse::from(LanguageDetection {
            language_code: "fr".to_string(),
            confidence: 1.2,
        });

        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({"languageCode": "fr", "confidence": 1.0})
        );
    }

    #[test]
    fn test_stt_response_for_silence() {
        let response = SttResponse::from(Transcription::no_speech("en-US"));

        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({"text": "", "confidence": 0.0, "languageCode": "en-US"})
        );
    }

    #[test]
    fn test_supported_languages_sorted_with_name_fallback() {
        let response = SupportedLanguagesResponse::from(vec![
            SupportedLanguage {
                language_code: "es".to_string(),
                display_name: Some("Spanish".to_string()),
            },
            SupportedLanguage {
                language_code: "de".to_string(),
                display_name: None,
            },
        ]);

        assert_eq!(
            serde_json::to_string(&response).unwrap(),
            r#"{"languages":{"de":"de","es":"Spanish"}}"#
        );
    }
}
