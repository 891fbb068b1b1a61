use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::{error, warn};

use crate::stt::SttError;
use crate::translate::TranslationError;
use crate::tts::TtsError;

/// A request that failed structural validation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{message}")]
pub struct ValidationError {
    message: String,
}

impl ValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<JsonRejection> for ValidationError {
    fn from(rejection: JsonRejection) -> Self {
        Self::new(rejection.body_text())
    }
}

impl From<QueryRejection> for ValidationError {
    fn from(rejection: QueryRejection) -> Self {
        Self::new(rejection.body_text())
    }
}

/// Failure of one API call, tagged with the capability that failed.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("translation failed: {0}")]
    Translation(#[source] TranslationError),

    #[error("language detection failed: {0}")]
    Detection(#[source] TranslationError),

    #[error("supported languages lookup failed: {0}")]
    Languages(#[source] TranslationError),

    #[error("speech synthesis failed: {0}")]
    Tts(#[from] TtsError),

    #[error("speech recognition failed: {0}")]
    Stt(#[from] SttError),
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Validation(rejection.into())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::Validation(rejection.into())
    }
}

impl ApiError {
    /// Status code and caller-facing `detail` message.
    ///
    /// Bad input keeps its message; every other failure is reduced to the
    /// fixed message of its capability.
    pub fn status_and_detail(&self) -> (StatusCode, String) {
        match self {
            ApiError::Validation(e) => (StatusCode::BAD_REQUEST, e.message().to_string()),
            ApiError::Translation(TranslationError::InvalidInput(msg))
            | ApiError::Detection(TranslationError::InvalidInput(msg))
            | ApiError::Languages(TranslationError::InvalidInput(msg))
            | ApiError::Tts(TtsError::InvalidInput(msg))
            | ApiError::Stt(SttError::InvalidInput(msg)) => (StatusCode::BAD_REQUEST, msg.clone()),
            ApiError::Translation(_) => internal("Translation service error"),
            ApiError::Detection(_) => internal("Language detection failed"),
            ApiError::Languages(_) => internal("Failed to fetch supported languages"),
            ApiError::Tts(_) => internal("Text-to-Speech service error"),
            ApiError::Stt(_) => internal("Speech-to-Text service error"),
        }
    }
}

fn internal(detail: &str) -> (StatusCode, String) {
    (StatusCode::INTERNAL_SERVER_ERROR, detail.to_string())
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = self.status_and_detail();

        if status.is_server_error() {
            error!("{}", self);
        } else {
            warn!("Bad request: {}", self);
        }

        (status, Json(json!({ "detail": detail }))).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
