use std::sync::Arc;

use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::auth::{CredentialError, TokenProvider};

/// Longest provider error body kept in an error message.
const MAX_ERROR_BODY_LEN: usize = 512;

/// Failure of one outbound call to the cloud provider.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("credential error: {0}")]
    Credential(#[from] CredentialError),

    #[error("authentication failed: {0}")]
    Authentication(String),

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("provider returned {status}: {message}")]
    Api { status: u16, message: String },

    #[error("unexpected provider response: {0}")]
    Decode(String),
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: String,
    #[serde(default)]
    status: Option<String>,
}

impl ProviderError {
    /// Build an `Api` error from a non-success response, preferring the
    /// message inside Google's `{"error": {...}}` envelope.
    pub fn from_error_body(status: u16, body: &str) -> Self {
        let message = match serde_json::from_str::<ErrorEnvelope>(body) {
            Ok(envelope) => match envelope.error.status {
                Some(code) => format!("{}: {}", code, envelope.error.message),
                None => envelope.error.message,
            },
            Err(_) => truncate(body, MAX_ERROR_BODY_LEN),
        };

        ProviderError::Api { status, message }
    }
}

fn truncate(body: &str, max: usize) -> String {
    if body.len() <= max {
        return body.to_string();
    }
    let mut end = max;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &body[..end])
}

/// Shared HTTP client for Google REST endpoints.
///
/// Attaches a bearer token from the configured [`TokenProvider`] to every
/// request and turns non-success responses into [`ProviderError::Api`].
#[derive(Clone)]
pub struct GoogleHttpClient {
    client: Client,
    tokens: Arc<dyn TokenProvider>,
}

impl GoogleHttpClient {
    pub fn new(tokens: Arc<dyn TokenProvider>) -> Self {
        Self {
            client: Client::new(),
            tokens,
        }
    }

    pub async fn post_json<B, R>(&self, url: &str, body: &B) -> Result<R, ProviderError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        debug!("POST {}", url);
        self.send(self.client.post(url).json(body)).await
    }

    pub async fn get_json<R>(&self, url: &str, query: &[(&str, &str)]) -> Result<R, ProviderError>
    where
        R: DeserializeOwned,
    {
        debug!("GET {}", url);
        self.send(self.client.get(url).query(query)).await
    }

    async fn send<R: DeserializeOwned>(&self, request: RequestBuilder) -> Result<R, ProviderError> {
        let token = self.tokens.get_token().await?;
        let response = request.bearer_auth(token).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::from_error_body(status.as_u16(), &body));
        }

        response
            .json::<R>()
            .await
            .map_err(|e| ProviderError::Decode(e.to_string()))
    }
}

impl std::fmt::Debug for GoogleHttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GoogleHttpClient").finish_non_exhaustive()
    }
}
