use std::path::Path;
use std::sync::Arc;

use once_cell::sync::OnceCell;
use serde::Deserialize;
use tracing::{debug, error};

pub const DEFAULT_TOKEN_URI: &str = "https://oauth2.googleapis.com/token";

#[derive(Debug, thiserror::Error)]
pub enum CredentialError {
    #[error("invalid credential JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("unsupported credential type: {0}")]
    UnsupportedType(String),

    #[error("failed to read credential file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Service account key as downloaded from the cloud console.
#[derive(Clone, Deserialize)]
pub struct ServiceAccountKey {
    #[serde(default)]
    pub project_id: Option<String>,
    #[serde(default)]
    pub private_key_id: Option<String>,
    pub private_key: String,
    pub client_email: String,
    #[serde(default = "default_token_uri")]
    pub token_uri: String,
}

/// User credentials written by `gcloud auth application-default login`.
#[derive(Clone, Deserialize)]
pub struct AuthorizedUserKey {
    pub client_id: String,
    pub client_secret: String,
    pub refresh_token: String,
    #[serde(default)]
    pub quota_project_id: Option<String>,
}

fn default_token_uri() -> String {
    DEFAULT_TOKEN_URI.to_string()
}

impl std::fmt::Debug for ServiceAccountKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceAccountKey")
            .field("project_id", &self.project_id)
            .field("client_email", &self.client_email)
            .field("token_uri", &self.token_uri)
            .field("private_key", &"<redacted>")
            .finish()
    }
}

impl std::fmt::Debug for AuthorizedUserKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthorizedUserKey")
            .field("client_id", &self.client_id)
            .field("quota_project_id", &self.quota_project_id)
            .field("client_secret", &"<redacted>")
            .field("refresh_token", &"<redacted>")
            .finish()
    }
}

/// Authentication material for outbound provider calls.
#[derive(Debug, Clone)]
pub enum Credential {
    ServiceAccount(ServiceAccountKey),
    AuthorizedUser(AuthorizedUserKey),
}

impl Credential {
    /// Parse a credential JSON document, dispatching on its `type` field.
    pub fn from_json(json: &str) -> Result<Self, CredentialError> {
        let value: serde_json::Value = serde_json::from_str(json)?;

        match value.get("type").and_then(|t| t.as_str()) {
            Some("service_account") => {
                Ok(Credential::ServiceAccount(serde_json::from_value(value)?))
            }
            Some("authorized_user") => {
                Ok(Credential::AuthorizedUser(serde_json::from_value(value)?))
            }
            Some(other) => Err(CredentialError::UnsupportedType(other.to_string())),
            None => Err(CredentialError::UnsupportedType("<missing>".to_string())),
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, CredentialError> {
        let content = std::fs::read_to_string(path).map_err(|source| CredentialError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&content)
    }

    pub fn project_id(&self) -> Option<&str> {
        match self {
            Credential::ServiceAccount(key) => key.project_id.as_deref(),
            Credential::AuthorizedUser(key) => key.quota_project_id.as_deref(),
        }
    }
}

/// Resolves the configured credential once per process.
///
/// The configured value is either inline JSON (starts with `{`) or a file
/// path. Inline JSON is parsed into a [`Credential`]; anything else resolves
/// to `None`, which tells callers to use ambient credential discovery.
/// Only a successful resolution is stored, so a malformed secret keeps
/// failing on every call.
pub struct CredentialProvider {
    raw: String,
    resolved: OnceCell<Option<Arc<Credential>>>,
}

impl CredentialProvider {
    pub fn new(raw: impl Into<String>) -> Self {
        Self {
            raw: raw.into(),
            resolved: OnceCell::new(),
        }
    }

    pub fn get_credentials(&self) -> Result<Option<Arc<Credential>>, CredentialError> {
        self.resolved
            .get_or_try_init(|| resolve(&self.raw))
            .map(Clone::clone)
    }

    /// The configured value as given, used as a key-file path during
    /// ambient discovery.
    pub fn raw(&self) -> &str {
        &self.raw
    }
}

impl std::fmt::Debug for CredentialProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialProvider")
            .field("resolved", &self.resolved.get().is_some())
            .finish()
    }
}

fn resolve(raw: &str) -> Result<Option<Arc<Credential>>, CredentialError> {
    let trimmed = raw.trim();

    if trimmed.starts_with('{') {
        match Credential::from_json(trimmed) {
            Ok(credential) => {
                debug!("Loaded credentials from inline JSON");
                Ok(Some(Arc::new(credential)))
            }
            Err(e) => {
                error!("Error parsing credentials JSON: {}", e);
                Err(e)
            }
        }
    } else {
        debug!("No inline credentials, using application default credentials");
        Ok(None)
    }
}
