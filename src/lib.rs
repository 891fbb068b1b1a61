//! HTTP gateway exposing Google Cloud translation, language detection,
//! text-to-speech and speech-to-text behind a small JSON API.

pub mod auth;
pub mod errors;
pub mod handlers;
pub mod provider;
pub mod routes;
pub mod schemas;
pub mod settings;
pub mod state;
pub mod stt;
pub mod translate;
pub mod tts;

pub use errors::{ApiError, ValidationError};
pub use routes::create_router;
pub use settings::Settings;
pub use state::AppState;
