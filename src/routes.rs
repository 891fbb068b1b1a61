use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::handlers::{health, stt, translation, tts};
use crate::state::AppState;

/// Translation, TTS and STT routes, relative to the API prefix.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/translate", post(translation::translate_text))
        .route("/detect-language", post(translation::detect_language))
        .route("/languages", get(translation::supported_languages))
        .nest(
            "/tts",
            Router::new().route("/synthesize", post(tts::synthesize_speech)),
        )
        .nest(
            "/stt",
            Router::new().route("/synthesize", post(stt::transcribe_speech)),
        )
}

/// The full application: `/health` at the root, everything else under the
/// configured prefix.
pub fn create_router(state: AppState) -> Router {
    let prefix = state.settings.api_prefix();

    let router = Router::new().route("/health", get(health::health_check));
    let router = if prefix.is_empty() {
        router.merge(api_routes())
    } else {
        router.nest(&prefix, api_routes())
    };

    router
        .layer(TraceLayer::new_for_http())
        // Any origin, method and header; credentials allowed.
        .layer(CorsLayer::very_permissive())
        .with_state(state)
}
