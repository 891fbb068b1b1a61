use axum::{
    extract::{rejection::JsonRejection, State},
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use tracing::info;

use crate::errors::ApiResult;
use crate::schemas::TtsRequest;
use crate::state::AppState;

/// Returns the synthesized audio as the raw response body.
pub async fn synthesize_speech(
    State(state): State<AppState>,
    payload: Result<Json<TtsRequest>, JsonRejection>,
) -> ApiResult<Response> {
    let Json(request) = payload?;
    request.validate()?;

    info!(
        "Synthesizing speech: voice={}, language={}",
        request.voice_name, request.language_code
    );

    let audio = state
        .synthesizer
        .synthesize(&request.text, &request.language_code, &request.voice_name)
        .await?;

    Ok((
        [(header::CONTENT_TYPE, audio.encoding.content_type())],
        audio.audio_content,
    )
        .into_response())
}
