use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};

use crate::errors::ApiResult;
use crate::schemas::{SttRequest, SttResponse};
use crate::state::AppState;

pub async fn transcribe_speech(
    State(state): State<AppState>,
    payload: Result<Json<SttRequest>, JsonRejection>,
) -> ApiResult<Json<SttResponse>> {
    let Json(request) = payload?;
    request.validate()?;

    let transcription = state
        .recognizer
        .transcribe(&request.audio_content, &request.language_code)
        .await?;

    Ok(Json(transcription.into()))
}
