use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    Json,
};
use tracing::info;

use crate::errors::{ApiError, ApiResult};
use crate::schemas::{
    DetectLanguageRequest, DetectLanguageResponse, SupportedLanguagesQuery,
    SupportedLanguagesResponse, TranslateRequest, TranslateResponse,
};
use crate::state::AppState;

pub async fn translate_text(
    State(state): State<AppState>,
    payload: Result<Json<TranslateRequest>, JsonRejection>,
) -> ApiResult<Json<TranslateResponse>> {
    let Json(request) = payload?;
    request.validate()?;

    info!(
        "Translating {} chars to {} (source: {})",
        request.text.chars().count(),
        request.target_language,
        request.source_language().unwrap_or("auto")
    );

    let translation = state
        .translator
        .translate(
            &request.text,
            &request.target_language,
            request.source_language(),
        )
        .await
        .map_err(ApiError::Translation)?;

    Ok(Json(translation.into()))
}

pub async fn detect_language(
    State(state): State<AppState>,
    payload: Result<Json<DetectLanguageRequest>, JsonRejection>,
) -> ApiResult<Json<DetectLanguageResponse>> {
    let Json(request) = payload?;
    request.validate()?;

    let detection = state
        .translator
        .detect_language(&request.text)
        .await
        .map_err(ApiError::Detection)?;

    Ok(Json(detection.into()))
}

pub async fn supported_languages(
    State(state): State<AppState>,
    query: Result<Query<SupportedLanguagesQuery>, QueryRejection>,
) -> ApiResult<Json<SupportedLanguagesResponse>> {
    let Query(query) = query?;

    let languages = state
        .translator
        .supported_languages(query.display_language_code())
        .await
        .map_err(ApiError::Languages)?;

    Ok(Json(languages.into()))
}
