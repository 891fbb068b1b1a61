pub mod requests;
pub mod responses;

pub use requests::{
    DetectLanguageRequest, SttRequest, SupportedLanguagesQuery, TranslateRequest, TtsRequest,
};
pub use responses::{
    DetectLanguageResponse, HealthResponse, SttResponse, SupportedLanguagesResponse,
    TranslateResponse,
};
