pub mod health;
pub mod stt;
pub mod translation;
pub mod tts;
