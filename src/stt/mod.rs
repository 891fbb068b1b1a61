pub mod client;
pub mod interface;

pub use client::GoogleSttClient;
pub use interface::{SpeechRecognizer, SttError, Transcription};
