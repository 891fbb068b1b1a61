pub mod client;
pub mod interface;

pub use client::GoogleTtsClient;
pub use interface::{AudioEncoding, SpeechSynthesizer, SynthesizedAudio, TtsError, VoiceGender};
