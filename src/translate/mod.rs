pub mod client;
pub mod interface;

pub use client::GoogleTranslateClient;
pub use interface::{
    LanguageDetection, SupportedLanguage, Translation, TranslationError, Translator,
};
