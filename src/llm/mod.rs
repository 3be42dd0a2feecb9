pub mod client;
pub mod gemini;
pub mod translator;

pub use client::{LlmClient, LlmError};
pub use gemini::GeminiClient;
pub use translator::{Translator, normalize_reply};
