//! Backend communication with the hosted TTS service.
//!
//! Provides the synthesis trait and the HTTP implementation used against
//! SiliconFlow's OpenAI-compatible speech API.

mod client;
mod types;

pub use client::HttpBackend;
pub use types::{BackendError, DEFAULT_BASE_URL, DEFAULT_MAX_TOKENS, DEFAULT_MODEL, SpeechRequest};

/// Trait for speech synthesis.
///
/// This trait abstracts the HTTP communication with the TTS service,
/// allowing for mock implementations in tests.
#[cfg_attr(test, mockall::automock)]
pub trait Backend: Send + Sync {
    /// Synthesize speech for one request.
    ///
    /// # Returns
    /// Raw encoded audio (mp3)
    fn synthesize(&self, request: &SpeechRequest) -> Result<Vec<u8>, BackendError>;
}
