//! Backend request types.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::voice::VoiceReference;

/// Default SiliconFlow OpenAI-compatible endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.siliconflow.cn/v1";

/// Default dialogue TTS model.
pub const DEFAULT_MODEL: &str = "fnlp/MOSS-TTSD-v0.5";

/// Default generation token budget per segment.
pub const DEFAULT_MAX_TOKENS: u32 = 16384;

/// Errors that can occur when talking to the TTS service.
#[derive(Error, Debug)]
pub enum BackendError {
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Client setup failed: {0}")]
    ClientSetup(String),
}

/// Body of an OpenAI-compatible `audio/speech` request with voice references.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeechRequest {
    pub model: String,
    pub input: String,
    /// Always empty; the voices come from `references`.
    pub voice: String,
    pub response_format: String,
    pub references: Vec<VoiceReference>,
    pub max_tokens: u32,
}

impl SpeechRequest {
    /// Create an mp3 request for `input` with the default token budget.
    pub fn new(model: impl Into<String>, input: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            input: input.into(),
            voice: String::new(),
            response_format: "mp3".to_string(),
            references: Vec::new(),
            max_tokens: DEFAULT_MAX_TOKENS,
        }
    }

    /// Set the voice references.
    pub fn with_references(mut self, references: Vec<VoiceReference>) -> Self {
        self.references = references;
        self
    }

    /// Set the generation token budget.
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }
}
