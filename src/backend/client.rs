//! HTTP client for the hosted TTS service.

use std::time::Duration;

use reqwest::header::AUTHORIZATION;

use super::Backend;
use super::types::{BackendError, SpeechRequest};

/// Blocking client for an OpenAI-compatible speech endpoint.
pub struct HttpBackend {
    base_url: String,
    api_key: String,
    client: reqwest::blocking::Client,
}

impl HttpBackend {
    /// Create a new client; `timeout` bounds each synthesis call.
    pub fn new(base_url: &str, api_key: &str, timeout: Duration) -> Result<Self, BackendError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| BackendError::ClientSetup(e.to_string()))?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            client,
        })
    }

    /// Get the base URL for this backend.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL of the speech endpoint.
    pub fn speech_url(&self) -> String {
        format!("{}/audio/speech", self.base_url)
    }
}

impl Backend for HttpBackend {
    fn synthesize(&self, request: &SpeechRequest) -> Result<Vec<u8>, BackendError> {
        let response = self
            .client
            .post(self.speech_url())
            .header(AUTHORIZATION, format!("Bearer {}", self.api_key))
            .json(request)
            .send()
            .map_err(|e| BackendError::ConnectionFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(BackendError::RequestFailed(format!("Status: {status}: {body}")));
        }

        let audio = response
            .bytes()
            .map(|b| b.to_vec())
            .map_err(|e| BackendError::InvalidResponse(e.to_string()))?;

        if audio.is_empty() {
            return Err(BackendError::InvalidResponse(
                "Empty audio response".to_string(),
            ));
        }

        Ok(audio)
    }
}
