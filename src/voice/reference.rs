//! Voice reference loading.

use std::path::{Path, PathBuf};

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

/// Transcript of the bundled female reference sample.
pub const FEMALE_TRANSCRIPT: &str = "周一到周五，每天早晨七点半到九点半的直播片段。言下之意呢，就是废话有点多，大家也别嫌弃，因为这都是直播间最真实的状态了。";

/// Transcript of the bundled male reference sample.
pub const MALE_TRANSCRIPT: &str = "就现在的影片结尾是这个凯瑟琳和杰西卡一番折腾以后呢，那个网红的摄像机碎了，然后两个人要消失了。然后杰西卡说：这下大家都要消失，你高兴了吧。";

/// Errors that can occur while loading voice references.
#[derive(Error, Debug)]
pub enum VoiceError {
    #[error("No voice reference samples found")]
    NoReferences,

    #[error("Failed to read voice sample {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// A voice sample on disk paired with its transcript.
#[derive(Debug, Clone, PartialEq)]
pub struct VoiceSource {
    pub path: PathBuf,
    pub transcript: String,
}

impl VoiceSource {
    pub fn new(path: impl Into<PathBuf>, transcript: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            transcript: transcript.into(),
        }
    }

    /// The two fixed samples in `voices_dir`, primary voice first.
    pub fn defaults(voices_dir: &Path) -> Vec<Self> {
        vec![
            Self::new(voices_dir.join("female_base64.txt"), FEMALE_TRANSCRIPT),
            Self::new(voices_dir.join("male_base64.txt"), MALE_TRANSCRIPT),
        ]
    }

    /// Whether the file already holds base64 text rather than raw audio.
    fn is_pre_encoded(&self) -> bool {
        self.path.extension().is_some_and(|ext| ext == "txt")
    }

    fn encode(&self) -> Result<String, VoiceError> {
        let io_err = |source| VoiceError::Io {
            path: self.path.clone(),
            source,
        };

        if self.is_pre_encoded() {
            let text = std::fs::read_to_string(&self.path).map_err(io_err)?;
            return Ok(text.trim().to_string());
        }

        let bytes = std::fs::read(&self.path).map_err(io_err)?;
        Ok(STANDARD.encode(bytes))
    }
}

/// A reference sample in the shape the TTS service expects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VoiceReference {
    /// `data:audio/mpeg;base64,...` URI.
    pub audio: String,
    pub text: String,
}

impl VoiceReference {
    /// Wrap a base64 payload as an audio data URI.
    pub fn from_base64(payload: &str, text: impl Into<String>) -> Self {
        Self {
            audio: format!("data:audio/mpeg;base64,{payload}"),
            text: text.into(),
        }
    }
}

/// Load references in source order, skipping samples that do not exist.
///
/// Returns [`VoiceError::NoReferences`] if none of the sources exist.
pub fn load_references(sources: &[VoiceSource]) -> Result<Vec<VoiceReference>, VoiceError> {
    let mut references = Vec::with_capacity(sources.len());

    for source in sources {
        if !source.path.exists() {
            warn!(path = %source.path.display(), "voice reference sample not found, skipping");
            continue;
        }

        let payload = source.encode()?;
        references.push(VoiceReference::from_base64(&payload, source.transcript.clone()));
    }

    if references.is_empty() {
        return Err(VoiceError::NoReferences);
    }

    info!(count = references.len(), "loaded voice references");
    Ok(references)
}
