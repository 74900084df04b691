//! Batch synthesis over parsed segments.

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, error, info};

use crate::backend::{Backend, BackendError, DEFAULT_MAX_TOKENS, DEFAULT_MODEL, SpeechRequest};
use crate::script::Segment;
use crate::voice::VoiceReference;

/// Why a single segment failed.
#[derive(Error, Debug)]
pub enum SegmentError {
    #[error("Synthesis failed: {0}")]
    Synthesis(#[from] BackendError),

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// A successfully generated audio file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationOutcome {
    pub local_path: String,
    pub arxiv_id: String,
    pub channel_id: Option<String>,
}

/// Aggregate result of one batch run.
#[derive(Debug, Clone, Default)]
pub struct BatchResult {
    pub outcomes: Vec<GenerationOutcome>,
    pub success: usize,
    pub failed: usize,
    pub elapsed: Duration,
}

/// Synthesizes segments one at a time into `<output_dir>/<arxiv_id>.mp3`.
pub struct BatchSynthesizer<B: Backend> {
    backend: B,
    references: Vec<VoiceReference>,
    output_dir: PathBuf,
    model: String,
    max_tokens: u32,
    default_channel_id: Option<String>,
}

impl<B: Backend> BatchSynthesizer<B> {
    pub fn new(backend: B, references: Vec<VoiceReference>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            backend,
            references,
            output_dir: output_dir.into(),
            model: DEFAULT_MODEL.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
            default_channel_id: None,
        }
    }

    /// Channel id recorded for segments without their own.
    pub fn with_default_channel(mut self, channel_id: Option<String>) -> Self {
        self.default_channel_id = channel_id.filter(|c| !c.is_empty());
        self
    }

    pub fn with_model(mut self, model: impl Into<String>, max_tokens: u32) -> Self {
        self.model = model.into();
        self.max_tokens = max_tokens;
        self
    }

    /// Output path for a segment.
    pub fn output_path(&self, segment: &Segment) -> PathBuf {
        self.output_dir.join(format!("{}.mp3", segment.arxiv_id))
    }

    /// Process all segments in order. A failing segment is logged and
    /// counted; it never stops the batch.
    pub fn run(&self, segments: &[Segment]) -> BatchResult {
        let start = Instant::now();
        let total = segments.len();
        let mut result = BatchResult::default();

        info!(count = total, "generating audio files");

        let dir_ready = std::fs::create_dir_all(&self.output_dir);

        for (idx, segment) in segments.iter().enumerate() {
            let output_path = self.output_path(segment);

            debug!(
                index = idx + 1,
                total,
                title = %segment.title,
                arxiv_id = %segment.arxiv_id,
                chars = segment.script.chars().count(),
                "synthesizing segment"
            );

            let generated = match &dir_ready {
                Ok(()) => self.generate(segment, &output_path),
                Err(e) => Err(SegmentError::Write {
                    path: self.output_dir.clone(),
                    source: std::io::Error::new(e.kind(), e.to_string()),
                }),
            };

            match generated {
                Ok(()) => {
                    result.success += 1;
                    result.outcomes.push(GenerationOutcome {
                        local_path: output_path.display().to_string(),
                        arxiv_id: segment.arxiv_id.clone(),
                        channel_id: self.channel_for(segment),
                    });
                    info!(
                        "[{}/{}] {} - {}",
                        idx + 1,
                        total,
                        segment.arxiv_id,
                        short_title(&segment.title)
                    );
                }
                Err(e) => {
                    result.failed += 1;
                    error!(
                        "[{}/{}] generation failed: {}: {e}",
                        idx + 1,
                        total,
                        segment.arxiv_id
                    );
                }
            }
        }

        result.elapsed = start.elapsed();
        result
    }

    fn generate(&self, segment: &Segment, output_path: &Path) -> Result<(), SegmentError> {
        let request = SpeechRequest::new(self.model.clone(), segment.script.clone())
            .with_references(self.references.clone())
            .with_max_tokens(self.max_tokens);

        let audio = self.backend.synthesize(&request)?;

        std::fs::write(output_path, &audio).map_err(|source| SegmentError::Write {
            path: output_path.to_path_buf(),
            source,
        })?;

        debug!(path = %output_path.display(), bytes = audio.len(), "audio written");
        Ok(())
    }

    fn channel_for(&self, segment: &Segment) -> Option<String> {
        if segment.channel_id.is_empty() {
            self.default_channel_id.clone()
        } else {
            Some(segment.channel_id.clone())
        }
    }
}

/// Title cut to 40 characters for progress lines.
fn short_title(title: &str) -> String {
    if title.chars().count() > 40 {
        let head: String = title.chars().take(40).collect();
        format!("{head}...")
    } else {
        title.to_string()
    }
}
