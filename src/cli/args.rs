//! CLI argument definitions.

use clap::Parser;
use std::path::PathBuf;

use crate::backend::{DEFAULT_BASE_URL, DEFAULT_MAX_TOKENS, DEFAULT_MODEL};

/// Generate one audio file per podcast segment from a script.
#[derive(Parser, Debug)]
#[command(name = "podcast-tts-rs")]
#[command(about = "Generate podcast audio from a markdown or JSON script")]
#[command(version)]
pub struct Args {
    /// Podcast script file (markdown or JSON)
    #[arg(long)]
    pub script: PathBuf,

    /// Directory for generated audio and the result report
    #[arg(long)]
    pub output_dir: PathBuf,

    /// Channel id recorded for segments that do not carry one
    #[arg(long)]
    pub channel_id: Option<String>,

    /// Force the identifier used for output file names
    #[arg(long)]
    pub arxiv_id: Option<String>,

    /// ID mapping file [default: <output-dir>/arxiv_mapping.json]
    #[arg(long)]
    pub mapping: Option<PathBuf>,

    /// Directory holding the voice reference samples
    #[arg(long)]
    pub voices_dir: Option<PathBuf>,

    /// Primary (female) voice sample; raw audio or a base64 .txt file
    #[arg(long)]
    pub female_ref: Option<PathBuf>,

    /// Secondary (male) voice sample; raw audio or a base64 .txt file
    #[arg(long)]
    pub male_ref: Option<PathBuf>,

    /// API key for the TTS service
    #[arg(long, env = "SILICONFLOW_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Base URL of the TTS service
    #[arg(long, env = "SILICONFLOW_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// TTS model name
    #[arg(long, default_value = DEFAULT_MODEL)]
    pub model: String,

    /// Maximum tokens the model may generate per segment
    #[arg(long, default_value_t = DEFAULT_MAX_TOKENS)]
    pub max_tokens: u32,

    /// Request timeout in seconds for each synthesis call
    #[arg(long, default_value = "600")]
    pub timeout: u64,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Only print the configuration, do not generate audio
    #[arg(long)]
    pub check_only: bool,
}
