//! Run configuration, built once from CLI arguments and environment.

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

use crate::cli::Args;
use crate::voice::{FEMALE_TRANSCRIPT, MALE_TRANSCRIPT, VoiceSource};

/// Name of the mapping file looked up in the output directory by default.
pub const MAPPING_FILE_NAME: &str = "arxiv_mapping.json";

/// Configuration errors that prevent the run from starting.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("SILICONFLOW_API_KEY is not set; add it to .env or pass --api-key")]
    MissingApiKey,

    #[error("Could not find home directory for default voices dir")]
    NoHomeDir,
}

/// Everything a run needs, resolved up front.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    pub max_tokens: u32,
    pub timeout: Duration,
    pub script: PathBuf,
    pub output_dir: PathBuf,
    pub mapping_path: PathBuf,
    pub channel_id: Option<String>,
    pub arxiv_id_override: Option<String>,
    pub voices: Vec<VoiceSource>,
    pub verbose: bool,
    pub check_only: bool,
}

impl Config {
    pub fn from_args(args: Args) -> Result<Self, ConfigError> {
        let api_key = args
            .api_key
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty())
            .ok_or(ConfigError::MissingApiKey)?;

        let voices_dir = match args.voices_dir {
            Some(dir) => dir,
            None => default_voices_dir()?,
        };
        let mut voices = VoiceSource::defaults(&voices_dir);
        if let Some(path) = args.female_ref {
            voices[0] = VoiceSource::new(path, FEMALE_TRANSCRIPT);
        }
        if let Some(path) = args.male_ref {
            voices[1] = VoiceSource::new(path, MALE_TRANSCRIPT);
        }

        let mapping_path = args
            .mapping
            .unwrap_or_else(|| args.output_dir.join(MAPPING_FILE_NAME));

        Ok(Self {
            api_key,
            base_url: args.base_url,
            model: args.model,
            max_tokens: args.max_tokens,
            timeout: Duration::from_secs(args.timeout),
            script: args.script,
            output_dir: args.output_dir,
            mapping_path,
            channel_id: args.channel_id.filter(|c| !c.is_empty()),
            arxiv_id_override: args.arxiv_id.filter(|id| !id.is_empty()),
            voices,
            verbose: args.verbose,
            check_only: args.check_only,
        })
    }

    /// API key shortened for display.
    pub fn masked_api_key(&self) -> String {
        if self.api_key.chars().count() > 20 {
            let head: String = self.api_key.chars().take(20).collect();
            format!("{head}...")
        } else {
            self.api_key.clone()
        }
    }
}

fn default_voices_dir() -> Result<PathBuf, ConfigError> {
    dirs::home_dir()
        .map(|home| home.join(".podcast-tts-rs").join("voices"))
        .ok_or(ConfigError::NoHomeDir)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn args(extra: &[&str]) -> Args {
        let mut argv = vec![
            "podcast-tts-rs",
            "--script",
            "podcast.md",
            "--output-dir",
            "/out",
            "--voices-dir",
            "/voices",
        ];
        argv.extend_from_slice(extra);
        Args::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_missing_api_key_is_fatal() {
        let mut parsed = args(&[]);
        parsed.api_key = None;

        assert!(matches!(
            Config::from_args(parsed).unwrap_err(),
            ConfigError::MissingApiKey
        ));
    }

    #[test]
    fn test_blank_api_key_is_fatal() {
        let result = Config::from_args(args(&["--api-key", "   "]));
        assert!(matches!(result.unwrap_err(), ConfigError::MissingApiKey));
    }

    #[test]
    fn test_defaults_resolved() {
        let config = Config::from_args(args(&["--api-key", "sk-abc"])).unwrap();

        assert_eq!(config.api_key, "sk-abc");
        assert_eq!(config.mapping_path, PathBuf::from("/out/arxiv_mapping.json"));
        assert_eq!(config.timeout, Duration::from_secs(600));
        assert_eq!(config.voices, VoiceSource::defaults(&PathBuf::from("/voices")));
        assert!(config.channel_id.is_none());
        assert!(config.arxiv_id_override.is_none());
    }

    #[test]
    fn test_reference_overrides_keep_transcripts() {
        let config = Config::from_args(args(&[
            "--api-key",
            "sk",
            "--female-ref",
            "/tmp/f_base64.txt",
            "--mapping",
            "/map.json",
            "--channel-id",
            "",
        ]))
        .unwrap();

        assert_eq!(config.voices[0].path, PathBuf::from("/tmp/f_base64.txt"));
        assert_eq!(config.voices[0].transcript, FEMALE_TRANSCRIPT);
        assert_eq!(config.voices[1].path, PathBuf::from("/voices/male_base64.txt"));
        assert_eq!(config.mapping_path, PathBuf::from("/map.json"));
        assert!(config.channel_id.is_none());
    }

    #[test]
    fn test_masked_api_key() {
        let mut config = Config::from_args(args(&["--api-key", "short"])).unwrap();
        assert_eq!(config.masked_api_key(), "short");

        config.api_key = "sk-0123456789abcdefghijklmn".to_string();
        assert_eq!(config.masked_api_key(), "sk-0123456789abcdefg...");
    }
}
