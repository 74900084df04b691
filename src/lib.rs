//! podcast-tts-rs: Podcast script to speech generation.
//!
//! This crate turns a podcast script (markdown dialogue or a JSON segment
//! list) into one mp3 per segment using a hosted voice-cloning TTS service,
//! and writes a JSON report of what was generated.

pub mod backend;
pub mod cli;
pub mod config;
pub mod engine;
pub mod mapping;
pub mod report;
pub mod script;
pub mod voice;
