//! Batch audio generation.
//!
//! This module drives the TTS backend over every parsed segment and
//! collects the per-file outcomes used for the run report.

mod batch;

pub use batch::{BatchResult, BatchSynthesizer, GenerationOutcome, SegmentError};
