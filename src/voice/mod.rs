//! Voice reference samples used to condition the synthesized voices.
//!
//! Each sample is turned into a base64 audio data URI and paired with the
//! transcript of what is spoken in it.

mod reference;

pub use reference::{
    FEMALE_TRANSCRIPT, MALE_TRANSCRIPT, VoiceError, VoiceReference, VoiceSource, load_references,
};
