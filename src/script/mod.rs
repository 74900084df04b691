//! Podcast script parsing.
//!
//! Scripts come in four shapes, all normalized into [`Segment`]s:
//! 1. Markdown / plain text: the whole file is one segment.
//! 2. JSON array of strings: `["[S1]...[S2]...", ...]`
//! 3. JSON array of objects: `[{"title": "...", "script": "[S1]..."}, ...]`
//! 4. Full objects that also carry `arxiv_id` and `channel_id`.

mod parser;

pub use parser::{
    ScriptError, ScriptFormat, Segment, parse_json_segments, parse_markdown_segment, parse_script,
    timestamp_from_filename,
};
