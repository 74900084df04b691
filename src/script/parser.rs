//! Script format detection and segment extraction.

use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use chrono::Utc;
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;
use tracing::{info, warn};

use crate::mapping::IdMapping;

/// Prefixes of placeholder identifiers that should be looked up in the mapping.
const UNRESOLVED_PREFIXES: [&str; 2] = ["unknown_", "segment_"];

static TIMESTAMP_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\d{4}-\d{2}-\d{2}[- ]\d{2}-\d{2}-\d{2}").expect("timestamp pattern is valid")
});

/// Errors that abort script parsing.
#[derive(Error, Debug)]
pub enum ScriptError {
    #[error("Failed to read script {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Script file is empty: {0}")]
    Empty(PathBuf),

    #[error("Script contains no segments: {0}")]
    NoSegments(PathBuf),

    #[error("Unsupported segment format at index {index}: {kind}")]
    UnsupportedElement { index: usize, kind: &'static str },
}

/// One unit of dialogue mapped to one output audio file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub title: String,
    pub script: String,
    pub arxiv_id: String,
    pub channel_id: String,
}

/// Detected shape of a script file.
#[derive(Debug, Clone, PartialEq)]
pub enum ScriptFormat {
    /// Top-level JSON array; each element becomes a segment.
    Json(Vec<Value>),
    /// Anything else; the whole text is a single segment.
    Markdown(String),
}

impl ScriptFormat {
    /// Try a JSON array first and fall back to treating the text as markdown.
    pub fn detect(content: &str) -> Self {
        match serde_json::from_str::<Value>(content) {
            Ok(Value::Array(items)) => ScriptFormat::Json(items),
            _ => ScriptFormat::Markdown(content.to_string()),
        }
    }
}

/// Read and parse a script file into segments.
///
/// `arxiv_id_override` replaces placeholder identifiers; `mapping` is
/// consulted for segments whose identifier is still unresolved.
pub fn parse_script(
    path: &Path,
    arxiv_id_override: Option<&str>,
    mapping: &IdMapping,
) -> Result<Vec<Segment>, ScriptError> {
    let content = std::fs::read_to_string(path).map_err(|source| ScriptError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let content = content.trim();

    if content.is_empty() {
        return Err(ScriptError::Empty(path.to_path_buf()));
    }

    let segments = match ScriptFormat::detect(content) {
        ScriptFormat::Json(items) => {
            info!("detected JSON script");
            parse_json_segments(&items, arxiv_id_override, mapping)?
        }
        ScriptFormat::Markdown(text) => {
            info!("detected markdown script");
            vec![parse_markdown_segment(path, text, arxiv_id_override, mapping)]
        }
    };

    if segments.is_empty() {
        return Err(ScriptError::NoSegments(path.to_path_buf()));
    }

    info!(count = segments.len(), "parsed podcast segments");
    Ok(segments)
}

/// Convert every element of a JSON array; any element that is neither an
/// object nor a string fails the whole script.
pub fn parse_json_segments(
    items: &[Value],
    arxiv_id_override: Option<&str>,
    mapping: &IdMapping,
) -> Result<Vec<Segment>, ScriptError> {
    items
        .iter()
        .enumerate()
        .map(|(index, item)| match item {
            Value::Object(fields) => Ok(object_segment(index, fields, arxiv_id_override, mapping)),
            Value::String(script) => Ok(text_segment(index, script, arxiv_id_override, mapping)),
            other => Err(ScriptError::UnsupportedElement {
                index,
                kind: json_kind(other),
            }),
        })
        .collect()
}

/// Build the single segment of a markdown script.
pub fn parse_markdown_segment(
    path: &Path,
    content: String,
    arxiv_id_override: Option<&str>,
    mapping: &IdMapping,
) -> Segment {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    let arxiv_id = match arxiv_id_override.filter(|id| !id.is_empty()) {
        Some(id) => id.to_string(),
        None => markdown_id(&file_name, mapping),
    };

    let title = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    Segment {
        title,
        script: content,
        arxiv_id,
        channel_id: String::new(),
    }
}

/// Extract a `YYYY-MM-DD HH-MM-SS` timestamp from a file name as
/// `YYYY-MM-DD-HH-MM-SS`.
pub fn timestamp_from_filename(file_name: &str) -> Option<String> {
    TIMESTAMP_RE
        .find(file_name)
        .map(|m| m.as_str().replace(' ', "-"))
}

fn markdown_id(file_name: &str, mapping: &IdMapping) -> String {
    if let Some(id) = mapping.get(&IdMapping::positional_key(0)) {
        info!(arxiv_id = id, "using id from mapping file");
        return id.to_string();
    }

    timestamp_from_filename(file_name)
        .unwrap_or_else(|| format!("podcast_{}", Utc::now().timestamp()))
}

fn object_segment(
    index: usize,
    fields: &Map<String, Value>,
    arxiv_id_override: Option<&str>,
    mapping: &IdMapping,
) -> Segment {
    let title = string_field(fields, "title")
        .map(str::to_string)
        .unwrap_or_else(|| format!("segment_{index}"));
    let script = string_field(fields, "script").unwrap_or_default().to_string();
    let channel_id = string_field(fields, "channel_id")
        .unwrap_or_default()
        .to_string();

    let mut arxiv_id = string_field(fields, "arxiv_id")
        .filter(|id| !id.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| placeholder_id(index, arxiv_id_override));

    if is_unresolved(&arxiv_id)
        && let Some(id) = mapping.resolve(Some(title.as_str()), index)
    {
        info!(title = %title, arxiv_id = id, "resolved id from mapping");
        arxiv_id = id.to_string();
    }

    if script.is_empty() {
        warn!(index, "segment script field is empty");
    }

    Segment {
        title,
        script,
        arxiv_id,
        channel_id,
    }
}

fn text_segment(
    index: usize,
    script: &str,
    arxiv_id_override: Option<&str>,
    mapping: &IdMapping,
) -> Segment {
    let arxiv_id = match mapping.resolve(None, index) {
        Some(id) => {
            info!(index, arxiv_id = id, "resolved id from mapping");
            id.to_string()
        }
        None => placeholder_id(index, arxiv_id_override),
    };

    Segment {
        title: format!("segment_{index}"),
        script: script.to_string(),
        arxiv_id,
        channel_id: String::new(),
    }
}

fn placeholder_id(index: usize, arxiv_id_override: Option<&str>) -> String {
    arxiv_id_override
        .filter(|id| !id.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| format!("unknown_{index}"))
}

fn is_unresolved(arxiv_id: &str) -> bool {
    UNRESOLVED_PREFIXES
        .iter()
        .any(|prefix| arxiv_id.starts_with(prefix))
}

fn string_field<'a>(fields: &'a Map<String, Value>, key: &str) -> Option<&'a str> {
    fields.get(key).and_then(Value::as_str)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
