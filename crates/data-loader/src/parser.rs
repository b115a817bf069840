//! Parser for candidate export files.
//!
//! Two layouts are accepted:
//! - `.json`: a single array of candidate rows (the backend's table export)
//! - `.jsonl`: one candidate row per line (the batch scripts' dump format)
//!
//! Blank lines in JSON Lines files are skipped. Parse failures carry the
//! file name and line number.

use crate::error::{DataLoadError, Result};
use crate::types::Candidate;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Supported on-disk layouts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    JsonArray,
    JsonLines,
}

impl FileFormat {
    /// Pick the layout from the file extension
    pub fn from_path(path: &Path) -> Result<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(FileFormat::JsonArray),
            Some("jsonl") | Some("ndjson") => Ok(FileFormat::JsonLines),
            _ => Err(DataLoadError::UnsupportedFormat {
                path: path.display().to_string(),
            }),
        }
    }
}

fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => DataLoadError::FileNotFound {
            path: path.display().to_string(),
        },
        _ => DataLoadError::IoError(e),
    })
}

fn file_label(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Parse a candidate file, dispatching on its extension
pub fn parse_candidates(path: &Path) -> Result<Vec<Candidate>> {
    let format = FileFormat::from_path(path)?;
    let content = read_file(path)?;
    let file = file_label(path);

    match format {
        FileFormat::JsonArray => parse_json_array(&file, &content),
        FileFormat::JsonLines => parse_json_lines(&file, &content),
    }
}

/// Parse a JSON array of candidate rows
pub fn parse_json_array(file: &str, content: &str) -> Result<Vec<Candidate>> {
    serde_json::from_str(content).map_err(|e| DataLoadError::ParseError {
        file: file.to_string(),
        line: e.line(),
        reason: e.to_string(),
    })
}

/// Parse newline-delimited candidate rows
pub fn parse_json_lines(file: &str, content: &str) -> Result<Vec<Candidate>> {
    let mut candidates = Vec::new();

    for (idx, line) in content.lines().enumerate() {
        let line_no = idx + 1;
        let line_trimmed = line.trim();
        if line_trimmed.is_empty() {
            continue;
        }

        let candidate: Candidate =
            serde_json::from_str(line_trimmed).map_err(|e| DataLoadError::ParseError {
                file: file.to_string(),
                line: line_no,
                reason: e.to_string(),
            })?;
        candidates.push(candidate);
    }

    Ok(candidates)
}
