//! Batch processing of paragraphs
//!
//! Paragraph files hold one paragraph per line. Every paragraph is validated on
//! its own and the outcomes come back as plain text, one message per line:
//!
//! ```rust,ignore
//! use tag_checker::checker::processor::process_file;
//!
//! print!("{}", process_file("paragraphs.txt")?);
//! ```

use crate::checker::validator::validate;
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;
use tracing::debug;

/// Errors that can occur while reading a paragraph file
#[derive(Debug, Clone, PartialEq)]
pub enum ProcessingError {
    FileNotFound(String),
    IoError(String),
}

impl std::error::Error for ProcessingError {}

impl fmt::Display for ProcessingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessingError::FileNotFound(path) => write!(f, "File not found: {}", path),
            ProcessingError::IoError(msg) => write!(f, "IO error: {}", msg),
        }
    }
}

/// Splits a paragraph file into paragraphs, one per non-blank line
pub fn read_paragraphs(source: &str) -> Vec<&str> {
    source
        .lines()
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .filter(|line| !line.trim().is_empty())
        .collect()
}

/// Validates each paragraph in order, one outcome line per paragraph
pub fn process_paragraphs<S: AsRef<str>>(paragraphs: &[S]) -> String {
    let mut output = String::new();
    let mut failures = 0;

    for paragraph in paragraphs {
        let verdict = validate(paragraph.as_ref());
        if !verdict.is_correct() {
            failures += 1;
        }
        output.push_str(&verdict.to_string());
        output.push('\n');
    }

    debug!(paragraphs = paragraphs.len(), failures, "paragraphs processed");
    output
}

/// Reads a paragraph file and processes every paragraph in it
pub fn process_file<P: AsRef<Path>>(file_path: P) -> Result<String, ProcessingError> {
    let path = file_path.as_ref();
    let source = fs::read_to_string(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => ProcessingError::FileNotFound(path.display().to_string()),
        _ => ProcessingError::IoError(e.to_string()),
    })?;
    debug!(path = %path.display(), bytes = source.len(), "paragraph file read");

    Ok(process_paragraphs(&read_paragraphs(&source)))
}
