// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier
// Modifications (c) 2026 Peter Carlton

use std::{error, fmt, io};

#[derive(Debug)]
pub enum SnpError {
    Io(io::Error),
    Format(String),
    Json(serde_json::Error),
    Csv(csv::Error),
    /// A marker list line did not have two or three comma-separated fields.
    FieldCount { found: usize, line: String },
    /// The pair of bases has no IUPAC ambiguity code.
    UnknownBasePair(char, char),
    /// Raised only in strict mode, where a malformed marker is not tolerated.
    Truncated { gene: String, offset: usize },
    /// Wraps an error with the (1-based) line of the marker list it came from.
    Line { line: usize, source: Box<SnpError> },
}

// These allow conversion to SnpError, required for main() to return Result<()> and for '?' to
// work.

impl From<io::Error> for SnpError {
    fn from(e: io::Error) -> Self {
        SnpError::Io(e)
    }
}

impl From<serde_json::Error> for SnpError {
    fn from(e: serde_json::Error) -> Self {
        SnpError::Json(e)
    }
}

impl From<csv::Error> for SnpError {
    fn from(e: csv::Error) -> Self {
        SnpError::Csv(e)
    }
}

impl From<String> for SnpError {
    fn from(s: String) -> Self {
        SnpError::Format(s)
    }
}

impl fmt::Display for SnpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SnpError::Io(e) => write!(f, "I/O error: {}", e),
            SnpError::Format(msg) => write!(f, "Format error: {}", msg),
            SnpError::Json(e) => write!(f, "JSON error: {}", e),
            SnpError::Csv(e) => write!(f, "CSV error: {}", e),
            SnpError::FieldCount { found, line } => write!(
                f,
                "Need two or three fields to parse, and got {} in {}",
                found, line
            ),
            SnpError::UnknownBasePair(b1, b2) => {
                write!(f, "No ambiguity code for base pair {}/{}", b1, b2)
            }
            SnpError::Truncated { gene, offset } => {
                write!(f, "Malformed marker in {} at offset {}", gene, offset)
            }
            SnpError::Line { line, source } => write!(f, "line {}: {}", line, source),
        }
    }
}

impl error::Error for SnpError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            SnpError::Io(e) => Some(e),
            SnpError::Json(e) => Some(e),
            SnpError::Csv(e) => Some(e),
            SnpError::Line { source, .. } => Some(source.as_ref()),
            _ => None,
        }
    }
}
