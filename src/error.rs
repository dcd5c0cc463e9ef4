//! Error types for rttplot.
//!
//! This module provides a unified error handling approach using `thiserror`.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for rttplot operations.
pub type Result<T> = std::result::Result<T, RttPlotError>;

/// Errors that can occur in rttplot.
#[derive(Debug, Error)]
pub enum RttPlotError {
    /// Failed to open the sample log.
    #[error("Failed to open file: {path}")]
    FileOpen {
        /// Path that was requested.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// A non-blank line is not a `timestamp rtt` pair.
    #[error("Parse error on line {line} ({content:?}): {kind}")]
    Parse {
        /// 1-based line number.
        line: usize,
        /// The offending line, untrimmed.
        content: String,
        /// What was wrong with it.
        kind: ParseErrorKind,
    },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Reason a line failed to parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// The line split into this many tokens instead of two.
    TokenCount(usize),
    /// A token is not a floating-point number.
    InvalidNumber(String),
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TokenCount(n) => write!(f, "expected 2 fields, found {}", n),
            Self::InvalidNumber(token) => write!(f, "invalid number {:?}", token),
        }
    }
}

impl RttPlotError {
    /// Create a FileOpen error.
    pub fn file_open(path: PathBuf, source: std::io::Error) -> Self {
        Self::FileOpen { path, source }
    }

    /// Create a Parse error.
    pub fn parse(line: usize, content: impl Into<String>, kind: ParseErrorKind) -> Self {
        Self::Parse {
            line,
            content: content.into(),
            kind,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_error_names_line_and_reason() {
        let err = RttPlotError::parse(3, "abc 1.0", ParseErrorKind::InvalidNumber("abc".into()));
        let msg = err.to_string();
        assert!(msg.contains("line 3"));
        assert!(msg.contains("\"abc\""));
    }

    #[test]
    fn file_open_keeps_source() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = RttPlotError::file_open(PathBuf::from("./rtt.log"), io);
        assert_eq!(err.to_string(), "Failed to open file: ./rtt.log");
        assert!(std::error::Error::source(&err).is_some());
    }
}
