//! Error types for the parsing layer.

use crate::types::LogFormat;
use thiserror::Error;

/// Failure to resolve a parser or to turn a line into a record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The registry was asked for a format it does not know.
    #[error("unknown log format: {0:?}")]
    UnknownFormat(String),

    /// The line does not satisfy a structural precondition of its format.
    /// The raw line is kept so callers can log or quarantine it.
    #[error("malformed {format} line ({reason}): {line:?}")]
    MalformedLine {
        format: LogFormat,
        reason: &'static str,
        line: String,
    },
}

impl ParseError {
    pub(crate) fn malformed(format: LogFormat, reason: &'static str, line: &str) -> Self {
        ParseError::MalformedLine {
            format,
            reason,
            line: line.to_string(),
        }
    }

    /// True for per-line failures a stream consumer can skip past.
    pub fn is_malformed(&self) -> bool {
        matches!(self, ParseError::MalformedLine { .. })
    }

    /// The offending raw line, when the error is line-specific.
    pub fn line(&self) -> Option<&str> {
        match self {
            ParseError::MalformedLine { line, .. } => Some(line),
            ParseError::UnknownFormat(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_display_names_format_and_reason() {
        let err = ParseError::malformed(LogFormat::Syslog, "missing colon separator", "a b c d");
        assert_eq!(
            err.to_string(),
            r#"malformed syslog line (missing colon separator): "a b c d""#
        );
        assert!(err.is_malformed());
        assert_eq!(err.line(), Some("a b c d"));
    }

    #[test]
    fn unknown_format_has_no_line() {
        let err = ParseError::UnknownFormat("nginx".into());
        assert!(!err.is_malformed());
        assert_eq!(err.line(), None);
        assert_eq!(err.to_string(), r#"unknown log format: "nginx""#);
    }
}
