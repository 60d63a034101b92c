//! Domain-specific assertion helpers for logrex harnesses.
//!
//! These wrap `pretty_assertions` and add failure messages that name the
//! line that broke the expectation.

use logrex_core::{LogFormat, LogRecord, ParseError};
use pretty_assertions::assert_eq;

/// Assert `record` has exactly `expected` fields, in that order.
pub fn assert_field_names(record: &LogRecord, expected: &[&str]) {
    assert_eq!(
        record.field_names(),
        expected.to_vec(),
        "unexpected field layout for {:?} record",
        record.format()
    );
}

/// Assert `result` is a `MalformedLine` for `format` that carries `line`.
pub fn assert_malformed(result: Result<LogRecord, ParseError>, format: LogFormat, line: &str) {
    match result {
        Err(ParseError::MalformedLine { format: got, line: raw, .. }) => {
            assert_eq!(got, format, "wrong format on error for {line:?}");
            assert_eq!(raw, line, "error does not carry the raw line");
        }
        other => panic!("expected MalformedLine for {line:?}, got {other:?}"),
    }
}
