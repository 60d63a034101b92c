//! Parser registry — resolves a format name to its parser.
//!
//! The registry holds no per-call state; lookups return `'static` references
//! to stateless parsers and can run concurrently.

use crate::error::ParseError;
use crate::parsers::{AccessLogParser, LineParser, SyslogParser};
use crate::types::{LogFormat, LogRecord};

static ACCESS: AccessLogParser = AccessLogParser;
static SYSLOG: SyslogParser = SyslogParser;

impl LogFormat {
    /// The parser for this format.
    pub fn parser(self) -> &'static dyn LineParser {
        match self {
            LogFormat::Access => &ACCESS,
            LogFormat::Syslog => &SYSLOG,
        }
    }
}

/// Resolve `format_name` to a parser, for callers parsing many lines.
pub fn get_parser(format_name: &str) -> Result<&'static dyn LineParser, ParseError> {
    let format: LogFormat = format_name.parse()?;
    tracing::trace!(%format, "resolved parser");
    Ok(format.parser())
}

/// Resolve the parser and parse a single line.
pub fn parse(format_name: &str, line: &str) -> Result<LogRecord, ParseError> {
    get_parser(format_name)?.parse(line)
}

/// Names accepted by [`get_parser`].
pub fn supported_formats() -> [&'static str; 2] {
    LogFormat::ALL.map(|format| format.as_str())
}
