//! Per-format line parsers.
//!
//! Each parser is a stateless unit struct implementing [`LineParser`]; the
//! registry hands out `'static` references to them.

pub mod access;
pub mod syslog;

pub use access::AccessLogParser;
pub use syslog::SyslogParser;

use crate::error::ParseError;
use crate::types::{LogFormat, LogRecord};

pub trait LineParser: Send + Sync {
    /// Parse one raw line into a structured record.
    fn parse(&self, line: &str) -> Result<LogRecord, ParseError>;
    fn format(&self) -> LogFormat;
}
