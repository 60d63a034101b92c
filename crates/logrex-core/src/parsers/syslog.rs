use regex::Regex;
use std::sync::LazyLock;

use crate::error::ParseError;
use crate::parsers::LineParser;
use crate::tokenizer::split_bounded;
use crate::types::{LogFormat, LogRecord, SyslogRecord};

static HOSTNAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\S+").expect("hostname pattern is valid"));

static SERVICE_PID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\S+)\[\d+\]").expect("service pattern is valid"));

/// Parser for BSD-style `/var/log/messages` lines:
/// `Mon DD HH:MM:SS hostname service[pid]: message`.
///
/// Extraction is staged. The header split, the hostname match and the colon
/// split must each succeed before the next one runs.
pub struct SyslogParser;

impl SyslogParser {
    pub fn parse_record(&self, line: &str) -> Result<SyslogRecord, ParseError> {
        let header = split_bounded(line, ' ', 3);
        let [month, day, time, rest] = header.as_slice() else {
            return Err(ParseError::malformed(LogFormat::Syslog, "header too short", line));
        };

        let hostname = HOSTNAME.find(rest).map(|m| m.as_str()).ok_or_else(|| {
            ParseError::malformed(LogFormat::Syslog, "header missing hostname", line)
        })?;
        let rest = rest[hostname.len()..].trim_start();

        let tail = split_bounded(rest, ':', 1);
        let [marker, message] = tail.as_slice() else {
            return Err(ParseError::malformed(LogFormat::Syslog, "missing colon separator", line));
        };

        Ok(SyslogRecord {
            date: format!("{month} {day}"),
            time: time.to_string(),
            hostname: hostname.to_string(),
            service: service_name(marker.trim()).to_string(),
            message: message.trim().to_string(),
        })
    }
}

impl LineParser for SyslogParser {
    fn parse(&self, line: &str) -> Result<LogRecord, ParseError> {
        self.parse_record(line).map(LogRecord::from)
    }

    fn format(&self) -> LogFormat {
        LogFormat::Syslog
    }
}

/// `sshd[1234]` → `sshd`. A marker without a `[pid]` suffix is the service name.
fn service_name(marker: &str) -> &str {
    SERVICE_PID
        .captures(marker)
        .and_then(|caps| caps.get(1))
        .map_or(marker, |name| name.as_str())
}
