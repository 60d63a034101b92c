//! Core types for logrex-core.
//!
//! This module defines the record shapes produced by the parsers: the
//! format-agnostic [`LogRecord`], the typed [`AccessRecord`] and
//! [`SyslogRecord`], and the [`LogFormat`] discriminant.

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use std::str::FromStr;

use crate::error::ParseError;

/// Timestamp layout used by nginx's `$time_local`.
const ACCESS_TIMESTAMP_FORMAT: &str = "%d/%b/%Y:%H:%M:%S %z";

/// The log formats the registry knows how to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    /// nginx / Apache combined access log.
    Access,
    /// BSD-style `/var/log/messages` line.
    Syslog,
}

impl LogFormat {
    pub const ALL: [LogFormat; 2] = [LogFormat::Access, LogFormat::Syslog];

    pub fn as_str(&self) -> &'static str {
        match self {
            LogFormat::Access => "access",
            LogFormat::Syslog => "syslog",
        }
    }
}

impl std::fmt::Display for LogFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogFormat {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "access" => Ok(LogFormat::Access),
            "syslog" => Ok(LogFormat::Syslog),
            other => Err(ParseError::UnknownFormat(other.to_string())),
        }
    }
}

/// A structured record extracted from one log line.
///
/// Field order is fixed by the format and preserved when iterating or
/// serialising. Records are built once by a parser and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    format: LogFormat,
    fields: Vec<(&'static str, String)>,
}

impl LogRecord {
    fn new(format: LogFormat, fields: Vec<(&'static str, String)>) -> Self {
        Self { format, fields }
    }

    pub fn format(&self) -> LogFormat {
        self.format
    }

    /// Value of the named field, if the record has one.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Fields in extraction order.
    pub fn fields(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        self.fields.iter().map(|(key, value)| (*key, value.as_str()))
    }

    pub fn field_names(&self) -> Vec<&'static str> {
        self.fields.iter().map(|(key, _)| *key).collect()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl Serialize for LogRecord {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (key, value) in &self.fields {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// One parsed access-log line. Status and size stay as the raw strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccessRecord {
    pub client_ip: String,
    pub timestamp: String,
    pub request_line: String,
    pub status_code: String,
    pub response_size: String,
    pub referer: String,
    pub user_agent: String,
}

impl AccessRecord {
    pub const FIELDS: [&'static str; 7] = [
        "client_ip",
        "timestamp",
        "request_line",
        "status_code",
        "response_size",
        "referer",
        "user_agent",
    ];

    /// The timestamp as a zoned datetime, when it has the
    /// `30/Aug/2030:11:27:18 +0800` shape.
    pub fn parsed_timestamp(&self) -> Option<chrono::DateTime<chrono::FixedOffset>> {
        chrono::DateTime::parse_from_str(&self.timestamp, ACCESS_TIMESTAMP_FORMAT).ok()
    }
}

impl From<AccessRecord> for LogRecord {
    fn from(record: AccessRecord) -> Self {
        let [client_ip, timestamp, request_line, status_code, response_size, referer, user_agent] =
            AccessRecord::FIELDS;
        LogRecord::new(
            LogFormat::Access,
            vec![
                (client_ip, record.client_ip),
                (timestamp, record.timestamp),
                (request_line, record.request_line),
                (status_code, record.status_code),
                (response_size, record.response_size),
                (referer, record.referer),
                (user_agent, record.user_agent),
            ],
        )
    }
}

/// One parsed syslog line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SyslogRecord {
    pub date: String,
    pub time: String,
    pub hostname: String,
    pub service: String,
    pub message: String,
}

impl SyslogRecord {
    pub const FIELDS: [&'static str; 5] = ["date", "time", "hostname", "service", "message"];
}

impl From<SyslogRecord> for LogRecord {
    fn from(record: SyslogRecord) -> Self {
        let [date, time, hostname, service, message] = SyslogRecord::FIELDS;
        LogRecord::new(
            LogFormat::Syslog,
            vec![
                (date, record.date),
                (time, record.time),
                (hostname, record.hostname),
                (service, record.service),
                (message, record.message),
            ],
        )
    }
}
