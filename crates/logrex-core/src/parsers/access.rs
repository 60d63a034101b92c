use crate::error::ParseError;
use crate::parsers::LineParser;
use crate::tokenizer::split_fields;
use crate::types::{AccessRecord, LogFormat, LogRecord};

/// Fewest space-separated tokens a combined access line can have.
const MIN_TOKENS: usize = 12;

/// Parser for nginx combined access logs.
///
/// Works on fixed token positions of
/// `IP - - [timestamp] "METHOD PATH PROTOCOL" status size "referer" "user_agent" "-"`,
/// so a request path containing a space shifts every later field.
pub struct AccessLogParser;

impl AccessLogParser {
    /// Extract the typed record without erasing it into a [`LogRecord`].
    pub fn parse_record(&self, line: &str) -> Result<AccessRecord, ParseError> {
        let tokens = split_fields(line);
        if tokens.len() < MIN_TOKENS {
            return Err(ParseError::malformed(
                LogFormat::Access,
                "fewer than 12 fields",
                line,
            ));
        }

        let user_agent = strip_outer_chars(tokens[11]).ok_or_else(|| {
            ParseError::malformed(LogFormat::Access, "user agent field too short", line)
        })?;

        let date = tokens[3].strip_prefix('[').unwrap_or(tokens[3]);
        let zone = tokens[4].strip_suffix(']').unwrap_or(tokens[4]);

        Ok(AccessRecord {
            client_ip: tokens[0].to_string(),
            timestamp: format!("{date} {zone}"),
            request_line: unquote(&tokens[5..8].join(" ")).to_string(),
            status_code: tokens[8].to_string(),
            response_size: tokens[9].to_string(),
            referer: tokens[10].to_string(),
            user_agent: user_agent.to_string(),
        })
    }
}

impl LineParser for AccessLogParser {
    fn parse(&self, line: &str) -> Result<LogRecord, ParseError> {
        self.parse_record(line).map(LogRecord::from)
    }

    fn format(&self) -> LogFormat {
        LogFormat::Access
    }
}

/// Drop the first and last character, or `None` when there are fewer than two.
fn strip_outer_chars(token: &str) -> Option<&str> {
    let mut chars = token.chars();
    chars.next()?;
    chars.next_back()?;
    Some(chars.as_str())
}

/// Remove one leading and one trailing double quote, each only if present.
fn unquote(span: &str) -> &str {
    let span = span.strip_prefix('"').unwrap_or(span);
    span.strip_suffix('"').unwrap_or(span)
}
