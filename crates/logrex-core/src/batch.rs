//! Batch driver — applies one resolved parser to a stream of lines.
//!
//! A malformed line yields an `Err` outcome for that line only; iteration
//! always continues with the next line. Output order matches input order.

use serde::Serialize;

use crate::error::ParseError;
use crate::parsers::LineParser;
use crate::types::LogRecord;

/// Result of parsing one line of a stream.
#[derive(Debug, Clone, PartialEq)]
pub struct LineOutcome {
    /// 1-based position of the line in the input.
    pub line_number: usize,
    pub result: Result<LogRecord, ParseError>,
}

/// Lazily parse `lines` with `parser`.
pub fn parse_lines<'p, I, S>(
    parser: &'p dyn LineParser,
    lines: I,
) -> impl Iterator<Item = LineOutcome> + 'p
where
    I: IntoIterator<Item = S> + 'p,
    I::IntoIter: 'p,
    S: AsRef<str> + 'p,
{
    lines.into_iter().enumerate().map(move |(index, line)| {
        let line_number = index + 1;
        let result = parser.parse(line.as_ref());
        if let Err(err) = &result {
            tracing::debug!(line_number, error = %err, "skipping unparseable line");
        }
        LineOutcome { line_number, result }
    })
}

/// Running counts over a parsed stream.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ParseSummary {
    pub parsed: usize,
    pub malformed: usize,
}

impl ParseSummary {
    pub fn record(&mut self, outcome: &LineOutcome) {
        match outcome.result {
            Ok(_) => self.parsed += 1,
            Err(_) => self.malformed += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.parsed + self.malformed
    }
}

impl<'a> FromIterator<&'a LineOutcome> for ParseSummary {
    fn from_iter<T: IntoIterator<Item = &'a LineOutcome>>(iter: T) -> Self {
        let mut summary = ParseSummary::default();
        for outcome in iter {
            summary.record(outcome);
        }
        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::LogFormat;
    use pretty_assertions::assert_eq;

    #[test]
    fn bad_lines_do_not_stop_the_stream() {
        let lines = [
            "Aug 30 18:08 a sshd[1]: one",
            "garbage",
            "Aug 30 18:09 b cron: two",
            "",
        ];
        let outcomes: Vec<_> = parse_lines(LogFormat::Syslog.parser(), lines).collect();

        assert_eq!(
            outcomes.iter().map(|o| o.line_number).collect::<Vec<_>>(),
            vec![1, 2, 3, 4]
        );
        assert!(outcomes[0].result.is_ok());
        assert!(outcomes[1].result.as_ref().unwrap_err().is_malformed());
        assert_eq!(
            outcomes[2].result.as_ref().unwrap().get("message"),
            Some("two")
        );

        let summary: ParseSummary = outcomes.iter().collect();
        assert_eq!(summary, ParseSummary { parsed: 2, malformed: 2 });
        assert_eq!(summary.total(), 4);
    }

    #[test]
    fn owned_lines_are_accepted() {
        let lines = vec![String::from("Aug 30 18:08 a sshd[1]: one")];
        let count = parse_lines(LogFormat::Syslog.parser(), lines)
            .filter(|o| o.result.is_ok())
            .count();
        assert_eq!(count, 1);
    }
}
