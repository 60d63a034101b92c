//! logrex-core — structured record extraction for raw log lines.
//!
//! This crate turns one line of raw log text into a [`LogRecord`], or a typed
//! [`ParseError`] when the line does not have the shape its format requires.
//!
//! # Architecture
//!
//! ```text
//! tokenizer ──► parsers (access, syslog) ──► registry ──► batch
//!                                               │
//!                                               └──► analysis
//! ```
//!
//! Every parser is a pure, stateless unit struct, so the registry can be
//! queried from any number of threads without synchronisation.

pub mod analysis;
pub mod batch;
pub mod config;
pub mod error;
pub mod extract;
pub mod parsers;
pub mod registry;
pub mod tokenizer;
pub mod types;

pub use analysis::AccessStats;
pub use batch::{parse_lines, LineOutcome, ParseSummary};
pub use error::ParseError;
pub use parsers::{AccessLogParser, LineParser, SyslogParser};
pub use registry::{get_parser, parse, supported_formats};
pub use types::{AccessRecord, LogFormat, LogRecord, SyslogRecord};
