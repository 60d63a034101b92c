//! logrex — structured record extraction for access and syslog lines.
//!
//! The binary is a thin shell over [`logrex_core`]: it reads lines from a
//! file or stdin, hands them to a resolved parser and writes JSON to stdout.
//! Diagnostics go through `tracing` to stderr so stdout stays machine-readable.
//!
//! # Commands
//!
//! ```text
//! logrex parse [--format access|syslog] [--strict] [--pretty] [FILE]
//! logrex ips   [--valid-only] [FILE]
//! logrex stats [--top N] [FILE]
//! ```

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use logrex_core::config::Config;
use logrex_core::extract::{ipv4_addresses, ipv4_candidates};
use logrex_core::{parse_lines, AccessLogParser, AccessStats, LogFormat, ParseSummary};

#[derive(Debug, Parser)]
#[command(name = "logrex", about = "Extract structured records from access and syslog lines")]
pub struct Cli {
    /// Read configuration from this file instead of ~/.config/logrex/config.toml.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Force debug-level logging on stderr (RUST_LOG still wins).
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Parse each line into a JSON record.
    Parse(ParseArgs),
    /// Print every IPv4 address found in the input.
    Ips(IpsArgs),
    /// Summarise an access log by status code and client.
    Stats(StatsArgs),
}

#[derive(Debug, Args)]
pub struct ParseArgs {
    /// Log format; defaults to `parse.default_format` from the config.
    #[arg(long, short)]
    pub format: Option<LogFormat>,

    /// Stop at the first malformed line.
    #[arg(long)]
    pub strict: bool,

    /// Pretty-print each record.
    #[arg(long)]
    pub pretty: bool,

    /// Input file; `-` or absent reads stdin.
    pub file: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct IpsArgs {
    /// Only print candidates whose octets are all in range.
    #[arg(long)]
    pub valid_only: bool,

    pub file: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct StatsArgs {
    /// Number of busiest clients to list.
    #[arg(long, default_value_t = 10)]
    pub top: usize,

    pub file: Option<PathBuf>,
}

/// Run a parsed command line. `stdin` is used when no file is named.
pub fn run<R: BufRead, W: Write>(
    cli: &Cli,
    config: &Config,
    stdin: R,
    out: &mut W,
) -> anyhow::Result<()> {
    match &cli.command {
        Command::Parse(args) => {
            let input = open_input(args.file.as_deref(), stdin)?;
            let summary = run_parse(args, config, input, out)?;
            tracing::info!(
                parsed = summary.parsed,
                malformed = summary.malformed,
                "parse finished"
            );
        }
        Command::Ips(args) => {
            let input = open_input(args.file.as_deref(), stdin)?;
            run_ips(args, input, out)?;
        }
        Command::Stats(args) => {
            let input = open_input(args.file.as_deref(), stdin)?;
            run_stats(args, input, out)?;
        }
    }
    out.flush()?;
    Ok(())
}

fn run_parse<W: Write>(
    args: &ParseArgs,
    config: &Config,
    input: impl BufRead,
    out: &mut W,
) -> anyhow::Result<ParseSummary> {
    let format = args.format.unwrap_or(config.parse.default_format);
    let strict = args.strict || config.parse.strict;
    let pretty = args.pretty || config.output.pretty;
    tracing::debug!(%format, strict, pretty, "parsing input");

    let mut summary = ParseSummary::default();
    for outcome in parse_lines(format.parser(), LossyLines::new(input)) {
        summary.record(&outcome);
        match outcome.result {
            Ok(record) => {
                if pretty {
                    serde_json::to_writer_pretty(&mut *out, &record)?;
                } else {
                    serde_json::to_writer(&mut *out, &record)?;
                }
                writeln!(out)?;
            }
            Err(err) if strict => {
                return Err(err).with_context(|| format!("line {}", outcome.line_number));
            }
            Err(err) => {
                tracing::warn!(line_number = outcome.line_number, error = %err, "skipping malformed line");
            }
        }
    }
    Ok(summary)
}

fn run_ips<W: Write>(args: &IpsArgs, input: impl BufRead, out: &mut W) -> anyhow::Result<()> {
    for line in LossyLines::new(input) {
        if args.valid_only {
            for addr in ipv4_addresses(&line) {
                writeln!(out, "{addr}")?;
            }
        } else {
            for candidate in ipv4_candidates(&line) {
                writeln!(out, "{candidate}")?;
            }
        }
    }
    Ok(())
}

#[derive(Serialize)]
struct StatsReport<'a> {
    #[serde(flatten)]
    stats: &'a AccessStats,
    server_errors: u64,
    top_clients: Vec<TopClient<'a>>,
    malformed: usize,
}

#[derive(Serialize)]
struct TopClient<'a> {
    client_ip: &'a str,
    requests: u64,
}

fn run_stats<W: Write>(args: &StatsArgs, input: impl BufRead, out: &mut W) -> anyhow::Result<()> {
    let mut stats = AccessStats::new();
    let mut malformed = 0;
    for (index, line) in LossyLines::new(input).enumerate() {
        match AccessLogParser.parse_record(&line) {
            Ok(record) => stats.add(&record),
            Err(err) => {
                malformed += 1;
                tracing::warn!(line_number = index + 1, error = %err, "skipping malformed line");
            }
        }
    }

    let report = StatsReport {
        stats: &stats,
        server_errors: stats.server_errors(),
        top_clients: stats
            .top_clients(args.top)
            .into_iter()
            .map(|(client_ip, requests)| TopClient { client_ip, requests })
            .collect(),
        malformed,
    };
    serde_json::to_writer_pretty(&mut *out, &report)?;
    writeln!(out)?;
    Ok(())
}

fn open_input<'a, R: BufRead + 'a>(
    path: Option<&Path>,
    stdin: R,
) -> anyhow::Result<Box<dyn BufRead + 'a>> {
    match path {
        Some(path) if path != Path::new("-") => {
            let file = std::fs::File::open(path)
                .with_context(|| format!("opening {}", path.display()))?;
            Ok(Box::new(BufReader::new(file)))
        }
        _ => Ok(Box::new(stdin)),
    }
}

/// Line iterator that decodes each line as lossy UTF-8 and strips the
/// trailing `\n` / `\r\n`. Stops at end of input or on a read error.
pub struct LossyLines<R> {
    reader: R,
    buf: Vec<u8>,
}

impl<R: BufRead> LossyLines<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: Vec::new(),
        }
    }
}

impl<R: BufRead> Iterator for LossyLines<R> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        self.buf.clear();
        match self.reader.read_until(b'\n', &mut self.buf) {
            Ok(0) => None,
            Ok(_) => {
                if self.buf.ends_with(b"\n") {
                    self.buf.pop();
                    if self.buf.ends_with(b"\r") {
                        self.buf.pop();
                    }
                }
                Some(String::from_utf8_lossy(&self.buf).into_owned())
            }
            Err(err) => {
                tracing::error!(error = %err, "read failed; stopping");
                None
            }
        }
    }
}
