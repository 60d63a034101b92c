//! Parser throughput benchmarks.
//!
//! Every line of an input stream goes through one of these parsers, so
//! regressions here scale with log volume.
//!
//! # Groups
//!
//! | Group | What it measures |
//! |-------|-----------------|
//! | `access` | Positional tokenizing of a combined access line |
//! | `syslog` | Staged header/regex extraction of a messages line |
//! | `stream` | 1 000 mixed good/bad lines through `parse_lines` |
//!
//! # Viewing results
//!
//! ```sh
//! cargo bench --bench parse_bench
//! open target/criterion/report/index.html
//! ```

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use logrex_core::{parse_lines, LogFormat, ParseSummary};
use std::hint::black_box;

const ACCESS: &str = r#"192.168.40.80 - - [30/Aug/2030:11:27:18 +0800] "GET / HTTP/1.1" 200 3429 "-" "curl/7.61.1" "-""#;
const SYSLOG: &str =
    "Aug 30 18:08 myhost sshd[1234]: Accepted password for user from 192.168.1.2 port 22 ssh2";

// ---------------------------------------------------------------------------
// Single lines
// ---------------------------------------------------------------------------

fn access_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("access");
    let parser = LogFormat::Access.parser();
    group.throughput(Throughput::Elements(1));

    group.bench_with_input(BenchmarkId::new("combined", ""), &ACCESS, |b, line| {
        b.iter(|| parser.parse(black_box(line)))
    });
    group.bench_with_input(BenchmarkId::new("too_short", ""), &"a b c d e", |b, line| {
        b.iter(|| parser.parse(black_box(line)))
    });

    group.finish();
}

fn syslog_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("syslog");
    let parser = LogFormat::Syslog.parser();
    group.throughput(Throughput::Elements(1));

    group.bench_with_input(BenchmarkId::new("with_pid", ""), &SYSLOG, |b, line| {
        b.iter(|| parser.parse(black_box(line)))
    });
    group.bench_with_input(
        BenchmarkId::new("without_pid", ""),
        &"Jan 15 10:00:02 web01 kernel: Out of memory",
        |b, line| b.iter(|| parser.parse(black_box(line))),
    );

    group.finish();
}

// ---------------------------------------------------------------------------
// Stream
// ---------------------------------------------------------------------------

fn stream_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("stream");

    // Nine good lines to one malformed one.
    let lines: Vec<&str> = (0..1_000usize)
        .map(|i| if i % 10 == 0 { "garbage" } else { SYSLOG })
        .collect();
    group.throughput(Throughput::Elements(lines.len() as u64));

    group.bench_function("1000_lines", |b| {
        b.iter(|| {
            let summary: ParseSummary =
                parse_lines(LogFormat::Syslog.parser(), lines.iter().copied())
                    .collect::<Vec<_>>()
                    .iter()
                    .collect();
            black_box(summary)
        })
    });

    group.finish();
}

// ---------------------------------------------------------------------------
// Criterion registration
// ---------------------------------------------------------------------------

criterion_group!(parse_benches, access_bench, syslog_bench, stream_bench);
criterion_main!(parse_benches);
