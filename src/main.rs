use clap::Parser;
use std::io::IsTerminal;

use logrex::Cli;
use logrex_core::config::{Config, LoggingConfig};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    init_tracing(&config.logging, cli.debug);

    let stdin = std::io::stdin().lock();
    let mut stdout = std::io::stdout().lock();
    logrex::run(&cli, &config, stdin, &mut stdout)
}

fn init_tracing(logging: &LoggingConfig, debug: bool) {
    let fallback = if debug { "debug" } else { logging.level.as_str() };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(fallback)),
        )
        .init();
}
