//! Entry point for the `holdem-snapshot` tool.

use native_holdem::{cli, config};

use anyhow::Context;
use clap::Parser;
use config::Config;

/// Usage:
///   holdem-snapshot [--config PATH] [--debug] [--json] <show|check|redact|demo> ...
fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Logs go to stderr so JSON on stdout stays pipeable.
    let log_filter = if cli.debug {
        "debug".to_string()
    } else {
        "native_holdem=info,holdem_shared=info,warn".to_string()
    };

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_filter));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(cli.debug)
        .with_file(cli.debug)
        .with_line_number(cli.debug)
        .init();

    let cfg = Config::load_or_create(&cli.config)
        .with_context(|| format!("loading or creating config '{}'", cli.config.display()))?;
    tracing::debug!(config = %cli.config.display(), seats = cfg.seats, color = ?cfg.color);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    cli::run(&cli, &cfg, &mut out)
}
