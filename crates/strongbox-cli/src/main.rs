//! Strongbox CLI entry point.

use clap::Parser;
use strongbox_cli::{run, Cli};
use strongbox_core::config::{Config, LogLevel};
use strongbox_core::env::{self, vars};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // A broken config file is reported by the command itself.
    let configured = Config::load_or_default(cli.config.as_deref())
        .map(|c| c.logging.level)
        .unwrap_or_default();

    let filter = env::get_var(vars::STRONGBOX_LOG)
        .and_then(|directive| EnvFilter::try_new(directive).ok())
        .or_else(|| EnvFilter::try_from_default_env().ok())
        .unwrap_or_else(|| EnvFilter::new(default_directive(cli.verbose, configured)));

    // Logs go to stderr so they never mix with revealed secrets on stdout.
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    run(cli)
}

fn default_directive(verbose: u8, configured: LogLevel) -> String {
    let level = match verbose {
        0 => configured.as_directive(),
        1 => "info",
        _ => "debug",
    };
    format!("strongbox_cli={level},strongbox_vault={level},strongbox_core={level}")
}
