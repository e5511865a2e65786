use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use routes::cli::{self, Cli};
use routes::Config;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::resolve(cli.db);
    cli::run(&config, cli.command)
}
