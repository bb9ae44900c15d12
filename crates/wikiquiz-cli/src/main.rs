#![allow(clippy::nursery)]
#![allow(clippy::pedantic)]

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod bootstrap;
mod cli;
mod commands;
mod context;
mod output;
mod progress;
mod ui;

use cli::{Cli, GlobalFlags};
use context::AppContext;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    if let Err(error) = run(cli).await {
        eprintln!("wikiquiz error: {error:#}");
        std::process::exit(1);
    }
}

async fn run(Cli { command, flags }: Cli) -> anyhow::Result<()> {
    init_tracing(&flags)?;
    ui::init(&flags);

    let config = bootstrap::load_config(&flags)?;
    let ctx = AppContext::init(config).context("failed to set up the quiz session")?;

    let result = command.run(&ctx, &flags).await;
    ctx.session.shutdown();
    result
}

/// Logs go to stderr; `WIKIQUIZ_LOG` takes precedence over `-q`/`-v`.
fn init_tracing(flags: &GlobalFlags) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_env("WIKIQUIZ_LOG")
        .unwrap_or_else(|_| EnvFilter::new(flags.log_level()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to install log subscriber: {error}"))
}
