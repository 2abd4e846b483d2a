//! Game server binary
//!
//! Serves new games and moves over HTTP, keeping every game in memory.

use anyhow::Context;
use clap::Parser;
use sapper_server::*;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.verbose.log_level_filter())
        .parse_default_env()
        .init();

    let defaults = cli.game_config().context("invalid default board")?;
    let registry = Registry::new(defaults, cli.start_policy());

    Server::new(registry, cli.host, cli.port, cli.workers)
        .run()
        .await
        .context("game server stopped")
}
