//! Deck Server Binary
//!
//! Serves deck creation, lookup, and drawing over HTTP.
//! Exits early if the default deck cannot be loaded.

use clap::Parser;
use deckhand::hosting::Config;
use deckhand::hosting::Server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    deckhand::log()?;
    Server::run(Config::parse())
        .await
        .inspect_err(|e| log::error!("{:#}", e))
}
