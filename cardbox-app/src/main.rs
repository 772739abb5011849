mod cli;

use anyhow::{Context, Result};
use cardbox_core::model::Deck;
use cardbox_core::storage::CardStorage;
use cardbox_json::JsonStore;
use clap::Parser;
use std::sync::Arc;
use tokio::runtime::Runtime;

use cli::opts::Cli;
use cli::shell;

fn main() -> Result<()> {
    env_logger::init();
    let args = Cli::parse();
    let rt = Runtime::new()?;
    rt.block_on(run(args))
}

async fn run(args: Cli) -> Result<()> {
    let store = match &args.data_file {
        Some(path) => {
            let backups = path.with_extension("backups");
            JsonStore::open_with(path.clone(), backups, args.max_backups)?
        }
        None => JsonStore::open_default()?,
    };
    // Data constraint violations from the stored file abort startup here.
    let cards = store
        .load_cards()
        .await
        .with_context(|| format!("loading cards from {}", store.path().display()))?;
    log::info!("loaded {} card(s) from {}", cards.len(), store.path().display());

    let deck = Deck::with_cards(cards);
    shell::run_shell(deck, Arc::new(store)).await
}
