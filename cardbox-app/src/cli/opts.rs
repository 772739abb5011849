use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser, Clone)]
#[command(name = "cardbox", version, about = "Cardbox flashcard shell")]
pub struct Cli {
    /// Store file path (defaults to the app data dir)
    #[arg(long)]
    pub data_file: Option<PathBuf>,

    /// How many timestamped backups to keep next to the store file
    #[arg(long, default_value_t = 10)]
    pub max_backups: usize,
}
