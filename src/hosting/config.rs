use crate::cards::Generator;
use crate::cards::Source;
use crate::cards::Stored;
use clap::Parser;
use std::path::PathBuf;

/// Command-line and environment configuration for the `dealer` binary.
#[derive(Debug, Clone, Parser)]
#[command(author, version, about = "Serve playing-card decks over HTTP", long_about = None)]
pub struct Config {
    /// Address to listen on.
    #[arg(long, env = "BIND_ADDR", default_value = crate::DEFAULT_BIND_ADDR)]
    pub bind: String,
    /// JSON file caching the default deck. Generated in memory when unset.
    #[arg(long, env = "DEFAULT_CARDS_FILE_STORAGE")]
    pub catalog: Option<PathBuf>,
    /// HTTP worker threads.
    #[arg(long, env = "WORKERS", default_value_t = crate::DEFAULT_WORKERS)]
    pub workers: usize,
}

impl Config {
    /// Where the catalog comes from. An empty path counts as unset.
    pub fn source(&self) -> Box<dyn Source + Send + Sync> {
        match self.catalog.as_ref().filter(|p| !p.as_os_str().is_empty()) {
            Some(path) => Box::new(Stored::new(path)),
            None => Box::new(Generator),
        }
    }
}
