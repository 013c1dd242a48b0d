//! In-memory playing-card deck service.
//!
//! Decks are built from a canonical 52-card catalog, optionally filtered to a
//! subset of card codes and shuffled, then held by a [`dealer::Dealer`] that
//! serves sequential draws until the deck runs dry.
//!
//! ## Modules
//!
//! - [`cards`]: Card, rank, suit, and the catalog with its providers
//! - [`deck`]: Deck records, construction from a [`deck::Recipe`], and drawing
//! - [`dealer`]: Lock-guarded store of live decks
//! - [`error`]: The [`error::DeckError`] surfaced by every fallible operation
//! - [`dto`]: Wire-format request and response types
//! - `hosting`: actix-web routes (feature `server`)

pub mod cards;
pub mod dealer;
pub mod deck;
pub mod dto;
pub mod error;
#[cfg(feature = "server")]
pub mod hosting;

// ============================================================================
// TRAITS
// ============================================================================
/// Unique identifier trait for domain entities.
pub trait Unique<T = Self> {
    fn id(&self) -> ID<T>;
}

// ============================================================================
// IDENTITY TYPES
// ============================================================================
use std::cmp::Ordering;
use std::fmt::Debug;
use std::fmt::Display;
use std::fmt::Formatter;
use std::hash::Hash;
use std::hash::Hasher;
use std::marker::PhantomData;
use std::str::FromStr;

/// Generic ID wrapper providing compile-time type safety over uuid::Uuid.
pub struct ID<T> {
    inner: uuid::Uuid,
    marker: PhantomData<T>,
}

impl<T> ID<T> {
    pub fn inner(&self) -> uuid::Uuid {
        self.inner
    }
}

impl<T> From<ID<T>> for uuid::Uuid {
    fn from(id: ID<T>) -> Self {
        id.inner()
    }
}
impl<T> From<uuid::Uuid> for ID<T> {
    fn from(inner: uuid::Uuid) -> Self {
        Self {
            inner,
            marker: PhantomData,
        }
    }
}

/// str parsing
/// accepts any of the textual forms uuid understands (hyphenated, simple, urn, braced)
impl<T> FromStr for ID<T> {
    type Err = uuid::Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        uuid::Uuid::parse_str(s).map(Self::from)
    }
}

impl<T> Default for ID<T> {
    fn default() -> Self {
        Self {
            inner: uuid::Uuid::now_v7(),
            marker: PhantomData,
        }
    }
}

impl<T> Copy for ID<T> {}
impl<T> Clone for ID<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Eq for ID<T> {}
impl<T> PartialEq for ID<T> {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl<T> Ord for ID<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.inner.cmp(&other.inner)
    }
}
impl<T> PartialOrd for ID<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Hash for ID<T> {
    fn hash<H>(&self, state: &mut H)
    where
        H: Hasher,
    {
        self.inner.hash(state);
    }
}

impl<T> Debug for ID<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("ID").field(&self.inner).finish()
    }
}
impl<T> Display for ID<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.inner, f)
    }
}

// ============================================================================
// DECK PARAMETERS
// ============================================================================
/// Number of suits in the catalog.
pub const N_SUITS: usize = 4;
/// Number of ranks per suit.
pub const N_RANKS: usize = 13;
/// Size of the canonical catalog.
pub const N_CARDS: usize = N_SUITS * N_RANKS;

// ============================================================================
// SERVICE DEFAULTS
// ============================================================================
/// Listen address when neither `--bind` nor `BIND_ADDR` is given.
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";
/// actix worker threads when neither `--workers` nor `WORKERS` is given.
pub const DEFAULT_WORKERS: usize = 4;
/// Largest request body a deck route will read.
pub const MAX_PAYLOAD_BYTES: usize = 1 << 20;
/// Directory receiving timestamped log files.
pub const LOG_DIRECTORY: &str = "logs";

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates the log directory and writes DEBUG level to file, INFO to terminal.
#[cfg(feature = "server")]
pub fn log() -> anyhow::Result<()> {
    use anyhow::Context;
    std::fs::create_dir_all(LOG_DIRECTORY).context("create logs directory")?;
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .context("time moves slow")?
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("{}/{}.log", LOG_DIRECTORY, time))
            .context("create log file")?,
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).context("initialize logger")
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Marker;

    #[test]
    fn parse_display_roundtrip() {
        let id = ID::<Marker>::default();
        let parsed = id.to_string().parse::<ID<Marker>>().unwrap();
        assert!(id == parsed);
    }

    #[test]
    fn reject_malformed() {
        assert!("invalidID".parse::<ID<Marker>>().is_err());
        assert!("".parse::<ID<Marker>>().is_err());
    }

    #[test]
    fn fresh_ids_differ() {
        assert!(ID::<Marker>::default() != ID::<Marker>::default());
    }
}
