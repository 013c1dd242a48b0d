use super::card::Card;
use super::rank::Rank;
use super::suit::Suit;
use crate::error::DeckError;
use std::collections::HashSet;
use std::path::PathBuf;

/// The canonical ordered reference set every deck is cut from.
///
/// A catalog is never empty and never holds two cards with the same code.
/// Order is meaningful: filtered decks keep catalog order, and an unshuffled
/// full deck *is* the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog(Vec<Card>);

impl Catalog {
    /// The standard 52 cards, suit-major in SPADES, DIAMONDS, CLUBS, HEARTS
    /// order, ranks A through K within each suit.
    pub fn generate() -> Self {
        Self(
            Suit::all()
                .into_iter()
                .flat_map(|s| Rank::all().into_iter().map(move |r| Card::from((r, s))))
                .collect(),
        )
    }
    pub fn cards(&self) -> &[Card] {
        &self.0
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    /// Cards whose code is among `codes`, in catalog order.
    /// Matching is exact and case-sensitive; codes absent from the catalog
    /// are ignored.
    pub fn select<S>(&self, codes: &[S]) -> Vec<Card>
    where
        S: AsRef<str>,
    {
        let ref wanted = codes.iter().map(AsRef::as_ref).collect::<HashSet<&str>>();
        self.0
            .iter()
            .filter(|card| wanted.contains(card.code().as_str()))
            .copied()
            .collect()
    }
}

impl TryFrom<Vec<Card>> for Catalog {
    type Error = DeckError;
    fn try_from(cards: Vec<Card>) -> Result<Self, Self::Error> {
        let unique = cards.iter().collect::<HashSet<_>>().len();
        match (cards.len(), unique) {
            (0, _) => Err(DeckError::CatalogUnavailable("catalog is empty".into())),
            (n, u) if n != u => Err(DeckError::CatalogUnavailable(format!(
                "catalog repeats {} cards",
                n - u
            ))),
            _ => Ok(Self(cards)),
        }
    }
}

/// Anything that can hand out a catalog: the `loadCatalog` collaborator.
pub trait Source {
    fn load(&self) -> Result<Catalog, DeckError>;
}

impl<S> Source for Box<S>
where
    S: Source + ?Sized,
{
    fn load(&self) -> Result<Catalog, DeckError> {
        self.as_ref().load()
    }
}

/// Builds the catalog in memory on every call.
#[derive(Debug, Default, Clone, Copy)]
pub struct Generator;

impl Source for Generator {
    fn load(&self) -> Result<Catalog, DeckError> {
        Ok(Catalog::generate())
    }
}

/// Catalog kept as a JSON array on disk.
///
/// Every load regenerates the catalog, overwrites `path` with it and reads it
/// back, so whatever the file held before is replaced.
#[derive(Debug, Clone)]
pub struct Stored {
    path: PathBuf,
}

impl Stored {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
    fn read(&self) -> Result<Catalog, DeckError> {
        let bytes = std::fs::read(&self.path).map_err(|e| self.unavailable("read", e))?;
        let cards = serde_json::from_slice::<Vec<Card>>(&bytes)
            .map_err(|e| self.unavailable("parse", e))?;
        Catalog::try_from(cards)
    }
    fn write(&self, catalog: &Catalog) -> Result<(), DeckError> {
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            std::fs::create_dir_all(dir).map_err(|e| self.unavailable("create", e))?;
        }
        let json = serde_json::to_vec(catalog.cards()).map_err(|e| self.unavailable("encode", e))?;
        std::fs::write(&self.path, json).map_err(|e| self.unavailable("write", e))
    }
    fn unavailable(&self, verb: &str, e: impl std::fmt::Display) -> DeckError {
        DeckError::CatalogUnavailable(format!("{} {}: {}", verb, self.path.display(), e))
    }
}

impl Source for Stored {
    fn load(&self) -> Result<Catalog, DeckError> {
        self.write(&Catalog::generate())?;
        self.read()
            .inspect(|c| log::info!("wrote {} cards to {}", c.len(), self.path.display()))
    }
}
