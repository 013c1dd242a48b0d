use crate::ID;
use crate::Unique;
use crate::cards::Card;
use crate::cards::Catalog;
use crate::cards::Generator;
use crate::cards::Source;
use crate::deck::Deck;
use crate::deck::Recipe;
use crate::error::DeckError;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;
use tokio::sync::OnceCell;
use tokio::sync::RwLock;

type Slot = Arc<Mutex<Deck>>;

/// Owns every live deck and the catalog they are cut from.
///
/// The index sits behind a `RwLock` and each deck behind its own `Mutex`, so
/// draws on different decks never contend and a draw on one deck is a single
/// read-check-mutate under that deck's lock. The index lock is never held
/// while waiting on a deck lock.
///
/// The catalog is loaded from the [`Source`] on first use and kept for the
/// lifetime of the dealer; a failed load is retried on the next call.
pub struct Dealer {
    source: Box<dyn Source + Send + Sync>,
    catalog: OnceCell<Catalog>,
    decks: RwLock<HashMap<ID<Deck>, Slot>>,
}

impl Default for Dealer {
    fn default() -> Self {
        Self::new(Generator)
    }
}

impl Dealer {
    pub fn new<S>(source: S) -> Self
    where
        S: Source + Send + Sync + 'static,
    {
        Self {
            source: Box::new(source),
            catalog: OnceCell::new(),
            decks: RwLock::new(HashMap::new()),
        }
    }
}

impl Dealer {
    /// The cached catalog, loading it on first call.
    pub async fn catalog(&self) -> Result<&Catalog, DeckError> {
        self.catalog
            .get_or_try_init(|| async { self.source.load() })
            .await
            .inspect_err(|e| log::error!("[dealer] {}", e))
    }
    /// Builds a deck from the catalog and stores it.
    pub async fn create(&self, recipe: Recipe) -> Result<Deck, DeckError> {
        let deck = Deck::build(self.catalog().await?, recipe)?;
        self.append(deck.clone()).await;
        Ok(deck)
    }
    /// Stores a deck under its own id.
    pub async fn append(&self, deck: Deck) -> ID<Deck> {
        let id = deck.id();
        let size = deck.size();
        let prior = self
            .decks
            .write()
            .await
            .insert(id, Arc::new(Mutex::new(deck)));
        debug_assert!(prior.is_none(), "deck id {} reused", id);
        log::debug!("[dealer] created deck {} with {} cards", id, size);
        id
    }
    /// Snapshot of a deck.
    pub async fn find(&self, id: ID<Deck>) -> Result<Deck, DeckError> {
        Ok(self.slot(id).await?.lock().await.clone())
    }
    /// Applies `f` to a deck while holding its lock.
    ///
    /// Whatever `f` does happens atomically with respect to every other
    /// access to that deck; if `f` fails it must leave the deck as it was.
    pub async fn update<F, T>(&self, id: ID<Deck>, f: F) -> Result<T, DeckError>
    where
        F: FnOnce(&mut Deck) -> Result<T, DeckError>,
    {
        let slot = self.slot(id).await?;
        let mut deck = slot.lock().await;
        f(&mut *deck)
    }
    /// Draws `count` cards off the top of a deck.
    pub async fn draw(&self, id: ID<Deck>, count: usize) -> Result<Vec<Card>, DeckError> {
        self.update(id, |deck| deck.draw(count))
            .await
            .inspect(|cards| log::debug!("[dealer] drew {} cards from deck {}", cards.len(), id))
    }
    /// Number of decks held.
    pub async fn len(&self) -> usize {
        self.decks.read().await.len()
    }
    pub async fn is_empty(&self) -> bool {
        self.decks.read().await.is_empty()
    }
    async fn slot(&self, id: ID<Deck>) -> Result<Slot, DeckError> {
        self.decks
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or(DeckError::NotFound(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::sync::atomic::AtomicUsize;
    use std::sync::atomic::Ordering;

    /// Fails until it has been asked `failures` times.
    struct Flaky {
        failures: usize,
        calls: Arc<AtomicUsize>,
    }

    impl Source for Flaky {
        fn load(&self) -> Result<Catalog, DeckError> {
            match self.calls.fetch_add(1, Ordering::SeqCst) < self.failures {
                true => Err(DeckError::CatalogUnavailable("disk on fire".into())),
                false => Ok(Catalog::generate()),
            }
        }
    }

    #[tokio::test]
    async fn create_then_find() {
        let dealer = Dealer::default();
        let deck = dealer.create(Recipe::default()).await.unwrap();
        let found = dealer.find(deck.id()).await.unwrap();
        assert!(found == deck);
        assert!(dealer.len().await == 1);
    }

    #[tokio::test]
    async fn find_is_idempotent() {
        let dealer = Dealer::default();
        let id = dealer.create(Recipe::default()).await.unwrap().id();
        let a = dealer.find(id).await.unwrap();
        let b = dealer.find(id).await.unwrap();
        assert!(a.remaining() == b.remaining());
        assert!(a.playing() == b.playing());
    }

    #[tokio::test]
    async fn missing_deck() {
        let dealer = Dealer::default();
        let id = ID::default();
        assert!(dealer.find(id).await.unwrap_err() == DeckError::NotFound(id));
        assert!(dealer.draw(id, 1).await.unwrap_err() == DeckError::NotFound(id));
    }

    #[tokio::test]
    async fn draw_persists() {
        let dealer = Dealer::default();
        let id = dealer.create(Recipe::default()).await.unwrap().id();
        let drawn = dealer.draw(id, 2).await.unwrap();
        let deck = dealer.find(id).await.unwrap();
        assert!(drawn.iter().map(Card::code).collect::<Vec<_>>() == ["AS", "2S"]);
        assert!(deck.remaining() == 50);
        assert!(deck.playing() == &deck.generated()[2..]);
    }

    #[tokio::test]
    async fn overdraw_is_rejected_and_harmless() {
        let dealer = Dealer::default();
        let id = dealer.create(Recipe::default()).await.unwrap().id();
        let before = dealer.find(id).await.unwrap();
        assert!(dealer.draw(id, 200).await.is_err());
        assert!(dealer.find(id).await.unwrap() == before);
    }

    #[tokio::test]
    async fn decks_are_independent() {
        let dealer = Dealer::default();
        let a = dealer.create(Recipe::default()).await.unwrap().id();
        let b = dealer.create(Recipe::default()).await.unwrap().id();
        dealer.draw(a, 10).await.unwrap();
        assert!(dealer.find(a).await.unwrap().remaining() == 42);
        assert!(dealer.find(b).await.unwrap().remaining() == 52);
    }

    #[tokio::test]
    async fn catalog_failure_surfaces_then_recovers() {
        let dealer = Dealer::new(Flaky {
            failures: 1,
            calls: Arc::default(),
        });
        let err = dealer.create(Recipe::default()).await.unwrap_err();
        assert!(matches!(err, DeckError::CatalogUnavailable(_)));
        assert!(dealer.is_empty().await);
        assert!(dealer.create(Recipe::default()).await.is_ok());
    }

    #[tokio::test]
    async fn catalog_is_loaded_once() {
        let calls = Arc::new(AtomicUsize::new(0));
        let dealer = Dealer::new(Flaky {
            failures: 0,
            calls: calls.clone(),
        });
        for _ in 0..5 {
            dealer.create(Recipe::default()).await.unwrap();
        }
        assert!(dealer.len().await == 5);
        assert!(dealer.catalog().await.unwrap().len() == crate::N_CARDS);
        assert!(calls.load(Ordering::SeqCst) == 1);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_draws_never_repeat_cards() {
        let dealer = Arc::new(Dealer::default());
        let id = dealer
            .create(Recipe::default().shuffled(true))
            .await
            .unwrap()
            .id();
        let tasks = (0..64)
            .map(|_| dealer.clone())
            .map(|dealer| tokio::spawn(async move { dealer.draw(id, 1).await }))
            .collect::<Vec<_>>();
        let mut drawn = Vec::new();
        let mut short = 0;
        for task in tasks {
            match task.await.unwrap() {
                Ok(cards) => drawn.extend(cards),
                Err(DeckError::InsufficientCards { .. }) => short += 1,
                Err(e) => panic!("unexpected error: {}", e),
            }
        }
        assert!(drawn.len() == 52);
        assert!(drawn.iter().collect::<HashSet<_>>().len() == 52);
        assert!(short == 12);
        assert!(dealer.find(id).await.unwrap().is_exhausted());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_creates_are_all_kept() {
        let dealer = Arc::new(Dealer::default());
        let tasks = (0..32)
            .map(|_| dealer.clone())
            .map(|dealer| tokio::spawn(async move { dealer.create(Recipe::default()).await }))
            .collect::<Vec<_>>();
        let mut ids = HashSet::new();
        for task in tasks {
            ids.insert(task.await.unwrap().unwrap().id());
        }
        assert!(ids.len() == 32);
        assert!(dealer.len().await == 32);
    }
}
