use super::recipe::Recipe;
use crate::ID;
use crate::Unique;
use crate::cards::Card;
use crate::cards::Catalog;
use crate::error::DeckError;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use std::time::SystemTime;

/// A named deck cut from the catalog, drawn from the top down.
///
/// `generated` is fixed at creation; `playing` starts as a copy of it and
/// only ever loses a prefix. Size and remaining count are read off the two
/// sequences rather than stored beside them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    id: ID<Self>,
    game: String,
    shuffle: bool,
    generated: Vec<Card>,
    playing: Vec<Card>,
    created: SystemTime,
    last_used: Option<SystemTime>,
}

impl Unique for Deck {
    fn id(&self) -> ID<Self> {
        self.id
    }
}

impl Deck {
    /// Builds a deck from the catalog, shuffling with a freshly seeded RNG.
    pub fn build(catalog: &Catalog, recipe: Recipe) -> Result<Self, DeckError> {
        Self::build_with(catalog, recipe, &mut SmallRng::from_os_rng())
    }
    /// Builds a deck from the catalog, shuffling with the given RNG.
    ///
    /// The cards are the catalog filtered to `recipe.cards` (all of it when
    /// that list is empty), in catalog order, then permuted if requested.
    pub fn build_with<R>(catalog: &Catalog, recipe: Recipe, rng: &mut R) -> Result<Self, DeckError>
    where
        R: Rng + ?Sized,
    {
        if catalog.is_empty() {
            return Err(DeckError::CatalogUnavailable("catalog is empty".into()));
        }
        let mut generated = match recipe.cards.is_empty() {
            true => catalog.cards().to_vec(),
            false => catalog.select(&recipe.cards),
        };
        if recipe.shuffle {
            generated.shuffle(rng);
        }
        Ok(Self {
            id: ID::default(),
            game: recipe.game,
            shuffle: recipe.shuffle,
            playing: generated.clone(),
            generated,
            created: SystemTime::now(),
            last_used: None,
        })
    }

    /// Takes `count` cards off the top.
    ///
    /// Fails without touching the deck when fewer than `count` remain. A
    /// zero-count draw succeeds with no cards and still marks the deck used.
    pub fn draw(&mut self, count: usize) -> Result<Vec<Card>, DeckError> {
        match count > self.remaining() {
            true => Err(DeckError::InsufficientCards {
                requested: count,
                remaining: self.remaining(),
            }),
            false => {
                let rest = self.playing.split_off(count);
                let drawn = std::mem::replace(&mut self.playing, rest);
                self.last_used = Some(SystemTime::now());
                Ok(drawn)
            }
        }
    }

    pub fn game(&self) -> &str {
        &self.game
    }
    pub fn shuffled(&self) -> bool {
        self.shuffle
    }
    pub fn generated(&self) -> &[Card] {
        &self.generated
    }
    pub fn playing(&self) -> &[Card] {
        &self.playing
    }
    pub fn size(&self) -> usize {
        self.generated.len()
    }
    pub fn remaining(&self) -> usize {
        self.playing.len()
    }
    pub fn is_exhausted(&self) -> bool {
        self.playing.is_empty()
    }
    pub fn created(&self) -> SystemTime {
        self.created
    }
    pub fn last_used(&self) -> Option<SystemTime> {
        self.last_used
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn codes(cards: &[Card]) -> Vec<String> {
        cards.iter().map(Card::code).collect()
    }

    #[test]
    fn full_ordered_deck() {
        let deck = Deck::build(&Catalog::generate(), Recipe::default()).unwrap();
        assert!(deck.size() == 52);
        assert!(deck.remaining() == 52);
        assert!(deck.generated() == Catalog::generate().cards());
        assert!(deck.playing() == deck.generated());
        assert!(deck.last_used().is_none());
        assert!(!deck.shuffled());
    }

    #[test]
    fn filtered_deck_in_catalog_order() {
        let recipe = Recipe::default().only(["AD", "AC", "AH", "AS"]);
        let deck = Deck::build(&Catalog::generate(), recipe).unwrap();
        assert!(codes(deck.generated()) == ["AS", "AD", "AC", "AH"]);
        assert!(deck.size() == 4);
    }

    #[test]
    fn unknown_codes_only_yields_empty_deck() {
        let recipe = Recipe::default().only(["ZZ", "11S"]);
        let deck = Deck::build(&Catalog::generate(), recipe).unwrap();
        assert!(deck.size() == 0);
        assert!(deck.is_exhausted());
    }

    #[test]
    fn shuffle_is_permutation() {
        let ref mut rng = SmallRng::seed_from_u64(0xDECC);
        let catalog = Catalog::generate();
        let recipe = Recipe::default().only(["2S", "3D", "4C", "5H", "KH", "QS"]);
        let plain = Deck::build_with(&catalog, recipe.clone(), rng).unwrap();
        let mixed = Deck::build_with(&catalog, recipe.shuffled(true), rng).unwrap();
        let a = plain.generated().iter().collect::<HashSet<_>>();
        let b = mixed.generated().iter().collect::<HashSet<_>>();
        assert!(a == b);
        assert!(mixed.shuffled());
        assert!(mixed.size() == mixed.generated().len());
        assert!(mixed.remaining() == mixed.size());
        assert!(mixed.playing() == mixed.generated());
    }

    #[test]
    fn shuffle_moves_something() {
        let ref mut rng = SmallRng::seed_from_u64(7);
        let catalog = Catalog::generate();
        let orders = (0..8)
            .map(|_| Deck::build_with(&catalog, Recipe::default().shuffled(true), rng).unwrap())
            .map(|deck| codes(deck.generated()))
            .collect::<HashSet<_>>();
        assert!(orders.len() > 1);
        assert!(!orders.contains(&codes(catalog.cards())));
    }

    #[test]
    fn game_id_is_recorded() {
        let deck = Deck::build(&Catalog::generate(), Recipe::default().game("table-7")).unwrap();
        assert!(deck.game() == "table-7");
    }

    #[test]
    fn draw_from_top() {
        let mut deck = Deck::build(&Catalog::generate(), Recipe::default()).unwrap();
        let drawn = deck.draw(2).unwrap();
        assert!(codes(&drawn) == ["AS", "2S"]);
        assert!(deck.remaining() == 50);
        assert!(deck.size() == 52);
        assert!(deck.playing() == &deck.generated()[2..]);
        assert!(deck.last_used().is_some());
    }

    #[test]
    fn overdraw_leaves_deck_untouched() {
        let mut deck = Deck::build(&Catalog::generate(), Recipe::default()).unwrap();
        deck.draw(50).unwrap();
        let before = deck.clone();
        let err = deck.draw(3).unwrap_err();
        assert!(
            err == DeckError::InsufficientCards {
                requested: 3,
                remaining: 2
            }
        );
        assert!(deck == before);
    }

    #[test]
    fn zero_draw_only_touches_timestamp() {
        let mut deck = Deck::build(&Catalog::generate(), Recipe::default()).unwrap();
        let drawn = deck.draw(0).unwrap();
        assert!(drawn.is_empty());
        assert!(deck.remaining() == 52);
        assert!(deck.last_used().is_some());
    }

    #[test]
    fn exhausted_deck() {
        let recipe = Recipe::default().only(["KH"]);
        let mut deck = Deck::build(&Catalog::generate(), recipe).unwrap();
        assert!(codes(&deck.draw(1).unwrap()) == ["KH"]);
        assert!(deck.is_exhausted());
        assert!(deck.draw(0).unwrap().is_empty());
        assert!(deck.draw(1).is_err());
        assert!(deck.size() == 1);
    }

    #[test]
    fn successive_draws_partition_deck() {
        let mut deck = Deck::build(&Catalog::generate(), Recipe::default().shuffled(true)).unwrap();
        let generated = deck.generated().to_vec();
        let drawn = [5, 0, 13, 34]
            .into_iter()
            .flat_map(|n| deck.draw(n).unwrap())
            .collect::<Vec<Card>>();
        assert!(drawn == generated);
        assert!(deck.is_exhausted());
    }
}
