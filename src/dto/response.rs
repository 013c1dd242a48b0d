use crate::Unique;
use crate::cards::Card;
use crate::deck::Deck;
use serde::Deserialize;
use serde::Serialize;
use std::time::SystemTime;
use std::time::UNIX_EPOCH;

/// Uniform wrapper around every deck route's response.
///
/// `error` is empty on success and `data` is null on failure.
#[derive(Debug, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub success: bool,
    pub error: String,
    pub data: Option<T>,
}

impl<T> Envelope<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            error: String::new(),
            data: Some(data),
        }
    }
    pub fn failure(reason: impl Into<String>) -> Self {
        Self {
            success: false,
            error: reason.into(),
            data: None,
        }
    }
}

/// A [`Deck`] as the API presents it. Timestamps are UNIX milliseconds.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiDeck {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "gameID")]
    pub game_id: String,
    pub shuffle: bool,
    pub generated_deck: Vec<Card>,
    pub playing_cards: Vec<Card>,
    pub deck_size: usize,
    pub cards_remaining: usize,
    pub created_at: u64,
    pub deck_last_used: Option<u64>,
}

impl From<Deck> for ApiDeck {
    fn from(deck: Deck) -> Self {
        Self {
            id: deck.id().to_string(),
            game_id: deck.game().to_string(),
            shuffle: deck.shuffled(),
            generated_deck: deck.generated().to_vec(),
            playing_cards: deck.playing().to_vec(),
            deck_size: deck.size(),
            cards_remaining: deck.remaining(),
            created_at: millis(deck.created()),
            deck_last_used: deck.last_used().map(millis),
        }
    }
}

/// Body of `GET /ping`.
#[derive(Debug, Serialize, Deserialize)]
pub struct Pong {
    pub message: String,
}

impl Default for Pong {
    fn default() -> Self {
        Self {
            message: "pong".to_string(),
        }
    }
}

fn millis(t: SystemTime) -> u64 {
    t.duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or_default()
}
