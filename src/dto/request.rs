use crate::deck::Recipe;
use serde::Deserialize;
use serde::Serialize;

/// Body of `POST /deck/new`. Every field may be omitted or null.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct NewDeck {
    #[serde(rename = "gameID")]
    pub game: Option<String>,
    pub shuffle: Option<bool>,
    pub cards: Option<Vec<String>>,
}

impl From<NewDeck> for Recipe {
    fn from(body: NewDeck) -> Self {
        Self {
            game: body.game.unwrap_or_default(),
            shuffle: body.shuffle.unwrap_or_default(),
            cards: body.cards.unwrap_or_default(),
        }
    }
}

/// Body of `PUT /deck/{id}/draw-cards`.
#[derive(Debug, Serialize, Deserialize)]
pub struct DrawCards {
    #[serde(rename = "cardsToBeDrawn")]
    pub count: usize,
}
