use super::rank::Rank;
use super::suit::Suit;

/// A playing card as a `(Rank, Suit)` pair.
///
/// Its code is the rank label followed by the suit initial, e.g. `"AS"` for
/// the ace of spades or `"10H"` for the ten of hearts. The code is derived,
/// never stored, so it cannot drift from the rank and suit.
///
/// On the wire a card is `{"value": "10", "suit": "HEARTS", "code": "10H"}`;
/// see [`Face`].
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(into = "Face", try_from = "Face")]
pub struct Card {
    suit: Suit,
    rank: Rank,
}

impl Card {
    pub fn rank(&self) -> Rank {
        self.rank
    }
    pub fn suit(&self) -> Suit {
        self.suit
    }
    pub fn code(&self) -> String {
        self.to_string()
    }
}

/// (Rank, Suit) isomorphism
impl From<(Rank, Suit)> for Card {
    fn from((rank, suit): (Rank, Suit)) -> Self {
        Self { suit, rank }
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}{}", self.rank, self.suit.initial())
    }
}

/// Wire representation of a [`Card`].
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Face {
    pub value: String,
    pub suit: String,
    pub code: String,
}

impl From<Card> for Face {
    fn from(card: Card) -> Self {
        Self {
            value: card.rank.to_string(),
            suit: card.suit.to_string(),
            code: card.code(),
        }
    }
}

impl TryFrom<Face> for Card {
    type Error = String;
    fn try_from(face: Face) -> Result<Self, Self::Error> {
        let rank = Rank::try_from(face.value.as_str())?;
        let suit = Suit::try_from(face.suit.as_str())?;
        let card = Card::from((rank, suit));
        match card.code() == face.code {
            true => Ok(card),
            false => Err(format!("code {} does not match {}", face.code, card)),
        }
    }
}
