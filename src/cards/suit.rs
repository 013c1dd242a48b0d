/// One of the four French suits, declared in catalog order.
///
/// `Suit::all()` iterates SPADES, DIAMONDS, CLUBS, HEARTS.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Suit {
    Spade = 0,
    Diamond = 1,
    Club = 2,
    Heart = 3,
}

impl Suit {
    pub const fn all() -> [Self; 4] {
        [Suit::Spade, Suit::Diamond, Suit::Club, Suit::Heart]
    }
    /// Single-letter suffix used in card codes.
    pub fn initial(&self) -> char {
        match self {
            Suit::Spade => 'S',
            Suit::Diamond => 'D',
            Suit::Club => 'C',
            Suit::Heart => 'H',
        }
    }
}

/// str isomorphism, full uppercase names
impl TryFrom<&str> for Suit {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s {
            "SPADES" => Ok(Suit::Spade),
            "DIAMONDS" => Ok(Suit::Diamond),
            "CLUBS" => Ok(Suit::Club),
            "HEARTS" => Ok(Suit::Heart),
            _ => Err(format!("invalid suit str: {}", s)),
        }
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Suit::Spade => "SPADES",
                Suit::Diamond => "DIAMONDS",
                Suit::Club => "CLUBS",
                Suit::Heart => "HEARTS",
            }
        )
    }
}
