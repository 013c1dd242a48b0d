/// What a caller asks for when creating a deck.
///
/// An empty `cards` list means the whole catalog. Codes that name no catalog
/// card are dropped without complaint, so `["AS", "XX"]` yields a one-card
/// deck.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Recipe {
    pub game: String,
    pub shuffle: bool,
    pub cards: Vec<String>,
}

impl Recipe {
    pub fn game(mut self, game: impl Into<String>) -> Self {
        self.game = game.into();
        self
    }
    pub fn shuffled(mut self, shuffle: bool) -> Self {
        self.shuffle = shuffle;
        self
    }
    pub fn only<I, S>(mut self, codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.cards = codes.into_iter().map(Into::into).collect();
        self
    }
}
