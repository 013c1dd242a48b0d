//! Cards and the catalog they come from.
//!
//! - [`Card`]: A `(Rank, Suit)` pair with a derived code such as `"10H"`
//! - [`Rank`]: A through K, ace low
//! - [`Suit`]: SPADES, DIAMONDS, CLUBS, HEARTS
//! - [`Catalog`]: The canonical ordered 52-card set
//! - [`Source`]: Providers of a catalog: [`Generator`] or on-disk [`Stored`]
mod card;
mod catalog;
mod rank;
mod suit;

pub use card::*;
pub use catalog::*;
pub use rank::*;
pub use suit::*;
