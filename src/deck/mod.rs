//! Deck construction and drawing.
//!
//! A [`Recipe`] says which cards and whether to shuffle; [`Deck::build`] cuts
//! the deck from a [`Catalog`](crate::cards::Catalog); [`Deck::draw`] deals
//! from the top.
mod deck;
mod recipe;

pub use deck::*;
pub use recipe::*;
