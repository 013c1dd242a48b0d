//! Lock-guarded store of live decks.
mod dealer;

pub use dealer::*;
