//! Data transfer objects for API communication.
//!
//! Request and response types for the deck routes, serializable via `serde`.
//! Field names follow the JSON the service has always spoken (`gameID`,
//! `cardsToBeDrawn`, `_id`), not Rust conventions.
mod request;
mod response;

pub use request::*;
pub use response::*;
