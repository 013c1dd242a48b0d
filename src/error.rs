use crate::ID;
use crate::deck::Deck;

/// Errors that can occur while building, finding, or drawing from decks.
///
/// Every variant is a synchronous validation failure; none is retried and
/// none leaves a deck partially mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeckError {
    /// Request body could not be parsed into the expected shape.
    InvalidPayload(String),
    /// Deck identifier is not a well-formed UUID.
    InvalidID(String),
    /// Well-formed identifier with no matching deck.
    NotFound(ID<Deck>),
    /// Draw asked for more cards than the deck holds.
    InsufficientCards { requested: usize, remaining: usize },
    /// Catalog could not be produced or is empty.
    CatalogUnavailable(String),
}

impl std::fmt::Display for DeckError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidPayload(s) => write!(f, "invalid payload: {}", s),
            Self::InvalidID(s) => write!(f, "invalid deck id: {}", s),
            Self::NotFound(id) => write!(f, "deck {} not found", id),
            Self::InsufficientCards {
                requested,
                remaining,
            } => write!(
                f,
                "cannot draw {} cards, {} remaining",
                requested, remaining
            ),
            Self::CatalogUnavailable(s) => write!(f, "catalog unavailable: {}", s),
        }
    }
}

impl std::error::Error for DeckError {}

impl From<serde_json::Error> for DeckError {
    fn from(e: serde_json::Error) -> Self {
        Self::InvalidPayload(e.to_string())
    }
}

#[cfg(feature = "server")]
mod response {
    use super::*;
    use crate::dto::Envelope;
    use actix_web::HttpResponse;
    use actix_web::ResponseError;
    use actix_web::http::StatusCode;

    impl DeckError {
        /// Caller-facing message placed in the envelope's `error` field.
        pub fn reason(&self) -> &'static str {
            match self {
                Self::InvalidPayload(_) => "User shared and invalid payload",
                Self::InvalidID(_) => "DeckID is invalid",
                Self::NotFound(_) => "DeckID not found",
                Self::InsufficientCards { .. } => "Not enough cards remaining in deck",
                Self::CatalogUnavailable(_) => "Default deck is unavailable",
            }
        }
    }

    impl ResponseError for DeckError {
        fn status_code(&self) -> StatusCode {
            match self {
                Self::InvalidPayload(_) => StatusCode::BAD_REQUEST,
                Self::InvalidID(_) => StatusCode::BAD_REQUEST,
                Self::NotFound(_) => StatusCode::NOT_FOUND,
                Self::InsufficientCards { .. } => StatusCode::CONFLICT,
                Self::CatalogUnavailable(_) => StatusCode::INTERNAL_SERVER_ERROR,
            }
        }
        fn error_response(&self) -> HttpResponse {
            log::warn!("{}", self);
            HttpResponse::build(self.status_code()).json(Envelope::<()>::failure(self.reason()))
        }
    }
}
