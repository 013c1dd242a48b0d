use crate::ID;
use crate::dealer::Dealer;
use crate::deck::Deck;
use crate::deck::Recipe;
use crate::dto::ApiDeck;
use crate::dto::DrawCards;
use crate::dto::Envelope;
use crate::dto::NewDeck;
use crate::dto::Pong;
use crate::error::DeckError;
use actix_web::HttpResponse;
use actix_web::Responder;
use actix_web::web;

// Bodies arrive as a raw stream and are parsed here, so a bad deck id is
// reported before a bad payload and Content-Type is not required.

pub async fn ping() -> impl Responder {
    HttpResponse::Ok().json(Pong::default())
}

pub async fn create(
    dealer: web::Data<Dealer>,
    body: web::Payload,
) -> Result<HttpResponse, DeckError> {
    let body = serde_json::from_slice::<NewDeck>(&collect(body).await?)?;
    let deck = dealer.create(Recipe::from(body)).await?;
    Ok(HttpResponse::Created().json(Envelope::success(ApiDeck::from(deck))))
}

pub async fn open(
    dealer: web::Data<Dealer>,
    path: web::Path<String>,
) -> Result<HttpResponse, DeckError> {
    let id = identify(&path)?;
    let deck = dealer.find(id).await?;
    Ok(HttpResponse::Ok().json(Envelope::success(ApiDeck::from(deck))))
}

pub async fn draw(
    dealer: web::Data<Dealer>,
    path: web::Path<String>,
    body: web::Payload,
) -> Result<HttpResponse, DeckError> {
    let id = identify(&path)?;
    let body = serde_json::from_slice::<DrawCards>(&collect(body).await?)?;
    let cards = dealer.draw(id, body.count).await?;
    Ok(HttpResponse::Ok().json(Envelope::success(cards)))
}

fn identify(s: &str) -> Result<ID<Deck>, DeckError> {
    s.parse::<ID<Deck>>()
        .map_err(|e| DeckError::InvalidID(format!("{}: {}", s, e)))
}

/// Reads the whole body, up to `MAX_PAYLOAD_BYTES`.
async fn collect(mut body: web::Payload) -> Result<web::BytesMut, DeckError> {
    use futures::StreamExt;
    let mut bytes = web::BytesMut::new();
    while let Some(chunk) = body.next().await {
        let chunk = chunk.map_err(|e| DeckError::InvalidPayload(e.to_string()))?;
        match bytes.len() + chunk.len() > crate::MAX_PAYLOAD_BYTES {
            true => {
                return Err(DeckError::InvalidPayload(format!(
                    "body exceeds {} bytes",
                    crate::MAX_PAYLOAD_BYTES
                )));
            }
            false => bytes.extend_from_slice(&chunk),
        }
    }
    Ok(bytes)
}
