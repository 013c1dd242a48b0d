//! HTTP surface of the deck service.
//!
//! - [`Server`]: actix-web server wiring logging, CORS, and the shared [`Dealer`](crate::dealer::Dealer)
//! - [`Config`]: flags and environment for the `dealer` binary
//! - [`routes`]: route table, reusable by tests
//!
//! | Method | Path                    | Handler              |
//! |--------|-------------------------|----------------------|
//! | GET    | `/ping`                 | [`handlers::ping`]   |
//! | POST   | `/deck/new`             | [`handlers::create`] |
//! | GET    | `/deck/{id}`            | [`handlers::open`]   |
//! | PUT    | `/deck/{id}/draw-cards` | [`handlers::draw`]   |
mod config;
pub mod handlers;
mod server;

pub use config::*;
pub use server::*;
