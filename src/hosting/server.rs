use super::config::Config;
use super::handlers;
use crate::dealer::Dealer;
use actix_cors::Cors;
use actix_web::App;
use actix_web::HttpServer;
use actix_web::middleware::Logger;
use actix_web::web;
use anyhow::Context;

pub struct Server;

impl Server {
    /// Loads the catalog, then serves until the process is interrupted.
    /// A catalog that cannot be loaded stops startup.
    pub async fn run(config: Config) -> anyhow::Result<()> {
        let dealer = web::Data::new(Dealer::new(config.source()));
        let catalog = dealer.catalog().await.context("load default deck")?;
        log::info!("default deck ready with {} cards", catalog.len());
        log::info!("starting deck server on {}", config.bind);
        HttpServer::new(move || {
            App::new()
                .wrap(Logger::new("%r %s %Ts"))
                .wrap(
                    Cors::default()
                        .allow_any_origin()
                        .allow_any_method()
                        .allow_any_header(),
                )
                .app_data(dealer.clone())
                .configure(routes)
        })
        .workers(config.workers)
        .bind(&config.bind)
        .with_context(|| format!("bind {}", config.bind))?
        .run()
        .await
        .context("serve http")
    }
}

/// Registers every route on an app that carries `web::Data<Dealer>`.
pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/ping", web::get().to(handlers::ping))
        .service(
            web::scope("/deck")
                .route("/new", web::post().to(handlers::create))
                .route("/{id}", web::get().to(handlers::open))
                .route("/{id}/draw-cards", web::put().to(handlers::draw)),
        );
}
