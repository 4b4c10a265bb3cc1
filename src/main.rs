use std::io;

use actix_web::middleware::Logger;
use actix_web::{web, App, HttpServer};
use book_reviews::config::ServerConfig;
use book_reviews::{handlers, BookStore};
use dotenv::dotenv;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenv().ok();

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "book_reviews=debug,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env()
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;

    // One store shared by every worker.
    let store = web::Data::new(BookStore::seeded());

    let server = HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(store.clone())
            .configure(handlers::configure)
    })
    .bind((config.host.as_str(), config.port))?;

    tracing::info!("Server is running on http://{}:{}", config.host, config.port);
    server.run().await
}
