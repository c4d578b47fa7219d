mod config;
mod controller;
mod data;
mod error;
mod middleware;
mod model;
mod router;
mod scheduler;
mod service;
mod startup;
mod state;
mod util;

use std::net::SocketAddr;
use tower_http::cors::CorsLayer;

use crate::{config::Config, error::AppError, state::AppState, util::jwt::JwtKeys};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;

    // Without a super-admin the approval workflow is unreachable.
    startup::seed_super_admin(&db, &config).await?;

    let jwt = JwtKeys::new(&config.jwt_secret);
    let word_of_day = state::WordOfDayCache::default();

    tracing::info!("Starting server");

    // Start the daily word-of-the-day refresh
    let scheduler_db = db.clone();
    let scheduler_cache = word_of_day.clone();
    tokio::spawn(async move {
        if let Err(e) = scheduler::word_of_day::start_scheduler(scheduler_db, scheduler_cache).await
        {
            tracing::error!("Word of the day scheduler error: {}", e);
        }
    });

    let app = router::router()
        .with_state(AppState::new(db, jwt, word_of_day))
        .layer(CorsLayer::permissive());

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Server is running on {}", config.bind_addr);

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
