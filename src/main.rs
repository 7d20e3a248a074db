use inventory_api::{
    AppState,
    config::{AppConfig, Env},
    create_router,
    repository::{PostgresRepository, RepositoryState},
};
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// main
///
/// Asynchronous entry point: configuration, logging, database pool, and the
/// HTTP server, in that order, each failing fast on misconfiguration.
#[tokio::main]
async fn main() {
    // Load .env before any configuration is read.
    dotenv::dotenv().ok();
    let config = AppConfig::load();

    // RUST_LOG wins; otherwise default to chatty local levels.
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "inventory_api=debug,tower_http=info,axum=trace".into());

    // Pretty output for humans locally, JSON for log aggregators in
    // production.
    match config.env {
        Env::Local => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().pretty())
                .init();
        }
        Env::Production => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().json())
                .init();
        }
    }

    tracing::info!("Application starting in {:?} mode", config.env);

    // Bounded connection pool; connections are acquired per statement and
    // returned to the pool, never opened per request.
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&config.database_url())
        .await
        .expect("FATAL: Failed to connect to Postgres. Check DB_* settings.");

    let repo = Arc::new(PostgresRepository::new(pool)) as RepositoryState;

    let app_state = AppState { repo, config };
    let port = app_state.config.port;

    let app = create_router(app_state);

    let listener = TcpListener::bind(("0.0.0.0", port))
        .await
        .expect("FATAL: Failed to bind listen port");

    tracing::info!("Listening on 0.0.0.0:{port}");
    tracing::info!("API documentation available at http://localhost:{port}/swagger-ui");

    axum::serve(listener, app).await.unwrap();
}
