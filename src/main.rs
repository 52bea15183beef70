use std::sync::Arc;

use student_records_api::app;
use student_records_api::config::Config;
use student_records_api::storage::{MemoryStore, SqliteStore, StudentStore};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // Initialize tracing/logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting student records server...");

    dotenvy::dotenv().ok();

    let config = Config::from_env().expect("Invalid configuration");

    let store: Arc<dyn StudentStore> = match config.database_url.as_deref() {
        Some(url) => {
            let store = SqliteStore::connect(url)
                .await
                .expect("Failed to connect to database");
            tracing::info!("Database connection established.");
            Arc::new(store)
        }
        None => {
            tracing::info!("DATABASE_URL not set, keeping records in memory only.");
            Arc::new(MemoryStore::new())
        }
    };

    let addr = config.socket_addr();

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app(store))
        .await
        .expect("Failed to start server.");
}
