//! # eventboardd — eventboard daemon
//!
//! Composition root that wires the chosen storage adapter into the HTTP
//! server and starts it.
//!
//! ## Responsibilities
//! - Load configuration (TOML file, env var overrides)
//! - Initialize tracing
//! - Construct the storage adapter selected by the config (the backend is
//!   chosen exactly once here and injected; nothing downstream branches
//!   on it)
//! - Construct the application service and the axum router
//! - Bind to a TCP port and serve
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use eventboard_adapter_http_axum::router;
use eventboard_adapter_http_axum::state::AppState;
use eventboard_adapter_storage_memory::MemoryEventStore;
use eventboard_adapter_storage_sqlite_sqlx::{Config as StoreConfig, SqliteEventStore};
use eventboard_app::services::event_service::EventService;

use crate::config::{Backend, Config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_new(&config.logging.filter)
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let app = match config.database.backend {
        Backend::Sqlite => {
            let db = StoreConfig {
                database_url: config.database.url.clone(),
            }
            .build()
            .await?;
            let store = SqliteEventStore::new(db.pool().clone());
            router::build(AppState::new(EventService::new(store)))
        }
        Backend::Memory => {
            let store = MemoryEventStore::new();
            router::build(AppState::new(EventService::new(store)))
        }
    };

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(addr = %bind_addr, backend = ?config.database.backend, "server listening");
    axum::serve(listener, app).await?;

    Ok(())
}
