//! Axum router assembly.

use axum::Json;
use axum::Router;
use axum::routing::get;
use serde::Serialize;
use tower_http::trace::TraceLayer;

use eventboard_app::ports::EventStore;

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Merges the events routes with the service endpoints (`/`, `/health`,
/// `/version`). Includes a [`TraceLayer`] that logs each HTTP
/// request/response at the `DEBUG` level using the `tracing` ecosystem.
pub fn build<S>(state: AppState<S>) -> Router
where
    S: EventStore + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        .route("/version", get(version))
        .merge(crate::api::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[derive(Serialize)]
struct MessageBody {
    message: &'static str,
}

#[derive(Serialize)]
struct VersionBody {
    version: &'static str,
}

async fn root() -> Json<MessageBody> {
    Json(MessageBody {
        message: "Events backend",
    })
}

async fn version() -> Json<VersionBody> {
    Json(VersionBody {
        version: env!("CARGO_PKG_VERSION"),
    })
}

async fn health_check() -> &'static str {
    "OK"
}
