//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod events;

use axum::Router;
use axum::routing::{get, post, put};

use eventboard_app::ports::EventStore;

use crate::state::AppState;

/// Build the events sub-router.
///
/// The event paths live at the root (no `/api` prefix), matching the
/// public contract of the service.
pub fn routes<S>() -> Router<AppState<S>>
where
    S: EventStore + Send + Sync + 'static,
{
    Router::new()
        .route("/events", get(events::list::<S>))
        .route("/event", post(events::create::<S>))
        .route(
            "/event/{id}",
            put(events::update::<S>).delete(events::remove::<S>),
        )
        .route("/event/like/{id}", put(events::like::<S>))
        .route("/event/dislike/{id}", put(events::dislike::<S>))
}
