//! Shared application state for axum handlers.

use std::sync::Arc;

use eventboard_app::ports::EventStore;
use eventboard_app::services::event_service::EventService;

/// Application state shared across all axum handlers.
///
/// Generic over the store type to avoid dynamic dispatch. `Clone` is
/// implemented manually so the store itself does not need to be `Clone` —
/// only the `Arc` wrapper is cloned.
pub struct AppState<S> {
    /// Event CRUD service.
    pub event_service: Arc<EventService<S>>,
}

impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            event_service: Arc::clone(&self.event_service),
        }
    }
}

impl<S> AppState<S>
where
    S: EventStore + Send + Sync + 'static,
{
    /// Create a new application state from a service instance.
    pub fn new(event_service: EventService<S>) -> Self {
        Self {
            event_service: Arc::new(event_service),
        }
    }
}
