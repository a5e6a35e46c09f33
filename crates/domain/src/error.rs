//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts upward via
//! `#[from]`: adapters wrap their backend errors (e.g. sqlx) in a local
//! `StorageError` and convert into [`EventBoardError::Storage`].

use std::error::Error as StdError;

/// Top-level error for event-store operations.
#[derive(Debug, thiserror::Error)]
pub enum EventBoardError {
    /// Input failed a validation check.
    #[error("validation error")]
    Validation(#[from] ValidationError),

    /// An identifier did not resolve to a live record.
    #[error("not found")]
    NotFound(#[from] NotFoundError),

    /// The underlying store failed to read or write.
    #[error("storage error")]
    Storage(#[source] Box<dyn StdError + Send + Sync>),
}

/// Input validation failures.
///
/// Reserved: the event model is deliberately lax (titles, locations, and
/// dates are free text), so the core never raises these today. The HTTP
/// boundary still maps the variant so future checks slot in without a
/// contract change.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    /// A field did not satisfy its (future) format rule.
    #[error("field `{0}` is malformed")]
    MalformedField(&'static str),
}

/// An identifier that does not resolve to a live record.
#[derive(Debug, thiserror::Error)]
#[error("{entity} `{id}` not found")]
pub struct NotFoundError {
    /// Kind of record that was looked up.
    pub entity: &'static str,
    /// The identifier that failed to resolve.
    pub id: String,
}

impl NotFoundError {
    /// Shorthand for a missing event.
    #[must_use]
    pub fn event(id: impl Into<String>) -> Self {
        Self {
            entity: "Event",
            id: id.into(),
        }
    }
}
