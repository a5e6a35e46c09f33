//! Opaque event identifier.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Unique identifier for an [`Event`](crate::event::Event).
///
/// The content is backend-chosen and must be treated as opaque: the
/// in-memory store issues decimal strings from a strictly ascending
/// sequence, the SQLite store issues random UUID strings. Both serialize
/// as a plain JSON string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventId(String);

impl EventId {
    /// Wrap an existing key.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Identifier for the `n`-th record issued by a sequential backend.
    #[must_use]
    pub fn from_sequence(n: usize) -> Self {
        Self(n.to_string())
    }

    /// Access the raw key.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for EventId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for EventId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}
