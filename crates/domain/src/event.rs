//! Event — the sole entity: a listed happening with reaction counters.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::id::EventId;

/// A stored event record.
///
/// Wire names follow the JSON contract of the HTTP API (`eventDate` in
/// camelCase). The model is deliberately lax: `location` and `event_date`
/// are free text and may be empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: EventId,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub location: String,
    #[serde(default, rename = "eventDate")]
    pub event_date: String,
    pub likes: u32,
    pub dislikes: u32,
}

impl Event {
    /// Materialize a record from a draft under a backend-issued key.
    ///
    /// Counters start at zero no matter what the caller supplied; they
    /// only ever change through reactions.
    #[must_use]
    pub fn from_draft(id: EventId, draft: NewEvent) -> Self {
        Self {
            id,
            title: draft.title,
            description: draft.description,
            location: draft.location,
            event_date: draft.event_date,
            likes: 0,
            dislikes: 0,
        }
    }

    /// Shallow-merge a partial update: supplied fields overwrite, omitted
    /// fields are retained. The identifier and counters are untouchable
    /// through this path.
    pub fn merge(&mut self, patch: EventPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(location) = patch.location {
            self.location = location;
        }
        if let Some(event_date) = patch.event_date {
            self.event_date = event_date;
        }
    }

    /// Current value of the given counter.
    #[must_use]
    pub fn reaction(&self, kind: ReactionKind) -> u32 {
        match kind {
            ReactionKind::Likes => self.likes,
            ReactionKind::Dislikes => self.dislikes,
        }
    }

    /// Add exactly one to the given counter.
    pub fn react(&mut self, kind: ReactionKind) {
        match kind {
            ReactionKind::Likes => self.likes += 1,
            ReactionKind::Dislikes => self.dislikes += 1,
        }
    }
}

/// Draft for a new event, as submitted by callers.
///
/// Carries no identifier and no counters: the backend issues the key and
/// [`Event::from_draft`] zeroes the counters. Unknown JSON fields in a
/// request body (including caller-supplied `likes`) are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewEvent {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub location: String,
    #[serde(default, rename = "eventDate")]
    pub event_date: String,
}

impl NewEvent {
    /// Convenience constructor for the two fields that are always set.
    #[must_use]
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            ..Self::default()
        }
    }
}

/// Partial update for an existing event.
///
/// Absent fields mean "keep the stored value". There are no counter
/// fields here — reactions are the only write path for `likes` and
/// `dislikes`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EventPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    #[serde(rename = "eventDate")]
    pub event_date: Option<String>,
}

/// The two reaction counters an event carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReactionKind {
    Likes,
    Dislikes,
}

impl ReactionKind {
    /// Wire name of the counter.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Likes => "likes",
            Self::Dislikes => "dislikes",
        }
    }
}

/// A reaction-kind string that names neither counter.
#[derive(Debug, thiserror::Error)]
#[error("unknown reaction kind `{0}`")]
pub struct UnknownReactionKind(pub String);

impl FromStr for ReactionKind {
    type Err = UnknownReactionKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "likes" => Ok(Self::Likes),
            "dislikes" => Ok(Self::Dislikes),
            other => Err(UnknownReactionKind(other.to_owned())),
        }
    }
}
