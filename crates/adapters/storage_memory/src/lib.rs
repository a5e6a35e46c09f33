//! # eventboard-adapter-storage-memory
//!
//! Process-local [`EventStore`] implementation backed by an ordered
//! sequence of optional slots.
//!
//! ## Responsibilities
//! - Implement the full event-store port against a `Vec<Option<Event>>`
//! - Issue identifiers from the slot count *including tombstones*, so ids
//!   strictly increase and are never reassigned after a delete
//! - Tombstone deleted slots (`None`) instead of compacting, which keeps
//!   the id sequence stable
//!
//! ## Dependency rule
//! Depends on `eventboard-app` (for the port trait) and
//! `eventboard-domain`. The `app` and `domain` crates must never reference
//! this adapter.

use std::future::Future;
use std::sync::Arc;

use tokio::sync::RwLock;

use eventboard_app::ports::EventStore;
use eventboard_domain::error::{EventBoardError, NotFoundError};
use eventboard_domain::event::{Event, EventPatch, NewEvent, ReactionKind};
use eventboard_domain::id::EventId;

/// In-memory event store.
///
/// Cloning is cheap and shares the backing sequence; construct one per
/// test for isolation. Nothing is persisted across process restarts.
///
/// All by-id operations resolve through a linear scan — fine at the
/// demo/test scale this adapter exists for.
#[derive(Clone, Default)]
pub struct MemoryEventStore {
    slots: Arc<RwLock<Vec<Option<Event>>>>,
}

impl MemoryEventStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated from drafts, issuing sequential ids
    /// starting at `1`. Useful for deterministic tests and demos.
    #[must_use]
    pub fn seeded(drafts: impl IntoIterator<Item = NewEvent>) -> Self {
        let slots: Vec<Option<Event>> = drafts
            .into_iter()
            .enumerate()
            .map(|(i, draft)| Some(Event::from_draft(EventId::from_sequence(i + 1), draft)))
            .collect();
        Self {
            slots: Arc::new(RwLock::new(slots)),
        }
    }

    fn position(slots: &[Option<Event>], id: &EventId) -> Option<usize> {
        slots
            .iter()
            .position(|slot| slot.as_ref().is_some_and(|event| event.id == *id))
    }
}

impl EventStore for MemoryEventStore {
    fn list(&self) -> impl Future<Output = Result<Vec<Event>, EventBoardError>> + Send {
        let slots = Arc::clone(&self.slots);
        async move { Ok(slots.read().await.iter().flatten().cloned().collect()) }
    }

    fn add(&self, draft: NewEvent) -> impl Future<Output = Result<Event, EventBoardError>> + Send {
        let slots = Arc::clone(&self.slots);
        async move {
            let mut slots = slots.write().await;
            // Length includes tombstones, so a freed id is never reissued.
            let id = EventId::from_sequence(slots.len() + 1);
            let event = Event::from_draft(id, draft);
            slots.push(Some(event.clone()));
            Ok(event)
        }
    }

    fn get_by_id(
        &self,
        id: &EventId,
    ) -> impl Future<Output = Result<Option<Event>, EventBoardError>> + Send {
        let slots = Arc::clone(&self.slots);
        let id = id.clone();
        async move {
            let slots = slots.read().await;
            Ok(slots
                .iter()
                .flatten()
                .find(|event| event.id == id)
                .cloned())
        }
    }

    fn find_by_title(
        &self,
        title: &str,
    ) -> impl Future<Output = Result<Vec<Event>, EventBoardError>> + Send {
        let slots = Arc::clone(&self.slots);
        let needle = title.to_lowercase();
        async move {
            let slots = slots.read().await;
            Ok(slots
                .iter()
                .flatten()
                .filter(|event| event.title.to_lowercase().contains(&needle))
                .cloned()
                .collect())
        }
    }

    fn update(
        &self,
        id: &EventId,
        patch: EventPatch,
    ) -> impl Future<Output = Result<Event, EventBoardError>> + Send {
        let slots = Arc::clone(&self.slots);
        let id = id.clone();
        async move {
            let mut slots = slots.write().await;
            match slots.iter_mut().flatten().find(|event| event.id == id) {
                Some(event) => {
                    event.merge(patch);
                    Ok(event.clone())
                }
                None => Err(NotFoundError::event(id.as_str()).into()),
            }
        }
    }

    fn delete(
        &self,
        id: &EventId,
    ) -> impl Future<Output = Result<Event, EventBoardError>> + Send {
        let slots = Arc::clone(&self.slots);
        let id = id.clone();
        async move {
            let mut slots = slots.write().await;
            let Some(index) = Self::position(&slots, &id) else {
                return Err(NotFoundError::event(id.as_str()).into());
            };
            // Tombstone the slot; the sequence keeps its length.
            slots[index]
                .take()
                .ok_or_else(|| NotFoundError::event(id.as_str()).into())
        }
    }

    fn increment_reaction(
        &self,
        id: &EventId,
        kind: ReactionKind,
    ) -> impl Future<Output = Result<Event, EventBoardError>> + Send {
        let slots = Arc::clone(&self.slots);
        let id = id.clone();
        async move {
            let mut slots = slots.write().await;
            match slots.iter_mut().flatten().find(|event| event.id == id) {
                Some(event) => {
                    event.react(kind);
                    Ok(event.clone())
                }
                None => Err(NotFoundError::event(id.as_str()).into()),
            }
        }
    }

    fn count(
        &self,
        include_tombstones: bool,
    ) -> impl Future<Output = Result<usize, EventBoardError>> + Send {
        let slots = Arc::clone(&self.slots);
        async move {
            let slots = slots.read().await;
            Ok(if include_tombstones {
                slots.len()
            } else {
                slots.iter().flatten().count()
            })
        }
    }
}
