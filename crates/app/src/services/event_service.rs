//! Event service — use-cases for the events resource.
//!
//! The service owns the observable reply contract shared by every
//! backend: mutations answer with the full `{events: [...]}` listing by
//! default (the store is re-listed after the write, so callers always see
//! a consistent collection at the cost of one extra store round trip), or
//! with the single affected record when the caller asks for
//! [`ReturnShape::Record`].

use serde::Serialize;

use eventboard_domain::error::EventBoardError;
use eventboard_domain::event::{Event, EventPatch, NewEvent, ReactionKind};
use eventboard_domain::id::EventId;

use crate::ports::EventStore;

/// Which envelope a mutating operation should answer with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReturnShape {
    /// `{"events": [...]}` — the full listing after the mutation.
    #[default]
    Collection,
    /// `{"event": ...}` / `{"deletedEvent": ...}` — only the affected
    /// record.
    Record,
}

/// Reply envelopes mirroring the JSON contract of the HTTP API.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum StoreReply {
    /// `{"events": [...]}`.
    Listing { events: Vec<Event> },
    /// `{"event": {...}}`.
    Record { event: Event },
    /// `{"deletedEvent": {...}}`.
    Removed {
        #[serde(rename = "deletedEvent")]
        deleted_event: Event,
    },
}

/// Reply for a by-id lookup: `{"event": {...}}` or `{"event": null}`.
///
/// An absent id is a valid, non-error outcome here.
#[derive(Debug, Serialize)]
pub struct EventLookup {
    pub event: Option<Event>,
}

/// Application service for event CRUD and reactions.
pub struct EventService<S> {
    store: S,
}

impl<S: EventStore + Sync> EventService<S> {
    /// Create a new service backed by the given store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// List all live events.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the store.
    pub async fn list_events(&self) -> Result<StoreReply, EventBoardError> {
        Ok(StoreReply::Listing {
            events: self.store.list().await?,
        })
    }

    /// Create a new event. Counters are zeroed regardless of input.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the underlying write fails.
    pub async fn add_event(
        &self,
        draft: NewEvent,
        shape: ReturnShape,
    ) -> Result<StoreReply, EventBoardError> {
        let created = self.store.add(draft).await?;
        self.shaped(created, shape).await
    }

    /// Look up a single event; `event: null` when the id is unknown.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the store.
    pub async fn get_event(&self, id: &EventId) -> Result<EventLookup, EventBoardError> {
        Ok(EventLookup {
            event: self.store.get_by_id(id).await?,
        })
    }

    /// Case-insensitive substring search against titles.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the store.
    pub async fn find_by_title(&self, title: &str) -> Result<StoreReply, EventBoardError> {
        Ok(StoreReply::Listing {
            events: self.store.find_by_title(title).await?,
        })
    }

    /// Merge a partial update over an existing event.
    ///
    /// # Errors
    ///
    /// Returns [`EventBoardError::NotFound`] when `id` does not resolve to
    /// a live event, or a storage error from the store.
    pub async fn update_event(
        &self,
        id: &EventId,
        patch: EventPatch,
        shape: ReturnShape,
    ) -> Result<StoreReply, EventBoardError> {
        let updated = self.store.update(id, patch).await?;
        self.shaped(updated, shape).await
    }

    /// Delete an event.
    ///
    /// # Errors
    ///
    /// Returns [`EventBoardError::NotFound`] when `id` does not resolve to
    /// a live event, or a storage error from the store.
    pub async fn delete_event(
        &self,
        id: &EventId,
        shape: ReturnShape,
    ) -> Result<StoreReply, EventBoardError> {
        let deleted = self.store.delete(id).await?;
        match shape {
            ReturnShape::Collection => self.listing().await,
            ReturnShape::Record => Ok(StoreReply::Removed {
                deleted_event: deleted,
            }),
        }
    }

    /// Add one reaction of the named kind.
    ///
    /// A `kind` naming neither counter is a no-op that still answers with
    /// the current listing — documented edge-case policy, not an error.
    ///
    /// # Errors
    ///
    /// Returns [`EventBoardError::NotFound`] when `id` does not resolve to
    /// a live event, or a storage error from the store.
    pub async fn react(
        &self,
        id: &EventId,
        kind: &str,
        shape: ReturnShape,
    ) -> Result<StoreReply, EventBoardError> {
        let Ok(kind) = kind.parse::<ReactionKind>() else {
            tracing::debug!(kind, "ignoring unknown reaction kind");
            return self.listing().await;
        };
        let updated = self.store.increment_reaction(id, kind).await?;
        self.shaped(updated, shape).await
    }

    /// Number of stored events, optionally including tombstoned slots.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the store.
    pub async fn count_events(&self, include_tombstones: bool) -> Result<usize, EventBoardError> {
        self.store.count(include_tombstones).await
    }

    async fn listing(&self) -> Result<StoreReply, EventBoardError> {
        Ok(StoreReply::Listing {
            events: self.store.list().await?,
        })
    }

    async fn shaped(&self, event: Event, shape: ReturnShape) -> Result<StoreReply, EventBoardError> {
        match shape {
            ReturnShape::Collection => self.listing().await,
            ReturnShape::Record => Ok(StoreReply::Record { event }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eventboard_domain::error::NotFoundError;
    use std::future::Future;
    use std::sync::Mutex;

    /// Minimal store fake: a flat vec with sequential ids, no tombstones.
    /// Tombstone semantics belong to the in-memory adapter and are tested
    /// there; these tests pin down the service-level contract.
    #[derive(Default)]
    struct FakeStore {
        events: Mutex<Vec<Event>>,
        issued: Mutex<usize>,
    }

    impl FakeStore {
        fn position(&self, id: &EventId) -> Option<usize> {
            self.events.lock().unwrap().iter().position(|e| e.id == *id)
        }
    }

    impl EventStore for FakeStore {
        fn list(&self) -> impl Future<Output = Result<Vec<Event>, EventBoardError>> + Send {
            let events = self.events.lock().unwrap().clone();
            async { Ok(events) }
        }

        fn add(&self, draft: NewEvent) -> impl Future<Output = Result<Event, EventBoardError>> + Send {
            let mut issued = self.issued.lock().unwrap();
            *issued += 1;
            let event = Event::from_draft(EventId::from_sequence(*issued), draft);
            self.events.lock().unwrap().push(event.clone());
            async { Ok(event) }
        }

        fn get_by_id(
            &self,
            id: &EventId,
        ) -> impl Future<Output = Result<Option<Event>, EventBoardError>> + Send {
            let found = self
                .position(id)
                .map(|i| self.events.lock().unwrap()[i].clone());
            async { Ok(found) }
        }

        fn find_by_title(
            &self,
            title: &str,
        ) -> impl Future<Output = Result<Vec<Event>, EventBoardError>> + Send {
            let needle = title.to_lowercase();
            let found: Vec<Event> = self
                .events
                .lock()
                .unwrap()
                .iter()
                .filter(|e| e.title.to_lowercase().contains(&needle))
                .cloned()
                .collect();
            async { Ok(found) }
        }

        fn update(
            &self,
            id: &EventId,
            patch: EventPatch,
        ) -> impl Future<Output = Result<Event, EventBoardError>> + Send {
            let result = match self.position(id) {
                Some(i) => {
                    let mut events = self.events.lock().unwrap();
                    events[i].merge(patch);
                    Ok(events[i].clone())
                }
                None => Err(NotFoundError::event(id.as_str()).into()),
            };
            async { result }
        }

        fn delete(
            &self,
            id: &EventId,
        ) -> impl Future<Output = Result<Event, EventBoardError>> + Send {
            let result = match self.position(id) {
                Some(i) => Ok(self.events.lock().unwrap().remove(i)),
                None => Err(NotFoundError::event(id.as_str()).into()),
            };
            async { result }
        }

        fn increment_reaction(
            &self,
            id: &EventId,
            kind: ReactionKind,
        ) -> impl Future<Output = Result<Event, EventBoardError>> + Send {
            let result = match self.position(id) {
                Some(i) => {
                    let mut events = self.events.lock().unwrap();
                    events[i].react(kind);
                    Ok(events[i].clone())
                }
                None => Err(NotFoundError::event(id.as_str()).into()),
            };
            async { result }
        }

        fn count(
            &self,
            _include_tombstones: bool,
        ) -> impl Future<Output = Result<usize, EventBoardError>> + Send {
            let len = self.events.lock().unwrap().len();
            async move { Ok(len) }
        }
    }

    fn make_service() -> EventService<FakeStore> {
        EventService::new(FakeStore::default())
    }

    fn events_of(reply: &StoreReply) -> &[Event] {
        match reply {
            StoreReply::Listing { events } => events,
            other => panic!("expected listing, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn should_answer_with_full_listing_after_add_by_default() {
        let svc = make_service();
        svc.add_event(NewEvent::new("first", "a"), ReturnShape::default())
            .await
            .unwrap();

        let reply = svc
            .add_event(NewEvent::new("second", "b"), ReturnShape::default())
            .await
            .unwrap();

        let events = events_of(&reply);
        assert_eq!(events.len(), 2);
        assert_eq!(events[1].title, "second");
    }

    #[tokio::test]
    async fn should_answer_with_created_record_when_record_shape_requested() {
        let svc = make_service();
        let reply = svc
            .add_event(NewEvent::new("solo", "s"), ReturnShape::Record)
            .await
            .unwrap();

        let StoreReply::Record { event } = reply else {
            panic!("expected single record");
        };
        assert_eq!(event.title, "solo");
        assert_eq!(event.likes, 0);
        assert_eq!(event.dislikes, 0);
    }

    #[tokio::test]
    async fn should_answer_null_event_when_lookup_misses() {
        let svc = make_service();
        let lookup = svc.get_event(&EventId::new("404")).await.unwrap();
        assert!(lookup.event.is_none());

        let json = serde_json::to_value(&lookup).unwrap();
        assert!(json["event"].is_null());
    }

    #[tokio::test]
    async fn should_merge_patch_and_relist_on_update() {
        let svc = make_service();
        svc.add_event(NewEvent::new("original", "desc"), ReturnShape::Record)
            .await
            .unwrap();

        let reply = svc
            .update_event(
                &EventId::new("1"),
                EventPatch {
                    title: Some("renamed".to_owned()),
                    ..EventPatch::default()
                },
                ReturnShape::default(),
            )
            .await
            .unwrap();

        let events = events_of(&reply);
        assert_eq!(events[0].title, "renamed");
        assert_eq!(events[0].description, "desc");
    }

    #[tokio::test]
    async fn should_return_not_found_when_updating_missing_id() {
        let svc = make_service();
        let result = svc
            .update_event(
                &EventId::new("9"),
                EventPatch::default(),
                ReturnShape::default(),
            )
            .await;
        assert!(matches!(result, Err(EventBoardError::NotFound(_))));
    }

    #[tokio::test]
    async fn should_ignore_unknown_reaction_kind_and_return_listing() {
        let svc = make_service();
        svc.add_event(NewEvent::new("calm", "c"), ReturnShape::Record)
            .await
            .unwrap();

        let reply = svc
            .react(&EventId::new("1"), "neutral", ReturnShape::default())
            .await
            .unwrap();

        let events = events_of(&reply);
        assert_eq!(events[0].likes, 0);
        assert_eq!(events[0].dislikes, 0);
    }

    #[tokio::test]
    async fn should_count_two_likes_when_reacting_twice() {
        let svc = make_service();
        svc.add_event(NewEvent::new("popular", "p"), ReturnShape::Record)
            .await
            .unwrap();
        let id = EventId::new("1");

        svc.react(&id, "likes", ReturnShape::default()).await.unwrap();
        let reply = svc.react(&id, "likes", ReturnShape::default()).await.unwrap();

        assert_eq!(events_of(&reply)[0].likes, 2);
    }

    #[tokio::test]
    async fn should_match_title_case_insensitively() {
        let svc = make_service();
        svc.add_event(NewEvent::new("an event", "x"), ReturnShape::Record)
            .await
            .unwrap();

        let reply = svc.find_by_title("EVENT").await.unwrap();
        assert_eq!(events_of(&reply).len(), 1);
    }

    #[tokio::test]
    async fn should_serialize_deleted_event_envelope() {
        let svc = make_service();
        svc.add_event(NewEvent::new("doomed", "d"), ReturnShape::Record)
            .await
            .unwrap();

        let reply = svc
            .delete_event(&EventId::new("1"), ReturnShape::Record)
            .await
            .unwrap();

        let json = serde_json::to_value(&reply).unwrap();
        assert_eq!(json["deletedEvent"]["title"], "doomed");
    }

    #[tokio::test]
    async fn should_serialize_listing_envelope_under_events_key() {
        let svc = make_service();
        let reply = svc.list_events().await.unwrap();
        let json = serde_json::to_value(&reply).unwrap();
        assert!(json["events"].is_array());
    }
}
