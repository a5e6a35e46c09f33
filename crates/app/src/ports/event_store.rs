//! Event store port — the pluggable persistence boundary.

use std::future::Future;

use eventboard_domain::error::EventBoardError;
use eventboard_domain::event::{Event, EventPatch, NewEvent, ReactionKind};
use eventboard_domain::id::EventId;

/// Backend-agnostic storage for [`Event`]s.
///
/// Both adapters (in-memory and SQLite) must behave identically through
/// this trait so the HTTP layer never needs to know which one it talks
/// to. Operations return plain domain values; the reply envelopes are
/// applied uniformly by the service layer.
///
/// Absent ids are a normal outcome for [`get_by_id`](Self::get_by_id) and
/// an empty vec for [`find_by_title`](Self::find_by_title); for the
/// mutating operations they are an [`EventBoardError::NotFound`].
pub trait EventStore {
    /// All live events, in the adapter's listing order.
    fn list(&self) -> impl Future<Output = Result<Vec<Event>, EventBoardError>> + Send;

    /// Persist a draft under a freshly issued identifier.
    ///
    /// Counters start at zero regardless of the caller's input.
    fn add(&self, draft: NewEvent) -> impl Future<Output = Result<Event, EventBoardError>> + Send;

    /// Look up a single event. `None` is success, not an error.
    fn get_by_id(
        &self,
        id: &EventId,
    ) -> impl Future<Output = Result<Option<Event>, EventBoardError>> + Send;

    /// Case-insensitive substring match against event titles.
    fn find_by_title(
        &self,
        title: &str,
    ) -> impl Future<Output = Result<Vec<Event>, EventBoardError>> + Send;

    /// Shallow-merge `patch` over the stored record and return the result.
    fn update(
        &self,
        id: &EventId,
        patch: EventPatch,
    ) -> impl Future<Output = Result<Event, EventBoardError>> + Send;

    /// Remove the event and return it. The in-memory adapter tombstones
    /// the slot instead of compacting the backing sequence.
    fn delete(
        &self,
        id: &EventId,
    ) -> impl Future<Output = Result<Event, EventBoardError>> + Send;

    /// Add exactly one to the named counter, defaulting a missing value
    /// to zero, and return the updated record.
    ///
    /// This is a read-modify-write without a concurrency guard in both
    /// adapters: two concurrent calls against the same id can lose an
    /// update. Counters are best-effort, not exact.
    fn increment_reaction(
        &self,
        id: &EventId,
        kind: ReactionKind,
    ) -> impl Future<Output = Result<Event, EventBoardError>> + Send;

    /// Number of stored events. When `include_tombstones` is false only
    /// live events are counted; backends without tombstones ignore the
    /// flag.
    fn count(
        &self,
        include_tombstones: bool,
    ) -> impl Future<Output = Result<usize, EventBoardError>> + Send;
}
