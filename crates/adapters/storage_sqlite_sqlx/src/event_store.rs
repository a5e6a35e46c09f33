//! `SQLite` implementation of [`EventStore`] — a document-style table
//! with one row per event and opaque string keys.

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use eventboard_app::ports::EventStore;
use eventboard_domain::error::{EventBoardError, NotFoundError};
use eventboard_domain::event::{Event, EventPatch, NewEvent, ReactionKind};
use eventboard_domain::id::EventId;

use crate::error::StorageError;

/// Wrapper for converting database rows into domain [`Event`]s.
struct Wrapper(Event);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<Event> {
        value.map(|w| w.0)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: String = row.try_get("id")?;
        let title: String = row.try_get("title")?;
        let description: String = row.try_get("description")?;
        let location: String = row.try_get("location")?;
        let event_date: String = row.try_get("event_date")?;
        let likes: i64 = row.try_get("likes")?;
        let dislikes: i64 = row.try_get("dislikes")?;

        let likes = u32::try_from(likes).map_err(|err| sqlx::Error::Decode(Box::new(err)))?;
        let dislikes = u32::try_from(dislikes).map_err(|err| sqlx::Error::Decode(Box::new(err)))?;

        Ok(Self(Event {
            id: EventId::new(id),
            title,
            description,
            location,
            event_date,
            likes,
            dislikes,
        }))
    }
}

const INSERT: &str = r"
    INSERT INTO events (id, title, description, location, event_date, likes, dislikes, created_at)
    VALUES (?, ?, ?, ?, ?, ?, ?, ?)
";
const SELECT_BY_CREATED_AT: &str = "SELECT * FROM events ORDER BY created_at DESC";
const SELECT_BY_EVENT_DATE: &str = "SELECT * FROM events ORDER BY event_date DESC";
const SELECT_BY_ID: &str = "SELECT * FROM events WHERE id = ?";
const SELECT_BY_TITLE: &str = "SELECT * FROM events WHERE title LIKE ? ORDER BY created_at DESC";
const UPDATE_FIELDS: &str =
    "UPDATE events SET title = ?, description = ?, location = ?, event_date = ? WHERE id = ?";
const UPDATE_REACTIONS: &str = "UPDATE events SET likes = ?, dislikes = ? WHERE id = ?";
const DELETE_BY_ID: &str = "DELETE FROM events WHERE id = ?";
const COUNT_ALL: &str = "SELECT COUNT(*) FROM events";

/// Which column [`SqliteEventStore::list`] orders by, newest first.
///
/// The sort column is selectable rather than hardcoded: `created_at` is a
/// store-managed insertion timestamp (the default), `event_date` is the
/// caller-supplied free-text date.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ListOrder {
    /// Order by insertion timestamp, newest first.
    #[default]
    CreatedAtDesc,
    /// Order by the caller-supplied `eventDate` text, newest first.
    EventDateDesc,
}

impl ListOrder {
    fn query(self) -> &'static str {
        match self {
            Self::CreatedAtDesc => SELECT_BY_CREATED_AT,
            Self::EventDateDesc => SELECT_BY_EVENT_DATE,
        }
    }
}

/// `SQLite`-backed event store.
///
/// Every operation is one or more round trips to the pool; mutations are
/// point writes without transactions. Keys are random UUIDs, so id
/// stability needs no tombstoning — deletes remove the row.
pub struct SqliteEventStore {
    pool: SqlitePool,
    order: ListOrder,
}

impl SqliteEventStore {
    /// Create a new event store using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            pool,
            order: ListOrder::default(),
        }
    }

    /// Override the listing order.
    #[must_use]
    pub fn with_order(mut self, order: ListOrder) -> Self {
        self.order = order;
        self
    }

    async fn fetch(&self, id: &EventId) -> Result<Option<Event>, StorageError> {
        let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
            .bind(id.as_str())
            .fetch_optional(&self.pool)
            .await?;
        Ok(Wrapper::maybe(row))
    }
}

impl EventStore for SqliteEventStore {
    async fn list(&self) -> Result<Vec<Event>, EventBoardError> {
        let rows: Vec<Wrapper> = sqlx::query_as(self.order.query())
            .fetch_all(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(rows.into_iter().map(|w| w.0).collect())
    }

    async fn add(&self, draft: NewEvent) -> Result<Event, EventBoardError> {
        let id = EventId::new(uuid::Uuid::new_v4().to_string());
        let event = Event::from_draft(id, draft);

        sqlx::query(INSERT)
            .bind(event.id.as_str())
            .bind(&event.title)
            .bind(&event.description)
            .bind(&event.location)
            .bind(&event.event_date)
            .bind(i64::from(event.likes))
            .bind(i64::from(event.dislikes))
            .bind(chrono::Utc::now().to_rfc3339())
            .execute(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(event)
    }

    async fn get_by_id(&self, id: &EventId) -> Result<Option<Event>, EventBoardError> {
        Ok(self.fetch(id).await?)
    }

    async fn find_by_title(&self, title: &str) -> Result<Vec<Event>, EventBoardError> {
        // SQLite LIKE is case-insensitive for ASCII.
        let rows: Vec<Wrapper> = sqlx::query_as(SELECT_BY_TITLE)
            .bind(format!("%{title}%"))
            .fetch_all(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(rows.into_iter().map(|w| w.0).collect())
    }

    async fn update(&self, id: &EventId, patch: EventPatch) -> Result<Event, EventBoardError> {
        let Some(mut event) = self.fetch(id).await? else {
            return Err(NotFoundError::event(id.as_str()).into());
        };
        event.merge(patch);

        sqlx::query(UPDATE_FIELDS)
            .bind(&event.title)
            .bind(&event.description)
            .bind(&event.location)
            .bind(&event.event_date)
            .bind(event.id.as_str())
            .execute(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(event)
    }

    async fn delete(&self, id: &EventId) -> Result<Event, EventBoardError> {
        let Some(event) = self.fetch(id).await? else {
            return Err(NotFoundError::event(id.as_str()).into());
        };

        sqlx::query(DELETE_BY_ID)
            .bind(id.as_str())
            .execute(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(event)
    }

    async fn increment_reaction(
        &self,
        id: &EventId,
        kind: ReactionKind,
    ) -> Result<Event, EventBoardError> {
        // Read-modify-write across two round trips, no transaction:
        // concurrent increments against the same id can lose an update
        // (last write wins on both counters). Counters are best-effort.
        let Some(mut event) = self.fetch(id).await? else {
            return Err(NotFoundError::event(id.as_str()).into());
        };
        event.react(kind);

        sqlx::query(UPDATE_REACTIONS)
            .bind(i64::from(event.likes))
            .bind(i64::from(event.dislikes))
            .bind(event.id.as_str())
            .execute(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(event)
    }

    async fn count(&self, _include_tombstones: bool) -> Result<usize, EventBoardError> {
        // Row deletes leave no tombstones; both flags count the same rows.
        let count: i64 = sqlx::query_scalar(COUNT_ALL)
            .fetch_one(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(usize::try_from(count).unwrap_or_default())
    }
}
