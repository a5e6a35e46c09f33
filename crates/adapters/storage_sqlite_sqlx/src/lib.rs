//! # eventboard-adapter-storage-sqlite-sqlx
//!
//! `SQLite` persistence adapter using [sqlx](https://docs.rs/sqlx).
//!
//! ## Responsibilities
//! - Implement the event-store port defined in `eventboard-app::ports`
//!   against a document-style `events` table (one row per event, opaque
//!   UUID string keys)
//! - Manage `SQLite` connection pool lifecycle
//! - Run database migrations (sqlx embedded migrations)
//! - Map between the domain [`Event`](eventboard_domain::event::Event)
//!   and database rows
//!
//! ## Dependency rule
//! Depends on `eventboard-app` (for the port trait) and
//! `eventboard-domain` (for domain types). The `app` and `domain` crates
//! must never reference this adapter.

pub mod error;
pub mod event_store;
pub mod pool;

pub use error::StorageError;
pub use event_store::{ListOrder, SqliteEventStore};
pub use pool::{Config, Database};
