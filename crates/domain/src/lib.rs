//! # eventboard-domain
//!
//! Pure domain model for the eventboard CRUD backend.
//!
//! ## Responsibilities
//! - Foundational types: the opaque [`EventId`](id::EventId), error conventions
//! - Define the **Event** record and its creation/merge rules
//! - Define the [`NewEvent`](event::NewEvent) draft and the
//!   [`EventPatch`](event::EventPatch) partial update
//! - Define [`ReactionKind`](event::ReactionKind) — the two counters an
//!   event carries
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod event;
pub mod id;
