//! # eventboard-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define the **port trait** that storage adapters must implement
//!   (driven/outbound port): [`ports::EventStore`]
//! - Provide the use-case layer: [`services::event_service::EventService`],
//!   which owns the observable reply contract — the `{events: [...]}`
//!   versus `{event: ...}` envelopes, the re-list-after-mutation default,
//!   and the unknown-reaction-kind no-op policy
//! - Orchestrate domain objects without knowing *how* persistence works
//!
//! ## Dependency rule
//! Depends on `eventboard-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the
//! reverse.

pub mod ports;
pub mod services;
