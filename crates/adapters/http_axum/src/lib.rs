//! # eventboard-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the JSON REST surface for the events resource
//!   (`/events`, `/event`, `/event/like/{id}`, …)
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map application results and errors into HTTP responses
//!
//! ## Dependency rule
//! Depends on `eventboard-app` (for the port trait and service) and
//! `eventboard-domain` (for domain types used in request/response
//! mapping). Never leaks axum types into the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;
