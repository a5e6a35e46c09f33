//! Use-case services driving the ports.

pub mod event_service;

pub use event_service::{EventLookup, EventService, ReturnShape, StoreReply};
