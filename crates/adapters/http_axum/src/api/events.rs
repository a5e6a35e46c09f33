//! JSON REST handlers for events.
//!
//! Every mutating endpoint answers with the full `{"events": [...]}`
//! listing, so clients always see a consistent collection after a write.

use axum::Json;
use axum::extract::{Path, State};

use eventboard_app::ports::EventStore;
use eventboard_app::services::event_service::{ReturnShape, StoreReply};
use eventboard_domain::event::{EventPatch, NewEvent};
use eventboard_domain::id::EventId;

use crate::error::ApiError;
use crate::state::AppState;

/// `GET /events`
pub async fn list<S>(State(state): State<AppState<S>>) -> Result<Json<StoreReply>, ApiError>
where
    S: EventStore + Send + Sync + 'static,
{
    let reply = state.event_service.list_events().await?;
    Ok(Json(reply))
}

/// `POST /event`
pub async fn create<S>(
    State(state): State<AppState<S>>,
    Json(draft): Json<NewEvent>,
) -> Result<Json<StoreReply>, ApiError>
where
    S: EventStore + Send + Sync + 'static,
{
    let reply = state
        .event_service
        .add_event(draft, ReturnShape::default())
        .await?;
    Ok(Json(reply))
}

/// `PUT /event/{id}`
pub async fn update<S>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
    Json(patch): Json<EventPatch>,
) -> Result<Json<StoreReply>, ApiError>
where
    S: EventStore + Send + Sync + 'static,
{
    let reply = state
        .event_service
        .update_event(&EventId::new(id), patch, ReturnShape::default())
        .await?;
    Ok(Json(reply))
}

/// `PUT /event/like/{id}`
pub async fn like<S>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
) -> Result<Json<StoreReply>, ApiError>
where
    S: EventStore + Send + Sync + 'static,
{
    let reply = state
        .event_service
        .react(&EventId::new(id), "likes", ReturnShape::default())
        .await?;
    Ok(Json(reply))
}

/// `PUT /event/dislike/{id}`
pub async fn dislike<S>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
) -> Result<Json<StoreReply>, ApiError>
where
    S: EventStore + Send + Sync + 'static,
{
    let reply = state
        .event_service
        .react(&EventId::new(id), "dislikes", ReturnShape::default())
        .await?;
    Ok(Json(reply))
}

/// `DELETE /event/{id}`
pub async fn remove<S>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
) -> Result<Json<StoreReply>, ApiError>
where
    S: EventStore + Send + Sync + 'static,
{
    let reply = state
        .event_service
        .delete_event(&EventId::new(id), ReturnShape::default())
        .await?;
    Ok(Json(reply))
}
