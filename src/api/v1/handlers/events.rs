/*
 * Responsibility
 * - /events handlers
 * - create_event sits behind the access gate and takes the creator from AuthCtx
 */
use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
};

use crate::{
    api::v1::{
        dto::events::{CreateEventRequest, EventResponse},
        extractors::AuthCtxExtractor,
    },
    error::AppError,
    state::AppState,
};

pub async fn list_events(
    State(state): State<AppState>,
) -> Result<Json<Vec<EventResponse>>, AppError> {
    let rows = state.events.get_all().await?;

    Ok(Json(rows.into_iter().map(EventResponse::from).collect()))
}

pub async fn get_event(
    State(state): State<AppState>,
    event_id: Result<Path<i64>, PathRejection>,
) -> Result<Json<EventResponse>, AppError> {
    let Path(event_id) = event_id.map_err(|_| AppError::invalid_request("invalid event id"))?;

    let row = state
        .events
        .get(event_id)
        .await?
        .ok_or(AppError::NotFound("event"))?;

    Ok(Json(row.into()))
}

pub async fn create_event(
    State(state): State<AppState>,
    AuthCtxExtractor(auth): AuthCtxExtractor,
    payload: Result<Json<CreateEventRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<EventResponse>), AppError> {
    let Json(req) = payload.map_err(|e| {
        tracing::debug!(error = %e, "rejected event payload");
        AppError::invalid_request("Could not parse request data.")
    })?;
    req.validate().map_err(AppError::invalid_request)?;

    let row = state.events.save(req.into_new_event(auth.user_id)).await?;
    tracing::info!(event_id = row.id, user_id = auth.user_id, "event created");

    Ok((StatusCode::CREATED, Json(row.into())))
}
