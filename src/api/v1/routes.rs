/*
 * Responsibility
 * - v1 URL layout
 * - decides which routes sit behind the access gate (only event creation)
 */
use axum::{
    Router,
    routing::{get, post},
};

use crate::api::v1::handlers::{
    events::{create_event, get_event, list_events},
    users::{login, signup},
};
use crate::middleware;
use crate::state::AppState;

pub fn routes(state: AppState) -> Router<AppState> {
    let create = middleware::auth::access::apply(post(create_event), state.auth.clone());

    Router::new()
        .route("/events", get(list_events).merge(create))
        .route("/events/{event_id}", get(get_event))
        .route("/signup", post(signup))
        .route("/login", post(login))
}
