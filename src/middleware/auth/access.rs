//! Access-token gate: `Authorization` header → verify → `AuthCtx` in request extensions.
//!
//! - The header carries the raw credential (no `Bearer ` scheme); existing clients send it that way.
//! - Missing credential and every verification failure produce the same
//!   401 `{"message": "Not Authorized"}`. The reason is logged, never returned.
//! - On success the subject id is stored as `AuthCtx` and the next stage runs.

use std::sync::Arc;

use axum::{
    body::Body,
    extract::State,
    http::{Request, header},
    middleware::{self, Next},
    response::Response,
    routing::MethodRouter,
};

use crate::api::v1::extractors::AuthCtx;
use crate::error::AppError;
use crate::services::auth::{AccessJwtError, AuthService};

/// Put the gate in front of the method handlers of `route`.
///
/// Gated per method, so public methods merged onto the same path stay open
/// and an unmatched method still answers 405 instead of 401.
///
/// ```ignore
/// let create = middleware::auth::access::apply(post(create_event), state.auth.clone());
/// Router::new().route("/events", get(list_events).merge(create))
/// ```
pub fn apply<S>(route: MethodRouter<S>, auth: Arc<AuthService>) -> MethodRouter<S>
where
    S: Clone + Send + Sync + 'static,
{
    route.route_layer(middleware::from_fn_with_state(auth, access_middleware))
}

/// Raw credential from the `Authorization` header; absent, empty or non-UTF-8 counts as missing.
fn credential_from(req: &Request<Body>) -> Result<&str, AccessJwtError> {
    req.headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty())
        .ok_or(AccessJwtError::MissingCredential)
}

async fn access_middleware(
    State(auth): State<Arc<AuthService>>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let verified = credential_from(&req).and_then(|token| auth.verify(token));

    let user_id = match verified {
        Ok(user_id) => user_id,
        Err(err) => {
            tracing::warn!(
                error = %err,
                method = %req.method(),
                path = %req.uri().path(),
                "access token rejected"
            );
            return Err(AppError::Unauthorized);
        }
    };

    // middleware → extractor handoff
    req.extensions_mut().insert(AuthCtx::new(user_id));

    Ok(next.run(req).await)
}
