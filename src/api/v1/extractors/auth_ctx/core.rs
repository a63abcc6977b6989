use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::error::AppError;

use super::AuthCtx;

/// Extractor that gives a handler the `AuthCtx`.
/// Relies on the access gate having inserted it into request extensions;
/// if it is missing (route mounted without the gate) the request is rejected with 401.
pub struct AuthCtxExtractor(pub AuthCtx);

impl<S> FromRequestParts<S> for AuthCtxExtractor
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthCtx>()
            .copied()
            .map(AuthCtxExtractor)
            .ok_or(AppError::Unauthorized)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{Request, StatusCode};

    #[tokio::test]
    async fn reads_context_from_extensions() {
        let (mut parts, _) = Request::builder()
            .extension(AuthCtx::new(12))
            .body(())
            .unwrap()
            .into_parts();

        let AuthCtxExtractor(ctx) = AuthCtxExtractor::from_request_parts(&mut parts, &())
            .await
            .unwrap();
        assert_eq!(ctx.user_id, 12);
    }

    #[tokio::test]
    async fn missing_context_is_unauthorized() {
        let (mut parts, _) = Request::builder().body(()).unwrap().into_parts();

        let err = AuthCtxExtractor::from_request_parts(&mut parts, &())
            .await
            .err()
            .unwrap();
        assert_eq!(err.status(), StatusCode::UNAUTHORIZED);
    }
}
