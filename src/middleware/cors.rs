//! CORS policy for browser clients.
//!
//! - Development: any origin, no credentials.
//! - Production: exact-match allowlist from `CORS_ALLOWED_ORIGINS`; empty list allows none.
//!
//! `Authorization` must be an allowed request header, since the access gate reads it.

use std::time::Duration;

use axum::Router;
use axum::http::{HeaderName, HeaderValue, Method, header};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use crate::config::Config;
use crate::middleware::http::REQUEST_ID_HEADER;

const PREFLIGHT_MAX_AGE: Duration = Duration::from_secs(10 * 60);

pub fn apply(router: Router, config: &Config) -> Router {
    router.layer(layer(config))
}

fn layer(config: &Config) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(allow_origin(config))
        // the API only reads and creates
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([
            header::AUTHORIZATION,
            header::CONTENT_TYPE,
            header::ACCEPT,
            HeaderName::from_static(REQUEST_ID_HEADER),
        ])
        .max_age(PREFLIGHT_MAX_AGE)
}

fn allow_origin(config: &Config) -> AllowOrigin {
    if !config.app_env.is_production() {
        return Any.into();
    }

    let allowed: Vec<HeaderValue> = config
        .cors_allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "ignoring unusable CORS origin");
                None
            }
        })
        .collect();

    AllowOrigin::predicate(move |origin: &HeaderValue, _req| allowed.iter().any(|v| v == origin))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    use axum::{body::Body, http::Request, routing::post};
    use tower::ServiceExt;

    fn config(pairs: &[(&str, &str)]) -> Config {
        let mut map: HashMap<&str, &str> = pairs.iter().copied().collect();
        map.insert("JWT_SECRET", "cors-test-secret-0123456789-abcdef");
        Config::from_lookup(|key| map.get(key).map(|v| v.to_string())).unwrap()
    }

    // Preflight for an authenticated event creation from `origin`
    async fn preflight(config: &Config, origin: &str) -> Option<HeaderValue> {
        let router = apply(Router::new().route("/events", post(|| async {})), config);
        let req = Request::builder()
            .method(Method::OPTIONS)
            .uri("/events")
            .header(header::ORIGIN, origin)
            .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
            .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "authorization")
            .body(Body::empty())
            .unwrap();

        let res = router.oneshot(req).await.unwrap();
        res.headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .cloned()
    }

    #[tokio::test]
    async fn development_allows_any_origin() {
        let config = config(&[]);
        assert_eq!(
            preflight(&config, "http://localhost:3000").await,
            Some(HeaderValue::from_static("*"))
        );
    }

    #[tokio::test]
    async fn production_allows_only_listed_origins() {
        let config = config(&[
            ("APP_ENV", "production"),
            ("CORS_ALLOWED_ORIGINS", "https://app.example"),
        ]);

        assert_eq!(
            preflight(&config, "https://app.example").await,
            Some(HeaderValue::from_static("https://app.example"))
        );
        assert_eq!(preflight(&config, "https://evil.example").await, None);
    }

    #[tokio::test]
    async fn production_with_empty_allowlist_allows_none() {
        let config = config(&[("APP_ENV", "production")]);
        assert_eq!(preflight(&config, "https://app.example").await, None);
    }
}
