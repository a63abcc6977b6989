use chrono::{DateTime, Utc};
use jsonwebtoken::{Algorithm, EncodingKey, Header};
use serde::Serialize;
use tracing::error;

use crate::error::AppError;
use crate::services::auth::secret::SigningSecret;

/// Lifetime of every access token (2 hours).
pub const ACCESS_TOKEN_TTL_SECONDS: i64 = 2 * 60 * 60;

/// Wire claims. Exactly three entries; `email` is informational only.
#[derive(Debug, Serialize)]
struct AccessTokenClaims<'a> {
    email: &'a str,
    #[serde(rename = "userId")]
    user_id: i64,
    exp: i64,
}

/// HS256 access-token issuer.
#[derive(Clone)]
pub struct JwtIssuer {
    encoding_key: EncodingKey,
}

impl std::fmt::Debug for JwtIssuer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Do not print key material
        f.debug_struct("JwtIssuer")
            .field("algorithm", &Algorithm::HS256)
            .field("ttl_seconds", &ACCESS_TOKEN_TTL_SECONDS)
            .finish()
    }
}

impl JwtIssuer {
    pub fn new(secret: &SigningSecret) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
        }
    }

    pub fn issue(&self, email: &str, user_id: i64) -> Result<String, AppError> {
        self.issue_at(email, user_id, Utc::now())
    }

    /// Issue a token as if it were minted at `issued_at`.
    pub fn issue_at(
        &self,
        email: &str,
        user_id: i64,
        issued_at: DateTime<Utc>,
    ) -> Result<String, AppError> {
        let claims = AccessTokenClaims {
            email,
            user_id,
            exp: issued_at.timestamp() + ACCESS_TOKEN_TTL_SECONDS,
        };

        let mut header = Header::new(Algorithm::HS256);
        header.typ = Some("JWT".to_string());
        jsonwebtoken::encode(&header, &claims, &self.encoding_key).map_err(|e| {
            error!(error = %e, "failed to sign JWT");
            AppError::Internal
        })
    }
}
