use crate::error::AppError;
use crate::services::auth::{
    access_jwt::{AccessJwtError, AccessTokenVerifier},
    jwt::JwtIssuer,
    secret::SigningSecret,
};

/// Service that pairs access-token issuance and verification over one secret.
///
/// - JwtIssuer mints credentials at login.
/// - AccessTokenVerifier is what the request gate calls.
#[derive(Clone, Debug)]
pub struct AuthService {
    issuer: JwtIssuer,
    verifier: AccessTokenVerifier,
}

impl AuthService {
    pub fn new(secret: &SigningSecret) -> Self {
        Self {
            issuer: JwtIssuer::new(secret),
            verifier: AccessTokenVerifier::new(secret),
        }
    }

    /// Issue an access token for an authenticated user.
    pub fn issue_access_token(&self, email: &str, user_id: i64) -> Result<String, AppError> {
        self.issuer.issue(email, user_id)
    }

    /// Verify an access token and return the subject id it carries.
    pub fn verify(&self, token: &str) -> Result<i64, AccessJwtError> {
        self.verifier.verify(token)
    }
}
