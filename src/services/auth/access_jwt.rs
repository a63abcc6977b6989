use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::Utc;
use jsonwebtoken::{Algorithm, DecodingKey, Validation, errors::ErrorKind};
use serde::Deserialize;
use thiserror::Error;

use crate::services::auth::secret::SigningSecret;

/// Algorithms the verifier accepts: the HMAC-SHA2 family only.
const ACCEPTED_ALGORITHMS: [Algorithm; 3] = [Algorithm::HS256, Algorithm::HS384, Algorithm::HS512];

// Errors returned by access-token verification.
// They all become the same 401 at the HTTP boundary.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AccessJwtError {
    #[error("missing credential")]
    MissingCredential,
    #[error("malformed credential")]
    MalformedCredential,
    #[error("unsupported algorithm '{0}'")]
    UnsupportedAlgorithm(String),
    #[error("invalid signature")]
    InvalidSignature,
    #[error("credential expired")]
    Expired,
    #[error("missing or invalid '{0}' claim")]
    MalformedClaims(&'static str),
}

impl From<jsonwebtoken::errors::Error> for AccessJwtError {
    fn from(e: jsonwebtoken::errors::Error) -> Self {
        match e.kind() {
            ErrorKind::InvalidSignature => Self::InvalidSignature,
            ErrorKind::ExpiredSignature => Self::Expired,
            // Signature already checked out: the payload itself is not a claim object.
            ErrorKind::Json(_) => Self::MalformedClaims("payload"),
            ErrorKind::MissingRequiredClaim(_) => Self::MalformedClaims("exp"),
            _ => Self::MalformedCredential,
        }
    }
}

/// Only the declared algorithm is read before the signature is checked. Kept as
/// a plain string so names unknown to `jsonwebtoken` (`none`, `ES512`, ...) are
/// reported as unsupported rather than unparseable.
#[derive(Debug, Deserialize)]
struct RawHeader {
    alg: String,
}

/// Declared algorithm of a compact `header.payload.signature` token.
fn declared_algorithm(token: &str) -> Result<String, AccessJwtError> {
    let mut segments = token.split('.');
    let (Some(header), Some(_), Some(_), None) =
        (segments.next(), segments.next(), segments.next(), segments.next())
    else {
        return Err(AccessJwtError::MalformedCredential);
    };

    let bytes = URL_SAFE_NO_PAD
        .decode(header)
        .map_err(|_| AccessJwtError::MalformedCredential)?;
    let header: RawHeader =
        serde_json::from_slice(&bytes).map_err(|_| AccessJwtError::MalformedCredential)?;
    Ok(header.alg)
}

/// Claims as they arrive on the wire. Both fields are checked by hand so a
/// missing or mistyped value surfaces as `MalformedClaims` instead of a
/// decoding error.
#[derive(Debug, Clone, Deserialize)]
struct RawClaims {
    #[serde(default)]
    exp: Option<serde_json::Value>,
    #[serde(default, rename = "userId")]
    user_id: Option<serde_json::Value>,
}

/// Accepts JSON integers, and floats with no fractional part inside the i64 range.
fn integer_claim(value: &serde_json::Value) -> Option<i64> {
    if let Some(n) = value.as_i64() {
        return Some(n);
    }
    let f = value.as_f64()?;
    if f.is_finite() && f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64 {
        Some(f as i64)
    } else {
        None
    }
}

/// HMAC access-token verifier.
#[derive(Clone)]
pub struct AccessTokenVerifier {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl std::fmt::Debug for AccessTokenVerifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Do not print key material
        f.debug_struct("AccessTokenVerifier")
            .field("validation", &self.validation)
            .finish()
    }
}

impl AccessTokenVerifier {
    pub fn new(secret: &SigningSecret) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.algorithms = ACCEPTED_ALGORITHMS.to_vec();
        // Expiry is enforced in `verify_at` (strictly in the future, no leeway).
        validation.validate_exp = false;
        validation.validate_nbf = false;
        validation.validate_aud = false;
        validation.leeway = 0;
        validation.required_spec_claims.clear();

        Self {
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        }
    }

    pub fn verify(&self, token: &str) -> Result<i64, AccessJwtError> {
        self.verify_at(token, Utc::now().timestamp())
    }

    /// Verify `token` against the clock value `now` (Unix seconds) and return the subject id.
    ///
    /// Checks run in order: structure, algorithm, signature, `exp`, `userId`.
    pub fn verify_at(&self, token: &str, now: i64) -> Result<i64, AccessJwtError> {
        if token.is_empty() {
            return Err(AccessJwtError::MissingCredential);
        }

        let alg = declared_algorithm(token)?;
        match alg.parse::<Algorithm>() {
            Ok(known) if ACCEPTED_ALGORITHMS.contains(&known) => {}
            _ => return Err(AccessJwtError::UnsupportedAlgorithm(alg)),
        }

        let claims =
            jsonwebtoken::decode::<RawClaims>(token, &self.decoding_key, &self.validation)?.claims;

        let exp = claims
            .exp
            .as_ref()
            .and_then(integer_claim)
            .ok_or(AccessJwtError::MalformedClaims("exp"))?;
        if exp <= now {
            return Err(AccessJwtError::Expired);
        }

        claims
            .user_id
            .as_ref()
            .and_then(integer_claim)
            .ok_or(AccessJwtError::MalformedClaims("userId"))
    }
}
