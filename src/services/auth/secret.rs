use std::fmt;

use thiserror::Error;

/// Symmetric key shared by the access-token issuer and verifier.
///
/// Built once in the bootstrap path and handed to both sides. Key material is
/// never printable via `Debug`.
#[derive(Clone)]
pub struct SigningSecret(Vec<u8>);

#[derive(Debug, Error, PartialEq, Eq)]
#[error("signing secret must not be empty")]
pub struct EmptySecret;

impl SigningSecret {
    pub fn new(secret: impl Into<Vec<u8>>) -> Result<Self, EmptySecret> {
        let bytes = secret.into();
        if bytes.is_empty() {
            return Err(EmptySecret);
        }
        Ok(Self(bytes))
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for SigningSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SigningSecret").field(&"<redacted>").finish()
    }
}
