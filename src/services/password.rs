/*
 * Responsibility
 * - bcrypt hashing / verification of account passwords
 * - runs on the blocking pool so async workers are not stalled
 */
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PasswordError {
    #[error("bcrypt error: {0}")]
    Bcrypt(#[from] bcrypt::BcryptError),

    #[error("password task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

#[derive(Clone, Copy, Debug)]
pub struct PasswordHasher {
    cost: u32,
}

impl PasswordHasher {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    pub async fn hash(&self, password: String) -> Result<String, PasswordError> {
        let cost = self.cost;
        let hashed = tokio::task::spawn_blocking(move || bcrypt::hash(password, cost)).await??;
        Ok(hashed)
    }

    pub async fn verify(&self, password: String, hash: String) -> Result<bool, PasswordError> {
        let ok = tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash)).await??;
        Ok(ok)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn hash_then_verify() {
        let hasher = PasswordHasher::new(4);
        let hash = hasher.hash("correct horse".to_string()).await.unwrap();

        assert_ne!(hash, "correct horse");
        assert!(hasher.verify("correct horse".to_string(), hash.clone()).await.unwrap());
        assert!(!hasher.verify("wrong horse".to_string(), hash).await.unwrap());
    }

    #[tokio::test]
    async fn garbage_hash_is_an_error() {
        let hasher = PasswordHasher::new(4);
        assert!(
            hasher
                .verify("pw".to_string(), "not-a-bcrypt-hash".to_string())
                .await
                .is_err()
        );
    }
}
