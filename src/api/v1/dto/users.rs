/*
 * Responsibility
 * - signup / login DTOs
 */
use serde::{Deserialize, Serialize};

/// bcrypt only looks at the first 72 bytes; longer passwords are refused instead of truncated.
pub const MAX_PASSWORD_BYTES: usize = 72;

#[derive(Debug, Deserialize)]
pub struct CredentialsRequest {
    pub email: String,
    pub password: String,
}

impl CredentialsRequest {
    pub fn validate(&self) -> Result<(), &'static str> {
        let email = self.email.trim();
        if email.is_empty() {
            return Err("email is required");
        }
        if !email.contains('@') {
            return Err("email is invalid");
        }
        if self.password.is_empty() {
            return Err("password is required");
        }
        if self.password.len() > MAX_PASSWORD_BYTES {
            return Err("password must be <= 72 bytes");
        }

        Ok(())
    }
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub message: &'static str,
    pub token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn creds(email: &str, password: &str) -> CredentialsRequest {
        CredentialsRequest {
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn validates_email_and_password() {
        assert_eq!(creds("", "pw").validate(), Err("email is required"));
        assert_eq!(creds("nobody", "pw").validate(), Err("email is invalid"));
        assert_eq!(creds("a@example.com", "").validate(), Err("password is required"));
        assert_eq!(
            creds("a@example.com", &"p".repeat(73)).validate(),
            Err("password must be <= 72 bytes")
        );
        assert_eq!(creds("a@example.com", "pw").validate(), Ok(()));
    }
}
