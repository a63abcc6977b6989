pub mod access_jwt;
pub mod jwt;
pub mod secret;
pub mod token_service;

pub use access_jwt::{AccessJwtError, AccessTokenVerifier};
pub use jwt::JwtIssuer;
pub use secret::SigningSecret;
pub use token_service::AuthService;
