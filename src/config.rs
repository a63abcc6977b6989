/*
 * Responsibility
 * - read settings from the environment (.env supported)
 * - validate them; anything missing or malformed aborts startup
 */
use std::fmt;
use std::net::SocketAddr;
use std::str::FromStr;

use crate::services::auth::SigningSecret;

/// Secrets shorter than this are refused in production.
pub const MIN_PRODUCTION_SECRET_LEN: usize = 32;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnv {
    Development,
    Production,
}

impl AppEnv {
    pub fn parse(value: &str) -> Self {
        match value.to_ascii_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            _ => Self::Development,
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum ConfigError {
    Missing(&'static str),
    Invalid(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Missing(key) => write!(f, "missing configuration: {}", key),
            ConfigError::Invalid(key) => write!(f, "invalid configuration: {}", key),
        }
    }
}

impl std::error::Error for ConfigError {}

#[derive(Clone, Debug)]
pub struct Config {
    pub addr: SocketAddr,
    pub app_env: AppEnv,

    pub database_url: String,
    pub database_max_connections: u32,

    // Signs and verifies access tokens; Debug output is redacted.
    pub jwt_secret: SigningSecret,
    pub bcrypt_cost: u32,

    pub cors_allowed_origins: Vec<String>,
    pub request_timeout_seconds: u64,
    pub request_body_limit_bytes: usize,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from any key lookup (environment in production, a map in tests).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port: u16 = match lookup("PORT") {
            Some(v) => v.parse().map_err(|_| ConfigError::Invalid("PORT"))?,
            None => 8080,
        };

        let addr: SocketAddr = SocketAddr::from_str(&format!("0.0.0.0:{}", port))
            .map_err(|_| ConfigError::Invalid("PORT"))?;

        let app_env = lookup("APP_ENV")
            .map(|v| AppEnv::parse(&v))
            .unwrap_or(AppEnv::Development);

        let database_url = lookup("DATABASE_URL").unwrap_or_else(|| "sqlite://api.db".to_string());

        let database_max_connections = lookup("DATABASE_MAX_CONNECTIONS")
            .and_then(|v| v.parse::<u32>().ok())
            .filter(|n| *n > 0)
            .unwrap_or(5);

        let jwt_secret = lookup("JWT_SECRET").ok_or(ConfigError::Missing("JWT_SECRET"))?;
        let jwt_secret =
            SigningSecret::new(jwt_secret).map_err(|_| ConfigError::Invalid("JWT_SECRET"))?;
        if jwt_secret.len() < MIN_PRODUCTION_SECRET_LEN {
            if app_env.is_production() {
                return Err(ConfigError::Invalid("JWT_SECRET"));
            }
            tracing::warn!(
                min_len = MIN_PRODUCTION_SECRET_LEN,
                "JWT_SECRET is shorter than recommended; refused in production"
            );
        }

        let bcrypt_cost = match lookup("BCRYPT_COST") {
            Some(v) => v
                .parse::<u32>()
                .ok()
                .filter(|c| (4..=31).contains(c))
                .ok_or(ConfigError::Invalid("BCRYPT_COST"))?,
            None => bcrypt::DEFAULT_COST,
        };

        let cors_allowed_origins = lookup("CORS_ALLOWED_ORIGINS")
            .unwrap_or_default()
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>();

        // A zero timeout would turn every request into a 408.
        let request_timeout_seconds = match lookup("REQUEST_TIMEOUT_SECONDS") {
            Some(v) => v
                .parse::<u64>()
                .ok()
                .filter(|s| *s > 0)
                .ok_or(ConfigError::Invalid("REQUEST_TIMEOUT_SECONDS"))?,
            None => 30,
        };

        let request_body_limit_bytes = lookup("REQUEST_BODY_LIMIT_BYTES")
            .and_then(|v| v.parse::<usize>().ok())
            .unwrap_or(1024 * 1024);

        Ok(Self {
            addr,
            app_env,
            database_url,
            database_max_connections,
            jwt_secret,
            bcrypt_cost,
            cors_allowed_origins,
            request_timeout_seconds,
            request_body_limit_bytes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(pairs: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_only_secret_is_set() {
        let config = load(&[("JWT_SECRET", "dev-secret")]).unwrap();

        assert_eq!(config.addr.port(), 8080);
        assert_eq!(config.app_env, AppEnv::Development);
        assert_eq!(config.database_url, "sqlite://api.db");
        assert_eq!(config.database_max_connections, 5);
        assert_eq!(config.bcrypt_cost, bcrypt::DEFAULT_COST);
        assert!(config.cors_allowed_origins.is_empty());
        assert_eq!(config.request_timeout_seconds, 30);
        assert_eq!(config.request_body_limit_bytes, 1024 * 1024);
    }

    #[test]
    fn secret_is_required() {
        assert_eq!(load(&[]).unwrap_err(), ConfigError::Missing("JWT_SECRET"));
        assert_eq!(
            load(&[("JWT_SECRET", "")]).unwrap_err(),
            ConfigError::Invalid("JWT_SECRET")
        );
    }

    #[test]
    fn short_secret_is_refused_in_production() {
        let err = load(&[("APP_ENV", "prod"), ("JWT_SECRET", "short")]).unwrap_err();
        assert_eq!(err, ConfigError::Invalid("JWT_SECRET"));

        let long = "x".repeat(MIN_PRODUCTION_SECRET_LEN);
        let config = load(&[("APP_ENV", "production"), ("JWT_SECRET", &long)]).unwrap();
        assert!(config.app_env.is_production());
    }

    #[test]
    fn invalid_values_are_rejected() {
        assert_eq!(
            load(&[("JWT_SECRET", "s"), ("PORT", "http")]).unwrap_err(),
            ConfigError::Invalid("PORT")
        );
        assert_eq!(
            load(&[("JWT_SECRET", "s"), ("BCRYPT_COST", "2")]).unwrap_err(),
            ConfigError::Invalid("BCRYPT_COST")
        );
    }

    #[test]
    fn request_timeout_must_be_positive() {
        for value in ["0", "-5", "soon"] {
            assert_eq!(
                load(&[("JWT_SECRET", "s"), ("REQUEST_TIMEOUT_SECONDS", value)]).unwrap_err(),
                ConfigError::Invalid("REQUEST_TIMEOUT_SECONDS")
            );
        }

        let config = load(&[("JWT_SECRET", "s"), ("REQUEST_TIMEOUT_SECONDS", "5")]).unwrap();
        assert_eq!(config.request_timeout_seconds, 5);
    }

    #[test]
    fn cors_origins_are_split_and_trimmed() {
        let config = load(&[
            ("JWT_SECRET", "s"),
            ("CORS_ALLOWED_ORIGINS", " https://a.example , ,https://b.example"),
        ])
        .unwrap();
        assert_eq!(
            config.cors_allowed_origins,
            vec!["https://a.example", "https://b.example"]
        );
    }

    #[test]
    fn debug_output_hides_secret() {
        let config = load(&[("JWT_SECRET", "do-not-print-me")]).unwrap();
        assert!(!format!("{config:?}").contains("do-not-print-me"));
    }
}
