/*
 * Responsibility
 * - tracing / panic hook setup
 * - Config → dependencies (db pool, repos, auth) → Router
 * - middleware (CORS / request id / trace / limits)
 * - axum::serve()
 */
use std::{panic, process, sync::Arc};

use anyhow::{Context, Result};
use axum::{Router, routing::get};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::api;
use crate::api::v1::handlers::health::health;
use crate::config::Config;
use crate::middleware;
use crate::repos::{SqliteEventRepo, SqliteUserRepo, db};
use crate::services::{auth::AuthService, password::PasswordHasher};
use crate::state::AppState;

fn init_tracing() {
    // RUST_LOG wins when set, e.g. RUST_LOG=info,event_booking=debug,tower_http=debug
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,tower_http=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn init_panic_hook(abort_on_panic: bool) {
    let default_hook = panic::take_hook();

    panic::set_hook(Box::new(move |info| {
        tracing::error!(?info, "panic");

        // Development: crash so it gets noticed. Production: default hook, keep serving.
        if abort_on_panic {
            process::abort();
        } else {
            default_hook(info);
        }
    }))
}

pub async fn run() -> Result<()> {
    init_tracing();
    let config = Config::from_env().context("failed to load configuration")?;

    init_panic_hook(!config.app_env.is_production());

    tracing::info!(
        "starting API in {:?} mode on {}",
        config.app_env,
        config.addr
    );

    let state = build_state(&config).await?;
    let app = build_router(state, &config);

    let listener = tokio::net::TcpListener::bind(config.addr)
        .await
        .with_context(|| format!("failed to bind {}", config.addr))?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Build process-level services and inject them into the shared application state.
pub async fn build_state(config: &Config) -> Result<AppState> {
    let pool = db::connect(&config.database_url, config.database_max_connections)
        .await
        .context("failed to open database")?;
    db::init_schema(&pool)
        .await
        .context("failed to create database schema")?;

    // The signing secret is handed to issuer and verifier here and nowhere else.
    let auth = Arc::new(AuthService::new(&config.jwt_secret));

    Ok(AppState::new(
        auth,
        Arc::new(SqliteEventRepo::new(pool.clone())),
        Arc::new(SqliteUserRepo::new(pool)),
        PasswordHasher::new(config.bcrypt_cost),
    ))
}

pub fn build_router(state: AppState, config: &Config) -> Router {
    let router = Router::new()
        .route("/health", get(health))
        .nest("/api/v1", api::v1::routes(state.clone()))
        .with_state(state);

    let router = middleware::cors::apply(router, config);
    middleware::http::apply(router, config)
}
