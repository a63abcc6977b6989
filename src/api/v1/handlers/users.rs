/*
 * Responsibility
 * - POST /signup: hash the password, store the user
 * - POST /login: check the password, issue an access token
 */
use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};

use crate::{
    api::v1::dto::users::{CredentialsRequest, LoginResponse, MessageResponse},
    error::AppError,
    state::AppState,
};

fn parse_credentials(
    payload: Result<Json<CredentialsRequest>, JsonRejection>,
) -> Result<CredentialsRequest, AppError> {
    let Json(req) =
        payload.map_err(|_| AppError::invalid_request("Could not parse request data."))?;
    req.validate().map_err(AppError::invalid_request)?;
    Ok(req)
}

pub async fn signup(
    State(state): State<AppState>,
    payload: Result<Json<CredentialsRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<MessageResponse>), AppError> {
    let req = parse_credentials(payload)?;
    let email = req.email.trim();

    let password_hash = state.passwords.hash(req.password.clone()).await?;
    let user = state.users.create(email, &password_hash).await?;
    tracing::info!(user_id = user.id, "user created");

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: "User created successfully.",
        }),
    ))
}

pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<CredentialsRequest>, JsonRejection>,
) -> Result<Json<LoginResponse>, AppError> {
    let req = parse_credentials(payload)?;
    let email = req.email.trim();

    let user = state
        .users
        .find_by_email(email)
        .await?
        .ok_or(AppError::InvalidCredentials)?;

    let matches = state
        .passwords
        .verify(req.password.clone(), user.password_hash.clone())
        .await?;
    if !matches {
        tracing::debug!(user_id = user.id, "password mismatch");
        return Err(AppError::InvalidCredentials);
    }

    let token = state.auth.issue_access_token(&user.email, user.id)?;

    Ok(Json(LoginResponse {
        message: "Login successful!",
        token,
    }))
}
