/*
 * Responsibility
 * - shared context attached to the Router (AppState)
 * - Clone is cheap (everything behind Arc)
 */
use std::sync::Arc;

use crate::repos::{EventRepo, UserRepo};
use crate::services::{auth::AuthService, password::PasswordHasher};

#[derive(Clone)]
pub struct AppState {
    pub auth: Arc<AuthService>,
    pub events: Arc<dyn EventRepo>,
    pub users: Arc<dyn UserRepo>,
    pub passwords: PasswordHasher,
}

impl AppState {
    pub fn new(
        auth: Arc<AuthService>,
        events: Arc<dyn EventRepo>,
        users: Arc<dyn UserRepo>,
        passwords: PasswordHasher,
    ) -> Self {
        Self {
            auth,
            events,
            users,
            passwords,
        }
    }
}
