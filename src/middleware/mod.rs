/*
 * Responsibility
 * - public entry points of the middleware layer
 * - auth::access (credential gate), cors, http (request id / trace / limits)
 */
pub mod auth;
pub mod cors;
pub mod http;
