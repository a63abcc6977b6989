/*!
 * Authentication context extractor
 *
 * Responsibility:
 * - hands the authenticated caller (AuthCtx) to handlers
 * - axum specifics live in core, the contract type lives in types
 *
 * Public API:
 * - AuthCtx
 * - AuthCtxExtractor
 */

mod core;
mod types;

pub use core::AuthCtxExtractor;
pub use types::AuthCtx;
