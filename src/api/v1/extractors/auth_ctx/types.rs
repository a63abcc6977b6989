/*
 * Responsibility
 * - the "authenticated context" type handlers see
 * - the access gate verifies the credential and stores this in request extensions;
 *   handlers only ever receive this type
 */

/// Context attached to a request that passed the access gate.
///
/// - `user_id` is the subject id from the verified credential (`userId` claim).
///   The `email` claim is deliberately not carried: it is not trusted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthCtx {
    pub user_id: i64,
}

impl AuthCtx {
    pub fn new(user_id: i64) -> Self {
        Self { user_id }
    }
}
