//! Refresh-token session model.

use sqlx::FromRow;
use tourcraft_core::types::{DbId, Timestamp};

/// A row from the `sessions` table.
///
/// One row per issued refresh token. A session is live while `revoked_at`
/// is null and `expires_at` lies in the future; revocation stamps
/// `revoked_at` and the row is never touched again.
#[derive(Debug, Clone, FromRow)]
pub struct Session {
    pub id: DbId,
    pub user_id: DbId,
    /// SHA-256 hex digest of the opaque refresh token. The plaintext is
    /// never stored.
    pub refresh_token_hash: String,
    pub expires_at: Timestamp,
    pub revoked_at: Option<Timestamp>,
    pub created_at: Timestamp,
}

/// Input for opening a new session.
pub struct NewSession {
    pub user_id: DbId,
    pub refresh_token_hash: String,
    pub expires_at: Timestamp,
}
