use serde::{Deserialize, Serialize};
use time::{Duration, OffsetDateTime};

use crate::types::{Email, Role, UserId};

/// Persistent user record.
///
/// Read on every authorization check through
/// [`UserStore::find_by_email`](super::UserStore::find_by_email); never
/// mutated by the gate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    /// Unique lookup key; the session's identity claim points here.
    pub email: Email,
    pub first_name: String,
    pub last_name: String,
    pub role: Role,
}

/// Short-lived proof of identity attached to a request.
///
/// Created by the consumer's login handler (via
/// [`SessionStore::create`](super::SessionStore::create)), destroyed at
/// logout or expiry. The gate only ever reads it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    /// Identity claim, resolved to a [`User`] on every check.
    pub email: Email,
    #[serde(with = "time::serde::rfc3339")]
    pub expires_at: OffsetDateTime,
}

impl Session {
    /// Create a session for `email` expiring `ttl_days` from now.
    #[must_use]
    pub fn new(email: Email, ttl_days: i64) -> Self {
        Self {
            email,
            expires_at: OffsetDateTime::now_utc() + Duration::days(ttl_days),
        }
    }

    /// Whether the session has passed its expiry.
    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.expires_at <= OffsetDateTime::now_utc()
    }
}
