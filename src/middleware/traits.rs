use std::future::Future;

use super::types::{Session, User};
use crate::types::{Email, SessionId};

/// Consumer-provided user persistence.
///
/// Called once per authorization check to resolve a session's email claim
/// to a stored user record.
///
/// # Example
///
/// ```rust,ignore
/// impl UserStore for MyAppState {
///     async fn find_by_email(
///         &self,
///         email: &Email,
///     ) -> Result<Option<User>, Box<dyn std::error::Error + Send + Sync>> {
///         self.db.find_user_by_email(email.as_str()).await
///     }
/// }
/// ```
pub trait UserStore: Send + Sync + 'static {
    /// Look up a user by unique email. Returns `Ok(None)` when no record
    /// exists — the gate treats that as a denial, not an error.
    fn find_by_email(
        &self,
        email: &Email,
    ) -> impl Future<Output = Result<Option<User>, Box<dyn std::error::Error + Send + Sync>>> + Send;
}

/// Consumer-provided session persistence.
///
/// Sessions are identified by opaque [`SessionId`]s; the consumer chooses
/// the format (ULID, UUID, etc.). The gate only calls [`find`](Self::find);
/// `create` and `delete` exist for the consumer's own login and logout
/// handlers, which own the session lifecycle.
///
/// # Example
///
/// ```rust,ignore
/// impl SessionStore for MyAppState {
///     async fn create(&self, session: Session) -> Result<SessionId, ...> {
///         let id = SessionId(Ulid::new().to_string());
///         self.db.insert_session(&id, &session).await?;
///         Ok(id)
///     }
///
///     async fn find(&self, session_id: &SessionId) -> Result<Option<Session>, ...> {
///         self.db.find_session(session_id).await
///     }
///
///     async fn delete(&self, session_id: &SessionId) -> Result<(), ...> {
///         self.db.delete_session(session_id).await
///     }
/// }
/// ```
pub trait SessionStore: Send + Sync + 'static {
    /// Persist a new session. Returns the session ID.
    fn create(
        &self,
        session: Session,
    ) -> impl Future<Output = Result<SessionId, Box<dyn std::error::Error + Send + Sync>>> + Send;

    /// Look up a session by ID. Returns `Ok(None)` when no session exists.
    fn find(
        &self,
        session_id: &SessionId,
    ) -> impl Future<Output = Result<Option<Session>, Box<dyn std::error::Error + Send + Sync>>>
           + Send;

    /// Delete a session (logout).
    fn delete(
        &self,
        session_id: &SessionId,
    ) -> impl Future<Output = Result<(), Box<dyn std::error::Error + Send + Sync>>> + Send;
}
