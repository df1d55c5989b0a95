use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum_extra::extract::PrivateCookieJar;
use axum_extra::extract::cookie::Key;

use super::cookies;
use super::error::GateError;
use super::state::GateState;
use super::traits::{SessionStore, UserStore};
use super::types::User;
use crate::types::{Role, SessionId};

/// Authenticated user extracted from the session cookie.
///
/// Use as an Axum extractor in route handlers. Returns `401 Unauthorized`
/// if no valid session exists.
///
/// # Example
///
/// ```rust,ignore
/// async fn profile(user: CurrentUser) -> impl IntoResponse {
///     format!("Hello, {} {}", user.user.first_name, user.user.last_name)
/// }
///
/// // Optional: accessible to both authenticated and anonymous users
/// async fn storefront(user: Option<CurrentUser>) -> impl IntoResponse {
///     match user {
///         Some(u) => format!("Hello, {}", u.user.first_name),
///         None => "Hello, guest".to_string(),
///     }
/// }
/// ```
#[derive(Debug, Clone)]
pub struct CurrentUser {
    /// Session ID (from cookie).
    pub session_id: SessionId,
    /// The stored record the session's email claim resolved to.
    pub user: User,
}

impl<U: UserStore, S: SessionStore> FromRequestParts<GateState<U, S>> for CurrentUser {
    type Rejection = GateError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &GateState<U, S>,
    ) -> Result<Self, Self::Rejection> {
        let jar: PrivateCookieJar<Key> = PrivateCookieJar::from_request_parts(parts, state)
            .await
            .map_err(|_| GateError::Unauthorized)?;

        resolve_session(state, &jar)
            .await?
            .ok_or(GateError::Unauthorized)
    }
}

/// Authenticated user holding the [`Role::Admin`] role.
///
/// Same as [`CurrentUser`] but additionally rejects with `401 Unauthorized`
/// when the resolved user is not an admin.
#[derive(Debug, Clone)]
pub struct AdminUser(pub CurrentUser);

impl<U: UserStore, S: SessionStore> FromRequestParts<GateState<U, S>> for AdminUser {
    type Rejection = GateError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &GateState<U, S>,
    ) -> Result<Self, Self::Rejection> {
        let current = CurrentUser::from_request_parts(parts, state).await?;
        if current.user.role.satisfies(Role::Admin) {
            Ok(Self(current))
        } else {
            Err(GateError::Unauthorized)
        }
    }
}

/// Resolve the request's session cookie to an authenticated user.
///
/// Returns `Ok(None)` when the request carries no usable identity: missing
/// cookie, unknown or expired session, or no user record for the session's
/// email claim. `Err` is reserved for collaborator failures.
///
/// Performs exactly one session read and at most one user read.
pub async fn resolve_session<U: UserStore, S: SessionStore>(
    state: &GateState<U, S>,
    jar: &PrivateCookieJar,
) -> Result<Option<CurrentUser>, GateError> {
    let Some(session_id) = cookies::get_session_id(jar, &state.settings.session_cookie_name)
    else {
        return Ok(None);
    };

    let session = state
        .session_store
        .find(&session_id)
        .await
        .map_err(|e| GateError::Store(e.to_string()))?;

    let Some(session) = session else {
        return Ok(None);
    };

    if session.is_expired() {
        tracing::debug!(session_id = %session_id, "expired session presented");
        return Ok(None);
    }

    let user = state
        .user_store
        .find_by_email(&session.email)
        .await
        .map_err(|e| GateError::Store(e.to_string()))?;

    Ok(user.map(|user| CurrentUser { session_id, user }))
}
