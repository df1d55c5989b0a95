use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use axum_extra::extract::PrivateCookieJar;

use super::error::GateError;
use super::extractor::resolve_session;
use super::state::GateState;
use super::traits::{SessionStore, UserStore};
use crate::types::Role;

/// Whether the current request satisfies `required`.
///
/// Never errors outward: a missing session, an unknown or expired session,
/// an unknown user, an insufficient role, and even a collaborator failure
/// (logged) all collapse to `false`.
pub async fn is_authorized<U: UserStore, S: SessionStore>(
    state: &GateState<U, S>,
    jar: &PrivateCookieJar,
    required: Role,
) -> bool {
    match resolve_session(state, jar).await {
        Ok(Some(current)) => current.user.role.satisfies(required),
        Ok(None) => false,
        Err(e) => {
            tracing::warn!(error = %e, "authorization check failed, denying");
            false
        }
    }
}

/// Middleware admitting any authenticated user.
///
/// On allow, inserts [`CurrentUser`](super::CurrentUser) into request
/// extensions and delegates unchanged; on deny, short-circuits with
/// `401 {"error":"Unauthorized"}` without invoking the inner handler.
///
/// # Example
///
/// ```rust,ignore
/// let account = Router::new()
///     .route("/orders", get(orders))
///     .layer(from_fn_with_state(state.clone(), require_login::<Users, Sessions>));
/// ```
pub async fn require_login<U: UserStore, S: SessionStore>(
    State(state): State<GateState<U, S>>,
    jar: PrivateCookieJar,
    request: Request,
    next: Next,
) -> Response {
    gate(state, jar, Role::Customer, request, next).await
}

/// Middleware admitting only users with [`Role::Admin`].
pub async fn require_admin<U: UserStore, S: SessionStore>(
    State(state): State<GateState<U, S>>,
    jar: PrivateCookieJar,
    request: Request,
    next: Next,
) -> Response {
    gate(state, jar, Role::Admin, request, next).await
}

async fn gate<U: UserStore, S: SessionStore>(
    state: GateState<U, S>,
    jar: PrivateCookieJar,
    required: Role,
    mut request: Request,
    next: Next,
) -> Response {
    match resolve_session(&state, &jar).await {
        Ok(Some(current)) if current.user.role.satisfies(required) => {
            request.extensions_mut().insert(current);
            next.run(request).await
        }
        Ok(_) => GateError::Unauthorized.into_response(),
        Err(e) => e.into_response(),
    }
}
