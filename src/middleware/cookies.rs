use axum_extra::extract::cookie::{Cookie, SameSite};
use time::Duration;

use crate::types::SessionId;

/// Create the session cookie.
pub(super) fn session_cookie(
    name: &str,
    session_id: &str,
    ttl_days: i64,
    secure: bool,
) -> Cookie<'static> {
    Cookie::build((name.to_string(), session_id.to_string()))
        .http_only(true)
        .secure(secure)
        .same_site(SameSite::Lax)
        .path("/".to_string())
        .max_age(Duration::days(ttl_days))
        .build()
}

/// Create the removal cookie for the session.
pub(super) fn clear_session_cookie(name: &str) -> Cookie<'static> {
    Cookie::build((name.to_string(), ""))
        .path("/".to_string())
        .max_age(Duration::ZERO)
        .build()
}

/// Get the session ID from the cookie jar.
pub(super) fn get_session_id(
    jar: &axum_extra::extract::PrivateCookieJar,
    name: &str,
) -> Option<SessionId> {
    jar.get(name).map(|c| SessionId(c.value().to_string()))
}
