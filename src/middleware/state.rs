use std::sync::Arc;

use axum::extract::FromRef;
use axum_extra::extract::cookie::{Cookie, Key};

use super::config::{GateConfig, GateSettings};
use super::cookies;
use crate::types::SessionId;

/// Shared state for the gate: the two persistence collaborators plus
/// cookie settings.
///
/// Passed explicitly into every handler and middleware — there is no
/// ambient session state. Cheap to clone (stores are behind `Arc`).
pub struct GateState<U, S> {
    pub(super) user_store: Arc<U>,
    pub(super) session_store: Arc<S>,
    pub(super) settings: GateSettings,
}

impl<U, S> GateState<U, S> {
    /// Assemble the gate state from config and the consumer's stores.
    #[must_use]
    pub fn new(config: GateConfig, user_store: U, session_store: S) -> Self {
        Self {
            user_store: Arc::new(user_store),
            session_store: Arc::new(session_store),
            settings: config.settings,
        }
    }

    /// Mint the session cookie for a freshly created session.
    ///
    /// For the consumer's login handler: add the result to the request's
    /// `PrivateCookieJar` and return the jar with the response.
    #[must_use]
    pub fn session_cookie(&self, session_id: &SessionId) -> Cookie<'static> {
        cookies::session_cookie(
            &self.settings.session_cookie_name,
            &session_id.0,
            self.settings.session_ttl_days,
            self.settings.secure_cookies,
        )
    }

    /// Removal cookie for the consumer's logout handler.
    #[must_use]
    pub fn clear_session_cookie(&self) -> Cookie<'static> {
        cookies::clear_session_cookie(&self.settings.session_cookie_name)
    }
}

// Manual Clone: avoid derive adding `U: Clone, S: Clone` bounds.
impl<U, S> Clone for GateState<U, S> {
    fn clone(&self) -> Self {
        Self {
            user_store: self.user_store.clone(),
            session_store: self.session_store.clone(),
            settings: self.settings.clone(),
        }
    }
}

// PrivateCookieJar requires Key to be extractable from state
impl<U, S> FromRef<GateState<U, S>> for Key {
    fn from_ref(state: &GateState<U, S>) -> Self {
        state.settings.cookie_key.clone()
    }
}
