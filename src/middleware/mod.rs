//! Session-gated role authorization middleware for Axum.
//!
//! Resolves a request's session cookie to a stored user record and admits
//! or denies the wrapped handler based on the user's role. Every denial is
//! the same fixed `401 {"error":"Unauthorized"}` response, and a denied
//! handler is never invoked.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use storefront_gate::{GateConfig, GateState, CurrentUser, require_admin};
//!
//! // 1. Implement UserStore and SessionStore traits for your app
//! // 2. Configure from environment
//! let config = GateConfig::from_env()?;
//! let state = GateState::new(config, user_store, session_store);
//!
//! // 3. Gate handlers with extractors, or whole routers with middleware
//! let app = axum::Router::new()
//!     .route("/profile", get(|user: CurrentUser| async move { /* ... */ }))
//!     .merge(admin_router.layer(from_fn_with_state(
//!         state.clone(),
//!         require_admin::<Users, Sessions>,
//!     )))
//!     .with_state(state);
//! ```

mod config;
mod cookies;
mod error;
mod extractor;
mod gate;
mod state;
mod traits;
mod types;

pub use config::GateConfig;
pub use error::GateError;
pub use extractor::{AdminUser, CurrentUser, resolve_session};
pub use gate::{is_authorized, require_admin, require_login};
pub use state::GateState;
pub use traits::{SessionStore, UserStore};
pub use types::{Session, User};

/// Re-export cookie key type for builder API.
pub use axum_extra::extract::cookie::Key as CookieKey;
