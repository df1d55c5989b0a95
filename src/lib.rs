#![doc = include_str!("../README.md")]

pub mod error;
pub mod middleware;
pub mod types;

// Re-exports for convenient access
pub use error::Error;
pub use middleware::{
    AdminUser, CookieKey, CurrentUser, GateConfig, GateError, GateState, Session, SessionStore,
    User, UserStore, is_authorized, require_admin, require_login, resolve_session,
};
pub use types::{Email, Role, SessionId, UserId};
