use axum_extra::extract::cookie::Key;

use super::error::GateError;

/// Shared gate settings used by both config and runtime state.
#[derive(Clone)]
pub(crate) struct GateSettings {
    pub(crate) cookie_key: Key,
    pub(crate) session_cookie_name: String,
    pub(crate) session_ttl_days: i64,
    pub(crate) secure_cookies: bool,
}

impl GateSettings {
    fn defaults() -> Self {
        Self {
            cookie_key: Key::generate(),
            session_cookie_name: "__storefront_session".into(),
            session_ttl_days: 30,
            secure_cookies: true,
        }
    }
}

/// Gate configuration.
///
/// Use [`from_env()`](GateConfig::from_env) for convention-based setup,
/// or [`new()`](GateConfig::new) with `with_*` methods for full control.
pub struct GateConfig {
    pub(super) settings: GateSettings,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GateConfig {
    /// Create config with default settings. Override with `with_*` methods.
    #[must_use]
    pub fn new() -> Self {
        Self {
            settings: GateSettings::defaults(),
        }
    }

    /// Create config from environment variables.
    ///
    /// # Optional env vars
    /// - `STOREFRONT_COOKIE_KEY`: Cookie encryption key bytes (at least 64);
    ///   omitted means an ephemeral generated key
    /// - `STOREFRONT_SESSION_COOKIE`: Session cookie name
    /// - `STOREFRONT_SESSION_TTL_DAYS`: Session cookie lifetime in days
    /// - `STOREFRONT_INSECURE_COOKIES`: Set to `"1"` or `"true"` to drop the
    ///   `Secure` cookie attribute for local development
    ///
    /// # Errors
    ///
    /// Returns [`GateError::Config`] if a set variable has an invalid value.
    pub fn from_env() -> Result<Self, GateError> {
        let mut config = Self::new();

        if let Ok(k) = std::env::var("STOREFRONT_COOKIE_KEY") {
            let key = Key::try_from(k.as_bytes()).map_err(|_| {
                GateError::Config(
                    "STOREFRONT_COOKIE_KEY is set but invalid (must be at least 64 bytes). \
                     Remove the env var to use an ephemeral key, or provide a valid key."
                        .into(),
                )
            })?;
            config = config.with_cookie_key(key);
        }

        if let Ok(name) = std::env::var("STOREFRONT_SESSION_COOKIE") {
            config = config.with_session_cookie_name(name);
        }

        if let Ok(days) = std::env::var("STOREFRONT_SESSION_TTL_DAYS") {
            let days: i64 = days
                .parse()
                .map_err(|e| GateError::Config(format!("STOREFRONT_SESSION_TTL_DAYS: {e}")))?;
            config = config.with_session_ttl_days(days);
        }

        let insecure = matches!(
            std::env::var("STOREFRONT_INSECURE_COOKIES").as_deref(),
            Ok("1") | Ok("true"),
        );

        Ok(config.with_secure_cookies(!insecure))
    }

    #[must_use]
    pub fn with_cookie_key(mut self, key: Key) -> Self {
        self.settings.cookie_key = key;
        self
    }

    #[must_use]
    pub fn with_session_cookie_name(mut self, name: impl Into<String>) -> Self {
        self.settings.session_cookie_name = name.into();
        self
    }

    #[must_use]
    pub fn with_session_ttl_days(mut self, days: i64) -> Self {
        self.settings.session_ttl_days = days;
        self
    }

    #[must_use]
    pub fn with_secure_cookies(mut self, secure: bool) -> Self {
        self.settings.secure_cookies = secure;
        self
    }
}
