use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

/// Authorization errors for the gate layer.
#[derive(Debug, thiserror::Error)]
pub enum GateError {
    /// The request carries no identity that satisfies the required role.
    ///
    /// Deliberately a single variant: "no session", "expired session",
    /// "unknown user" and "wrong role" are indistinguishable to the caller.
    #[error("Unauthorized")]
    Unauthorized,

    /// A persistence collaborator failed.
    #[error("store error: {0}")]
    Store(String),

    /// Missing or invalid configuration.
    #[error("configuration error: {0}")]
    Config(String),
}

impl IntoResponse for GateError {
    fn into_response(self) -> Response {
        match self {
            Self::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                Json(json!({ "error": "Unauthorized" })),
            )
                .into_response(),
            Self::Store(_) | Self::Config(_) => {
                tracing::error!(error = %self, "gate internal error");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal error").into_response()
            }
        }
    }
}
