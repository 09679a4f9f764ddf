// ── Core error types ──
//
// User-facing errors from curio-core. Consumers never see HTTP status
// codes or JSON parse failures directly -- the `From<curio_api::Error>`
// impl translates transport-layer errors into domain-appropriate
// variants, and every variant renders as a message a UI can show as-is.

use thiserror::Error;

/// Unified error type for the core crate.
#[derive(Debug, Clone, Error)]
pub enum CoreError {
    /// The backend rejected a payload. Surfaced inline by the UI, never
    /// silently dropped.
    #[error("Validation failed: {message}")]
    Validation { message: String },

    /// A stale id was referenced after a concurrent deletion. The store
    /// absorbs this by removing the item locally; the error is a notice,
    /// not a crash.
    #[error("Not found: {message}")]
    NotFound { message: String },

    /// No response from the backend. Existing state is preserved and the
    /// same intent can be re-invoked.
    #[error("Network error: {message}")]
    Network { message: String },

    /// The backend answered with a server-side failure (5xx). Handled
    /// identically to [`Network`](Self::Network).
    #[error("Server error (HTTP {status}): {message}")]
    Server { status: u16, message: String },

    /// Token rejected. Passed through verbatim -- session recovery is the
    /// HTTP layer's exclusive responsibility, never the sync core's.
    #[error("Unauthorized: {message}")]
    Unauthorized { message: String },

    /// Configuration problem (bad URL, unreadable cert).
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Anything that indicates a bug rather than an operational failure.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl CoreError {
    /// Returns `true` if re-invoking the same intent may succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Network { .. } | Self::Server { .. })
    }

    /// Returns `true` for the stale-id case the store absorbs locally.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

// ── Conversion from transport-layer errors ───────────────────────────

impl From<curio_api::Error> for CoreError {
    fn from(err: curio_api::Error) -> Self {
        match err {
            curio_api::Error::Unauthorized { message } => CoreError::Unauthorized { message },
            curio_api::Error::NotFound { message } => CoreError::NotFound { message },
            curio_api::Error::Validation { message } => CoreError::Validation { message },
            curio_api::Error::Api { status, message } => CoreError::Server { status, message },
            curio_api::Error::Transport(e) => {
                if let Some(status) = e.status() {
                    CoreError::Server {
                        status: status.as_u16(),
                        message: e.to_string(),
                    }
                } else {
                    CoreError::Network {
                        message: e.to_string(),
                    }
                }
            }
            curio_api::Error::InvalidUrl(e) => CoreError::Config {
                message: format!("Invalid URL: {e}"),
            },
            curio_api::Error::Tls(msg) => CoreError::Config {
                message: format!("TLS error: {msg}"),
            },
            curio_api::Error::Deserialization { message, .. } => CoreError::Internal(format!(
                "unexpected response shape: {message}"
            )),
        }
    }
}
