use thiserror::Error;

/// Top-level error type for the `curio-api` crate.
///
/// This crate interprets HTTP status codes exactly once, here. Consumers
/// (`curio-core`) map these into user-facing diagnostics and never look at
/// raw status codes again.
#[derive(Debug, Error)]
pub enum Error {
    // ── Authentication ──────────────────────────────────────────────
    /// The backend rejected the bearer token (HTTP 401).
    ///
    /// Session recovery (re-login, redirect) is the caller's concern --
    /// the sync core must pass this through untouched.
    #[error("Unauthorized: {message}")]
    Unauthorized { message: String },

    // ── Request outcome ─────────────────────────────────────────────
    /// The addressed entity does not exist (HTTP 404).
    #[error("Not found: {message}")]
    NotFound { message: String },

    /// The backend rejected the payload (HTTP 400/422).
    #[error("Validation failed: {message}")]
    Validation { message: String },

    /// Any other non-success status, with the server's `{message}` body.
    #[error("API error (HTTP {status}): {message}")]
    Api { status: u16, message: String },

    // ── Transport ───────────────────────────────────────────────────
    /// HTTP transport error (connection refused, DNS failure, timeout).
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// TLS handshake or certificate error.
    #[error("TLS error: {0}")]
    Tls(String),

    // ── Data ────────────────────────────────────────────────────────
    /// JSON deserialization failed, with the raw body for debugging.
    #[error("Deserialization error: {message}")]
    Deserialization { message: String, body: String },
}

impl Error {
    /// Returns `true` if this is a "not found" error.
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::NotFound { .. } => true,
            Self::Transport(e) => e.status() == Some(reqwest::StatusCode::NOT_FOUND),
            _ => false,
        }
    }

    /// Returns `true` if this is a transient error worth retrying
    /// (retry itself is a UI decision, never automatic).
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Transport(e) => e.is_timeout() || e.is_connect(),
            Self::Api { status, .. } => *status >= 500,
            _ => false,
        }
    }
}
