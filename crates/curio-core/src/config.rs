// ── Console configuration ──
//
// Connection settings consumed by `Console::new`. Loading and profile
// resolution live in `curio-config`; this type is the resolved result.

use std::path::PathBuf;
use std::time::Duration;

use secrecy::SecretString;
use url::Url;

/// TLS verification policy for the backend connection.
#[derive(Debug, Clone, Default)]
pub enum TlsVerification {
    /// Use the system certificate store.
    #[default]
    System,
    /// Trust a custom CA certificate (PEM file).
    CustomCa(PathBuf),
    /// Accept any certificate. Staging only.
    DangerAcceptInvalid,
}

/// Resolved connection configuration for one backend.
#[derive(Debug, Clone)]
pub struct ConsoleConfig {
    /// Backend base URL, e.g. `https://api.curio.market`.
    pub url: Url,

    /// Bearer token for the admin API.
    pub token: SecretString,

    /// TLS verification policy.
    pub tls: TlsVerification,

    /// Request budget for every operation; there are no per-operation
    /// timeouts beyond this.
    pub timeout: Duration,

    /// Default page size for every resource store.
    pub page_limit: u32,
}

impl ConsoleConfig {
    /// Sensible defaults for everything except URL and token.
    pub fn new(url: Url, token: SecretString) -> Self {
        Self {
            url,
            token,
            tls: TlsVerification::default(),
            timeout: Duration::from_secs(30),
            page_limit: 20,
        }
    }
}
