//! Shared configuration for the Curio admin tools.
//!
//! TOML profiles layered with `CURIO_*` environment variables, token
//! resolution (env var indirection or plaintext), and translation to
//! `curio_core::ConsoleConfig`.

use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Duration;

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use curio_core::{ConsoleConfig, TlsVerification};

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("no profile named '{profile}' in {path}")]
    UnknownProfile { profile: String, path: String },

    #[error("no token configured for profile '{profile}' (set token, token_env, or CURIO_TOKEN)")]
    NoToken { profile: String },

    #[error("failed to serialize config: {0}")]
    Serialization(#[from] toml::ser::Error),

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── TOML config structs ─────────────────────────────────────────────

/// Top-level TOML configuration.
#[derive(Debug, Deserialize, Serialize)]
pub struct Config {
    /// Default profile name.
    pub default_profile: Option<String>,

    /// Global defaults.
    #[serde(default)]
    pub defaults: Defaults,

    /// Named backend profiles.
    #[serde(default)]
    pub profiles: HashMap<String, Profile>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_profile: Some("default".into()),
            defaults: Defaults::default(),
            profiles: HashMap::new(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize)]
pub struct Defaults {
    #[serde(default)]
    pub insecure: bool,

    #[serde(default = "default_timeout")]
    pub timeout: u64,

    #[serde(default = "default_page_limit")]
    pub page_limit: u32,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            insecure: false,
            timeout: default_timeout(),
            page_limit: default_page_limit(),
        }
    }
}

fn default_timeout() -> u64 {
    30
}
fn default_page_limit() -> u32 {
    20
}

/// A named backend profile.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct Profile {
    /// Backend base URL (e.g. "https://api.curio.market").
    pub url: Option<String>,

    /// Bearer token (plaintext — prefer token_env).
    pub token: Option<String>,

    /// Environment variable name containing the token.
    pub token_env: Option<String>,

    /// Path to a custom CA certificate.
    pub ca_cert: Option<PathBuf>,

    /// Override insecure TLS setting.
    pub insecure: Option<bool>,

    /// Override request timeout (seconds).
    pub timeout: Option<u64>,

    /// Override the default page size.
    pub page_limit: Option<u32>,
}

// ── Paths ───────────────────────────────────────────────────────────

/// Platform-appropriate config file path
/// (e.g. `~/.config/curio/config.toml` on Linux).
pub fn config_path() -> PathBuf {
    ProjectDirs::from("market", "curio", "curio")
        .map_or_else(|| PathBuf::from("config.toml"), |d| {
            d.config_dir().join("config.toml")
        })
}

// ── Loading ─────────────────────────────────────────────────────────

/// Load config from the default path, layered under `CURIO_*` env vars.
/// A missing file yields the built-in defaults.
pub fn load_config() -> Result<Config, ConfigError> {
    load_config_from(&config_path())
}

/// Load config from an explicit path, layered under `CURIO_*` env vars.
///
/// Precedence, lowest first: built-in defaults, the TOML file, then
/// environment variables (`CURIO_DEFAULTS__TIMEOUT`, ...).
pub fn load_config_from(path: &std::path::Path) -> Result<Config, ConfigError> {
    let config = Figment::from(Serialized::defaults(Config::default()))
        .merge(Toml::file(path))
        .merge(Env::prefixed("CURIO_").split("__"))
        .extract()?;
    Ok(config)
}

/// Pick the active profile name: explicit choice, then the file's
/// `default_profile`, then `"default"`.
pub fn active_profile_name(explicit: Option<&str>, config: &Config) -> String {
    explicit
        .map(str::to_owned)
        .or_else(|| config.default_profile.clone())
        .unwrap_or_else(|| "default".to_owned())
}

// ── Resolution ──────────────────────────────────────────────────────

/// Resolve a named profile into a ready `ConsoleConfig`.
///
/// Token precedence: `token_env` indirection, then plaintext `token`,
/// then the `CURIO_TOKEN` environment variable.
pub fn resolve_profile(config: &Config, name: &str) -> Result<ConsoleConfig, ConfigError> {
    let profile = config
        .profiles
        .get(name)
        .ok_or_else(|| ConfigError::UnknownProfile {
            profile: name.to_owned(),
            path: config_path().display().to_string(),
        })?;

    let url_str = profile
        .url
        .as_deref()
        .ok_or_else(|| ConfigError::Validation {
            field: "url".into(),
            reason: format!("profile '{name}' has no url"),
        })?;
    let url: url::Url = url_str.parse().map_err(|e| ConfigError::Validation {
        field: "url".into(),
        reason: format!("{e}"),
    })?;

    let token = resolve_token(profile, name)?;

    let insecure = profile.insecure.unwrap_or(config.defaults.insecure);
    let tls = match (&profile.ca_cert, insecure) {
        (_, true) => TlsVerification::DangerAcceptInvalid,
        (Some(path), false) => TlsVerification::CustomCa(path.clone()),
        (None, false) => TlsVerification::System,
    };

    Ok(ConsoleConfig {
        url,
        token,
        tls,
        timeout: Duration::from_secs(profile.timeout.unwrap_or(config.defaults.timeout)),
        page_limit: profile.page_limit.unwrap_or(config.defaults.page_limit),
    })
}

fn resolve_token(profile: &Profile, name: &str) -> Result<SecretString, ConfigError> {
    if let Some(var) = &profile.token_env {
        if let Ok(value) = std::env::var(var) {
            return Ok(value.into());
        }
    }
    if let Some(token) = &profile.token {
        return Ok(token.clone().into());
    }
    if let Ok(value) = std::env::var("CURIO_TOKEN") {
        return Ok(value.into());
    }
    Err(ConfigError::NoToken {
        profile: name.to_owned(),
    })
}
