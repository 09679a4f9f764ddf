//! CLI error types with miette diagnostics.
//!
//! Maps `CoreError` and `ConfigError` variants into user-facing errors
//! with actionable help text and stable exit codes.

use miette::Diagnostic;
use thiserror::Error;

use curio_config::ConfigError;
use curio_core::CoreError;

/// Exit codes.
pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const AUTH: i32 = 3;
    pub const NOT_FOUND: i32 = 4;
    pub const CONNECTION: i32 = 7;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    #[error("Could not reach the backend")]
    #[diagnostic(
        code(curio::connection_failed),
        help("Check the URL in your profile and that the backend is up.\nDetails: {message}")
    )]
    Connection { message: String },

    #[error("Authentication failed")]
    #[diagnostic(
        code(curio::auth_failed),
        help(
            "The backend rejected your token.\n\
             Set CURIO_TOKEN, or configure token / token_env in your profile.\n\
             Details: {message}"
        )
    )]
    Auth { message: String },

    #[error("{message}")]
    #[diagnostic(code(curio::not_found))]
    NotFound { message: String },

    #[error("{message}")]
    #[diagnostic(code(curio::validation), help("Fix the flagged field and retry."))]
    Validation { message: String },

    #[error("Configuration problem")]
    #[diagnostic(
        code(curio::config),
        help("Edit your config file or pass --url / --profile.\nDetails: {message}")
    )]
    Config { message: String },

    #[error("{message}")]
    #[diagnostic(code(curio::operation_failed))]
    Operation { message: String },
}

impl CliError {
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Connection { .. } => exit_code::CONNECTION,
            Self::Auth { .. } => exit_code::AUTH,
            Self::NotFound { .. } => exit_code::NOT_FOUND,
            Self::Validation { .. } | Self::Config { .. } => exit_code::USAGE,
            Self::Operation { .. } => exit_code::GENERAL,
        }
    }
}

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Unauthorized { message } => Self::Auth { message },
            CoreError::NotFound { .. } => Self::NotFound {
                message: err.to_string(),
            },
            CoreError::Validation { .. } => Self::Validation {
                message: err.to_string(),
            },
            CoreError::Network { message } => Self::Connection { message },
            CoreError::Config { message } => Self::Config { message },
            other => Self::Operation {
                message: other.to_string(),
            },
        }
    }
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        Self::Config {
            message: err.to_string(),
        }
    }
}
