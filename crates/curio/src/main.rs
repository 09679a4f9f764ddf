mod cli;
mod commands;
mod error;
mod output;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use curio_core::{Console, ConsoleConfig, TlsVerification};

use crate::cli::{Cli, GlobalOpts};
use crate::error::CliError;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    init_tracing(cli.global.verbose);

    if let Err(err) = run(cli).await {
        let code = err.exit_code();
        eprintln!("{:?}", miette::Report::new(err));
        std::process::exit(code);
    }
}

fn init_tracing(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_target(false)
        .init();
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let config = build_console_config(&cli.global)?;
    let console = Console::new(&config)?;

    tracing::debug!(command = ?cli.command, "dispatching command");
    commands::dispatch(cli.command, &console).await
}

/// Build a `ConsoleConfig` from the config file, profile, and CLI
/// overrides.
fn build_console_config(global: &GlobalOpts) -> Result<ConsoleConfig, CliError> {
    let file = curio_config::load_config()?;
    let profile_name = curio_config::active_profile_name(global.profile.as_deref(), &file);

    // A configured profile wins; CLI flags override individual fields.
    let mut resolved = if file.profiles.contains_key(&profile_name) {
        curio_config::resolve_profile(&file, &profile_name)?
    } else {
        // No profile — build from flags and env vars alone.
        let url_str = global.url.as_deref().ok_or_else(|| CliError::Config {
            message: format!(
                "no profile '{profile_name}' in {} and no --url given",
                curio_config::config_path().display()
            ),
        })?;
        let url: url::Url = url_str.parse().map_err(|e| CliError::Config {
            message: format!("invalid URL '{url_str}': {e}"),
        })?;
        let token = std::env::var("CURIO_TOKEN")
            .map(secrecy::SecretString::from)
            .map_err(|_| CliError::Auth {
                message: "CURIO_TOKEN is not set".into(),
            })?;
        ConsoleConfig::new(url, token)
    };

    if let Some(url_str) = global.url.as_deref() {
        resolved.url = url_str.parse().map_err(|e| CliError::Config {
            message: format!("invalid URL '{url_str}': {e}"),
        })?;
    }
    if global.insecure {
        resolved.tls = TlsVerification::DangerAcceptInvalid;
    }

    Ok(resolved)
}
