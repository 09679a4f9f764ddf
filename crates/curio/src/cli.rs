//! Argument definitions for the `curio` binary.

use clap::{Args, Parser, Subcommand};

use crate::commands::{banners, entity};

#[derive(Debug, Parser)]
#[command(
    name = "curio",
    version,
    about = "Operator console for the Curio marketplace backend",
    propagate_version = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Profile name from the config file.
    #[arg(long, short = 'p', global = true, env = "CURIO_PROFILE")]
    pub profile: Option<String>,

    /// Backend base URL (overrides the profile).
    #[arg(long, global = true, env = "CURIO_URL")]
    pub url: Option<String>,

    /// Accept invalid TLS certificates.
    #[arg(long, short = 'k', global = true)]
    pub insecure: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(long, short = 'v', global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Promotional banners (order-sensitive).
    Banners(banners::BannerArgs),
    /// Mint drops.
    Drops(entity::EntityArgs),
    /// Curated collections.
    Collections(entity::EntityArgs),
    /// Editorial posts.
    Posts(entity::EntityArgs),
    /// Creator subscriptions.
    Subscriptions(entity::EntityArgs),
    /// Marketplace fee schedules.
    Fees(entity::EntityArgs),
    /// Treasury movements.
    Treasury(entity::EntityArgs),
    /// Platform users.
    Users(entity::EntityArgs),
    /// Linked wallets.
    Wallets(entity::EntityArgs),
}
