//! Command dispatch: bridges CLI args → console stores → output.

pub mod banners;
pub mod entity;

use curio_core::Console;

use crate::cli::Command;
use crate::error::CliError;

pub async fn dispatch(cmd: Command, console: &Console) -> Result<(), CliError> {
    match cmd {
        Command::Banners(args) => banners::handle(console, args).await,
        Command::Drops(args) => entity::handle(console.drops(), args).await,
        Command::Collections(args) => entity::handle(console.collections(), args).await,
        Command::Posts(args) => entity::handle(console.posts(), args).await,
        Command::Subscriptions(args) => entity::handle(console.subscriptions(), args).await,
        Command::Fees(args) => entity::handle(console.fees(), args).await,
        Command::Treasury(args) => entity::handle(console.treasury(), args).await,
        Command::Users(args) => entity::handle(console.users(), args).await,
        Command::Wallets(args) => entity::handle(console.wallets(), args).await,
    }
}
