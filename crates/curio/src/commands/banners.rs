//! Banner commands: the shared verbs plus create and drag-reorder,
//! which only the order-sensitive banner resource supports.

use clap::{Args, Subcommand};
use serde_json::json;

use curio_core::Console;
use curio_core::EntityId;

use super::entity::{self, ListArgs};
use crate::error::CliError;
use crate::output;

#[derive(Debug, Args)]
pub struct BannerArgs {
    #[command(subcommand)]
    pub action: BannerAction,
}

#[derive(Debug, Subcommand)]
pub enum BannerAction {
    /// List a page of banners.
    List(ListArgs),
    /// Show banner statistics.
    Stats,
    /// Create a banner.
    Create(CreateBannerArgs),
    /// Flip a banner between active and inactive.
    Toggle { id: String },
    /// Delete a banner.
    Delete { id: String },
    /// Move a banner into another banner's slot and commit the order.
    Reorder {
        /// Id of the banner to move.
        id: String,
        /// Id of the banner whose slot it takes.
        #[arg(long)]
        onto: String,
    },
}

#[derive(Debug, Args)]
pub struct CreateBannerArgs {
    /// Display title.
    #[arg(long)]
    pub title: String,

    /// Image URL.
    #[arg(long)]
    pub image_url: String,

    /// Optional click-through URL.
    #[arg(long)]
    pub link_url: Option<String>,

    /// Create as inactive (default: active).
    #[arg(long)]
    pub inactive: bool,
}

pub async fn handle(console: &Console, args: BannerArgs) -> Result<(), CliError> {
    let store = console.banners();
    match args.action {
        BannerAction::List(list) => entity::run_list(store, &list).await,
        BannerAction::Stats => entity::run_stats(store).await,
        BannerAction::Create(create) => {
            let payload = json!({
                "title": create.title,
                "imageUrl": create.image_url,
                "linkUrl": create.link_url,
                "active": !create.inactive,
            });
            let banner = store.create(&payload).await?;
            output::json(banner.as_ref());
            output::success("banner created");
            Ok(())
        }
        BannerAction::Toggle { id } => {
            let banner = store.toggle(&EntityId::from(id)).await?;
            output::json(banner.as_ref());
            output::success("banner toggled");
            Ok(())
        }
        BannerAction::Delete { id } => {
            store.delete(&EntityId::from(id.clone())).await?;
            output::success(&format!("banner {id} deleted"));
            Ok(())
        }
        BannerAction::Reorder { id, onto } => {
            // Load the full current order first; the commit only covers
            // the loaded page, so reordering assumes a single page.
            store.list().await;
            if let Some(error) = store.collection().fetch_error {
                return Err(CliError::Operation { message: error });
            }

            let dragged = EntityId::from(id.clone());
            if !store.begin_drag(&dragged) {
                return Err(CliError::NotFound {
                    message: format!("banner {id} is not on the current page"),
                });
            }
            if !store.drag_over(&EntityId::from(onto.clone())) {
                return Err(CliError::NotFound {
                    message: format!("banner {onto} is not on the current page"),
                });
            }

            store.commit_reorder().await?;

            output::json(&store.collection().items);
            output::success("order committed");
            Ok(())
        }
    }
}
