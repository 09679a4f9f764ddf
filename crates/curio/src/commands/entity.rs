//! Generic subcommands shared by every resource.
//!
//! One handler, parameterized by the store — the whole point of the
//! generic store is that per-resource command modules have nothing left
//! to duplicate.

use clap::{Args, Subcommand};
use serde_json::Value;

use curio_core::model::Resource;
use curio_core::store::ResourceStore;
use curio_core::EntityId;

use crate::error::CliError;
use crate::output;

#[derive(Debug, Args)]
pub struct EntityArgs {
    #[command(subcommand)]
    pub action: EntityAction,
}

#[derive(Debug, Subcommand)]
pub enum EntityAction {
    /// List a page of items.
    List(ListArgs),
    /// Show resource-wide statistics.
    Stats,
    /// Flip an item's status (active/inactive, published/hidden, ...).
    Toggle {
        /// Item id.
        id: String,
    },
    /// Delete an item.
    Delete {
        /// Item id.
        id: String,
    },
}

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Filter as key=value (repeatable). An empty value clears the key.
    #[arg(long = "filter", short = 'f', value_name = "KEY=VALUE")]
    pub filters: Vec<String>,

    /// Page to fetch.
    #[arg(long, default_value_t = 1)]
    pub page: u32,
}

/// Parse `key=value` pairs into a filter patch. `key=` (empty value)
/// clears the constraint.
fn parse_filters(raw: &[String]) -> Result<Vec<(String, Option<Value>)>, CliError> {
    raw.iter()
        .map(|pair| {
            let (key, value) = pair.split_once('=').ok_or_else(|| CliError::Validation {
                message: format!("invalid filter '{pair}', expected key=value"),
            })?;
            let value = if value.is_empty() {
                None
            } else {
                Some(Value::String(value.to_owned()))
            };
            Ok((key.to_owned(), value))
        })
        .collect()
}

pub async fn handle<T: Resource>(
    store: &ResourceStore<T>,
    args: EntityArgs,
) -> Result<(), CliError> {
    match args.action {
        EntityAction::List(list) => run_list(store, &list).await,
        EntityAction::Stats => run_stats(store).await,
        EntityAction::Toggle { id } => {
            let item = store.toggle(&EntityId::from(id)).await?;
            output::json(item.as_ref());
            output::success(&format!("{} toggled", T::NAME));
            Ok(())
        }
        EntityAction::Delete { id } => {
            store.delete(&EntityId::from(id.clone())).await?;
            output::success(&format!("{} {id} deleted", T::NAME));
            Ok(())
        }
    }
}

pub async fn run_list<T: Resource>(
    store: &ResourceStore<T>,
    args: &ListArgs,
) -> Result<(), CliError> {
    store.set_filters(parse_filters(&args.filters)?);
    if args.page > 1 {
        store.set_page(args.page);
    }
    store.list().await;

    let state = store.collection();
    if let Some(error) = state.fetch_error {
        return Err(CliError::Operation { message: error });
    }

    output::json(&state.items);
    output::page_summary(&state.pagination);
    Ok(())
}

pub async fn run_stats<T: Resource>(store: &ResourceStore<T>) -> Result<(), CliError> {
    store.stats().await;

    let state = store.statistics_state();
    if state.snapshot == curio_core::StatisticsSnapshot::default() {
        if let Some(error) = &state.fetch_error {
            return Err(CliError::Operation {
                message: error.clone(),
            });
        }
    }
    output::statistics(&state);
    Ok(())
}
