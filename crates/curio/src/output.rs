//! Output formatting: JSON for data, colored one-liners for outcomes.

use owo_colors::OwoColorize;
use serde::Serialize;

use curio_core::store::{PaginationState, StatisticsState};

/// Pretty-print any serializable payload as JSON.
pub fn json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(rendered) => println!("{rendered}"),
        Err(e) => eprintln!("{} failed to render output: {e}", "error:".red().bold()),
    }
}

/// One-line pagination summary after a listing.
pub fn page_summary(pagination: &PaginationState) {
    println!(
        "{} page {}/{} · {} total",
        "──".dimmed(),
        pagination.page,
        pagination.total_pages.max(1),
        pagination.total
    );
}

/// Statistics snapshot plus a stale-data warning when the last fetch
/// failed.
pub fn statistics(state: &StatisticsState) {
    json(&state.snapshot);
    if let Some(error) = &state.fetch_error {
        eprintln!(
            "{} showing last known snapshot ({error})",
            "warning:".yellow().bold()
        );
    }
}

/// Green confirmation line.
pub fn success(message: &str) {
    println!("{} {message}", "✓".green().bold());
}
