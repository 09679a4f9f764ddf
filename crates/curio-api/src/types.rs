//! Wire types for the Curio admin API.
//!
//! Every response arrives inside a `{"data": ...}` envelope; failures carry
//! an HTTP status plus a `{"message": ...}` body. Field names use camelCase
//! via `#[serde(rename_all = "camelCase")]`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

// ── Envelope ─────────────────────────────────────────────────────────

/// The `{"data": ...}` wrapper around every successful response body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub data: T,
}

/// Error body shape: `{"message": "..."}` plus anything else the backend
/// chooses to attach (ignored).
#[derive(Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

// ── Listing ──────────────────────────────────────────────────────────

/// Pagination metadata returned alongside every list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    pub page: u32,
    pub limit: u32,
    pub total: u64,
    pub total_pages: u32,
}

/// Payload of `GET /admin/{resource}` — one page of items plus metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListData<T> {
    pub items: Vec<T>,
    pub pagination: PageMeta,
}

// ── Statistics ───────────────────────────────────────────────────────

/// Payload of `GET /admin/{resource}/stats` — resource-wide aggregates,
/// independent of any page or filter.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StatsData {
    #[serde(default)]
    pub total: u64,
    /// Counts within mutually exclusive buckets (e.g. active/inactive).
    #[serde(default)]
    pub buckets: BTreeMap<String, u64>,
    /// Aggregate sums (volumes, fee totals) keyed by metric name.
    #[serde(default)]
    pub sums: BTreeMap<String, f64>,
}

// ── Reorder ──────────────────────────────────────────────────────────

/// Body of `PATCH /admin/{resource}/reorder` — a batched id→position map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReorderRequest {
    pub positions: BTreeMap<String, u32>,
}
