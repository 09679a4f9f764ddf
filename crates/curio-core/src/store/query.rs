// ── Filter / pagination intent ──
//
// Filters and the page cursor live in one container so a refetch can
// never observe a mismatched (filters, page) pair. Changing filters
// always snaps the page back to 1.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;

use curio_api::PageMeta;

pub const DEFAULT_PAGE_LIMIT: u32 = 20;

// ── FilterState ─────────────────────────────────────────────────────

/// Open key→value constraint map for one resource (search text, status,
/// date range, sort key, ...). Absent keys mean "no constraint".
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FilterState(BTreeMap<String, Value>);

impl FilterState {
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::collections::btree_map::Iter<'_, String, Value> {
        self.0.iter()
    }

    /// Merge a partial update: present keys overwrite, `None` REMOVES the
    /// constraint (a cleared filter must never serialize as a literal
    /// null on the wire).
    pub(crate) fn apply<I>(&mut self, patch: I)
    where
        I: IntoIterator<Item = (String, Option<Value>)>,
    {
        for (key, value) in patch {
            match value {
                Some(v) => {
                    self.0.insert(key, v);
                }
                None => {
                    self.0.remove(&key);
                }
            }
        }
    }

    /// Flatten to query-string pairs.
    pub(crate) fn to_query_pairs(&self) -> Vec<(String, String)> {
        self.0
            .iter()
            .map(|(k, v)| (k.clone(), scalar_to_string(v)))
            .collect()
    }
}

impl<'a> IntoIterator for &'a FilterState {
    type Item = (&'a String, &'a Value);
    type IntoIter = std::collections::btree_map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

fn scalar_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

// ── PaginationState ─────────────────────────────────────────────────

/// Observable pagination: `page` is the current intent (reset to 1 on any
/// filter change), `total`/`total_pages` the truth of the last completed
/// fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationState {
    pub page: u32,
    pub limit: u32,
    pub total: u64,
    pub total_pages: u32,
}

impl Default for PaginationState {
    fn default() -> Self {
        Self {
            page: 1,
            limit: DEFAULT_PAGE_LIMIT,
            total: 0,
            total_pages: 0,
        }
    }
}

impl From<PageMeta> for PaginationState {
    fn from(meta: PageMeta) -> Self {
        Self {
            page: meta.page.max(1),
            limit: meta.limit,
            total: meta.total,
            total_pages: meta.total_pages,
        }
    }
}

// ── QueryState ──────────────────────────────────────────────────────

/// The intent side of the coordinator: what the next `list` call will
/// ask for. Mutated only through the store's `set_filters`/`set_page`.
#[derive(Debug, Clone)]
pub(crate) struct QueryState {
    pub filters: FilterState,
    pub page: u32,
    pub limit: u32,
}

impl QueryState {
    pub(crate) fn new(limit: u32) -> Self {
        Self {
            filters: FilterState::default(),
            page: 1,
            limit,
        }
    }

    /// Merge a filter patch and unconditionally reset the page cursor.
    pub(crate) fn set_filters<I>(&mut self, patch: I)
    where
        I: IntoIterator<Item = (String, Option<Value>)>,
    {
        self.filters.apply(patch);
        self.page = 1;
    }
}
