// ── Statistics cache ──
//
// A second, independently fetched aggregate view of the resource. Local
// deltas keep it approximately current between fetches; every
// authoritative fetch overwrites the snapshot wholesale, so deltas are
// never double-applied and drift is bounded by the fetch cadence.

use std::collections::BTreeMap;

use serde::Serialize;

use curio_api::StatsData;

/// Resource-wide aggregates: a grand total, counts per mutually
/// exclusive bucket, and named sums. Independent of the loaded page and
/// never derived from it.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StatisticsSnapshot {
    pub total: u64,
    pub buckets: BTreeMap<String, u64>,
    pub sums: BTreeMap<String, f64>,
}

impl From<StatsData> for StatisticsSnapshot {
    fn from(data: StatsData) -> Self {
        Self {
            total: data.total,
            buckets: data.buckets,
            sums: data.sums,
        }
    }
}

impl StatisticsSnapshot {
    pub fn bucket(&self, name: &str) -> u64 {
        self.buckets.get(name).copied().unwrap_or(0)
    }

    /// Local delta for a successful create.
    pub(crate) fn record_created(&mut self, bucket: Option<&str>) {
        self.total += 1;
        if let Some(name) = bucket {
            *self.buckets.entry(name.to_owned()).or_insert(0) += 1;
        }
    }

    /// Local delta for a successful (or absorbed) removal.
    pub(crate) fn record_removed(&mut self, bucket: Option<&str>) {
        self.total = self.total.saturating_sub(1);
        if let Some(name) = bucket {
            if let Some(count) = self.buckets.get_mut(name) {
                *count = count.saturating_sub(1);
            }
        }
    }

    /// Local delta for a status flip: the item leaves one bucket and
    /// enters another. The grand total is unchanged.
    pub(crate) fn record_moved(&mut self, from: Option<&str>, to: Option<&str>) {
        if let Some(name) = from {
            if let Some(count) = self.buckets.get_mut(name) {
                *count = count.saturating_sub(1);
            }
        }
        if let Some(name) = to {
            *self.buckets.entry(name.to_owned()).or_insert(0) += 1;
        }
    }
}

/// What the statistics channel carries: the snapshot plus the last
/// fetch failure, if any. A failed fetch leaves the previous snapshot
/// visible.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StatisticsState {
    pub snapshot: StatisticsSnapshot,
    pub fetch_error: Option<String>,
}
