// Billing entities: subscriptions, fee schedules, treasury movements.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{EntityId, Resource};

// ── Subscriptions ───────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::IntoStaticStr)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SubscriptionStatus {
    Active,
    Paused,
    Canceled,
}

/// A creator's paid subscription to platform features.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subscription {
    pub id: EntityId,
    pub user_id: EntityId,
    pub plan: String,
    pub status: SubscriptionStatus,
    pub renews_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl Resource for Subscription {
    const ENDPOINT: &'static str = "subscriptions";
    const NAME: &'static str = "subscription";

    fn id(&self) -> &EntityId {
        &self.id
    }

    fn partition(&self) -> Option<&'static str> {
        Some(self.status.into())
    }
}

// ── Fee schedules ───────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::IntoStaticStr)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum FeeKind {
    /// Charged on primary sales (mints).
    Primary,
    /// Charged on secondary-market trades.
    Secondary,
}

/// A marketplace fee rate, expressed in basis points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeeSchedule {
    pub id: EntityId,
    pub name: String,
    pub kind: FeeKind,
    pub basis_points: u16,
    pub active: bool,
    pub created_at: DateTime<Utc>,
}

impl Resource for FeeSchedule {
    const ENDPOINT: &'static str = "fees";
    const NAME: &'static str = "fee schedule";

    fn id(&self) -> &EntityId {
        &self.id
    }

    fn partition(&self) -> Option<&'static str> {
        Some(if self.active { "active" } else { "inactive" })
    }
}

// ── Treasury ────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::IntoStaticStr)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum TreasuryKind {
    Deposit,
    Withdrawal,
    FeeSweep,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::IntoStaticStr)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum TreasuryStatus {
    Pending,
    Settled,
    Rejected,
}

/// A movement in or out of the platform treasury. Audit-style: listings
/// are most-recent-first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TreasuryEntry {
    pub id: EntityId,
    pub kind: TreasuryKind,
    pub amount: f64,
    pub currency: String,
    pub status: TreasuryStatus,
    pub created_at: DateTime<Utc>,
}

impl Resource for TreasuryEntry {
    const ENDPOINT: &'static str = "treasury";
    const NAME: &'static str = "treasury entry";

    fn id(&self) -> &EntityId {
        &self.id
    }

    fn partition(&self) -> Option<&'static str> {
        Some(self.status.into())
    }
}
