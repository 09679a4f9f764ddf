// Catalog entities: scheduled mint drops and curated collections.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{EntityId, Resource};

/// Lifecycle of a mint drop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::IntoStaticStr)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum DropStatus {
    Draft,
    Scheduled,
    Live,
    Ended,
}

/// A scheduled or running mint drop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MintDrop {
    pub id: EntityId,
    pub title: String,
    pub slug: String,
    pub status: DropStatus,
    pub starts_at: Option<DateTime<Utc>>,
    pub supply: u32,
    pub minted: u32,
    pub creator_id: EntityId,
    pub featured: bool,
    pub created_at: DateTime<Utc>,
}

impl Resource for MintDrop {
    const ENDPOINT: &'static str = "drops";
    const NAME: &'static str = "drop";

    fn id(&self) -> &EntityId {
        &self.id
    }

    fn partition(&self) -> Option<&'static str> {
        Some(self.status.into())
    }
}

/// A curated collection on the marketplace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Collection {
    pub id: EntityId,
    pub name: String,
    pub slug: String,
    pub creator_id: EntityId,
    pub verified: bool,
    pub floor_price: Option<f64>,
    pub item_count: u32,
    pub created_at: DateTime<Utc>,
}

impl Resource for Collection {
    const ENDPOINT: &'static str = "collections";
    const NAME: &'static str = "collection";

    fn id(&self) -> &EntityId {
        &self.id
    }

    fn partition(&self) -> Option<&'static str> {
        Some(if self.verified {
            "verified"
        } else {
            "unverified"
        })
    }
}
