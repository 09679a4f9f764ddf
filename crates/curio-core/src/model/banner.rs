use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{EntityId, Positioned, Resource};

/// Promotional banner shown on the storefront.
///
/// The only order-sensitive resource: `position` is unique and densely
/// assigned (1..N) across the whole banner list, and operators reorder
/// banners by dragging.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Banner {
    pub id: EntityId,
    pub title: String,
    pub image_url: String,
    pub link_url: Option<String>,
    pub position: u32,
    pub active: bool,
    pub created_at: DateTime<Utc>,
}

impl Resource for Banner {
    const ENDPOINT: &'static str = "banners";
    const NAME: &'static str = "banner";

    fn id(&self) -> &EntityId {
        &self.id
    }

    fn partition(&self) -> Option<&'static str> {
        Some(if self.active { "active" } else { "inactive" })
    }
}

impl Positioned for Banner {
    fn position(&self) -> u32 {
        self.position
    }

    fn set_position(&mut self, position: u32) {
        self.position = position;
    }
}
