use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{EntityId, Resource};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::IntoStaticStr)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum PostStatus {
    Published,
    Hidden,
}

/// An announcement or editorial post authored by the team.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: EntityId,
    pub title: String,
    pub author_id: EntityId,
    pub status: PostStatus,
    pub pinned: bool,
    pub created_at: DateTime<Utc>,
}

impl Resource for Post {
    const ENDPOINT: &'static str = "posts";
    const NAME: &'static str = "post";

    fn id(&self) -> &EntityId {
        &self.id
    }

    fn partition(&self) -> Option<&'static str> {
        Some(self.status.into())
    }
}
