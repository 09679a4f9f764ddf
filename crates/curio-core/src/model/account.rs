// Account entities: platform users and their linked wallets.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{EntityId, Resource};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::IntoStaticStr)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum UserRole {
    Admin,
    Moderator,
    Member,
}

/// A platform user as seen by operators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: EntityId,
    pub handle: String,
    pub email: Option<String>,
    pub role: UserRole,
    pub verified: bool,
    pub banned: bool,
    pub created_at: DateTime<Utc>,
}

impl Resource for User {
    const ENDPOINT: &'static str = "users";
    const NAME: &'static str = "user";

    fn id(&self) -> &EntityId {
        &self.id
    }

    fn partition(&self) -> Option<&'static str> {
        Some(if self.banned { "banned" } else { "active" })
    }
}

/// A wallet linked to a user account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Wallet {
    pub id: EntityId,
    pub address: String,
    pub chain: String,
    pub user_id: EntityId,
    pub primary: bool,
    pub verified: bool,
    pub created_at: DateTime<Utc>,
}

impl Resource for Wallet {
    const ENDPOINT: &'static str = "wallets";
    const NAME: &'static str = "wallet";

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
