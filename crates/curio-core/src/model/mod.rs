//! Domain model for the admin console.
//!
//! One type per backend resource, each implementing [`Resource`] so the
//! generic store can address it. Only [`Banner`] carries a dense global
//! ordering and therefore implements [`Positioned`].

pub mod account;
pub mod banner;
pub mod billing;
pub mod catalog;
pub mod entity_id;
pub mod post;

pub use account::{User, UserRole, Wallet};
pub use banner::Banner;
pub use billing::{
    FeeKind, FeeSchedule, Subscription, SubscriptionStatus, TreasuryEntry, TreasuryKind,
    TreasuryStatus,
};
pub use catalog::{Collection, DropStatus, MintDrop};
pub use entity_id::EntityId;
pub use post::{Post, PostStatus};

use serde::Serialize;
use serde::de::DeserializeOwned;

/// A server-owned record the generic store can synchronize.
///
/// `ENDPOINT` is the resource's path segment under `/admin/`; `NAME` the
/// singular noun used in user-facing messages.
pub trait Resource: Clone + Send + Sync + Serialize + DeserializeOwned + 'static {
    const ENDPOINT: &'static str;
    const NAME: &'static str;

    /// Stable server-assigned identity.
    fn id(&self) -> &EntityId;

    /// The statistics bucket this item currently counts toward, or
    /// `None` for unpartitioned resources. Bucket names must match the
    /// keys the `/stats` endpoint reports.
    fn partition(&self) -> Option<&'static str>;
}

/// A resource whose items carry a dense global order (`position` 1..N).
///
/// Implementing this unlocks the optimistic reorder engine on the
/// resource's store.
pub trait Positioned: Resource {
    fn position(&self) -> u32;
    fn set_position(&mut self, position: u32);
}
