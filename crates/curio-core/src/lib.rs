//! Resource-synchronization core for the Curio admin console.
//!
//! Every entity screen in the console is built on the same pattern:
//! fetch a paginated, filtered page plus an independent aggregate view,
//! track the resource's mutation lifecycle, apply optimistic local
//! effects, and reconcile with server truth afterwards. This crate
//! implements that pattern ONCE, generically, instead of once per
//! resource:
//!
//! - **[`ResourceStore<T>`]** — the per-resource sync unit. Combines the
//!   filter/pagination coordinator (filter changes reset the page; both
//!   live in one container), a sequence-numbered list channel that
//!   discards superseded responses, the resource-scoped mutation
//!   tracker, the statistics cache with local deltas, and — for
//!   [`Positioned`] resources — the optimistic drag-reorder engine.
//!
//! - **[`Console`]** — composition root: one store per entity type
//!   (banners, drops, collections, posts, subscriptions, fees,
//!   treasury, users, wallets) over one shared [`AdminClient`].
//!
//! - **[`StateStream`]** — subscription handle over a store's state
//!   channels, for reactive rendering.
//!
//! - **Domain model** ([`model`]) — the nine entity types, each
//!   implementing [`Resource`] with its endpoint and statistics
//!   partition.
//!
//! Reads never throw: `list`/`stats` store their failures in state and
//! leave prior data visible. Mutations record on the tracker AND return
//! a [`CoreError`]. Authentication recovery is deliberately absent --
//! 401s pass through verbatim to whatever embeds the console.
//!
//! [`AdminClient`]: curio_api::AdminClient

pub mod config;
pub mod console;
pub mod error;
pub mod model;
pub mod store;
pub mod stream;

// ── Primary re-exports ──────────────────────────────────────────────
pub use config::{ConsoleConfig, TlsVerification};
pub use console::Console;
pub use error::CoreError;
pub use store::{
    ActionState, CollectionState, FilterState, OperationKind, PaginationState, ResourceStore,
    StatisticsSnapshot, StatisticsState,
};
pub use stream::StateStream;

// Re-export model types at the crate root for ergonomics.
pub use model::{
    Banner, Collection, DropStatus, EntityId, FeeKind, FeeSchedule, MintDrop, Positioned, Post,
    PostStatus, Resource, Subscription, SubscriptionStatus, TreasuryEntry, TreasuryKind,
    TreasuryStatus, User, UserRole, Wallet,
};
