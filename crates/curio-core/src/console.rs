// ── Console composition root ──
//
// One ResourceStore per entity type over a single shared HTTP channel.
// Stores share no mutable state with each other, so no cross-resource
// coordination exists or is needed.

use std::sync::Arc;

use tracing::debug;

use curio_api::{AdminClient, TlsMode, TransportConfig};

use crate::config::{ConsoleConfig, TlsVerification};
use crate::error::CoreError;
use crate::model::{
    Banner, Collection, FeeSchedule, MintDrop, Post, Subscription, TreasuryEntry, User, Wallet,
};
use crate::store::ResourceStore;

/// The admin console's data layer: every entity screen reads from and
/// dispatches to exactly one of these stores. Cheap to share behind an
/// `Arc`; the UI layer owns it exclusively.
pub struct Console {
    banners: ResourceStore<Banner>,
    drops: ResourceStore<MintDrop>,
    collections: ResourceStore<Collection>,
    posts: ResourceStore<Post>,
    subscriptions: ResourceStore<Subscription>,
    fees: ResourceStore<FeeSchedule>,
    treasury: ResourceStore<TreasuryEntry>,
    users: ResourceStore<User>,
    wallets: ResourceStore<Wallet>,
}

impl Console {
    /// Build the shared HTTP client and one store per resource. Does not
    /// talk to the backend — the first fetch happens when a screen asks
    /// for it.
    pub fn new(config: &ConsoleConfig) -> Result<Self, CoreError> {
        let transport = TransportConfig {
            tls: match &config.tls {
                TlsVerification::System => TlsMode::System,
                TlsVerification::CustomCa(path) => TlsMode::CustomCa(path.clone()),
                TlsVerification::DangerAcceptInvalid => TlsMode::DangerAcceptInvalid,
            },
            timeout: config.timeout,
        };

        let client = Arc::new(AdminClient::from_token(
            config.url.as_str(),
            &config.token,
            &transport,
        )?);

        debug!(url = %config.url, "console data layer ready");
        Ok(Self::from_client(client, config.page_limit))
    }

    /// Build from an already-constructed client (tests, embedders that
    /// manage auth themselves).
    pub fn from_client(client: Arc<AdminClient>, page_limit: u32) -> Self {
        Self {
            banners: ResourceStore::new(Arc::clone(&client), page_limit),
            drops: ResourceStore::new(Arc::clone(&client), page_limit),
            collections: ResourceStore::new(Arc::clone(&client), page_limit),
            posts: ResourceStore::new(Arc::clone(&client), page_limit),
            subscriptions: ResourceStore::new(Arc::clone(&client), page_limit),
            fees: ResourceStore::new(Arc::clone(&client), page_limit),
            treasury: ResourceStore::new(Arc::clone(&client), page_limit),
            users: ResourceStore::new(Arc::clone(&client), page_limit),
            wallets: ResourceStore::new(client, page_limit),
        }
    }

    // ── Store accessors ──────────────────────────────────────────────

    pub fn banners(&self) -> &ResourceStore<Banner> {
        &self.banners
    }

    pub fn drops(&self) -> &ResourceStore<MintDrop> {
        &self.drops
    }

    pub fn collections(&self) -> &ResourceStore<Collection> {
        &self.collections
    }

    pub fn posts(&self) -> &ResourceStore<Post> {
        &self.posts
    }

    pub fn subscriptions(&self) -> &ResourceStore<Subscription> {
        &self.subscriptions
    }

    pub fn fees(&self) -> &ResourceStore<FeeSchedule> {
        &self.fees
    }

    pub fn treasury(&self) -> &ResourceStore<TreasuryEntry> {
        &self.treasury
    }

    pub fn users(&self) -> &ResourceStore<User> {
        &self.users
    }

    pub fn wallets(&self) -> &ResourceStore<Wallet> {
        &self.wallets
    }
}
