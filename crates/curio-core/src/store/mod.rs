// ── Generic resource store ──
//
// One addressable sync unit per entity type. Combines the filter/page
// coordinator, the mutation tracker, the statistics cache, and (for
// positioned resources) the optimistic reorder engine over a single
// HTTP channel. Replaces what would otherwise be a hand-written store
// per resource, with all the drift that brings.

pub mod action;
pub mod query;
mod reorder;
pub mod stats;

use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;
use tokio::sync::watch;
use tracing::{debug, warn};

use curio_api::types::ListData;
use curio_api::{AdminClient, ReorderRequest};

use crate::error::CoreError;
use crate::model::{EntityId, Positioned, Resource};
use crate::stream::StateStream;

pub use action::{ActionState, OperationKind};
pub use query::{DEFAULT_PAGE_LIMIT, FilterState, PaginationState};
pub use stats::{StatisticsSnapshot, StatisticsState};

use query::QueryState;

// ── Collection state ────────────────────────────────────────────────

/// The loaded page and its pagination, updated together so a consumer
/// can never observe a collection whose length disagrees with its
/// pagination. `fetch_error` records the last failed `list` without
/// disturbing the items (no flashing to empty on a transient error).
#[derive(Debug, Clone, Serialize)]
pub struct CollectionState<T> {
    pub items: Vec<Arc<T>>,
    pub pagination: PaginationState,
    pub fetch_error: Option<String>,
}

impl<T> Default for CollectionState<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            pagination: PaginationState::default(),
            fetch_error: None,
        }
    }
}

// ── ResourceStore ───────────────────────────────────────────────────

/// Client-side synchronization unit for one remote resource.
///
/// Reads (`list`, `stats`) never block each other or mutations, store
/// their failures in state, and never touch the mutation tracker.
/// Mutations serialize through a FIFO gate so tracker transitions
/// resolve in issue order, and apply optimistic local effects (prepend,
/// removal, counter deltas, drag splicing) ahead of server truth.
pub struct ResourceStore<T: Resource> {
    client: Arc<AdminClient>,
    query: Mutex<QueryState>,
    collection: watch::Sender<CollectionState<T>>,
    statistics: watch::Sender<StatisticsState>,
    action: watch::Sender<ActionState>,
    dragging: Mutex<Option<EntityId>>,
    /// Monotonic sequence for list fetches; responses that are not the
    /// latest issued are discarded instead of clobbering fresher data.
    list_issued: AtomicU64,
    list_accepted: AtomicU64,
    /// FIFO-fair gate: mutation resolution order matches issue order.
    mutation_gate: tokio::sync::Mutex<()>,
}

impl<T: Resource> ResourceStore<T> {
    pub fn new(client: Arc<AdminClient>, page_limit: u32) -> Self {
        let (collection, _) = watch::channel(CollectionState::default());
        let (statistics, _) = watch::channel(StatisticsState::default());
        let (action, _) = watch::channel(ActionState::Idle);

        Self {
            client,
            query: Mutex::new(QueryState::new(page_limit)),
            collection,
            statistics,
            action,
            dragging: Mutex::new(None),
            list_issued: AtomicU64::new(0),
            list_accepted: AtomicU64::new(0),
            mutation_gate: tokio::sync::Mutex::new(()),
        }
    }

    // ── Intent: filters & pagination ─────────────────────────────────

    /// Merge a filter patch (present keys overwrite, `None` clears) and
    /// unconditionally reset the page to 1. Does NOT fetch — consumers
    /// batch intent changes, then call [`list`](Self::list) once.
    pub fn set_filters<I>(&self, patch: I)
    where
        I: IntoIterator<Item = (String, Option<serde_json::Value>)>,
    {
        self.query
            .lock()
            .expect("query lock poisoned")
            .set_filters(patch);
        self.collection.send_modify(|c| c.pagination.page = 1);
    }

    /// Move the page cursor without touching filters. Clamped to
    /// `[1, total_pages]` once totals are known.
    pub fn set_page(&self, page: u32) {
        let total_pages = self.collection.borrow().pagination.total_pages;
        let page = if total_pages > 0 {
            page.clamp(1, total_pages)
        } else {
            page.max(1)
        };

        self.query.lock().expect("query lock poisoned").page = page;
        self.collection.send_modify(|c| c.pagination.page = page);
    }

    // ── Reads ────────────────────────────────────────────────────────

    /// Fetch the current (filters, page) and replace the collection and
    /// pagination atomically. Failures are recorded in state and prior
    /// data stays visible; nothing is ever thrown at the caller.
    pub async fn list(&self) {
        let (pairs, page, limit) = {
            let q = self.query.lock().expect("query lock poisoned");
            (q.filters.to_query_pairs(), q.page, q.limit)
        };

        let seq = self.list_issued.fetch_add(1, Ordering::SeqCst) + 1;
        debug!(resource = T::NAME, seq, page, "issuing list fetch");

        match self.client.list::<T>(T::ENDPOINT, &pairs, page, limit).await {
            Ok(data) => self.accept_list(seq, data),
            Err(err) => {
                if self.list_is_stale(seq) {
                    debug!(resource = T::NAME, seq, "discarding error from superseded fetch");
                    return;
                }
                let message = CoreError::from(err).to_string();
                warn!(resource = T::NAME, %message, "list fetch failed; keeping previous page");
                self.collection.send_modify(|c| c.fetch_error = Some(message));
            }
        }
    }

    fn list_is_stale(&self, seq: u64) -> bool {
        seq != self.list_issued.load(Ordering::SeqCst)
            || seq <= self.list_accepted.load(Ordering::SeqCst)
    }

    fn accept_list(&self, seq: u64, data: ListData<T>) {
        // Only the latest-issued request may land; a slower, superseded
        // fetch must never overwrite a result issued after it.
        let mut accepted = self.list_accepted.load(Ordering::SeqCst);
        loop {
            if seq != self.list_issued.load(Ordering::SeqCst) || seq <= accepted {
                debug!(resource = T::NAME, seq, "discarding stale list response");
                return;
            }
            match self.list_accepted.compare_exchange(
                accepted,
                seq,
                Ordering::SeqCst,
                Ordering::SeqCst,
            ) {
                Ok(_) => break,
                Err(actual) => accepted = actual,
            }
        }

        let items: Vec<Arc<T>> = data.items.into_iter().map(Arc::new).collect();
        self.collection.send_replace(CollectionState {
            items,
            pagination: PaginationState::from(data.pagination),
            fetch_error: None,
        });
    }

    /// Refresh the aggregate snapshot. Independent of [`list`](Self::list);
    /// the authoritative result overwrites any local deltas wholesale.
    pub async fn stats(&self) {
        match self.client.stats(T::ENDPOINT).await {
            Ok(data) => {
                self.statistics.send_replace(StatisticsState {
                    snapshot: data.into(),
                    fetch_error: None,
                });
            }
            Err(err) => {
                let message = CoreError::from(err).to_string();
                warn!(resource = T::NAME, %message, "stats fetch failed; keeping previous snapshot");
                self.statistics.send_modify(|s| s.fetch_error = Some(message));
            }
        }
    }

    // ── Mutations ────────────────────────────────────────────────────

    /// Create an entity. On success the item is prepended (audit-style
    /// most-recent-first) and the statistics receive a local +1 delta.
    pub async fn create<B: Serialize + Sync>(&self, payload: &B) -> Result<Arc<T>, CoreError> {
        let _gate = self.mutation_gate.lock().await;
        self.action
            .send_replace(ActionState::pending(OperationKind::Create, None));

        match self.client.create::<T, B>(T::ENDPOINT, payload).await {
            Ok(item) => {
                let item = Arc::new(item);
                self.collection
                    .send_modify(|c| c.items.insert(0, Arc::clone(&item)));
                self.statistics
                    .send_modify(|s| s.snapshot.record_created(item.partition()));
                self.action
                    .send_replace(ActionState::success(OperationKind::Create));
                Ok(item)
            }
            Err(err) => Err(self.fail(OperationKind::Create, err)),
        }
    }

    /// Partial update. Replaces the matching item in place; its slot in
    /// the sequence and the pagination totals are untouched.
    pub async fn update<B: Serialize + Sync>(
        &self,
        id: &EntityId,
        payload: &B,
    ) -> Result<Arc<T>, CoreError> {
        let _gate = self.mutation_gate.lock().await;
        self.action.send_replace(ActionState::pending(
            OperationKind::Update,
            Some(id.clone()),
        ));

        match self
            .client
            .update::<T, B>(T::ENDPOINT, &id.to_string(), payload)
            .await
        {
            Ok(item) => {
                let item = Arc::new(item);
                self.collection.send_modify(|c| {
                    if let Some(slot) = c.items.iter_mut().find(|i| i.id() == id) {
                        *slot = Arc::clone(&item);
                    }
                });
                self.action
                    .send_replace(ActionState::success(OperationKind::Update));
                Ok(item)
            }
            Err(err) if err.is_not_found() => {
                self.absorb_missing(id);
                Err(self.fail(OperationKind::Update, err))
            }
            Err(err) => Err(self.fail(OperationKind::Update, err)),
        }
    }

    /// Delete by id. The item is removed from the page and the
    /// statistics receive a local −1 delta. A 404 means another client
    /// got there first; the store converges to the intended state.
    pub async fn delete(&self, id: &EntityId) -> Result<(), CoreError> {
        let _gate = self.mutation_gate.lock().await;
        self.action.send_replace(ActionState::pending(
            OperationKind::Delete,
            Some(id.clone()),
        ));

        match self.client.remove(T::ENDPOINT, &id.to_string()).await {
            Ok(()) => {
                self.remove_local(id);
                self.action
                    .send_replace(ActionState::success(OperationKind::Delete));
                Ok(())
            }
            Err(err) if err.is_not_found() => {
                warn!(resource = T::NAME, %id, "already deleted server-side");
                self.remove_local(id);
                self.action
                    .send_replace(ActionState::success(OperationKind::Delete));
                Ok(())
            }
            Err(err) => Err(self.fail(OperationKind::Delete, err)),
        }
    }

    /// Flip the item's status. In-place replace plus a bucket move on
    /// the statistics: the old bucket loses the item, the new one gains
    /// it.
    pub async fn toggle(&self, id: &EntityId) -> Result<Arc<T>, CoreError> {
        let _gate = self.mutation_gate.lock().await;
        self.action.send_replace(ActionState::pending(
            OperationKind::Toggle,
            Some(id.clone()),
        ));

        match self
            .client
            .toggle_status::<T>(T::ENDPOINT, &id.to_string())
            .await
        {
            Ok(item) => {
                let item = Arc::new(item);
                let mut old_bucket = None;
                let mut replaced = false;
                self.collection.send_modify(|c| {
                    if let Some(slot) = c.items.iter_mut().find(|i| i.id() == id) {
                        old_bucket = slot.partition();
                        *slot = Arc::clone(&item);
                        replaced = true;
                    }
                });
                if replaced {
                    self.statistics
                        .send_modify(|s| s.snapshot.record_moved(old_bucket, item.partition()));
                }
                self.action
                    .send_replace(ActionState::success(OperationKind::Toggle));
                Ok(item)
            }
            Err(err) if err.is_not_found() => {
                self.absorb_missing(id);
                Err(self.fail(OperationKind::Toggle, err))
            }
            Err(err) => Err(self.fail(OperationKind::Toggle, err)),
        }
    }

    fn fail(&self, kind: OperationKind, err: curio_api::Error) -> CoreError {
        let core = CoreError::from(err);
        self.action
            .send_replace(ActionState::failed(kind, core.to_string()));
        core
    }

    /// Remove an item from the loaded page and apply the matching
    /// statistics delta. Returns `true` if the item was present.
    fn remove_local(&self, id: &EntityId) -> bool {
        let mut removed_bucket = None;
        let mut removed = false;
        self.collection.send_modify(|c| {
            if let Some(index) = c.items.iter().position(|i| i.id() == id) {
                let item = c.items.remove(index);
                removed_bucket = item.partition();
                removed = true;
            }
        });
        if removed {
            self.statistics
                .send_modify(|s| s.snapshot.record_removed(removed_bucket));
        }
        removed
    }

    /// A mutation referenced an id another client already deleted:
    /// absorb by dropping the stale item locally. Non-fatal.
    fn absorb_missing(&self, id: &EntityId) {
        if self.remove_local(id) {
            warn!(resource = T::NAME, %id, "stale item removed after concurrent deletion");
        }
    }

    // ── Tracker maintenance ──────────────────────────────────────────

    /// Drop a lingering success signal. Idempotent; the auto-clear
    /// timer belongs to the consumer.
    pub fn clear_success(&self) {
        self.action.send_if_modified(ActionState::clear_success);
    }

    /// Drop a lingering error. Idempotent.
    pub fn clear_error(&self) {
        self.action.send_if_modified(ActionState::clear_error);
    }

    /// Reset the tracker to idle — called on route entry.
    pub fn reset_action(&self) {
        self.action.send_replace(ActionState::Idle);
    }

    // ── Snapshots & subscriptions ────────────────────────────────────

    pub fn collection(&self) -> CollectionState<T> {
        self.collection.borrow().clone()
    }

    pub fn pagination(&self) -> PaginationState {
        self.collection.borrow().pagination
    }

    pub fn filters(&self) -> FilterState {
        self.query
            .lock()
            .expect("query lock poisoned")
            .filters
            .clone()
    }

    pub fn statistics(&self) -> StatisticsSnapshot {
        self.statistics.borrow().snapshot.clone()
    }

    pub fn statistics_state(&self) -> StatisticsState {
        self.statistics.borrow().clone()
    }

    pub fn action_state(&self) -> ActionState {
        self.action.borrow().clone()
    }

    pub fn subscribe(&self) -> StateStream<CollectionState<T>> {
        StateStream::new(self.collection.subscribe())
    }

    pub fn subscribe_statistics(&self) -> StateStream<StatisticsState> {
        StateStream::new(self.statistics.subscribe())
    }

    pub fn subscribe_action(&self) -> StateStream<ActionState> {
        StateStream::new(self.action.subscribe())
    }
}

// ── Reorder engine (positioned resources only) ──────────────────────

impl<T: Resource + Positioned> ResourceStore<T> {
    /// Capture the dragged item's identity. No state mutation yet.
    /// Returns `false` if the id is not on the loaded page.
    pub fn begin_drag(&self, id: &EntityId) -> bool {
        let present = self.collection.borrow().items.iter().any(|i| i.id() == id);
        if present {
            *self.dragging.lock().expect("drag lock poisoned") = Some(id.clone());
        }
        present
    }

    /// Splice the dragged item into the target's slot, synchronously and
    /// locally — the visual move must be immediate, so no network call
    /// and no debounce happens here.
    pub fn drag_over(&self, target: &EntityId) -> bool {
        let Some(dragged) = self
            .dragging
            .lock()
            .expect("drag lock poisoned")
            .clone()
        else {
            return false;
        };

        let mut moved = false;
        self.collection.send_modify(|c| {
            moved = reorder::splice_to_target(&mut c.items, &dragged, target);
        });
        moved
    }

    /// Abandon an in-progress drag without committing.
    pub fn cancel_drag(&self) {
        self.dragging.lock().expect("drag lock poisoned").take();
    }

    /// Commit the current in-memory order as `position[i] = i + 1` in
    /// one batched call, then reconcile by refetching the current page —
    /// the only point where optimistic state is silently overwritten.
    ///
    /// Positions are assigned for the loaded page only: reordering
    /// across page boundaries is unsupported, so a commit is only
    /// meaningful on a fully loaded, unfiltered single page.
    pub async fn commit_reorder(&self) -> Result<(), CoreError> {
        let _gate = self.mutation_gate.lock().await;
        self.dragging.lock().expect("drag lock poisoned").take();

        let positions = reorder::position_map(&self.collection.borrow().items);
        if positions.is_empty() {
            return Ok(());
        }

        self.action
            .send_replace(ActionState::pending(OperationKind::Reorder, None));

        let outcome = match self
            .client
            .reorder(T::ENDPOINT, &ReorderRequest { positions })
            .await
        {
            Ok(()) => {
                self.action
                    .send_replace(ActionState::success(OperationKind::Reorder));
                Ok(())
            }
            Err(err) => Err(self.fail(OperationKind::Reorder, err)),
        };

        // Server order is authoritative after a commit, successful or not.
        self.list().await;
        outcome
    }
}
