#![allow(clippy::unwrap_used)]
// Integration tests for `ResourceStore` against a wiremock backend.
//
// These pin down the store's observable contract: atomic
// collection+pagination replacement, filter/page coordination, local
// deltas, stale-response discarding, reorder reconciliation, and the
// mutation tracker's lifecycle.

use std::sync::Arc;
use std::time::Duration;

use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use curio_api::AdminClient;
use curio_core::model::Banner;
use curio_core::store::{ActionState, OperationKind, ResourceStore};
use curio_core::{CoreError, EntityId};

// ── Fixtures ────────────────────────────────────────────────────────

async fn setup() -> (MockServer, ResourceStore<Banner>) {
    let server = MockServer::start().await;
    let client = AdminClient::from_reqwest(&server.uri(), reqwest::Client::new()).unwrap();
    let store = ResourceStore::new(Arc::new(client), 20);
    (server, store)
}

fn banner_json(id: &str, position: u32, active: bool) -> Value {
    json!({
        "id": id,
        "title": format!("Banner {id}"),
        "imageUrl": format!("https://cdn.curio.market/{id}.png"),
        "linkUrl": null,
        "position": position,
        "active": active,
        "createdAt": "2026-01-15T12:00:00Z"
    })
}

fn five_banners() -> Vec<Value> {
    (0..5)
        .map(|i| banner_json(&format!("b{i}"), i + 1, true))
        .collect()
}

fn list_envelope(items: &[Value], page: u32, limit: u32, total: u64) -> Value {
    let total_pages = u32::try_from(total.div_ceil(u64::from(limit))).unwrap();
    json!({
        "data": {
            "items": items,
            "pagination": { "page": page, "limit": limit, "total": total, "totalPages": total_pages }
        }
    })
}

fn stats_envelope(total: u64, active: u64, inactive: u64) -> Value {
    json!({
        "data": {
            "total": total,
            "buckets": { "active": active, "inactive": inactive },
            "sums": {}
        }
    })
}

async fn mount_list(server: &MockServer, body: Value) {
    Mock::given(method("GET"))
        .and(path("/admin/banners"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

async fn mount_stats(server: &MockServer, body: Value) {
    Mock::given(method("GET"))
        .and(path("/admin/banners/stats"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

fn ids(store: &ResourceStore<Banner>) -> Vec<String> {
    store
        .collection()
        .items
        .iter()
        .map(|b| b.id.to_string())
        .collect()
}

// ── Listing ─────────────────────────────────────────────────────────

#[tokio::test]
async fn list_replaces_collection_and_pagination_together() {
    let (server, store) = setup().await;
    mount_list(&server, list_envelope(&five_banners(), 1, 20, 5)).await;

    let mut sub = store.subscribe();
    store.list().await;

    // A single notification carries both halves; a subscriber can never
    // see items and pagination from different fetches.
    let state = sub.changed().await.unwrap();
    assert_eq!(state.items.len(), 5);
    assert_eq!(state.pagination.total, 5);
    assert_eq!(state.pagination.total_pages, 1);
    assert!(state.fetch_error.is_none());
}

#[tokio::test]
async fn failed_list_keeps_previous_page_and_records_error() {
    let (server, store) = setup().await;

    Mock::given(method("GET"))
        .and(path("/admin/banners"))
        .respond_with(ResponseTemplate::new(200).set_body_json(list_envelope(
            &five_banners(),
            1,
            20,
            5,
        )))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/admin/banners"))
        .respond_with(
            ResponseTemplate::new(500).set_body_json(json!({ "message": "database offline" })),
        )
        .mount(&server)
        .await;

    store.list().await;
    assert_eq!(store.collection().items.len(), 5);

    store.list().await;

    let state = store.collection();
    assert_eq!(state.items.len(), 5, "items must survive a failed refetch");
    let error = state.fetch_error.unwrap();
    assert!(error.contains("database offline"), "got: {error}");
}

#[tokio::test]
async fn stale_list_response_is_discarded() {
    let (server, store) = setup().await;

    // First request: slow, answers with the OLD page. Second request:
    // fast, answers with the NEW page. The slow response resolves last
    // and must be dropped.
    Mock::given(method("GET"))
        .and(path("/admin/banners"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(list_envelope(&[banner_json("old", 1, true)], 1, 20, 1))
                .set_delay(Duration::from_millis(250)),
        )
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/admin/banners"))
        .respond_with(ResponseTemplate::new(200).set_body_json(list_envelope(
            &[banner_json("new", 1, true)],
            1,
            20,
            1,
        )))
        .mount(&server)
        .await;

    tokio::join!(store.list(), store.list());

    assert_eq!(ids(&store), ["new"], "superseded response must not win");
    assert!(store.collection().fetch_error.is_none());
}

// ── Filter / pagination coordination ────────────────────────────────

#[tokio::test]
async fn set_filters_always_resets_page() {
    let (server, store) = setup().await;
    mount_list(&server, list_envelope(&five_banners(), 1, 20, 100)).await;

    store.list().await;
    store.set_page(4);
    assert_eq!(store.pagination().page, 4);

    store.set_filters([("status".to_owned(), Some(json!("inactive")))]);
    assert_eq!(store.pagination().page, 1);

    // Repeat from another prior page; the reset is unconditional.
    store.set_page(3);
    store.set_filters([("search".to_owned(), Some(json!("mint")))]);
    assert_eq!(store.pagination().page, 1);
}

#[tokio::test]
async fn set_page_never_mutates_filters_and_clamps_to_total() {
    let (server, store) = setup().await;
    mount_list(&server, list_envelope(&five_banners(), 1, 20, 100)).await;

    store.set_filters([("status".to_owned(), Some(json!("active")))]);
    store.list().await; // totalPages = 5

    store.set_page(3);
    assert_eq!(store.pagination().page, 3);
    assert_eq!(store.filters().get("status"), Some(&json!("active")));

    store.set_page(99);
    assert_eq!(store.pagination().page, 5, "page must not pass totalPages");

    store.set_page(0);
    assert_eq!(store.pagination().page, 1);
}

#[tokio::test]
async fn filter_change_flows_into_the_next_list_call() {
    // End-to-end: active page 1 → switch to inactive → the refetch
    // carries the new filter at page 1.
    let (server, store) = setup().await;

    Mock::given(method("GET"))
        .and(path("/admin/banners"))
        .and(query_param("status", "active"))
        .respond_with(ResponseTemplate::new(200).set_body_json(list_envelope(
            &five_banners(),
            1,
            20,
            5,
        )))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/admin/banners"))
        .and(query_param("status", "inactive"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(list_envelope(
            &[banner_json("dormant", 1, false)],
            1,
            20,
            1,
        )))
        .mount(&server)
        .await;

    store.set_filters([("status".to_owned(), Some(json!("active")))]);
    store.list().await;
    assert_eq!(store.collection().items.len(), 5);

    store.set_filters([("status".to_owned(), Some(json!("inactive")))]);
    store.list().await;

    assert_eq!(ids(&store), ["dormant"]);
    assert_eq!(store.pagination().page, 1);
}

// ── Create / delete / update / toggle ───────────────────────────────

#[tokio::test]
async fn create_prepends_and_applies_local_statistics_delta() {
    let (server, store) = setup().await;
    mount_list(&server, list_envelope(&five_banners(), 1, 20, 5)).await;
    mount_stats(&server, stats_envelope(5, 5, 0)).await;

    Mock::given(method("POST"))
        .and(path("/admin/banners"))
        .respond_with(
            ResponseTemplate::new(201)
                .set_body_json(json!({ "data": banner_json("fresh", 6, true) })),
        )
        .mount(&server)
        .await;

    store.list().await;
    store.stats().await;

    let created = store
        .create(&json!({ "title": "Banner fresh" }))
        .await
        .unwrap();

    assert_eq!(created.id, EntityId::from("fresh"));
    assert_eq!(store.collection().items[0].id, EntityId::from("fresh"));
    assert_eq!(store.statistics().total, 6, "local delta, no refetch");
    assert_eq!(store.statistics().bucket("active"), 6);
    assert!(store.action_state().is_success());
}

#[tokio::test]
async fn delete_removes_item_and_decrements_statistics() {
    let (server, store) = setup().await;
    mount_list(&server, list_envelope(&five_banners(), 1, 20, 5)).await;
    mount_stats(&server, stats_envelope(5, 5, 0)).await;

    Mock::given(method("DELETE"))
        .and(path("/admin/banners/b2"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    store.list().await;
    store.stats().await;

    store.delete(&EntityId::from("b2")).await.unwrap();

    assert!(!ids(&store).contains(&"b2".to_owned()));
    assert_eq!(store.statistics().total, 4);
    assert_eq!(store.statistics().bucket("active"), 4);
}

#[tokio::test]
async fn delete_of_already_deleted_item_converges() {
    let (server, store) = setup().await;
    mount_list(&server, list_envelope(&five_banners(), 1, 20, 5)).await;
    mount_stats(&server, stats_envelope(5, 5, 0)).await;

    Mock::given(method("DELETE"))
        .and(path("/admin/banners/b1"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({ "message": "no such banner" })),
        )
        .mount(&server)
        .await;

    store.list().await;
    store.stats().await;

    // Another operator already deleted b1; the end state matches intent.
    store.delete(&EntityId::from("b1")).await.unwrap();

    assert!(!ids(&store).contains(&"b1".to_owned()));
    assert!(store.action_state().is_success());
}

#[tokio::test]
async fn update_replaces_in_place_without_moving_or_repaginating() {
    let (server, store) = setup().await;
    mount_list(&server, list_envelope(&five_banners(), 1, 20, 5)).await;

    let mut updated = banner_json("b2", 3, true);
    updated["title"] = json!("Renamed");
    Mock::given(method("PATCH"))
        .and(path("/admin/banners/b2"))
        .and(body_json(json!({ "title": "Renamed" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": updated })))
        .mount(&server)
        .await;

    store.list().await;
    let total_before = store.pagination().total;

    store
        .update(&EntityId::from("b2"), &json!({ "title": "Renamed" }))
        .await
        .unwrap();

    let state = store.collection();
    assert_eq!(state.items[2].id, EntityId::from("b2"), "slot unchanged");
    assert_eq!(state.items[2].title, "Renamed");
    assert_eq!(state.pagination.total, total_before);
}

#[tokio::test]
async fn update_of_stale_id_is_absorbed_not_fatal() {
    let (server, store) = setup().await;
    mount_list(&server, list_envelope(&five_banners(), 1, 20, 5)).await;
    mount_stats(&server, stats_envelope(5, 5, 0)).await;

    Mock::given(method("PATCH"))
        .and(path("/admin/banners/b3"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({ "message": "banner is gone" })),
        )
        .mount(&server)
        .await;

    store.list().await;
    store.stats().await;

    let err = store
        .update(&EntityId::from("b3"), &json!({ "title": "x" }))
        .await
        .unwrap_err();

    assert!(matches!(err, CoreError::NotFound { .. }));
    assert!(
        !ids(&store).contains(&"b3".to_owned()),
        "stale item must be dropped locally"
    );
    assert_eq!(store.statistics().total, 4);
    assert_eq!(store.action_state().error(), Some("Not found: banner is gone"));
}

#[tokio::test]
async fn toggle_moves_item_between_partition_buckets() {
    let (server, store) = setup().await;
    mount_list(&server, list_envelope(&five_banners(), 1, 20, 5)).await;
    mount_stats(&server, stats_envelope(5, 5, 0)).await;

    Mock::given(method("PATCH"))
        .and(path("/admin/banners/b0/status"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "data": banner_json("b0", 1, false) })),
        )
        .mount(&server)
        .await;

    store.list().await;
    store.stats().await;

    let toggled = store.toggle(&EntityId::from("b0")).await.unwrap();

    assert!(!toggled.active);
    assert!(!store.collection().items[0].active, "replaced in place");
    assert_eq!(store.statistics().total, 5, "toggle never changes the total");
    assert_eq!(store.statistics().bucket("active"), 4);
    assert_eq!(store.statistics().bucket("inactive"), 1);
}

// ── Statistics cache ────────────────────────────────────────────────

#[tokio::test]
async fn authoritative_stats_fetch_overwrites_local_deltas() {
    let (server, store) = setup().await;
    mount_list(&server, list_envelope(&five_banners(), 1, 20, 5)).await;

    Mock::given(method("GET"))
        .and(path("/admin/banners/stats"))
        .respond_with(ResponseTemplate::new(200).set_body_json(stats_envelope(5, 5, 0)))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/admin/banners/stats"))
        .respond_with(ResponseTemplate::new(200).set_body_json(stats_envelope(9, 6, 3)))
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/admin/banners/b4"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;
    Mock::given(method("PATCH"))
        .and(path("/admin/banners/b0/status"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "data": banner_json("b0", 1, false) })),
        )
        .mount(&server)
        .await;

    store.list().await;
    store.stats().await;

    // N local deltas...
    store.delete(&EntityId::from("b4")).await.unwrap();
    store.toggle(&EntityId::from("b0")).await.unwrap();
    assert_eq!(store.statistics().total, 4);

    // ...then one authoritative fetch: the snapshot equals the fetch
    // result exactly, deltas are never re-applied on top.
    store.stats().await;
    assert_eq!(store.statistics().total, 9);
    assert_eq!(store.statistics().bucket("active"), 6);
    assert_eq!(store.statistics().bucket("inactive"), 3);
}

#[tokio::test]
async fn failed_stats_fetch_keeps_previous_snapshot() {
    let (server, store) = setup().await;

    Mock::given(method("GET"))
        .and(path("/admin/banners/stats"))
        .respond_with(ResponseTemplate::new(200).set_body_json(stats_envelope(5, 5, 0)))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/admin/banners/stats"))
        .respond_with(ResponseTemplate::new(502).set_body_string("bad gateway"))
        .mount(&server)
        .await;

    store.stats().await;
    store.stats().await;

    let state = store.statistics_state();
    assert_eq!(state.snapshot.total, 5);
    assert!(state.fetch_error.is_some());
}

// ── Mutation tracker ────────────────────────────────────────────────

#[tokio::test]
async fn success_flag_survives_unrelated_reads() {
    let (server, store) = setup().await;
    mount_list(&server, list_envelope(&five_banners(), 1, 20, 5)).await;
    mount_stats(&server, stats_envelope(5, 5, 0)).await;

    Mock::given(method("POST"))
        .and(path("/admin/banners"))
        .respond_with(
            ResponseTemplate::new(201)
                .set_body_json(json!({ "data": banner_json("fresh", 1, true) })),
        )
        .mount(&server)
        .await;

    store.create(&json!({ "title": "x" })).await.unwrap();
    assert!(store.action_state().is_success());

    // Resolving reads never clear the transient success signal.
    store.list().await;
    store.stats().await;
    assert!(store.action_state().is_success());

    // Only the explicit clear does — idempotently.
    store.clear_success();
    assert_eq!(store.action_state(), ActionState::Idle);
    store.clear_success();
    assert_eq!(store.action_state(), ActionState::Idle);
}

#[tokio::test]
async fn mutations_resolve_in_issue_order() {
    let (server, store) = setup().await;
    mount_list(&server, list_envelope(&five_banners(), 1, 20, 5)).await;
    mount_stats(&server, stats_envelope(5, 5, 0)).await;

    Mock::given(method("DELETE"))
        .and(path("/admin/banners/b3"))
        .respond_with(ResponseTemplate::new(204).set_delay(Duration::from_millis(200)))
        .mount(&server)
        .await;
    Mock::given(method("PATCH"))
        .and(path("/admin/banners/b0/status"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "data": banner_json("b0", 1, false) })),
        )
        .mount(&server)
        .await;

    store.list().await;
    store.stats().await;

    // The slow delete was issued first; the fast toggle must still
    // resolve after it, so the tracker ends on the toggle's result.
    let del_id = EntityId::from("b3");
    let tog_id = EntityId::from("b0");
    let (del, tog) = tokio::join!(store.delete(&del_id), store.toggle(&tog_id));
    del.unwrap();
    tog.unwrap();

    assert_eq!(
        store.action_state(),
        ActionState::Success {
            kind: OperationKind::Toggle
        }
    );
}

// ── Reorder engine ──────────────────────────────────────────────────

#[tokio::test]
async fn drag_splice_is_synchronous_and_local() {
    let (server, store) = setup().await;
    mount_list(&server, list_envelope(&five_banners(), 1, 20, 5)).await;
    store.list().await;

    assert!(store.begin_drag(&EntityId::from("b2")));
    assert!(store.drag_over(&EntityId::from("b0")));

    // Immediately visible, no network round-trip was awaited.
    assert_eq!(ids(&store), ["b2", "b0", "b1", "b3", "b4"]);
}

#[tokio::test]
async fn commit_submits_dense_positions_and_reconciles_with_server_order() {
    let (server, store) = setup().await;

    Mock::given(method("GET"))
        .and(path("/admin/banners"))
        .respond_with(ResponseTemplate::new(200).set_body_json(list_envelope(
            &five_banners(),
            1,
            20,
            5,
        )))
        .up_to_n_times(1)
        .mount(&server)
        .await;

    // The server applies the commit but reports its own authoritative
    // order on the reconciliation fetch (b9 appeared concurrently).
    let authoritative: Vec<Value> = [("b2", 1), ("b0", 2), ("b9", 3), ("b1", 4)]
        .iter()
        .map(|(id, pos)| banner_json(id, *pos, true))
        .collect();
    Mock::given(method("GET"))
        .and(path("/admin/banners"))
        .respond_with(ResponseTemplate::new(200).set_body_json(list_envelope(
            &authoritative,
            1,
            20,
            4,
        )))
        .mount(&server)
        .await;

    Mock::given(method("PATCH"))
        .and(path("/admin/banners/reorder"))
        .and(body_json(json!({
            "positions": { "b2": 1, "b0": 2, "b1": 3, "b3": 4, "b4": 5 }
        })))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    store.list().await;
    store.begin_drag(&EntityId::from("b2"));
    store.drag_over(&EntityId::from("b0"));

    store.commit_reorder().await.unwrap();

    assert_eq!(ids(&store), ["b2", "b0", "b9", "b1"]);
    assert!(store.action_state().is_success());
}

#[tokio::test]
async fn failed_commit_still_reconciles_with_server_truth() {
    let (server, store) = setup().await;

    Mock::given(method("GET"))
        .and(path("/admin/banners"))
        .respond_with(ResponseTemplate::new(200).set_body_json(list_envelope(
            &five_banners(),
            1,
            20,
            5,
        )))
        .mount(&server)
        .await;
    Mock::given(method("PATCH"))
        .and(path("/admin/banners/reorder"))
        .respond_with(
            ResponseTemplate::new(500).set_body_json(json!({ "message": "ordering conflict" })),
        )
        .mount(&server)
        .await;

    store.list().await;
    store.begin_drag(&EntityId::from("b4"));
    store.drag_over(&EntityId::from("b0"));
    assert_eq!(ids(&store), ["b4", "b0", "b1", "b2", "b3"]);

    let err = store.commit_reorder().await.unwrap_err();

    assert!(matches!(err, CoreError::Server { status: 500, .. }));
    // The optimistic splice was rolled back by the reconciliation fetch.
    assert_eq!(ids(&store), ["b0", "b1", "b2", "b3", "b4"]);
    assert!(store.action_state().error().is_some());
}
