//! Responses are applied in request-issue order.

use std::time::Duration;

use futures::join;
use storefront_catalog::Product;
use storefront_data::{Endpoint, InMemoryCatalog};
use storefront_state::{CatalogMode, CatalogSession, Outcome};

fn catalog(n: u64) -> InMemoryCatalog {
    InMemoryCatalog::new(
        (1..=n)
            .map(|id| {
                let category = if id % 2 == 0 { "beauty" } else { "groceries" };
                Product::new(id, format!("Item {}", id), 10.0).with_category(category)
            })
            .collect(),
    )
}

#[tokio::test]
async fn load_more_response_dropped_after_search() {
    let catalog = catalog(40);
    let session = CatalogSession::new(catalog.clone());
    session.load_initial().await;

    let gate = catalog.gate(Endpoint::List);
    let (more, searched) = join!(session.load_more(), async {
        tokio::task::yield_now().await;
        let outcome = session.search("item 2").await;
        gate.release();
        outcome
    });

    assert_eq!(more, Outcome::Stale);
    assert_eq!(searched, Outcome::Applied);

    let state = session.snapshot();
    assert_eq!(state.mode(), CatalogMode::Searching);
    assert_eq!(state.search_category(), Some("beauty"));
    assert_eq!(state.items().len(), 20);
    assert!(!state.has_more());
}

#[tokio::test]
async fn reset_reload_dropped_after_newer_search() {
    let catalog = catalog(40);
    let session = CatalogSession::new(catalog.clone());
    session.load_initial().await;

    let gate = catalog.gate(Endpoint::List);
    let (reset, searched) = join!(session.reset(), async {
        tokio::task::yield_now().await;
        let outcome = session.search("item 3").await;
        gate.release();
        outcome
    });

    assert_eq!(reset, Outcome::Stale);
    assert_eq!(searched, Outcome::Applied);
    assert_eq!(session.snapshot().search_category(), Some("groceries"));
}

#[tokio::test]
async fn search_response_dropped_after_reset() {
    let catalog = catalog(40);
    let session = CatalogSession::new(catalog.clone());
    session.load_initial().await;

    let gate = catalog.gate(Endpoint::Search);
    let (searched, reset) = join!(session.search("item"), async {
        tokio::task::yield_now().await;
        let outcome = session.reset().await;
        gate.release();
        outcome
    });

    assert_eq!(searched, Outcome::Stale);
    assert_eq!(reset, Outcome::Applied);

    let state = session.snapshot();
    assert_eq!(state.mode(), CatalogMode::Browsing);
    assert_eq!(state.items().len(), 16);
    assert_eq!(catalog.request_count(Endpoint::Category), 0);
}

#[tokio::test]
async fn loading_flag_tracks_latest_request() {
    let catalog = catalog(40);
    let session = CatalogSession::new(catalog.clone());
    assert!(!session.is_loading());

    let gate = catalog.gate(Endpoint::List);
    let (outcome, was_loading) = join!(session.load_initial(), async {
        tokio::task::yield_now().await;
        let loading = session.is_loading();
        gate.release();
        loading
    });

    assert_eq!(outcome, Outcome::Applied);
    assert!(was_loading);
    assert!(!session.is_loading());
}

#[tokio::test]
async fn load_more_does_not_overlap_itself() {
    let catalog = catalog(40);
    let session = CatalogSession::new(catalog.clone());
    session.load_initial().await;

    let gate = catalog.gate(Endpoint::List);
    let (first, second) = join!(session.load_more(), async {
        tokio::task::yield_now().await;
        let outcome = session.load_more().await;
        gate.release();
        outcome
    });

    assert_eq!(first, Outcome::Applied);
    assert_eq!(second, Outcome::Skipped);
    assert_eq!(session.snapshot().cursor(), 24);
    assert_eq!(catalog.request_count(Endpoint::List), 2);
}

#[tokio::test]
async fn cancelled_load_more_does_not_stall_browsing() {
    let catalog = catalog(40);
    let session = CatalogSession::new(catalog.clone());
    session.load_initial().await;

    let _gate = catalog.gate(Endpoint::List);
    let cancelled = tokio::time::timeout(Duration::from_millis(20), session.load_more()).await;
    assert!(cancelled.is_err());
    assert!(!session.is_loading());

    catalog.ungate(Endpoint::List);
    assert_eq!(session.load_more().await, Outcome::Applied);
    assert_eq!(session.snapshot().cursor(), 24);
}

#[tokio::test]
async fn cancelled_search_releases_loading_flag() {
    let catalog = catalog(40);
    let session = CatalogSession::new(catalog.clone());
    session.load_initial().await;

    let _gate = catalog.gate(Endpoint::Search);
    let cancelled = tokio::time::timeout(Duration::from_millis(20), session.search("item")).await;
    assert!(cancelled.is_err());
    assert!(!session.is_loading());
    assert_eq!(session.snapshot().mode(), CatalogMode::Browsing);
    assert_eq!(session.load_more().await, Outcome::Applied);
}
