mod common;

use std::time::Duration;

use axum::http::Method;
use common::{FakeBackend, enveloped, item_json, page_json};
use serde_json::json;

use lostfound::listing::{
    ApplyOutcome, DraftField, FetchTicket, FilterEdit, ListEvent, ListState, Mode,
    NavigationPayload, SortOption, ViewMode, execute,
};
use lostfound::{ApiClient, Category, SessionContext, SessionTokens};

fn client(backend: &FakeBackend) -> ApiClient {
    ApiClient::new(
        &backend.url,
        Duration::from_secs(5),
        SessionContext::in_memory(None),
    )
    .expect("client")
}

/// Execute a ticket and hand the result back to the state
async fn run(state: &mut ListState, api: &ApiClient, ticket: FetchTicket) -> ApplyOutcome {
    let result = execute(api, &ticket.request).await;
    state.apply(ticket.seq, result)
}

#[tokio::test]
async fn test_search_keeps_server_ranking() {
    let ranked = json!({
        "items": [
            item_json(1, "best match", "2024-01-01"),
            item_json(2, "second", "2024-06-01"),
            item_json(3, "third", "2024-03-01"),
        ],
        "totalCount": 3,
    });
    let backend = FakeBackend::builder()
        .route(Method::GET, "/api/items/search", 200, ranked)
        .start()
        .await;
    let api = client(&backend);

    let mut state = ListState::new(SortOption::Newest, ViewMode::Grid);
    let ticket = state
        .reduce(ListEvent::NavigateIn(Some(NavigationPayload::search("wallet"))))
        .unwrap();
    assert_eq!(run(&mut state, &api, ticket).await, ApplyOutcome::Applied);

    assert_eq!(state.mode(), Mode::Searching);
    let ids: Vec<u64> = state.presented().iter().map(|i| i.id).collect();
    assert_eq!(ids, [1, 2, 3]);
}

#[tokio::test]
async fn test_filtered_listing_is_newest_first() {
    let body = enveloped(json!({
        "items": [
            item_json(1, "old", "2024-01-01"),
            item_json(2, "newest", "2024-06-01"),
            item_json(3, "middle", "2024-03-01"),
        ],
        "totalCount": 3,
    }));
    let backend = FakeBackend::builder()
        .route(Method::POST, "/api/items/filter", 200, body)
        .start()
        .await;
    let api = client(&backend);

    let mut state = ListState::new(SortOption::Similarity, ViewMode::Grid);
    state.reduce(ListEvent::OpenFilter);
    state.reduce(ListEvent::EditFilter(FilterEdit::Set(
        DraftField::Category,
        "wallet".into(),
    )));
    let ticket = state.reduce(ListEvent::ConfirmFilter).unwrap();
    run(&mut state, &api, ticket).await;

    assert_eq!(state.mode(), Mode::Filtering);
    assert_eq!(state.query.filters.category, Some(Category::Wallet));
    let ids: Vec<u64> = state.presented().iter().map(|i| i.id).collect();
    assert_eq!(ids, [2, 3, 1]);
    assert_eq!(
        backend.last_request().body,
        Some(json!({"category": "WALLET", "page": 0, "size": 20}))
    );
}

#[tokio::test]
async fn test_paging_through_listing() {
    let backend = FakeBackend::builder()
        .route(Method::GET, "/api/items", 200, page_json(20, 45))
        .start()
        .await;
    let api = client(&backend);

    let mut state = ListState::default();
    let ticket = state.reduce(ListEvent::NavigateIn(None)).unwrap();
    run(&mut state, &api, ticket).await;

    let pagination = state.pagination();
    assert_eq!(pagination.buttons, [0, 1, 2]);
    assert!(!pagination.prev_enabled);
    assert!(pagination.next_enabled);

    let ticket = state.reduce(ListEvent::NextPage).unwrap();
    run(&mut state, &api, ticket).await;
    assert_eq!(state.page().page, 1);
    assert_eq!(
        backend.last_request().query.get("page").map(String::as_str),
        Some("1")
    );

    // Past the last page is ignored
    assert!(state.reduce(ListEvent::ChangePage(3)).is_none());
}

#[tokio::test]
async fn test_search_resets_to_first_page() {
    let backend = FakeBackend::builder()
        .route(Method::GET, "/api/items", 200, page_json(20, 100))
        .route(Method::GET, "/api/items/search", 200, page_json(2, 2))
        .start()
        .await;
    let api = client(&backend);

    let mut state = ListState::default();
    let ticket = state.reduce(ListEvent::NavigateIn(None)).unwrap();
    run(&mut state, &api, ticket).await;
    let ticket = state.reduce(ListEvent::ChangePage(3)).unwrap();
    run(&mut state, &api, ticket).await;
    assert_eq!(state.page().page, 3);

    let ticket = state
        .reduce(ListEvent::SubmitSearch("umbrella".into()))
        .unwrap();
    assert_eq!(ticket.request.page(), 0);
    run(&mut state, &api, ticket).await;
    assert_eq!(state.page().page, 0);
    assert_eq!(state.page().total_pages, 1);
}

#[tokio::test]
async fn test_stale_response_is_dropped() {
    let backend = FakeBackend::builder()
        .route(Method::GET, "/api/items", 200, page_json(20, 20))
        .route(Method::GET, "/api/items/search", 200, page_json(1, 1))
        .start()
        .await;
    let api = client(&backend);

    let mut state = ListState::default();
    let first = state.reduce(ListEvent::NavigateIn(None)).unwrap();
    let second = state.reduce(ListEvent::SubmitSearch("keys".into())).unwrap();

    // The newer response lands first; the older one must not overwrite it
    let newer = execute(&api, &second.request).await;
    let older = execute(&api, &first.request).await;
    assert_eq!(state.apply(second.seq, newer), ApplyOutcome::Applied);
    assert_eq!(state.apply(first.seq, older), ApplyOutcome::Stale);

    assert_eq!(state.page().mode, Mode::Searching);
    assert_eq!(state.page().items.len(), 1);
}

#[tokio::test]
async fn test_failure_keeps_previous_page_and_retries() {
    let backend = FakeBackend::builder()
        .route(Method::GET, "/api/items", 200, page_json(5, 5))
        .route(
            Method::GET,
            "/api/items/search",
            500,
            json!({"message": "search index offline"}),
        )
        .start()
        .await;
    let api = client(&backend);

    let mut state = ListState::default();
    let ticket = state.reduce(ListEvent::NavigateIn(None)).unwrap();
    run(&mut state, &api, ticket).await;

    let ticket = state.reduce(ListEvent::SubmitSearch("bag".into())).unwrap();
    assert_eq!(run(&mut state, &api, ticket).await, ApplyOutcome::Failed);

    let failure = state.error().unwrap();
    assert!(failure.retryable);
    assert!(failure.message.contains("search index offline"));
    assert_eq!(state.page().items.len(), 5);

    let retry = state.reduce(ListEvent::Retry).unwrap();
    assert_eq!(retry.request, *state.last_request().unwrap());
    assert_eq!(run(&mut state, &api, retry).await, ApplyOutcome::Failed);
}

#[tokio::test]
async fn test_unauthorized_listing_invalidates_session() {
    let backend = FakeBackend::builder()
        .route(Method::GET, "/api/items", 401, json!({"message": "token expired"}))
        .start()
        .await;
    let session = SessionContext::in_memory(Some(SessionTokens::new("stale", "r")));
    let api = ApiClient::new(&backend.url, Duration::from_secs(5), session.clone()).unwrap();

    let mut state = ListState::default();
    let ticket = state.reduce(ListEvent::NavigateIn(None)).unwrap();
    run(&mut state, &api, ticket).await;

    let failure = state.error().unwrap();
    assert!(failure.unauthorized);
    assert!(!failure.retryable);
    assert!(session.was_invalidated());
    assert!(!session.is_authenticated());
}

#[tokio::test]
async fn test_navigation_payload_with_filters_and_search() {
    let backend = FakeBackend::builder()
        .route(Method::POST, "/api/items/search", 200, page_json(1, 1))
        .start()
        .await;
    let api = client(&backend);

    let payload = NavigationPayload {
        search_query: Some("airpods".into()),
        location: Some("Hongik Univ Station".into()),
        distance: Some(20),
        ..Default::default()
    };
    let mut state = ListState::default();
    let ticket = state.reduce(ListEvent::NavigateIn(Some(payload))).unwrap();
    run(&mut state, &api, ticket).await;

    let body = backend.last_request().body.unwrap();
    assert_eq!(body["query"], json!("airpods"));
    assert_eq!(body["location"], json!("Hongik Univ Station"));
    assert_eq!(body["radius"], json!(15000));
}
