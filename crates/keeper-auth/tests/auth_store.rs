use keeper_auth::{AuthStore, Credentials, RegistrationProfile};
use keeper_config::{DispatchOrdering, Endpoints};
use keeper_storage::{MemoryStorage, TokenVault};
use keeper_transport::testing::FakeTransport;
use keeper_transport::{HttpMethod, Transport, TransportError};
use serde_json::{json, Value};
use std::sync::Arc;

fn setup(
    stored: &[(&str, &str)],
    ordering: DispatchOrdering,
) -> (Arc<FakeTransport>, TokenVault, AuthStore) {
    let transport = Arc::new(FakeTransport::new());
    let vault = TokenVault::new(Arc::new(MemoryStorage::with_entries(
        stored.iter().copied(),
    )));
    let store = AuthStore::new(
        transport.clone(),
        vault.clone(),
        Endpoints::default(),
        ordering,
    );
    (transport, vault, store)
}

fn user_body(id: &str) -> Value {
    json!({
        "_id": id,
        "name": "Test User",
        "email": "test@test.com",
        "date": "2024-03-01T12:00:00Z"
    })
}

async fn wait_for_requests(transport: &FakeTransport, count: usize) {
    while transport.request_count() < count {
        tokio::task::yield_now().await;
    }
}

#[tokio::test]
async fn test_initial_state_reads_persisted_token() {
    let (transport, _vault, store) = setup(&[("token", "stored")], DispatchOrdering::default());

    let state = store.state();
    assert_eq!(state.token.as_deref(), Some("stored"));
    assert_eq!(state.is_authenticated, None);
    assert!(state.loading);
    assert!(state.can_access_protected());
    assert_eq!(transport.request_count(), 0);
}

#[tokio::test]
async fn test_login_success_loads_user_with_token() {
    let (transport, vault, store) = setup(&[], DispatchOrdering::default());
    transport.push_ok(json!({"token": "abc"}));
    transport.push_ok(user_body("u1"));

    let state = store
        .login(&Credentials::new("test@test.com", "123456"))
        .await;

    assert_eq!(state.token.as_deref(), Some("abc"));
    assert_eq!(state.is_authenticated, Some(true));
    assert!(!state.loading);
    assert_eq!(state.user.as_ref().map(|u| u.id.as_str()), Some("u1"));
    assert_eq!(state.error, None);
    assert_eq!(vault.token().unwrap().as_deref(), Some("abc"));

    let requests = transport.requests();
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[0].method, HttpMethod::Post);
    assert_eq!(requests[0].path, "/api/auth");
    assert_eq!(
        requests[0].body,
        Some(json!({"email": "test@test.com", "password": "123456"}))
    );
    assert_eq!(requests[0].auth_token, None);
    assert_eq!(requests[1].method, HttpMethod::Get);
    assert_eq!(requests[1].path, "/api/auth");
    assert_eq!(requests[1].auth_token.as_deref(), Some("abc"));
}

#[tokio::test]
async fn test_rejected_login_surfaces_server_message() {
    let (transport, vault, store) = setup(&[("token", "old")], DispatchOrdering::default());
    transport.push_err(TransportError::rejected(400, Some("Invalid Credentials")));

    let state = store.login(&Credentials::new("a@x.com", "wrong1")).await;

    assert_eq!(state.error.as_deref(), Some("Invalid Credentials"));
    assert_eq!(state.is_authenticated, Some(false));
    assert_eq!(state.token, None);
    assert!(!state.loading);
    assert!(!state.can_access_protected());
    assert_eq!(vault.token().unwrap(), None);
    assert!(!transport.has_auth_token());
}

#[tokio::test]
async fn test_login_without_server_message_uses_generic_message() {
    let (transport, _vault, store) = setup(&[], DispatchOrdering::default());
    transport.push_err(TransportError::rejected(500, None));

    let state = store.login(&Credentials::new("a@x.com", "secret")).await;
    assert_eq!(
        state.error.as_deref(),
        Some("Request failed with status code 500")
    );
}

#[tokio::test]
async fn test_login_network_failure() {
    let (transport, _vault, store) = setup(&[], DispatchOrdering::default());
    transport.push_err(TransportError::NetworkUnavailable);

    let state = store.login(&Credentials::new("a@x.com", "secret")).await;
    assert_eq!(state.error.as_deref(), Some("Network Error"));
    assert_eq!(state.is_authenticated, Some(false));
}

#[tokio::test]
async fn test_register_success_and_failure() {
    let (transport, vault, store) = setup(&[], DispatchOrdering::default());
    transport.push_err(TransportError::rejected(400, Some("User already exists")));

    let profile = RegistrationProfile::new("Test User", "test@test.com", "123456");
    let state = store.register(&profile).await;
    assert_eq!(state.error.as_deref(), Some("User already exists"));
    assert_eq!(state.is_authenticated, Some(false));

    store.clear_errors();
    transport.push_ok(json!({"token": "fresh"}));
    transport.push_ok(user_body("u2"));

    let state = store.register(&profile).await;
    assert_eq!(state.error, None);
    assert_eq!(state.is_authenticated, Some(true));
    assert_eq!(state.token.as_deref(), Some("fresh"));
    assert_eq!(vault.token().unwrap().as_deref(), Some("fresh"));

    let requests = transport.requests();
    assert_eq!(requests[1].path, "/api/users");
    assert_eq!(
        requests[1].body,
        Some(json!({"name": "Test User", "email": "test@test.com", "password": "123456"}))
    );
}

#[tokio::test]
async fn test_load_user_attaches_persisted_token() {
    let (transport, _vault, store) = setup(&[("token", "stored")], DispatchOrdering::default());
    transport.push_ok(user_body("u1"));

    let state = store.load_user().await;

    assert_eq!(state.is_authenticated, Some(true));
    assert_eq!(state.token.as_deref(), Some("stored"));
    assert_eq!(transport.requests()[0].auth_token.as_deref(), Some("stored"));
}

#[tokio::test]
async fn test_load_user_failure_discards_token() {
    let (transport, vault, store) = setup(&[("token", "expired")], DispatchOrdering::default());
    transport.push_err(TransportError::rejected(401, Some("Token is not valid")));

    let state = store.load_user().await;

    assert_eq!(state.is_authenticated, Some(false));
    assert_eq!(state.token, None);
    assert!(state.user.is_none());
    assert!(!state.loading);
    assert_eq!(state.error, None);
    assert_eq!(vault.token().unwrap(), None);
    assert!(!transport.has_auth_token());
}

#[tokio::test]
async fn test_load_user_without_token_is_unauthenticated() {
    let (transport, _vault, store) = setup(&[], DispatchOrdering::default());
    transport.push_err(TransportError::rejected(401, Some("No token, authorization denied")));

    let state = store.load_user().await;

    assert_eq!(transport.requests()[0].auth_token, None);
    assert_eq!(state.is_authenticated, Some(false));
    assert!(!state.can_access_protected());
}

#[tokio::test]
async fn test_logout_clears_session_and_header() {
    let (transport, vault, store) = setup(&[("token", "stored")], DispatchOrdering::default());
    transport.push_ok(user_body("u1"));
    store.load_user().await;

    let state = store.logout();

    assert_eq!(state.token, None);
    assert_eq!(state.is_authenticated, Some(false));
    assert!(state.user.is_none());
    assert_eq!(vault.token().unwrap(), None);
    assert!(!transport.has_auth_token());
}

#[tokio::test]
async fn test_clear_errors_is_idempotent() {
    let (transport, _vault, store) = setup(&[], DispatchOrdering::default());
    transport.push_err(TransportError::rejected(400, Some("Invalid Credentials")));
    store.login(&Credentials::new("a@x.com", "wrong1")).await;

    let once = store.clear_errors();
    let twice = store.clear_errors();
    assert_eq!(once.error, None);
    assert_eq!(once, twice);
}

#[tokio::test]
async fn test_subscribers_see_settled_state() {
    let (transport, _vault, store) = setup(&[], DispatchOrdering::default());
    let mut updates = store.subscribe();
    transport.push_err(TransportError::rejected(400, Some("Invalid Credentials")));

    store.login(&Credentials::new("a@x.com", "wrong1")).await;

    assert!(updates.has_changed().unwrap());
    let seen = updates.borrow_and_update().clone();
    assert_eq!(seen.error.as_deref(), Some("Invalid Credentials"));
}

async fn overlapping_loads(ordering: DispatchOrdering) -> (keeper_auth::AuthState, Option<String>) {
    let (transport, vault, store) = setup(&[("token", "t")], ordering);
    let store = Arc::new(store);
    let first_reply = transport.push_deferred();
    let second_reply = transport.push_deferred();

    let first = tokio::spawn({
        let store = store.clone();
        async move { store.load_user().await }
    });
    wait_for_requests(&transport, 1).await;

    let second = tokio::spawn({
        let store = store.clone();
        async move { store.load_user().await }
    });
    wait_for_requests(&transport, 2).await;

    // The newer check settles first, the older one fails afterwards.
    second_reply.send(Ok(user_body("u2"))).unwrap();
    second.await.unwrap();
    first_reply
        .send(Err(TransportError::rejected(401, Some("Token is not valid"))))
        .unwrap();
    first.await.unwrap();

    (store.state(), vault.token().unwrap())
}

#[tokio::test]
async fn test_overlapping_loads_last_dispatch_wins() {
    let (state, persisted) = overlapping_loads(DispatchOrdering::LastDispatchWins).await;
    assert_eq!(state.is_authenticated, Some(false));
    assert_eq!(state.token, None);
    assert_eq!(persisted, None);
}

#[tokio::test]
async fn test_overlapping_loads_latest_call_wins() {
    let (state, persisted) = overlapping_loads(DispatchOrdering::LatestCallWins).await;
    assert_eq!(state.is_authenticated, Some(true));
    assert_eq!(state.user.map(|u| u.id), Some("u2".to_string()));
    assert_eq!(persisted.as_deref(), Some("t"));
}
