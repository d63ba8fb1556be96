#![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]
//! End-to-end flows against the mock backend: login, loading, mutations, routing.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use customer_portal_core::api::{
    Endpoint, FnFailure, MockPortalApi, NeverFail, PortalApi, RandomFailure, VALID_EMAIL,
    VALID_PASSWORD,
};
use customer_portal_core::hooks::{self, Mutation, Resource, StoreHook};
use customer_portal_core::types::{Credentials, ProfileUpdate};
use customer_portal_core::validation::{self, FieldState, FormState};
use customer_portal_core::{CoreError, Route, Store};

fn api(failure: Arc<dyn customer_portal_core::api::FailurePolicy>) -> Arc<dyn PortalApi> {
    Arc::new(MockPortalApi::new(Duration::ZERO, failure))
}

fn login_form(email: &str, password: &str) -> FormState {
    FormState::new(vec![
        (
            "email",
            FieldState::new("Email", validation::email()).with_value(email),
        ),
        (
            "password",
            FieldState::new("Password", validation::password())
                .secret()
                .with_value(password),
        ),
    ])
}

async fn login(api: &Arc<dyn PortalApi>, store: &mut Store) {
    Mutation::Login(Credentials {
        email: VALID_EMAIL.to_string(),
        password: VALID_PASSWORD.to_string(),
    })
    .run(api.clone(), store)
    .await
    .expect("login should succeed");
}

#[tokio::test]
async fn login_lands_on_dashboard() {
    let api = api(Arc::new(NeverFail));
    let mut store = Store::new();

    assert_eq!(Route::Services.guard(store.state().is_authenticated()), Route::Login);

    let mut form = login_form(VALID_EMAIL, VALID_PASSWORD);
    assert!(form.submit());

    let result = Mutation::Login(Credentials {
        email: form.value("email"),
        password: form.value("password"),
    })
    .run(api, &mut store)
    .await;
    assert!(result.is_ok());

    let authenticated = store.state().is_authenticated();
    assert_eq!(Route::Login.guard(authenticated), Route::Dashboard);
    assert_eq!(
        store.state().user.as_ref().map(|u| u.email.as_str()),
        Some(VALID_EMAIL)
    );
}

#[tokio::test]
async fn wrong_password_shows_form_error() {
    let api = api(Arc::new(NeverFail));
    let mut store = Store::new();
    let mut form = login_form(VALID_EMAIL, "not-the-password");
    assert!(form.submit());

    let err = Mutation::Login(Credentials {
        email: form.value("email"),
        password: form.value("password"),
    })
    .run(api, &mut store)
    .await
    .unwrap_err();
    form.error = Some(err.to_string());

    assert_eq!(form.error.as_deref(), Some("Invalid email or password"));
    assert!(!store.state().is_authenticated());
}

#[tokio::test]
async fn invalid_form_is_not_submitted() {
    let mut form = login_form("not-an-email", "short");
    assert!(!form.submit());
    assert!(form.field("email").unwrap().visible_error().is_some());
    assert_eq!(
        form.field("password").unwrap().visible_error(),
        Some("Must be at least 8 characters")
    );
}

#[tokio::test]
async fn full_failure_rate_surfaces_error_through_hooks() {
    let api: Arc<dyn PortalApi> = Arc::new(
        MockPortalApi::new(Duration::ZERO, Arc::new(RandomFailure::new(1.0))).with_session(),
    );
    let mut store = Store::new();

    let err = StoreHook::Services.run(api.clone(), &mut store).await.unwrap_err();
    assert_eq!(err, CoreError::RequestFailed("Failed to load services.".to_string()));
    assert_eq!(store.state().error.as_deref(), Some("Failed to load services."));
    assert!(!store.state().loading);

    let mut billing = Resource::new();
    billing.load(hooks::fetch_billing(api)).await;
    assert!(billing.error.is_some());
    assert!(billing.data.is_none());
}

#[tokio::test]
async fn targeted_failure_only_hits_one_endpoint() {
    let api = api(Arc::new(FnFailure(|endpoint: Endpoint| {
        endpoint == Endpoint::GetNotifications
    })));
    let mut store = Store::new();
    login(&api, &mut store).await;

    StoreHook::Services.run(api.clone(), &mut store).await.unwrap();
    StoreHook::Tickets.run(api.clone(), &mut store).await.unwrap();
    assert!(StoreHook::Notifications
        .run(api, &mut store)
        .await
        .is_err());

    let state = store.state();
    assert!(!state.services.is_empty());
    assert!(!state.tickets.is_empty());
    assert!(state.notifications.is_empty());
    assert!(state.error.is_some());
}

#[tokio::test]
async fn unauthenticated_reads_are_rejected() {
    let api = api(Arc::new(NeverFail));
    let mut store = Store::new();
    let err = StoreHook::Profile.run(api, &mut store).await.unwrap_err();
    assert_eq!(err, CoreError::Unauthorized);
    assert!(store.state().user.is_none());
}

#[tokio::test]
async fn profile_update_round_trip() {
    let api = api(Arc::new(NeverFail));
    let mut store = Store::new();
    login(&api, &mut store).await;

    let user = store.state().user.clone().unwrap();
    let mut update = ProfileUpdate::from_user(&user);
    update.first_name = "Johnny".to_string();

    Mutation::UpdateProfile(update)
        .run(api.clone(), &mut store)
        .await
        .unwrap();
    assert_eq!(store.state().user.as_ref().unwrap().first_name, "Johnny");

    StoreHook::Profile.run(api, &mut store).await.unwrap();
    assert_eq!(store.state().user.as_ref().unwrap().first_name, "Johnny");
}

#[tokio::test]
async fn rejected_profile_update_maps_to_fields() {
    let api = api(Arc::new(NeverFail));
    let mut store = Store::new();
    login(&api, &mut store).await;
    let before = store.state().clone();

    let user = store.state().user.clone().unwrap();
    let mut update = ProfileUpdate::from_user(&user);
    update.email = String::new();

    let err = Mutation::UpdateProfile(update)
        .run(api, &mut store)
        .await
        .unwrap_err();
    assert_eq!(store.state(), &before);

    let mut form = FormState::new(vec![
        ("firstName", FieldState::new("First name", validation::name())),
        ("email", FieldState::new("Email", validation::email())),
    ]);
    form.apply_server_errors(&err.field_errors());
    assert!(form.field("email").unwrap().visible_error().is_some());
    assert!(form.field("firstName").unwrap().visible_error().is_none());
}

#[tokio::test]
async fn mark_read_decrements_unread_count() {
    let api = api(Arc::new(NeverFail));
    let mut store = Store::new();
    login(&api, &mut store).await;
    StoreHook::Notifications
        .run(api.clone(), &mut store)
        .await
        .unwrap();
    let unread = store.state().unread_count;
    let first_unread = store
        .state()
        .notifications
        .iter()
        .find(|n| !n.read)
        .map(|n| n.id.clone())
        .unwrap();

    Mutation::MarkNotificationRead(first_unread)
        .run(api, &mut store)
        .await
        .unwrap();
    assert_eq!(store.state().unread_count, unread - 1);
}

#[tokio::test]
async fn logout_clears_everything() {
    let api = api(Arc::new(NeverFail));
    let mut store = Store::new();
    login(&api, &mut store).await;
    StoreHook::Services.run(api.clone(), &mut store).await.unwrap();

    Mutation::Logout.run(api, &mut store).await.unwrap();
    assert!(!store.state().is_authenticated());
    assert!(store.state().services.is_empty());
    assert_eq!(Route::Dashboard.guard(false), Route::Login);
}

#[tokio::test]
async fn latency_is_simulated() {
    let api: Arc<dyn PortalApi> = Arc::new(
        MockPortalApi::new(Duration::from_millis(20), Arc::new(NeverFail)).with_session(),
    );
    let started = std::time::Instant::now();
    let mut store = Store::new();
    StoreHook::Services.run(api, &mut store).await.unwrap();
    // 抖动下限 0.8
    assert!(started.elapsed() >= Duration::from_millis(16));
}

#[tokio::test]
async fn failure_policy_sees_every_call() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = calls.clone();
    let api = api(Arc::new(FnFailure(move |_: Endpoint| {
        counter.fetch_add(1, Ordering::SeqCst);
        false
    })));
    let mut store = Store::new();
    login(&api, &mut store).await;
    for hook in StoreHook::all() {
        hook.run(api.clone(), &mut store).await.unwrap();
    }
    assert_eq!(calls.load(Ordering::SeqCst), 1 + StoreHook::all().len());
}
