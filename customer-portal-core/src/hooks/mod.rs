//! Data-fetching hooks
//!
//! Every hook follows the same protocol: loading on and error cleared,
//! call the API, write the data (store or local) or a readable error,
//! loading off. A failed call never touches previously loaded data.
//!
//! The protocol is split into `begin` / `fetch` / `complete` so that a UI
//! loop can run `fetch` on a runtime task and apply the result back on the
//! thread that owns the [`Store`]. `run` chains the three for callers that
//! own the store across the await.

mod resource;

pub use resource::Resource;

use std::sync::Arc;

use crate::api::PortalApi;
use crate::error::{CoreError, CoreResult};
use crate::store::Store;
use crate::types::{
    Credentials, DnsRecord, Invoice, NewTicket, Notification, PaymentMethod, ProfileUpdate,
    Service, SupportTicket, User,
};

/// Hooks whose data lives in the global store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreHook {
    Profile,
    Services,
    Tickets,
    Notifications,
}

/// Payload of a store hook
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreData {
    Profile(User),
    Services(Vec<Service>),
    Tickets(Vec<SupportTicket>),
    Notifications(Vec<Notification>),
}

/// Outcome of [`StoreHook::fetch`], ready to be applied
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreHookResult {
    pub hook: StoreHook,
    pub result: CoreResult<StoreData>,
}

impl StoreHook {
    pub fn all() -> &'static [StoreHook] {
        &[
            Self::Profile,
            Self::Services,
            Self::Tickets,
            Self::Notifications,
        ]
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Profile => "profile",
            Self::Services => "services",
            Self::Tickets => "tickets",
            Self::Notifications => "notifications",
        }
    }

    /// Loading on, error cleared
    pub fn begin(self, store: &mut Store) {
        store.set_loading(true);
        store.set_error(None);
    }

    /// Call the API (no store access)
    pub async fn fetch(self, api: Arc<dyn PortalApi>) -> StoreHookResult {
        let result = match self {
            Self::Profile => api.get_profile().await.into_result().map(StoreData::Profile),
            Self::Services => api
                .get_services()
                .await
                .into_result()
                .map(StoreData::Services),
            Self::Tickets => api
                .get_support_tickets()
                .await
                .into_result()
                .map(StoreData::Tickets),
            Self::Notifications => api
                .get_notifications()
                .await
                .into_result()
                .map(StoreData::Notifications),
        };
        StoreHookResult { hook: self, result }
    }

    /// Full protocol against an owned store
    pub async fn run(self, api: Arc<dyn PortalApi>, store: &mut Store) -> CoreResult<()> {
        self.begin(store);
        let outcome = self.fetch(api).await;
        complete(store, outcome)
    }
}

/// Write the data or the error, then loading off
pub fn complete(store: &mut Store, outcome: StoreHookResult) -> CoreResult<()> {
    let result = match outcome.result {
        Ok(StoreData::Profile(user)) => {
            store.set_user(user);
            Ok(())
        }
        Ok(StoreData::Services(services)) => {
            store.set_services(services);
            Ok(())
        }
        Ok(StoreData::Tickets(tickets)) => {
            store.set_tickets(tickets);
            Ok(())
        }
        Ok(StoreData::Notifications(notifications)) => {
            store.set_notifications(notifications);
            Ok(())
        }
        Err(e) => {
            log_failure(outcome.hook.name(), &e);
            store.set_error(Some(e.to_string()));
            Err(e)
        }
    };
    store.set_loading(false);
    result
}

fn log_failure(what: &str, e: &CoreError) {
    if e.is_expected() {
        log::warn!("Loading {what} failed: {e}");
    } else {
        log::error!("Loading {what} failed: {e}");
    }
}

// ========== 本地状态 hooks ==========

/// Billing page data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Billing {
    pub invoices: Vec<Invoice>,
    pub payment_methods: Vec<PaymentMethod>,
}

/// Invoices and payment methods (both must succeed)
pub async fn fetch_billing(api: Arc<dyn PortalApi>) -> CoreResult<Billing> {
    let invoices = api.get_invoices().await.into_result();
    let payment_methods = api.get_payment_methods().await.into_result();
    let billing = invoices.and_then(|invoices| {
        payment_methods.map(|payment_methods| Billing {
            invoices,
            payment_methods,
        })
    });
    if let Err(e) = &billing {
        log_failure("billing", e);
    }
    billing
}

/// DNS records of one domain service
pub async fn fetch_dns_records(
    api: Arc<dyn PortalApi>,
    domain_id: String,
) -> CoreResult<Vec<DnsRecord>> {
    let records = api.get_dns_records(&domain_id).await.into_result();
    if let Err(e) = &records {
        log_failure(&format!("DNS records of {domain_id}"), e);
    }
    records
}

// ========== 变更操作 ==========

/// State-changing API calls
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mutation {
    Login(Credentials),
    Logout,
    UpdateProfile(ProfileUpdate),
    ToggleAutoRenew(String),
    CreateTicket(NewTicket),
    MarkNotificationRead(String),
}

/// Successful mutation payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MutationData {
    LoggedIn(User),
    LoggedOut,
    ProfileUpdated(User),
    ServiceUpdated(Service),
    TicketCreated(SupportTicket),
    NotificationUpdated(Notification),
}

/// Which mutation an outcome belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MutationKind {
    Login,
    Logout,
    UpdateProfile,
    ToggleAutoRenew,
    CreateTicket,
    MarkNotificationRead,
}

impl MutationKind {
    pub fn name(self) -> &'static str {
        match self {
            Self::Login => "login",
            Self::Logout => "logout",
            Self::UpdateProfile => "updateProfile",
            Self::ToggleAutoRenew => "toggleAutoRenew",
            Self::CreateTicket => "createSupportTicket",
            Self::MarkNotificationRead => "markNotificationRead",
        }
    }
}

/// Outcome of [`Mutation::execute`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MutationResult {
    pub kind: MutationKind,
    pub result: CoreResult<MutationData>,
}

impl Mutation {
    pub fn kind(&self) -> MutationKind {
        match self {
            Self::Login(_) => MutationKind::Login,
            Self::Logout => MutationKind::Logout,
            Self::UpdateProfile(_) => MutationKind::UpdateProfile,
            Self::ToggleAutoRenew(_) => MutationKind::ToggleAutoRenew,
            Self::CreateTicket(_) => MutationKind::CreateTicket,
            Self::MarkNotificationRead(_) => MutationKind::MarkNotificationRead,
        }
    }

    /// Call the API (no store access)
    pub async fn execute(self, api: Arc<dyn PortalApi>) -> MutationResult {
        let kind = self.kind();
        let result = match self {
            Self::Login(credentials) => api
                .login(&credentials)
                .await
                .into_result()
                .map(MutationData::LoggedIn),
            Self::Logout => api
                .logout()
                .await
                .into_result()
                .map(|()| MutationData::LoggedOut),
            Self::UpdateProfile(update) => api
                .update_profile(&update)
                .await
                .into_result()
                .map(MutationData::ProfileUpdated),
            Self::ToggleAutoRenew(id) => api
                .toggle_auto_renew(&id)
                .await
                .into_result()
                .map(MutationData::ServiceUpdated),
            Self::CreateTicket(ticket) => api
                .create_support_ticket(&ticket)
                .await
                .into_result()
                .map(MutationData::TicketCreated),
            Self::MarkNotificationRead(id) => api
                .mark_notification_read(&id)
                .await
                .into_result()
                .map(MutationData::NotificationUpdated),
        };
        MutationResult { kind, result }
    }

    /// Execute and apply against an owned store
    pub async fn run(self, api: Arc<dyn PortalApi>, store: &mut Store) -> CoreResult<MutationData> {
        let outcome = self.execute(api).await;
        apply(store, outcome)
    }
}

/// Apply a mutation outcome; on failure the store is left unchanged
pub fn apply(store: &mut Store, outcome: MutationResult) -> CoreResult<MutationData> {
    let data = match outcome.result {
        Ok(data) => data,
        Err(e) => {
            log_failure(outcome.kind.name(), &e);
            return Err(e);
        }
    };

    match &data {
        MutationData::LoggedIn(user) | MutationData::ProfileUpdated(user) => {
            store.set_user(user.clone());
        }
        MutationData::LoggedOut => store.clear_user(),
        MutationData::ServiceUpdated(service) => store.update_service(service.clone()),
        MutationData::TicketCreated(ticket) => store.add_ticket(ticket.clone()),
        MutationData::NotificationUpdated(notification) => {
            store.update_notification(notification.clone());
        }
    }
    log::info!("{} succeeded", outcome.kind.name());
    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{VALID_EMAIL, VALID_PASSWORD};
    use crate::test_utils::{broken_api, healthy_api, service};
    use crate::types::{TicketCategory, TicketPriority};

    #[tokio::test]
    async fn store_hook_fills_store_and_clears_loading() {
        let mut store = Store::new();
        StoreHook::Services.run(healthy_api(), &mut store).await.unwrap();

        let state = store.state();
        assert!(!state.loading);
        assert_eq!(state.error, None);
        assert_eq!(state.services.len(), 6);
    }

    #[tokio::test]
    async fn begin_sets_loading_and_clears_error() {
        let mut store = Store::new();
        store.set_error(Some("stale".to_string()));
        StoreHook::Tickets.begin(&mut store);
        assert!(store.state().loading);
        assert_eq!(store.state().error, None);
    }

    #[tokio::test]
    async fn failed_hook_keeps_previous_data() {
        let mut store = Store::new();
        store.set_services(vec![service("s1", true)]);

        let err = StoreHook::Services
            .run(broken_api(), &mut store)
            .await
            .unwrap_err();

        let state = store.state();
        assert!(!state.loading);
        assert_eq!(state.error, Some(err.to_string()));
        assert_eq!(state.services.len(), 1);
    }

    #[tokio::test]
    async fn notifications_hook_updates_unread_count() {
        let mut store = Store::new();
        StoreHook::Notifications
            .run(healthy_api(), &mut store)
            .await
            .unwrap();
        assert_eq!(store.state().unread_count, 3);
    }

    #[tokio::test]
    async fn billing_resource_loads_both_lists() {
        let mut billing = Resource::new();
        billing.load(fetch_billing(healthy_api())).await;
        let data = billing.data.unwrap();
        assert_eq!(data.invoices.len(), 4);
        assert_eq!(data.payment_methods.len(), 3);
    }

    #[tokio::test]
    async fn dns_resource_reports_error() {
        let mut records = Resource::new();
        records
            .load(fetch_dns_records(healthy_api(), "svc_3".to_string()))
            .await;
        assert!(records.data.is_none());
        assert!(records.error.is_some());
        assert!(!records.loading);
    }

    #[tokio::test]
    async fn login_then_logout() {
        let api: Arc<dyn PortalApi> = Arc::new(crate::api::MockPortalApi::new(
            std::time::Duration::ZERO,
            Arc::new(crate::api::NeverFail),
        ));
        let mut store = Store::new();

        let bad = Mutation::Login(Credentials {
            email: VALID_EMAIL.to_string(),
            password: "nope".to_string(),
        });
        assert_eq!(
            bad.run(api.clone(), &mut store).await,
            Err(CoreError::InvalidCredentials)
        );
        assert!(!store.state().is_authenticated());

        let good = Mutation::Login(Credentials {
            email: VALID_EMAIL.to_string(),
            password: VALID_PASSWORD.to_string(),
        });
        good.run(api.clone(), &mut store).await.unwrap();
        assert!(store.state().is_authenticated());

        Mutation::Logout.run(api, &mut store).await.unwrap();
        assert!(!store.state().is_authenticated());
    }

    #[tokio::test]
    async fn toggle_auto_renew_updates_only_that_service() {
        let api = healthy_api();
        let mut store = Store::new();
        StoreHook::Services.run(api.clone(), &mut store).await.unwrap();
        let before = store.state().services.clone();

        Mutation::ToggleAutoRenew("svc_2".to_string())
            .run(api, &mut store)
            .await
            .unwrap();

        for (old, new) in before.iter().zip(&store.state().services) {
            if old.id == "svc_2" {
                assert_eq!(new.auto_renew, !old.auto_renew);
            } else {
                assert_eq!(old, new);
            }
        }
    }

    #[tokio::test]
    async fn created_ticket_is_prepended() {
        let api = healthy_api();
        let mut store = Store::new();
        StoreHook::Tickets.run(api.clone(), &mut store).await.unwrap();

        let created = Mutation::CreateTicket(NewTicket {
            category: TicketCategory::Billing,
            subject: "Refund request".to_string(),
            body: "I was charged twice for the same renewal".to_string(),
            priority: TicketPriority::High,
        })
        .run(api, &mut store)
        .await
        .unwrap();

        let MutationData::TicketCreated(ticket) = created else {
            panic!("unexpected mutation data");
        };
        assert_eq!(store.state().tickets[0], ticket);
        assert_eq!(store.state().tickets.len(), 4);
    }

    #[tokio::test]
    async fn failed_mutation_leaves_store_unchanged() {
        let mut store = Store::new();
        store.set_services(vec![service("svc_1", true)]);
        let before = store.state().clone();

        let result = Mutation::ToggleAutoRenew("svc_1".to_string())
            .run(broken_api(), &mut store)
            .await;
        assert!(result.is_err());
        assert_eq!(store.state(), &before);
    }
}
