//! In-memory mock backend

use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

use super::failure::{FailurePolicy, RandomFailure};
use super::seed::SeedData;
use super::{Endpoint, PortalApi};
use crate::error::{CoreError, CoreResult};
use crate::types::{
    ApiResponse, Credentials, DnsRecord, Invoice, NewTicket, Notification, PaymentMethod,
    ProfileUpdate, Service, SupportTicket, TicketMessage, TicketStatus, User,
};
use crate::validation;

/// The only accepted login
pub const VALID_EMAIL: &str = "john.doe@example.com";
pub const VALID_PASSWORD: &str = "password123";

/// Upper bound for the configured latency
const MAX_LATENCY_MS: u64 = 60_000;

/// Mock backend tuning (read from the application config file)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MockApiConfig {
    /// Simulated round trip in milliseconds
    pub latency_ms: u64,
    /// Probability that a read endpoint fails (mutations use half)
    pub failure_rate: f64,
}

impl Default for MockApiConfig {
    fn default() -> Self {
        Self {
            latency_ms: 500,
            failure_rate: RandomFailure::DEFAULT_RATE,
        }
    }
}

/// Mutable backend data
#[derive(Debug)]
struct MockDb {
    session: bool,
    seed: SeedData,
}

/// In-process stand-in for the portal backend
pub struct MockPortalApi {
    db: RwLock<MockDb>,
    latency: Duration,
    failure: Arc<dyn FailurePolicy>,
}

impl MockPortalApi {
    /// Create a mock with the given latency and failure policy (logged out)
    pub fn new(latency: Duration, failure: Arc<dyn FailurePolicy>) -> Self {
        Self {
            db: RwLock::new(MockDb {
                session: false,
                seed: SeedData::generate(Utc::now()),
            }),
            latency,
            failure,
        }
    }

    /// Build from config with per-endpoint tuned random failures
    pub fn from_config(config: &MockApiConfig) -> Self {
        Self::new(
            Duration::from_millis(config.latency_ms.min(MAX_LATENCY_MS)),
            Arc::new(RandomFailure::tuned(config.failure_rate)),
        )
    }

    /// Start with an active session (skips the login step)
    #[must_use]
    pub fn with_session(mut self) -> Self {
        self.db.get_mut().session = true;
        self
    }

    /// Replace the served dataset
    #[must_use]
    pub fn with_seed(mut self, seed: SeedData) -> Self {
        self.db.get_mut().seed = seed;
        self
    }

    /// Simulated network round trip followed by failure injection
    async fn simulate(&self, endpoint: Endpoint) -> CoreResult<()> {
        if !self.latency.is_zero() {
            let jitter = rand::rng().random_range(0.8..=1.2);
            tokio::time::sleep(jittered(self.latency, jitter)).await;
        }

        if self.failure.should_fail(endpoint) {
            log::warn!("Injected failure on {}", endpoint.name());
            return Err(CoreError::RequestFailed(
                endpoint.failure_message().to_string(),
            ));
        }

        Ok(())
    }

    /// Simulate the call and require a session
    async fn authorized(&self, endpoint: Endpoint) -> CoreResult<()> {
        self.simulate(endpoint).await?;
        if self.db.read().await.session {
            Ok(())
        } else {
            Err(CoreError::Unauthorized)
        }
    }

    async fn read<T, F>(&self, endpoint: Endpoint, f: F) -> ApiResponse<T>
    where
        F: FnOnce(&SeedData) -> CoreResult<T> + Send,
        T: Send,
    {
        let result = match self.authorized(endpoint).await {
            Ok(()) => f(&self.db.read().await.seed),
            Err(e) => Err(e),
        };
        respond(endpoint, result)
    }

    async fn write<T, F>(&self, endpoint: Endpoint, f: F) -> ApiResponse<T>
    where
        F: FnOnce(&mut SeedData) -> CoreResult<T> + Send,
        T: Send,
    {
        let result = match self.authorized(endpoint).await {
            Ok(()) => f(&mut self.db.write().await.seed),
            Err(e) => Err(e),
        };
        respond(endpoint, result)
    }
}

/// Log and wrap a result into the response envelope
fn respond<T>(endpoint: Endpoint, result: CoreResult<T>) -> ApiResponse<T> {
    match result {
        Ok(data) => ApiResponse::success(data),
        Err(e) => {
            if e.is_expected() {
                log::warn!("{} failed: {e}", endpoint.name());
            } else {
                log::error!("{} failed: {e}", endpoint.name());
            }
            e.into()
        }
    }
}

/// Server side profile checks, mirroring the form rules
fn validate_profile(update: &ProfileUpdate) -> CoreResult<()> {
    let checks = [
        ("firstName", validation::name().validate(&update.first_name)),
        ("lastName", validation::name().validate(&update.last_name)),
        ("email", validation::email().validate(&update.email)),
        ("phone", validation::phone().validate(&update.phone)),
    ];
    let errors: BTreeMap<String, String> = checks
        .into_iter()
        .filter_map(|(field, err)| err.map(|e| (field.to_string(), e)))
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(CoreError::Validation {
            message: "Please correct the highlighted fields".to_string(),
            errors,
        })
    }
}

fn validate_ticket(ticket: &NewTicket) -> CoreResult<()> {
    let mut errors = BTreeMap::new();
    if ticket.subject.trim().is_empty() {
        errors.insert("subject".to_string(), "Subject is required".to_string());
    }
    if ticket.body.trim().is_empty() {
        errors.insert("body".to_string(), "Message is required".to_string());
    }
    if errors.is_empty() {
        Ok(())
    } else {
        Err(CoreError::Validation {
            message: "Please fill in all required fields".to_string(),
            errors,
        })
    }
}

/// Scale the latency by `factor`, keeping it unchanged when the product does not fit
fn jittered(latency: Duration, factor: f64) -> Duration {
    Duration::try_from_secs_f64(latency.as_secs_f64() * factor).unwrap_or(latency)
}

fn short_id(prefix: &str) -> String {
    let id = uuid::Uuid::new_v4().simple().to_string();
    format!("{prefix}_{}", &id[..8])
}

#[async_trait]
impl PortalApi for MockPortalApi {
    async fn login(&self, credentials: &Credentials) -> ApiResponse<User> {
        let endpoint = Endpoint::Login;
        if let Err(e) = self.simulate(endpoint).await {
            return respond(endpoint, Err(e));
        }

        if credentials.email != VALID_EMAIL || credentials.password != VALID_PASSWORD {
            return respond(endpoint, Err(CoreError::InvalidCredentials));
        }

        let mut db = self.db.write().await;
        db.session = true;
        log::info!("Session started for {}", db.seed.user.email);
        ApiResponse::success(db.seed.user.clone())
    }

    async fn logout(&self) -> ApiResponse<()> {
        let endpoint = Endpoint::Logout;
        if let Err(e) = self.simulate(endpoint).await {
            return respond(endpoint, Err(e));
        }
        self.db.write().await.session = false;
        log::info!("Session ended");
        ApiResponse::success(())
    }

    async fn get_profile(&self) -> ApiResponse<User> {
        self.read(Endpoint::GetProfile, |seed| Ok(seed.user.clone()))
            .await
    }

    async fn update_profile(&self, update: &ProfileUpdate) -> ApiResponse<User> {
        self.write(Endpoint::UpdateProfile, |seed| {
            validate_profile(update)?;
            seed.user = update.apply_to(&seed.user);
            Ok(seed.user.clone())
        })
        .await
    }

    async fn get_services(&self) -> ApiResponse<Vec<Service>> {
        self.read(Endpoint::GetServices, |seed| Ok(seed.services.clone()))
            .await
    }

    async fn toggle_auto_renew(&self, service_id: &str) -> ApiResponse<Service> {
        self.write(Endpoint::ToggleAutoRenew, |seed| {
            let service = seed
                .services
                .iter_mut()
                .find(|s| s.id == service_id)
                .ok_or_else(|| CoreError::NotFound(format!("service {service_id}")))?;
            service.auto_renew = !service.auto_renew;
            Ok(service.clone())
        })
        .await
    }

    async fn get_support_tickets(&self) -> ApiResponse<Vec<SupportTicket>> {
        self.read(Endpoint::GetSupportTickets, |seed| Ok(seed.tickets.clone()))
            .await
    }

    async fn create_support_ticket(&self, ticket: &NewTicket) -> ApiResponse<SupportTicket> {
        self.write(Endpoint::CreateSupportTicket, |seed| {
            validate_ticket(ticket)?;
            let now = Utc::now();
            let created = SupportTicket {
                id: short_id("tkt"),
                category: ticket.category,
                subject: ticket.subject.trim().to_string(),
                body: ticket.body.trim().to_string(),
                status: TicketStatus::Open,
                priority: ticket.priority,
                created_at: now,
                updated_at: now,
                messages: vec![TicketMessage {
                    id: short_id("msg"),
                    author: seed.user.full_name(),
                    from_staff: false,
                    body: ticket.body.trim().to_string(),
                    created_at: now,
                }],
            };
            seed.tickets.insert(0, created.clone());
            Ok(created)
        })
        .await
    }

    async fn get_notifications(&self) -> ApiResponse<Vec<Notification>> {
        self.read(Endpoint::GetNotifications, |seed| {
            Ok(seed.notifications.clone())
        })
        .await
    }

    async fn mark_notification_read(&self, notification_id: &str) -> ApiResponse<Notification> {
        self.write(Endpoint::MarkNotificationRead, |seed| {
            let notification = seed
                .notifications
                .iter_mut()
                .find(|n| n.id == notification_id)
                .ok_or_else(|| CoreError::NotFound(format!("notification {notification_id}")))?;
            notification.read = true;
            Ok(notification.clone())
        })
        .await
    }

    async fn get_invoices(&self) -> ApiResponse<Vec<Invoice>> {
        self.read(Endpoint::GetInvoices, |seed| Ok(seed.invoices.clone()))
            .await
    }

    async fn get_payment_methods(&self) -> ApiResponse<Vec<PaymentMethod>> {
        self.read(Endpoint::GetPaymentMethods, |seed| {
            Ok(seed.payment_methods.clone())
        })
        .await
    }

    async fn get_dns_records(&self, domain_id: &str) -> ApiResponse<Vec<DnsRecord>> {
        self.read(Endpoint::GetDnsRecords, |seed| {
            seed.services
                .iter()
                .find(|s| s.id == domain_id)
                .and_then(|s| s.domain.as_ref())
                .map(|d| d.dns_records.clone())
                .ok_or_else(|| CoreError::NotFound(format!("domain {domain_id}")))
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{AlwaysFail, FnFailure, NeverFail};
    use crate::types::{TicketCategory, TicketPriority};

    fn api() -> MockPortalApi {
        MockPortalApi::new(Duration::ZERO, Arc::new(NeverFail))
    }

    fn creds(email: &str, password: &str) -> Credentials {
        Credentials {
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[tokio::test]
    async fn login_accepts_only_the_demo_account() {
        let api = api();

        let ok = api.login(&creds(VALID_EMAIL, VALID_PASSWORD)).await;
        assert!(ok.success);
        assert_eq!(ok.data.map(|u| u.email), Some(VALID_EMAIL.to_string()));

        for (email, password) in [
            (VALID_EMAIL, "password124"),
            ("jane@example.com", VALID_PASSWORD),
            ("", ""),
        ] {
            let resp = api.login(&creds(email, password)).await;
            assert!(!resp.success);
            assert_eq!(resp.message.as_deref(), Some("Invalid email or password"));
        }
    }

    #[tokio::test]
    async fn login_email_must_match_exactly() {
        let api = api();
        for email in ["JOHN.DOE@EXAMPLE.COM", " john.doe@example.com "] {
            let resp = api.login(&creds(email, VALID_PASSWORD)).await;
            assert!(!resp.success);
            assert_eq!(resp.message.as_deref(), Some("Invalid email or password"));
        }
        assert!(api.get_profile().await.into_result().is_err());
    }

    #[test]
    fn huge_latency_is_clamped() {
        let config = MockApiConfig {
            latency_ms: u64::MAX,
            ..MockApiConfig::default()
        };
        let api = MockPortalApi::from_config(&config);
        assert_eq!(api.latency, Duration::from_millis(MAX_LATENCY_MS));

        assert_eq!(jittered(Duration::MAX, 1.2), Duration::MAX);
        assert_eq!(jittered(Duration::from_millis(500), 2.0), Duration::from_secs(1));
    }

    #[tokio::test]
    async fn endpoints_require_a_session() {
        let api = api();
        let resp = api.get_services().await;
        assert_eq!(resp.into_result(), Err(CoreError::Unauthorized));

        api.login(&creds(VALID_EMAIL, VALID_PASSWORD)).await;
        assert!(api.get_services().await.success);

        api.logout().await;
        assert!(!api.get_services().await.success);
    }

    #[tokio::test]
    async fn toggle_auto_renew_changes_one_service() {
        let api = api().with_session();
        let before = api.get_services().await.into_result().unwrap();

        let toggled = api.toggle_auto_renew("svc_2").await.into_result().unwrap();
        let after = api.get_services().await.into_result().unwrap();

        assert_eq!(toggled.auto_renew, !before[1].auto_renew);
        for (b, a) in before.iter().zip(&after) {
            if b.id == "svc_2" {
                assert_eq!(a.auto_renew, !b.auto_renew);
            } else {
                assert_eq!(a, b);
            }
        }
    }

    #[tokio::test]
    async fn toggle_unknown_service_is_not_found() {
        let api = api().with_session();
        let err = api.toggle_auto_renew("nope").await.into_result().unwrap_err();
        assert!(matches!(err, CoreError::NotFound(_)));
    }

    #[tokio::test]
    async fn create_ticket_is_open_with_one_message() {
        let api = api().with_session();
        let before = api.get_support_tickets().await.into_result().unwrap();

        let ticket = api
            .create_support_ticket(&NewTicket {
                category: TicketCategory::Technical,
                subject: "Website down".to_string(),
                body: "The homepage returns a 502 error since this morning.".to_string(),
                priority: TicketPriority::Urgent,
            })
            .await
            .into_result()
            .unwrap();

        assert_eq!(ticket.status, TicketStatus::Open);
        assert_eq!(ticket.messages.len(), 1);
        assert_eq!(ticket.messages[0].author, "John Doe");

        let after = api.get_support_tickets().await.into_result().unwrap();
        assert_eq!(after.len(), before.len() + 1);
        assert_eq!(after[0].id, ticket.id);
    }

    #[tokio::test]
    async fn update_profile_reports_field_errors() {
        let api = api().with_session();
        let user = api.get_profile().await.into_result().unwrap();
        let mut update = ProfileUpdate::from_user(&user);
        update.email = "not-an-email".to_string();
        update.first_name = " ".to_string();

        let resp = api.update_profile(&update).await;
        assert!(!resp.success);
        assert!(resp.errors.contains_key("email"));
        assert!(resp.errors.contains_key("firstName"));

        update.email = "john@acme.test".to_string();
        update.first_name = "Jon".to_string();
        let user = api.update_profile(&update).await.into_result().unwrap();
        assert_eq!(user.first_name, "Jon");
        assert_eq!(api.get_profile().await.into_result().unwrap().email, "john@acme.test");
    }

    #[tokio::test]
    async fn dns_records_for_non_domain_is_not_found() {
        let api = api().with_session();
        assert!(!api.get_dns_records("svc_1").await.into_result().unwrap().is_empty());
        assert!(matches!(
            api.get_dns_records("svc_3").await.into_result(),
            Err(CoreError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn always_fail_surfaces_endpoint_message() {
        let api = MockPortalApi::new(Duration::ZERO, Arc::new(AlwaysFail)).with_session();
        let resp = api.get_invoices().await;
        assert!(!resp.success);
        assert_eq!(resp.message.as_deref(), Some("Failed to load invoices."));
    }

    #[tokio::test]
    async fn failure_predicate_targets_single_endpoint() {
        let policy = FnFailure(|e: Endpoint| e == Endpoint::GetNotifications);
        let api = MockPortalApi::new(Duration::ZERO, Arc::new(policy)).with_session();
        assert!(api.get_services().await.success);
        assert!(!api.get_notifications().await.success);
    }

    #[tokio::test]
    async fn mark_read_persists() {
        let api = api().with_session();
        let n = api.mark_notification_read("ntf_1").await.into_result().unwrap();
        assert!(n.read);
        let all = api.get_notifications().await.into_result().unwrap();
        assert!(all.iter().find(|n| n.id == "ntf_1").is_some_and(|n| n.read));
    }
}
