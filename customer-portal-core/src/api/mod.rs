//! Backend API abstraction
//!
//! `PortalApi` is the seam between the portal and its backend. The only
//! implementation shipped is [`MockPortalApi`], an in-process stand-in with
//! simulated latency and injectable failures; a networked client can replace
//! it without touching the hooks that call it.

mod failure;
mod mock;
mod seed;

pub use failure::{AlwaysFail, FailurePolicy, FnFailure, NeverFail, RandomFailure};
pub use mock::{MockApiConfig, MockPortalApi, VALID_EMAIL, VALID_PASSWORD};
pub use seed::SeedData;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::types::{
    ApiResponse, Credentials, DnsRecord, Invoice, NewTicket, Notification, PaymentMethod,
    ProfileUpdate, Service, SupportTicket, User,
};

/// API endpoint identifier (used for failure injection and logging)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Endpoint {
    Login,
    Logout,
    GetProfile,
    UpdateProfile,
    GetServices,
    ToggleAutoRenew,
    GetSupportTickets,
    CreateSupportTicket,
    GetNotifications,
    MarkNotificationRead,
    GetInvoices,
    GetPaymentMethods,
    GetDnsRecords,
}

impl Endpoint {
    pub fn all() -> &'static [Endpoint] {
        &[
            Self::Login,
            Self::Logout,
            Self::GetProfile,
            Self::UpdateProfile,
            Self::GetServices,
            Self::ToggleAutoRenew,
            Self::GetSupportTickets,
            Self::CreateSupportTicket,
            Self::GetNotifications,
            Self::MarkNotificationRead,
            Self::GetInvoices,
            Self::GetPaymentMethods,
            Self::GetDnsRecords,
        ]
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Login => "login",
            Self::Logout => "logout",
            Self::GetProfile => "getProfile",
            Self::UpdateProfile => "updateProfile",
            Self::GetServices => "getServices",
            Self::ToggleAutoRenew => "toggleAutoRenew",
            Self::GetSupportTickets => "getSupportTickets",
            Self::CreateSupportTicket => "createSupportTicket",
            Self::GetNotifications => "getNotifications",
            Self::MarkNotificationRead => "markNotificationRead",
            Self::GetInvoices => "getInvoices",
            Self::GetPaymentMethods => "getPaymentMethods",
            Self::GetDnsRecords => "getDnsRecords",
        }
    }

    /// Message shown when an injected failure hits this endpoint
    pub fn failure_message(self) -> &'static str {
        match self {
            Self::Login => "Unable to sign in right now. Please try again.",
            Self::Logout => "Unable to sign out right now. Please try again.",
            Self::GetProfile => "Failed to load your profile.",
            Self::UpdateProfile => "Failed to update your profile. Please try again.",
            Self::GetServices => "Failed to load services.",
            Self::ToggleAutoRenew => "Failed to update auto-renew setting.",
            Self::GetSupportTickets => "Failed to load support tickets.",
            Self::CreateSupportTicket => "Failed to create support ticket. Please try again.",
            Self::GetNotifications => "Failed to load notifications.",
            Self::MarkNotificationRead => "Failed to update notification.",
            Self::GetInvoices => "Failed to load invoices.",
            Self::GetPaymentMethods => "Failed to load payment methods.",
            Self::GetDnsRecords => "Failed to load DNS records.",
        }
    }
}

/// Portal backend
#[async_trait]
pub trait PortalApi: Send + Sync {
    /// Start a session
    async fn login(&self, credentials: &Credentials) -> ApiResponse<User>;

    /// End the session
    async fn logout(&self) -> ApiResponse<()>;

    async fn get_profile(&self) -> ApiResponse<User>;

    /// Update editable profile fields; field errors are reported in `errors`
    async fn update_profile(&self, update: &ProfileUpdate) -> ApiResponse<User>;

    async fn get_services(&self) -> ApiResponse<Vec<Service>>;

    /// Flip the auto-renew flag of one service, returning the updated record
    async fn toggle_auto_renew(&self, service_id: &str) -> ApiResponse<Service>;

    /// Newest first
    async fn get_support_tickets(&self) -> ApiResponse<Vec<SupportTicket>>;

    async fn create_support_ticket(&self, ticket: &NewTicket) -> ApiResponse<SupportTicket>;

    /// Newest first
    async fn get_notifications(&self) -> ApiResponse<Vec<Notification>>;

    async fn mark_notification_read(&self, notification_id: &str) -> ApiResponse<Notification>;

    async fn get_invoices(&self) -> ApiResponse<Vec<Invoice>>;

    async fn get_payment_methods(&self) -> ApiResponse<Vec<PaymentMethod>>;

    async fn get_dns_records(&self, domain_id: &str) -> ApiResponse<Vec<DnsRecord>>;
}
