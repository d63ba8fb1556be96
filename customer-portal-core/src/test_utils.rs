//! Shared fixtures for unit tests

#![allow(clippy::unwrap_used)]

use std::sync::Arc;
use std::time::Duration;

use chrono::{NaiveDate, TimeZone, Utc};

use crate::api::{AlwaysFail, FailurePolicy, MockPortalApi, NeverFail};
use crate::types::{
    Notification, NotificationType, Service, ServiceStatus, ServiceType, SupportTicket,
    TicketCategory, TicketPriority, TicketStatus, User,
};

pub fn test_user() -> User {
    User {
        id: "usr_test".to_string(),
        first_name: "Jane".to_string(),
        last_name: "Tester".to_string(),
        email: "jane@example.com".to_string(),
        phone: "+1 555 0100".to_string(),
        company: None,
        addresses: Vec::new(),
        two_factor_enabled: false,
        created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
    }
}

pub fn notification(id: &str, read: bool) -> Notification {
    Notification {
        id: id.to_string(),
        notification_type: NotificationType::Info,
        title: format!("Notification {id}"),
        message: "Something happened".to_string(),
        read,
        timestamp: Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap(),
        link: None,
    }
}

pub fn service(id: &str, auto_renew: bool) -> Service {
    Service {
        id: id.to_string(),
        name: format!("{id}.example"),
        service_type: ServiceType::Hosting,
        status: ServiceStatus::Active,
        registration_date: NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
        expiry_date: NaiveDate::from_ymd_opt(2027, 1, 1).unwrap(),
        auto_renew,
        price_cents: 999,
        currency: "USD".to_string(),
        domain: None,
    }
}

pub fn ticket(id: &str) -> SupportTicket {
    let at = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
    SupportTicket {
        id: id.to_string(),
        category: TicketCategory::Technical,
        subject: format!("Ticket {id}"),
        body: "Please help me with this issue".to_string(),
        status: TicketStatus::Open,
        priority: TicketPriority::Medium,
        created_at: at,
        updated_at: at,
        messages: Vec::new(),
    }
}

fn api_with(failure: Arc<dyn FailurePolicy>) -> Arc<MockPortalApi> {
    Arc::new(MockPortalApi::new(Duration::ZERO, failure).with_session())
}

/// Logged-in mock that never fails and never sleeps
pub fn healthy_api() -> Arc<MockPortalApi> {
    api_with(Arc::new(NeverFail))
}

/// Logged-in mock where every call fails
pub fn broken_api() -> Arc<MockPortalApi> {
    api_with(Arc::new(AlwaysFail))
}
