//! Service (billable asset) types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::DnsRecord;

/// Days before expiry at which a service counts as "expiring soon"
pub const EXPIRY_WARNING_DAYS: i64 = 30;

/// Service type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceType {
    Domain,
    Hosting,
    Email,
    Ssl,
    Other,
}

impl ServiceType {
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Domain => "Domain",
            Self::Hosting => "Hosting",
            Self::Email => "Email",
            Self::Ssl => "SSL Certificate",
            Self::Other => "Other",
        }
    }
}

/// Service status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceStatus {
    Active,
    Pending,
    Suspended,
    Expired,
    Cancelled,
}

impl ServiceStatus {
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Pending => "Pending",
            Self::Suspended => "Suspended",
            Self::Expired => "Expired",
            Self::Cancelled => "Cancelled",
        }
    }
}

/// Domain specific details
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainDetails {
    pub nameservers: Vec<String>,
    #[serde(default)]
    pub dns_records: Vec<DnsRecord>,
    /// Registrar transfer lock
    pub locked: bool,
}

/// A billable customer asset
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub service_type: ServiceType,
    pub status: ServiceStatus,
    pub registration_date: NaiveDate,
    pub expiry_date: NaiveDate,
    pub auto_renew: bool,
    /// Renewal price in minor units (cents)
    pub price_cents: u64,
    pub currency: String,
    /// Present only for `ServiceType::Domain`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<DomainDetails>,
}

impl Service {
    /// Signed day count until expiry (negative once expired)
    pub fn days_until_expiry(&self, today: NaiveDate) -> i64 {
        (self.expiry_date - today).num_days()
    }

    pub fn is_expiring_soon(&self, today: NaiveDate) -> bool {
        let days = self.days_until_expiry(today);
        (0..=EXPIRY_WARNING_DAYS).contains(&days)
    }

    pub fn is_domain(&self) -> bool {
        self.service_type == ServiceType::Domain
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service(expiry: NaiveDate) -> Service {
        Service {
            id: "svc_1".to_string(),
            name: "example.com".to_string(),
            service_type: ServiceType::Domain,
            status: ServiceStatus::Active,
            registration_date: NaiveDate::from_ymd_opt(2020, 1, 1).unwrap_or_default(),
            expiry_date: expiry,
            auto_renew: true,
            price_cents: 1299,
            currency: "USD".to_string(),
            domain: None,
        }
    }

    #[test]
    fn expiring_soon_window() {
        let today = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap_or_default();
        let soon = service(today + chrono::Days::new(10));
        let later = service(today + chrono::Days::new(31));
        let past = service(today - chrono::Days::new(1));

        assert!(soon.is_expiring_soon(today));
        assert!(!later.is_expiring_soon(today));
        assert!(!past.is_expiring_soon(today));
        assert_eq!(past.days_until_expiry(today), -1);
    }

    #[test]
    fn type_serializes_lowercase() {
        let json = serde_json::to_string(&ServiceType::Ssl).unwrap_or_default();
        assert_eq!(json, "\"ssl\"");
    }
}
