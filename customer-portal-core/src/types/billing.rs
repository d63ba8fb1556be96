//! Invoice and payment method types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Invoice status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    Paid,
    Unpaid,
    Overdue,
    Cancelled,
}

impl InvoiceStatus {
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Paid => "Paid",
            Self::Unpaid => "Unpaid",
            Self::Overdue => "Overdue",
            Self::Cancelled => "Cancelled",
        }
    }
}

/// Invoice
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    pub id: String,
    pub number: String,
    /// Amount in minor units (cents)
    pub amount_cents: u64,
    pub currency: String,
    pub status: InvoiceStatus,
    pub issue_date: NaiveDate,
    pub due_date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paid_date: Option<NaiveDate>,
    pub services: Vec<String>,
}

impl Invoice {
    /// Unpaid or overdue
    pub fn is_outstanding(&self) -> bool {
        matches!(self.status, InvoiceStatus::Unpaid | InvoiceStatus::Overdue)
    }
}

/// Sum of outstanding invoices in minor units, per currency of the first invoice
pub fn outstanding_total(invoices: &[Invoice]) -> u64 {
    invoices
        .iter()
        .filter(|i| i.is_outstanding())
        .map(|i| i.amount_cents)
        .sum()
}

/// Format minor units as a money string, e.g. `USD 12.99`
pub fn format_money(amount_cents: u64, currency: &str) -> String {
    format!("{currency} {}.{:02}", amount_cents / 100, amount_cents % 100)
}

/// Payment method details (already masked by the backend)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum PaymentDetails {
    #[serde(rename_all = "camelCase")]
    Card {
        brand: String,
        last4: String,
        expiry_month: u8,
        expiry_year: u16,
    },
    #[serde(rename_all = "camelCase")]
    BankAccount { bank_name: String, last4: String },
    #[serde(rename = "paypal")]
    PayPal { email: String },
}

/// Stored payment method
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentMethod {
    pub id: String,
    pub details: PaymentDetails,
    pub is_default: bool,
}

impl PaymentMethod {
    pub fn masked_label(&self) -> String {
        match &self.details {
            PaymentDetails::Card {
                brand,
                last4,
                expiry_month,
                expiry_year,
            } => format!("{brand} •••• {last4} (exp {expiry_month:02}/{expiry_year})"),
            PaymentDetails::BankAccount { bank_name, last4 } => {
                format!("{bank_name} •••• {last4}")
            }
            PaymentDetails::PayPal { email } => format!("PayPal ({email})"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn invoice(status: InvoiceStatus, amount_cents: u64) -> Invoice {
        let date = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
        Invoice {
            id: "inv_1".to_string(),
            number: "INV-0001".to_string(),
            amount_cents,
            currency: "USD".to_string(),
            status,
            issue_date: date,
            due_date: date,
            paid_date: None,
            services: vec!["example.com".to_string()],
        }
    }

    #[test]
    fn outstanding_total_ignores_paid_and_cancelled() {
        let invoices = vec![
            invoice(InvoiceStatus::Paid, 1000),
            invoice(InvoiceStatus::Unpaid, 1299),
            invoice(InvoiceStatus::Overdue, 500),
            invoice(InvoiceStatus::Cancelled, 9999),
        ];
        assert_eq!(outstanding_total(&invoices), 1799);
    }

    #[test]
    fn money_formatting() {
        assert_eq!(format_money(1299, "USD"), "USD 12.99");
        assert_eq!(format_money(5, "EUR"), "EUR 0.05");
    }

    #[test]
    fn masked_labels() {
        let card = PaymentMethod {
            id: "pm_1".to_string(),
            details: PaymentDetails::Card {
                brand: "Visa".to_string(),
                last4: "4242".to_string(),
                expiry_month: 4,
                expiry_year: 2028,
            },
            is_default: true,
        };
        assert_eq!(card.masked_label(), "Visa •••• 4242 (exp 04/2028)");
    }
}
