//! Canned data served by the mock backend
//!
//! Dates are generated relative to "now" so the dashboard always has
//! something expiring soon and something overdue.

use chrono::{DateTime, Days, Duration, NaiveDate, Utc};

use crate::types::{
    Address, DnsRecord, DnsRecordType, DomainDetails, Invoice, InvoiceStatus, Notification,
    NotificationType, PaymentDetails, PaymentMethod, Service, ServiceStatus, ServiceType,
    SupportTicket, TicketCategory, TicketMessage, TicketPriority, TicketStatus, User,
};

/// Full mock dataset
#[derive(Debug, Clone)]
pub struct SeedData {
    pub user: User,
    pub services: Vec<Service>,
    pub tickets: Vec<SupportTicket>,
    pub notifications: Vec<Notification>,
    pub invoices: Vec<Invoice>,
    pub payment_methods: Vec<PaymentMethod>,
}

fn plus_days(date: NaiveDate, days: u64) -> NaiveDate {
    date.checked_add_days(Days::new(days)).unwrap_or(date)
}

fn minus_days(date: NaiveDate, days: u64) -> NaiveDate {
    date.checked_sub_days(Days::new(days)).unwrap_or(date)
}

fn record(
    id: &str,
    record_type: DnsRecordType,
    name: &str,
    value: &str,
    ttl: u32,
    priority: Option<u16>,
) -> DnsRecord {
    DnsRecord {
        id: id.to_string(),
        record_type,
        name: name.to_string(),
        value: value.to_string(),
        ttl,
        priority,
    }
}

impl SeedData {
    pub fn generate(now: DateTime<Utc>) -> Self {
        let today = now.date_naive();

        Self {
            user: seed_user(now),
            services: seed_services(today),
            tickets: seed_tickets(now),
            notifications: seed_notifications(now),
            invoices: seed_invoices(today),
            payment_methods: seed_payment_methods(today),
        }
    }
}

fn seed_user(now: DateTime<Utc>) -> User {
    User {
        id: "usr_1001".to_string(),
        first_name: "John".to_string(),
        last_name: "Doe".to_string(),
        email: "john.doe@example.com".to_string(),
        phone: "+1 (555) 123-4567".to_string(),
        company: Some("Acme Corporation".to_string()),
        addresses: vec![
            Address {
                street: "123 Main Street".to_string(),
                city: "San Francisco".to_string(),
                state: "CA".to_string(),
                postal_code: "94105".to_string(),
                country: "United States".to_string(),
                is_default: true,
            },
            Address {
                street: "456 Market Street, Suite 200".to_string(),
                city: "San Francisco".to_string(),
                state: "CA".to_string(),
                postal_code: "94103".to_string(),
                country: "United States".to_string(),
                is_default: false,
            },
        ],
        two_factor_enabled: false,
        created_at: now - Duration::days(2 * 365),
    }
}

fn seed_services(today: NaiveDate) -> Vec<Service> {
    vec![
        Service {
            id: "svc_1".to_string(),
            name: "example.com".to_string(),
            service_type: ServiceType::Domain,
            status: ServiceStatus::Active,
            registration_date: minus_days(today, 3 * 365),
            expiry_date: plus_days(today, 21),
            auto_renew: true,
            price_cents: 1299,
            currency: "USD".to_string(),
            domain: Some(DomainDetails {
                nameservers: vec![
                    "ns1.portal-dns.net".to_string(),
                    "ns2.portal-dns.net".to_string(),
                ],
                dns_records: vec![
                    record("rec_1", DnsRecordType::A, "@", "192.0.2.10", 3600, None),
                    record("rec_2", DnsRecordType::Aaaa, "@", "2001:db8::10", 3600, None),
                    record("rec_3", DnsRecordType::Cname, "www", "example.com", 3600, None),
                    record("rec_4", DnsRecordType::Mx, "@", "mail.example.com", 3600, Some(10)),
                    record(
                        "rec_5",
                        DnsRecordType::Txt,
                        "@",
                        "v=spf1 include:_spf.portal-mail.net ~all",
                        3600,
                        None,
                    ),
                    record("rec_6", DnsRecordType::Ns, "@", "ns1.portal-dns.net", 86400, None),
                    record("rec_7", DnsRecordType::Ns, "@", "ns2.portal-dns.net", 86400, None),
                ],
                locked: true,
            }),
        },
        Service {
            id: "svc_2".to_string(),
            name: "mybusiness.net".to_string(),
            service_type: ServiceType::Domain,
            status: ServiceStatus::Active,
            registration_date: minus_days(today, 400),
            expiry_date: plus_days(today, 330),
            auto_renew: false,
            price_cents: 1499,
            currency: "USD".to_string(),
            domain: Some(DomainDetails {
                nameservers: vec![
                    "ns1.portal-dns.net".to_string(),
                    "ns2.portal-dns.net".to_string(),
                ],
                dns_records: vec![
                    record("rec_11", DnsRecordType::A, "@", "198.51.100.24", 1800, None),
                    record("rec_12", DnsRecordType::Cname, "shop", "shops.example-commerce.com", 1800, None),
                    record("rec_13", DnsRecordType::Mx, "@", "mx1.portal-mail.net", 3600, Some(10)),
                    record("rec_14", DnsRecordType::Mx, "@", "mx2.portal-mail.net", 3600, Some(20)),
                ],
                locked: false,
            }),
        },
        Service {
            id: "svc_3".to_string(),
            name: "Business Hosting Plan".to_string(),
            service_type: ServiceType::Hosting,
            status: ServiceStatus::Active,
            registration_date: minus_days(today, 200),
            expiry_date: plus_days(today, 165),
            auto_renew: true,
            price_cents: 11988,
            currency: "USD".to_string(),
            domain: None,
        },
        Service {
            id: "svc_4".to_string(),
            name: "Professional Email (5 mailboxes)".to_string(),
            service_type: ServiceType::Email,
            status: ServiceStatus::Active,
            registration_date: minus_days(today, 340),
            expiry_date: plus_days(today, 25),
            auto_renew: false,
            price_cents: 5994,
            currency: "USD".to_string(),
            domain: None,
        },
        Service {
            id: "svc_5".to_string(),
            name: "Wildcard SSL (*.example.com)".to_string(),
            service_type: ServiceType::Ssl,
            status: ServiceStatus::Pending,
            registration_date: minus_days(today, 2),
            expiry_date: plus_days(today, 363),
            auto_renew: true,
            price_cents: 9900,
            currency: "USD".to_string(),
            domain: None,
        },
        Service {
            id: "svc_6".to_string(),
            name: "oldproject.org".to_string(),
            service_type: ServiceType::Domain,
            status: ServiceStatus::Expired,
            registration_date: minus_days(today, 800),
            expiry_date: minus_days(today, 70),
            auto_renew: false,
            price_cents: 1299,
            currency: "USD".to_string(),
            domain: Some(DomainDetails {
                nameservers: vec!["ns1.parked-domains.net".to_string()],
                dns_records: Vec::new(),
                locked: false,
            }),
        },
    ]
}

fn seed_tickets(now: DateTime<Utc>) -> Vec<SupportTicket> {
    let msg = |id: &str, author: &str, from_staff: bool, body: &str, at: DateTime<Utc>| {
        TicketMessage {
            id: id.to_string(),
            author: author.to_string(),
            from_staff,
            body: body.to_string(),
            created_at: at,
        }
    };

    vec![
        SupportTicket {
            id: "tkt_1003".to_string(),
            category: TicketCategory::Technical,
            subject: "Email not receiving messages".to_string(),
            body: "Since yesterday our mailboxes stopped receiving external email.".to_string(),
            status: TicketStatus::InProgress,
            priority: TicketPriority::High,
            created_at: now - Duration::hours(20),
            updated_at: now - Duration::hours(2),
            messages: vec![
                msg(
                    "msg_1",
                    "John Doe",
                    false,
                    "Since yesterday our mailboxes stopped receiving external email.",
                    now - Duration::hours(20),
                ),
                msg(
                    "msg_2",
                    "Sarah (Support)",
                    true,
                    "Thanks John, we are checking the MX configuration for your domain.",
                    now - Duration::hours(2),
                ),
            ],
        },
        SupportTicket {
            id: "tkt_1002".to_string(),
            category: TicketCategory::Billing,
            subject: "Question about last invoice".to_string(),
            body: "I was charged twice for the hosting renewal, can you check?".to_string(),
            status: TicketStatus::Resolved,
            priority: TicketPriority::Medium,
            created_at: now - Duration::days(12),
            updated_at: now - Duration::days(10),
            messages: vec![
                msg(
                    "msg_3",
                    "John Doe",
                    false,
                    "I was charged twice for the hosting renewal, can you check?",
                    now - Duration::days(12),
                ),
                msg(
                    "msg_4",
                    "Mike (Billing)",
                    true,
                    "The duplicate charge has been refunded. It should appear in 3-5 days.",
                    now - Duration::days(10),
                ),
            ],
        },
        SupportTicket {
            id: "tkt_1001".to_string(),
            category: TicketCategory::Sales,
            subject: "Upgrade hosting plan".to_string(),
            body: "What are the options to upgrade to a plan with more storage?".to_string(),
            status: TicketStatus::Closed,
            priority: TicketPriority::Low,
            created_at: now - Duration::days(40),
            updated_at: now - Duration::days(38),
            messages: vec![msg(
                "msg_5",
                "John Doe",
                false,
                "What are the options to upgrade to a plan with more storage?",
                now - Duration::days(40),
            )],
        },
    ]
}

fn seed_notifications(now: DateTime<Utc>) -> Vec<Notification> {
    vec![
        Notification {
            id: "ntf_1".to_string(),
            notification_type: NotificationType::Warning,
            title: "Domain expiring soon".to_string(),
            message: "example.com expires in 21 days.".to_string(),
            read: false,
            timestamp: now - Duration::hours(1),
            link: Some("/domains".to_string()),
        },
        Notification {
            id: "ntf_2".to_string(),
            notification_type: NotificationType::Info,
            title: "Support ticket updated".to_string(),
            message: "Sarah replied to \"Email not receiving messages\".".to_string(),
            read: false,
            timestamp: now - Duration::hours(2),
            link: Some("/support".to_string()),
        },
        Notification {
            id: "ntf_3".to_string(),
            notification_type: NotificationType::Error,
            title: "Invoice overdue".to_string(),
            message: "Invoice INV-2026-0042 is past due.".to_string(),
            read: false,
            timestamp: now - Duration::days(1),
            link: Some("/billing".to_string()),
        },
        Notification {
            id: "ntf_4".to_string(),
            notification_type: NotificationType::Success,
            title: "Payment received".to_string(),
            message: "Thank you, your payment of USD 119.88 was received.".to_string(),
            read: true,
            timestamp: now - Duration::days(9),
            link: None,
        },
    ]
}

fn seed_invoices(today: NaiveDate) -> Vec<Invoice> {
    vec![
        Invoice {
            id: "inv_4".to_string(),
            number: "INV-2026-0051".to_string(),
            amount_cents: 1299,
            currency: "USD".to_string(),
            status: InvoiceStatus::Unpaid,
            issue_date: minus_days(today, 3),
            due_date: plus_days(today, 11),
            paid_date: None,
            services: vec!["example.com".to_string()],
        },
        Invoice {
            id: "inv_3".to_string(),
            number: "INV-2026-0042".to_string(),
            amount_cents: 5994,
            currency: "USD".to_string(),
            status: InvoiceStatus::Overdue,
            issue_date: minus_days(today, 35),
            due_date: minus_days(today, 5),
            paid_date: None,
            services: vec!["Professional Email (5 mailboxes)".to_string()],
        },
        Invoice {
            id: "inv_2".to_string(),
            number: "INV-2026-0017".to_string(),
            amount_cents: 11988,
            currency: "USD".to_string(),
            status: InvoiceStatus::Paid,
            issue_date: minus_days(today, 200),
            due_date: minus_days(today, 186),
            paid_date: Some(minus_days(today, 190)),
            services: vec!["Business Hosting Plan".to_string()],
        },
        Invoice {
            id: "inv_1".to_string(),
            number: "INV-2025-0203".to_string(),
            amount_cents: 2798,
            currency: "USD".to_string(),
            status: InvoiceStatus::Paid,
            issue_date: minus_days(today, 400),
            due_date: minus_days(today, 386),
            paid_date: Some(minus_days(today, 399)),
            services: vec!["mybusiness.net".to_string(), "oldproject.org".to_string()],
        },
    ]
}

fn seed_payment_methods(today: NaiveDate) -> Vec<PaymentMethod> {
    let card_year = u16::try_from(chrono::Datelike::year(&today) + 2).unwrap_or(2030);
    vec![
        PaymentMethod {
            id: "pm_1".to_string(),
            details: PaymentDetails::Card {
                brand: "Visa".to_string(),
                last4: "4242".to_string(),
                expiry_month: 8,
                expiry_year: card_year,
            },
            is_default: true,
        },
        PaymentMethod {
            id: "pm_2".to_string(),
            details: PaymentDetails::BankAccount {
                bank_name: "First National Bank".to_string(),
                last4: "6789".to_string(),
            },
            is_default: false,
        },
        PaymentMethod {
            id: "pm_3".to_string(),
            details: PaymentDetails::PayPal {
                email: "j***@example.com".to_string(),
            },
            is_default: false,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::count_unread;

    #[test]
    fn seed_has_unique_ids_and_a_domain_expiring_soon() {
        let now = Utc::now();
        let seed = SeedData::generate(now);

        let mut ids: Vec<&str> = seed.services.iter().map(|s| s.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), seed.services.len());

        assert!(seed
            .services
            .iter()
            .any(|s| s.is_domain() && s.is_expiring_soon(now.date_naive())));
        assert_eq!(count_unread(&seed.notifications), 3);
    }

    #[test]
    fn tickets_are_newest_first() {
        let seed = SeedData::generate(Utc::now());
        assert!(seed
            .tickets
            .windows(2)
            .all(|w| w[0].created_at >= w[1].created_at));
    }
}
