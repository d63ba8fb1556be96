//! Type definition module

mod billing;
mod dns;
mod notification;
mod response;
mod service;
mod ticket;
mod user;

pub use billing::{
    format_money, outstanding_total, Invoice, InvoiceStatus, PaymentDetails, PaymentMethod,
};
pub use dns::{DnsRecord, DnsRecordType};
pub use notification::{count_unread, Notification, NotificationType};
pub use response::ApiResponse;
pub use service::{DomainDetails, Service, ServiceStatus, ServiceType, EXPIRY_WARNING_DAYS};
pub use ticket::{
    NewTicket, SupportTicket, TicketCategory, TicketMessage, TicketPriority, TicketStatus,
};
pub use user::{Address, Credentials, ProfileUpdate, User};
