//! Support ticket types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Ticket category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TicketCategory {
    Technical,
    Billing,
    Account,
    Sales,
    Other,
}

impl TicketCategory {
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Technical => "Technical",
            Self::Billing => "Billing",
            Self::Account => "Account",
            Self::Sales => "Sales",
            Self::Other => "Other",
        }
    }

    pub fn all() -> &'static [TicketCategory] {
        &[
            Self::Technical,
            Self::Billing,
            Self::Account,
            Self::Sales,
            Self::Other,
        ]
    }
}

/// Ticket status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TicketStatus {
    Open,
    InProgress,
    Waiting,
    Resolved,
    Closed,
}

impl TicketStatus {
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Open => "Open",
            Self::InProgress => "In Progress",
            Self::Waiting => "Awaiting Reply",
            Self::Resolved => "Resolved",
            Self::Closed => "Closed",
        }
    }

    /// Still needs attention from someone
    pub fn is_open(self) -> bool {
        matches!(self, Self::Open | Self::InProgress | Self::Waiting)
    }
}

/// Ticket priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TicketPriority {
    Low,
    Medium,
    High,
    Urgent,
}

impl TicketPriority {
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::Urgent => "Urgent",
        }
    }

    pub fn all() -> &'static [TicketPriority] {
        &[Self::Low, Self::Medium, Self::High, Self::Urgent]
    }
}

/// One message in a ticket thread
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketMessage {
    pub id: String,
    pub author: String,
    pub from_staff: bool,
    pub body: String,
    pub created_at: DateTime<Utc>,
}

/// Support ticket
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupportTicket {
    pub id: String,
    pub category: TicketCategory,
    pub subject: String,
    pub body: String,
    pub status: TicketStatus,
    pub priority: TicketPriority,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Thread in chronological order
    pub messages: Vec<TicketMessage>,
}

impl SupportTicket {
    pub fn last_message(&self) -> Option<&TicketMessage> {
        self.messages.last()
    }
}

/// Create ticket request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTicket {
    pub category: TicketCategory,
    pub subject: String,
    pub body: String,
    pub priority: TicketPriority,
}
