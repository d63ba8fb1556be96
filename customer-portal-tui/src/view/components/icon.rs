//! 图标组件：把业务状态映射成字形和颜色

use customer_portal_core::types::{
    InvoiceStatus, NotificationType, ServiceStatus, ServiceType, TicketPriority, TicketStatus,
};
use ratatui::{style::Style, text::Span};

use crate::view::theme::colors;

/// 一个带颜色的字形
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Icon {
    pub glyph: &'static str,
    pub tone: Tone,
}

/// 语义色调，渲染时再对应到当前主题的颜色
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Normal,
    Success,
    Warning,
    Error,
    Info,
    Muted,
}

impl Tone {
    pub fn style(self) -> Style {
        let c = colors();
        let fg = match self {
            Tone::Normal => c.fg,
            Tone::Success => c.success,
            Tone::Warning => c.warning,
            Tone::Error => c.error,
            Tone::Info => c.info,
            Tone::Muted => c.muted,
        };
        Style::default().fg(fg)
    }
}

impl Icon {
    const fn new(glyph: &'static str, tone: Tone) -> Self {
        Self { glyph, tone }
    }

    pub fn span(self) -> Span<'static> {
        Span::styled(self.glyph, self.tone.style())
    }
}

pub fn service_type(service_type: ServiceType) -> Icon {
    match service_type {
        ServiceType::Domain => Icon::new("◉", Tone::Info),
        ServiceType::Hosting => Icon::new("▣", Tone::Info),
        ServiceType::Email => Icon::new("✉", Tone::Info),
        ServiceType::Ssl => Icon::new("⚿", Tone::Info),
        ServiceType::Other => Icon::new("◇", Tone::Muted),
    }
}

pub fn service_status(status: ServiceStatus) -> Icon {
    match status {
        ServiceStatus::Active => Icon::new("●", Tone::Success),
        ServiceStatus::Pending => Icon::new("○", Tone::Warning),
        ServiceStatus::Suspended => Icon::new("◐", Tone::Error),
        ServiceStatus::Expired => Icon::new("✕", Tone::Error),
        ServiceStatus::Cancelled => Icon::new("○", Tone::Muted),
    }
}

pub fn ticket_status(status: TicketStatus) -> Icon {
    match status {
        TicketStatus::Open => Icon::new("●", Tone::Info),
        TicketStatus::InProgress => Icon::new("◐", Tone::Warning),
        TicketStatus::Waiting => Icon::new("◌", Tone::Warning),
        TicketStatus::Resolved => Icon::new("✓", Tone::Success),
        TicketStatus::Closed => Icon::new("○", Tone::Muted),
    }
}

pub fn ticket_priority(priority: TicketPriority) -> Icon {
    match priority {
        TicketPriority::Low => Icon::new("▁", Tone::Muted),
        TicketPriority::Medium => Icon::new("▃", Tone::Info),
        TicketPriority::High => Icon::new("▅", Tone::Warning),
        TicketPriority::Urgent => Icon::new("█", Tone::Error),
    }
}

pub fn invoice_status(status: InvoiceStatus) -> Icon {
    match status {
        InvoiceStatus::Paid => Icon::new("✓", Tone::Success),
        InvoiceStatus::Unpaid => Icon::new("○", Tone::Warning),
        InvoiceStatus::Overdue => Icon::new("!", Tone::Error),
        InvoiceStatus::Cancelled => Icon::new("✕", Tone::Muted),
    }
}

pub fn notification(notification_type: NotificationType) -> Icon {
    match notification_type {
        NotificationType::Info => Icon::new("ℹ", Tone::Info),
        NotificationType::Success => Icon::new("✓", Tone::Success),
        NotificationType::Warning => Icon::new("⚠", Tone::Warning),
        NotificationType::Error => Icon::new("✕", Tone::Error),
    }
}

/// 到期剩余天数的色调：已过期红色，临近到期黄色
pub fn expiry_tone(days_left: i64, expiring_soon: bool) -> Tone {
    if days_left < 0 {
        Tone::Error
    } else if expiring_soon {
        Tone::Warning
    } else {
        Tone::Normal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failing_states_use_error_tone() {
        assert_eq!(service_status(ServiceStatus::Expired).tone, Tone::Error);
        assert_eq!(invoice_status(InvoiceStatus::Overdue).tone, Tone::Error);
        assert_eq!(ticket_priority(TicketPriority::Urgent).tone, Tone::Error);
    }

    #[test]
    fn expiry_tone_thresholds() {
        assert_eq!(expiry_tone(-1, true), Tone::Error);
        assert_eq!(expiry_tone(10, true), Tone::Warning);
        assert_eq!(expiry_tone(200, false), Tone::Normal);
    }
}
