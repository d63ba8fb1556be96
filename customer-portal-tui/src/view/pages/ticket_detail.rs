//! 工单详情页面视图

use customer_portal_core::types::SupportTicket;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use crate::i18n::t;
use crate::model::{App, Page};
use crate::view::components::card::Card;
use crate::view::components::icon;
use crate::view::theme::{colors, Styles};

/// 渲染工单详情页面
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let Page::TicketDetail { ref ticket_id } = app.current_page else {
        return;
    };

    let Some(ticket) = app.store.state().ticket(ticket_id) else {
        let texts = t();
        let message = if app.store.state().loading {
            texts.common.loading
        } else {
            texts.common.no_data
        };
        let paragraph = Paragraph::new(Line::styled(format!("  {message}"), Styles::muted()));
        frame.render_widget(paragraph, area);
        return;
    };

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Min(1)])
        .split(area);

    render_summary(ticket, frame, layout[0]);
    render_messages(ticket, frame, layout[1]);
}

/// 主题、状态、分类、优先级和原始描述
fn render_summary(ticket: &SupportTicket, frame: &mut Frame, area: Rect) {
    let texts = t();
    let c = colors();

    let lines = vec![
        Line::styled(
            format!("  {}", ticket.subject),
            Style::default().fg(c.fg).add_modifier(Modifier::BOLD),
        ),
        Line::from(vec![
            Span::raw("  "),
            icon::ticket_status(ticket.status).span(),
            Span::styled(
                format!(" {}   ", ticket.status.display_name()),
                Style::default().fg(c.fg),
            ),
            Span::styled(format!("{}: ", texts.support.col_category), Styles::muted()),
            Span::styled(
                format!("{}   ", ticket.category.display_name()),
                Style::default().fg(c.fg),
            ),
            Span::styled(format!("{}: ", texts.support.col_priority), Styles::muted()),
            icon::ticket_priority(ticket.priority).span(),
            Span::styled(
                format!(" {}", ticket.priority.display_name()),
                Style::default().fg(c.fg),
            ),
        ]),
        Line::styled(
            format!(
                "  #{} · {}",
                ticket.id,
                ticket.created_at.format("%Y-%m-%d %H:%M")
            ),
            Styles::muted(),
        ),
        Line::from(""),
        Line::styled(format!("  {}", ticket.body), Style::default().fg(c.fg)),
    ];

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), area);
}

/// 对话记录（客服消息用信息色标出）
fn render_messages(ticket: &SupportTicket, frame: &mut Frame, area: Rect) {
    let texts = t();
    let c = colors();

    let mut lines = Vec::new();
    if ticket.messages.is_empty() {
        lines.push(Line::styled(
            format!("  {}", texts.support.no_messages),
            Styles::muted(),
        ));
    }

    for message in &ticket.messages {
        let author_style = if message.from_staff {
            Style::default().fg(c.info).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(c.fg).add_modifier(Modifier::BOLD)
        };
        let mut header = vec![Span::styled(format!("  {}", message.author), author_style)];
        if message.from_staff {
            header.push(Span::styled(
                format!(" [{}]", texts.support.staff),
                Style::default().fg(c.info),
            ));
        }
        header.push(Span::styled(
            format!("  {}", message.created_at.format("%Y-%m-%d %H:%M")),
            Styles::muted(),
        ));

        lines.push(Line::from(header));
        lines.push(Line::styled(
            format!("    {}", message.body),
            Style::default().fg(c.fg),
        ));
        lines.push(Line::from(""));
    }

    let title = format!("{} ({})", texts.support.ticket_title, ticket.messages.len());
    Card::new(&title).lines(lines).render(frame, area);
}
