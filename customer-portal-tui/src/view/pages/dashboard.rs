//! 概览页面视图

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::i18n::t;
use crate::model::App;
use crate::util::truncate_to_width;
use crate::view::components::card::{self, Card};
use crate::view::components::icon::{self, Tone};
use crate::view::theme::{colors, Styles};

/// 最近通知显示条数
const RECENT_NOTIFICATIONS: usize = 5;

/// 渲染概览页面
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    // 欢迎 + 统计卡片 + 两列详情
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // 欢迎区域
            Constraint::Length(4), // 统计卡片
            Constraint::Min(1),    // 到期 / 通知
        ])
        .split(area);

    render_welcome(app, frame, layout[0]);
    render_stats(app, frame, layout[1]);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(layout[2]);

    render_expiring(app, frame, columns[0]);
    render_notifications(app, frame, columns[1]);
}

fn render_welcome(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let c = colors();
    let state = app.store.state();

    let name = state
        .user
        .as_ref()
        .map(|u| u.first_name.clone())
        .unwrap_or_default();

    let mut lines = vec![Line::from(Span::styled(
        format!("  {}, {name}", texts.dashboard.welcome),
        Style::default().fg(c.highlight).add_modifier(Modifier::BOLD),
    ))];

    if let Some(ref error) = state.error {
        lines.push(Line::from(vec![
            Span::styled(format!("  ⚠ {error} "), Style::default().fg(c.error)),
            Span::styled(texts.common.retry_hint, Styles::muted()),
        ]));
    } else if state.loading {
        lines.push(Line::styled(
            format!("  {}", texts.common.loading),
            Styles::muted(),
        ));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

fn render_stats(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let state = app.store.state();
    let today = app.today();

    let cells = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 4); 4])
        .split(area);

    card::stat(
        frame,
        cells[0],
        texts.dashboard.active_services,
        state.active_services().count(),
        Tone::Success,
    );
    card::stat(
        frame,
        cells[1],
        texts.dashboard.expiring_soon,
        state.expiring_services(today).len(),
        Tone::Warning,
    );
    card::stat(
        frame,
        cells[2],
        texts.dashboard.open_tickets,
        state.open_tickets().count(),
        Tone::Info,
    );
    card::stat(
        frame,
        cells[3],
        texts.dashboard.unread_notifications,
        state.unread_count,
        Tone::Warning,
    );
}

/// 30 天内到期的服务
fn render_expiring(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let today = app.today();
    let expiring = app.store.state().expiring_services(today);
    let width = usize::from(area.width.saturating_sub(20));

    let lines: Vec<Line> = if expiring.is_empty() {
        vec![Line::styled(
            format!("  {}", texts.dashboard.nothing_expiring),
            Styles::muted(),
        )]
    } else {
        expiring
            .iter()
            .map(|service| {
                let days = service.days_until_expiry(today);
                Line::from(vec![
                    Span::raw("  "),
                    icon::service_type(service.service_type).span(),
                    Span::raw(" "),
                    Span::styled(
                        truncate_to_width(&service.name, width),
                        Style::default().fg(colors().fg),
                    ),
                    Span::styled(
                        format!("  {days} {}", texts.dashboard.days_left),
                        icon::expiry_tone(days, true).style(),
                    ),
                ])
            })
            .collect()
    };

    let card = Card::new(texts.dashboard.expiring_title).lines(lines);
    let card = if expiring.is_empty() {
        card
    } else {
        card.accent(Tone::Warning)
    };
    card.render(frame, area);
}

/// 最近的通知（未读加粗）
fn render_notifications(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let c = colors();
    let notifications = &app.store.state().notifications;
    let width = usize::from(area.width.saturating_sub(8));

    let lines: Vec<Line> = if notifications.is_empty() {
        vec![Line::styled(
            format!("  {}", texts.dashboard.no_notifications),
            Styles::muted(),
        )]
    } else {
        notifications
            .iter()
            .take(RECENT_NOTIFICATIONS)
            .map(|n| {
                let style = if n.read {
                    Styles::muted()
                } else {
                    Style::default().fg(c.fg).add_modifier(Modifier::BOLD)
                };
                Line::from(vec![
                    Span::raw("  "),
                    icon::notification(n.notification_type).span(),
                    Span::raw(" "),
                    Span::styled(truncate_to_width(&n.title, width), style),
                ])
            })
            .collect()
    };

    Card::new(texts.dashboard.recent_title)
        .lines(lines)
        .render(frame, area);
}
