//! 主布局渲染

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::i18n::t;
use crate::model::{App, Page};

use super::components;
use super::pages;
use super::theme::{colors, Styles};

/// 渲染主布局
pub fn render(app: &App, frame: &mut Frame) {
    let size = frame.area();
    let c = colors();
    frame.render_widget(Block::default().style(Style::default().bg(c.bg)), size);

    // 三层布局：标题栏 + 主内容区 + 状态栏
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // 标题栏
            Constraint::Min(1),    // 主内容区
            Constraint::Length(1), // 状态栏
        ])
        .split(size);

    let title_area = main_layout[0];
    let content_area = main_layout[1];
    let status_area = main_layout[2];

    render_title_bar(app, frame, title_area);

    if app.current_page == Page::Login {
        // 登录页没有导航栏
        pages::login::render(app, frame, content_area);
    } else {
        // 左右分栏布局
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(20), // 左侧导航
                Constraint::Percentage(80), // 右侧内容
            ])
            .split(content_area);

        components::navigation::render(app, frame, columns[0]);
        render_page_content(app, frame, columns[1]);
    }

    components::statusbar::render(app, frame, status_area);

    // 弹窗在最上层
    components::modal::render(app, frame);
}

/// 渲染标题栏（右侧显示未读通知数）
fn render_title_bar(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let c = colors();
    let bar = Style::default().bg(c.highlight).fg(c.selected_fg);

    let mut spans = vec![Span::styled(
        format!(" {} v{}", texts.common.app_name, env!("CARGO_PKG_VERSION")),
        bar.add_modifier(Modifier::BOLD),
    )];
    let unread = app.store.state().unread_count;
    if app.is_authenticated() && unread > 0 {
        spans.push(Span::styled(
            format!("  ✉ {unread} {}", texts.nav.unread),
            bar,
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)).style(bar), area);
}

/// 根据当前页面渲染内容
fn render_page_content(app: &App, frame: &mut Frame, area: Rect) {
    let page_title = app.current_page.title();
    let title = match &app.current_page {
        Page::DnsRecords { domain_name, .. } => format!(" {page_title} · {domain_name} "),
        Page::TicketDetail { ticket_id } => format!(" {page_title} #{ticket_id} "),
        _ => format!(" {page_title} "),
    };

    let block = Block::default()
        .title(title)
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(Styles::border(app.focus.is_content()));

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    match &app.current_page {
        Page::Login => pages::login::render(app, frame, inner_area),
        Page::Dashboard => pages::dashboard::render(app, frame, inner_area),
        Page::Services => pages::services::render(app, frame, inner_area),
        Page::Domains => pages::domains::render(app, frame, inner_area),
        Page::DnsRecords { .. } => pages::dns_records::render(app, frame, inner_area),
        Page::Support => pages::support::render(app, frame, inner_area),
        Page::TicketDetail { .. } => pages::ticket_detail::render(app, frame, inner_area),
        Page::Billing => pages::billing::render(app, frame, inner_area),
        Page::Profile => pages::profile::render(app, frame, inner_area),
    }
}
