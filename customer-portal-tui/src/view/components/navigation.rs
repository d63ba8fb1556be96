//! 左侧导航面板组件
//!
//! 上半部分是路由链接，底部固定显示当前用户、未读通知徽章和用户菜单入口。

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::i18n::t;
use crate::model::App;
use crate::util::truncate_to_width;
use crate::view::theme::{colors, Styles};

/// 底部用户区域高度
const FOOTER_HEIGHT: u16 = 3;

/// 渲染导航面板
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let is_focused = app.focus.is_navigation();

    let block = Block::default()
        .title(format!(" {} ", texts.nav.title))
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(Styles::border(is_focused));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(FOOTER_HEIGHT)])
        .split(inner);

    render_links(app, frame, chunks[0]);
    render_footer(app, frame, chunks[1]);
}

/// 路由链接
fn render_links(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let active_route = app.current_page.route();

    let items: Vec<ListItem> = app
        .navigation
        .items
        .iter()
        .enumerate()
        .map(|(i, nav_item)| {
            let is_selected = i == app.navigation.selected;
            let prefix = if is_selected { "▶ " } else { "  " };
            let content = format!("{}{} {}", prefix, nav_item.icon, nav_item.label());

            let style = if is_selected {
                Styles::selected()
            } else if nav_item.route == active_route {
                Style::default().fg(c.highlight)
            } else {
                Style::default().fg(c.fg)
            };

            ListItem::new(Line::from(Span::styled(content, style)))
        })
        .collect();

    let list = List::new(items).highlight_style(Styles::selected());

    let mut state = ListState::default();
    state.select(Some(app.navigation.selected));

    frame.render_stateful_widget(list, area, &mut state);
}

/// 用户信息 + 未读徽章 + 用户菜单提示
fn render_footer(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let c = colors();
    let state = app.store.state();
    let width = usize::from(area.width.saturating_sub(1));

    let name = state
        .user
        .as_ref()
        .map(|user| format!("{} {}", user.initials(), user.full_name()))
        .unwrap_or_default();

    let badge = if state.unread_count > 0 {
        Span::styled(
            format!(" {} {} ", state.unread_count, texts.nav.unread),
            Style::default()
                .fg(c.bg)
                .bg(c.warning)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        Span::styled(format!("0 {}", texts.nav.unread), Styles::muted())
    };

    let lines = vec![
        Line::styled(
            truncate_to_width(&name, width),
            Style::default().fg(c.fg).add_modifier(Modifier::BOLD),
        ),
        Line::from(vec![Span::styled("✉ ", Styles::muted()), badge]),
        Line::styled(
            truncate_to_width(texts.nav.account_menu, width),
            Styles::hint_desc(),
        ),
    ];

    frame.render_widget(Paragraph::new(lines), area);
}
