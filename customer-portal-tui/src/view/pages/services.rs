//! 服务列表页面视图

use customer_portal_core::types::format_money;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::i18n::t;
use crate::model::state::ServiceFilter;
use crate::model::App;
use crate::util::pad_to_width;
use crate::view::components::icon;
use crate::view::theme::{colors, Styles};

const NAME_WIDTH: usize = 22;
const TYPE_WIDTH: usize = 9;
const STATUS_WIDTH: usize = 11;
const EXPIRY_WIDTH: usize = 12;
const RENEW_WIDTH: usize = 11;

/// 渲染服务列表页面
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // 筛选
            Constraint::Length(1), // 表头
            Constraint::Min(1),    // 列表
        ])
        .split(area);

    render_filters(app, frame, layout[0]);
    render_header(frame, layout[1]);

    let state = app.store.state();
    let visible = app.services.visible(&state.services, app.today());
    if visible.is_empty() {
        let texts = t();
        let message = if state.loading {
            texts.common.loading
        } else {
            texts.services.no_services
        };
        let paragraph = Paragraph::new(Line::styled(format!("  {message}"), Styles::muted()));
        frame.render_widget(paragraph, layout[2]);
    } else {
        render_list(app, frame, layout[2]);
    }
}

/// 筛选标签（←→ 切换）
fn render_filters(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let c = colors();

    let mut spans = vec![Span::styled(
        format!("  {}: ", texts.services.filter_label),
        Styles::muted(),
    )];
    for filter in ServiceFilter::all() {
        let style = if *filter == app.services.filter {
            Style::default()
                .fg(c.bg)
                .bg(c.highlight)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(c.fg)
        };
        spans.push(Span::styled(format!(" {} ", filter.label()), style));
        spans.push(Span::raw(" "));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_header(frame: &mut Frame, area: Rect) {
    let texts = &t().services;
    let header = format!(
        "    {}{}{}{}{}{}",
        pad_to_width(texts.col_name, NAME_WIDTH),
        pad_to_width(texts.col_type, TYPE_WIDTH),
        pad_to_width(texts.col_status, STATUS_WIDTH),
        pad_to_width(texts.col_expiry, EXPIRY_WIDTH),
        pad_to_width(texts.col_auto_renew, RENEW_WIDTH),
        texts.col_price,
    );
    frame.render_widget(Paragraph::new(Line::styled(header, Styles::header())), area);
}

fn render_list(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let c = colors();
    let today = app.today();
    let services = app.services.visible(&app.store.state().services, today);
    let selected = app.services.selection.selected;

    let items: Vec<ListItem> = services
        .iter()
        .enumerate()
        .map(|(i, service)| {
            let is_selected = i == selected;
            let base = if is_selected {
                Styles::selected()
            } else {
                Style::default().fg(c.fg)
            };
            let status = icon::service_status(service.status);
            let days = service.days_until_expiry(today);
            let expiry_style = if is_selected {
                base
            } else {
                icon::expiry_tone(days, service.is_expiring_soon(today)).style()
            };
            let renew = if service.auto_renew {
                texts.common.on
            } else {
                texts.common.off
            };

            let line = Line::from(vec![
                Span::styled(if is_selected { "▶ " } else { "  " }, base),
                icon::service_type(service.service_type).span(),
                Span::styled(" ", base),
                Span::styled(pad_to_width(&service.name, NAME_WIDTH), base),
                Span::styled(
                    pad_to_width(service.service_type.display_name(), TYPE_WIDTH),
                    base,
                ),
                status.span(),
                Span::styled(
                    format!(
                        " {}",
                        pad_to_width(service.status.display_name(), STATUS_WIDTH - 2)
                    ),
                    base,
                ),
                Span::styled(
                    pad_to_width(&service.expiry_date.to_string(), EXPIRY_WIDTH),
                    expiry_style,
                ),
                Span::styled(pad_to_width(renew, RENEW_WIDTH), base),
                Span::styled(format_money(service.price_cents, &service.currency), base),
            ]);

            ListItem::new(line)
        })
        .collect();

    let list = List::new(items).highlight_style(Style::default());

    let mut state = ListState::default();
    state.select(Some(selected));

    frame.render_stateful_widget(list, area, &mut state);
}
