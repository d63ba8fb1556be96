//! DNS 记录页面视图

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::i18n::t;
use crate::model::{App, Page};
use crate::util::{pad_to_width, truncate_to_width};
use crate::view::theme::{colors, Styles};

const TYPE_WIDTH: usize = 7;
const NAME_WIDTH: usize = 18;
const TTL_WIDTH: usize = 7;
const PRIORITY_WIDTH: usize = 9;

/// 渲染 DNS 记录页面
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // 名称服务器
            Constraint::Length(1), // 表头
            Constraint::Min(1),    // 记录
            Constraint::Length(1), // 选中记录的完整名称
        ])
        .split(area);

    render_nameservers(app, frame, layout[0]);

    let resource = &app.dns_records.records;
    if let Some(ref error) = resource.error {
        render_message(frame, layout[2], error, true);
    } else if resource.loading && !resource.is_loaded() {
        render_message(frame, layout[2], t().common.loading, false);
    } else if app.dns_records.is_empty() {
        render_message(frame, layout[2], t().dns_records.no_records, false);
    } else {
        render_header(frame, layout[1]);
        render_list(app, frame, layout[2]);
        render_selected(app, frame, layout[3]);
    }
}

/// 选中记录的完整域名
fn render_selected(app: &App, frame: &mut Frame, area: Rect) {
    let (Page::DnsRecords { domain_name, .. }, Some(record)) =
        (&app.current_page, app.dns_records.selected_record())
    else {
        return;
    };

    let line = Line::from(vec![
        Span::styled("  → ", Styles::muted()),
        Span::styled(record.fqdn(domain_name), Style::default().fg(colors().info)),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

/// 域名的名称服务器（来自 Store 中的服务信息）
fn render_nameservers(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let Page::DnsRecords { ref domain_id, .. } = app.current_page else {
        return;
    };

    let nameservers = app
        .store
        .state()
        .service(domain_id)
        .and_then(|s| s.domain.as_ref())
        .map(|d| d.nameservers.join(", "))
        .unwrap_or_default();

    let line = Line::from(vec![
        Span::styled(format!("  {}: ", texts.dns_records.nameservers), Styles::muted()),
        Span::styled(nameservers, Style::default().fg(colors().fg)),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn render_message(frame: &mut Frame, area: Rect, message: &str, is_error: bool) {
    let texts = t();
    let c = colors();
    let mut content = vec![Line::from("")];
    if is_error {
        content.push(Line::styled(
            format!("  ⚠ {message}"),
            Style::default().fg(c.error),
        ));
        content.push(Line::styled(
            format!("  {}", texts.common.retry_hint),
            Styles::muted(),
        ));
    } else {
        content.push(Line::styled(format!("  {message}"), Styles::muted()));
    }
    frame.render_widget(Paragraph::new(content), area);
}

fn render_header(frame: &mut Frame, area: Rect) {
    let texts = &t().dns_records;
    let header = format!(
        "  {}{}{}{}{}",
        pad_to_width(texts.col_type, TYPE_WIDTH),
        pad_to_width(texts.col_name, NAME_WIDTH),
        pad_to_width(texts.col_ttl, TTL_WIDTH),
        pad_to_width(texts.col_priority, PRIORITY_WIDTH),
        texts.col_value,
    );
    frame.render_widget(Paragraph::new(Line::styled(header, Styles::header())), area);
}

/// 渲染 DNS 记录列表
fn render_list(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let selected = app.dns_records.selection.selected;
    let value_width = usize::from(area.width)
        .saturating_sub(2 + TYPE_WIDTH + NAME_WIDTH + TTL_WIDTH + PRIORITY_WIDTH);
    let records = app.dns_records.records.data.as_deref().unwrap_or_default();

    let items: Vec<ListItem> = records
        .iter()
        .enumerate()
        .map(|(i, record)| {
            let is_selected = i == selected;
            let style = if is_selected {
                Styles::selected()
            } else {
                Style::default().fg(c.fg)
            };
            let type_style = if is_selected {
                style
            } else {
                Style::default().fg(c.key).add_modifier(Modifier::BOLD)
            };
            let value_style = if is_selected { style } else { Styles::muted() };
            let priority = record.priority.map(|p| p.to_string()).unwrap_or_default();

            let line = Line::from(vec![
                Span::styled(if is_selected { "▶ " } else { "  " }, style),
                Span::styled(pad_to_width(record.record_type.name(), TYPE_WIDTH), type_style),
                Span::styled(pad_to_width(&record.name, NAME_WIDTH), style),
                Span::styled(pad_to_width(&record.ttl.to_string(), TTL_WIDTH), style),
                Span::styled(pad_to_width(&priority, PRIORITY_WIDTH), style),
                Span::styled(truncate_to_width(&record.value, value_width), value_style),
            ]);

            ListItem::new(line)
        })
        .collect();

    let list = List::new(items).highlight_style(Style::default());

    let mut state = ListState::default();
    state.select(Some(selected));

    frame.render_stateful_widget(list, area, &mut state);
}
