//! 工单列表页面视图

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::i18n::t;
use crate::model::App;
use crate::util::pad_to_width;
use crate::view::components::icon;
use crate::view::theme::{colors, Styles};

const SUBJECT_WIDTH: usize = 32;
const CATEGORY_WIDTH: usize = 11;
const STATUS_WIDTH: usize = 14;
const PRIORITY_WIDTH: usize = 10;

/// 渲染工单列表页面
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let state = app.store.state();
    if state.tickets.is_empty() {
        let texts = t();
        let message = if state.loading {
            texts.common.loading
        } else {
            texts.support.no_tickets
        };
        let content = vec![
            Line::from(""),
            Line::styled(format!("  {message}"), Styles::muted()),
        ];
        frame.render_widget(Paragraph::new(content), area);
        return;
    }

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(1)])
        .split(area);

    render_header(frame, layout[0]);
    render_list(app, frame, layout[1]);
}

fn render_header(frame: &mut Frame, area: Rect) {
    let texts = &t().support;
    let header = format!(
        "    {}{}{}{}{}",
        pad_to_width(texts.col_subject, SUBJECT_WIDTH),
        pad_to_width(texts.col_category, CATEGORY_WIDTH),
        pad_to_width(texts.col_status, STATUS_WIDTH),
        pad_to_width(texts.col_priority, PRIORITY_WIDTH),
        texts.col_updated,
    );
    frame.render_widget(Paragraph::new(Line::styled(header, Styles::header())), area);
}

fn render_list(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let selected = app.support.selected;

    let items: Vec<ListItem> = app
        .store
        .state()
        .tickets
        .iter()
        .enumerate()
        .map(|(i, ticket)| {
            let is_selected = i == selected;
            let base = if is_selected {
                Styles::selected()
            } else {
                Style::default().fg(c.fg)
            };
            let dim = if is_selected { base } else { Styles::muted() };

            let line = Line::from(vec![
                Span::styled(if is_selected { "▶ " } else { "  " }, base),
                icon::ticket_status(ticket.status).span(),
                Span::styled(" ", base),
                Span::styled(pad_to_width(&ticket.subject, SUBJECT_WIDTH), base),
                Span::styled(
                    pad_to_width(ticket.category.display_name(), CATEGORY_WIDTH),
                    dim,
                ),
                Span::styled(
                    pad_to_width(ticket.status.display_name(), STATUS_WIDTH),
                    base,
                ),
                icon::ticket_priority(ticket.priority).span(),
                Span::styled(
                    format!(
                        " {}",
                        pad_to_width(ticket.priority.display_name(), PRIORITY_WIDTH - 2)
                    ),
                    base,
                ),
                Span::styled(ticket.updated_at.format("%Y-%m-%d").to_string(), dim),
            ]);

            ListItem::new(line)
        })
        .collect();

    let list = List::new(items).highlight_style(Style::default());

    let mut state = ListState::default();
    state.select(Some(selected));

    frame.render_stateful_widget(list, area, &mut state);
}
