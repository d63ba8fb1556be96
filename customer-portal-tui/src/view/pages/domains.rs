//! 域名列表页面视图

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::i18n::t;
use crate::model::App;
use crate::util::{pad_to_width, truncate_to_width};
use crate::view::components::icon;
use crate::view::theme::{colors, Styles};

const DOMAIN_WIDTH: usize = 24;
const STATUS_WIDTH: usize = 11;
const EXPIRY_WIDTH: usize = 12;
const LOCK_WIDTH: usize = 10;

/// 渲染域名列表页面
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let state = app.store.state();
    if state.domains().next().is_none() {
        render_empty(app, frame, area);
        return;
    }

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(1)])
        .split(area);

    render_header(frame, layout[0]);
    render_list(app, frame, layout[1]);
}

/// 渲染空状态
fn render_empty(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let message = if app.store.state().loading {
        texts.common.loading
    } else {
        texts.domains.no_domains
    };
    let content = vec![
        Line::from(""),
        Line::styled(format!("  {message}"), Styles::muted()),
    ];
    frame.render_widget(Paragraph::new(content), area);
}

fn render_header(frame: &mut Frame, area: Rect) {
    let texts = &t().domains;
    let header = format!(
        "    {}{}{}{}{}",
        pad_to_width(texts.col_domain, DOMAIN_WIDTH),
        pad_to_width(texts.col_status, STATUS_WIDTH),
        pad_to_width(texts.col_expiry, EXPIRY_WIDTH),
        pad_to_width(texts.col_lock, LOCK_WIDTH),
        texts.col_nameservers,
    );
    frame.render_widget(Paragraph::new(Line::styled(header, Styles::header())), area);
}

/// 渲染域名列表
fn render_list(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let c = colors();
    let today = app.today();
    let selected = app.domains.selected;
    let ns_width = usize::from(area.width)
        .saturating_sub(4 + DOMAIN_WIDTH + STATUS_WIDTH + EXPIRY_WIDTH + LOCK_WIDTH);

    let items: Vec<ListItem> = app
        .store
        .state()
        .domains()
        .enumerate()
        .map(|(i, domain)| {
            let is_selected = i == selected;
            let base = if is_selected {
                Styles::selected()
            } else {
                Style::default().fg(c.fg)
            };
            let dim = if is_selected { base } else { Styles::muted() };

            let details = domain.domain.as_ref();
            let (lock, lock_color) = if details.is_some_and(|d| d.locked) {
                (texts.domains.locked, c.success)
            } else {
                (texts.domains.unlocked, c.warning)
            };
            let nameservers = details
                .map(|d| d.nameservers.join(", "))
                .unwrap_or_default();
            let days = domain.days_until_expiry(today);
            let expiry_style = if is_selected {
                base
            } else {
                icon::expiry_tone(days, domain.is_expiring_soon(today)).style()
            };

            let line = Line::from(vec![
                Span::styled(if is_selected { "▶ " } else { "  " }, base),
                icon::service_status(domain.status).span(),
                Span::styled(" ", base),
                Span::styled(pad_to_width(&domain.name, DOMAIN_WIDTH), base),
                Span::styled(
                    pad_to_width(domain.status.display_name(), STATUS_WIDTH),
                    base,
                ),
                Span::styled(
                    pad_to_width(&domain.expiry_date.to_string(), EXPIRY_WIDTH),
                    expiry_style,
                ),
                Span::styled(
                    pad_to_width(lock, LOCK_WIDTH),
                    if is_selected {
                        base
                    } else {
                        Style::default().fg(lock_color)
                    },
                ),
                Span::styled(truncate_to_width(&nameservers, ns_width), dim),
            ]);

            ListItem::new(line)
        })
        .collect();

    let list = List::new(items).highlight_style(Style::default());

    let mut state = ListState::default();
    state.select(Some(selected));

    frame.render_stateful_widget(list, area, &mut state);
}
